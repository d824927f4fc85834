//! Command-line interface for the QR wizard
//!
//! Running with no subcommand launches the TUI wizard. The `generate`
//! subcommand drives the same validation, request assembly, and client
//! headlessly for scripting.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_ENDPOINT;

/// QR Wizard - a guided QR code generator in your terminal
#[derive(Parser)]
#[command(name = "qrwizard")]
#[command(about = "A guided, multi-step QR code generator backed by a generation service")]
#[command(version)]
pub struct Cli {
    /// Generation service endpoint
    #[arg(long, global = true, env = "QRWIZARD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory downloaded images are saved into
    #[arg(long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a QR code without the TUI
    Generate {
        #[command(subcommand)]
        content: ContentCommands,
    },
}

#[derive(Subcommand)]
pub enum ContentCommands {
    /// Encode a URL or free text
    Url {
        /// The URL or text to encode
        data: String,

        #[command(flatten)]
        design: DesignArgs,
    },
    /// Encode WiFi network credentials
    Wifi {
        /// Network name (SSID)
        #[arg(long)]
        ssid: String,

        /// Network password (empty for open networks)
        #[arg(long, default_value = "")]
        password: String,

        /// Security mode (WPA, WEP, nopass)
        #[arg(long, default_value = "WPA")]
        security: String,

        /// Whether the network is hidden
        #[arg(long)]
        hidden: bool,

        #[command(flatten)]
        design: DesignArgs,
    },
    /// Encode a contact card
    Vcard {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Company (optional)
        #[arg(long, default_value = "")]
        company: String,

        /// Job title (optional)
        #[arg(long, default_value = "")]
        title: String,

        #[command(flatten)]
        design: DesignArgs,
    },
}

/// Design options shared by every content type
#[derive(Args)]
pub struct DesignArgs {
    /// Foreground color
    #[arg(long, default_value = "#000000")]
    pub fill_color: String,

    /// Background color
    #[arg(long, default_value = "#ffffff")]
    pub back_color: String,

    /// Error-correction level (L, M, Q, H)
    #[arg(long, default_value = "M")]
    pub error_level: String,

    /// Text label placed below the code
    #[arg(long, default_value = "")]
    pub label: String,

    /// Logo image pasted into the center
    #[arg(long)]
    pub logo: Option<PathBuf>,
}
