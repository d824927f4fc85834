//! QR Wizard - Main entry point
//!
//! Launches the guided TUI wizard, or runs a one-shot headless generation
//! via the `generate` subcommand.

mod app;
mod cli;
mod client;
mod error;
mod request;
mod result_store;
mod theme;
mod types;
mod ui;
mod validation;
mod wizard;

use std::io::stdout;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::cli::{Cli, Commands, ContentCommands, DesignArgs};
use crate::client::GenerationClient;
use crate::error::QrWizardError;
use crate::request::Submission;
use crate::result_store::ResultStore;
use crate::types::{ContentType, ErrorCorrection, WifiSecurity};
use crate::validation::validate_content;
use crate::wizard::{ContentForm, DesignForm};

/// Initialize tracing with env-filter support.
///
/// Logs go to stderr so they never corrupt the alternate screen.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    init_tracing();
    info!("QR Wizard starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Generate { content }) => {
            run_generate(&cli.endpoint, &cli.output_dir, content)?;
        }
        None => {
            info!("no command specified, launching TUI wizard");
            run_tui(&cli.endpoint, cli.output_dir.clone())?;
        }
    }

    Ok(())
}

/// Run the TUI wizard
fn run_tui(endpoint: &str, output_dir: std::path::PathBuf) -> Result<()> {
    debug!("initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| QrWizardError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| QrWizardError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| QrWizardError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = app::App::new(endpoint, output_dir);
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}

/// Run a one-shot headless generation
fn run_generate(endpoint: &str, output_dir: &Path, command: ContentCommands) -> Result<()> {
    let (content_type, content, design) = match command {
        ContentCommands::Url { data, design } => {
            let content = ContentForm {
                url_data: data,
                ..Default::default()
            };
            (ContentType::Url, content, design)
        }
        ContentCommands::Wifi {
            ssid,
            password,
            security,
            hidden,
            design,
        } => {
            let security = WifiSecurity::from_str(&security).map_err(|_| {
                QrWizardError::validation(format!(
                    "Invalid security mode '{}' (expected WPA, WEP, or nopass)",
                    security
                ))
            })?;
            let content = ContentForm {
                wifi_ssid: ssid,
                wifi_password: password,
                wifi_security: security,
                wifi_hidden: hidden,
                ..Default::default()
            };
            (ContentType::Wifi, content, design)
        }
        ContentCommands::Vcard {
            name,
            phone,
            email,
            company,
            title,
            design,
        } => {
            let content = ContentForm {
                vcard_name: name,
                vcard_phone: phone,
                vcard_email: email,
                vcard_company: company,
                vcard_title: title,
                ..Default::default()
            };
            (ContentType::Vcard, content, design)
        }
    };

    let design = design_form_from_args(design)?;
    validate_content(content_type, &content)?;

    let submission = Submission::build(content_type, &content, &design);
    let client = GenerationClient::new(endpoint);
    info!("generating {} code via {}", content_type, client.endpoint());
    let image = client.generate(submission)?;

    let mut store = ResultStore::new();
    store.bind(&image)?;
    let saved = store.download(output_dir, content_type, chrono::Utc::now().timestamp_millis())?;
    println!("✓ Saved {}", saved.display());

    Ok(())
}

/// Convert CLI design flags into the design form
fn design_form_from_args(args: DesignArgs) -> Result<DesignForm> {
    let error_level = ErrorCorrection::from_str(&args.error_level).map_err(|_| {
        QrWizardError::validation(format!(
            "Invalid error-correction level '{}' (expected L, M, Q, or H)",
            args.error_level
        ))
    })?;

    Ok(DesignForm {
        fill_color: args.fill_color,
        back_color: args.back_color,
        error_level,
        label: args.label,
        logo_path: args
            .logo
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    })
}
