//! Multipart submission assembly
//!
//! Builds the structured submission sent to the generation service. Assembly
//! is pure and inspectable; conversion to an HTTP multipart form (including
//! reading the optional logo file) happens only at send time. No validation
//! is re-performed here; the content step's validator already gated entry.

use std::path::{Path, PathBuf};

use reqwest::blocking::multipart::{Form, Part};
use tracing::debug;

use crate::error::Result;
use crate::types::ContentType;
use crate::wizard::{ContentForm, DesignForm};

/// A structured submission for the generation service.
///
/// Text fields are held as ordered `(name, value)` pairs exactly as they go
/// on the wire; the logo rides along as a path and is read when the form is
/// materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    fields: Vec<(&'static str, String)>,
    logo: Option<PathBuf>,
}

impl Submission {
    /// Assemble a submission from the selected type, its content fields, and
    /// the shared design options.
    ///
    /// Every text field is trimmed except the WiFi password, which is sent
    /// raw: leading and trailing spaces are legal in WPA passphrases, so
    /// trimming would silently corrupt them.
    pub fn build(content_type: ContentType, content: &ContentForm, design: &DesignForm) -> Self {
        let mut fields = vec![("type", content_type.to_string())];

        match content_type {
            ContentType::Url => {
                fields.push(("data", content.url_data.trim().to_string()));
            }
            ContentType::Wifi => {
                fields.push(("ssid", content.wifi_ssid.trim().to_string()));
                fields.push(("password", content.wifi_password.clone()));
                fields.push(("security", content.wifi_security.to_string()));
                fields.push(("hidden", content.wifi_hidden.to_string()));
            }
            ContentType::Vcard => {
                fields.push(("name", content.vcard_name.trim().to_string()));
                fields.push(("phone", content.vcard_phone.trim().to_string()));
                fields.push(("email", content.vcard_email.trim().to_string()));
                fields.push(("company", content.vcard_company.trim().to_string()));
                fields.push(("title", content.vcard_title.trim().to_string()));
            }
        }

        // Design options always ride along; the label is included even when
        // empty, matching the service contract.
        fields.push(("fill_color", design.fill_color.trim().to_string()));
        fields.push(("back_color", design.back_color.trim().to_string()));
        fields.push(("error_level", design.error_level.to_string()));
        fields.push(("label", design.label.trim().to_string()));

        let logo_path = design.logo_path.trim();
        let logo = if logo_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(logo_path))
        };

        Self { fields, logo }
    }

    /// All text fields in wire order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Look up a single field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The logo file attached to this submission, if any.
    pub fn logo(&self) -> Option<&Path> {
        self.logo.as_deref()
    }

    /// Materialize the multipart form, reading the logo file if one was
    /// selected.
    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        if let Some(path) = self.logo {
            debug!("attaching logo from {}", path.display());
            let bytes = std::fs::read(&path)?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "logo".to_string());
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime_for_path(&path))?;
            form = form.part("logo", part);
        }

        Ok(form)
    }
}

/// Guess the logo's mime type from its file extension.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
