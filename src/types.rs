//! Type-safe wire values for the QR wizard
//!
//! This module replaces stringly-typed form values with proper Rust enums
//! that provide compile-time validation and exhaustive matching. The strum
//! serializations are the exact tags the generation service expects.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The category of data being encoded.
///
/// Drives which content fields are visible, which validation branch runs,
/// and which fields the request builder assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    /// A link or free text
    #[strum(serialize = "url")]
    Url,
    /// WiFi network credentials
    #[strum(serialize = "wifi")]
    Wifi,
    /// Contact card (name, phone, email, company, title)
    #[strum(serialize = "vcard")]
    Vcard,
}

impl ContentType {
    /// Human-readable card title for the type selection step.
    pub fn card_title(&self) -> &'static str {
        match self {
            Self::Url => "URL / Text",
            Self::Wifi => "WiFi Network",
            Self::Vcard => "Contact (vCard)",
        }
    }

    /// One-line description shown under the card title.
    pub fn card_description(&self) -> &'static str {
        match self {
            Self::Url => "Encode a link or any free text",
            Self::Wifi => "Share network credentials for easy connection",
            Self::Vcard => "Share contact details as a scannable card",
        }
    }
}

/// WiFi security mode, passed through to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum WifiSecurity {
    #[default]
    #[strum(serialize = "WPA")]
    Wpa,
    #[strum(serialize = "WEP")]
    Wep,
    /// Open network, no password
    #[strum(serialize = "nopass")]
    Open,
}

/// Error-correction level for the generated code.
///
/// Passed through opaquely to the generation service; higher levels survive
/// more damage at the cost of density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum ErrorCorrection {
    #[strum(serialize = "L")]
    Low,
    #[default]
    #[strum(serialize = "M")]
    Medium,
    #[strum(serialize = "Q")]
    Quartile,
    #[strum(serialize = "H")]
    High,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_content_type_serialization() {
        assert_eq!(ContentType::Url.to_string(), "url");
        assert_eq!(ContentType::Wifi.to_string(), "wifi");
        assert_eq!(ContentType::Vcard.to_string(), "vcard");
    }

    #[test]
    fn test_content_type_parsing() {
        assert_eq!(ContentType::from_str("url").unwrap(), ContentType::Url);
        assert_eq!(ContentType::from_str("wifi").unwrap(), ContentType::Wifi);
        assert_eq!(ContentType::from_str("vcard").unwrap(), ContentType::Vcard);
        assert!(ContentType::from_str("barcode").is_err());
    }

    #[test]
    fn test_wifi_security_tags() {
        assert_eq!(WifiSecurity::Wpa.to_string(), "WPA");
        assert_eq!(WifiSecurity::Wep.to_string(), "WEP");
        assert_eq!(WifiSecurity::Open.to_string(), "nopass");
    }

    #[test]
    fn test_error_correction_iteration() {
        let levels: Vec<String> = ErrorCorrection::iter().map(|l| l.to_string()).collect();
        assert_eq!(levels, vec!["L", "M", "Q", "H"]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(WifiSecurity::default(), WifiSecurity::Wpa);
        assert_eq!(ErrorCorrection::default(), ErrorCorrection::Medium);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = ContentType::Wifi;
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
