//! Property-based tests for the QR wizard
//!
//! Uses proptest for testing invariants and edge cases:
//! - Enum string round-trips (parse -> to_string -> parse)
//! - Validator behavior over arbitrary whitespace and text
//! - Submission assembly invariants

use proptest::prelude::*;

use qrwizard::types::{ContentType, ErrorCorrection, WifiSecurity};
use qrwizard::validation::validate_content;
use qrwizard::wizard::{ContentForm, DesignForm};

// =============================================================================
// Enum round-trips
// =============================================================================

fn content_type_strategy() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::Url),
        Just(ContentType::Wifi),
        Just(ContentType::Vcard),
    ]
}

fn error_correction_strategy() -> impl Strategy<Value = ErrorCorrection> {
    prop_oneof![
        Just(ErrorCorrection::Low),
        Just(ErrorCorrection::Medium),
        Just(ErrorCorrection::Quartile),
        Just(ErrorCorrection::High),
    ]
}

fn wifi_security_strategy() -> impl Strategy<Value = WifiSecurity> {
    prop_oneof![
        Just(WifiSecurity::Wpa),
        Just(WifiSecurity::Wep),
        Just(WifiSecurity::Open),
    ]
}

proptest! {
    /// ContentType: to_string -> parse round-trip is identity
    #[test]
    fn content_type_roundtrip(ty in content_type_strategy()) {
        let s = ty.to_string();
        let parsed: ContentType = s.parse().expect("Should parse");
        prop_assert_eq!(ty, parsed);
    }

    /// ErrorCorrection: serialized tag is a single uppercase letter
    #[test]
    fn error_correction_tag_shape(level in error_correction_strategy()) {
        let s = level.to_string();
        prop_assert_eq!(s.len(), 1);
        prop_assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    /// WifiSecurity: to_string -> parse round-trip is identity
    #[test]
    fn wifi_security_roundtrip(mode in wifi_security_strategy()) {
        let s = mode.to_string();
        let parsed: WifiSecurity = s.parse().expect("Should parse");
        prop_assert_eq!(mode, parsed);
    }
}

// =============================================================================
// Validator properties
// =============================================================================

proptest! {
    /// Whitespace-only input never passes the URL validator
    #[test]
    fn url_whitespace_always_fails(ws in "[ \t\r\n]{0,12}") {
        let content = ContentForm { url_data: ws, ..Default::default() };
        prop_assert!(validate_content(ContentType::Url, &content).is_err());
    }

    /// Input with any non-whitespace character always passes the URL validator
    #[test]
    fn url_nonblank_always_passes(
        pad_l in "[ \t]{0,4}",
        core in "[a-zA-Z0-9:/.?=-]{1,40}",
        pad_r in "[ \t]{0,4}",
    ) {
        let content = ContentForm {
            url_data: format!("{}{}{}", pad_l, core, pad_r),
            ..Default::default()
        };
        prop_assert!(validate_content(ContentType::Url, &content).is_ok());
    }

    /// WiFi validation depends only on the SSID
    #[test]
    fn wifi_validity_tracks_ssid(
        ssid in "[ \t]{0,3}[a-zA-Z0-9_-]{0,20}",
        password in ".{0,30}",
        hidden in any::<bool>(),
    ) {
        let expect_ok = !ssid.trim().is_empty();
        let content = ContentForm {
            wifi_ssid: ssid,
            wifi_password: password,
            wifi_hidden: hidden,
            ..Default::default()
        };
        prop_assert_eq!(validate_content(ContentType::Wifi, &content).is_ok(), expect_ok);
    }

    /// vCard passes exactly when all three required fields are non-blank
    #[test]
    fn vcard_requires_all_three(
        name in "[a-zA-Z ]{0,10}",
        phone in "[0-9 ]{0,10}",
        email in "[a-z@. ]{0,10}",
    ) {
        let expect_ok = !name.trim().is_empty()
            && !phone.trim().is_empty()
            && !email.trim().is_empty();
        let content = ContentForm {
            vcard_name: name,
            vcard_phone: phone,
            vcard_email: email,
            ..Default::default()
        };
        prop_assert_eq!(validate_content(ContentType::Vcard, &content).is_ok(), expect_ok);
    }
}

// =============================================================================
// Submission invariants
// =============================================================================

proptest! {
    /// Every submission carries the type tag and all four design fields,
    /// and the password field survives untrimmed for wifi
    #[test]
    fn submission_always_carries_design_fields(
        ty in content_type_strategy(),
        password in "[ ]{0,2}[a-z]{0,10}[ ]{0,2}",
        label in "[ a-zA-Z]{0,12}",
    ) {
        use qrwizard::request::Submission;

        let content = ContentForm {
            url_data: "x".to_string(),
            wifi_ssid: "net".to_string(),
            wifi_password: password.clone(),
            vcard_name: "a".to_string(),
            vcard_phone: "1".to_string(),
            vcard_email: "a@b".to_string(),
            ..Default::default()
        };
        let design = DesignForm { label, ..Default::default() };
        let submission = Submission::build(ty, &content, &design);

        let ty_string = ty.to_string();
        prop_assert_eq!(submission.field("type"), Some(ty_string.as_str()));
        for name in ["fill_color", "back_color", "error_level", "label"] {
            prop_assert!(submission.field(name).is_some());
        }
        if ty == ContentType::Wifi {
            prop_assert_eq!(submission.field("password"), Some(password.as_str()));
        }
    }
}
