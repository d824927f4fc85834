//! Pure field validation for the content step
//!
//! Decides whether the user may advance from the content step to the design
//! step. No state is mutated here; the caller surfaces the failure message
//! and refuses the transition.

use crate::error::{QrWizardError, Result};
use crate::types::ContentType;
use crate::wizard::ContentForm;

/// Validate the content fields for the selected type.
///
/// Rules:
/// - `url`: the text field, trimmed, must be non-empty.
/// - `wifi`: the SSID, trimmed, must be non-empty. Password, security mode,
///   and the hidden flag are never validated (open networks have no
///   password; the other two have defaults).
/// - `vcard`: name, phone, and email must all be non-empty after trimming.
///   The failure message asks for all three together rather than naming the
///   missing one.
///
/// Reaching this with no selected type is a caller bug; the step-1 guard
/// already requires a selection.
pub fn validate_content(content_type: ContentType, content: &ContentForm) -> Result<()> {
    match content_type {
        ContentType::Url => {
            if content.url_data.trim().is_empty() {
                return Err(QrWizardError::validation("Please enter a URL or text"));
            }
        }
        ContentType::Wifi => {
            if content.wifi_ssid.trim().is_empty() {
                return Err(QrWizardError::validation("Please enter WiFi SSID"));
            }
        }
        ContentType::Vcard => {
            let complete = !content.vcard_name.trim().is_empty()
                && !content.vcard_phone.trim().is_empty()
                && !content.vcard_email.trim().is_empty();
            if !complete {
                return Err(QrWizardError::validation(
                    "Please fill in Name, Phone, and Email fields",
                ));
            }
        }
    }
    Ok(())
}
