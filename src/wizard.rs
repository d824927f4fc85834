//! Wizard state machine and form data
//!
//! The wizard progresses through four sequential steps. Forward transitions
//! are guarded by the caller (type selected, fields valid, generation
//! succeeded); backward transitions are always allowed.
//!
//! # State Transitions
//!
//! ```text
//! SelectType -> Content -> Design -> Result
//! ```
//!
//! # Invariants
//!
//! - Cannot advance past `SelectType` without a selected content type
//! - Cannot advance past `Content` unless the active type's fields validate
//! - Cannot reach `Result` except through a successful generation
//! - Exactly one step panel is rendered at a time

use crate::types::{ContentType, ErrorCorrection, WifiSecurity};
use strum::IntoEnumIterator;

/// One page of the sequential wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Pick the content type to encode.
    #[default]
    SelectType,
    /// Enter the type-specific content fields.
    Content,
    /// Choose design options and trigger generation.
    Design,
    /// Preview and download the generated code.
    Result,
}

impl WizardStep {
    /// Get the next step in the wizard sequence.
    ///
    /// Returns `None` if at the final step. Callers must validate before
    /// moving forward; this method performs no guarding itself.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::SelectType => Some(Self::Content),
            Self::Content => Some(Self::Design),
            Self::Design => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Get the previous step in the wizard sequence.
    ///
    /// Going back is always allowed and requires no validation.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::SelectType => None,
            Self::Content => Some(Self::SelectType),
            Self::Design => Some(Self::Content),
            Self::Result => Some(Self::Design),
        }
    }

    /// Check if the current step allows going back.
    pub fn can_go_back(&self) -> bool {
        self.previous().is_some()
    }

    /// Get the display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectType => "Select Type",
            Self::Content => "Add Content",
            Self::Design => "Design",
            Self::Result => "Download",
        }
    }

    /// Get the step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::SelectType => 1,
            Self::Content => 2,
            Self::Design => 3,
            Self::Result => 4,
        }
    }

    /// All steps in wizard order.
    pub fn all() -> &'static [Self] {
        &[Self::SelectType, Self::Content, Self::Design, Self::Result]
    }

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 4;
}

/// Visual classification of one stepper indicator relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIndicator {
    /// The step lies behind the current one.
    Completed,
    /// The step is the current one.
    Active,
    /// The step lies ahead of the current one.
    Upcoming,
}

impl StepIndicator {
    /// Classify `step` relative to `current`.
    ///
    /// Completed iff `step < current`, active iff equal, upcoming otherwise.
    pub fn for_step(step: WizardStep, current: WizardStep) -> Self {
        use std::cmp::Ordering;
        match step.step_number().cmp(&current.step_number()) {
            Ordering::Less => Self::Completed,
            Ordering::Equal => Self::Active,
            Ordering::Greater => Self::Upcoming,
        }
    }
}

/// Content field identifiers for the content step.
///
/// Which fields are shown depends on the selected content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    UrlData,
    WifiSsid,
    WifiPassword,
    WifiSecurity,
    WifiHidden,
    VcardName,
    VcardPhone,
    VcardEmail,
    VcardCompany,
    VcardTitle,
}

impl ContentField {
    /// Fields shown for the given content type, in display order.
    pub fn for_type(content_type: ContentType) -> &'static [Self] {
        match content_type {
            ContentType::Url => &[Self::UrlData],
            ContentType::Wifi => &[
                Self::WifiSsid,
                Self::WifiPassword,
                Self::WifiSecurity,
                Self::WifiHidden,
            ],
            ContentType::Vcard => &[
                Self::VcardName,
                Self::VcardPhone,
                Self::VcardEmail,
                Self::VcardCompany,
                Self::VcardTitle,
            ],
        }
    }

    /// Get field label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UrlData => "URL or Text",
            Self::WifiSsid => "Network Name (SSID)",
            Self::WifiPassword => "Password",
            Self::WifiSecurity => "Security",
            Self::WifiHidden => "Hidden Network",
            Self::VcardName => "Name",
            Self::VcardPhone => "Phone",
            Self::VcardEmail => "Email",
            Self::VcardCompany => "Company (optional)",
            Self::VcardTitle => "Title (optional)",
        }
    }

    /// Check if field input should be masked on screen.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::WifiPassword)
    }

    /// Check if this is a free-text field (as opposed to a toggle/selection).
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::WifiSecurity | Self::WifiHidden)
    }
}

/// Design field identifiers for the design step.
///
/// Shared across all content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignField {
    FillColor,
    BackColor,
    ErrorLevel,
    Label,
    LogoPath,
}

impl DesignField {
    /// All design fields in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::FillColor,
            Self::BackColor,
            Self::ErrorLevel,
            Self::Label,
            Self::LogoPath,
        ]
    }

    /// Get field label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FillColor => "Fill Color",
            Self::BackColor => "Background Color",
            Self::ErrorLevel => "Error Correction",
            Self::Label => "Label (optional)",
            Self::LogoPath => "Logo File (optional)",
        }
    }

    /// Check if this is a free-text field.
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::ErrorLevel)
    }
}

pub const DEFAULT_FILL_COLOR: &str = "#000000";
pub const DEFAULT_BACK_COLOR: &str = "#ffffff";

/// Raw values of the content forms.
///
/// All three type-specific forms are held at once, mirroring the three form
/// panels; only the selected type's fields are shown, validated, and
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentForm {
    pub url_data: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub wifi_security: WifiSecurity,
    pub wifi_hidden: bool,
    pub vcard_name: String,
    pub vcard_phone: String,
    pub vcard_email: String,
    pub vcard_company: String,
    pub vcard_title: String,
}

impl ContentForm {
    /// Mutable access to a text field's value, `None` for non-text fields.
    pub fn text_mut(&mut self, field: ContentField) -> Option<&mut String> {
        match field {
            ContentField::UrlData => Some(&mut self.url_data),
            ContentField::WifiSsid => Some(&mut self.wifi_ssid),
            ContentField::WifiPassword => Some(&mut self.wifi_password),
            ContentField::VcardName => Some(&mut self.vcard_name),
            ContentField::VcardPhone => Some(&mut self.vcard_phone),
            ContentField::VcardEmail => Some(&mut self.vcard_email),
            ContentField::VcardCompany => Some(&mut self.vcard_company),
            ContentField::VcardTitle => Some(&mut self.vcard_title),
            ContentField::WifiSecurity | ContentField::WifiHidden => None,
        }
    }

    /// Display value for a field (unmasked; masking is a render concern).
    pub fn display_value(&self, field: ContentField) -> String {
        match field {
            ContentField::UrlData => self.url_data.clone(),
            ContentField::WifiSsid => self.wifi_ssid.clone(),
            ContentField::WifiPassword => self.wifi_password.clone(),
            ContentField::WifiSecurity => self.wifi_security.to_string(),
            ContentField::WifiHidden => {
                if self.wifi_hidden { "Yes" } else { "No" }.to_string()
            }
            ContentField::VcardName => self.vcard_name.clone(),
            ContentField::VcardPhone => self.vcard_phone.clone(),
            ContentField::VcardEmail => self.vcard_email.clone(),
            ContentField::VcardCompany => self.vcard_company.clone(),
            ContentField::VcardTitle => self.vcard_title.clone(),
        }
    }

    /// Cycle a non-text field (security mode forward/backward, hidden toggle).
    pub fn cycle(&mut self, field: ContentField, forward: bool) {
        match field {
            ContentField::WifiSecurity => {
                self.wifi_security = cycled(self.wifi_security, forward);
            }
            ContentField::WifiHidden => self.wifi_hidden = !self.wifi_hidden,
            _ => {}
        }
    }
}

/// Raw values of the design options form, shared by all content types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignForm {
    pub fill_color: String,
    pub back_color: String,
    pub error_level: ErrorCorrection,
    pub label: String,
    /// Path to an optional logo image; empty means no logo selected.
    pub logo_path: String,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            back_color: DEFAULT_BACK_COLOR.to_string(),
            error_level: ErrorCorrection::default(),
            label: String::new(),
            logo_path: String::new(),
        }
    }
}

impl DesignForm {
    /// Mutable access to a text field's value, `None` for non-text fields.
    pub fn text_mut(&mut self, field: DesignField) -> Option<&mut String> {
        match field {
            DesignField::FillColor => Some(&mut self.fill_color),
            DesignField::BackColor => Some(&mut self.back_color),
            DesignField::Label => Some(&mut self.label),
            DesignField::LogoPath => Some(&mut self.logo_path),
            DesignField::ErrorLevel => None,
        }
    }

    /// Display value for a field.
    pub fn display_value(&self, field: DesignField) -> String {
        match field {
            DesignField::FillColor => self.fill_color.clone(),
            DesignField::BackColor => self.back_color.clone(),
            DesignField::ErrorLevel => self.error_level.to_string(),
            DesignField::Label => self.label.clone(),
            DesignField::LogoPath => self.logo_path.clone(),
        }
    }

    /// Cycle the error-correction level.
    pub fn cycle(&mut self, field: DesignField, forward: bool) {
        if field == DesignField::ErrorLevel {
            self.error_level = cycled(self.error_level, forward);
        }
    }
}

/// Step through an enum's variants in iteration order, wrapping at the ends.
fn cycled<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let variants: Vec<T> = T::iter().collect();
    let pos = variants.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % variants.len()
    } else {
        (pos + variants.len() - 1) % variants.len()
    };
    variants[next]
}

/// Wizard data collected across the steps.
///
/// The selected type drives which content fields are visible, which
/// validation branch runs, and which fields are submitted. Design options
/// are always attached regardless of type.
#[derive(Debug, Clone, Default)]
pub struct WizardData {
    /// Selected content type; `None` until the user picks a card.
    pub selected_type: Option<ContentType>,
    /// Type-specific content field values.
    pub content: ContentForm,
    /// Shared design options.
    pub design: DesignForm,
}

impl WizardData {
    /// Check if a content type has been selected.
    pub fn has_selection(&self) -> bool {
        self.selected_type.is_some()
    }

    /// Restore every field to its initial value.
    ///
    /// A flat sequence of independent resets; nothing here can abort
    /// partway. The result store and step position are reset by the caller.
    pub fn reset(&mut self) {
        self.selected_type = None;
        self.content = ContentForm::default();
        self.design = DesignForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_sequence_is_linear() {
        assert_eq!(WizardStep::SelectType.next(), Some(WizardStep::Content));
        assert_eq!(WizardStep::Content.next(), Some(WizardStep::Design));
        assert_eq!(WizardStep::Design.next(), Some(WizardStep::Result));
        assert_eq!(WizardStep::Result.next(), None);
    }

    #[test]
    fn test_backward_transitions_mirror_forward() {
        for step in WizardStep::all() {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(*step));
            }
        }
        assert!(!WizardStep::SelectType.can_go_back());
        assert!(WizardStep::Result.can_go_back());
    }

    #[test]
    fn test_step_numbers_are_one_indexed() {
        let numbers: Vec<usize> = WizardStep::all().iter().map(|s| s.step_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::all().len(), WizardStep::TOTAL_STEPS);
    }

    #[test]
    fn test_indicator_classification() {
        use StepIndicator::*;
        let current = WizardStep::Design;
        assert_eq!(StepIndicator::for_step(WizardStep::SelectType, current), Completed);
        assert_eq!(StepIndicator::for_step(WizardStep::Content, current), Completed);
        assert_eq!(StepIndicator::for_step(WizardStep::Design, current), Active);
        assert_eq!(StepIndicator::for_step(WizardStep::Result, current), Upcoming);
    }

    #[test]
    fn test_content_fields_per_type() {
        assert_eq!(ContentField::for_type(ContentType::Url).len(), 1);
        assert_eq!(ContentField::for_type(ContentType::Wifi).len(), 4);
        assert_eq!(ContentField::for_type(ContentType::Vcard).len(), 5);
    }

    #[test]
    fn test_security_cycle_wraps() {
        let mut form = ContentForm::default();
        assert_eq!(form.wifi_security, WifiSecurity::Wpa);
        form.cycle(ContentField::WifiSecurity, true);
        assert_eq!(form.wifi_security, WifiSecurity::Wep);
        form.cycle(ContentField::WifiSecurity, true);
        assert_eq!(form.wifi_security, WifiSecurity::Open);
        form.cycle(ContentField::WifiSecurity, true);
        assert_eq!(form.wifi_security, WifiSecurity::Wpa);
        form.cycle(ContentField::WifiSecurity, false);
        assert_eq!(form.wifi_security, WifiSecurity::Open);
    }

    #[test]
    fn test_hidden_toggle() {
        let mut form = ContentForm::default();
        assert!(!form.wifi_hidden);
        form.cycle(ContentField::WifiHidden, true);
        assert!(form.wifi_hidden);
        assert_eq!(form.display_value(ContentField::WifiHidden), "Yes");
    }

    #[test]
    fn test_design_defaults() {
        let design = DesignForm::default();
        assert_eq!(design.fill_color, "#000000");
        assert_eq!(design.back_color, "#ffffff");
        assert_eq!(design.error_level, ErrorCorrection::Medium);
        assert!(design.label.is_empty());
        assert!(design.logo_path.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut data = WizardData::default();
        data.selected_type = Some(ContentType::Wifi);
        data.content.wifi_ssid = "HomeNet".to_string();
        data.content.wifi_hidden = true;
        data.design.fill_color = "#ff0000".to_string();
        data.design.error_level = ErrorCorrection::High;

        data.reset();

        assert!(data.selected_type.is_none());
        assert_eq!(data.content, ContentForm::default());
        assert_eq!(data.design, DesignForm::default());
    }
}
