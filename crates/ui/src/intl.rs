//! Localization helpers
//!
//! Message formatting is keyed by message id with a default text, so screens
//! stay readable at the call site while a catalog can override any string.
//! Date localization renders the locale's short date pattern (the "L" format).

use chrono::NaiveDate;
use std::collections::HashMap;

// ============================================================================
// Locale
// ============================================================================

/// Supported UI locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (United States)
    #[default]
    En,
    /// English (United Kingdom)
    EnGb,
    /// German
    De,
    /// Polish
    Pl,
}

impl Locale {
    /// BCP 47 language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::EnGb => "en-GB",
            Locale::De => "de",
            Locale::Pl => "pl",
        }
    }

    /// The locale's short date pattern ("L")
    pub fn short_date_pattern(&self) -> &'static str {
        match self {
            Locale::En => "%m/%d/%Y",
            Locale::EnGb => "%d/%m/%Y",
            Locale::De => "%d.%m.%Y",
            Locale::Pl => "%d.%m.%Y",
        }
    }
}

// ============================================================================
// Message Ids
// ============================================================================

/// Well-known message ids used by the editor screens
pub mod messages {
    pub const SECTION_PAGES: &str = "section.pages";
    pub const CREATE_PAGE: &str = "page.header.create";
    pub const SEO_HELPER: &str = "page.seo.helper";
    pub const VISIBLE_LABEL: &str = "page.visibility.visible";
    pub const HIDDEN_LABEL: &str = "page.visibility.hidden";
    pub const VISIBLE_FROM: &str = "page.visibility.visible-from";
}

// ============================================================================
// Intl
// ============================================================================

/// Message formatter for the active locale
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Intl {
    locale: Locale,
    overrides: HashMap<String, String>,
}

impl Intl {
    /// Create a formatter for a locale
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// The active locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Register a catalog override for a message id (builder style)
    pub fn with_message(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(id.into(), text.into());
        self
    }

    /// Format a message by id, falling back to the default text
    pub fn format_message(&self, id: &str, default: &str) -> String {
        self.overrides
            .get(id)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Render a date in the locale's short ("L") format
    pub fn localize_date(&self, date: NaiveDate) -> String {
        date.format(self.locale.short_date_pattern()).to_string()
    }

    /// Build the "will be visible from {date}" message for the visibility card
    pub fn visible_from_message(&self, date: NaiveDate) -> String {
        self.format_message(messages::VISIBLE_FROM, "will be visible from {date}")
            .replace("{date}", &self.localize_date(date))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_short_date_patterns() {
        let intl = Intl::new(Locale::En);
        assert_eq!(intl.localize_date(date()), "03/07/2026");

        let intl = Intl::new(Locale::EnGb);
        assert_eq!(intl.localize_date(date()), "07/03/2026");

        let intl = Intl::new(Locale::De);
        assert_eq!(intl.localize_date(date()), "07.03.2026");
    }

    #[test]
    fn test_format_message_falls_back_to_default() {
        let intl = Intl::new(Locale::En);
        assert_eq!(
            intl.format_message(messages::CREATE_PAGE, "Create Page"),
            "Create Page"
        );
    }

    #[test]
    fn test_format_message_uses_override() {
        let intl =
            Intl::new(Locale::De).with_message(messages::CREATE_PAGE, "Seite erstellen");
        assert_eq!(
            intl.format_message(messages::CREATE_PAGE, "Create Page"),
            "Seite erstellen"
        );
    }

    #[test]
    fn test_visible_from_message() {
        let intl = Intl::new(Locale::En);
        assert_eq!(
            intl.visible_from_message(date()),
            "will be visible from 03/07/2026"
        );

        let intl = Intl::new(Locale::De)
            .with_message(messages::VISIBLE_FROM, "sichtbar ab {date}");
        assert_eq!(intl.visible_from_message(date()), "sichtbar ab 07.03.2026");
    }
}
