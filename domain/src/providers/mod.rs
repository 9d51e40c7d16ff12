//! Provider kinds (provider-neutral, serde-free).
//!
//! Selection strings come from configuration. They are trimmed and matched
//! case-insensitively; anything unrecognized resolves to the mock variant.

/// Which quote provider a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteProviderKind {
    #[default]
    Mock,
    OpenAi,
}

impl QuoteProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteProviderKind::Mock => "mock",
            QuoteProviderKind::OpenAi => "openai",
        }
    }

    /// Resolve a configured selection, defaulting to [`QuoteProviderKind::Mock`].
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("openai") => QuoteProviderKind::OpenAi,
            _ => QuoteProviderKind::Mock,
        }
    }
}

impl std::fmt::Display for QuoteProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which notifier a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotifierKind {
    #[default]
    Mock,
    Sns,
}

impl NotifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierKind::Mock => "mock",
            NotifierKind::Sns => "sns",
        }
    }

    /// Resolve a configured selection, defaulting to [`NotifierKind::Mock`].
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("sns") => NotifierKind::Sns,
            _ => NotifierKind::Mock,
        }
    }
}

impl std::fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_provider_selection_is_case_insensitive() {
        assert_eq!(
            QuoteProviderKind::from_selection(Some("OpenAI")),
            QuoteProviderKind::OpenAi
        );
        assert_eq!(
            QuoteProviderKind::from_selection(Some("openai")),
            QuoteProviderKind::OpenAi
        );
    }

    #[test]
    fn selection_ignores_surrounding_whitespace() {
        assert_eq!(
            QuoteProviderKind::from_selection(Some(" openai ")),
            QuoteProviderKind::OpenAi
        );
        assert_eq!(NotifierKind::from_selection(Some("sns\n")), NotifierKind::Sns);
        assert_eq!(QuoteProviderKind::from_selection(Some("   ")), QuoteProviderKind::Mock);
    }

    #[test]
    fn unknown_or_missing_quote_provider_is_mock() {
        assert_eq!(QuoteProviderKind::from_selection(None), QuoteProviderKind::Mock);
        assert_eq!(QuoteProviderKind::from_selection(Some("")), QuoteProviderKind::Mock);
        assert_eq!(
            QuoteProviderKind::from_selection(Some("anthropic")),
            QuoteProviderKind::Mock
        );
    }

    #[test]
    fn notifier_selection_defaults_to_mock() {
        assert_eq!(NotifierKind::from_selection(Some("SNS")), NotifierKind::Sns);
        assert_eq!(NotifierKind::from_selection(Some("twilio")), NotifierKind::Mock);
        assert_eq!(NotifierKind::from_selection(None), NotifierKind::Mock);
    }

    #[test]
    fn kinds_display_their_selection_name() {
        assert_eq!(QuoteProviderKind::OpenAi.to_string(), "openai");
        assert_eq!(NotifierKind::Sns.to_string(), "sns");
        assert_eq!(NotifierKind::default().to_string(), "mock");
    }
}
