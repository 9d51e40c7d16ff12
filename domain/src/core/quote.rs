//! Quote value object

/// A generated quote (Value Object)
///
/// Produced once per run and sent unchanged to every recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the quote text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Quote {
    fn from(s: &str) -> Self {
        Quote::new(s)
    }
}

impl From<String> for Quote {
    fn from(s: String) -> Self {
        Quote::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_text_is_preserved() {
        let quote = Quote::from("  Patience is also a form of action. ");
        assert_eq!(quote.text(), "  Patience is also a form of action. ");
        assert_eq!(quote.to_string(), quote.text());
    }
}
