//! Fixed persona prompt for quote generation

/// The two-message conversation sent to a language model, plus its
/// sampling settings.
pub struct PersonaPrompt;

impl PersonaPrompt {
    /// Sampling temperature
    pub const TEMPERATURE: f64 = 0.7;

    /// Upper bound on response length, in tokens
    pub const MAX_TOKENS: u32 = 100;

    /// System prompt describing the persona
    pub fn system() -> &'static str {
        "You are Uncle Iroh from Avatar: The Last Airbender. \
Generate a wise, thoughtful quote in his style about life, \
wisdom, tea, balance, remorse, personal growth, and redemption. \
The quote should be brief (1-2 sentences) and profound."
    }

    /// User prompt requesting one quote
    pub fn user() -> &'static str {
        "Generate an Uncle Iroh quote."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_asks_for_a_brief_quote() {
        assert!(PersonaPrompt::system().contains("brief (1-2 sentences)"));
        assert!(PersonaPrompt::system().contains("wisdom, tea, balance"));
    }

    #[test]
    fn sampling_settings() {
        assert_eq!(PersonaPrompt::TEMPERATURE, 0.7);
        assert_eq!(PersonaPrompt::MAX_TOKENS, 100);
    }
}
