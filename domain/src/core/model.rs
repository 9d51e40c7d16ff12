//! Model value object representing a chat completion model

/// Chat completion models known to the quote provider (Value Object)
///
/// Unknown identifiers are carried through as [`Model::Custom`] so a new
/// model can be selected from configuration without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41Mini,
    Gpt41,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1" => Model::Gpt41,
            other => Model::Custom(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt4oMini);
        assert_eq!(Model::default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn test_known_model_parses() {
        let model: Model = "gpt-4o".parse().unwrap();
        assert_eq!(model, Model::Gpt4o);
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "o3-mini".parse().unwrap();
        assert_eq!(model, Model::Custom("o3-mini".to_string()));
        assert_eq!(model.to_string(), "o3-mini");
    }

    #[test]
    fn test_blank_falls_back_to_default() {
        let model: Model = "  ".parse().unwrap();
        assert_eq!(model, Model::default());
    }
}
