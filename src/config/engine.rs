//! Ranking engine configuration

use serde::Deserialize;

use crate::domain::foundation::CompromiseCoefficient;

use super::error::ValidationError;

/// Engine defaults applied when a problem does not carry its own settings
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Compromise coefficient v used when the problem has none
    #[serde(default = "default_compromise")]
    pub default_compromise: f64,

    /// Rescale weights to sum to one before ranking
    #[serde(default)]
    pub normalize_weights: bool,
}

impl EngineConfig {
    /// The configured default as a validated coefficient
    pub fn compromise(&self) -> Result<CompromiseCoefficient, ValidationError> {
        CompromiseCoefficient::try_new(self.default_compromise)
            .map_err(|_| ValidationError::InvalidCompromise(self.default_compromise))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.compromise().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_compromise: default_compromise(),
            normalize_weights: false,
        }
    }
}

fn default_compromise() -> f64 {
    CompromiseCoefficient::BALANCED.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_compromise, 0.5);
        assert!(!config.normalize_weights);
        assert_eq!(config.compromise().unwrap(), CompromiseCoefficient::BALANCED);
    }

    #[test]
    fn test_validation_invalid_compromise() {
        for v in [-0.1, 1.5, f64::NAN] {
            let config = EngineConfig {
                default_compromise: v,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{"default_compromise": 0.3, "normalize_weights": true}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_compromise, 0.3);
        assert!(config.normalize_weights);
    }
}
