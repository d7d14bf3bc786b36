use super::center::CenterPolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid contact threshold {0}: must be a finite number")]
    InvalidThreshold(f64),
}

/// Parameters of a contact-map run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactMapConfig {
    /// Inclusive distance cutoff, in the coordinate units of the input.
    pub threshold: f64,
    pub center_policy: CenterPolicy,
}

impl ContactMapConfig {
    /// Checks a config that may not have come through the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold(self.threshold))
        }
    }
}

#[derive(Default)]
pub struct ContactMapConfigBuilder {
    threshold: Option<f64>,
    center_policy: Option<CenterPolicy>,
}

impl ContactMapConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
    pub fn center_policy(mut self, policy: CenterPolicy) -> Self {
        self.center_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<ContactMapConfig, ConfigError> {
        let threshold = self
            .threshold
            .ok_or(ConfigError::MissingParameter("threshold"))?;
        let config = ContactMapConfig {
            threshold,
            center_policy: self.center_policy.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
