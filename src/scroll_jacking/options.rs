use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("step count must be positive")]
    NoSteps,
    #[error("start offset must be a finite non-negative number, got {0}")]
    InvalidStartOffset(f64),
    #[error("step height must be a finite positive number, got {0}")]
    InvalidStepHeight(f64),
    #[error("region id must not be empty")]
    EmptyRegionId,
}

/// Construction inputs for a scroll-stepped region.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollJackingOptions {
    pub step_count: usize,
    /// Element id the host resolves to the region's bounding box.
    pub region_id: String,
    /// Pulls the region's effective top upward, giving a lead-in before snapping starts.
    pub start_offset: f64,
    /// Scroll distance shared by all steps.
    pub step_height: f64,
    pub settle_delay_ms: u32,
}

impl ScrollJackingOptions {
    pub fn new(step_count: usize, region_id: impl Into<String>) -> Self {
        Self {
            step_count,
            region_id: region_id.into(),
            start_offset: config::DEFAULT_START_OFFSET,
            step_height: config::DEFAULT_STEP_HEIGHT,
            settle_delay_ms: config::SETTLE_DELAY_MS,
        }
    }

    pub fn start_offset(mut self, start_offset: f64) -> Self {
        self.start_offset = start_offset;
        self
    }

    pub fn step_height(mut self, step_height: f64) -> Self {
        self.step_height = step_height;
        self
    }

    pub fn settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_count == 0 {
            return Err(ConfigError::NoSteps);
        }
        if self.region_id.is_empty() {
            return Err(ConfigError::EmptyRegionId);
        }
        if !self.start_offset.is_finite() || self.start_offset < 0.0 {
            return Err(ConfigError::InvalidStartOffset(self.start_offset));
        }
        if !self.step_height.is_finite() || self.step_height <= 0.0 {
            return Err(ConfigError::InvalidStepHeight(self.step_height));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let options = ScrollJackingOptions::new(5, "process");
        assert_eq!(options.start_offset, 200.0);
        assert_eq!(options.step_height, 500.0);
        assert_eq!(options.settle_delay_ms, 800);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_steps() {
        let options = ScrollJackingOptions::new(0, "process");
        assert_eq!(options.validate(), Err(ConfigError::NoSteps));
    }

    #[test]
    fn rejects_bad_distances() {
        let negative_height = ScrollJackingOptions::new(3, "process").step_height(-10.0);
        assert_eq!(
            negative_height.validate(),
            Err(ConfigError::InvalidStepHeight(-10.0))
        );

        let zero_height = ScrollJackingOptions::new(3, "process").step_height(0.0);
        assert!(zero_height.validate().is_err());

        let negative_offset = ScrollJackingOptions::new(3, "process").start_offset(-1.0);
        assert_eq!(
            negative_offset.validate(),
            Err(ConfigError::InvalidStartOffset(-1.0))
        );

        let nan_offset = ScrollJackingOptions::new(3, "process").start_offset(f64::NAN);
        assert!(matches!(
            nan_offset.validate(),
            Err(ConfigError::InvalidStartOffset(_))
        ));
    }

    #[test]
    fn rejects_empty_region_id() {
        let options = ScrollJackingOptions::new(3, "");
        assert_eq!(options.validate(), Err(ConfigError::EmptyRegionId));
    }
}
