use crate::{Params, SimError};

/// Which ball pairs the ball-ball rule visits within one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairPolicy {
    /// Every ordered pair (i, j), i != j. An overlapping pair can be
    /// resolved twice in a frame; the second resolution wins.
    #[default]
    OrderedPairs,
    /// Each unordered pair is resolved at most once per frame.
    UnorderedOnce,
}

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub drag_coefficient: f32,
    /// Integration step per frame, in (0, `Params::MAX_TIME_STEP`]
    pub time_step: f32,
    pub pair_policy: PairPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            drag_coefficient: Params::DRAG_COEFFICIENT,
            time_step: Params::TIME_STEP,
            pair_policy: PairPolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that would make the stepper produce non-finite state
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.drag_coefficient.is_finite() || !(0.0..1.0).contains(&self.drag_coefficient) {
            return Err(SimError::InvalidConfig(format!(
                "drag coefficient must be in [0, 1), got {}",
                self.drag_coefficient
            )));
        }
        if !(self.time_step > 0.0 && self.time_step <= Params::MAX_TIME_STEP) {
            return Err(SimError::InvalidConfig(format!(
                "time step must be in (0, {}], got {}",
                Params::MAX_TIME_STEP,
                self.time_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_params() {
        let config = Config::new();
        assert_eq!(config.table_width, 84.0);
        assert_eq!(config.table_height, 56.0);
        assert_eq!(config.drag_coefficient, 0.05);
        assert_eq!(config.time_step, 1.0);
        assert_eq!(config.pair_policy, PairPolicy::OrderedPairs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_drag() {
        let mut config = Config::new();
        config.drag_coefficient = 1.0;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));

        config.drag_coefficient = f32::NAN;
        assert!(config.validate().is_err());

        config.drag_coefficient = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_time_step() {
        let mut config = Config::new();
        config.time_step = 0.0;
        assert!(config.validate().is_err());

        config.time_step = f32::INFINITY;
        assert!(config.validate().is_err());

        config.time_step = f32::NAN;
        assert!(config.validate().is_err());

        config.time_step = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_time_step_longer_than_a_frame() {
        let mut config = Config::new();
        config.time_step = Params::MAX_TIME_STEP;
        assert!(config.validate().is_ok());

        config.time_step = 10.0;
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_drag_is_allowed() {
        let mut config = Config::new();
        config.drag_coefficient = 0.0;
        assert!(config.validate().is_ok());
    }
}
