use thiserror::Error;

/// Errors raised when generation parameters fail validation.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("grid size must be positive, got {0}")]
    ZeroSize(usize),
    #[error("height factor must be positive, got {0}")]
    ZeroHeightFactor(u32),
    #[error("octave count must be positive, got {0}")]
    ZeroOctaves(u32),
    #[error("water level must lie in [0, 1], got {0}")]
    WaterLevelOutOfRange(f64),
}

/// Immutable configuration for one generation run.
///
/// Together with the seed this fully determines the heightfield and the
/// biome color thresholds.
#[derive(Clone, Debug)]
pub struct GenParams {
    /// Terrain edge length (the grid is size x size columns)
    pub size: usize,
    /// Maximum terrain height after normalization
    pub height_factor: u32,
    /// Number of noise octaves (more = finer detail)
    pub octaves: u32,
    /// Seed for the noise field; None means non-reproducible
    pub seed: Option<u64>,
    /// Fraction of the max height below which terrain is submerged
    pub water_level: f64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            size: 100,
            height_factor: 50,
            octaves: 5,
            seed: None,
            water_level: 0.2,
        }
    }
}

impl GenParams {
    /// Check parameter ranges before any grid is allocated.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.size == 0 {
            return Err(ParamError::ZeroSize(self.size));
        }
        if self.height_factor == 0 {
            return Err(ParamError::ZeroHeightFactor(self.height_factor));
        }
        if self.octaves == 0 {
            return Err(ParamError::ZeroOctaves(self.octaves));
        }
        if !(0.0..=1.0).contains(&self.water_level) || !self.water_level.is_finite() {
            return Err(ParamError::WaterLevelOutOfRange(self.water_level));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GenParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_size() {
        let params = GenParams {
            size: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::ZeroSize(0)));
    }

    #[test]
    fn test_rejects_zero_height_factor() {
        let params = GenParams {
            height_factor: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::ZeroHeightFactor(0)));
    }

    #[test]
    fn test_rejects_zero_octaves() {
        let params = GenParams {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ParamError::ZeroOctaves(0)));
    }

    #[test]
    fn test_rejects_water_level_out_of_range() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let params = GenParams {
                water_level: bad,
                ..Default::default()
            };
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn test_water_level_bounds_inclusive() {
        for ok in [0.0, 1.0, 0.5] {
            let params = GenParams {
                water_level: ok,
                ..Default::default()
            };
            assert_eq!(params.validate(), Ok(()));
        }
    }
}
