use crate::error::{PathfindingError, Result};
use crate::{DEFAULT_HEIGHT, DEFAULT_OBSTACLE_FRACTION, DEFAULT_WIDTH};

/// Parameters for random grid generation. A `seed` of [None] draws the obstacle layout from
/// entropy, any fixed seed reproduces the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub obstacle_fraction: f64,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacle_fraction: DEFAULT_OBSTACLE_FRACTION,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            ..GridConfig::default()
        }
    }
    pub fn with_obstacle_fraction(mut self, obstacle_fraction: f64) -> GridConfig {
        self.obstacle_fraction = obstacle_fraction;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> GridConfig {
        self.seed = Some(seed);
        self
    }

    /// Rejects empty grids and obstacle fractions outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PathfindingError::InvalidConfiguration(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as usize
            || self.height > i32::MAX as usize
            || self.width.checked_mul(self.height).is_none()
        {
            return Err(PathfindingError::InvalidConfiguration(format!(
                "grid of {}x{} cells is too large",
                self.width, self.height
            )));
        }
        if !(0.0..1.0).contains(&self.obstacle_fraction) {
            return Err(PathfindingError::InvalidConfiguration(format!(
                "obstacle fraction must lie in [0, 1), got {}",
                self.obstacle_fraction
            )));
        }
        Ok(())
    }

    /// Number of cells blocked by generation, `floor(width * height * obstacle_fraction)`.
    pub fn obstacle_count(&self) -> usize {
        ((self.width * self.height) as f64 * self.obstacle_fraction).floor() as usize
    }
}
