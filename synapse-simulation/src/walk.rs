//! Clamped random-walk step.
//!
//! ```text
//! next = clamp(prev + (u - bias) * scale, floor, ceiling)
//! ```
//!
//! where `u` is uniform in [0, 1). A bias below 0.5 leans the walk upward,
//! above 0.5 leans it downward; the clamp keeps every step inside the
//! metric's bounds regardless of where the walk starts.

use rand::Rng;

/// One bounded jitter walk over a scalar gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedWalk {
    pub floor: f64,
    pub ceiling: f64,
    pub bias: f64,
    pub scale: f64,
}

impl BoundedWalk {
    pub fn new(floor: f64, ceiling: f64, bias: f64, scale: f64) -> Self {
        Self {
            floor,
            ceiling,
            bias,
            scale,
        }
    }

    /// Advance `prev` by one jitter step, clamped to [floor, ceiling].
    pub fn step<R: Rng>(&self, rng: &mut R, prev: f64) -> f64 {
        let jitter = (rng.gen::<f64>() - self.bias) * self.scale;
        (prev + jitter).clamp(self.floor, self.ceiling)
    }
}
