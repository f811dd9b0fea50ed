use super::{ACCUMULATOR_SEED, UpdateRule, scaled_by_root};
use crate::field::Vector2;
use crate::optimizer::Hyperparameters;

/// RMSProp：
/// - s = ρ * s + (1 - ρ) * g²
/// - θ = θ - α * g / √s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmsProp {
    squared: Vector2,
}

impl Default for RmsProp {
    fn default() -> Self {
        Self {
            squared: Vector2::splat(ACCUMULATOR_SEED),
        }
    }
}

impl RmsProp {
    /// 衰减后的平方梯度累积量
    pub const fn squared(&self) -> Vector2 {
        self.squared
    }
}

impl UpdateRule for RmsProp {
    fn reset(&mut self, _hyperparameters: &Hyperparameters) {
        self.squared = Vector2::splat(ACCUMULATOR_SEED);
    }

    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2 {
        let decay = hyperparameters.decay_rate;
        self.squared = self.squared * decay + g.hadamard(g) * (1.0 - decay);
        scaled_by_root(g, self.squared, hyperparameters.learning_rate)
    }
}
