use super::{ACCUMULATOR_SEED, UpdateRule, scaled_by_root};
use crate::field::Vector2;
use crate::optimizer::Hyperparameters;

/// AdaGrad：
/// - s = s + g²（逐元素）
/// - θ = θ - α * g / √s
///
/// `s`以`ACCUMULATOR_SEED`起步，故首个tick梯度为0时位移为0而非NaN。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaGrad {
    squared: Vector2,
}

impl Default for AdaGrad {
    fn default() -> Self {
        Self {
            squared: Vector2::splat(ACCUMULATOR_SEED),
        }
    }
}

impl AdaGrad {
    /// 平方梯度累积和
    pub const fn squared(&self) -> Vector2 {
        self.squared
    }
}

impl UpdateRule for AdaGrad {
    fn reset(&mut self, _hyperparameters: &Hyperparameters) {
        self.squared = Vector2::splat(ACCUMULATOR_SEED);
    }

    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2 {
        self.squared += g.hadamard(g);
        scaled_by_root(g, self.squared, hyperparameters.learning_rate)
    }
}
