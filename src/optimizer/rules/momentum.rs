use super::UpdateRule;
use crate::field::Vector2;
use crate::optimizer::Hyperparameters;

/// 动量：
/// - v = μ * v - α * g
/// - θ = θ + v
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Momentum {
    velocity: Vector2,
}

impl Momentum {
    /// 当前速度（调试和可视化用）
    pub const fn velocity(&self) -> Vector2 {
        self.velocity
    }
}

impl UpdateRule for Momentum {
    fn reset(&mut self, _hyperparameters: &Hyperparameters) {
        self.velocity = Vector2::ZERO;
    }

    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2 {
        self.velocity = self.velocity * hyperparameters.momentum - g * hyperparameters.learning_rate;
        self.velocity
    }
}
