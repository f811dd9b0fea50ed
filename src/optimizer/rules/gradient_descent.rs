use super::UpdateRule;
use crate::field::Vector2;
use crate::optimizer::Hyperparameters;

/// 梯度下降：θ = θ - α * g
///
/// 无累积量。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradientDescent;

impl UpdateRule for GradientDescent {
    fn reset(&mut self, _hyperparameters: &Hyperparameters) {
        // 无状态
    }

    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2 {
        -(g * hyperparameters.learning_rate)
    }
}
