/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Adam 更新规则
 */

use super::{ACCUMULATOR_SEED, UpdateRule};
use crate::field::Vector2;
use crate::optimizer::Hyperparameters;

/// 最后一步除法分母里的数值稳定项（与累积量初值`ACCUMULATOR_SEED`是两回事）
pub const ADAM_EPSILON: f64 = 1e-7;

/// Adam: Adaptive Moment Estimation
/// - m = β1 * m + (1 - β1) * g
/// - s = β2 * s + (1 - β2) * g²
/// - `m_hat` = m / (1 - P1)，`s_hat` = s / (1 - P2)
/// - P1 *= β1，P2 *= β2
/// - θ = θ - α * `m_hat` / √(`s_hat` + ε)
///
/// 偏差修正用的连乘积P1、P2在重置时取当时的β1、β2（而不是1），
/// 先用旧值做修正，再乘上本tick的系数留给下一个tick。
/// 中途修改β1、β2不会回溯修正已有的连乘积。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adam {
    /// 一阶矩估计
    moment: Vector2,
    /// 二阶矩估计
    squared: Vector2,
    momentum_product: f64,
    decay_product: f64,
    /// 上一个tick的偏差修正结果
    corrected_moment: Vector2,
    corrected_squared: Vector2,
}

impl Default for Adam {
    fn default() -> Self {
        let hyperparameters = Hyperparameters::default();
        Self {
            moment: Vector2::ZERO,
            squared: Vector2::splat(ACCUMULATOR_SEED),
            momentum_product: hyperparameters.momentum,
            decay_product: hyperparameters.decay_rate,
            corrected_moment: Vector2::ZERO,
            corrected_squared: Vector2::ZERO,
        }
    }
}

impl Adam {
    pub const fn moment(&self) -> Vector2 {
        self.moment
    }

    pub const fn squared(&self) -> Vector2 {
        self.squared
    }

    /// 下一个tick偏差修正所用的β1连乘积
    pub const fn momentum_product(&self) -> f64 {
        self.momentum_product
    }

    /// 下一个tick偏差修正所用的β2连乘积
    pub const fn decay_product(&self) -> f64 {
        self.decay_product
    }

    pub const fn corrected_moment(&self) -> Vector2 {
        self.corrected_moment
    }

    pub const fn corrected_squared(&self) -> Vector2 {
        self.corrected_squared
    }
}

impl UpdateRule for Adam {
    fn reset(&mut self, hyperparameters: &Hyperparameters) {
        self.moment = Vector2::ZERO;
        self.squared = Vector2::splat(ACCUMULATOR_SEED);
        self.momentum_product = hyperparameters.momentum;
        self.decay_product = hyperparameters.decay_rate;
        self.corrected_moment = Vector2::ZERO;
        self.corrected_squared = Vector2::ZERO;
    }

    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2 {
        let (beta1, beta2) = (hyperparameters.momentum, hyperparameters.decay_rate);

        // 更新一阶矩、二阶矩
        self.moment = self.moment * beta1 + g * (1.0 - beta1);
        self.squared = self.squared * beta2 + g.hadamard(g) * (1.0 - beta2);

        // 偏差修正（用修正前的连乘积）
        self.corrected_moment = self.moment / (1.0 - self.momentum_product);
        self.momentum_product *= beta1;
        self.corrected_squared = self.squared / (1.0 - self.decay_product);
        self.decay_product *= beta2;

        let lr = hyperparameters.learning_rate;
        let (m_hat, s_hat) = (self.corrected_moment, self.corrected_squared);
        Vector2::new(
            -(lr * m_hat.x / (s_hat.x + ADAM_EPSILON).sqrt()),
            -(lr * m_hat.y / (s_hat.y + ADAM_EPSILON).sqrt()),
        )
    }
}
