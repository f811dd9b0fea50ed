/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 优化器模块：共享的轨迹状态 + 五种更新规则 + 最优者选择
 */

mod hyperparameters;
mod rules;
mod selector;
mod state;

#[cfg(test)]
mod tests;

pub use hyperparameters::{
    DEFAULT_DECAY_RATE, DEFAULT_LEARNING_RATE, DEFAULT_MOMENTUM, Hyperparameters,
};
pub use rules::{
    ACCUMULATOR_SEED, ADAM_EPSILON, AdaGrad, Adam, GradientDescent, Momentum, OptimizerKind,
    RmsProp, Rule, UpdateRule,
};
pub use selector::{best_index, best_index_by_elevation};
pub use state::{DEFAULT_PATH_THRESHOLD, Optimizer};
