/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 五种更新规则。每个变体只携带自己的累积量，
 *                 由`Rule`这个封闭枚举经`enum_dispatch`统一分派。
 */

mod ada_grad;
mod adam;
mod gradient_descent;
mod momentum;
mod rms_prop;

pub use ada_grad::AdaGrad;
pub use adam::{ADAM_EPSILON, Adam};
pub use gradient_descent::GradientDescent;
pub use momentum::Momentum;
pub use rms_prop::RmsProp;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::Hyperparameters;
use crate::field::Vector2;

/// 平方梯度累积量的初值（每个轴）。
/// 不取0，保证首次更新时即使梯度恰为0也不会出现0/0。
pub const ACCUMULATOR_SEED: f64 = 1e-6;

#[enum_dispatch]
pub trait UpdateRule {
    /// 把累积量恢复到初始（零或`ACCUMULATOR_SEED`）状态。
    /// Adam 的偏差修正连乘积取此刻的超参数值作为初值。
    fn reset(&mut self, hyperparameters: &Hyperparameters);

    /// 根据当前位置的梯度`g`更新累积量，返回本次的位移（新位置 = 旧位置 + 位移）
    fn displacement(&mut self, g: Vector2, hyperparameters: &Hyperparameters) -> Vector2;
}

#[enum_dispatch(UpdateRule)]
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    GradientDescent(GradientDescent),
    Momentum(Momentum),
    AdaGrad(AdaGrad),
    RmsProp(RmsProp),
    Adam(Adam),
}

impl Rule {
    /// 以`hyperparameters`为初值构造对应变体的规则
    pub fn new(kind: OptimizerKind, hyperparameters: &Hyperparameters) -> Self {
        let mut rule: Self = match kind {
            OptimizerKind::GradientDescent => GradientDescent.into(),
            OptimizerKind::Momentum => Momentum::default().into(),
            OptimizerKind::AdaGrad => AdaGrad::default().into(),
            OptimizerKind::RmsProp => RmsProp::default().into(),
            OptimizerKind::Adam => Adam::default().into(),
        };
        rule.reset(hyperparameters);
        rule
    }

    pub const fn kind(&self) -> OptimizerKind {
        match self {
            Self::GradientDescent(_) => OptimizerKind::GradientDescent,
            Self::Momentum(_) => OptimizerKind::Momentum,
            Self::AdaGrad(_) => OptimizerKind::AdaGrad,
            Self::RmsProp(_) => OptimizerKind::RmsProp,
            Self::Adam(_) => OptimizerKind::Adam,
        }
    }
}

/// 优化器变体的标签（用于配置与按类型查找）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    GradientDescent,
    Momentum,
    AdaGrad,
    RmsProp,
    Adam,
}

impl OptimizerKind {
    /// 标准阵容的顺序
    pub const ALL: [Self; 5] = [
        Self::GradientDescent,
        Self::Momentum,
        Self::AdaGrad,
        Self::RmsProp,
        Self::Adam,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::GradientDescent => "GradientDescent",
            Self::Momentum => "Momentum",
            Self::AdaGrad => "AdaGrad",
            Self::RmsProp => "RMSProp",
            Self::Adam => "Adam",
        }
    }
}

impl std::fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `lr * g / sqrt(s)`的逐轴位移（取负号），AdaGrad 与 RMSProp 共用
fn scaled_by_root(g: Vector2, squared: Vector2, lr: f64) -> Vector2 {
    Vector2::new(
        -(lr * g.x / squared.x.sqrt()),
        -(lr * g.y / squared.y.sqrt()),
    )
}
