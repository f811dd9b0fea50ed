/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 超参数值对象。由外部（界面层）持有并修改，优化器每个tick开始时读取一次。
 */

use serde::{Deserialize, Serialize};

/// 默认学习率
pub const DEFAULT_LEARNING_RATE: f64 = 0.4;
/// 默认动量系数
pub const DEFAULT_MOMENTUM: f64 = 0.9;
/// 默认衰减率
pub const DEFAULT_DECAY_RATE: f64 = 0.9;

/// 一次更新所需的全部超参数
///
/// 各变体只读取与自己相关的字段：
/// - 梯度下降、AdaGrad：`learning_rate`
/// - 动量：`learning_rate`、`momentum`
/// - RMSProp：`learning_rate`、`decay_rate`
/// - Adam：全部
///
/// 注：这里不做任何取值校验，负学习率或超出[0, 1]的系数都会被原样使用。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    pub learning_rate: f64,
    pub momentum: f64,
    pub decay_rate: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            momentum: DEFAULT_MOMENTUM,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

impl Hyperparameters {
    pub const fn new(learning_rate: f64, momentum: f64, decay_rate: f64) -> Self {
        Self {
            learning_rate,
            momentum,
            decay_rate,
        }
    }

    /// 默认超参数，仅替换学习率
    pub fn with_learning_rate(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            ..Self::default()
        }
    }
}
