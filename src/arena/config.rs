/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 竞技场配置，可从 JSON 读取（缺省字段取默认值）
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::optimizer::{DEFAULT_PATH_THRESHOLD, Hyperparameters, OptimizerKind};

/// 阵容中的一个优化器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub kind: OptimizerKind,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub hyperparameters: Hyperparameters,
}

const fn default_enabled() -> bool {
    true
}

impl EntryConfig {
    /// 默认超参数、已启用
    pub fn new(kind: OptimizerKind) -> Self {
        Self {
            kind,
            enabled: true,
            hyperparameters: Hyperparameters::default(),
        }
    }
}

/// 竞技场配置
///
/// # JSON 示例
/// ```json
/// {
///     "start": [10.0, -5.0],
///     "path_threshold": 0.5,
///     "lineup": [
///         { "kind": "gradient_descent" },
///         { "kind": "adam", "hyperparameters": { "learning_rate": 0.1 } }
///     ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// 所有优化器的起点`(x, y)`
    pub start: [f64; 2],
    /// 路径抽稀阈值
    pub path_threshold: f64,
    /// 参赛优化器，顺序即每个tick的更新顺序
    pub lineup: Vec<EntryConfig>,
}

impl Default for ArenaConfig {
    /// 原点出发，五种优化器按标准顺序全部参赛
    fn default() -> Self {
        Self {
            start: [0.0, 0.0],
            path_threshold: DEFAULT_PATH_THRESHOLD,
            lineup: OptimizerKind::ALL.into_iter().map(EntryConfig::new).collect(),
        }
    }
}

impl ArenaConfig {
    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取并校验
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 校验结构性约束。
    /// 注：超参数本身不校验，任何实数都会被原样使用。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lineup.is_empty() {
            return Err(ConfigError::EmptyLineup);
        }
        if !self.path_threshold.is_finite() || self.path_threshold < 0.0 {
            return Err(ConfigError::InvalidPathThreshold(self.path_threshold));
        }
        Ok(())
    }
}
