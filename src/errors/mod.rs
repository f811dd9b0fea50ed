/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 错误类型定义。优化器的数值计算本身不会返回错误（非有限值会原样传播），
 *                 这里只覆盖配置的读取、解析与校验。
 */

use std::path::PathBuf;
use thiserror::Error;

/// 配置相关错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 文件未找到
    #[error("配置文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON 解析/序列化错误
    #[error("配置格式错误: {0}")]
    FormatError(#[from] serde_json::Error),

    /// 优化器列表为空
    #[error("优化器列表为空")]
    EmptyLineup,

    /// 路径抽稀阈值须为非负的有限数
    #[error("路径抽稀阈值须为非负的有限数，实际为{0}")]
    InvalidPathThreshold(f64),
}
