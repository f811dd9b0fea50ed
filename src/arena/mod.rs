/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 竞技场：把一组优化器放在同一片地形上，按固定顺序逐tick推进并比较
 */

mod config;
mod driver;

#[cfg(test)]
mod tests;

pub use config::{ArenaConfig, EntryConfig};
pub use driver::Arena;
