/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Optimizer - 所有变体共享的轨迹状态与生命周期
 *
 * 核心特性：
 * - 持有 Rc<dyn ScalarField>，多个优化器只读地共享同一片地形
 * - 位置、路径、超参数、启用开关归单个优化器独占
 * - update() 在未启用时什么都不做
 * - reset() 可任意次调用，把位置、路径和累积量恢复到初始状态
 */

use std::rc::Rc;

use super::{Hyperparameters, OptimizerKind, Rule, UpdateRule};
use crate::field::{Position, ScalarField, gradient};

/// 路径抽稀阈值的默认值（地形单位）
pub const DEFAULT_PATH_THRESHOLD: f64 = 0.5;

/// 在地形上移动的一个优化器
///
/// # 使用示例
/// ```ignore
/// let field: Rc<dyn ScalarField> = Rc::new(|x: f64, y: f64| x * x + y * y);
/// let mut adam = Optimizer::new(OptimizerKind::Adam, field, 5.0, 5.0);
///
/// // 每个tick
/// adam.set_learning_rate(0.1);
/// adam.update();
/// println!("{:?}", adam.position());
/// ```
pub struct Optimizer {
    /// 地形引用
    field: Rc<dyn ScalarField>,
    /// 更新规则及其累积量
    rule: Rule,
    /// 外部可随时修改的超参数，下一个tick生效
    hyperparameters: Hyperparameters,
    position: Position,
    /// 抽稀后的历史轨迹，首个元素总是重置时的起点
    path: Vec<Position>,
    path_threshold: f64,
    enabled: bool,
    /// 自上次重置以来实际执行的更新次数
    ticks: u64,
    /// 是否已报告过位置出现非有限值
    diverged: bool,
}

impl Optimizer {
    /// 在`(x, y)`处创建优化器（默认超参数、默认抽稀阈值、已启用）
    pub fn new(kind: OptimizerKind, field: Rc<dyn ScalarField>, x: f64, y: f64) -> Self {
        Self::with_hyperparameters(kind, field, x, y, Hyperparameters::default())
    }

    /// 创建带指定超参数的优化器
    pub fn with_hyperparameters(
        kind: OptimizerKind,
        field: Rc<dyn ScalarField>,
        x: f64,
        y: f64,
        hyperparameters: Hyperparameters,
    ) -> Self {
        let position = Position::on(field.as_ref(), x, y);
        Self {
            rule: Rule::new(kind, &hyperparameters),
            field,
            hyperparameters,
            position,
            path: vec![position],
            path_threshold: DEFAULT_PATH_THRESHOLD,
            enabled: true,
            ticks: 0,
            diverged: false,
        }
    }

    /// 替换路径抽稀阈值（只影响之后追加的点）
    #[must_use]
    pub fn with_path_threshold(mut self, path_threshold: f64) -> Self {
        self.path_threshold = path_threshold;
        self
    }

    /// 重新从`(x, y)`出发：位置、路径、累积量全部恢复初始状态。
    /// Adam 的偏差修正连乘积取此刻的β1、β2。
    pub fn reset(&mut self, x: f64, y: f64) {
        self.position = Position::on(self.field.as_ref(), x, y);
        self.path.clear();
        self.path.push(self.position);
        self.rule.reset(&self.hyperparameters);
        self.ticks = 0;
        self.diverged = false;
        log::debug!("{} 重置于 ({x}, {y})", self.name());
    }

    /// 推进一个tick（未启用时什么都不做）
    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }

        let hyperparameters = self.hyperparameters;
        let g = gradient(self.field.as_ref(), self.position.x, self.position.y);
        let moved = self.position.planar() + self.rule.displacement(g, &hyperparameters);
        self.position = Position::on(self.field.as_ref(), moved.x, moved.y);
        self.ticks += 1;
        log::trace!(
            "{} tick {}: g = ({}, {}), 位置 = {:?}",
            self.name(),
            self.ticks,
            g.x,
            g.y,
            self.position
        );

        if !self.position.is_finite() && !self.diverged {
            self.diverged = true;
            log::warn!(
                "{} 在第 {} 个tick后位置出现非有限值：{:?}",
                self.name(),
                self.ticks,
                self.position
            );
        }

        self.record_position();
    }

    /// 用给定的超参数推进一个tick；这组超参数同时成为新的当前配置
    pub fn update_with(&mut self, hyperparameters: Hyperparameters) {
        self.hyperparameters = hyperparameters;
        self.update();
    }

    /// 与路径末点的距离不小于阈值时才记录当前位置。
    /// 距离为NaN时也会记录，让非有限值如实出现在路径里。
    fn record_position(&mut self) {
        if let Some(last) = self.path.last() {
            if last.distance(&self.position) < self.path_threshold {
                return;
            }
        }
        self.path.push(self.position);
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub const fn kind(&self) -> OptimizerKind {
        self.rule.kind()
    }

    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// 更新规则及其累积量（调试和可视化用）
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    pub const fn hyperparameters(&self) -> Hyperparameters {
        self.hyperparameters
    }

    pub const fn set_hyperparameters(&mut self, hyperparameters: Hyperparameters) {
        self.hyperparameters = hyperparameters;
    }

    pub const fn learning_rate(&self) -> f64 {
        self.hyperparameters.learning_rate
    }

    pub const fn set_learning_rate(&mut self, lr: f64) {
        self.hyperparameters.learning_rate = lr;
    }

    /// 设置动量系数（Adam 中即β1；梯度下降、AdaGrad、RMSProp 不读取）
    pub const fn set_momentum(&mut self, momentum: f64) {
        self.hyperparameters.momentum = momentum;
    }

    /// 设置衰减率（Adam 中即β2；梯度下降、动量、AdaGrad 不读取）
    pub const fn set_decay_rate(&mut self, decay_rate: f64) {
        self.hyperparameters.decay_rate = decay_rate;
    }

    pub const fn path_threshold(&self) -> f64 {
        self.path_threshold
    }

    /// 自上次重置以来实际执行的更新次数
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl std::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("rule", &self.rule)
            .field("hyperparameters", &self.hyperparameters)
            .field("position", &self.position)
            .field("path_len", &self.path.len())
            .field("enabled", &self.enabled)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
