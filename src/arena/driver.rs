/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : Arena - 逐tick驱动一组优化器
 *
 * 核心特性：
 * - 所有优化器共享同一个 Rc<dyn ScalarField>
 * - tick() 按阵容顺序依次调用每个优化器的 update()，顺序固定，结果可复现
 * - reset() / restart() / reset_random() 同步地让所有优化器重新出发
 * - best() / best_enabled() 给出当前高度最低者
 */

use std::rc::Rc;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use super::ArenaConfig;
use crate::errors::ConfigError;
use crate::field::ScalarField;
use crate::optimizer::{Optimizer, OptimizerKind, best_index};

#[derive(Debug)]
pub struct Arena {
    optimizers: Vec<Optimizer>,
    /// 最近一次重置的起点
    start: (f64, f64),
    /// 自上次重置以来的tick数
    ticks: u64,
}

impl Arena {
    /// 按配置创建竞技场（配置先经校验）
    pub fn new(field: Rc<dyn ScalarField>, config: &ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let [x, y] = config.start;
        let optimizers = config
            .lineup
            .iter()
            .map(|entry| {
                let mut optimizer = Optimizer::with_hyperparameters(
                    entry.kind,
                    Rc::clone(&field),
                    x,
                    y,
                    entry.hyperparameters,
                )
                .with_path_threshold(config.path_threshold);
                optimizer.set_enabled(entry.enabled);
                optimizer
            })
            .collect::<Vec<_>>();
        log::debug!(
            "竞技场就绪：{} 个优化器，起点 ({x}, {y})，路径抽稀阈值 {}",
            optimizers.len(),
            config.path_threshold
        );
        Ok(Self {
            optimizers,
            start: (x, y),
            ticks: 0,
        })
    }

    /// 五种优化器按标准顺序、默认超参数从`(x, y)`出发
    pub fn standard(field: Rc<dyn ScalarField>, x: f64, y: f64) -> Self {
        let optimizers = OptimizerKind::ALL
            .into_iter()
            .map(|kind| Optimizer::new(kind, Rc::clone(&field), x, y))
            .collect();
        Self {
            optimizers,
            start: (x, y),
            ticks: 0,
        }
    }

    /// 推进一个tick：按阵容顺序更新每个优化器（未启用者自动跳过）
    pub fn tick(&mut self) {
        for optimizer in &mut self.optimizers {
            optimizer.update();
        }
        self.ticks += 1;
    }

    /// 连续推进`n`个tick
    pub fn run(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// 所有优化器从`(x, y)`重新出发，并记住这个起点
    pub fn reset(&mut self, x: f64, y: f64) {
        for optimizer in &mut self.optimizers {
            optimizer.reset(x, y);
        }
        self.start = (x, y);
        self.ticks = 0;
        log::debug!("竞技场重置于 ({x}, {y})");
    }

    /// 回到最近一次的起点重新出发
    pub fn restart(&mut self) {
        let (x, y) = self.start;
        self.reset(x, y);
    }

    /// 在`[-half_extent, half_extent]²`内均匀随机选取起点并重新出发，返回该起点。
    ///
    /// # Panics
    /// `half_extent`为NaN或无穷时panic。
    pub fn reset_random<R: Rng + ?Sized>(&mut self, rng: &mut R, half_extent: f64) -> (f64, f64) {
        let extent = half_extent.abs();
        let range = Uniform::from(-extent..=extent);
        let (x, y) = (range.sample(rng), range.sample(rng));
        self.reset(x, y);
        (x, y)
    }

    /// 所有优化器中当前高度最低者（含未启用者）
    pub fn best(&self) -> Option<&Optimizer> {
        best_index(&self.optimizers).map(|index| &self.optimizers[index])
    }

    /// 已启用的优化器中当前高度最低者
    pub fn best_enabled(&self) -> Option<&Optimizer> {
        let enabled: Vec<&Optimizer> = self.optimizers.iter().filter(|o| o.enabled()).collect();
        best_index(enabled.iter().copied()).map(|index| enabled[index])
    }

    /// 按类型查找（同类有多个时取第一个）
    pub fn get(&self, kind: OptimizerKind) -> Option<&Optimizer> {
        self.optimizers.iter().find(|o| o.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: OptimizerKind) -> Option<&mut Optimizer> {
        self.optimizers.iter_mut().find(|o| o.kind() == kind)
    }

    pub fn optimizers(&self) -> &[Optimizer] {
        &self.optimizers
    }

    pub fn optimizers_mut(&mut self) -> &mut [Optimizer] {
        &mut self.optimizers
    }

    pub const fn start(&self) -> (f64, f64) {
        self.start
    }

    /// 自上次重置以来的tick数
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}
