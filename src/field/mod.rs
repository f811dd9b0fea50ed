/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 标量地形（ScalarField）、二维向量与地形上的点（Position），
 *                 以及所有优化器共用的数值梯度估计。
 */

mod gradient;
mod vector;

#[cfg(test)]
mod tests;

pub use gradient::{GRADIENT_STEP, gradient};
pub use vector::Vector2;

use serde::{Deserialize, Serialize};

/// 标量地形：`z = f(x, y)`
///
/// 实现者须是纯函数（相同输入总得到相同输出、无内部状态），
/// 且在实际用到的定义域内处处有定义、足够光滑，以便有限差分梯度有意义。
/// 所有优化器只读地共享同一个地形。
pub trait ScalarField {
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

/// 任何`Fn(f64, f64) -> f64`闭包都可直接作为地形使用
impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// 地形上的一个点。
/// 注：高度`z`总是由`(x, y)`经地形求得，不单独存储或修改。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// 在地形`field`上取`(x, y)`处的点
    pub fn on<F: ScalarField + ?Sized>(field: &F, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: field.evaluate(x, y),
        }
    }

    /// 平面坐标`(x, y)`
    pub const fn planar(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// 与另一点的三维欧氏距离（路径抽稀用）
    pub fn distance(&self, other: &Self) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// `x`、`y`、`z`是否都是有限数
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
