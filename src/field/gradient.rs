use super::{ScalarField, Vector2};

/// 中心差分的步长`h`
pub const GRADIENT_STEP: f64 = 0.01;

/// 用中心差分估计地形在`(x, y)`处的梯度：
/// - gx = (f(x+h, y) - f(x-h, y)) / 2h
/// - gy = (f(x, y+h) - f(x, y-h)) / 2h
///
/// 两个轴各自独立求差分，截断误差为O(h²)。
/// 本函数无状态：相同输入总得到相同输出。
/// 若地形在`(x, y)`的`h`邻域内无定义，结果为非有限值（不做检查）。
pub fn gradient<F: ScalarField + ?Sized>(field: &F, x: f64, y: f64) -> Vector2 {
    let h = GRADIENT_STEP;
    Vector2::new(
        (field.evaluate(x + h, y) - field.evaluate(x - h, y)) / (2.0 * h),
        (field.evaluate(x, y + h) - field.evaluate(x, y - h)) / (2.0 * h),
    )
}
