/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - gradient_descent / momentum / ada_grad / rms_prop / adam: 各更新规则
 * - lifecycle: 重置、启用开关、路径抽稀等共享行为
 * - selector: 最优者选择
 */

mod selector;

use std::rc::Rc;

use crate::field::ScalarField;

/// f = x² + y²，唯一极小值在原点
fn bowl() -> Rc<dyn ScalarField> {
    Rc::new(|x: f64, y: f64| x * x + y * y)
}

/// f = 2x + 3y，梯度处处为(2, 3)
fn ramp() -> Rc<dyn ScalarField> {
    Rc::new(|x: f64, y: f64| 2.0 * x + 3.0 * y)
}
