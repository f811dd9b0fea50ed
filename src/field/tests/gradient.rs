use approx::assert_abs_diff_eq;

use crate::field::{GRADIENT_STEP, ScalarField, gradient};

fn bowl(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[test]
fn test_gradient_of_bowl() {
    // f = x² + y²，在(1, 2)处的梯度为(2, 4)；中心差分对二次函数误差仅为舍入误差
    let g = gradient(&bowl, 1.0, 2.0);
    assert_abs_diff_eq!(g.x, 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(g.y, 4.0, epsilon = 1e-6);
}

#[test]
fn test_gradient_error_is_second_order() {
    // f = x³ 的中心差分误差恰为h²，即1e-4
    let cubic = |x: f64, _y: f64| x * x * x;
    let g = gradient(&cubic, 2.0, 0.0);
    assert_abs_diff_eq!(g.x, 12.0 + GRADIENT_STEP * GRADIENT_STEP, epsilon = 1e-8);
    assert_eq!(g.y, 0.0);
}

#[test]
fn test_gradient_axes_are_independent() {
    // 只依赖y的地形，x方向梯度必为0
    let ramp = |_x: f64, y: f64| 3.0 * y;
    let g = gradient(&ramp, -7.5, 11.0);
    assert_eq!(g.x, 0.0);
    assert_abs_diff_eq!(g.y, 3.0, epsilon = 1e-9);
}

#[test]
fn test_gradient_is_deterministic() {
    let wavy = |x: f64, y: f64| (x * 0.3).sin() * (y * 0.7).cos() * 20.0;
    let first = gradient(&wavy, 0.123, -4.56);
    let second = gradient(&wavy, 0.123, -4.56);
    assert_eq!(first, second);
}

#[test]
fn test_gradient_through_trait_object() {
    let field: Box<dyn ScalarField> = Box::new(bowl);
    let g = gradient(field.as_ref(), -1.0, 0.5);
    assert_abs_diff_eq!(g.x, -2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(g.y, 1.0, epsilon = 1e-6);
}

#[test]
fn test_gradient_propagates_non_finite_values() {
    let broken = |x: f64, _y: f64| if x > 0.0 { f64::NAN } else { 0.0 };
    let g = gradient(&broken, 0.0, 0.0);
    assert!(g.x.is_nan());
    assert_eq!(g.y, 0.0);
}
