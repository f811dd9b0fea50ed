use std::rc::Rc;

use super::bowl;
use crate::field::ScalarField;
use crate::optimizer::{Optimizer, OptimizerKind, best_index, best_index_by_elevation};

#[test]
fn test_best_index_first_minimum_wins() {
    assert_eq!(best_index_by_elevation([3.0, 1.0, 1.0, 5.0]), Some(1));
    assert_eq!(best_index_by_elevation([2.0]), Some(0));
    assert_eq!(best_index_by_elevation([-1.0, -1.0]), Some(0));
}

#[test]
fn test_best_index_empty_is_none() {
    assert_eq!(best_index_by_elevation(Vec::<f64>::new()), None);
    assert_eq!(best_index(Vec::<Optimizer>::new().iter()), None);
}

#[test]
fn test_best_index_ignores_nan_when_possible() {
    assert_eq!(best_index_by_elevation([f64::NAN, 2.0, 1.0]), Some(2));
    assert_eq!(best_index_by_elevation([1.0, f64::NAN, 0.5]), Some(2));
    assert_eq!(best_index_by_elevation([1.0, f64::NAN]), Some(0));
    assert_eq!(best_index_by_elevation([f64::NAN, f64::NAN]), Some(0));
}

#[test]
fn test_best_index_over_optimizers() {
    // 高度：9 + 16 = 25，1 + 0 = 1，0 + 1 = 1，4 + 4 = 8
    let field: Rc<dyn ScalarField> = bowl();
    let optimizers = vec![
        Optimizer::new(OptimizerKind::GradientDescent, field.clone(), 3.0, 4.0),
        Optimizer::new(OptimizerKind::Momentum, field.clone(), 1.0, 0.0),
        Optimizer::new(OptimizerKind::AdaGrad, field.clone(), 0.0, 1.0),
        Optimizer::new(OptimizerKind::Adam, field, 2.0, 2.0),
    ];
    assert_eq!(best_index(&optimizers), Some(1));

    // 由调用方决定只比较已启用者
    let enabled: Vec<&Optimizer> = optimizers
        .iter()
        .filter(|o| o.kind() != OptimizerKind::Momentum)
        .collect();
    assert_eq!(best_index(enabled.iter().copied()), Some(1));
    assert_eq!(enabled[1].kind(), OptimizerKind::AdaGrad);
}
