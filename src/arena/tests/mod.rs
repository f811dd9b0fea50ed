/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 竞技场模块单元测试
 */

mod config;

use std::rc::Rc;

use crate::field::ScalarField;

fn bowl() -> Rc<dyn ScalarField> {
    Rc::new(|x: f64, y: f64| x * x + y * y)
}
