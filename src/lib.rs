//! # Only Descent
//!
//! `only_descent`用纯rust实现了五种一阶优化器（梯度下降、动量、AdaGrad、RMSProp、Adam）
//! 在任意二维标量地形`z = f(x, y)`上寻找局部极小值的轨迹引擎，
//! 便于把它们放在同一片地形上逐步（tick）推进、互相比较。
//!
//! 渲染、控件和具体的地形生成函数都不在本crate内：地形以[`field::ScalarField`]的形式在构造时注入。
//!

pub mod arena;
pub mod errors;
pub mod field;
pub mod optimizer;
pub mod utils;
