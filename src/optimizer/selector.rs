/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 在一组优化器中找出当前高度最低者
 */

use super::Optimizer;

/// 返回当前高度`z`最低的优化器下标；输入为空时返回`None`。
///
/// 高度相同时取先出现者。NaN 高度不会胜过任何数值高度。
/// 纯函数，不修改任何优化器；是否只比较已启用的优化器由调用方决定。
pub fn best_index<'a, I>(optimizers: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Optimizer>,
{
    best_index_by_elevation(optimizers.into_iter().map(|o| o.position().z))
}

/// 与[`best_index`]相同的规则，直接作用于高度序列
pub fn best_index_by_elevation<I>(elevations: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, z) in elevations.into_iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, best_z)) => z < best_z || (best_z.is_nan() && !z.is_nan()),
        };
        if better {
            best = Some((index, z));
        }
    }
    best.map(|(index, _)| index)
}
