/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 地形模块单元测试
 */

mod gradient;
