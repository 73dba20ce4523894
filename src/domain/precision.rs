// ==========================================
// VOIS 供需智能服务 - 数值精度
// ==========================================
// 对外输出的小数位约定, 综合优先级也以取整后的子结果计算
// ==========================================

/// 消费量/成本/百分比小数位
pub const QUANTITY_DECIMALS: i32 = 2;
/// 适宜度/优先级/指数小数位
pub const SCORE_DECIMALS: i32 = 3;

/// 按小数位取整
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(41.666_666, 2), 41.67);
        assert_eq!(round_to(0.123_56, 3), 0.124);
        assert_eq!(round_to(0.700_4, SCORE_DECIMALS), 0.7);
        assert_eq!(round_to(30.0, 1), 30.0);
    }
}
