// ==========================================
// VOIS 供需智能服务 - 请求校验
// ==========================================
// 职责: 必填字段 / 数值合法性校验
// 规则: 按字段声明顺序检查, 报告第一个缺失字段
// ==========================================

use crate::api::error::{ApiError, ApiResult};

/// 必填字段 (缺失或 null 视为缺失)
pub fn require<'a, T>(field: &str, value: &'a Option<T>) -> ApiResult<&'a T> {
    value.as_ref().ok_or_else(|| ApiError::missing_field(field))
}

/// 必填字符串字段
pub fn require_str<'a>(field: &str, value: &'a Option<String>) -> ApiResult<&'a str> {
    require(field, value).map(|s| s.as_str())
}

/// 需求量: 有限且大于 0
pub fn require_quantity(field: &str, value: &Option<f64>) -> ApiResult<f64> {
    let quantity = *require(field, value)?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(ApiError::ValidationError(format!(
            "Invalid {}: must be a positive number",
            field
        )));
    }
    Ok(quantity)
}

/// 月份: 1-12
pub fn check_month(field: &str, month: u32) -> ApiResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(ApiError::ValidationError(format!(
            "Invalid {}: must be between 1 and 12",
            field
        )));
    }
    Ok(month)
}

/// 灌溉标志: 0 / 1
pub fn check_flag(field: &str, flag: u8) -> ApiResult<u8> {
    if flag > 1 {
        return Err(ApiError::ValidationError(format!(
            "Invalid {}: must be 0 or 1",
            field
        )));
    }
    Ok(flag)
}
