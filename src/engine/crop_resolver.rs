// ==========================================
// VOIS 供需智能服务 - 作物解析
// ==========================================
// 职责: 消费端产品名 -> 上游作物名
// 规则:
// 1) CropMapping 精确匹配
// 2) 含空格时取第一个空白分隔词 ("Vegan Milk" -> "Vegan")
// 3) 否则原样返回
// 解析永不失败; 解析错位只会导致后续线路为空
// ==========================================

use crate::config::CropMapping;

pub struct CropResolver {
    mapping: CropMapping,
}

impl CropResolver {
    pub fn new(mapping: CropMapping) -> Self {
        Self { mapping }
    }

    pub fn resolve(&self, product: &str) -> String {
        if let Some(crop) = self.mapping.get(product) {
            return crop.to_string();
        }
        if product.contains(' ') {
            if let Some(first) = product.split_whitespace().next() {
                return first.to_string();
            }
        }
        product.to_string()
    }
}

impl Default for CropResolver {
    fn default() -> Self {
        Self::new(CropMapping::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mapped_products() {
        let resolver = CropResolver::default();
        assert_eq!(resolver.resolve("Oat Milk"), "Oats");
        assert_eq!(resolver.resolve("Soy Products"), "Soy");
        assert_eq!(resolver.resolve("Chickpea Flour"), "Chickpea");
    }

    #[test]
    fn test_resolve_fallbacks() {
        let resolver = CropResolver::default();
        // 首词回退
        assert_eq!(resolver.resolve("Quinoa Flakes"), "Quinoa");
        assert_eq!(resolver.resolve("Vegan Milk"), "Vegan");
        // 原样返回
        assert_eq!(resolver.resolve("Lentils"), "Lentils");
        // 大小写敏感, 不做归一化
        assert_eq!(resolver.resolve("oat milk"), "oat");
    }

    #[test]
    fn test_resolve_custom_mapping() {
        let resolver = CropResolver::new(CropMapping::from_pairs([("Tofu", "Soy")]));
        assert_eq!(resolver.resolve("Tofu"), "Soy");
        assert_eq!(resolver.resolve("Oat Milk"), "Oat");
    }
}
