// ==========================================
// VOIS 供需智能服务 - 应用配置
// ==========================================
// 来源: 环境变量 (缺省值见 defaults)
// ==========================================

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// 配置键 (环境变量名)
pub mod config_keys {
    // 数据与模型目录
    pub const DATA_DIR: &str = "VOIS_DATA_DIR";
    pub const MODELS_DIR: &str = "VOIS_MODELS_DIR";

    // 参考表文件名
    pub const ROUTES_FILE: &str = "VOIS_ROUTES_FILE";
    pub const SUITABILITY_FILE: &str = "VOIS_SUITABILITY_FILE";

    // 监听地址
    pub const HOST: &str = "VOIS_HOST";
    pub const PORT: &str = "PORT";
}

/// 缺省值
pub mod defaults {
    pub const DATA_DIR: &str = "data";
    pub const MODELS_DIR: &str = "models";
    pub const ROUTES_FILE: &str = "logistics_supply.csv";
    pub const SUITABILITY_FILE: &str = "crop_suitability.csv";
    pub const CONSUMPTION_FILE: &str = "vegan_consumption.csv";
    pub const SUITABILITY_MODEL_FILE: &str = "crop_suitability.json";
    pub const DEMAND_MODEL_FILE: &str = "vegan_demand_forecast.json";
    pub const PORT: u16 = 5000;
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub models_dir: PathBuf,
    pub routes_file: String,
    pub suitability_file: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            models_dir: PathBuf::from(defaults::MODELS_DIR),
            routes_file: defaults::ROUTES_FILE.to_string(),
            suitability_file: defaults::SUITABILITY_FILE.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: defaults::PORT,
        }
    }
}

impl AppConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置 (便于测试注入)
    ///
    /// 无法解析的 HOST / PORT 回退到缺省值并记录告警
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty(config_keys::PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("PORT 配置无法解析, 使用缺省值 {}: {} ({})", defaults.port, raw, e);
                defaults.port
            }),
            None => defaults.port,
        };

        let host = match non_empty(config_keys::HOST) {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|e| {
                tracing::warn!("HOST 配置无法解析, 使用缺省值 {}: {} ({})", defaults.host, raw, e);
                defaults.host
            }),
            None => defaults.host,
        };

        Self {
            data_dir: non_empty(config_keys::DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            models_dir: non_empty(config_keys::MODELS_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.models_dir),
            routes_file: non_empty(config_keys::ROUTES_FILE).unwrap_or(defaults.routes_file),
            suitability_file: non_empty(config_keys::SUITABILITY_FILE)
                .unwrap_or(defaults.suitability_file),
            host,
            port,
        }
    }

    pub fn routes_path(&self) -> PathBuf {
        self.data_dir.join(&self.routes_file)
    }

    pub fn suitability_path(&self) -> PathBuf {
        self.data_dir.join(&self.suitability_file)
    }

    pub fn suitability_model_path(&self) -> PathBuf {
        self.models_dir.join(defaults::SUITABILITY_MODEL_FILE)
    }

    pub fn demand_model_path(&self) -> PathBuf {
        self.models_dir.join(defaults::DEMAND_MODEL_FILE)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.routes_path(), PathBuf::from("data/logistics_supply.csv"));
        assert_eq!(config.bind_addr().port(), 5000);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (config_keys::DATA_DIR, "/srv/vois/data"),
            (config_keys::MODELS_DIR, "/srv/vois/models"),
            (config_keys::PORT, "8080"),
            (config_keys::HOST, "127.0.0.1"),
            (config_keys::ROUTES_FILE, "routes.xlsx"),
        ]));

        assert_eq!(config.routes_path(), PathBuf::from("/srv/vois/data/routes.xlsx"));
        assert_eq!(
            config.demand_model_path(),
            PathBuf::from("/srv/vois/models/vegan_demand_forecast.json")
        );
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(config_keys::PORT, "not-a-port")]));
        assert_eq!(config.port, defaults::PORT);

        // 空白值视为未配置
        let config = AppConfig::from_lookup(lookup_from(&[(config_keys::DATA_DIR, "  ")]));
        assert_eq!(config.data_dir, PathBuf::from(defaults::DATA_DIR));
    }
}
