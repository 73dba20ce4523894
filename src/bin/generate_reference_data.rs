// ==========================================
// VOIS 供需智能服务 - 参考数据生成器
// ==========================================
// 用途: 生成服务启动所需的合成参考表 (固定随机种子, 可复现)
// 输出:
// - logistics_supply.csv   物流线路
// - crop_suitability.csv   区县作物适宜度
// - vegan_consumption.csv  植物基消费时间序列
// 用法: generate_reference_data [输出目录]
//   缺省输出到 VOIS_DATA_DIR (默认 data/)
// ==========================================

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use csv::Writer;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use vois_supply::config::app_config::defaults;
use vois_supply::config::AppConfig;
use vois_supply::domain::round_to;

const SEED: u64 = 42;
const ROWS_PER_TABLE: usize = 1000;

const SOURCE_DISTRICTS: &[&str] = &[
    "Anantapur",
    "Kurnool",
    "Hindupur",
    "Mahabubnagar",
    "Nalgonda",
];

const ALL_DISTRICTS: &[&str] = &[
    "Anantapur",
    "Kurnool",
    "Hindupur",
    "Mahabubnagar",
    "Nalgonda",
    "Warangal",
    "Karimnagar",
    "Adilabad",
    "Nizamabad",
    "Medak",
];

const DESTINATION_CITIES: &[&str] = &["Hyderabad", "Bengaluru", "Mumbai", "Delhi", "Chennai"];

const CONSUMPTION_REGIONS: &[&str] = &[
    "Hyderabad",
    "Bengaluru",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Pune",
    "Kolkata",
];

const LOGISTICS_CROPS: &[&str] = &["Oats", "Chickpea", "Soy", "Quinoa", "Lentils"];

const SUITABILITY_CROPS: &[&str] = &[
    "Soy",
    "Oats",
    "Chickpea",
    "Pea Protein",
    "Millets",
    "Quinoa",
    "Lentils",
    "Mungbean",
    "Kidneybeans",
    "Blackbeans",
];

const SOIL_TYPES: &[&str] = &["Loamy", "Sandy", "Clay", "Sandy Loam", "Clay Loam"];

const PRODUCTS: &[&str] = &[
    "Vegan Meat",
    "Vegan Paneer",
    "Vegan Milk",
    "Oat Milk",
    "Tofu",
    "Plant-Based Protein",
    "Soy Products",
    "Chickpea Flour",
    "Almond Milk",
    "Coconut Milk",
    "Quinoa",
    "Tempeh",
    "Vegan Cheese",
];

/// Z 世代偏好产品 (genz_ratio 取高区间)
const TRENDY_PRODUCTS: &[&str] = &["Oat Milk", "Vegan Meat", "Almond Milk"];

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

// ==========================================
// 物流线路
// ==========================================

fn write_logistics(rng: &mut StdRng, path: &Path, rows: usize) -> anyhow::Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "source_district",
        "destination_city",
        "crop",
        "transport_cost",
        "distance",
        "processing_capacity",
        "storage_cost",
        "supply_quantity",
    ])?;

    for _ in 0..rows {
        let source = pick(rng, SOURCE_DISTRICTS);
        let destination = pick(rng, DESTINATION_CITIES);
        let crop = pick(rng, LOGISTICS_CROPS);

        let distance = round_to(rng.gen_range(100.0..800.0), 1);
        let cost_per_km: f64 = rng.gen_range(0.5..2.0);
        let transport_cost = round_to(cost_per_km * distance, 2);
        let processing_capacity = round_to(rng.gen_range(100.0..5000.0), 1);
        let storage_cost = round_to(rng.gen_range(10.0..100.0), 2);
        let supply_quantity = round_to(rng.gen_range(50.0..2000.0), 1);

        writer.write_record([
            source.to_string(),
            destination.to_string(),
            crop.to_string(),
            transport_cost.to_string(),
            distance.to_string(),
            processing_capacity.to_string(),
            storage_cost.to_string(),
            supply_quantity.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

// ==========================================
// 区县作物适宜度
// ==========================================

/// pH 0.2 + 降雨 0.3 + 温度 0.2 + 灌溉加成 0.1 + 距离 0.3, 截断到 [0, 1]
fn suitability_score(
    soil_ph: f64,
    rainfall: f64,
    temperature: f64,
    irrigation: u8,
    distance_to_city: f64,
) -> f64 {
    let ph_score = 1.0 - (soil_ph - 7.0).abs() / 3.5;
    let rainfall_score = (rainfall / 800.0).min(1.0);
    let temp_score = 1.0 - (temperature - 25.0).abs() / 20.0;
    let irrigation_bonus = if irrigation == 1 { 0.1 } else { 0.0 };
    let distance_score = (1.0 - distance_to_city / 200.0).max(0.0);

    let score = ph_score * 0.2
        + rainfall_score * 0.3
        + temp_score * 0.2
        + irrigation_bonus
        + distance_score * 0.3;
    score.clamp(0.0, 1.0)
}

fn write_suitability(rng: &mut StdRng, path: &Path, rows: usize) -> anyhow::Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "district",
        "crop",
        "soil_ph",
        "soil_type",
        "rainfall",
        "temperature",
        "irrigation",
        "yield_per_acre",
        "distance_to_city",
        "suitability_score",
    ])?;

    for _ in 0..rows {
        let district = pick(rng, ALL_DISTRICTS);
        let crop = pick(rng, SUITABILITY_CROPS);
        let soil_type = pick(rng, SOIL_TYPES);

        let soil_ph: f64 = rng.gen_range(5.5..8.5);
        let rainfall: f64 = rng.gen_range(300.0..1200.0);
        let temperature: f64 = rng.gen_range(15.0..35.0);
        let irrigation: u8 = rng.gen_range(0..=1);
        let yield_per_acre: f64 = rng.gen_range(500.0..3000.0);
        let distance_to_city: f64 = rng.gen_range(10.0..200.0);

        let score = suitability_score(soil_ph, rainfall, temperature, irrigation, distance_to_city);

        writer.write_record([
            district.to_string(),
            crop.to_string(),
            round_to(soil_ph, 2).to_string(),
            soil_type.to_string(),
            round_to(rainfall, 1).to_string(),
            round_to(temperature, 1).to_string(),
            irrigation.to_string(),
            round_to(yield_per_acre, 1).to_string(),
            round_to(distance_to_city, 1).to_string(),
            round_to(score, 3).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

// ==========================================
// 植物基消费时间序列
// ==========================================

fn write_consumption(rng: &mut StdRng, path: &Path, rows: usize) -> anyhow::Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record([
        "date",
        "region",
        "product",
        "consumption",
        "price",
        "genz_ratio",
        "google_trends_score",
    ])?;

    let base_date =
        NaiveDate::from_ymd_opt(2023, 1, 1).context("无效的基准日期")?;

    for i in 0..rows {
        let days_offset = (i % 365) as i64;
        let date = base_date + Duration::days(days_offset);
        let region = pick(rng, CONSUMPTION_REGIONS);
        let product = pick(rng, PRODUCTS);

        // 年周期季节性 ±30%
        let seasonal_factor =
            1.0 + 0.3 * (2.0 * std::f64::consts::PI * days_offset as f64 / 365.0).sin();
        let base_consumption: f64 = rng.gen_range(100.0..1000.0);
        let consumption = (base_consumption * seasonal_factor) as i64;

        let price = round_to(rng.gen_range(50.0..500.0), 2);
        let genz_ratio: f64 = if TRENDY_PRODUCTS.contains(&product) {
            rng.gen_range(0.4..0.8)
        } else {
            rng.gen_range(0.1..0.5)
        };
        let google_trends: f64 = rng.gen_range(20.0..100.0);

        writer.write_record([
            date.format("%Y-%m-%d").to_string(),
            region.to_string(),
            product.to_string(),
            consumption.to_string(),
            price.to_string(),
            round_to(genz_ratio, 3).to_string(),
            round_to(google_trends, 1).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn output_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| AppConfig::from_env().data_dir)
}

fn main() -> anyhow::Result<()> {
    vois_supply::logging::init();

    let dir = output_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("无法创建输出目录 {}", dir.display()))?;

    tracing::info!("==================================================");
    tracing::info!("参考数据生成器 (seed={})", SEED);
    tracing::info!("输出目录: {}", dir.display());
    tracing::info!("==================================================");

    let tables: [(&str, fn(&mut StdRng, &Path, usize) -> anyhow::Result<()>); 3] = [
        (defaults::ROUTES_FILE, write_logistics),
        (defaults::SUITABILITY_FILE, write_suitability),
        (defaults::CONSUMPTION_FILE, write_consumption),
    ];

    for (file_name, write) in tables {
        // 每张表独立播种, 单表重新生成结果不受其他表影响
        let mut rng = StdRng::seed_from_u64(SEED);
        let path = dir.join(file_name);
        write(&mut rng, &path, ROWS_PER_TABLE)
            .with_context(|| format!("生成失败: {}", path.display()))?;
        tracing::info!("✓ {} ({} 行)", path.display(), ROWS_PER_TABLE);
    }

    tracing::info!("参考数据生成完成");
    Ok(())
}
