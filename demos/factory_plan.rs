//! 產線規劃示例
//!
//! cargo run --example factory_plan

use craftplan::report::render_plan;
use craftplan::{loader, PlannerConfig, Resolver};
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 產線規劃示例 ===\n");

    // 載入範例目錄
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let catalog = Arc::new(loader::load_catalog_dir(data_dir)?);
    println!(
        "目錄: 物品 {} 個，設施 {} 個\n",
        catalog.item_count(),
        catalog.facility_count()
    );

    // 同一份目錄，比較不同科技等級
    for tech_level in 1..=3 {
        let resolver = Resolver::new(
            Arc::clone(&catalog),
            PlannerConfig::new().with_tech_level_cap(tech_level),
        );

        let plan = resolver.resolve("logistic_science_pack", Decimal::ONE)?;
        println!("--- 科技等級 {}：每秒 1 個物流科技包 ---", tech_level);
        println!("{}", render_plan(&plan));
    }

    Ok(())
}
