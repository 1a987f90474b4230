//! 集成測試

use craftplan::report::render_plan;
use craftplan::{loader, Catalog, CraftError, PlannerConfig, Resolver};
use rust_decimal::Decimal;
use rstest::rstest;
use std::sync::Arc;

const FACILITIES_JSON: &str = include_str!("../data/facilities.json");
const ITEMS_JSON: &str = include_str!("../data/items.json");

fn sample_catalog() -> Arc<Catalog> {
    Arc::new(loader::load_catalog_json(FACILITIES_JSON, ITEMS_JSON).unwrap())
}

fn resolver(tech_level: u32) -> Resolver {
    Resolver::new(
        sample_catalog(),
        PlannerConfig::new().with_tech_level_cap(tech_level),
    )
}

fn summary(resolver: &Resolver, item: &str, rate: Decimal) -> Vec<(String, String, u64)> {
    resolver
        .resolve(item, rate)
        .unwrap()
        .assignments
        .into_iter()
        .map(|a| (a.facility_id, a.item_id, a.facility_count))
        .collect()
}

fn row(facility: &str, item: &str, count: u64) -> (String, String, u64) {
    (facility.to_string(), item.to_string(), count)
}

#[test]
fn test_electronic_circuit_full_tech() {
    // 場景：每秒 1 個電路板，可使用全部設施
    let plan = resolver(3)
        .resolve("electronic_circuit", Decimal::ONE)
        .unwrap();

    println!("{}", render_plan(&plan));

    let rows: Vec<_> = plan
        .assignments
        .iter()
        .map(|a| (a.facility_id.clone(), a.item_id.clone(), a.facility_count))
        .collect();

    // 依設施ID、物品ID排序
    assert_eq!(
        rows,
        vec![
            row("assembler_1", "electronic_circuit", 1),
            row("assembler_2", "copper_cable", 1),
            row("electric_mining_drill", "copper_ore", 3),
            row("electric_mining_drill", "iron_ore", 2),
            row("steel_furnace", "copper_plate", 3),
            row("steel_furnace", "iron_plate", 2),
        ]
    );

    // 電纜批量 2：每個電路板 3 條 → 銅板 1.5 ips
    assert_eq!(plan.demand["copper_cable"].rate, Decimal::from(3));
    assert_eq!(plan.demand["copper_plate"].rate, Decimal::new(15, 1));
    assert_eq!(plan.total_facilities(), 12);
}

#[test]
fn test_electronic_circuit_low_tech() {
    let rows = summary(&resolver(1), "electronic_circuit", Decimal::ONE);

    assert_eq!(
        rows,
        vec![
            row("assembler_1", "copper_cable", 2),
            row("assembler_1", "electronic_circuit", 1),
            row("electric_mining_drill", "copper_ore", 3),
            row("electric_mining_drill", "iron_ore", 2),
            row("stone_furnace", "copper_plate", 5),
            row("stone_furnace", "iron_plate", 4),
        ]
    );
}

#[test]
fn test_tech_level_zero_has_no_facilities() {
    let result = resolver(0).resolve("electronic_circuit", Decimal::ONE);

    match result {
        Err(CraftError::NoEligibleFacility { item_id, tech_level }) => {
            assert_eq!(item_id, "copper_cable");
            assert_eq!(tech_level, 0);
        }
        other => panic!("預期無可用設施錯誤，實際: {:?}", other),
    }
}

#[test]
fn test_inserter_diamond_demand() {
    // 鐵板經由電路板、齒輪與直接用量三條路徑到達：1 + 2 + 1
    let demand = resolver(3)
        .resolve_demand("inserter", Decimal::ONE)
        .unwrap();

    assert_eq!(demand["iron_plate"].rate, Decimal::from(4));
    assert_eq!(demand["iron_plate"].consumers, 3);
    assert_eq!(demand["iron_ore"].rate, Decimal::from(4));
    assert_eq!(demand["copper_cable"].rate, Decimal::from(3));
}

#[rstest]
#[case(1, "5.5", "1.5")]
#[case(2, "11", "3")]
#[case(4, "22", "6")]
fn test_logistic_science_scales_linearly(
    #[case] rate: i64,
    #[case] iron_plate: &str,
    #[case] gears: &str,
) {
    let demand = resolver(3)
        .resolve_demand("logistic_science_pack", Decimal::from(rate))
        .unwrap();

    assert_eq!(demand["iron_plate"].rate, iron_plate.parse::<Decimal>().unwrap());
    assert_eq!(demand["iron_gear_wheel"].rate, gears.parse::<Decimal>().unwrap());
}

#[test]
fn test_advanced_circuit_requires_tier_two() {
    let plan = resolver(3)
        .resolve("advanced_circuit", Decimal::ONE)
        .unwrap();

    // 電路板：2（直接）；電纜：4 + 2 × 3 = 10
    assert_eq!(plan.demand["electronic_circuit"].rate, Decimal::from(2));
    assert_eq!(plan.demand["copper_cable"].rate, Decimal::from(10));

    // 石油氣批量 45：每個塑膠 10 → 20 ips，5/45 秒
    assert_eq!(plan.demand["petroleum_gas"].rate, Decimal::from(20));
    let gas = plan.assignment_for("petroleum_gas").unwrap();
    assert_eq!(gas.facility_id, "oil_refinery");
    assert_eq!(gas.facility_count, 3);

    let result = resolver(1).resolve("advanced_circuit", Decimal::ONE);
    assert!(matches!(
        result,
        Err(CraftError::NoEligibleFacility { item_id, .. }) if item_id == "advanced_circuit"
    ));
}

#[test]
fn test_repeated_resolution_is_identical() {
    let resolver = resolver(2);

    let first = resolver.resolve("logistic_science_pack", Decimal::new(75, 2)).unwrap();
    let second = resolver.resolve("logistic_science_pack", Decimal::new(75, 2)).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.assignments, second.assignments);
    assert_eq!(first.demand, second.demand);
}

#[test]
fn test_cyclic_catalog() {
    let facilities = r#"{ "assembler": { "throughput": 1 } }"#;
    let items = r#"{
        "x": { "craftTime": 1, "ingredients": { "y": 1 }, "facilities": ["assembler"] },
        "y": { "craftTime": 1, "ingredients": { "x": 1 }, "facilities": ["assembler"] }
    }"#;

    // 目錄本身合法，循環在解析時才回報
    let catalog = loader::load_catalog_json(facilities, items).unwrap();
    let resolver = Resolver::new(Arc::new(catalog), PlannerConfig::new());

    assert!(matches!(
        resolver.resolve("x", Decimal::ONE),
        Err(CraftError::CyclicRecipe { .. })
    ));
}

#[test]
fn test_load_sample_directory() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let catalog = loader::load_catalog_dir(dir).unwrap();

    assert_eq!(catalog.item_count(), 18);
    assert_eq!(catalog.facility_count(), 8);
    assert!(catalog.contains_item(&Catalog::normalize_id("Electronic Circuit")));
}
