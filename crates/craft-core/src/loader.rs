//! 目錄載入（JSON）
//!
//! 讀取設施與物品定義，將製造時間與原料數量除以批量後交由
//! [`CatalogBuilder`] 驗證。舊版資料檔的欄位名稱（`level`、`speed`、
//! `time`、`batch`、`stations`）作為別名接受。

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::{CatalogBuilder, Catalog, CraftError, Facility, Item, Result};

/// 設施定義檔名
pub const FACILITIES_FILE: &str = "facilities.json";

/// 物品定義檔名
pub const ITEMS_FILE: &str = "items.json";

/// JSON 設施定義
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDef {
    #[serde(default, alias = "level", alias = "Level", alias = "Tier")]
    pub tier: u32,

    #[serde(alias = "speed", alias = "Speed", alias = "Throughput")]
    pub throughput: Decimal,
}

/// JSON 物品定義（數量為每批量）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    #[serde(alias = "time", alias = "Time")]
    pub craft_time: Decimal,

    /// 每次製造的產出數量；未設定或為 0 時視為 1
    #[serde(default, alias = "batch", alias = "Batch")]
    pub batch_size: Option<Decimal>,

    #[serde(default, alias = "Ingredients")]
    pub ingredients: BTreeMap<String, Decimal>,

    #[serde(default, alias = "stations", alias = "Stations")]
    pub facilities: Vec<String>,
}

impl ItemDef {
    /// 有效批量
    fn effective_batch(&self, item_id: &str) -> Result<Decimal> {
        match self.batch_size {
            None => Ok(Decimal::ONE),
            Some(batch) if batch.is_zero() => Ok(Decimal::ONE),
            Some(batch) if batch < Decimal::ZERO => Err(CraftError::ConfigValidation(format!(
                "物品 {}: 批量必須大於 0（實際 {}）",
                item_id, batch
            ))),
            Some(batch) => Ok(batch),
        }
    }

    /// 轉換為每單位的物品模型
    fn normalize(&self, item_id: &str) -> Result<Item> {
        let batch = self.effective_batch(item_id)?;

        let mut item = Item::new(item_id.to_string(), self.craft_time / batch);
        for (ingredient_id, quantity) in &self.ingredients {
            item = item.with_ingredient(ingredient_id.clone(), *quantity / batch);
        }
        for facility_id in &self.facilities {
            item = item.with_facility(facility_id.clone());
        }

        Ok(item)
    }
}

/// 由 JSON 字串載入目錄
pub fn load_catalog_json(facilities_json: &str, items_json: &str) -> Result<Catalog> {
    let facilities: BTreeMap<String, FacilityDef> = serde_json::from_str(facilities_json)?;
    let items: BTreeMap<String, ItemDef> = serde_json::from_str(items_json)?;
    build_catalog(&facilities, &items)
}

/// 由資料目錄載入目錄（`facilities.json` 與 `items.json`）
pub fn load_catalog_dir(dir: impl AsRef<Path>) -> Result<Catalog> {
    let dir = dir.as_ref();
    tracing::info!("載入目錄資料: {}", dir.display());

    let facilities_json = std::fs::read_to_string(dir.join(FACILITIES_FILE))?;
    let items_json = std::fs::read_to_string(dir.join(ITEMS_FILE))?;

    load_catalog_json(&facilities_json, &items_json)
}

/// 由已解析的定義建立目錄
pub fn build_catalog(
    facilities: &BTreeMap<String, FacilityDef>,
    items: &BTreeMap<String, ItemDef>,
) -> Result<Catalog> {
    let mut builder = CatalogBuilder::new();

    for (facility_id, def) in facilities {
        builder.add_facility(Facility::new(facility_id.clone(), def.throughput).with_tier(def.tier));
    }

    for (item_id, def) in items {
        builder.add_item(def.normalize(item_id)?);
    }

    builder.build()
}
