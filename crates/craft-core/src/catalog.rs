//! 物品/設施目錄
//!
//! 目錄在解析開始前建立一次，之後不可變，可安全地在多個請求間共享。

use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::{CraftError, Facility, Item, Result};

/// 已驗證的不可變目錄
#[derive(Debug, Clone)]
pub struct Catalog {
    items: HashMap<String, Item>,
    facilities: HashMap<String, Facility>,
}

impl Catalog {
    /// 查找物品
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// 查找物品，找不到時返回 UnknownItem
    pub fn require_item(&self, item_id: &str) -> Result<&Item> {
        self.item(item_id)
            .ok_or_else(|| CraftError::UnknownItem(item_id.to_string()))
    }

    /// 查找設施
    pub fn facility(&self, facility_id: &str) -> Option<&Facility> {
        self.facilities.get(facility_id)
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    /// 物品可用的設施（依目錄中定義的順序）
    pub fn eligible_facilities<'a>(&'a self, item: &'a Item) -> impl Iterator<Item = &'a Facility> {
        item.facilities
            .iter()
            .filter_map(move |facility_id| self.facilities.get(facility_id))
    }

    /// 所有物品ID（已排序）
    pub fn item_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.items.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    /// 將使用者輸入的名稱正規化為物品ID
    ///
    /// 例如 "Electronic Circuit" → "electronic_circuit"
    pub fn normalize_id(name: &str) -> String {
        name.trim().to_lowercase().replace(' ', "_")
    }
}

/// 目錄建構器：收集定義並在 `build` 時統一驗證
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<Item>,
    facilities: Vec<Facility>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加設施
    pub fn with_facility(mut self, facility: Facility) -> Self {
        self.facilities.push(facility);
        self
    }

    /// 建構器模式：添加物品
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_facility(&mut self, facility: Facility) {
        self.facilities.push(facility);
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// 驗證並建立目錄
    ///
    /// 驗證順序依ID排序，因此同一份錯誤配置總是報告同一個錯誤。
    pub fn build(mut self) -> Result<Catalog> {
        self.facilities.sort_by(|a, b| a.id.cmp(&b.id));
        self.items.sort_by(|a, b| a.id.cmp(&b.id));

        let mut facilities = HashMap::with_capacity(self.facilities.len());
        for facility in self.facilities {
            if facility.throughput <= Decimal::ZERO {
                return Err(CraftError::ConfigValidation(format!(
                    "設施 {}: 產能必須大於 0（實際 {}）",
                    facility.id, facility.throughput
                )));
            }
            if facilities.contains_key(&facility.id) {
                return Err(CraftError::ConfigValidation(format!(
                    "設施 {} 重複定義",
                    facility.id
                )));
            }
            facilities.insert(facility.id.clone(), facility);
        }

        let item_ids: HashSet<&str> = self.items.iter().map(|i| i.id.as_str()).collect();
        if item_ids.len() != self.items.len() {
            let duplicate = self
                .items
                .windows(2)
                .find(|pair| pair[0].id == pair[1].id)
                .map(|pair| pair[0].id.clone())
                .unwrap_or_default();
            return Err(CraftError::ConfigValidation(format!("物品 {} 重複定義", duplicate)));
        }

        for item in &self.items {
            Self::validate_item(item, &facilities, &item_ids)?;
        }

        let items = self
            .items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect::<HashMap<_, _>>();

        tracing::debug!(
            "目錄建立完成：物品 {} 個，設施 {} 個",
            items.len(),
            facilities.len()
        );

        Ok(Catalog { items, facilities })
    }

    fn validate_item(
        item: &Item,
        facilities: &HashMap<String, Facility>,
        item_ids: &HashSet<&str>,
    ) -> Result<()> {
        if item.craft_time <= Decimal::ZERO {
            return Err(CraftError::ConfigValidation(format!(
                "物品 {}: 製造時間必須大於 0（實際 {}）",
                item.id, item.craft_time
            )));
        }

        if item.facilities.is_empty() {
            return Err(CraftError::ConfigValidation(format!(
                "物品 {}: 沒有可用的生產設施",
                item.id
            )));
        }

        for facility_id in &item.facilities {
            if !facilities.contains_key(facility_id) {
                return Err(CraftError::ConfigValidation(format!(
                    "物品 {}: 未知設施 {}",
                    item.id, facility_id
                )));
            }
        }

        for ingredient in &item.ingredients {
            if !item_ids.contains(ingredient.item_id.as_str()) {
                return Err(CraftError::ConfigValidation(format!(
                    "物品 {}: 未知原料 {}",
                    item.id, ingredient.item_id
                )));
            }
            if ingredient.quantity <= Decimal::ZERO {
                return Err(CraftError::ConfigValidation(format!(
                    "物品 {}: 原料 {} 數量必須大於 0",
                    item.id, ingredient.item_id
                )));
            }
        }

        Ok(())
    }
}
