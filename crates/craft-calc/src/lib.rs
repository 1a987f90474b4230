//! # Craft Calculation Engine
//!
//! 核心產線計算引擎：需求累計、設施選擇與請求編排

pub mod demand;
pub mod facility;
pub mod resolver;

// Re-export 主要類型
pub use demand::DemandAccumulator;
pub use facility::FacilitySelector;
pub use resolver::Resolver;

use chrono::{DateTime, Utc};
use craft_core::{Assignment, DemandMap};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 產線規劃結果（單一請求）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// 請求ID
    pub id: Uuid,

    /// 目標物品ID
    pub root_item_id: String,

    /// 目標產出速率（每秒單位數）
    pub requested_rate: Decimal,

    /// 科技等級上限
    pub tech_level_cap: u32,

    /// 各物品累計需求
    pub demand: DemandMap,

    /// 設施分配（依設施ID、物品ID排序）
    pub assignments: Vec<Assignment>,

    /// 產生時間
    pub generated_at: DateTime<Utc>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ProductionPlan {
    /// 創建空的規劃結果
    pub fn new(root_item_id: String, requested_rate: Decimal, tech_level_cap: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            root_item_id,
            requested_rate,
            tech_level_cap,
            demand: DemandMap::new(),
            assignments: Vec::new(),
            generated_at: Utc::now(),
            calculation_time_ms: None,
        }
    }

    /// 查找物品的設施分配
    pub fn assignment_for(&self, item_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.item_id == item_id)
    }

    /// 各設施總數量
    pub fn facility_totals(&self) -> BTreeMap<String, u64> {
        let mut totals = BTreeMap::new();
        for assignment in &self.assignments {
            *totals.entry(assignment.facility_id.clone()).or_insert(0) += assignment.facility_count;
        }
        totals
    }

    /// 設施總數量
    pub fn total_facilities(&self) -> u64 {
        self.assignments.iter().map(|a| a.facility_count).sum()
    }
}
