//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 物品ID → 累計需求
pub type DemandMap = BTreeMap<String, DemandRecord>;

/// 單一物品的累計需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    /// 物品ID
    pub item_id: String,

    /// 累計需求速率（每秒單位數），所有消耗路徑加總
    pub rate: Decimal,

    /// 低階碼：從根物品出發的最長路徑長度
    pub level: usize,

    /// 對此物品產生需求的消耗邊數量
    pub consumers: usize,
}

impl DemandRecord {
    /// 創建新的需求記錄（尚無需求）
    pub fn new(item_id: String, level: usize) -> Self {
        Self {
            item_id,
            rate: Decimal::ZERO,
            level,
            consumers: 0,
        }
    }

    /// 累加一條消耗路徑帶來的需求
    pub fn accumulate(&mut self, rate: Decimal) {
        self.rate += rate;
        self.consumers += 1;
    }

    /// 更新低階碼（取較深者）
    pub fn deepen(&mut self, level: usize) {
        self.level = self.level.max(level);
    }

    pub fn has_demand(&self) -> bool {
        self.rate > Decimal::ZERO
    }
}
