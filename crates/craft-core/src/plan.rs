//! 設施分配模型（規劃結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 設施分配：某物品由哪種設施、幾台來生產
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// 物品ID
    pub item_id: String,

    /// 選定的設施ID
    pub facility_id: String,

    /// 需要的設施數量
    pub facility_count: u64,

    /// 物品需求速率（每秒單位數）
    pub demand: Decimal,

    /// 設施產能利用率（0 < u ≤ 1）
    pub utilization: Decimal,
}

impl Assignment {
    /// 創建新的設施分配
    pub fn new(item_id: String, facility_id: String, facility_count: u64, demand: Decimal) -> Self {
        Self {
            item_id,
            facility_id,
            facility_count,
            demand,
            utilization: Decimal::ONE,
        }
    }

    /// 建構器模式：設置產能利用率
    pub fn with_utilization(mut self, utilization: Decimal) -> Self {
        self.utilization = utilization;
        self
    }
}
