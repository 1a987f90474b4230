//! 生產設施模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產設施（組裝機、熔爐等）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// 設施ID
    pub id: String,

    /// 科技等級（未設定時為 0）
    pub tier: u32,

    /// 產能（每秒單位數）
    pub throughput: Decimal,
}

impl Facility {
    /// 創建新的設施（科技等級 0）
    pub fn new(id: String, throughput: Decimal) -> Self {
        Self {
            id,
            tier: 0,
            throughput,
        }
    }

    /// 建構器模式：設置科技等級
    pub fn with_tier(mut self, tier: u32) -> Self {
        self.tier = tier;
        self
    }

    /// 檢查在指定科技等級下是否可用
    pub fn is_available_at(&self, tech_level: u32) -> bool {
        self.tier <= tech_level
    }
}
