//! 規劃參數配置

use serde::{Deserialize, Serialize};

/// 預設最高科技等級（組裝機 3 級）
pub const DEFAULT_TECH_LEVEL_CAP: u32 = 3;

/// 預設配方樹最大深度
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// 產線規劃配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 可使用的最高設施科技等級
    pub tech_level_cap: u32,

    /// 配方樹最大深度（超過時回報資源耗盡，而不是無限展開）
    pub max_depth: usize,
}

impl PlannerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            tech_level_cap: DEFAULT_TECH_LEVEL_CAP,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// 建構器模式：設置科技等級上限
    pub fn with_tech_level_cap(mut self, tech_level_cap: u32) -> Self {
        self.tech_level_cap = tech_level_cap;
        self
    }

    /// 建構器模式：設置最大深度
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
