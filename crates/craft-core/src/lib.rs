//! # Craft Core
//!
//! 核心資料模型與類型定義：物品、設施、目錄與需求記錄

pub mod catalog;
pub mod config;
pub mod demand;
pub mod facility;
pub mod item;
pub mod loader;
pub mod plan;

// Re-export 主要類型
pub use catalog::{Catalog, CatalogBuilder};
pub use config::PlannerConfig;
pub use demand::{DemandMap, DemandRecord};
pub use facility::Facility;
pub use item::{Ingredient, Item};
pub use plan::Assignment;

/// 產線規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CraftError {
    #[error("目錄配置錯誤: {0}")]
    ConfigValidation(String),

    #[error("未知物品: {0}")]
    UnknownItem(String),

    #[error("配方存在循環: {}", .path.join(" -> "))]
    CyclicRecipe { path: Vec<String> },

    #[error("科技等級 {tech_level} 下沒有可生產物品 {item_id} 的設施")]
    NoEligibleFacility { item_id: String, tech_level: u32 },

    #[error("配方樹深度超過上限 {limit}")]
    ResourceExhausted { limit: usize },

    #[error("無效的請求: {0}")]
    InvalidRequest(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("讀取檔案失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CraftError>;
