//! # CraftPlan
//!
//! 產線規劃工具：給定目標物品與產出速率，計算各中間物品需求與所需設施數量。

pub mod report;

pub use craft_calc::{ProductionPlan, Resolver};
pub use craft_core::{loader, Catalog, CraftError, PlannerConfig};
