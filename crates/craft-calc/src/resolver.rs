//! 產線規劃主計算器

use craft_core::{Assignment, Catalog, CraftError, DemandMap, PlannerConfig};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{DemandAccumulator, FacilitySelector, ProductionPlan};

/// 產線規劃計算器
///
/// 目錄以 `Arc` 共享且不可變；每次請求的工作資料都是私有的，
/// 同一個 `Resolver` 可同時服務多個執行緒。
pub struct Resolver {
    /// 物品/設施目錄
    catalog: Arc<Catalog>,

    /// 規劃配置
    config: PlannerConfig,
}

impl Resolver {
    /// 創建新的計算器
    pub fn new(catalog: Arc<Catalog>, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// 主計算入口：需求累計 → 設施選擇
    ///
    /// 所有錯誤都由輸入與目錄決定，遇到第一個錯誤即返回，不重試。
    pub fn resolve(&self, item_id: &str, rate: Decimal) -> craft_core::Result<ProductionPlan> {
        tracing::info!(
            "開始產線規劃：物品 {}，目標 {} ips，科技等級上限 {}",
            item_id,
            rate,
            self.config.tech_level_cap
        );

        let start_time = std::time::Instant::now();

        if rate <= Decimal::ZERO {
            return Err(CraftError::InvalidRequest(format!(
                "目標速率必須大於 0（實際 {}）",
                rate
            )));
        }
        self.catalog.require_item(item_id)?;

        // Step 1: 需求累計
        tracing::debug!("Step 1: 需求累計");
        let demand = self.resolve_demand(item_id, rate)?;
        tracing::debug!("需求物品數量: {}", demand.len());

        // Step 2: 設施選擇
        tracing::debug!("Step 2: 設施選擇");
        let assignments = self.select_facilities(&demand, self.config.tech_level_cap)?;

        let mut plan = ProductionPlan::new(item_id.to_string(), rate, self.config.tech_level_cap);
        plan.demand = demand;
        plan.assignments = assignments;
        plan.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("產線規劃完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "設施分配: {} 筆，設施總數 {}",
            plan.assignments.len(),
            plan.total_facilities()
        );

        Ok(plan)
    }

    /// 計算累計需求
    pub fn resolve_demand(&self, item_id: &str, rate: Decimal) -> craft_core::Result<DemandMap> {
        DemandAccumulator::new(&self.catalog)
            .with_max_depth(self.config.max_depth)
            .resolve(item_id, rate)
    }

    /// 依需求選擇設施
    pub fn select_facilities(
        &self,
        demand: &DemandMap,
        tech_level_cap: u32,
    ) -> craft_core::Result<Vec<Assignment>> {
        FacilitySelector::new(&self.catalog).select(demand, tech_level_cap)
    }

    /// 獲取目錄引用
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}
