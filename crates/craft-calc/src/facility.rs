//! 設施選擇
//!
//! 每個有需求的物品，在科技等級允許的設施中選出所需數量最少者。
//! 數量相同時依序比較：科技等級較低、產能較低、設施ID字典序。

use craft_core::{Assignment, Catalog, CraftError, DemandMap, DemandRecord, Facility, Result};
use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 批量正規化會在 Decimal 最末位留下除法殘差（如 2/3 × 3），取整前先捨去最後幾位
const LOAD_SCALE: u32 = 24;

/// 設施選擇器
pub struct FacilitySelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> FacilitySelector<'a> {
    /// 創建新的設施選擇器
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// 為所有有需求的物品選擇設施
    ///
    /// 結果依（設施ID、物品ID）排序。多個物品同時失敗時，
    /// 回報物品ID最小者的錯誤，與執行緒排程無關。
    pub fn select(&self, demand: &DemandMap, tech_level_cap: u32) -> Result<Vec<Assignment>> {
        let records: Vec<&DemandRecord> = demand.values().filter(|r| r.has_demand()).collect();

        tracing::debug!(
            "設施選擇：物品 {} 個，科技等級上限 {}",
            records.len(),
            tech_level_cap
        );

        let results: Vec<Result<Assignment>> = records
            .par_iter()
            .map(|record| self.select_for_item(record, tech_level_cap))
            .collect();

        let mut assignments = Vec::with_capacity(results.len());
        for result in results {
            assignments.push(result?);
        }

        assignments.sort_by(|a, b| {
            a.facility_id
                .cmp(&b.facility_id)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });

        Ok(assignments)
    }

    /// 為單一物品選擇設施
    pub fn select_for_item(&self, record: &DemandRecord, tech_level_cap: u32) -> Result<Assignment> {
        let item = self.catalog.require_item(&record.item_id)?;

        let mut best: Option<(u64, &Facility)> = None;
        for facility in self
            .catalog
            .eligible_facilities(item)
            .filter(|f| f.is_available_at(tech_level_cap))
        {
            let count = required_count(record.rate, item.craft_time, facility.throughput)?;
            let better = match best {
                None => true,
                Some((best_count, best_facility)) => {
                    rank(count, facility) < rank(best_count, best_facility)
                }
            };
            if better {
                best = Some((count, facility));
            }
        }

        let (count, facility) = best.ok_or_else(|| CraftError::NoEligibleFacility {
            item_id: record.item_id.clone(),
            tech_level: tech_level_cap,
        })?;

        // 無需求時數量為 0，利用率也為 0
        let utilization = if count == 0 {
            Decimal::ZERO
        } else {
            let capacity = Decimal::from(count) * facility.throughput;
            (record.rate * item.craft_time / capacity).round_dp(4)
        };

        tracing::debug!(
            "物品 {} → {} × {}（需求 {} ips，利用率 {}）",
            item.id,
            count,
            facility.id,
            record.rate,
            utilization
        );

        Ok(
            Assignment::new(item.id.clone(), facility.id.clone(), count, record.rate)
                .with_utilization(utilization),
        )
    }
}

/// 排序鍵：數量、科技等級、產能、設施ID
fn rank(count: u64, facility: &Facility) -> (u64, u32, Decimal, &str) {
    (count, facility.tier, facility.throughput, facility.id.as_str())
}

/// 持續滿足需求所需的最少設施數量：ceil(需求 × 製造時間 / 產能)
///
/// 需求為正時至少為 1。
pub fn required_count(rate: Decimal, craft_time: Decimal, throughput: Decimal) -> Result<u64> {
    let load = rate
        .checked_mul(craft_time)
        .and_then(|work| work.checked_div(throughput))
        .ok_or_else(|| {
            CraftError::CalculationError(format!(
                "設施負載溢位: {} × {} / {}",
                rate, craft_time, throughput
            ))
        })?;

    let count = load.round_dp(LOAD_SCALE).ceil().to_u64().ok_or_else(|| {
        CraftError::CalculationError(format!("設施數量超出範圍: {}", load))
    })?;

    if rate > Decimal::ZERO {
        Ok(count.max(1))
    } else {
        Ok(count)
    }
}
