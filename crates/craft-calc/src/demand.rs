//! 需求累計
//!
//! 從根物品出發走訪配方圖，計算每個可達物品的累計需求速率。
//! 分兩個階段：
//! 1. 迭代式深度優先走訪（顯式堆疊），以「目前路徑」偵測循環，輸出後序；
//! 2. 依反向後序（拓撲順序）把需求從消耗者折疊到原料。
//!
//! 菱形依賴（同一原料經多個父物品到達）的需求一律加總，不會被覆蓋。

use craft_core::config::DEFAULT_MAX_DEPTH;
use craft_core::{Catalog, CraftError, DemandMap, DemandRecord, Item, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// 走訪步驟
enum Step<'a> {
    Enter(&'a Item),
    Exit(&'a Item),
}

/// 需求累計器
pub struct DemandAccumulator<'a> {
    catalog: &'a Catalog,
    max_depth: usize,
}

impl<'a> DemandAccumulator<'a> {
    /// 創建新的需求累計器
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// 建構器模式：設置最大深度
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// 計算從根物品出發的累計需求
    ///
    /// # 錯誤
    /// * `UnknownItem` - 根物品不在目錄中
    /// * `CyclicRecipe` - 配方圖存在循環
    /// * `ResourceExhausted` - 配方樹深度超過上限
    pub fn resolve(&self, root_item_id: &str, requested_rate: Decimal) -> Result<DemandMap> {
        let root = self.catalog.require_item(root_item_id)?;
        let order = self.topological_order(root)?;

        tracing::debug!("可達物品數量: {}", order.len());

        let mut demand = DemandMap::new();
        let mut root_record = DemandRecord::new(root.id.clone(), 0);
        root_record.rate = requested_rate;
        demand.insert(root.id.clone(), root_record);

        for item in order {
            // 拓撲順序保證所有消耗者都已處理，此時需求已是最終值
            let Some(record) = demand.get(&item.id) else {
                continue;
            };
            let (rate, child_level) = (record.rate, record.level + 1);

            for ingredient in &item.ingredients {
                let induced = rate.checked_mul(ingredient.quantity).ok_or_else(|| {
                    CraftError::CalculationError(format!(
                        "需求溢位: {} → {}",
                        item.id, ingredient.item_id
                    ))
                })?;

                let child = demand
                    .entry(ingredient.item_id.clone())
                    .or_insert_with(|| DemandRecord::new(ingredient.item_id.clone(), child_level));

                if child.rate.checked_add(induced).is_none() {
                    return Err(CraftError::CalculationError(format!(
                        "需求溢位: {}",
                        ingredient.item_id
                    )));
                }
                child.accumulate(induced);
                child.deepen(child_level);

                tracing::trace!(
                    "需求展開: {} → {} (+{} ips)",
                    item.id,
                    ingredient.item_id,
                    induced
                );
            }
        }

        Ok(demand)
    }

    /// 反向後序（消耗者在前、原料在後）
    ///
    /// 循環偵測只看目前路徑：同一物品從不相關的分支再次到達是菱形依賴，不是循環。
    fn topological_order(&self, root: &'a Item) -> Result<Vec<&'a Item>> {
        let mut post_order = Vec::new();
        let mut finished: HashSet<&'a str> = HashSet::new();
        let mut on_path: HashSet<&'a str> = HashSet::new();
        let mut path: Vec<&'a str> = Vec::new();
        let mut stack = vec![Step::Enter(root)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(item) => {
                    if finished.contains(item.id.as_str()) {
                        continue;
                    }

                    if on_path.contains(item.id.as_str()) {
                        let start = path.iter().position(|id| *id == item.id).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            path[start..].iter().map(|id| id.to_string()).collect();
                        cycle.push(item.id.clone());

                        tracing::debug!("偵測到配方循環: {:?}", cycle);
                        return Err(CraftError::CyclicRecipe { path: cycle });
                    }

                    if path.len() >= self.max_depth {
                        return Err(CraftError::ResourceExhausted {
                            limit: self.max_depth,
                        });
                    }

                    on_path.insert(item.id.as_str());
                    path.push(item.id.as_str());
                    stack.push(Step::Exit(item));

                    // 反向壓入，使原料依定義順序走訪
                    for ingredient in item.ingredients.iter().rev() {
                        let child = self.catalog.require_item(&ingredient.item_id)?;
                        if !finished.contains(child.id.as_str()) {
                            stack.push(Step::Enter(child));
                        }
                    }
                }
                Step::Exit(item) => {
                    on_path.remove(item.id.as_str());
                    path.pop();
                    finished.insert(item.id.as_str());
                    post_order.push(item);
                }
            }
        }

        post_order.reverse();
        Ok(post_order)
    }
}
