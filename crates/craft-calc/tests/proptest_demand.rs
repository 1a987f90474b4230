//! 需求累計的性質測試
//!
//! 隨機產生最多 6 個物品的 DAG，以暴力列舉所有路徑驗證累計需求。

use craft_calc::{DemandAccumulator, FacilitySelector};
use craft_core::{Catalog, CatalogBuilder, Facility, Item};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// 邊 i → j（i < j）的用量，None 表示無邊
#[derive(Debug, Clone)]
struct Graph {
    size: usize,
    edges: Vec<Vec<Option<i64>>>,
}

impl Graph {
    fn id(index: usize) -> String {
        format!("item_{}", index)
    }

    fn catalog(&self, reverse_ingredients: bool) -> Catalog {
        let mut builder = CatalogBuilder::new()
            .with_facility(Facility::new("assembler".to_string(), Decimal::ONE).with_tier(1))
            .with_facility(Facility::new("furnace".to_string(), Decimal::from(2)).with_tier(2));

        for i in 0..self.size {
            let mut targets: Vec<usize> = (i + 1..self.size).collect();
            if reverse_ingredients {
                targets.reverse();
            }

            let mut item = Item::new(Self::id(i), Decimal::ONE)
                .with_facility("furnace".to_string())
                .with_facility("assembler".to_string());
            for j in targets {
                if let Some(quantity) = self.edges[i][j] {
                    item = item.with_ingredient(Self::id(j), Decimal::from(quantity));
                }
            }
            builder.add_item(item);
        }

        builder.build().unwrap()
    }

    /// 從 `from` 到 `to` 所有路徑的用量乘積總和
    fn path_weight(&self, from: usize, to: usize) -> Decimal {
        if from == to {
            return Decimal::ONE;
        }
        (from + 1..self.size)
            .filter_map(|k| self.edges[from][k].map(|q| (k, q)))
            .map(|(k, q)| Decimal::from(q) * self.path_weight(k, to))
            .sum()
    }
}

fn arb_graph(max_items: usize) -> impl Strategy<Value = Graph> {
    (2..=max_items).prop_flat_map(|size| {
        proptest::collection::vec(proptest::option::of(1..=3i64), size * size).prop_map(
            move |flat| {
                let edges = (0..size)
                    .map(|i| {
                        (0..size)
                            .map(|j| if j > i { flat[i * size + j] } else { None })
                            .collect()
                    })
                    .collect();
                Graph { size, edges }
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// 每個物品的需求 = Σ 所有根到該物品的路徑（速率 × 用量乘積）
    #[test]
    fn demand_equals_path_enumeration(graph in arb_graph(6), rate in 1..=10i64) {
        let catalog = graph.catalog(false);
        let rate = Decimal::from(rate);

        let demand = DemandAccumulator::new(&catalog)
            .resolve(&Graph::id(0), rate)
            .unwrap();

        for index in 0..graph.size {
            let expected = rate * graph.path_weight(0, index);
            match demand.get(&Graph::id(index)) {
                Some(record) => prop_assert_eq!(record.rate, expected),
                None => prop_assert_eq!(expected, Decimal::ZERO),
            }
        }
    }

    /// 原料走訪順序不影響結果
    #[test]
    fn demand_independent_of_ingredient_order(graph in arb_graph(6), rate in 1..=10i64) {
        let forward = graph.catalog(false);
        let backward = graph.catalog(true);
        let rate = Decimal::from(rate);

        let a = DemandAccumulator::new(&forward).resolve(&Graph::id(0), rate).unwrap();
        let b = DemandAccumulator::new(&backward).resolve(&Graph::id(0), rate).unwrap();

        prop_assert_eq!(a, b);
    }

    /// 相同輸入的設施分配完全一致
    #[test]
    fn selection_is_deterministic(graph in arb_graph(6), rate in 1..=10i64, cap in 1..=3u32) {
        let catalog = graph.catalog(false);
        let demand = DemandAccumulator::new(&catalog)
            .resolve(&Graph::id(0), Decimal::from(rate))
            .unwrap();

        let selector = FacilitySelector::new(&catalog);
        let first = selector.select(&demand, cap).unwrap();
        let second = selector.select(&demand, cap).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), demand.len());
    }
}
