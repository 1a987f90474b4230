//! 物品與配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方原料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 原料物品ID
    pub item_id: String,

    /// 每生產一單位父物品所需的數量（已除以批量）
    pub quantity: Decimal,
}

impl Ingredient {
    pub fn new(item_id: String, quantity: Decimal) -> Self {
        Self { item_id, quantity }
    }
}

/// 可製造物品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// 物品ID
    pub id: String,

    /// 生產一單位所需時間（秒，已除以批量）
    pub craft_time: Decimal,

    /// 配方原料
    pub ingredients: Vec<Ingredient>,

    /// 可生產此物品的設施ID
    pub facilities: Vec<String>,
}

impl Item {
    /// 創建新的物品（無原料、無設施）
    pub fn new(id: String, craft_time: Decimal) -> Self {
        Self {
            id,
            craft_time,
            ingredients: Vec::new(),
            facilities: Vec::new(),
        }
    }

    /// 建構器模式：添加原料
    pub fn with_ingredient(mut self, item_id: String, quantity: Decimal) -> Self {
        self.ingredients.push(Ingredient::new(item_id, quantity));
        self
    }

    /// 建構器模式：添加可用設施
    pub fn with_facility(mut self, facility_id: String) -> Self {
        self.facilities.push(facility_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = Item::new("electronic_circuit".to_string(), Decimal::new(5, 1))
            .with_ingredient("iron_plate".to_string(), Decimal::from(1))
            .with_ingredient("copper_cable".to_string(), Decimal::from(3))
            .with_facility("assembler_1".to_string());

        assert_eq!(item.ingredients.len(), 2);
        assert_eq!(item.ingredients[1].item_id, "copper_cable");
        assert_eq!(item.ingredients[1].quantity, Decimal::from(3));
        assert_eq!(item.facilities, vec!["assembler_1".to_string()]);
    }
}
