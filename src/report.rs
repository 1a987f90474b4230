//! 文字報表輸出

use craft_calc::ProductionPlan;
use craft_core::Catalog;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

const COUNT_HEADER: &str = "#";
const PRODUCER_HEADER: &str = "Producer";
const ITEM_HEADER: &str = "Item";
const RATE_HEADER: &str = "items/s";

/// 將規劃結果輸出為對齊的表格
///
/// 欄位：設施數量、設施、物品、每秒需求（兩位小數），最後附上各設施總數。
pub fn render_plan(plan: &ProductionPlan) -> String {
    let rows: Vec<[String; 4]> = plan
        .assignments
        .iter()
        .map(|a| {
            [
                a.facility_count.to_string(),
                a.facility_id.clone(),
                a.item_id.clone(),
                format_rate(a.demand),
            ]
        })
        .collect();

    let headers = [COUNT_HEADER, PRODUCER_HEADER, ITEM_HEADER, RATE_HEADER];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &headers.map(str::to_string), &widths);
    write_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    let totals = plan.facility_totals();
    if !totals.is_empty() {
        out.push('\n');
        let name_width = totals.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        for (facility_id, count) in &totals {
            let _ = writeln!(out, "{:<name_width$} {}", facility_id, count);
        }
        let _ = writeln!(out, "{:<name_width$} {}", "total", plan.total_facilities());
    }

    out
}

/// 列出目錄中所有物品（已排序）
pub fn render_item_list(catalog: &Catalog) -> String {
    let mut out = String::from("Known items:\n");
    for item_id in catalog.item_ids() {
        out.push_str(item_id);
        out.push('\n');
    }
    out
}

/// 速率四捨五入到兩位小數（`{:.2}` 只會截斷）
fn format_rate(rate: Decimal) -> String {
    format!(
        "{:.2}",
        rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(line.trim_end());
    out.push('\n');
}
