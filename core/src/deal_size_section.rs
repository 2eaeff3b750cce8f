//! Deal-size summary — per deal-size category, how many customers trade at
//! that size and what a customer's total at that size averages to.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
    types::DealSize,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealSizeRow {
    pub deal_size:           DealSize,
    pub customer_count:      usize,
    pub mean_customer_sales: f64,
}

/// One row per distinct deal size, ordered by deal size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DealSizeSummary {
    pub rows: Vec<DealSizeRow>,
}

impl DealSizeSummary {
    pub fn get(&self, deal_size: &str) -> Option<&DealSizeRow> {
        self.rows.iter().find(|r| r.deal_size == deal_size)
    }
}

pub fn deal_size_summary(table: &OrderTable) -> DealSizeSummary {
    let mut per_pair: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for row in table.rows() {
        *per_pair
            .entry((row.deal_size.as_str(), row.customer_name.as_str()))
            .or_insert(0.0) += row.sales;
    }

    let mut by_size: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for (&(deal_size, _), &sales) in &per_pair {
        let entry = by_size.entry(deal_size).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += sales;
    }

    let rows = by_size
        .into_iter()
        .map(|(deal_size, (customers, sales))| DealSizeRow {
            deal_size:           deal_size.to_string(),
            customer_count:      customers,
            mean_customer_sales: sales / customers as f64,
        })
        .collect();

    DealSizeSummary { rows }
}

pub struct DealSizeSection;

impl ReportSection for DealSizeSection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::DealSizeSummary
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::DealSizeSummary(deal_size_summary(table))
    }
}
