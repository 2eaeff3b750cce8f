//! Repurchase cycle — average days between a customer's orders within one
//! product line, averaged across that line's customers.
//!
//! Per (customer, product line): span = last - first order date in days,
//! divided by the order count (floored at 1). A customer with one order in
//! a line therefore contributes 0 and still counts toward the mean.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
    types::ProductLine,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepurchaseCycleRow {
    pub product_line:      ProductLine,
    pub mean_days_between: f64,
    /// Customers averaged into `mean_days_between`.
    pub customer_count:    usize,
}

/// One row per distinct product line, ordered by product line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepurchaseCycle {
    pub rows: Vec<RepurchaseCycleRow>,
}

impl RepurchaseCycle {
    pub fn get(&self, product_line: &str) -> Option<&RepurchaseCycleRow> {
        self.rows.iter().find(|r| r.product_line == product_line)
    }
}

struct SpanAcc {
    first: NaiveDate,
    last:  NaiveDate,
    count: u64,
}

impl SpanAcc {
    fn days_between(&self) -> f64 {
        (self.last - self.first).num_days() as f64 / self.count.max(1) as f64
    }
}

pub fn repurchase_cycle(table: &OrderTable) -> RepurchaseCycle {
    let mut spans: BTreeMap<(&str, &str), SpanAcc> = BTreeMap::new();
    for row in table.rows() {
        spans
            .entry((row.customer_name.as_str(), row.product_line.as_str()))
            .and_modify(|acc| {
                acc.first = acc.first.min(row.order_date);
                acc.last = acc.last.max(row.order_date);
                acc.count += 1;
            })
            .or_insert(SpanAcc {
                first: row.order_date,
                last:  row.order_date,
                count: 1,
            });
    }

    let mut by_line: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for ((_, product_line), acc) in &spans {
        let entry = by_line.entry(*product_line).or_insert((0.0, 0));
        entry.0 += acc.days_between();
        entry.1 += 1;
    }

    let rows = by_line
        .into_iter()
        .map(|(product_line, (sum, n))| RepurchaseCycleRow {
            product_line:      product_line.to_string(),
            mean_days_between: sum / n as f64,
            customer_count:    n,
        })
        .collect();

    RepurchaseCycle { rows }
}

pub struct RepurchaseSection;

impl ReportSection for RepurchaseSection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::RepurchaseCycle
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::RepurchaseCycle(repurchase_cycle(table))
    }
}
