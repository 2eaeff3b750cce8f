//! Customer recency — days since each customer's last order, and their
//! lifetime sales. Feeds the customer lifecycle bubble chart.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
    types::CustomerName,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRecencyRow {
    pub customer_name:         CustomerName,
    pub last_order_date:       NaiveDate,
    pub days_since_last_order: i64,
    pub total_sales:           f64,
}

/// One row per distinct customer, ordered by customer name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerRecency {
    pub rows: Vec<CustomerRecencyRow>,
}

impl CustomerRecency {
    pub fn get(&self, customer_name: &str) -> Option<&CustomerRecencyRow> {
        self.rows.iter().find(|r| r.customer_name == customer_name)
    }
}

struct CustomerAcc {
    last_order: NaiveDate,
    sales:      f64,
}

pub fn customer_recency(table: &OrderTable) -> CustomerRecency {
    let Some(reference) = table.max_order_date() else {
        return CustomerRecency::default();
    };

    let mut by_customer: BTreeMap<&str, CustomerAcc> = BTreeMap::new();
    for row in table.rows() {
        by_customer
            .entry(row.customer_name.as_str())
            .and_modify(|acc| {
                acc.last_order = acc.last_order.max(row.order_date);
                acc.sales += row.sales;
            })
            .or_insert(CustomerAcc {
                last_order: row.order_date,
                sales:      row.sales,
            });
    }

    let rows = by_customer
        .into_iter()
        .map(|(name, acc)| CustomerRecencyRow {
            customer_name:         name.to_string(),
            last_order_date:       acc.last_order,
            days_since_last_order: (reference - acc.last_order).num_days(),
            total_sales:           acc.sales,
        })
        .collect();

    CustomerRecency { rows }
}

pub struct RecencySection;

impl ReportSection for RecencySection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::CustomerRecency
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::CustomerRecency(customer_recency(table))
    }
}
