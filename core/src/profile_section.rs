//! Price / quantity profile — one point per order line, no aggregation.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
    types::ProductLine,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub price_each:       f64,
    pub quantity_ordered: u32,
    pub sales:            f64,
    pub product_line:     ProductLine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionProfile {
    pub points: Vec<ProfilePoint>,
}

pub fn transaction_profile(table: &OrderTable) -> TransactionProfile {
    let points = table
        .rows()
        .iter()
        .map(|row| ProfilePoint {
            price_each:       row.price_each,
            quantity_ordered: row.quantity_ordered,
            sales:            row.sales,
            product_line:     row.product_line.clone(),
        })
        .collect();
    TransactionProfile { points }
}

pub struct ProfileSection;

impl ReportSection for ProfileSection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::TransactionProfile
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::TransactionProfile(transaction_profile(table))
    }
}
