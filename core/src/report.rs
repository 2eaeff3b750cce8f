//! The rendered report — every section table, handed to presentation.

use crate::{
    deal_size_section::DealSizeSummary,
    error::ReportResult,
    flow_section::CountryToProductFlow,
    heat_section::CountryProductHeat,
    order::OrderTable,
    profile_section::TransactionProfile,
    recency_section::CustomerRecency,
    repurchase_section::RepurchaseCycle,
    section::{SectionSlot, SectionTable},
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub source_rows:       usize,
    pub grand_total_sales: f64,
    pub first_order_date:  Option<NaiveDate>,
    pub last_order_date:   Option<NaiveDate>,
    pub sections:          Vec<SectionTable>,
}

impl SalesReport {
    pub fn new(table: &OrderTable, sections: Vec<SectionTable>) -> Self {
        Self {
            source_rows:       table.len(),
            grand_total_sales: table.grand_total_sales(),
            first_order_date:  table.min_order_date(),
            last_order_date:   table.max_order_date(),
            sections,
        }
    }

    pub fn section(&self, slot: SectionSlot) -> Option<&SectionTable> {
        self.sections.iter().find(|s| s.slot() == slot)
    }

    pub fn customer_recency(&self) -> Option<&CustomerRecency> {
        match self.section(SectionSlot::CustomerRecency)? {
            SectionTable::CustomerRecency(t) => Some(t),
            _ => None,
        }
    }

    pub fn country_product_heat(&self) -> Option<&CountryProductHeat> {
        match self.section(SectionSlot::CountryProductHeat)? {
            SectionTable::CountryProductHeat(t) => Some(t),
            _ => None,
        }
    }

    pub fn transaction_profile(&self) -> Option<&TransactionProfile> {
        match self.section(SectionSlot::TransactionProfile)? {
            SectionTable::TransactionProfile(t) => Some(t),
            _ => None,
        }
    }

    pub fn repurchase_cycle(&self) -> Option<&RepurchaseCycle> {
        match self.section(SectionSlot::RepurchaseCycle)? {
            SectionTable::RepurchaseCycle(t) => Some(t),
            _ => None,
        }
    }

    pub fn country_product_flow(&self) -> Option<&CountryToProductFlow> {
        match self.section(SectionSlot::CountryProductFlow)? {
            SectionTable::CountryProductFlow(t) => Some(t),
            _ => None,
        }
    }

    pub fn deal_size_summary(&self) -> Option<&DealSizeSummary> {
        match self.section(SectionSlot::DealSizeSummary)? {
            SectionTable::DealSizeSummary(t) => Some(t),
            _ => None,
        }
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
