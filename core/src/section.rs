//! Report section trait and registry slots.
//!
//! RULE: every report section implements ReportSection.
//! A section is a pure function of the loaded table: it borrows the
//! table, allocates its own output and keeps no state between renders.
//! Sections never read each other's output.

use crate::{
    deal_size_section::DealSizeSummary,
    flow_section::CountryToProductFlow,
    heat_section::CountryProductHeat,
    order::OrderTable,
    profile_section::TransactionProfile,
    recency_section::CustomerRecency,
    repurchase_section::RepurchaseCycle,
};
use serde::Serialize;

/// The contract every report section must fulfill.
pub trait ReportSection: Send {
    /// Stable slot this section fills in the report.
    fn slot(&self) -> SectionSlot;

    fn name(&self) -> &'static str {
        self.slot().name()
    }

    fn title(&self) -> &'static str {
        self.slot().title()
    }

    /// Derive this section's table from the loaded order lines.
    fn compute(&self, table: &OrderTable) -> SectionTable;
}

/// Stable section slots, in report order.
/// NEVER reorder — the presentation layer lays sections out by slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SectionSlot {
    CustomerRecency = 0,
    CountryProductHeat = 1,
    TransactionProfile = 2,
    RepurchaseCycle = 3,
    CountryProductFlow = 4,
    DealSizeSummary = 5,
}

impl SectionSlot {
    pub const ALL: [SectionSlot; 6] = [
        Self::CustomerRecency,
        Self::CountryProductHeat,
        Self::TransactionProfile,
        Self::RepurchaseCycle,
        Self::CountryProductFlow,
        Self::DealSizeSummary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CustomerRecency => "customer_recency",
            Self::CountryProductHeat => "country_product_heat",
            Self::TransactionProfile => "transaction_profile",
            Self::RepurchaseCycle => "repurchase_cycle",
            Self::CountryProductFlow => "country_product_flow",
            Self::DealSizeSummary => "deal_size_summary",
        }
    }

    /// Heading shown above the section's chart.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CustomerRecency => "Customer lifecycle segmentation",
            Self::CountryProductHeat => "Sales heatmap (country x product line)",
            Self::TransactionProfile => "Unit price vs quantity",
            Self::RepurchaseCycle => "Repurchase cycle by product line",
            Self::CountryProductFlow => "Country -> product line flow",
            Self::DealSizeSummary => "Deal size potential matrix",
        }
    }

    /// Look a slot up by its stable name. Short aliases are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "customer_recency" | "recency" => Some(Self::CustomerRecency),
            "country_product_heat" | "heat" => Some(Self::CountryProductHeat),
            "transaction_profile" | "profile" => Some(Self::TransactionProfile),
            "repurchase_cycle" | "repurchase" => Some(Self::RepurchaseCycle),
            "country_product_flow" | "flow" => Some(Self::CountryProductFlow),
            "deal_size_summary" | "deal_size" => Some(Self::DealSizeSummary),
            _ => None,
        }
    }
}

/// A computed section table, handed to presentation by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", content = "table", rename_all = "snake_case")]
pub enum SectionTable {
    CustomerRecency(CustomerRecency),
    CountryProductHeat(CountryProductHeat),
    TransactionProfile(TransactionProfile),
    RepurchaseCycle(RepurchaseCycle),
    CountryProductFlow(CountryToProductFlow),
    DealSizeSummary(DealSizeSummary),
}

impl SectionTable {
    pub fn slot(&self) -> SectionSlot {
        match self {
            Self::CustomerRecency(_) => SectionSlot::CustomerRecency,
            Self::CountryProductHeat(_) => SectionSlot::CountryProductHeat,
            Self::TransactionProfile(_) => SectionSlot::TransactionProfile,
            Self::RepurchaseCycle(_) => SectionSlot::RepurchaseCycle,
            Self::CountryProductFlow(_) => SectionSlot::CountryProductFlow,
            Self::DealSizeSummary(_) => SectionSlot::DealSizeSummary,
        }
    }

    /// Number of records the renderer will draw.
    pub fn row_count(&self) -> usize {
        match self {
            Self::CustomerRecency(t) => t.rows.len(),
            Self::CountryProductHeat(t) => t.countries.len() * t.product_lines.len(),
            Self::TransactionProfile(t) => t.points.len(),
            Self::RepurchaseCycle(t) => t.rows.len(),
            Self::CountryProductFlow(t) => t.links.len(),
            Self::DealSizeSummary(t) => t.rows.len(),
        }
    }
}
