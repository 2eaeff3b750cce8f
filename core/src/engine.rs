//! The report engine — runs every registered section over one table.
//!
//! EXECUTION ORDER (fixed, matches SectionSlot):
//!   1. Customer recency
//!   2. Country x product-line heat
//!   3. Price / quantity profile
//!   4. Repurchase cycle
//!   5. Country -> product-line flow
//!   6. Deal-size summary
//!
//! RULES:
//!   - Sections only borrow the table; none of them can fail.
//!   - Sections never see each other's output.
//!   - Every render recomputes from scratch; the engine caches nothing.

use crate::{
    config::ReportConfig,
    deal_size_section::DealSizeSection,
    error::ReportResult,
    flow_section::FlowSection,
    heat_section::HeatSection,
    loader::load_orders,
    order::OrderTable,
    profile_section::ProfileSection,
    recency_section::RecencySection,
    report::SalesReport,
    repurchase_section::RepurchaseSection,
    section::ReportSection,
};

pub struct ReportEngine {
    sections: Vec<Box<dyn ReportSection>>,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::build()
    }
}

impl ReportEngine {
    /// An engine with no sections. Use build() for the full report.
    pub fn new() -> Self {
        Self { sections: Vec::new() }
    }

    /// Build an engine with all six sections registered in report order.
    pub fn build() -> Self {
        let mut engine = ReportEngine::new();
        engine.register(Box::new(RecencySection));
        engine.register(Box::new(HeatSection));
        engine.register(Box::new(ProfileSection));
        engine.register(Box::new(RepurchaseSection));
        engine.register(Box::new(FlowSection));
        engine.register(Box::new(DealSizeSection));
        engine
    }

    /// Register a section. Call in the documented execution order.
    pub fn register(&mut self, section: Box<dyn ReportSection>) {
        self.sections.push(section);
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    /// Compute every registered section over `table`.
    pub fn render(&self, table: &OrderTable) -> SalesReport {
        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let output = section.compute(table);
            log::debug!("section {}: {} rows", section.name(), output.row_count());
            sections.push(output);
        }
        SalesReport::new(table, sections)
    }
}

/// Load `config.input_path` and render the full report.
pub fn render_file(config: &ReportConfig) -> ReportResult<SalesReport> {
    let table = load_orders(config)?;
    Ok(ReportEngine::build().render(&table))
}
