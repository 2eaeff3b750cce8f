//! Aggregation pipeline for the auto-sales report.
//!
//! One immutable order-line table in, six independent section tables out.
//! Loading is the only fallible step; every section is a pure function of
//! the loaded table.

pub mod config;
pub mod deal_size_section;
pub mod engine;
pub mod error;
pub mod flow_section;
pub mod heat_section;
pub mod loader;
pub mod order;
pub mod profile_section;
pub mod recency_section;
pub mod report;
pub mod repurchase_section;
pub mod rng;
pub mod section;
pub mod synthetic;
pub mod types;

pub use config::ReportConfig;
pub use engine::{render_file, ReportEngine};
pub use error::{ReportError, ReportResult};
pub use order::{OrderLine, OrderTable};
pub use report::SalesReport;
pub use section::{ReportSection, SectionSlot, SectionTable};
