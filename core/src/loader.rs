//! Loader & normalizer — CSV file to `OrderTable`.
//!
//! Reads the delimited input, checks the header for every required column,
//! parses ORDERDATE day-first and derives year / year-month per row.
//! Either every row loads or the whole load fails; there is no partial table.

use crate::{
    config::ReportConfig,
    error::{ReportError, ReportResult},
    order::{OrderLine, OrderTable},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_CUSTOMER:     &str = "CUSTOMERNAME";
pub const COL_ORDER_DATE:   &str = "ORDERDATE";
pub const COL_SALES:        &str = "SALES";
pub const COL_QUANTITY:     &str = "QUANTITYORDERED";
pub const COL_PRICE:        &str = "PRICEEACH";
pub const COL_COUNTRY:      &str = "COUNTRY";
pub const COL_PRODUCT_LINE: &str = "PRODUCTLINE";
pub const COL_DEAL_SIZE:    &str = "DEALSIZE";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_CUSTOMER,
    COL_ORDER_DATE,
    COL_SALES,
    COL_QUANTITY,
    COL_PRICE,
    COL_COUNTRY,
    COL_PRODUCT_LINE,
    COL_DEAL_SIZE,
];

/// One CSV record as typed by serde. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawOrderLine {
    #[serde(rename = "CUSTOMERNAME")]
    customer_name: String,
    #[serde(rename = "ORDERDATE")]
    order_date: String,
    #[serde(rename = "SALES")]
    sales: f64,
    #[serde(rename = "QUANTITYORDERED")]
    quantity_ordered: u32,
    #[serde(rename = "PRICEEACH")]
    price_each: f64,
    #[serde(rename = "COUNTRY")]
    country: String,
    #[serde(rename = "PRODUCTLINE")]
    product_line: String,
    #[serde(rename = "DEALSIZE")]
    deal_size: String,
}

pub struct OrderLoader {
    delimiter: u8,
    date_formats: Vec<String>,
}

impl OrderLoader {
    pub fn new(config: &ReportConfig) -> ReportResult<Self> {
        config.validate()?;
        Ok(Self {
            delimiter: config.delimiter_byte()?,
            date_formats: config.date_formats.clone(),
        })
    }

    /// Load the table from a file on disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> ReportResult<OrderTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = self.load_reader(file)?;
        log::info!(
            "loaded {} order lines from {} ({} customers, {} .. {})",
            table.len(),
            path.display(),
            table.distinct_customers().len(),
            table.min_order_date().map(|d| d.to_string()).unwrap_or_default(),
            table.max_order_date().map(|d| d.to_string()).unwrap_or_default(),
        );
        Ok(table)
    }

    /// Load the table from any reader. Used directly by tests with inline CSV.
    pub fn load_reader<R: Read>(&self, reader: R) -> ReportResult<OrderTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(ReportError::MissingColumn {
                    column: (*column).to_string(),
                });
            }
        }

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let raw: RawOrderLine = record.deserialize(Some(&headers))?;
            rows.push(self.normalize(raw, line)?);
        }
        Ok(OrderTable::new(rows))
    }

    fn normalize(&self, raw: RawOrderLine, line: u64) -> ReportResult<OrderLine> {
        let order_date = parse_day_first(&raw.order_date, &self.date_formats).ok_or_else(|| {
            ReportError::InvalidDate {
                line,
                value: raw.order_date.clone(),
            }
        })?;
        check_non_negative(raw.sales, COL_SALES, line)?;
        check_non_negative(raw.price_each, COL_PRICE, line)?;

        Ok(OrderLine::new(
            raw.customer_name,
            order_date,
            raw.sales,
            raw.quantity_ordered,
            raw.price_each,
            raw.country,
            raw.product_line,
            raw.deal_size,
        ))
    }
}

/// Load `config.input_path` with the configured delimiter and date formats.
pub fn load_orders(config: &ReportConfig) -> ReportResult<OrderTable> {
    OrderLoader::new(config)?.load_path(&config.input_path)
}

/// Try each layout in order; layouts with a time part keep only the date.
pub fn parse_day_first(value: &str, formats: &[String]) -> Option<NaiveDate> {
    let value = value.trim();
    formats.iter().find_map(|fmt| {
        if fmt.contains("%H") {
            NaiveDateTime::parse_from_str(value, fmt).ok().map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(value, fmt).ok()
        }
    })
}

fn check_non_negative(value: f64, column: &'static str, line: u64) -> ReportResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ReportError::NegativeValue { line, column, value })
    }
}
