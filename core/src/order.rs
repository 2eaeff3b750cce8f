//! The raw order-line table.
//!
//! RULE: the table is immutable once built. Aggregators borrow it and
//! allocate their own outputs; nothing mutates rows in place.

use crate::types::{Country, CustomerName, DealSize, ProductLine, YearMonth};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// One row of the input table, with the derived year and month bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub customer_name:    CustomerName,
    pub order_date:       NaiveDate,
    pub sales:            f64,
    pub quantity_ordered: u32,
    pub price_each:       f64,
    pub country:          Country,
    pub product_line:     ProductLine,
    pub deal_size:        DealSize,
    pub year:             i32,
    pub month:            YearMonth,
}

impl OrderLine {
    /// Build a row and derive its calendar fields from `order_date`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_name: impl Into<CustomerName>,
        order_date: NaiveDate,
        sales: f64,
        quantity_ordered: u32,
        price_each: f64,
        country: impl Into<Country>,
        product_line: impl Into<ProductLine>,
        deal_size: impl Into<DealSize>,
    ) -> Self {
        let month = YearMonth::of(order_date);
        Self {
            customer_name: customer_name.into(),
            order_date,
            sales,
            quantity_ordered,
            price_each,
            country: country.into(),
            product_line: product_line.into(),
            deal_size: deal_size.into(),
            year: month.year,
            month,
        }
    }
}

/// Read-only table of order lines, shared by every report section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTable {
    rows: Vec<OrderLine>,
}

impl OrderTable {
    pub fn new(rows: Vec<OrderLine>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[OrderLine] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of SALES over every row.
    pub fn grand_total_sales(&self) -> f64 {
        self.rows.iter().map(|r| r.sales).sum()
    }

    /// Latest order date in the table. `None` only for an empty table.
    pub fn max_order_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|r| r.order_date).max()
    }

    pub fn min_order_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|r| r.order_date).min()
    }

    pub fn distinct_customers(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|r| r.customer_name.as_str()).collect()
    }

    pub fn distinct_product_lines(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|r| r.product_line.as_str()).collect()
    }

    pub fn distinct_countries(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|r| r.country.as_str()).collect()
    }
}

impl FromIterator<OrderLine> for OrderTable {
    fn from_iter<I: IntoIterator<Item = OrderLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
