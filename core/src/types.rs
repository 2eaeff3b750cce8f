//! Shared primitive types used across the report pipeline.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Customer display name, as it appears in CUSTOMERNAME.
pub type CustomerName = String;

/// Product line label, as it appears in PRODUCTLINE.
pub type ProductLine = String;

/// Country label, as it appears in COUNTRY.
pub type Country = String;

/// Deal-size category label, as it appears in DEALSIZE.
pub type DealSize = String;

/// Calendar month bucket of an order date. Orders by (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year:  i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_formats_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2003, 2, 24).unwrap();
        assert_eq!(YearMonth::of(date).to_string(), "2003-02");
    }

    #[test]
    fn year_month_orders_chronologically() {
        let a = YearMonth { year: 2003, month: 12 };
        let b = YearMonth { year: 2004, month: 1 };
        assert!(a < b);
    }
}
