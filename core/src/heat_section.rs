//! Country x product-line heat — dense sales cross-tab with zero fill.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
    types::{Country, ProductLine},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// `cells[i][j]` is total sales for `countries[i]` x `product_lines[j]`.
/// Both label lists are sorted and hold exactly the values present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryProductHeat {
    pub countries:     Vec<Country>,
    pub product_lines: Vec<ProductLine>,
    pub cells:         Vec<Vec<f64>>,
}

impl CountryProductHeat {
    pub fn cell(&self, country: &str, product_line: &str) -> Option<f64> {
        let i = self.countries.iter().position(|c| c == country)?;
        let j = self.product_lines.iter().position(|p| p == product_line)?;
        Some(self.cells[i][j])
    }

    pub fn country_total(&self, country: &str) -> Option<f64> {
        let i = self.countries.iter().position(|c| c == country)?;
        Some(self.cells[i].iter().sum())
    }

    pub fn total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}

pub fn country_product_heat(table: &OrderTable) -> CountryProductHeat {
    let countries: BTreeMap<&str, usize> = index_sorted(table.distinct_countries());
    let product_lines: BTreeMap<&str, usize> = index_sorted(table.distinct_product_lines());

    let mut cells = vec![vec![0.0; product_lines.len()]; countries.len()];
    for row in table.rows() {
        let i = countries[row.country.as_str()];
        let j = product_lines[row.product_line.as_str()];
        cells[i][j] += row.sales;
    }

    CountryProductHeat {
        countries:     countries.keys().map(|c| c.to_string()).collect(),
        product_lines: product_lines.keys().map(|p| p.to_string()).collect(),
        cells,
    }
}

fn index_sorted<'a>(labels: impl IntoIterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    labels.into_iter().enumerate().map(|(i, l)| (l, i)).collect()
}

pub struct HeatSection;

impl ReportSection for HeatSection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::CountryProductHeat
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::CountryProductHeat(country_product_heat(table))
    }
}
