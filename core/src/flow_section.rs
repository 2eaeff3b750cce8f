//! Country -> product-line flow — summed sales per (country, product line)
//! as weighted links of a bipartite flow diagram.
//!
//! Node indices: countries occupy [0, C), product lines occupy [C, C+P),
//! each in first-seen order over the (country, product line) groups.

use crate::{
    order::OrderTable,
    section::{ReportSection, SectionSlot, SectionTable},
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryToProductFlow {
    /// Node labels: the C countries, then the P product lines.
    pub labels:        Vec<String>,
    pub country_count: usize,
    pub links:         Vec<FlowLink>,
}

impl CountryToProductFlow {
    pub fn country_count(&self) -> usize {
        self.country_count
    }

    pub fn product_line_count(&self) -> usize {
        self.labels.len() - self.country_count
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn total_weight(&self) -> f64 {
        self.links.iter().map(|l| l.weight).sum()
    }
}

/// Assigns each distinct label the next free slot on first sight.
#[derive(Default)]
struct FirstSeenIndex<'a> {
    order: Vec<&'a str>,
    slots: HashMap<&'a str, usize>,
}

impl<'a> FirstSeenIndex<'a> {
    fn slot(&mut self, label: &'a str) -> usize {
        if let Some(&i) = self.slots.get(label) {
            return i;
        }
        let i = self.order.len();
        self.order.push(label);
        self.slots.insert(label, i);
        i
    }
}

pub fn country_product_flow(table: &OrderTable) -> CountryToProductFlow {
    let mut grouped: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for row in table.rows() {
        *grouped
            .entry((row.country.as_str(), row.product_line.as_str()))
            .or_insert(0.0) += row.sales;
    }

    let mut countries = FirstSeenIndex::default();
    let mut product_lines = FirstSeenIndex::default();
    let local: Vec<(usize, usize, f64)> = grouped
        .iter()
        .map(|(&(country, line), &weight)| {
            (countries.slot(country), product_lines.slot(line), weight)
        })
        .collect();

    let country_count = countries.order.len();
    let links = local
        .into_iter()
        .map(|(source, line, weight)| FlowLink {
            source,
            target: country_count + line,
            weight,
        })
        .collect();

    let labels = countries
        .order
        .iter()
        .chain(product_lines.order.iter())
        .map(|l| l.to_string())
        .collect();

    CountryToProductFlow {
        labels,
        country_count,
        links,
    }
}

pub struct FlowSection;

impl ReportSection for FlowSection {
    fn slot(&self) -> SectionSlot {
        SectionSlot::CountryProductFlow
    }

    fn compute(&self, table: &OrderTable) -> SectionTable {
        SectionTable::CountryProductFlow(country_product_flow(table))
    }
}
