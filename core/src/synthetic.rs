//! Seeded synthetic order-line tables.
//!
//! Shapes follow the auto-sales dataset: business customers, each based in
//! one country, buying across product lines; deal size is bucketed from the
//! line's sales amount. All generation is deterministic (same seed = same
//! table).

use crate::{
    order::{OrderLine, OrderTable},
    rng::SampleRng,
};
use chrono::{Duration, NaiveDate};

pub const SMALL_DEAL_CEILING: f64 = 3000.0;
pub const MEDIUM_DEAL_CEILING: f64 = 7000.0;

/// Number of days covered by generated order dates.
pub const DATE_SPAN_DAYS: i64 = 880;

pub fn deal_size_for(sales: f64) -> &'static str {
    if sales < SMALL_DEAL_CEILING {
        "Small"
    } else if sales < MEDIUM_DEAL_CEILING {
        "Medium"
    } else {
        "Large"
    }
}

pub struct SyntheticOrders {
    seed: u64,
    rows: usize,
    customers: usize,
}

impl SyntheticOrders {
    /// `rows` order lines spread over roughly one customer per ten lines.
    pub fn new(seed: u64, rows: usize) -> Self {
        Self {
            seed,
            rows,
            customers: (rows / 10).clamp(1, 120),
        }
    }

    pub fn with_customers(mut self, customers: usize) -> Self {
        self.customers = customers.max(1);
        self
    }

    pub fn generate(&self) -> OrderTable {
        let mut rng = SampleRng::new(self.seed);
        let start = start_date();

        let customers: Vec<(String, &'static str)> = (0..self.customers)
            .map(|i| (customer_name(&mut rng, i), *rng.pick(COUNTRIES)))
            .collect();

        let mut rows = Vec::with_capacity(self.rows);
        for _ in 0..self.rows {
            let (name, country) = rng.pick(&customers);
            let product_line = *rng.pick(PRODUCT_LINES);
            let order_date = start + Duration::days(rng.next_u64_below(DATE_SPAN_DAYS as u64) as i64);
            let quantity = rng.range_inclusive(6, 97) as u32;
            let price = round_cents(30.0 + rng.next_f64() * 220.0);
            let sales = round_cents(price * quantity as f64);

            rows.push(OrderLine::new(
                name.clone(),
                order_date,
                sales,
                quantity,
                price,
                *country,
                product_line,
                deal_size_for(sales),
            ));
        }
        OrderTable::new(rows)
    }
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap_or_default()
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Unique per index: the index is folded into the name.
fn customer_name(rng: &mut SampleRng, index: usize) -> String {
    let prefix = rng.pick(NAME_PREFIXES);
    let trade = rng.pick(NAME_TRADES);
    let suffix = rng.pick(NAME_SUFFIXES);
    if rng.chance(0.5) {
        format!("{prefix} {trade} {suffix} #{index}")
    } else {
        format!("{prefix} {trade} #{index}")
    }
}

const COUNTRIES: &[&str] = &[
    "USA", "France", "Spain", "Australia", "UK", "Italy", "Finland", "Norway",
    "Singapore", "Canada", "Denmark", "Germany", "Sweden", "Austria", "Japan",
    "Belgium", "Switzerland", "Philippines", "Ireland",
];

const PRODUCT_LINES: &[&str] = &[
    "Classic Cars", "Vintage Cars", "Motorcycles", "Trucks and Buses",
    "Planes", "Ships", "Trains",
];

const NAME_PREFIXES: &[&str] = &[
    "Land of", "Royal", "Atelier", "Corporate", "Mini", "Diecast", "Euro",
    "Australian", "Scandinavian", "Toys4", "Gift", "Heintze", "Vida", "Salzburg",
];

const NAME_TRADES: &[&str] = &[
    "Toys", "Collectables", "Gifts", "Replicas", "Classics", "Models",
    "Auto", "Wheels", "Souvenirs", "Imports",
];

const NAME_SUFFIXES: &[&str] = &["Inc.", "Co.", "Ltd.", "Corp", "GmbH", "AB", "& Co"];
