//! Customer recency section tests.

use chrono::NaiveDate;
use sales_report_core::{recency_section::customer_recency, OrderLine, OrderTable};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn order(customer: &str, on: &str, sales: f64) -> OrderLine {
    OrderLine::new(customer, date(on), sales, 1, sales, "USA", "Planes", "Small")
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Two customers, A ordering twice and B once; global max is A's last order.
#[test]
fn worked_example_matches_expected_rows() {
    let table = OrderTable::new(vec![
        order("A", "2021-01-01", 100.0),
        order("A", "2021-03-01", 200.0),
        order("B", "2021-02-01", 50.0),
    ]);
    let recency = customer_recency(&table);

    assert_eq!(recency.rows.len(), 2);

    let a = recency.get("A").unwrap();
    assert_eq!(a.days_since_last_order, 0);
    assert_eq!(a.last_order_date, date("2021-03-01"));
    assert!((a.total_sales - 300.0).abs() < 1e-9);

    let b = recency.get("B").unwrap();
    assert_eq!(b.days_since_last_order, 28);
    assert!((b.total_sales - 50.0).abs() < 1e-9);
}

#[test]
fn one_row_per_customer_and_most_recent_is_zero() {
    let table = OrderTable::new(vec![
        order("Mini Gifts", "2019-06-01", 10.0),
        order("Euro Shopping", "2019-06-03", 20.0),
        order("Mini Gifts", "2019-07-15", 30.0),
        order("Atelier", "2018-12-24", 40.0),
        order("Euro Shopping", "2019-01-01", 50.0),
    ]);
    let recency = customer_recency(&table);

    assert_eq!(recency.rows.len(), table.distinct_customers().len());
    assert_eq!(
        recency.rows.iter().map(|r| r.days_since_last_order).min(),
        Some(0)
    );
    assert!(recency.rows.iter().all(|r| r.days_since_last_order >= 0));
    assert_eq!(recency.get("Mini Gifts").unwrap().days_since_last_order, 0);
}

#[test]
fn rows_are_ordered_by_customer_name() {
    let table = OrderTable::new(vec![
        order("Zeta", "2020-01-01", 1.0),
        order("Alpha", "2020-01-02", 1.0),
        order("Mu", "2020-01-03", 1.0),
    ]);
    let names: Vec<_> = customer_recency(&table)
        .rows
        .into_iter()
        .map(|r| r.customer_name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);
}

#[test]
fn empty_table_yields_no_rows() {
    assert!(customer_recency(&OrderTable::default()).rows.is_empty());
}
