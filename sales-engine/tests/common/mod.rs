//! FILENAME: sales-engine/tests/common/mod.rs
//! Shared fixtures and assertion helpers for engine integration tests.

use chrono::NaiveDate;
use sales_engine::{Dataset, TransactionRow};

// ============================================================================
// ROW BUILDERS
// ============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn row(
    order_id: &str,
    order_date: NaiveDate,
    region: &str,
    product: &str,
    sales: f64,
    profit: f64,
) -> TransactionRow {
    TransactionRow::new(order_id, order_date, region, product, sales, profit)
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Sample transaction data spanning two years and three regions.
pub struct SalesFixture;

impl SalesFixture {
    pub fn dataset() -> Dataset {
        Dataset::new(vec![
            row("ORD-001", date(2021, 1, 15), "East", "Widget", 10000.0, 1000.0),
            row("ORD-001", date(2021, 1, 15), "East", "Gadget", 8000.0, 800.0),
            row("ORD-002", date(2021, 2, 3), "West", "Widget", 15000.0, 1500.0),
            row("ORD-003", date(2021, 5, 20), "South", "Gizmo", 7000.0, -700.0),
            row("ORD-004", date(2021, 11, 8), "East", "Widget", 12000.0, 1200.0),
            row("ORD-005", date(2022, 1, 30), "West", "Gadget", 11000.0, 1100.0),
            row("ORD-006", date(2022, 4, 12), "South", "Widget", 9000.0, 900.0),
            row("ORD-006", date(2022, 4, 12), "South", "Gadget", 13000.0, 1300.0),
            row("ORD-007", date(2022, 8, 25), "East", "Gizmo", 8500.0, 850.0),
            row("ORD-008", date(2022, 12, 2), "West", "Widget", 14000.0, 1400.0),
        ])
    }

    /// Rows for twelve distinct products with strictly decreasing sales,
    /// for exercising the ranked aggregation's entry cap.
    pub fn twelve_products() -> Dataset {
        Dataset::new(
            (0..12)
                .map(|i| {
                    row(
                        &format!("ORD-{i:03}"),
                        date(2021, 1, 1 + i as u32),
                        "East",
                        &format!("Product {i:02}"),
                        (1200 - i * 100) as f64,
                        0.0,
                    )
                })
                .collect(),
        )
    }
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert two monetary values are equal within display precision.
pub fn assert_money_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.001,
        "expected {expected} but got {actual}"
    );
}
