//! Operations ledger row representation.

use chrono::{Datelike, NaiveDate};

/// Calendar years the operations ledger is restricted to. Rows outside this
/// window are dropped at load time.
pub const VALID_YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

/// One row of the brokerage operations ledger.
///
/// `amount` is a non-negative magnitude as exported; the sign of cash
/// movements is reconstructed during aggregation, not trusted from input.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub currency: String,
    pub amount: f64,
    pub kind: String,
}

impl Operation {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn in_valid_years(&self) -> bool {
        VALID_YEARS.contains(&self.year())
    }
}
