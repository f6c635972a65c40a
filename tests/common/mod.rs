#![allow(dead_code)]

use chrono::NaiveDate;
use portfel::domain::error::PortfelError;
pub use portfel::domain::operation::Operation;
pub use portfel::domain::position::{AssetType, Position};
use portfel::domain::sector::classify_sector;
use portfel::ports::data_port::DataPort;
use std::path::Path;

/// In-memory data port: hands back prepared rows regardless of path.
pub struct MockDataPort {
    pub operations: Vec<Operation>,
    pub positions: Vec<Position>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            positions: Vec::new(),
            error: None,
        }
    }

    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }

    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn load_operations(&self, _path: &Path) -> Result<Vec<Operation>, PortfelError> {
        if let Some(reason) = &self.error {
            return Err(PortfelError::Source {
                reason: reason.clone(),
            });
        }
        Ok(self.operations.clone())
    }

    fn load_positions(&self, _path: &Path) -> Result<Vec<Position>, PortfelError> {
        if let Some(reason) = &self.error {
            return Err(PortfelError::Source {
                reason: reason.clone(),
            });
        }
        Ok(self.positions.clone())
    }
}

pub fn make_operation(date: &str, account: &str, kind: &str, amount: f64) -> Operation {
    Operation {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        portfolio_id: "1".to_string(),
        portfolio_name: account.to_string(),
        currency: "rub".to_string(),
        amount,
        kind: kind.to_string(),
    }
}

pub fn make_position(
    account: &str,
    ticker: &str,
    name: &str,
    asset_type: AssetType,
    quantity: f64,
    average_price: f64,
    current_price: f64,
) -> Position {
    Position {
        portfolio_id: "1".to_string(),
        portfolio_name: account.to_string(),
        isin: "RU000TEST".to_string(),
        ticker: ticker.to_string(),
        name: name.to_string(),
        asset_type,
        sector: classify_sector(ticker, asset_type, name).to_string(),
        quantity,
        average_price,
        current_price,
        expected_yield: 0.0,
    }
}
