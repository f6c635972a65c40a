//! CSV file data adapter.
//!
//! Loads the two broker export tables. Columns are resolved by header name;
//! a missing required column or an unreadable file is fatal, while a row
//! with an unparseable date or number is silently dropped.

use crate::domain::error::PortfelError;
use crate::domain::operation::Operation;
use crate::domain::position::{AssetType, Position};
use crate::domain::sector::classify_sector;
use crate::ports::data_port::DataPort;
use chrono::{DateTime, NaiveDate};
use std::fs;
use std::path::Path;

pub struct CsvAdapter;

impl CsvAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an export date. The broker export writes timestamps with an UTC
/// offset (`2021-03-22 14:05:57+03:00` or RFC 3339); bare dates appear in
/// hand-edited files. Anything else is `None` and the row is dropped.
fn parse_export_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn read_source(path: &Path) -> Result<String, PortfelError> {
    fs::read_to_string(path).map_err(|e| PortfelError::Source {
        reason: format!("failed to read {}: {}", path.display(), e),
    })
}

fn column_index(
    headers: &csv::StringRecord,
    path: &Path,
    name: &str,
) -> Result<usize, PortfelError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PortfelError::MissingColumn {
            file: path.display().to_string(),
            column: name.to_string(),
        })
}

impl DataPort for CsvAdapter {
    fn load_operations(&self, path: &Path) -> Result<Vec<Operation>, PortfelError> {
        let content = read_source(path)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| PortfelError::Source {
                reason: format!("CSV parse error: {}", e),
            })?
            .clone();
        let date_col = column_index(&headers, path, "date")?;
        let id_col = column_index(&headers, path, "portfolio_id")?;
        let name_col = column_index(&headers, path, "portfolio_name")?;
        let currency_col = column_index(&headers, path, "currency")?;
        let amount_col = column_index(&headers, path, "amount")?;
        let kind_col = column_index(&headers, path, "type")?;

        let mut operations = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PortfelError::Source {
                reason: format!("CSV parse error: {}", e),
            })?;

            // Unparseable dates are coerced to dropped rows, not errors.
            let Some(date) = record.get(date_col).and_then(parse_export_date) else {
                continue;
            };
            let Some(amount) = record.get(amount_col).and_then(|v| v.parse::<f64>().ok())
            else {
                continue;
            };

            let op = Operation {
                date,
                portfolio_id: record.get(id_col).unwrap_or_default().to_string(),
                portfolio_name: record.get(name_col).unwrap_or_default().to_string(),
                currency: record.get(currency_col).unwrap_or_default().to_string(),
                amount,
                kind: record.get(kind_col).unwrap_or_default().to_string(),
            };

            if op.in_valid_years() {
                operations.push(op);
            }
        }

        Ok(operations)
    }

    fn load_positions(&self, path: &Path) -> Result<Vec<Position>, PortfelError> {
        let content = read_source(path)?;
        let mut rdr = csv::Reader::from_reader(content.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| PortfelError::Source {
                reason: format!("CSV parse error: {}", e),
            })?
            .clone();
        let id_col = column_index(&headers, path, "portfolio_id")?;
        let account_col = column_index(&headers, path, "portfolio_name")?;
        let isin_col = column_index(&headers, path, "isin")?;
        let ticker_col = column_index(&headers, path, "ticker")?;
        let name_col = column_index(&headers, path, "name")?;
        let type_col = column_index(&headers, path, "type")?;
        let quantity_col = column_index(&headers, path, "quantity")?;
        let avg_col = column_index(&headers, path, "average_price")?;
        let cur_col = column_index(&headers, path, "current_price")?;
        let yield_col = column_index(&headers, path, "expected_yield")?;
        // Sector is pre-classified by the export; older files lack it.
        let sector_col = headers.iter().position(|h| h == "sector");

        let mut positions = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| PortfelError::Source {
                reason: format!("CSV parse error: {}", e),
            })?;

            let Some(quantity) = record.get(quantity_col).and_then(|v| v.parse::<f64>().ok())
            else {
                continue;
            };
            let Some(average_price) = record.get(avg_col).and_then(|v| v.parse::<f64>().ok())
            else {
                continue;
            };
            let Some(current_price) = record.get(cur_col).and_then(|v| v.parse::<f64>().ok())
            else {
                continue;
            };
            let expected_yield = record
                .get(yield_col)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0);

            let ticker = record.get(ticker_col).unwrap_or_default().to_string();
            let name = record.get(name_col).unwrap_or_default().to_string();
            let asset_type = AssetType::parse(record.get(type_col).unwrap_or_default());

            let sector = match sector_col.and_then(|i| record.get(i)).filter(|s| !s.is_empty()) {
                Some(s) => s.to_string(),
                None => classify_sector(&ticker, asset_type, &name).to_string(),
            };

            positions.push(Position {
                portfolio_id: record.get(id_col).unwrap_or_default().to_string(),
                portfolio_name: record.get(account_col).unwrap_or_default().to_string(),
                isin: record.get(isin_col).unwrap_or_default().to_string(),
                ticker,
                name,
                asset_type,
                sector,
                quantity,
                average_price,
                current_price,
                expected_yield,
            });
        }

        Ok(positions)
    }
}
