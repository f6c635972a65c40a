//! Result assembly: the full derived bundle handed to a rendering layer.

use super::cash_flow::{aggregate_cash_flows, CashFlowReport};
use super::operation::Operation;
use super::position::Position;
use super::valuation::{aggregate_portfolio, ValuationReport};

/// Everything the rendering layer consumes, derived from one pipeline run.
///
/// Building is pure: the same tables and filter always reproduce the same
/// bundle, so a fresh build per filter selection is cheap and safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub cash_flow: CashFlowReport,
    pub valuation: ValuationReport,
}

impl Dashboard {
    pub fn build(
        operations: &[Operation],
        positions: &[Position],
        account_filter: &[String],
    ) -> Self {
        Dashboard {
            cash_flow: aggregate_cash_flows(operations, account_filter),
            valuation: aggregate_portfolio(positions, account_filter),
        }
    }
}

/// Distinct account names present in either table, sorted. The interactive
/// layer derives its filter choices from this.
pub fn account_names(operations: &[Operation], positions: &[Position]) -> Vec<String> {
    let mut names: Vec<String> = operations
        .iter()
        .map(|op| op.portfolio_name.clone())
        .chain(positions.iter().map(|pos| pos.portfolio_name.clone()))
        .collect();
    names.sort();
    names.dedup();
    names
}
