//! Cash-flow aggregation over the operations ledger.

use std::collections::BTreeMap;

use super::classify::{classify, OperationCategory, COUPON_LABEL, DEPOSIT_LABEL, DIVIDEND_LABEL, WITHDRAWAL_LABEL};
use super::operation::Operation;

/// Payment type bucket for the by-year timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentKind {
    Dividend,
    Coupon,
}

impl PaymentKind {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentKind::Dividend => DIVIDEND_LABEL,
            PaymentKind::Coupon => COUPON_LABEL,
        }
    }
}

/// Cash movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CashMovementKind {
    Deposit,
    Withdrawal,
}

impl CashMovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            CashMovementKind::Deposit => DEPOSIT_LABEL,
            CashMovementKind::Withdrawal => WITHDRAWAL_LABEL,
        }
    }
}

/// Summed payments for one (year, kind) bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub year: i32,
    pub kind: PaymentKind,
    pub amount: f64,
}

/// Net signed cash movement for one (year, kind, account) bucket.
///
/// `account` duplicates `portfolio_name`; the rendering layer uses it as a
/// display label.
#[derive(Debug, Clone, PartialEq)]
pub struct CashMovementRow {
    pub year: i32,
    pub kind: CashMovementKind,
    pub portfolio_name: String,
    pub account: String,
    pub amount: f64,
}

/// Headline totals over the whole filtered ledger. All four are reported as
/// non-negative magnitudes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationsSummary {
    pub total_coupons: f64,
    pub total_dividends: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CashFlowReport {
    pub total_taxes: f64,
    pub total_commissions: f64,
    pub payments_by_year: Vec<PaymentRow>,
    pub cash_movements: Vec<CashMovementRow>,
    pub summary: OperationsSummary,
}

fn account_selected(account_filter: &[String], portfolio_name: &str) -> bool {
    account_filter.is_empty() || account_filter.iter().any(|a| a == portfolio_name)
}

/// Aggregate the operations ledger into scalar totals, a payments timeline
/// and a signed deposits/withdrawals breakdown.
///
/// An empty `account_filter` means all accounts. Filtering happens before
/// any grouping; withdrawal amounts are negated before the group-by so the
/// grouped sums are net signed flows.
pub fn aggregate_cash_flows(operations: &[Operation], account_filter: &[String]) -> CashFlowReport {
    let mut total_taxes = 0.0_f64;
    let mut total_commissions = 0.0_f64;
    let mut summary = OperationsSummary::default();
    let mut signed_withdrawals = 0.0_f64;

    let mut payments: BTreeMap<(i32, PaymentKind), f64> = BTreeMap::new();
    let mut movements: BTreeMap<(i32, CashMovementKind, String), f64> = BTreeMap::new();

    for op in operations {
        if !account_selected(account_filter, &op.portfolio_name) {
            continue;
        }

        let Some(category) = classify(&op.kind) else {
            continue;
        };

        match category {
            OperationCategory::Tax => total_taxes += op.amount,
            OperationCategory::Commission => total_commissions += op.amount,
            OperationCategory::CouponPayment => {
                summary.total_coupons += op.amount;
                *payments.entry((op.year(), PaymentKind::Coupon)).or_default() += op.amount;
            }
            OperationCategory::DividendPayment => {
                summary.total_dividends += op.amount;
                *payments
                    .entry((op.year(), PaymentKind::Dividend))
                    .or_default() += op.amount;
            }
            OperationCategory::Deposit => {
                summary.total_deposits += op.amount;
                let key = (op.year(), CashMovementKind::Deposit, op.portfolio_name.clone());
                *movements.entry(key).or_default() += op.amount;
            }
            OperationCategory::Withdrawal => {
                // Negate before grouping so the grouped sums are net flows.
                signed_withdrawals += -op.amount;
                let key = (
                    op.year(),
                    CashMovementKind::Withdrawal,
                    op.portfolio_name.clone(),
                );
                *movements.entry(key).or_default() += -op.amount;
            }
        }
    }

    summary.total_withdrawals = -signed_withdrawals;

    let payments_by_year = payments
        .into_iter()
        .map(|((year, kind), amount)| PaymentRow { year, kind, amount })
        .collect();

    let cash_movements = movements
        .into_iter()
        .map(|((year, kind, portfolio_name), amount)| CashMovementRow {
            year,
            kind,
            account: portfolio_name.clone(),
            portfolio_name,
            amount,
        })
        .collect();

    CashFlowReport {
        total_taxes,
        total_commissions,
        payments_by_year,
        cash_movements,
        summary,
    }
}
