//! Operation-type label classification.
//!
//! The ledger carries free-text operation labels from the broker export.
//! Classification is an exact string match against fixed label tables; the
//! tables are data, not branching logic, so new labels extend the consts
//! without touching the aggregators.

/// Labels counted as tax withholdings.
pub const TAX_LABELS: [&str; 4] = [
    "Удержание налога по дивидендам",
    "Удержание налога",
    "Корректировка налога",
    "Удержание НДФЛ по купонам",
];

/// Labels counted as broker commissions.
pub const COMMISSION_LABELS: [&str; 1] = ["Удержание комиссии за операцию"];

pub const DIVIDEND_LABEL: &str = "Выплата дивидендов";
pub const COUPON_LABEL: &str = "Выплата купонов";
pub const DEPOSIT_LABEL: &str = "Пополнение брокерского счёта";
pub const WITHDRAWAL_LABEL: &str = "Вывод денежных средств";

/// Semantic category of an operation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationCategory {
    Tax,
    Commission,
    CouponPayment,
    DividendPayment,
    Deposit,
    Withdrawal,
}

/// Map a ledger label to its category. Unrecognized labels return `None`
/// and are excluded from every aggregate.
pub fn classify(label: &str) -> Option<OperationCategory> {
    if TAX_LABELS.contains(&label) {
        return Some(OperationCategory::Tax);
    }
    if COMMISSION_LABELS.contains(&label) {
        return Some(OperationCategory::Commission);
    }
    match label {
        COUPON_LABEL => Some(OperationCategory::CouponPayment),
        DIVIDEND_LABEL => Some(OperationCategory::DividendPayment),
        DEPOSIT_LABEL => Some(OperationCategory::Deposit),
        WITHDRAWAL_LABEL => Some(OperationCategory::Withdrawal),
        _ => None,
    }
}
