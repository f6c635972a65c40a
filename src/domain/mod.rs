//! Core domain types and aggregation logic.

pub mod operation;
pub mod position;
pub mod classify;
pub mod sector;
pub mod cash_flow;
pub mod valuation;
pub mod dashboard;
pub mod error;
