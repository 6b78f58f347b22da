#![no_std]
//! # Pari-mutuel Settlement Engine
//!
//! Deterministic settlement of closed polls: tally the bet ledger, pick the
//! winning option(s), take the house commission and split the remaining
//! pool among winning stakes.
//!
//! ## Key Features
//! - Tie-inclusive winner resolution
//! - Fixed-point integer money, floor rounding, never pays out more than collected
//! - Full refund when nobody staked on a winner
//! - Balance-checked reports with a replayable audit digest

mod constants;
mod contract;
mod distributor;
mod errors;
mod report;
mod resolver;
mod summary;
mod tally;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use constants::{BPS_DENOMINATOR, MAX_COMMISSION_BPS};
pub use contract::SettlementContract;
pub use errors::SettlementError;
pub use types::{
    BetRecord, Distribution, OptionTally, PayoutDetail, PlayerSummary, SettlementMode,
    SettlementResult, WinnerResolution,
};
