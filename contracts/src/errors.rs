//! Error types for the pari-mutuel settlement engine.

use soroban_sdk::contracterror;

/// Settlement error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SettlementError {
    /// Ledger has zero total votes - poll cannot be settled yet
    NoVotes = 1,
    /// Bet amount must not be negative
    InvalidBetAmount = 2,
    /// Vote weight must not be negative
    InvalidVoteWeight = 3,
    /// Record references an option that is not part of the poll
    UnknownOption = 4,
    /// Poll option list contains the same id twice
    DuplicateOption = 5,
    /// Commission must be below 10_000 basis points
    InvalidCommissionRate = 6,
    /// Arithmetic overflow occurred
    Overflow = 7,
    /// Report failed its balance check
    SettlementImbalance = 8,
}
