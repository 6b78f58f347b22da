//! Type definitions for the settlement engine.
//!
//! Every amount is an `i128` in the currency's smallest unit. One minor unit
//! is 0.01 of the major unit, so flooring to two decimals is plain integer
//! division here.

use soroban_sdk::{contracttype, Address, Vec};

/// One bettor's stake on one option of a closed poll
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BetRecord {
    pub player_id: Address,
    pub option_id: u32,
    pub vote_weight: i128, // Only used to pick the winner
    pub bet_amount: i128,  // Money staked, minor units
}

/// Per-option aggregate derived from the ledger
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OptionTally {
    pub option_id: u32,
    pub total_votes: i128,
    pub total_stake: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WinnerResolution {
    pub winning_option_ids: Vec<u32>, // Ascending, every option tied on max_votes
    pub max_votes: i128,
    pub total_votes: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SettlementMode {
    Settled = 0, // Pool split among winning stakes
    Refund = 1,  // Nobody staked on a winner, every bet returned
}

/// Per-record payout line. `profit` is negative for losers.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutDetail {
    pub player_id: Address,
    pub option_id: u32,
    pub bet_amount: i128,
    pub payout: i128,
    pub profit: i128,
}

/// Raw output of the payout distributor, before report assembly
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    pub mode: SettlementMode,
    pub total_bet_amount: i128,
    pub total_commission: i128,
    pub payout_pool: i128,
    pub total_winning_stake: i128,
    pub payout_details: Vec<PayoutDetail>,
}

/// Immutable, balance-checked settlement of one poll
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementResult {
    pub mode: SettlementMode,
    pub winning_option_ids: Vec<u32>,
    pub max_votes: i128,
    pub total_votes: i128,
    pub total_bet_amount: i128,
    pub total_commission: i128,
    pub payout_pool: i128,
    pub total_winning_stake: i128,
    pub total_paid_out: i128,
    pub residual: i128, // Rounding dust kept by the house
    pub winner_count: u32,
    pub loser_count: u32,
    pub payout_details: Vec<PayoutDetail>,
}

/// Per-player roll-up handed to the payout executor
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub player_id: Address,
    pub record_count: u32,
    pub total_bet: i128,
    pub total_payout: i128,
    pub net_profit: i128,
}
