//! Precondition checks run before any settlement arithmetic.
//!
//! Financial inputs are rejected, never clamped.

use soroban_sdk::{Env, Map, Vec};

use crate::constants::MAX_COMMISSION_BPS;
use crate::errors::SettlementError;
use crate::types::BetRecord;

pub fn check_commission(commission_bps: u32) -> Result<(), SettlementError> {
    if commission_bps > MAX_COMMISSION_BPS {
        return Err(SettlementError::InvalidCommissionRate);
    }
    Ok(())
}

/// Rejects negative stakes or vote weights
pub fn check_amounts(records: &Vec<BetRecord>) -> Result<(), SettlementError> {
    for record in records.iter() {
        if record.bet_amount < 0 {
            return Err(SettlementError::InvalidBetAmount);
        }
        if record.vote_weight < 0 {
            return Err(SettlementError::InvalidVoteWeight);
        }
    }
    Ok(())
}

/// Full ledger check: commission, option list, amounts, option membership
pub fn validate_ledger(
    env: &Env,
    options: &Vec<u32>,
    records: &Vec<BetRecord>,
    commission_bps: u32,
) -> Result<(), SettlementError> {
    check_commission(commission_bps)?;

    let mut known: Map<u32, bool> = Map::new(env);
    for option_id in options.iter() {
        if known.contains_key(option_id) {
            return Err(SettlementError::DuplicateOption);
        }
        known.set(option_id, true);
    }

    check_amounts(records)?;

    for record in records.iter() {
        if !known.contains_key(record.option_id) {
            return Err(SettlementError::UnknownOption);
        }
    }

    Ok(())
}
