//! Commission extraction and proportional payout of the pool.
//!
//! Formula: payout = floor(payout_pool * bet / total_winning_stake)
//!
//! Commission is taken once on the whole pool and floored, and every payout
//! is floored per record. Rounding therefore only ever leaves dust with the
//! house; the engine can never pay out more than it collected. Winning stake
//! is pooled across all tied winners, not per option.

use soroban_sdk::{Env, Vec};

use crate::constants::BPS_DENOMINATOR;
use crate::errors::SettlementError;
use crate::resolver::is_winning_option;
use crate::types::{BetRecord, Distribution, PayoutDetail, SettlementMode};
use crate::validation::{check_amounts, check_commission};

/// floor(total * commission_bps / 10_000)
pub fn commission_for(
    total_bet_amount: i128,
    commission_bps: u32,
) -> Result<i128, SettlementError> {
    let scaled = total_bet_amount
        .checked_mul(commission_bps as i128)
        .ok_or(SettlementError::Overflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

/// Splits the pool among records on a winning option.
/// Falls back to a full refund, commission waived, when the winners staked nothing.
pub fn distribute(
    env: &Env,
    records: &Vec<BetRecord>,
    winning_option_ids: &Vec<u32>,
    commission_bps: u32,
) -> Result<Distribution, SettlementError> {
    check_commission(commission_bps)?;
    check_amounts(records)?;

    let mut total_bet_amount: i128 = 0;
    let mut total_winning_stake: i128 = 0;
    for record in records.iter() {
        total_bet_amount = total_bet_amount
            .checked_add(record.bet_amount)
            .ok_or(SettlementError::Overflow)?;
        if is_winning_option(winning_option_ids, record.option_id) {
            total_winning_stake = total_winning_stake
                .checked_add(record.bet_amount)
                .ok_or(SettlementError::Overflow)?;
        }
    }

    if total_winning_stake == 0 {
        return Ok(refund_all(env, records, total_bet_amount));
    }

    let total_commission = commission_for(total_bet_amount, commission_bps)?;
    let payout_pool = total_bet_amount
        .checked_sub(total_commission)
        .ok_or(SettlementError::Overflow)?;

    let mut payout_details: Vec<PayoutDetail> = Vec::new(env);
    for record in records.iter() {
        let payout = if is_winning_option(winning_option_ids, record.option_id) {
            payout_pool
                .checked_mul(record.bet_amount)
                .ok_or(SettlementError::Overflow)?
                / total_winning_stake
        } else {
            0
        };
        let profit = payout
            .checked_sub(record.bet_amount)
            .ok_or(SettlementError::Overflow)?;

        payout_details.push_back(PayoutDetail {
            player_id: record.player_id,
            option_id: record.option_id,
            bet_amount: record.bet_amount,
            payout,
            profit,
        });
    }

    Ok(Distribution {
        mode: SettlementMode::Settled,
        total_bet_amount,
        total_commission,
        payout_pool,
        total_winning_stake,
        payout_details,
    })
}

/// Every record gets its stake back, winners and losers alike
fn refund_all(env: &Env, records: &Vec<BetRecord>, total_bet_amount: i128) -> Distribution {
    let mut payout_details: Vec<PayoutDetail> = Vec::new(env);
    for record in records.iter() {
        payout_details.push_back(PayoutDetail {
            player_id: record.player_id,
            option_id: record.option_id,
            bet_amount: record.bet_amount,
            payout: record.bet_amount,
            profit: 0,
        });
    }

    Distribution {
        mode: SettlementMode::Refund,
        total_bet_amount,
        total_commission: 0,
        payout_pool: total_bet_amount,
        total_winning_stake: 0,
        payout_details,
    }
}
