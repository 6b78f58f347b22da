//! Assembles the final, balance-checked settlement report.

use soroban_sdk::{xdr::ToXdr, BytesN, Env};

use crate::errors::SettlementError;
use crate::types::{Distribution, SettlementMode, SettlementResult, WinnerResolution};

/// Combines winner resolution and distribution into a `SettlementResult`.
///
/// A record counts as a winner when it receives a non-zero payout; under
/// refund every record is a winner. The report is refused with
/// `SettlementImbalance` unless the books balance.
pub fn build_report(
    resolution: WinnerResolution,
    distribution: Distribution,
) -> Result<SettlementResult, SettlementError> {
    let mut total_paid_out: i128 = 0;
    let mut winner_count: u32 = 0;
    let mut loser_count: u32 = 0;

    for detail in distribution.payout_details.iter() {
        if detail.payout < 0 {
            return Err(SettlementError::SettlementImbalance);
        }
        if distribution.mode == SettlementMode::Refund && detail.payout != detail.bet_amount {
            return Err(SettlementError::SettlementImbalance);
        }
        total_paid_out = total_paid_out
            .checked_add(detail.payout)
            .ok_or(SettlementError::Overflow)?;

        if distribution.mode == SettlementMode::Refund || detail.payout > 0 {
            winner_count += 1;
        } else {
            loser_count += 1;
        }
    }

    check_balance(&distribution, total_paid_out)?;

    Ok(SettlementResult {
        mode: distribution.mode,
        winning_option_ids: resolution.winning_option_ids,
        max_votes: resolution.max_votes,
        total_votes: resolution.total_votes,
        total_bet_amount: distribution.total_bet_amount,
        total_commission: distribution.total_commission,
        payout_pool: distribution.payout_pool,
        total_winning_stake: distribution.total_winning_stake,
        total_paid_out,
        residual: distribution.payout_pool - total_paid_out,
        winner_count,
        loser_count,
        payout_details: distribution.payout_details,
    })
}

fn check_balance(distribution: &Distribution, total_paid_out: i128) -> Result<(), SettlementError> {
    let collected = distribution
        .payout_pool
        .checked_add(distribution.total_commission)
        .ok_or(SettlementError::Overflow)?;

    if collected != distribution.total_bet_amount
        || distribution.total_commission < 0
        || total_paid_out > distribution.payout_pool
    {
        return Err(SettlementError::SettlementImbalance);
    }
    if distribution.mode == SettlementMode::Refund && distribution.total_commission != 0 {
        return Err(SettlementError::SettlementImbalance);
    }
    Ok(())
}

/// SHA-256 of the XDR-encoded result, stored next to it for replay audits
pub fn settlement_digest(env: &Env, result: &SettlementResult) -> BytesN<32> {
    let encoded = result.clone().to_xdr(env);
    env.crypto().sha256(&encoded).to_bytes()
}
