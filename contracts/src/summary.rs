//! Per-player roll-up of a settlement for the payout executor.

use soroban_sdk::{Address, Env, Map};

use crate::errors::SettlementError;
use crate::types::{PlayerSummary, SettlementResult};

/// Folds payout lines per player so each player is credited once.
pub fn summarize_players(
    env: &Env,
    result: &SettlementResult,
) -> Result<Map<Address, PlayerSummary>, SettlementError> {
    let mut summaries: Map<Address, PlayerSummary> = Map::new(env);

    for detail in result.payout_details.iter() {
        let current = summaries.get(detail.player_id.clone()).unwrap_or(PlayerSummary {
            player_id: detail.player_id.clone(),
            record_count: 0,
            total_bet: 0,
            total_payout: 0,
            net_profit: 0,
        });

        let next = PlayerSummary {
            player_id: detail.player_id.clone(),
            record_count: current
                .record_count
                .checked_add(1)
                .ok_or(SettlementError::Overflow)?,
            total_bet: current
                .total_bet
                .checked_add(detail.bet_amount)
                .ok_or(SettlementError::Overflow)?,
            total_payout: current
                .total_payout
                .checked_add(detail.payout)
                .ok_or(SettlementError::Overflow)?,
            net_profit: current
                .net_profit
                .checked_add(detail.profit)
                .ok_or(SettlementError::Overflow)?,
        };
        summaries.set(detail.player_id, next);
    }

    Ok(summaries)
}
