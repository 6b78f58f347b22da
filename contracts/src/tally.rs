//! Groups bet records by option into vote and stake totals.

use soroban_sdk::{Env, Map, Vec};

use crate::errors::SettlementError;
use crate::types::{BetRecord, OptionTally};

/// Sums `vote_weight` and `bet_amount` per option.
/// Options without records do not appear; an empty ledger gives an empty map.
pub fn tally(
    env: &Env,
    records: &Vec<BetRecord>,
) -> Result<Map<u32, OptionTally>, SettlementError> {
    let mut tallies: Map<u32, OptionTally> = Map::new(env);

    for record in records.iter() {
        let current = tallies.get(record.option_id).unwrap_or(OptionTally {
            option_id: record.option_id,
            total_votes: 0,
            total_stake: 0,
        });

        let next = OptionTally {
            option_id: record.option_id,
            total_votes: current
                .total_votes
                .checked_add(record.vote_weight)
                .ok_or(SettlementError::Overflow)?,
            total_stake: current
                .total_stake
                .checked_add(record.bet_amount)
                .ok_or(SettlementError::Overflow)?,
        };
        tallies.set(record.option_id, next);
    }

    Ok(tallies)
}
