//! Tie-inclusive winner selection over tallied options.

use soroban_sdk::{Env, Map, Vec};

use crate::errors::SettlementError;
use crate::types::{OptionTally, WinnerResolution};

/// Every option sharing the maximum vote total wins. There is no tiebreak.
///
/// Fails with `NoVotes` when there are no options or no votes at all, so the
/// caller leaves the poll unsettled instead of paying out against no winner.
/// A negative vote total is rejected with `InvalidVoteWeight`.
pub fn resolve_winners(
    env: &Env,
    tallies: &Map<u32, OptionTally>,
) -> Result<WinnerResolution, SettlementError> {
    let mut total_votes: i128 = 0;
    let mut max_votes: i128 = 0;

    for (_, option) in tallies.iter() {
        if option.total_votes < 0 {
            return Err(SettlementError::InvalidVoteWeight);
        }
        total_votes = total_votes
            .checked_add(option.total_votes)
            .ok_or(SettlementError::Overflow)?;
        if option.total_votes > max_votes {
            max_votes = option.total_votes;
        }
    }

    if total_votes == 0 {
        return Err(SettlementError::NoVotes);
    }

    // Map iteration is ordered by key, so winners come out ascending
    let mut winning_option_ids: Vec<u32> = Vec::new(env);
    for (option_id, option) in tallies.iter() {
        if option.total_votes == max_votes {
            winning_option_ids.push_back(option_id);
        }
    }

    Ok(WinnerResolution {
        winning_option_ids,
        max_votes,
        total_votes,
    })
}

/// True when `option_id` is one of the resolved winners
pub fn is_winning_option(winning_option_ids: &Vec<u32>, option_id: u32) -> bool {
    winning_option_ids.iter().any(|id| id == option_id)
}
