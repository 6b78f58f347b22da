//! Test modules for the pari-mutuel settlement contract.

use soroban_sdk::{Address, Env};

use crate::contract::{SettlementContract, SettlementContractClient};
use crate::types::BetRecord;

mod refund;

pub(crate) fn create_client<'a>(env: &Env) -> SettlementContractClient<'a> {
    let contract_id = env.register(SettlementContract, ());
    SettlementContractClient::new(env, &contract_id)
}

pub(crate) fn bet(
    player: &Address,
    option_id: u32,
    vote_weight: i128,
    bet_amount: i128,
) -> BetRecord {
    BetRecord {
        player_id: player.clone(),
        option_id,
        vote_weight,
        bet_amount,
    }
}
