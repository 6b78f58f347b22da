//! Tests for the refund path when no stake backs a winning option.

use super::{bet, create_client};
use crate::types::{BetRecord, SettlementMode};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

#[test]
fn test_zero_stake_winner_refunds_everyone() {
    let env = Env::default();
    let client = create_client(&env);
    
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);
    
    // Option 1 wins on votes but nobody staked on it
    let records = vec![
        &env,
        bet(&alice, 1, 10, 0),
        bet(&bob, 2, 5, 500),
        bet(&carol, 2, 1, 250),
    ];
    
    let result = client.settle(&vec![&env, 1u32, 2u32], &records, &500);
    
    assert_eq!(result.mode, SettlementMode::Refund);
    assert_eq!(result.winning_option_ids, vec![&env, 1u32]);
    assert_eq!(result.total_winning_stake, 0);
    assert_eq!(result.total_commission, 0);
    assert_eq!(result.payout_pool, 750);
    assert_eq!(result.total_paid_out, 750);
    assert_eq!(result.residual, 0);
    
    for detail in result.payout_details.iter() {
        assert_eq!(detail.payout, detail.bet_amount);
        assert_eq!(detail.profit, 0);
    }
    
    // Everyone counts as a winner under refund
    assert_eq!(result.winner_count, 3);
    assert_eq!(result.loser_count, 0);
}

#[test]
fn test_distribute_without_winners_refunds() {
    let env = Env::default();
    let client = create_client(&env);
    
    let alice = Address::generate(&env);
    let records = vec![&env, bet(&alice, 4, 1, 120)];
    let winners: Vec<u32> = Vec::new(&env);
    
    let distribution = client.distribute(&records, &winners, &9_999);
    
    assert_eq!(distribution.mode, SettlementMode::Refund);
    assert_eq!(distribution.total_commission, 0);
    assert_eq!(distribution.payout_details.get(0).unwrap().payout, 120);
}

#[test]
fn test_refund_of_empty_ledger_is_empty() {
    let env = Env::default();
    let client = create_client(&env);
    
    let records: Vec<BetRecord> = Vec::new(&env);
    let distribution = client.distribute(&records, &vec![&env, 1u32], &500);
    
    assert_eq!(distribution.mode, SettlementMode::Refund);
    assert_eq!(distribution.total_bet_amount, 0);
    assert_eq!(distribution.payout_details.len(), 0);
}
