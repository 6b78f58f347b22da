//! Stateless contract surface over the settlement engine.
//!
//! Nothing here reads or writes storage. Every entry point is a pure function
//! of its arguments, so the host can replay any settlement for audit.

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Map, Vec};

use crate::distributor;
use crate::errors::SettlementError;
use crate::report;
use crate::resolver;
use crate::summary;
use crate::tally;
use crate::types::{
    BetRecord, Distribution, OptionTally, PlayerSummary, SettlementResult, WinnerResolution,
};
use crate::validation;

#[contract]
pub struct SettlementContract;

#[contractimpl]
impl SettlementContract {
    /// Aggregates vote and stake totals per option
    pub fn tally(
        env: Env,
        records: Vec<BetRecord>,
    ) -> Result<Map<u32, OptionTally>, SettlementError> {
        tally::tally(&env, &records)
    }
    
    /// Picks every option tied on the maximum vote total
    pub fn resolve_winners(
        env: Env,
        tallies: Map<u32, OptionTally>,
    ) -> Result<WinnerResolution, SettlementError> {
        resolver::resolve_winners(&env, &tallies)
    }
    
    /// Computes commission, pool and per-record payouts for known winners
    pub fn distribute(
        env: Env,
        records: Vec<BetRecord>,
        winning_option_ids: Vec<u32>,
        commission_bps: u32,
    ) -> Result<Distribution, SettlementError> {
        distributor::distribute(&env, &records, &winning_option_ids, commission_bps)
    }
    
    /// Settles a closed poll: validate, tally, resolve, distribute, report.
    /// `NoVotes` short-circuits before any money is computed.
    pub fn settle(
        env: Env,
        options: Vec<u32>,
        records: Vec<BetRecord>,
        commission_bps: u32,
    ) -> Result<SettlementResult, SettlementError> {
        if let Err(err) = validation::validate_ledger(&env, &options, &records, commission_bps) {
            log!(&env, "settlement rejected", err as u32, records.len());
            return Err(err);
        }
        
        let tallies = tally::tally(&env, &records)?;
        let resolution = resolver::resolve_winners(&env, &tallies)?;
        let distribution = distributor::distribute(
            &env,
            &records,
            &resolution.winning_option_ids,
            commission_bps,
        )?;
        let result = report::build_report(resolution, distribution)?;
        
        log!(
            &env,
            "settled",
            result.mode as u32,
            result.total_bet_amount,
            result.total_commission,
            result.total_paid_out,
            result.winner_count
        );
        
        Ok(result)
    }
    
    /// Rolls payout lines up per player for disbursement
    pub fn summarize_players(
        env: Env,
        result: SettlementResult,
    ) -> Result<Map<Address, PlayerSummary>, SettlementError> {
        summary::summarize_players(&env, &result)
    }
    
    pub fn settlement_digest(env: Env, result: SettlementResult) -> BytesN<32> {
        report::settlement_digest(&env, &result)
    }
}
