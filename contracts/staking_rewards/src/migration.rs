//! Bulk import of ledger state from a previous deployment.
//!
//! A bulk load seeds records; it is not an economic event. No settlement runs,
//! imported pending rewards replace whatever was stored, and every loaded
//! participant starts accruing from the current tick.

use common::fixed_point;
use soroban_sdk::{log, Address, Env, Vec};

use crate::storage::{self, PoolState};
use crate::ContractError;

/// Writes one record per index of the three parallel vectors.
///
/// Positive amounts are appended to the roster unconditionally, so a
/// participant already on the roster (or loaded twice) gets a duplicate
/// roster entry. `total_staked` stays exact: an overwritten active stake is
/// removed before the new amount is added.
pub fn bulk_load(
    env: &Env,
    pool: &mut PoolState,
    participants: &Vec<Address>,
    stake_amounts: &Vec<i128>,
    pending_rewards: &Vec<i128>,
    now: u32,
) -> Result<u32, ContractError> {
    let len = participants.len();
    if stake_amounts.len() != len || pending_rewards.len() != len {
        return Err(ContractError::InvalidArgument);
    }

    for i in 0..len {
        let participant = participants
            .get(i)
            .ok_or(ContractError::InvalidArgument)?;
        let amount = stake_amounts.get(i).ok_or(ContractError::InvalidArgument)?;
        let pending = pending_rewards
            .get(i)
            .ok_or(ContractError::InvalidArgument)?;
        if amount < 0 || pending < 0 {
            return Err(ContractError::InvalidArgument);
        }

        let mut record = storage::load_participant(env, &participant);
        if record.is_active {
            pool.total_staked = fixed_point::checked_sub(pool.total_staked, record.stake_amount)?;
        }

        record.stake_amount = amount;
        record.pending_rewards = pending;
        record.checkpoint = record.checkpoint.max(now);
        record.ever_staked = amount > 0;
        record.is_active = amount > 0;

        if amount > 0 {
            storage::push_roster(env, pool, &participant);
            pool.total_staked = fixed_point::checked_add(pool.total_staked, amount)?;
        }

        storage::save_participant(env, &participant, &record);
    }

    log!(env, "bulk load applied", len, pool.roster_len);
    Ok(len)
}
