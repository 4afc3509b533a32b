//! Lazy, checkpointed reward accrual.
//!
//! Nothing runs per tick. A participant's reward is computed from their last
//! checkpoint whenever their record is touched, using the pool state at the
//! moment of settlement for the whole interval:
//!
//! ```text
//! share = stake × SCALE / total_staked
//! base  = rate × elapsed × share / SCALE
//! owed  = scaling(base)
//! ```
//!
//! Rate and multiplier changes settle the affected participants first, so
//! those parameters are never applied retroactively. Stake changes settle only
//! the caller: everyone else's open interval is later priced at whatever
//! `total_staked` reads when they settle. Summed payouts can therefore drift
//! above or below the emitted amount while the total moves.

use common::fixed_point::{self, MathError};
use soroban_sdk::{Address, Env};

use crate::boost::{self, BoostConfig};
use crate::config::NEUTRAL_BOOST;
use crate::storage::{self, ParticipantRecord, PoolState};
use crate::ContractError;

/// Post-processing applied to a base reward.
///
/// Picked from the stored contract version at runtime rather than baked into
/// the accrual math.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scaling {
    /// Base version: rewards are paid as computed.
    Identity,
    /// Boosted version: rewards are scaled by the participant's multiplier.
    Boost(BoostConfig),
}

impl Scaling {
    pub fn current(env: &Env) -> Self {
        match boost::load_config(env) {
            Some(config) => Scaling::Boost(config),
            None => Scaling::Identity,
        }
    }

    pub fn multiplier(&self, env: &Env, participant: &Address) -> u32 {
        match self {
            Scaling::Identity => NEUTRAL_BOOST,
            Scaling::Boost(config) => boost::resolve(config, storage::load_boost(env, participant)),
        }
    }

    pub fn apply(&self, env: &Env, participant: &Address, base: i128) -> Result<i128, MathError> {
        match self {
            Scaling::Identity => Ok(base),
            Scaling::Boost(_) => fixed_point::mul_div(
                base,
                self.multiplier(env, participant) as i128,
                NEUTRAL_BOOST as i128,
            ),
        }
    }
}

/// Unscaled reward for holding `stake` out of `total_staked` for `elapsed`
/// ticks at `rate`. Each division truncates.
pub fn base_reward(
    rate: i128,
    elapsed: u32,
    stake: i128,
    total_staked: i128,
) -> Result<i128, MathError> {
    let share = fixed_point::ratio(stake, total_staked)?;
    let emitted = rate
        .checked_mul(elapsed as i128)
        .ok_or(MathError::Overflow)?;
    fixed_point::apply_ratio(emitted, share)
}

/// Reward owed to `participant` for the interval `(record.checkpoint, now]`.
///
/// Zero when the interval is empty or there is no stake to be proportional to.
pub fn accrued(
    env: &Env,
    pool: &PoolState,
    scaling: &Scaling,
    participant: &Address,
    record: &ParticipantRecord,
    now: u32,
) -> Result<i128, ContractError> {
    if now <= record.checkpoint || pool.total_staked <= 0 || record.stake_amount <= 0 {
        return Ok(0);
    }
    let elapsed = now - record.checkpoint;
    let base = base_reward(
        pool.reward_rate,
        elapsed,
        record.stake_amount,
        pool.total_staked,
    )?;
    Ok(scaling.apply(env, participant, base)?)
}

/// Folds the owed reward into `record.pending_rewards` and moves the
/// checkpoint to `now`. The checkpoint never moves backwards.
pub fn settle(
    env: &Env,
    pool: &PoolState,
    scaling: &Scaling,
    participant: &Address,
    record: &mut ParticipantRecord,
    now: u32,
) -> Result<(), ContractError> {
    if now <= record.checkpoint {
        return Ok(());
    }
    let owed = accrued(env, pool, scaling, participant, record, now)?;
    record.pending_rewards = fixed_point::checked_add(record.pending_rewards, owed)?;
    record.checkpoint = now;
    Ok(())
}

/// What `pending_rewards` would read after a settlement at `now`.
pub fn projected(
    env: &Env,
    pool: &PoolState,
    scaling: &Scaling,
    participant: &Address,
    record: &ParticipantRecord,
    now: u32,
) -> Result<i128, ContractError> {
    let owed = accrued(env, pool, scaling, participant, record, now)?;
    Ok(fixed_point::checked_add(record.pending_rewards, owed)?)
}

/// Loads, settles and stores one participant. Records that never staked are
/// left untouched.
pub fn settle_participant(
    env: &Env,
    pool: &PoolState,
    scaling: &Scaling,
    participant: &Address,
    now: u32,
) -> Result<ParticipantRecord, ContractError> {
    let mut record = storage::load_participant(env, participant);
    if record.ever_staked {
        settle(env, pool, scaling, participant, &mut record, now)?;
        storage::save_participant(env, participant, &record);
    }
    Ok(record)
}

/// Settles every active participant on the roster. Returns how many roster
/// entries were settled; a duplicated entry is counted each time it appears.
pub fn settle_all(
    env: &Env,
    pool: &PoolState,
    scaling: &Scaling,
    now: u32,
) -> Result<u32, ContractError> {
    let mut settled = 0u32;
    for index in 0..pool.roster_len {
        let Some(participant) = storage::roster_entry(env, index) else {
            continue;
        };
        let mut record = storage::load_participant(env, &participant);
        if !record.is_active {
            continue;
        }
        settle(env, pool, scaling, &participant, &mut record, now)?;
        storage::save_participant(env, &participant, &record);
        settled += 1;
    }
    Ok(settled)
}
