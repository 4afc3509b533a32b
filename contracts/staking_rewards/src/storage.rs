use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::config::VERSION_BASE;

// ── Storage key constants ────────────────────────────────────────────────────

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
pub const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
pub const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
pub const POOL: Symbol = symbol_short!("POOL");
pub const VERSION: Symbol = symbol_short!("VERSION");
pub const BOOST_CFG: Symbol = symbol_short!("BST_CFG");

// Per-participant persistent storage uses tuple keys: (prefix, address)
const PARTICIPANT: Symbol = symbol_short!("PART");
const BOOST: Symbol = symbol_short!("BOOST");
// Roster entries are keyed by insertion index: (prefix, index)
const ROSTER: Symbol = symbol_short!("ROSTER");

// ── Records ──────────────────────────────────────────────────────────────────

/// Ledger entry for one participant. Created on first deposit (or bulk load)
/// and never deleted.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParticipantRecord {
    /// Principal currently in the pool.
    pub stake_amount: i128,
    /// Tick of the last settlement; 0 means the participant never staked.
    pub checkpoint: u32,
    /// Settled but unclaimed reward units.
    pub pending_rewards: i128,
    /// Set once the participant has a roster entry.
    pub ever_staked: bool,
    /// Cleared on full withdrawal.
    pub is_active: bool,
}

/// Pool-wide accounting context.
///
/// Entry points load it once, hand it by reference to the engines that
/// mutate it, and write it back before any external call.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of `stake_amount` over active participants.
    pub total_staked: i128,
    pub reward_rate: i128,
    pub fee_bps: u32,
    /// Fees retained on claims, awaiting `withdraw_collected_fees`.
    pub collected_fees: i128,
    pub roster_len: u32,
}

// ── Instance storage ─────────────────────────────────────────────────────────

pub fn load_pool(env: &Env) -> PoolState {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn save_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
    ttl::extend_instance(env);
}

pub fn version(env: &Env) -> u32 {
    env.storage().instance().get(&VERSION).unwrap_or(VERSION_BASE)
}

pub fn set_version(env: &Env, version: u32) {
    env.storage().instance().set(&VERSION, &version);
}

pub fn get_address(env: &Env, key: &Symbol) -> Option<Address> {
    env.storage().instance().get(key)
}

// ── Participants ─────────────────────────────────────────────────────────────

pub fn load_participant(env: &Env, participant: &Address) -> ParticipantRecord {
    env.storage()
        .persistent()
        .get(&(PARTICIPANT, participant.clone()))
        .unwrap_or_default()
}

pub fn save_participant(env: &Env, participant: &Address, record: &ParticipantRecord) {
    let key = (PARTICIPANT, participant.clone());
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
}

// ── Boost overrides ──────────────────────────────────────────────────────────

/// Stored multiplier for `participant`; 0 when none was ever assigned.
pub fn load_boost(env: &Env, participant: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&(BOOST, participant.clone()))
        .unwrap_or(0)
}

pub fn save_boost(env: &Env, participant: &Address, multiplier: u32) {
    let key = (BOOST, participant.clone());
    env.storage().persistent().set(&key, &multiplier);
    ttl::extend_persistent(env, &key);
}

// ── Roster ───────────────────────────────────────────────────────────────────

/// Appends `participant` at index `pool.roster_len`. No membership check is
/// made here; callers gate on `ever_staked` where they need set semantics.
pub fn push_roster(env: &Env, pool: &mut PoolState, participant: &Address) {
    let key = (ROSTER, pool.roster_len);
    env.storage().persistent().set(&key, participant);
    ttl::extend_persistent(env, &key);
    pool.roster_len += 1;
}

pub fn roster_entry(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&(ROSTER, index))
}
