//! Per-participant reward multipliers layered over the base accrual.
//!
//! The overlay only exists once the contract runs at `VERSION_BOOSTED`.
//! Multipliers are percentages: 100 leaves a reward unchanged, 200 doubles it.

use soroban_sdk::{contracttype, Address, Env};

use crate::config::{BOOST_CEILING, NEUTRAL_BOOST, VERSION_BOOSTED};
use crate::storage::{self, BOOST_CFG};
use crate::ContractError;

/// Global boost switches.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostConfig {
    /// Cap applied when a multiplier is assigned, in `[100, 500]`.
    pub max_multiplier: u32,
    /// Kill-switch; when off every participant resolves to neutral.
    pub enabled: bool,
}

/// Boost configuration, present only once the overlay is initialized.
pub fn load_config(env: &Env) -> Option<BoostConfig> {
    if storage::version(env) < VERSION_BOOSTED {
        return None;
    }
    env.storage().instance().get(&BOOST_CFG)
}

pub fn require_config(env: &Env) -> Result<BoostConfig, ContractError> {
    load_config(env).ok_or(ContractError::BoostNotInitialized)
}

pub fn save_config(env: &Env, config: &BoostConfig) {
    env.storage().instance().set(&BOOST_CFG, config);
}

pub fn validate_cap(max_multiplier: u32) -> Result<(), ContractError> {
    if !(NEUTRAL_BOOST..=BOOST_CEILING).contains(&max_multiplier) {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

pub fn validate_multiplier(config: &BoostConfig, multiplier: u32) -> Result<(), ContractError> {
    if !(NEUTRAL_BOOST..=config.max_multiplier).contains(&multiplier) {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Resolves a stored multiplier against the global switch.
///
/// Disabled overlay or no override (stored 0) both give `NEUTRAL_BOOST`.
pub fn resolve(config: &BoostConfig, stored: u32) -> u32 {
    if !config.enabled || stored == 0 {
        NEUTRAL_BOOST
    } else {
        stored
    }
}

/// Multiplier that settlement applies to `participant` right now.
pub fn effective_multiplier(env: &Env, participant: &Address) -> u32 {
    match load_config(env) {
        Some(config) => resolve(&config, storage::load_boost(env, participant)),
        None => NEUTRAL_BOOST,
    }
}
