//! Calls into the stake and reward asset contracts.
//!
//! Every call goes through the `try_*` client so a failing asset surfaces as
//! `ExternalCallFailure` and the whole invocation rolls back.

use soroban_sdk::{log, token, Address, Env};

use crate::ContractError;

/// Pulls `amount` stake units from `from` into the contract.
pub fn transfer_in(
    env: &Env,
    stake_token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, stake_token);
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "stake transfer-in failed", amount);
            Err(ContractError::ExternalCallFailure)
        }
    }
}

/// Pushes `amount` stake units from the contract to `to`.
pub fn transfer_out(
    env: &Env,
    stake_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, stake_token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "stake transfer-out failed", amount);
            Err(ContractError::ExternalCallFailure)
        }
    }
}

/// Mints `amount` reward units to `to`. The contract must administer the
/// reward asset.
pub fn mint(
    env: &Env,
    reward_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::StellarAssetClient::new(env, reward_token);
    match client.try_mint(to, &amount) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "reward mint failed", amount);
            Err(ContractError::ExternalCallFailure)
        }
    }
}

/// Hands administration of `asset` to `new_admin`.
pub fn set_admin(env: &Env, asset: &Address, new_admin: &Address) -> Result<(), ContractError> {
    let client = token::StellarAssetClient::new(env, asset);
    match client.try_set_admin(new_admin) {
        Ok(Ok(_)) => Ok(()),
        _ => Err(ContractError::ExternalCallFailure),
    }
}
