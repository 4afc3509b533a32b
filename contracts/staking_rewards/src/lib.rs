#![no_std]

pub mod accrual;
pub mod assets;
pub mod boost;
pub mod config;
pub mod events;
pub mod fees;
pub mod migration;
pub mod storage;

use common::fixed_point::{self, MathError};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use accrual::Scaling;
use boost::BoostConfig;
use config::{MAX_FEE_BPS, MAX_RATE, MIN_RATE, VERSION_BOOSTED};
use storage::{ADMIN, PENDING_ADMIN, REWARD_TOKEN, STAKE_TOKEN};

pub use storage::{ParticipantRecord, PoolState};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    InsufficientState = 5,
    ArithmeticOverflow = 6,
    ExternalCallFailure = 7,
    TokensIdentical = 8,
    BoostNotInitialized = 9,
}

impl From<MathError> for ContractError {
    fn from(_: MathError) -> Self {
        ContractError::ArithmeticOverflow
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract at the base (unboosted) version.
    ///
    /// * `stake_token`  – asset participants deposit.
    /// * `reward_token` – asset minted on claims; this contract must be its admin.
    /// * `reward_rate`  – reward units emitted **per tick** across the pool.
    /// * `fee_bps`      – claim fee in basis points.
    ///
    /// Rejected once a reward asset is recorded.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_rate: i128,
        fee_bps: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&REWARD_TOKEN) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        Self::validate_rate(reward_rate)?;
        Self::validate_fee(fee_bps)?;

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&STAKE_TOKEN, &stake_token);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        storage::set_version(&env, config::VERSION_BASE);
        storage::save_pool(
            &env,
            &PoolState {
                reward_rate,
                fee_bps,
                ..PoolState::default()
            },
        );

        events::publish_initialized(&env, admin, stake_token, reward_token, reward_rate, fee_bps);

        Ok(())
    }

    /// One-time switch to the boosted version.
    ///
    /// Turns the overlay on with `max_multiplier` as the cap. No multiplier is
    /// assigned yet, so every participant keeps accruing at the neutral rate
    /// until `set_boost` is called for them.
    pub fn initialize_boost(
        env: Env,
        caller: Address,
        max_multiplier: u32,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        if storage::version(&env) >= VERSION_BOOSTED {
            return Err(ContractError::AlreadyInitialized);
        }
        boost::validate_cap(max_multiplier)?;

        storage::set_version(&env, VERSION_BOOSTED);
        boost::save_config(
            &env,
            &BoostConfig {
                max_multiplier,
                enabled: true,
            },
        );

        events::publish_boost_initialized(&env, max_multiplier);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake units.
    ///
    /// The participant is settled at their pre-deposit share before the
    /// balances change, so the new units never earn retroactively.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidArgument);
        }

        let now = env.ledger().sequence();
        let mut pool = storage::load_pool(&env);
        let scaling = Scaling::current(&env);
        let mut record = storage::load_participant(&env, &participant);

        // 1. First deposit starts the accrual clock.
        if record.checkpoint == 0 {
            record.checkpoint = now;
        }

        // 2. Settle at the old share.
        accrual::settle(&env, &pool, &scaling, &participant, &mut record, now)?;

        // 3. Increase the participant's stake and the pool total.
        record.stake_amount = fixed_point::checked_add(record.stake_amount, amount)?;
        pool.total_staked = fixed_point::checked_add(pool.total_staked, amount)?;
        if !record.ever_staked {
            storage::push_roster(&env, &mut pool, &participant);
            record.ever_staked = true;
        }
        record.is_active = true;

        storage::save_participant(&env, &participant, &record);
        storage::save_pool(&env, &pool);

        // 4. Pull the tokens.
        let stake_token = Self::address_of(&env, &STAKE_TOKEN)?;
        assets::transfer_in(&env, &stake_token, &participant, amount)?;

        events::publish_deposit(&env, participant, amount);

        Ok(())
    }

    /// Withdraw the participant's entire stake.
    ///
    /// Rewards earned up to now stay pending and can still be claimed.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let now = env.ledger().sequence();
        let mut pool = storage::load_pool(&env);
        let scaling = Scaling::current(&env);
        let mut record = storage::load_participant(&env, &participant);

        if record.stake_amount <= 0 {
            return Err(ContractError::InsufficientState);
        }
        if !record.is_active {
            return Err(ContractError::Unauthorized);
        }

        // 1. Settle at the pre-withdrawal share.
        accrual::settle(&env, &pool, &scaling, &participant, &mut record, now)?;

        // 2. Remove the stake (effects before the transfer).
        let amount = record.stake_amount;
        record.stake_amount = 0;
        record.is_active = false;
        pool.total_staked = fixed_point::checked_sub(pool.total_staked, amount)?;

        storage::save_participant(&env, &participant, &record);
        storage::save_pool(&env, &pool);

        // 3. Return the tokens.
        let stake_token = Self::address_of(&env, &STAKE_TOKEN)?;
        assets::transfer_out(&env, &stake_token, &participant, amount)?;

        events::publish_withdraw(&env, participant, amount);

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim all pending rewards, net of the claim fee. Returns the net amount
    /// minted to the participant.
    pub fn claim_rewards(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let now = env.ledger().sequence();
        let mut pool = storage::load_pool(&env);
        let scaling = Scaling::current(&env);
        let mut record = storage::load_participant(&env, &participant);

        // 1. Fold in everything earned up to now.
        accrual::settle(&env, &pool, &scaling, &participant, &mut record, now)?;

        if record.pending_rewards <= 0 {
            return Err(ContractError::InsufficientState);
        }

        // 2. Split, reset, and book the fee.
        let split = fees::split(record.pending_rewards, pool.fee_bps)?;
        record.pending_rewards = 0;
        pool.collected_fees = fixed_point::checked_add(pool.collected_fees, split.fee)?;

        storage::save_participant(&env, &participant, &record);
        storage::save_pool(&env, &pool);

        // 3. Mint the net amount.
        if split.net > 0 {
            let reward_token = Self::address_of(&env, &REWARD_TOKEN)?;
            assets::mint(&env, &reward_token, &participant, split.net)?;
        }

        events::publish_rewards_claimed(&env, participant, split.net, split.fee);

        Ok(split.net)
    }

    /// Mint every collected fee to the administrator.
    pub fn withdraw_collected_fees(env: Env, caller: Address) -> Result<i128, ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut pool = storage::load_pool(&env);
        let amount = pool.collected_fees;
        if amount <= 0 {
            return Err(ContractError::InsufficientState);
        }

        pool.collected_fees = 0;
        storage::save_pool(&env, &pool);

        let reward_token = Self::address_of(&env, &REWARD_TOKEN)?;
        assets::mint(&env, &reward_token, &caller, amount)?;

        events::publish_fees_withdrawn(&env, caller, amount);

        Ok(amount)
    }

    /// Settle every active participant on the roster. Returns the number of
    /// roster entries settled.
    pub fn distribute_rewards(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_admin(&env, &caller)?;
        Self::flush_all(&env)
    }

    // ── Admin: parameters ───────────────────────────────────────────────────

    /// Update the reward rate.
    ///
    /// Every active participant is settled at the old rate first, so the new
    /// rate only prices ticks after the change.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        Self::validate_rate(new_rate)?;

        Self::flush_all(&env)?;

        let mut pool = storage::load_pool(&env);
        let old_rate = pool.reward_rate;
        pool.reward_rate = new_rate;
        storage::save_pool(&env, &pool);

        events::publish_reward_rate_changed(&env, old_rate, new_rate);

        Ok(())
    }

    /// Update the claim fee. Applies to the next claim; accrual is unaffected.
    pub fn set_fee(env: Env, caller: Address, new_fee_bps: u32) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        Self::validate_fee(new_fee_bps)?;

        let mut pool = storage::load_pool(&env);
        let old_fee_bps = pool.fee_bps;
        pool.fee_bps = new_fee_bps;
        storage::save_pool(&env, &pool);

        events::publish_fee_changed(&env, old_fee_bps, new_fee_bps);

        Ok(())
    }

    // ── Admin: boost overlay ────────────────────────────────────────────────

    /// Assign `multiplier` (percent) to `participant`.
    ///
    /// The participant is settled under their previous multiplier first.
    pub fn set_boost(
        env: Env,
        caller: Address,
        participant: Address,
        multiplier: u32,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let config = boost::require_config(&env)?;
        boost::validate_multiplier(&config, multiplier)?;

        let pool = storage::load_pool(&env);
        let now = env.ledger().sequence();
        accrual::settle_participant(&env, &pool, &Scaling::Boost(config), &participant, now)?;

        storage::save_boost(&env, &participant, multiplier);

        events::publish_boost_set(&env, participant, multiplier);

        Ok(())
    }

    /// Flip the global boost kill-switch. Active participants are settled
    /// under the old setting first.
    pub fn set_boost_enabled(env: Env, caller: Address, enabled: bool) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let mut config = boost::require_config(&env)?;

        Self::flush_all(&env)?;

        config.enabled = enabled;
        boost::save_config(&env, &config);

        events::publish_boost_enabled_changed(&env, enabled);

        Ok(())
    }

    /// Change the cap for future `set_boost` calls. Multipliers already
    /// assigned are left as they are.
    pub fn set_max_boost(env: Env, caller: Address, new_max: u32) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let mut config = boost::require_config(&env)?;
        boost::validate_cap(new_max)?;

        let old_max = config.max_multiplier;
        config.max_multiplier = new_max;
        boost::save_config(&env, &config);

        events::publish_max_boost_changed(&env, old_max, new_max);

        Ok(())
    }

    // ── Admin: migration ────────────────────────────────────────────────────

    /// Seed participant records from a previous deployment.
    ///
    /// The three vectors are parallel and must have equal length. Large
    /// imports may be split across several calls.
    pub fn bulk_load(
        env: Env,
        caller: Address,
        participants: Vec<Address>,
        stake_amounts: Vec<i128>,
        pending_rewards: Vec<i128>,
    ) -> Result<u32, ContractError> {
        Self::require_admin(&env, &caller)?;

        let now = env.ledger().sequence();
        let mut pool = storage::load_pool(&env);
        let loaded = migration::bulk_load(
            &env,
            &mut pool,
            &participants,
            &stake_amounts,
            &pending_rewards,
            now,
        )?;
        storage::save_pool(&env, &pool);

        events::publish_state_migrated(&env, loaded);

        Ok(loaded)
    }

    /// Hand administration of the stake asset to `new_admin`.
    pub fn set_stake_token_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;
        let stake_token = Self::address_of(&env, &STAKE_TOKEN)?;
        assets::set_admin(&env, &stake_token, &new_admin)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Pool totals and parameters.
    pub fn get_pool(env: Env) -> PoolState {
        storage::load_pool(&env)
    }

    /// Stored record for `participant` (not settled).
    pub fn get_participant(env: Env, participant: Address) -> ParticipantRecord {
        storage::load_participant(&env, &participant)
    }

    /// Pending rewards as they would read after a settlement right now.
    /// Does not mutate state.
    pub fn get_pending_rewards(env: Env, participant: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env);
        let scaling = Scaling::current(&env);
        let record = storage::load_participant(&env, &participant);
        accrual::projected(
            &env,
            &pool,
            &scaling,
            &participant,
            &record,
            env.ledger().sequence(),
        )
    }

    pub fn get_roster_len(env: Env) -> u32 {
        storage::load_pool(&env).roster_len
    }

    pub fn get_roster_entry(env: Env, index: u32) -> Result<Address, ContractError> {
        if index >= storage::load_pool(&env).roster_len {
            return Err(ContractError::InvalidArgument);
        }
        storage::roster_entry(&env, index).ok_or(ContractError::InvalidArgument)
    }

    /// Multiplier settlement would apply to `participant` right now.
    pub fn get_effective_boost(env: Env, participant: Address) -> u32 {
        boost::effective_multiplier(&env, &participant)
    }

    pub fn get_boost_config(env: Env) -> Option<BoostConfig> {
        boost::load_config(&env)
    }

    pub fn get_version(env: Env) -> u32 {
        storage::version(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&REWARD_TOKEN)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Self::address_of(&env, &ADMIN)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &current_admin)?;

        env.storage().instance().set(&PENDING_ADMIN, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidArgument)?;

        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = Self::address_of(&env, &ADMIN)?;

        env.storage().instance().set(&ADMIN, &new_admin);
        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_admin(&env, &current_admin)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_ADMIN)
            .ok_or(ContractError::InvalidArgument)?;

        env.storage().instance().remove(&PENDING_ADMIN);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_ADMIN)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&REWARD_TOKEN) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: authenticate `caller` and check it is the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        let admin = Self::address_of(env, &ADMIN)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn address_of(env: &Env, key: &soroban_sdk::Symbol) -> Result<Address, ContractError> {
        storage::get_address(env, key).ok_or(ContractError::NotInitialized)
    }

    fn validate_rate(rate: i128) -> Result<(), ContractError> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(ContractError::InvalidArgument);
        }
        Ok(())
    }

    fn validate_fee(fee_bps: u32) -> Result<(), ContractError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(ContractError::InvalidArgument);
        }
        Ok(())
    }

    /// Settle the whole roster under the current parameters and announce it.
    fn flush_all(env: &Env) -> Result<u32, ContractError> {
        let pool = storage::load_pool(env);
        let scaling = Scaling::current(env);
        let settled = accrual::settle_all(env, &pool, &scaling, env.ledger().sequence())?;
        log!(env, "roster settled", settled);
        events::publish_rewards_distributed(env, settled);
        Ok(settled)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_boost;
