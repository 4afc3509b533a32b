#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_rate: i128,
    pub fee_bps: u32,
    pub tick: u32,
}

/// Fired once when the boost overlay is switched on.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostInitializedEvent {
    pub max_multiplier: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub participant: Address,
    pub amount: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub participant: Address,
    pub amount: i128,
    pub tick: u32,
}

/// Fired on claim; `net_amount + fee_amount` is what was pending.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub participant: Address,
    pub net_amount: i128,
    pub fee_amount: i128,
    pub tick: u32,
}

/// Fired after a roster-wide settlement.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub participant_count: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateChangedEvent {
    pub old_rate: i128,
    pub new_rate: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeChangedEvent {
    pub old_fee_bps: u32,
    pub new_fee_bps: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub admin: Address,
    pub amount: i128,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostSetEvent {
    pub participant: Address,
    pub multiplier: u32,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoostEnabledChangedEvent {
    pub enabled: bool,
    pub tick: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaxBoostChangedEvent {
    pub old_max: u32,
    pub new_max: u32,
    pub tick: u32,
}

/// Fired per bulk-load batch.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateMigratedEvent {
    pub participant_count: u32,
    pub tick: u32,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub tick: u32,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub tick: u32,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub tick: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
    reward_rate: i128,
    fee_bps: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            reward_rate,
            fee_bps,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_boost_initialized(env: &Env, max_multiplier: u32) {
    env.events().publish(
        (symbol_short!("BST_INIT"),),
        BoostInitializedEvent {
            max_multiplier,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_deposit(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), participant.clone()),
        DepositEvent {
            participant,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdraw(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), participant.clone()),
        WithdrawEvent {
            participant,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, participant: Address, net_amount: i128, fee_amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), participant.clone()),
        RewardsClaimedEvent {
            participant,
            net_amount,
            fee_amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_rewards_distributed(env: &Env, participant_count: u32) {
    env.events().publish(
        (symbol_short!("DISTRIB"),),
        RewardsDistributedEvent {
            participant_count,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_rate_changed(env: &Env, old_rate: i128, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_CHG"),),
        RewardRateChangedEvent {
            old_rate,
            new_rate,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_fee_changed(env: &Env, old_fee_bps: u32, new_fee_bps: u32) {
    env.events().publish(
        (symbol_short!("FEE_CHG"),),
        FeeChangedEvent {
            old_fee_bps,
            new_fee_bps,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_fees_withdrawn(env: &Env, admin: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("FEES_WD"), admin.clone()),
        FeesWithdrawnEvent {
            admin,
            amount,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_boost_set(env: &Env, participant: Address, multiplier: u32) {
    env.events().publish(
        (symbol_short!("BOOST_SET"), participant.clone()),
        BoostSetEvent {
            participant,
            multiplier,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_boost_enabled_changed(env: &Env, enabled: bool) {
    env.events().publish(
        (symbol_short!("BOOST_ON"),),
        BoostEnabledChangedEvent {
            enabled,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_max_boost_changed(env: &Env, old_max: u32, new_max: u32) {
    env.events().publish(
        (symbol_short!("MAX_BOOST"),),
        MaxBoostChangedEvent {
            old_max,
            new_max,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_state_migrated(env: &Env, participant_count: u32) {
    env.events().publish(
        (symbol_short!("MIGRATED"),),
        StateMigratedEvent {
            participant_count,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            tick: env.ledger().sequence(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            tick: env.ledger().sequence(),
        },
    );
}
