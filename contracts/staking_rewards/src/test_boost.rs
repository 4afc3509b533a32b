extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::boost::BoostConfig;
use crate::config::{NEUTRAL_BOOST, SCALE};
use crate::events::{BoostEnabledChangedEvent, BoostSetEvent, MaxBoostChangedEvent};
use crate::{ContractError, StakingRewardsContract, StakingRewardsContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

const START: u32 = 100;

struct Ctx {
    env: Env,
    client: StakingRewardsContractClient<'static>,
    admin: Address,
    reward_token: Address,
    alice: Address,
}

/// Base-version contract at 1e18/tick with no fee, and `alice` holding 100
/// staked units from `START`.
fn setup_with_stake() -> Ctx {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);
    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(contract_id.clone());

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &stake_token.address(),
        &reward_token.address(),
        &SCALE,
        &0,
    );
    env.ledger().set_sequence_number(START);

    let alice = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token.address()).mint(&alice, &100);
    client.deposit(&alice, &100);

    Ctx {
        env,
        client,
        admin,
        reward_token: reward_token.address(),
        alice,
    }
}

/// Converts the SDK's XDR event log into `(contract, topics, data)` tuples.
fn all_events(env: &Env) -> Vec<(Address, Vec<Val>, Val)> {
    use soroban_sdk::{
        xdr::{ContractEventBody, ScAddress},
        TryFromVal,
    };
    let mut out = Vec::new(env);
    for event in env.events().all().events() {
        let ContractEventBody::V0(body) = &event.body;
        let source = Address::try_from_val(
            env,
            &ScAddress::Contract(event.contract_id.clone().expect("contract event")),
        )
        .unwrap();
        let mut topics = Vec::new(env);
        for topic in body.topics.iter() {
            topics.push_back(Val::try_from_val(env, topic).unwrap());
        }
        let data = Val::try_from_val(env, &body.data).unwrap();
        out.push_back((source, topics, data));
    }
    out
}

fn advance_to(env: &Env, tick: u32) {
    env.ledger().set_sequence_number(tick);
}

/// Last topics and payload published by the staking contract itself.
fn last_event(ctx: &Ctx) -> (Vec<Val>, Val) {
    let events: Vec<(Address, Vec<Val>, Val)> = all_events(&ctx.env);
    events
        .iter()
        .filter(|(source, _, _)| *source == ctx.client.address)
        .map(|(_, topics, data)| (topics, data))
        .last()
        .expect("contract published no event")
}

// ── Overlay lifecycle ────────────────────────────────────────────────────────

#[test]
fn test_base_version_has_no_overlay() {
    let ctx = setup_with_stake();

    assert_eq!(ctx.client.get_version(), 1);
    assert_eq!(ctx.client.get_boost_config(), None);
    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), NEUTRAL_BOOST);

    match ctx.client.try_set_boost(&ctx.admin, &ctx.alice, &200) {
        Err(Ok(e)) => assert_eq!(e, ContractError::BoostNotInitialized),
        _ => unreachable!("Expected BoostNotInitialized error"),
    }
    match ctx.client.try_set_boost_enabled(&ctx.admin, &false) {
        Err(Ok(e)) => assert_eq!(e, ContractError::BoostNotInitialized),
        _ => unreachable!("Expected BoostNotInitialized error"),
    }
}

#[test]
fn test_initialize_boost_once() {
    let ctx = setup_with_stake();

    ctx.client.initialize_boost(&ctx.admin, &300);
    assert_eq!(ctx.client.get_version(), 2);
    assert_eq!(
        ctx.client.get_boost_config(),
        Some(BoostConfig {
            max_multiplier: 300,
            enabled: true,
        })
    );
    // No override yet.
    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), NEUTRAL_BOOST);

    match ctx.client.try_initialize_boost(&ctx.admin, &300) {
        Err(Ok(e)) => assert_eq!(e, ContractError::AlreadyInitialized),
        _ => unreachable!("Expected AlreadyInitialized error"),
    }
}

#[test]
fn test_initialize_boost_requires_admin_and_valid_cap() {
    let ctx = setup_with_stake();

    match ctx.client.try_initialize_boost(&ctx.alice, &300) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match ctx.client.try_initialize_boost(&ctx.admin, &501) {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidArgument),
        _ => unreachable!("Expected InvalidArgument error"),
    }
    assert_eq!(ctx.client.get_version(), 1);
}

// ── Boosted accrual ──────────────────────────────────────────────────────────

#[test]
fn test_boost_scales_rewards() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &200);

    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), 200);

    advance_to(&ctx.env, START + 10);
    assert_eq!(ctx.client.get_pending_rewards(&ctx.alice), 20 * SCALE);

    ctx.client.distribute_rewards(&ctx.admin);
    assert_eq!(
        ctx.client.get_participant(&ctx.alice).pending_rewards,
        20 * SCALE
    );
}

#[test]
fn test_disabled_boost_is_neutral() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &200);
    ctx.client.set_boost_enabled(&ctx.admin, &false);

    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), NEUTRAL_BOOST);

    advance_to(&ctx.env, START + 10);
    ctx.client.distribute_rewards(&ctx.admin);
    assert_eq!(
        ctx.client.get_participant(&ctx.alice).pending_rewards,
        10 * SCALE
    );
}

#[test]
fn test_boost_change_is_not_retroactive() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);

    // 10 neutral ticks, then 10 ticks at 2x.
    advance_to(&ctx.env, START + 10);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &200);
    assert_eq!(
        ctx.client.get_participant(&ctx.alice).pending_rewards,
        10 * SCALE
    );

    advance_to(&ctx.env, START + 20);
    assert_eq!(ctx.client.get_pending_rewards(&ctx.alice), 30 * SCALE);
}

#[test]
fn test_kill_switch_flushes_before_flipping() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &200);

    // 10 ticks at 2x, then 10 neutral ticks.
    advance_to(&ctx.env, START + 10);
    ctx.client.set_boost_enabled(&ctx.admin, &false);
    assert_eq!(
        ctx.client.get_participant(&ctx.alice).pending_rewards,
        20 * SCALE
    );

    advance_to(&ctx.env, START + 20);
    assert_eq!(ctx.client.get_pending_rewards(&ctx.alice), 30 * SCALE);

    ctx.client.set_boost_enabled(&ctx.admin, &true);
    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), 200);
}

#[test]
fn test_boosted_claim_pays_fee_on_scaled_amount() {
    let ctx = setup_with_stake();
    ctx.client.set_fee(&ctx.admin, &100);
    ctx.client.initialize_boost(&ctx.admin, &500);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &150);

    advance_to(&ctx.env, START + 10);
    let net = ctx.client.claim_rewards(&ctx.alice);

    // 15e18 boosted, 1% fee.
    assert_eq!(net, 14_850_000_000_000_000_000);
    assert_eq!(ctx.client.get_pool().collected_fees, 150_000_000_000_000_000);
    assert_eq!(
        TokenClient::new(&ctx.env, &ctx.reward_token).balance(&ctx.alice),
        net
    );
}

// ── Bounds ───────────────────────────────────────────────────────────────────

#[test]
fn test_set_boost_bounds() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);

    for bad in [0u32, 99, 301] {
        match ctx.client.try_set_boost(&ctx.admin, &ctx.alice, &bad) {
            Err(Ok(e)) => assert_eq!(e, ContractError::InvalidArgument),
            _ => unreachable!("Expected InvalidArgument error"),
        }
    }

    ctx.client.set_boost(&ctx.admin, &ctx.alice, &100);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &300);
    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), 300);
}

#[test]
fn test_set_boost_by_non_admin_fails() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);

    match ctx.client.try_set_boost(&ctx.alice, &ctx.alice, &300) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_set_max_boost() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &300);

    for bad in [99u32, 501] {
        match ctx.client.try_set_max_boost(&ctx.admin, &bad) {
            Err(Ok(e)) => assert_eq!(e, ContractError::InvalidArgument),
            _ => unreachable!("Expected InvalidArgument error"),
        }
    }

    ctx.client.set_max_boost(&ctx.admin, &500);
    assert_eq!(ctx.client.get_boost_config().unwrap().max_multiplier, 500);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &450);

    // Lowering the cap leaves existing assignments alone.
    ctx.client.set_max_boost(&ctx.admin, &200);
    assert_eq!(ctx.client.get_effective_boost(&ctx.alice), 450);
}

#[test]
fn test_boost_for_participant_who_never_staked() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);

    let carol = Address::generate(&ctx.env);
    ctx.client.set_boost(&ctx.admin, &carol, &250);

    assert_eq!(ctx.client.get_effective_boost(&carol), 250);
    // No record is created by assigning a boost.
    assert!(!ctx.client.get_participant(&carol).ever_staked);
    assert_eq!(ctx.client.get_participant(&carol).checkpoint, 0);
}

// ── Events ───────────────────────────────────────────────────────────────────

#[test]
fn test_boost_admin_events() {
    let ctx = setup_with_stake();
    ctx.client.initialize_boost(&ctx.admin, &300);

    advance_to(&ctx.env, START + 3);
    ctx.client.set_boost(&ctx.admin, &ctx.alice, &250);
    let (topics, data) = last_event(&ctx);
    assert_eq!(
        topics,
        (symbol_short!("BOOST_SET"), ctx.alice.clone()).into_val(&ctx.env)
    );
    let payload: BoostSetEvent = data.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        payload,
        BoostSetEvent {
            participant: ctx.alice.clone(),
            multiplier: 250,
            tick: START + 3,
        }
    );

    advance_to(&ctx.env, START + 5);
    ctx.client.set_boost_enabled(&ctx.admin, &false);
    let (topics, data) = last_event(&ctx);
    assert_eq!(topics, (symbol_short!("BOOST_ON"),).into_val(&ctx.env));
    let payload: BoostEnabledChangedEvent = data.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        payload,
        BoostEnabledChangedEvent {
            enabled: false,
            tick: START + 5,
        }
    );

    ctx.client.set_max_boost(&ctx.admin, &400);
    let (topics, data) = last_event(&ctx);
    assert_eq!(topics, (symbol_short!("MAX_BOOST"),).into_val(&ctx.env));
    let payload: MaxBoostChangedEvent = data.try_into_val(&ctx.env).unwrap();
    assert_eq!(
        payload,
        MaxBoostChangedEvent {
            old_max: 300,
            new_max: 400,
            tick: START + 5,
        }
    );
}
