mod common;

use common::{funded_user, mint_tokens, position_params, setup};
use soroban_sdk::{testutils::Address as _, token::TokenClient, Address};
use tidepool_manager::{Dec, RewardKind, TidepoolError};

#[test]
fn test_fees_collected_by_owner() {
    let t = setup();
    let owner = funded_user(&t);
    let pool_id = t.client.create_pool(&common::pool_params(&t));
    let created = t.client.create_position(&owner, &position_params(pool_id, 3_000_000, 5_000_000));

    let reward_token = common::create_token(&t.env);
    let funder = Address::generate(&t.env);
    mint_tokens(&t.env, &reward_token, &funder, 10_000);

    t.client.add_rewards(&funder, &pool_id, &RewardKind::Fee, &reward_token, &10_000);

    let owed = t.client.get_claimable_rewards(&created.position_id, &RewardKind::Fee);
    let paid = t.client.collect_fees(&owner, &created.position_id);
    assert_eq!(paid, owed);

    let received = paid.get(reward_token.clone()).unwrap_or(0);
    assert!((9_999..=10_000).contains(&received));
    assert_eq!(TokenClient::new(&t.env, &reward_token).balance(&owner), received);

    assert!(t.client.collect_fees(&owner, &created.position_id).is_empty());
}

#[test]
fn test_incentives_paid_on_withdraw() {
    let t = setup();
    let owner = funded_user(&t);
    let pool_id = t.client.create_pool(&common::pool_params(&t));
    let created = t.client.create_position(&owner, &position_params(pool_id, 3_000_000, 5_000_000));

    let reward_token = common::create_token(&t.env);
    let funder = Address::generate(&t.env);
    mint_tokens(&t.env, &reward_token, &funder, 4_000);
    t.client.add_rewards(&funder, &pool_id, &RewardKind::Incentive, &reward_token, &4_000);

    let half = Dec::from_raw(created.liquidity.raw() / 2);
    t.client.withdraw_position(&owner, &created.position_id, &half);

    let received = TokenClient::new(&t.env, &reward_token).balance(&owner);
    assert!((3_999..=4_000).contains(&received));
    assert!(t.client.collect_incentives(&owner, &created.position_id).is_empty());
}

#[test]
fn test_accumulator_tracks_liquidity() {
    let t = setup();
    let owner = funded_user(&t);
    let pool_id = t.client.create_pool(&common::pool_params(&t));
    let created = t.client.create_position(&owner, &position_params(pool_id, 300, 700));

    let accum = t.client.get_accumulator(&pool_id, &RewardKind::Fee);
    assert_eq!(accum.total_shares, created.liquidity);

    t.client.withdraw_position(&owner, &created.position_id, &created.liquidity);
    let accum = t.client.get_accumulator(&pool_id, &RewardKind::Fee);
    assert_eq!(accum.total_shares, Dec::ZERO);
}

#[test]
fn test_reward_errors() {
    let t = setup();
    let owner = funded_user(&t);
    let pool_id = t.client.create_pool(&common::pool_params(&t));

    let reward_token = common::create_token(&t.env);
    let funder = Address::generate(&t.env);
    mint_tokens(&t.env, &reward_token, &funder, 1_000);

    assert_eq!(
        t.client.try_add_rewards(&funder, &pool_id, &RewardKind::Fee, &reward_token, &1_000),
        Err(Ok(TidepoolError::NoSharesToReward))
    );

    let created = t.client.create_position(&owner, &position_params(pool_id, 300, 700));
    assert_eq!(
        t.client.try_add_rewards(&funder, &pool_id, &RewardKind::Fee, &reward_token, &0),
        Err(Ok(TidepoolError::InvalidAmount))
    );
    assert_eq!(
        t.client.try_collect_fees(&funder, &created.position_id),
        Err(Ok(TidepoolError::NotPositionOwner))
    );
}
