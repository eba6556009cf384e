use crate::clients::{asset_transfer, fetch_price};
use crate::reconcile::{current_balances, refresh_funds, require_entry};
use crate::storage::{get_asset, get_asset_list, get_state, set_asset};
use pool_math::{denormalize, mul_div, normalize, solve_d, solve_y};
use pool_types::{AssetKind, SwapBreakdown};
use soroban_sdk::{Address, Env, Map, Vec};

/// Execute a swap: sell `amount_sold` of `src` for `dst`, paying the net
/// output to `receiver` and the reward cut to the rewards receiver.
pub fn execute_swap(
    env: &Env,
    caller: Address,
    src: AssetKind,
    dst: AssetKind,
    amount_sold: u128,
    min_bought: u128,
    receiver: Address,
    deadline: u64,
) -> u128 {
    caller.require_auth();
    require_entry(env, deadline);
    let funds = refresh_funds(env);

    let breakdown = compute(env, &funds, &src, &dst, amount_sold);
    if breakdown.net_bought < min_bought {
        panic!("Bought amount below minimum");
    }

    // Bookkeeping against the just-reconciled ledger. The outgoing total
    // is checked against funds before any transfer happens.
    let mut src_data = get_asset(env, &src);
    src_data.funds = match src_data.funds.checked_add(amount_sold) {
        Some(v) => v,
        None => panic!("Amount overflow"),
    };
    set_asset(env, &src, &src_data);

    let paid_out = breakdown.net_bought + breakdown.reward_cut;
    let mut dst_data = get_asset(env, &dst);
    dst_data.funds = match dst_data.funds.checked_sub(paid_out) {
        Some(v) => v,
        None => panic!("Insufficient liquidity"),
    };
    set_asset(env, &dst, &dst_data);

    let state = get_state(env);
    let contract = env.current_contract_address();
    asset_transfer(env, &src, &caller, &contract, amount_sold);
    asset_transfer(env, &dst, &contract, &receiver, breakdown.net_bought);
    asset_transfer(
        env,
        &dst,
        &contract,
        &state.rewards_receiver,
        breakdown.reward_cut,
    );

    breakdown.net_bought
}

/// Expected net output of a hypothetical swap against live balances.
/// Read-only: nothing is written and no tokens move.
pub fn quote(env: &Env, src: AssetKind, dst: AssetKind, amount_sold: u128) -> u128 {
    let funds = current_balances(env);
    compute(env, &funds, &src, &dst, amount_sold).net_bought
}

/// Pure swap pricing over a given funds snapshot.
pub fn compute(
    env: &Env,
    funds: &Map<AssetKind, u128>,
    src: &AssetKind,
    dst: &AssetKind,
    amount_sold: u128,
) -> SwapBreakdown {
    if src == dst {
        panic!("Same asset");
    }
    if amount_sold == 0 {
        panic!("Amount must be non-zero");
    }

    let state = get_state(env);
    let list = get_asset_list(env);

    let mut xp: Vec<u128> = Vec::new(env);
    let mut src_index = None;
    let mut dst_index = None;
    let mut src_scale = None;
    let mut dst_scale = None;
    for (i, kind) in list.iter().enumerate() {
        let data = get_asset(env, &kind);
        let balance = funds.get(kind.clone()).expect("Unknown asset");
        let price = fetch_price(env, &state.price_oracle, &kind);
        xp.push_back(normalize(env, balance, data.multiplier, &price));
        if kind == *src {
            src_index = Some(i as u32);
            src_scale = Some((data.multiplier, price.clone()));
        }
        if kind == *dst {
            dst_index = Some(i as u32);
            dst_scale = Some((data.multiplier, price));
        }
    }
    let src_index = src_index.unwrap_or_else(|| panic!("Unknown asset"));
    let dst_index = dst_index.unwrap_or_else(|| panic!("Unknown asset"));
    let (src_multiplier, src_price) = src_scale.unwrap();
    let (dst_multiplier, dst_price) = dst_scale.unwrap();

    let d = match solve_d(env, &xp, state.amplitude) {
        Ok(d) => d,
        Err(_) => panic!("Invariant did not converge"),
    };

    // Perturb the source entry by the normalized sold amount, then solve
    // for the implied destination balance.
    let sold_norm = normalize(env, amount_sold, src_multiplier, &src_price);
    let src_norm = xp.get(src_index).unwrap();
    let bumped = match src_norm.checked_add(sold_norm) {
        Some(v) => v,
        None => panic!("Amount overflow"),
    };
    xp.set(src_index, bumped);

    let dst_norm_before = xp.get(dst_index).unwrap();
    let mut xp_rest: Vec<u128> = Vec::new(env);
    for (i, value) in xp.iter().enumerate() {
        if i as u32 != dst_index {
            xp_rest.push_back(value);
        }
    }
    let y = match solve_y(env, d, &xp_rest, state.amplitude) {
        Ok(y) => y,
        Err(_) => panic!("Invariant did not converge"),
    };

    // The extra -1 rounds against the trader; dropping it would let
    // truncation leak value out of the pool over many trades.
    let gross_norm = dst_norm_before.saturating_sub(y).saturating_sub(1);
    let gross_bought = denormalize(env, gross_norm, dst_multiplier, &dst_price);

    let fee = mul_div(env, state.swap_fee.num, gross_bought, state.swap_fee.denom);
    let reward_cut = mul_div(env, state.rewards_ratio.num, fee, state.rewards_ratio.denom);
    SwapBreakdown {
        gross_bought,
        fee,
        reward_cut,
        net_bought: gross_bought - fee,
    }
}

/// Normalized funds for every tracked asset over a funds snapshot, in
/// asset-list order.
pub fn normalized_funds(env: &Env, funds: &Map<AssetKind, u128>) -> Vec<u128> {
    let state = get_state(env);
    let mut xp: Vec<u128> = Vec::new(env);
    for kind in get_asset_list(env).iter() {
        let data = get_asset(env, &kind);
        let balance = funds.get(kind.clone()).expect("Unknown asset");
        let price = fetch_price(env, &state.price_oracle, &kind);
        xp.push_back(normalize(env, balance, data.multiplier, &price));
    }
    xp
}
