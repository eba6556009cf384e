use crate::clients::{asset_transfer, to_signed, ShareLedgerClient};
use crate::reconcile::{refresh_funds, require_entry};
use crate::storage::{get_asset, get_asset_list, get_config, get_state, set_asset, set_state};
use pool_math::mul_div;
use pool_types::AssetKind;
use soroban_sdk::{Address, Env, Map};

/// Add liquidity in proportion to the pool's current composition.
///
/// The caller names one source asset and an exact amount of it; every
/// other tracked asset is drawn in proportion, capped by the caller's
/// declared maximum for that asset. Returns the shares minted.
pub fn deposit(
    env: &Env,
    caller: Address,
    src_asset: AssetKind,
    src_amount: u128,
    max_other_amounts: Map<AssetKind, u128>,
    min_shares: u128,
    deadline: u64,
) -> u128 {
    caller.require_auth();
    require_entry(env, deadline);
    refresh_funds(env);

    if src_amount == 0 {
        panic!("Amount must be non-zero");
    }

    let list = get_asset_list(env);
    if !list.contains(&src_asset) {
        panic!("Unknown asset");
    }
    // Exactly one bound per tracked asset: the source amount plus a cap
    // for each of the others, nothing extra.
    if max_other_amounts.len() != list.len() - 1 {
        panic!("Unknown asset");
    }
    for kind in list.iter() {
        if kind != src_asset && max_other_amounts.get(kind).is_none() {
            panic!("Missing deposit cap");
        }
    }

    let state = get_state(env);
    let shares = if state.share_total == 0 {
        bootstrap(env, &caller, &src_asset, src_amount, &max_other_amounts)
    } else {
        proportional_deposit(env, &caller, &src_asset, src_amount, &max_other_amounts)
    };

    if shares < min_shares || shares == 0 {
        panic!("Too few shares minted");
    }

    let mut state = get_state(env);
    state.share_total = match state.share_total.checked_add(shares) {
        Some(v) => v,
        None => panic!("Amount overflow"),
    };
    set_state(env, &state);

    let config = get_config(env);
    ShareLedgerClient::new(env, &config.share_ledger).mint_or_burn(&to_signed(shares), &caller);

    shares
}

/// First-ever deposit: there is no composition to be proportional to, so
/// the caller's declared amounts are taken exactly and shares are minted
/// at the source asset's common-precision scale.
fn bootstrap(
    env: &Env,
    caller: &Address,
    src_asset: &AssetKind,
    src_amount: u128,
    max_other_amounts: &Map<AssetKind, u128>,
) -> u128 {
    let contract = env.current_contract_address();
    for kind in get_asset_list(env).iter() {
        let amount = if kind == *src_asset {
            src_amount
        } else {
            max_other_amounts.get(kind.clone()).unwrap()
        };
        if amount == 0 {
            panic!("Amount must be non-zero");
        }
        let mut data = get_asset(env, &kind);
        data.funds += amount;
        set_asset(env, &kind, &data);
        asset_transfer(env, &kind, caller, &contract, amount);
    }

    let src = get_asset(env, src_asset);
    match src_amount.checked_mul(src.multiplier) {
        Some(v) => v,
        None => panic!("Amount overflow"),
    }
}

fn proportional_deposit(
    env: &Env,
    caller: &Address,
    src_asset: &AssetKind,
    src_amount: u128,
    max_other_amounts: &Map<AssetKind, u128>,
) -> u128 {
    let src_funds = get_asset(env, src_asset).funds;
    if src_funds == 0 {
        panic!("Insufficient liquidity");
    }

    let contract = env.current_contract_address();
    for kind in get_asset_list(env).iter() {
        let data = get_asset(env, &kind);
        let required = if kind == *src_asset {
            src_amount
        } else {
            let required = mul_div(env, src_amount, data.funds, src_funds);
            if required > max_other_amounts.get(kind.clone()).unwrap() {
                panic!("Deposit cap exceeded");
            }
            required
        };
        let mut data = data;
        data.funds = match data.funds.checked_add(required) {
            Some(v) => v,
            None => panic!("Amount overflow"),
        };
        set_asset(env, &kind, &data);
        asset_transfer(env, &kind, caller, &contract, required);
    }

    let state = get_state(env);
    mul_div(env, src_amount, state.share_total, src_funds)
}

/// Burn shares and withdraw every tracked asset in proportion. Returns the
/// withdrawn amount per asset.
pub fn withdraw(
    env: &Env,
    caller: Address,
    min_amounts: Map<AssetKind, u128>,
    shares_burned: u128,
    deadline: u64,
) -> Map<AssetKind, u128> {
    caller.require_auth();
    require_entry(env, deadline);
    refresh_funds(env);

    if shares_burned == 0 {
        panic!("Amount must be non-zero");
    }

    let list = get_asset_list(env);
    if min_amounts.len() != list.len() {
        panic!("Unknown asset");
    }
    for kind in list.iter() {
        if min_amounts.get(kind).is_none() {
            panic!("Missing withdrawal minimum");
        }
    }

    let mut state = get_state(env);
    if shares_burned > state.share_total {
        panic!("Insufficient shares");
    }

    let contract = env.current_contract_address();
    let mut withdrawn: Map<AssetKind, u128> = Map::new(env);
    for kind in list.iter() {
        let mut data = get_asset(env, &kind);
        let amount = mul_div(env, shares_burned, data.funds, state.share_total);
        if amount < min_amounts.get(kind.clone()).unwrap() {
            panic!("Withdrawal below minimum");
        }
        data.funds = match data.funds.checked_sub(amount) {
            Some(v) => v,
            None => panic!("Insufficient liquidity"),
        };
        set_asset(env, &kind, &data);
        asset_transfer(env, &kind, &contract, &caller, amount);
        withdrawn.set(kind, amount);
    }

    state.share_total -= shares_burned;
    set_state(env, &state);

    let config = get_config(env);
    let burned = to_signed(shares_burned);
    ShareLedgerClient::new(env, &config.share_ledger).mint_or_burn(&(-burned), &caller);

    withdrawn
}
