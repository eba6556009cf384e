use crate::clients::asset_balance;
use crate::storage::{get_asset, get_asset_list, get_state, set_asset};
use pool_types::AssetKind;
use soroban_sdk::{Env, Map};

/// Entry guard shared by every mutating operation: the pool must be
/// enabled and the caller-supplied deadline must not have passed.
pub fn require_entry(env: &Env, deadline: u64) {
    let state = get_state(env);
    if !state.enabled {
        panic!("Pool disabled");
    }
    if deadline < env.ledger().timestamp() {
        panic!("Deadline expired");
    }
}

/// Ground-truth balances for every tracked asset, queried from the owning
/// ledger contracts. Read-only; used directly by the view functions.
pub fn current_balances(env: &Env) -> Map<AssetKind, u128> {
    let mut balances = Map::new(env);
    for kind in get_asset_list(env).iter() {
        let reported = asset_balance(env, &kind);
        if reported < 0 {
            panic!("Negative balance report");
        }
        balances.set(kind, reported as u128);
    }
    balances
}

/// Reconcile the pool ledger with ground truth before any
/// balance-dependent calculation runs. Every `funds` entry is overwritten
/// with the owning contract's report; a trap anywhere aborts the whole
/// transaction, so the accounting engine can never observe a partially
/// refreshed ledger.
pub fn refresh_funds(env: &Env) -> Map<AssetKind, u128> {
    let balances = current_balances(env);
    for (kind, funds) in balances.iter() {
        let mut data = get_asset(env, &kind);
        data.funds = funds;
        set_asset(env, &kind, &data);
    }
    balances
}
