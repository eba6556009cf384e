#![no_std]

mod admin;
mod clients;
mod liquidity;
mod reconcile;
mod storage;
mod swap;

use pool_types::{
    AdminStatus, AssetKind, PoolConfig, PoolInit, PoolState, Ratio, TokenData, SHARE_VALUE_SCALE,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};
use storage::DataKey;

#[contract]
pub struct StablePool;

#[contractimpl]
impl StablePool {
    /// Initialize a new pool.
    ///
    /// The tracked asset set is fixed here and never grows or shrinks;
    /// `asset_multipliers` maps each asset to its common-precision
    /// rescaling factor. The deploying admin is confirmed immediately;
    /// further admins go through propose/accept.
    pub fn initialize(
        env: Env,
        admin: Address,
        params: PoolInit,
        asset_multipliers: Map<AssetKind, u128>,
    ) {
        if env.storage().instance().has(&DataKey::Config) {
            panic!("Already initialized");
        }
        admin.require_auth();
        if !params.swap_fee.is_fraction() || !params.rewards_ratio.is_fraction() {
            panic!("Invalid ratio");
        }
        if params.amplitude == 0 {
            panic!("Amplitude must be non-zero");
        }
        if asset_multipliers.len() < 2 {
            panic!("Too few assets");
        }

        for (kind, multiplier) in asset_multipliers.iter() {
            if multiplier == 0 {
                panic!("Invalid multiplier");
            }
            storage::set_asset(
                &env,
                &kind,
                &TokenData {
                    funds: 0,
                    multiplier,
                },
            );
        }
        storage::set_asset_list(&env, &asset_multipliers.keys());

        storage::set_config(
            &env,
            &PoolConfig {
                native_asset: params.native_asset,
                share_ledger: params.share_ledger,
            },
        );
        storage::set_state(
            &env,
            &PoolState {
                share_total: 0,
                swap_fee: params.swap_fee,
                rewards_ratio: params.rewards_ratio,
                rewards_receiver: params.rewards_receiver,
                staking_rewards_receiver: params.staking_rewards_receiver,
                price_oracle: params.price_oracle,
                amplitude: params.amplitude,
                enabled: true,
            },
        );

        let mut admins = Map::new(&env);
        admins.set(admin, AdminStatus::Confirmed);
        storage::set_admins(&env, &admins);
    }

    /// Add liquidity proportionally to the current composition.
    ///
    /// # Returns
    /// Shares minted to the caller.
    pub fn deposit(
        env: Env,
        caller: Address,
        src_asset: AssetKind,
        src_amount: u128,
        max_other_amounts: Map<AssetKind, u128>,
        min_shares: u128,
        deadline: u64,
    ) -> u128 {
        liquidity::deposit(
            &env,
            caller,
            src_asset,
            src_amount,
            max_other_amounts,
            min_shares,
            deadline,
        )
    }

    /// Burn shares and withdraw every tracked asset proportionally.
    ///
    /// # Returns
    /// Withdrawn amount per asset.
    pub fn withdraw(
        env: Env,
        caller: Address,
        min_amounts: Map<AssetKind, u128>,
        shares_burned: u128,
        deadline: u64,
    ) -> Map<AssetKind, u128> {
        liquidity::withdraw(&env, caller, min_amounts, shares_burned, deadline)
    }

    /// Sell `amount_sold` of `src_asset` for `dst_asset`.
    ///
    /// # Returns
    /// Net amount paid to `receiver` after the swap fee.
    pub fn swap(
        env: Env,
        caller: Address,
        src_asset: AssetKind,
        dst_asset: AssetKind,
        amount_sold: u128,
        min_bought: u128,
        receiver: Address,
        deadline: u64,
    ) -> u128 {
        swap::execute_swap(
            &env,
            caller,
            src_asset,
            dst_asset,
            amount_sold,
            min_bought,
            receiver,
            deadline,
        )
    }

    // === Admin Surface ===

    pub fn propose_admin(env: Env, admin: Address, candidate: Address) {
        admin::propose_admin(&env, admin, candidate)
    }

    pub fn accept_admin(env: Env, candidate: Address) {
        admin::accept_admin(&env, candidate)
    }

    pub fn remove_admin(env: Env, admin: Address, target: Address) {
        admin::remove_admin(&env, admin, target)
    }

    pub fn set_swap_fee(env: Env, admin: Address, fee: Ratio) {
        admin::set_swap_fee(&env, admin, fee)
    }

    pub fn set_amplitude(env: Env, admin: Address, amplitude: u128) {
        admin::set_amplitude(&env, admin, amplitude)
    }

    pub fn set_price_oracle(env: Env, admin: Address, oracle: Address) {
        admin::set_price_oracle(&env, admin, oracle)
    }

    pub fn set_enabled(env: Env, admin: Address, enabled: bool) {
        admin::set_enabled(&env, admin, enabled)
    }

    // === View Functions ===

    /// Current invariant D over live ledger balances.
    pub fn invariant_d(env: Env) -> u128 {
        let funds = reconcile::current_balances(&env);
        let xp = swap::normalized_funds(&env, &funds);
        let state = storage::get_state(&env);
        match pool_math::solve_d(&env, &xp, state.amplitude) {
            Ok(d) => d,
            Err(_) => panic!("Invariant did not converge"),
        }
    }

    /// Expected net output of a hypothetical swap, against live balances.
    pub fn quote_swap(env: Env, src_asset: AssetKind, dst_asset: AssetKind, amount_sold: u128) -> u128 {
        swap::quote(&env, src_asset, dst_asset, amount_sold)
    }

    /// The pool's believed funds for one asset, in its native unit.
    pub fn asset_funds(env: Env, kind: AssetKind) -> u128 {
        storage::get_asset(&env, &kind).funds
    }

    /// Live funds for one asset, rescaled to the common unit through its
    /// multiplier and current oracle price.
    pub fn asset_funds_value(env: Env, kind: AssetKind) -> u128 {
        let data = storage::get_asset(&env, &kind);
        let reported = clients::asset_balance(&env, &kind);
        if reported < 0 {
            panic!("Negative balance report");
        }
        let state = storage::get_state(&env);
        let price = clients::fetch_price(&env, &state.price_oracle, &kind);
        pool_math::normalize(&env, reported as u128, data.multiplier, &price)
    }

    /// Total liquidity shares outstanding.
    pub fn total_shares(env: Env) -> u128 {
        storage::get_state(&env).share_total
    }

    /// Common-unit value of `SHARE_VALUE_SCALE` shares; zero while the
    /// pool is empty.
    pub fn share_value(env: Env) -> u128 {
        let state = storage::get_state(&env);
        if state.share_total == 0 {
            return 0;
        }
        let funds = reconcile::current_balances(&env);
        let mut total: u128 = 0;
        for value in swap::normalized_funds(&env, &funds).iter() {
            total = match total.checked_add(value) {
                Some(v) => v,
                None => panic!("Amount overflow"),
            };
        }
        pool_math::mul_div(&env, total, SHARE_VALUE_SCALE, state.share_total)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> PoolConfig {
        storage::get_config(&env)
    }

    /// Get current pool state
    pub fn get_state(env: Env) -> PoolState {
        storage::get_state(&env)
    }

    /// The fixed set of tracked assets.
    pub fn assets(env: Env) -> Vec<AssetKind> {
        storage::get_asset_list(&env)
    }

    /// Administrator status for an address, if any.
    pub fn admin_status(env: Env, who: Address) -> Option<AdminStatus> {
        storage::get_admins(&env).get(who)
    }

    /// Get current amplitude
    pub fn amplitude(env: Env) -> u128 {
        storage::get_state(&env).amplitude
    }

    /// Get enable flag
    pub fn enabled(env: Env) -> bool {
        storage::get_state(&env).enabled
    }
}
