use crate::storage::get_config;
use pool_types::{AssetKind, Ratio};
use soroban_sdk::{contractclient, token, Address, Env};

/// External price service: price of an asset as a ratio over a common
/// unit. Consulted synchronously during invariant math; if the call
/// traps, the whole operation aborts with it.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn price(env: Env, asset: AssetKind) -> Ratio;
}

/// Multi-token-per-contract asset standard (the `TokenB` kind).
#[contractclient(name = "MultiTokenClient")]
pub trait MultiToken {
    fn transfer(env: Env, from: Address, to: Address, id: u128, amount: i128);
    fn balance(env: Env, owner: Address, id: u128) -> i128;
}

/// Liquidity-share ledger: positive quantity mints, negative burns.
#[contractclient(name = "ShareLedgerClient")]
pub trait ShareLedger {
    fn mint_or_burn(env: Env, quantity: i128, target: Address);
}

/// Query the oracle, rejecting unusable ratios before they reach the
/// solver.
pub fn fetch_price(env: &Env, oracle: &Address, kind: &AssetKind) -> Ratio {
    let price = PriceOracleClient::new(env, oracle).price(kind);
    if !price.is_price() {
        panic!("Invalid ratio");
    }
    price
}

/// The pool's own balance of a tracked asset, as reported by the owning
/// ledger contract.
pub fn asset_balance(env: &Env, kind: &AssetKind) -> i128 {
    let owner = env.current_contract_address();
    match kind {
        AssetKind::Native => {
            let config = get_config(env);
            token::Client::new(env, &config.native_asset).balance(&owner)
        }
        AssetKind::TokenA(contract) => token::Client::new(env, contract).balance(&owner),
        AssetKind::TokenB(contract, id) => {
            MultiTokenClient::new(env, contract).balance(&owner, id)
        }
    }
}

/// Move `amount` units of a tracked asset between two parties.
pub fn asset_transfer(env: &Env, kind: &AssetKind, from: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    let amount = to_signed(amount);
    match kind {
        AssetKind::Native => {
            let config = get_config(env);
            token::Client::new(env, &config.native_asset).transfer(from, to, &amount);
        }
        AssetKind::TokenA(contract) => {
            token::Client::new(env, contract).transfer(from, to, &amount);
        }
        AssetKind::TokenB(contract, id) => {
            MultiTokenClient::new(env, contract).transfer(from, to, id, &amount);
        }
    }
}

pub fn to_signed(amount: u128) -> i128 {
    if amount > i128::MAX as u128 {
        panic!("Amount overflow");
    }
    amount as i128
}
