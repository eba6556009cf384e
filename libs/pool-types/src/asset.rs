use soroban_sdk::{contracttype, Address};

/// Identity of a trackable value unit.
///
/// Usable as a storage-key payload and as a map key: `contracttype` values
/// order by (variant tag, payload), which gives the closed union a total,
/// deterministic ordering without dynamic dispatch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// The chain's intrinsic value unit, resolved through the pool
    /// config's `native_asset` token address.
    Native,
    /// Single-token-per-contract standard (SEP-41 interface).
    TokenA(Address),
    /// Multi-token-per-contract standard: contract address plus sub-id.
    TokenB(Address, u128),
}

/// Per-asset ledger entry: the pool's believed balance and the rescaling
/// factor that brings the asset to the common precision used by the
/// invariant math.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenData {
    pub funds: u128,
    pub multiplier: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Env, Map};

    #[test]
    fn test_asset_kind_as_map_key() {
        let env = Env::default();
        let contract = Address::generate(&env);

        let mut map: Map<AssetKind, u128> = Map::new(&env);
        map.set(AssetKind::Native, 1);
        map.set(AssetKind::TokenA(contract.clone()), 2);
        map.set(AssetKind::TokenB(contract.clone(), 7), 3);
        map.set(AssetKind::TokenB(contract.clone(), 8), 4);

        assert_eq!(map.len(), 4);
        assert_eq!(map.get(AssetKind::Native), Some(1));
        assert_eq!(map.get(AssetKind::TokenA(contract.clone())), Some(2));
        assert_eq!(map.get(AssetKind::TokenB(contract.clone(), 7)), Some(3));
        assert_eq!(map.get(AssetKind::TokenB(contract, 8)), Some(4));
    }

    #[test]
    fn test_sub_id_distinguishes_token_b() {
        let env = Env::default();
        let contract = Address::generate(&env);

        let a = AssetKind::TokenB(contract.clone(), 1);
        let b = AssetKind::TokenB(contract, 2);
        assert_ne!(a, b);
    }
}
