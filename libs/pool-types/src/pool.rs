use crate::Ratio;
use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Token contract backing the `AssetKind::Native` entry
    pub native_asset: Address,
    /// Contract holding liquidity-share balances (`mint_or_burn`)
    pub share_ledger: Address,
}

/// Mutable pool state - everything the admin surface and the accounting
/// engine may change after deployment
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Total liquidity shares ever minted minus burned; zero iff the pool
    /// has never held liquidity
    pub share_total: u128,
    /// Fee taken from the gross output of every swap (num <= denom)
    pub swap_fee: Ratio,
    /// Share of each swap fee diverted to the rewards receiver
    pub rewards_ratio: Ratio,
    /// Receiver of the fee reward cut
    pub rewards_receiver: Address,
    /// Receiver of chain-staking rewards accrued by the pool's holdings
    pub staking_rewards_receiver: Address,
    /// Price service consulted during invariant math
    pub price_oracle: Address,
    /// StableSwap amplification coefficient (> 0)
    pub amplitude: u128,
    /// Master switch; every mutating operation checks it at entry
    pub enabled: bool,
}

/// Parameters fixed by the deployer at initialization.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolInit {
    pub native_asset: Address,
    pub share_ledger: Address,
    pub price_oracle: Address,
    pub rewards_receiver: Address,
    pub staking_rewards_receiver: Address,
    pub swap_fee: Ratio,
    pub rewards_ratio: Ratio,
    pub amplitude: u128,
}

/// Two-phase administrator lifecycle: a proposed admin must actively
/// confirm before gaining any authority.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AdminStatus {
    Proposed,
    Confirmed,
}

/// Breakdown of a swap's output, before any state is touched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapBreakdown {
    /// Solver-derived output in destination-asset units, pre-fee
    pub gross_bought: u128,
    /// swap_fee applied to the gross output
    pub fee: u128,
    /// Portion of the fee diverted to the rewards receiver
    pub reward_cut: u128,
    /// What the receiver actually gets: gross_bought - fee
    pub net_bought: u128,
}
