#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Direction of a reserve-only conversion.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConversionDirection {
    /// EGLD counter increases, token counter decreases.
    BaseToToken,
    /// Token counter increases, EGLD counter decreases.
    TokenToBase,
}

/// Snapshot of the two reserve counters of the exchange pool.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct ReserveState<M: ManagedTypeApi> {
    pub eth_reserve: BigUint<M>,
    pub token_reserve: BigUint<M>,
}

/// Lock attached to a depositor position.
///
/// `Expired` is never stored. A `Locked` position whose `until` is in the past
/// is reported as expired by [`Timelock::status`].
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum Timelock {
    NoLock,
    Locked { until: u64 },
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LockStatus {
    NoLock,
    Locked,
    Expired,
}

impl Timelock {
    pub fn status(&self, now: u64) -> LockStatus {
        match self {
            Timelock::NoLock => LockStatus::NoLock,
            Timelock::Locked { until } if now >= *until => LockStatus::Expired,
            Timelock::Locked { .. } => LockStatus::Locked,
        }
    }

    /// True while withdrawals of principal must be rejected.
    pub fn is_active(&self, now: u64) -> bool {
        self.status(now) == LockStatus::Locked
    }

    /// True once a lock has run its full course and earns the bonus.
    pub fn is_expired(&self, now: u64) -> bool {
        self.status(now) == LockStatus::Expired
    }

    pub fn lock_end(&self) -> u64 {
        match self {
            Timelock::NoLock => 0,
            Timelock::Locked { until } => *until,
        }
    }

    /// Extends the lock to `until`, never shortening an existing one.
    pub fn extend_to(&mut self, until: u64) {
        let current = self.lock_end();
        *self = Timelock::Locked {
            until: if current > until { current } else { until },
        };
    }
}

/// Per-depositor record of the staking pool.
///
/// `share_balance` is the depositor's claim on the pooled receipt balance,
/// `principal` is what they put in, in staking asset units.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct DepositorPosition<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub share_balance: BigUint<M>,
    pub last_action_timestamp: u64,
    pub claimed_yield: BigUint<M>,
    pub timelock: Timelock,
}

impl<M: ManagedTypeApi> DepositorPosition<M> {
    pub fn new(timestamp: u64) -> Self {
        DepositorPosition {
            principal: BigUint::zero(),
            share_balance: BigUint::zero(),
            last_action_timestamp: timestamp,
            claimed_yield: BigUint::zero(),
            timelock: Timelock::NoLock,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PoolAggregate<M: ManagedTypeApi> {
    pub total_principal: BigUint<M>,
    pub total_shares: BigUint<M>,
    pub total_yield_paid: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for PoolAggregate<M> {
    fn default() -> Self {
        PoolAggregate {
            total_principal: BigUint::zero(),
            total_shares: BigUint::zero(),
            total_yield_paid: BigUint::zero(),
        }
    }
}

/// How EGLD principal is turned into the staking asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConversionRoute {
    ReservePool,
    SwapRouter,
}

/// Reserve data exposed by the lending protocol.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct ReserveData<M: ManagedTypeApi> {
    pub asset: TokenIdentifier<M>,
    pub receipt_asset: TokenIdentifier<M>,
    /// Annual supply rate, RAY based.
    pub liquidity_rate: BigUint<M>,
    pub last_update_timestamp: u64,
}

/// Exact input swap request, the input being the call payment.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct ExactInputParams<M: ManagedTypeApi> {
    pub token_out: EgldOrEsdtTokenIdentifier<M>,
    pub fee_tier: u32,
    pub amount_out_minimum: BigUint<M>,
    pub deadline: u64,
}
