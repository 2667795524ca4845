#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod config;
pub mod helpers;
pub mod positions;
pub mod storage;
pub mod timelock;
pub mod views;

use common_checks::ReentrancyLock;
use common_constants::{DEFAULT_FEE_TIER, DEFAULT_LOCK_DURATION, DEFAULT_SLIPPAGE_BPS};
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait YieldStaking:
    positions::account::PositionAccountModule
    + positions::deposit::PositionDepositModule
    + positions::withdraw::PositionWithdrawModule
    + positions::claim::PositionClaimModule
    + helpers::lending::LendingModule
    + helpers::swaps::SwapsModule
    + helpers::math::YieldMathModule
    + timelock::TimelockModule
    + config::ConfigModule
    + views::ViewsModule
    + storage::Storage
    + common_events::EventsModule
    + common_checks::ChecksModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the staking pool.
    ///
    /// # Arguments
    /// - `staking_asset`: Token depositors stake, supplied to the lending adapter.
    /// - `receipt_asset`: Interest-bearing token the adapter mints for it.
    /// - `lending_adapter`: Lending protocol address.
    /// - `swap_router`: DEX router used by the `SwapRouter` conversion route.
    /// - `reserve_pool`: Fixed-rate reserve pool used by the `ReservePool` route.
    ///   This contract must be one of its authorized callers.
    #[init]
    fn init(
        &self,
        staking_asset: TokenIdentifier,
        receipt_asset: TokenIdentifier,
        lending_adapter: ManagedAddress,
        swap_router: ManagedAddress,
        reserve_pool: ManagedAddress,
    ) {
        require!(staking_asset.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);
        require!(receipt_asset.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);

        self.staking_asset().set(&staking_asset);
        self.receipt_asset().set(&receipt_asset);
        self.lending_adapter().set(&lending_adapter);
        self.swap_router().set(&swap_router);
        self.reserve_pool().set(&reserve_pool);

        self.conversion_route().set(ConversionRoute::ReservePool);
        self.slippage_tolerance_bps().set(DEFAULT_SLIPPAGE_BPS);
        self.swap_fee_tier().set(DEFAULT_FEE_TIER);
        self.timelock_enabled().set(true);
        self.lock_duration().set(DEFAULT_LOCK_DURATION);
        self.bonus_rate_bps().set(0);
        self.bonus_reserve().set(BigUint::zero());
        self.pool_aggregate().set(PoolAggregate::default());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stakes the attached staking asset.
    ///
    /// # Arguments
    /// - `lock`: Opts the position into the timelock when locking is enabled.
    ///
    /// # Returns
    /// - Updated position of the caller.
    #[payable]
    #[endpoint(stake)]
    fn stake(&self, lock: bool) -> DepositorPosition<Self::Api> {
        self.require_not_paused();
        let _lock = ReentrancyLock::acquire(self);

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            asset == EgldOrEsdtTokenIdentifier::esdt(self.staking_asset().get()),
            ERROR_INVALID_ASSET
        );
        self.require_amount_greater_than_zero(&amount);

        let caller = self.blockchain().get_caller();
        self.process_deposit(&caller, &amount, lock)
    }

    /// Stakes attached EGLD after converting it to the staking asset through
    /// the configured route. The principal recorded is the converted amount.
    #[payable("EGLD")]
    #[endpoint(stakeEgld)]
    fn stake_egld(&self, lock: bool) -> DepositorPosition<Self::Api> {
        self.require_not_paused();
        let _lock = ReentrancyLock::acquire(self);

        let egld_amount = self.call_value().egld().clone_value();
        self.require_amount_greater_than_zero(&egld_amount);

        let principal = self.convert_egld(&egld_amount);
        self.require_amount_greater_than_zero(&principal);

        let caller = self.blockchain().get_caller();
        self.process_deposit(&caller, &principal, lock)
    }

    /// Withdraws `amount` of principal plus the yield it accrued.
    /// Works while paused.
    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) -> BigUint {
        let _lock = ReentrancyLock::acquire(self);

        let caller = self.blockchain().get_caller();
        self.process_withdrawal(&caller, &amount)
    }

    /// Claims the caller's unclaimed yield. Works while paused and while locked.
    #[endpoint(claim)]
    fn claim(&self) -> BigUint {
        let _lock = ReentrancyLock::acquire(self);

        let caller = self.blockchain().get_caller();
        self.process_claim(&caller)
    }
}
