use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;
use common_structs::DepositorPosition;

use crate::{cache::Cache, helpers, storage, timelock};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionDepositModule:
    storage::Storage
    + account::PositionAccountModule
    + timelock::TimelockModule
    + helpers::lending::LendingModule
    + helpers::math::YieldMathModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Supplies `amount` of the staking asset and credits the depositor.
    ///
    /// # Arguments
    /// - `depositor`: Address owning the position.
    /// - `amount`: Principal, in staking asset units, already held by the contract.
    /// - `lock`: Whether the depositor opts into the timelock.
    ///
    /// # Returns
    /// - Updated position.
    fn process_deposit(
        &self,
        depositor: &ManagedAddress,
        amount: &BigUint,
        lock: bool,
    ) -> DepositorPosition<Self::Api> {
        let mut pool_before = self.receipt_balance();
        if pool_before > 0 && self.pool_aggregate().get().total_shares == 0u64 {
            self.sweep_orphaned_receipt(&pool_before);
            pool_before = BigUint::zero();
        }

        let received = self.supply_to_lending(amount);

        let mut cache = Cache::new(self);

        let shares = self.shares_to_mint(&received, &cache.aggregate.total_shares, &pool_before);
        require!(shares > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let mut position = self.get_position(depositor, cache.timestamp);
        position.principal += amount;
        position.share_balance += &shares;
        position.last_action_timestamp = cache.timestamp;
        if lock {
            self.apply_deposit_lock(&mut position, cache.timestamp);
        }

        cache.aggregate.total_principal += amount;
        cache.aggregate.total_shares += &shares;

        self.store_position(depositor, &position);
        drop(cache);

        self.stake_event(depositor, amount, &shares, &position);

        position
    }

    /// Receipt credited while no shares exist belongs to nobody; it is
    /// redeemed into the bonus reserve before the next first deposit.
    fn sweep_orphaned_receipt(&self, orphaned: &BigUint) {
        let recovered = self.withdraw_from_lending(orphaned);
        let total = self.bonus_reserve().update(|reserve| {
            *reserve += &recovered;
            reserve.clone()
        });

        self.bonus_reserve_funded_event(&recovered, &total);
    }
}
