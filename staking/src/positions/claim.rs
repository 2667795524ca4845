use common_errors::{ERROR_INSUFFICIENT_BONUS_RESERVE, ERROR_NOTHING_TO_CLAIM};

use crate::{cache::Cache, helpers, storage};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionClaimModule:
    storage::Storage
    + account::PositionAccountModule
    + helpers::lending::LendingModule
    + helpers::math::YieldMathModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Pays out the unclaimed yield of a position, leaving its principal in place.
    ///
    /// The base part is redeemed from the lending adapter by retiring the
    /// matching shares; the bonus part comes out of the bonus reserve.
    ///
    /// # Returns
    /// - Staking asset sent to the depositor, base plus bonus.
    fn process_claim(&self, depositor: &ManagedAddress) -> BigUint {
        let mut cache = Cache::new(self);
        let mut position = self.get_position(depositor, cache.timestamp);

        let base_yield = self.base_yield(&position, &cache.pool_total, &cache.aggregate.total_shares);
        require!(base_yield > 0, ERROR_NOTHING_TO_CLAIM);

        let bonus = self.timelock_bonus(&base_yield, &position, cache.timestamp, cache.bonus_rate_bps);
        if bonus > 0 {
            let bonus_reserve = self.bonus_reserve().get();
            require!(bonus_reserve >= bonus, ERROR_INSUFFICIENT_BONUS_RESERVE);
            self.bonus_reserve().set(bonus_reserve - &bonus);
        }

        let shares_to_retire = self.shares_for_value(
            &base_yield,
            &position.share_balance,
            &cache.pool_total,
            &cache.aggregate.total_shares,
        );

        let total_yield = &base_yield + &bonus;

        position.share_balance -= &shares_to_retire;
        position.claimed_yield += &total_yield;
        position.last_action_timestamp = cache.timestamp;

        cache.aggregate.total_shares -= &shares_to_retire;
        cache.aggregate.total_yield_paid += &total_yield;

        self.store_position(depositor, &position);
        drop(cache);

        self.withdraw_from_lending(&base_yield);

        self.claim_event(depositor, &base_yield, &bonus, &position);

        self.tx()
            .to(depositor)
            .single_esdt(&self.staking_asset().get(), 0, &total_yield)
            .transfer();

        total_yield
    }
}
