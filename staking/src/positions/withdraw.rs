use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_PRINCIPAL};
use common_structs::Timelock;

use crate::{cache::Cache, helpers, storage, timelock};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + account::PositionAccountModule
    + timelock::TimelockModule
    + helpers::lending::LendingModule
    + helpers::math::YieldMathModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Redeems a slice of the depositor's principal together with the yield
    /// that slice accrued.
    ///
    /// # Arguments
    /// - `depositor`: Address owning the position.
    /// - `amount`: Principal to withdraw.
    ///
    /// # Returns
    /// - Staking asset sent to the depositor.
    fn process_withdrawal(&self, depositor: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(*amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let mut cache = Cache::new(self);
        let mut position = self.get_position(depositor, cache.timestamp);

        self.require_unlocked(&position, cache.timestamp);
        require!(position.principal >= *amount, ERROR_INSUFFICIENT_PRINCIPAL);

        let shares_to_retire = if position.principal == *amount {
            position.share_balance.clone()
        } else {
            self.mul_div_floor(&position.share_balance, amount, &position.principal)
        };
        require!(shares_to_retire > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let receipt_out = self.share_value(
            &shares_to_retire,
            &cache.pool_total,
            &cache.aggregate.total_shares,
        );

        position.principal -= amount;
        position.share_balance -= &shares_to_retire;
        position.last_action_timestamp = cache.timestamp;
        if position.principal == 0 {
            position.timelock = Timelock::NoLock;
        }

        cache.aggregate.total_principal -= amount;
        cache.aggregate.total_shares -= &shares_to_retire;

        self.store_position(depositor, &position);
        drop(cache);

        self.withdraw_from_lending(&receipt_out);

        self.withdraw_event(depositor, amount, &receipt_out, &position);

        self.tx()
            .to(depositor)
            .single_esdt(&self.staking_asset().get(), 0, &receipt_out)
            .transfer_if_not_empty();

        receipt_out
    }
}
