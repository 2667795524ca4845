use common_constants::{BPS, BPS_PRECISION, WAD_PRECISION};
use common_structs::{DepositorPosition, LockStatus};

use crate::{helpers, positions::account, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + account::PositionAccountModule
    + helpers::lending::LendingModule
    + helpers::math::YieldMathModule
    + common_math::SharedMathModule
{
    #[view(getPosition)]
    fn position(&self, depositor: ManagedAddress) -> DepositorPosition<Self::Api> {
        self.get_position(&depositor, self.blockchain().get_block_timestamp())
    }

    /// Yield the depositor could claim right now, timelock bonus included.
    #[view(getUnclaimedYield)]
    fn get_unclaimed_yield(&self, depositor: ManagedAddress) -> BigUint {
        let timestamp = self.blockchain().get_block_timestamp();
        let position = self.get_position(&depositor, timestamp);
        let total_shares = self.pool_aggregate().get().total_shares;

        let base_yield = self.base_yield(&position, &self.receipt_balance(), &total_shares);
        let bonus = self.timelock_bonus(&base_yield, &position, timestamp, self.bonus_rate_bps().get());

        base_yield + bonus
    }

    /// Receipt units currently backing the depositor's shares.
    #[view(getPositionValue)]
    fn get_position_value(&self, depositor: ManagedAddress) -> BigUint {
        let position = self.get_position(&depositor, self.blockchain().get_block_timestamp());
        let total_shares = self.pool_aggregate().get().total_shares;

        self.share_value(&position.share_balance, &self.receipt_balance(), &total_shares)
    }

    #[view(getPooledReceiptBalance)]
    fn get_pooled_receipt_balance(&self) -> BigUint {
        self.receipt_balance()
    }

    /// Receipt units per share, WAD precision. One while the pool is empty.
    #[view(getSharePrice)]
    fn get_share_price(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total_shares = self.pool_aggregate().get().total_shares;
        if total_shares == 0 {
            return self.wad();
        }

        self.div_half_up(
            &self.to_decimal_wad(self.receipt_balance()),
            &self.to_decimal_wad(total_shares),
            WAD_PRECISION,
        )
    }

    /// Current lending supply rate expressed in basis points per year.
    #[view(getEstimatedApyBps)]
    fn get_estimated_apy_bps(&self) -> BigUint {
        self.estimated_apy().into_raw_units().clone()
    }

    /// Supply rate once a lock expired, bonus included.
    #[view(getEstimatedLockedApyBps)]
    fn get_estimated_locked_apy_bps(&self) -> BigUint {
        let multiplier = self.to_decimal_bps(BigUint::from(BPS + self.bonus_rate_bps().get()));

        self.mul_half_up(&self.estimated_apy(), &multiplier, BPS_PRECISION)
            .into_raw_units()
            .clone()
    }

    #[view(getTimelockState)]
    fn get_timelock_state(&self, depositor: ManagedAddress) -> LockStatus {
        let timestamp = self.blockchain().get_block_timestamp();
        self.get_position(&depositor, timestamp).timelock.status(timestamp)
    }

    /// End of the depositor's lock, 0 when never locked.
    #[view(getLockEnd)]
    fn get_lock_end(&self, depositor: ManagedAddress) -> u64 {
        self.get_position(&depositor, 0).timelock.lock_end()
    }

    fn estimated_apy(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate = self.to_decimal_ray(self.lending_liquidity_rate());
        self.rescale_half_up(&rate, BPS_PRECISION)
    }
}
