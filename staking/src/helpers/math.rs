use common_structs::DepositorPosition;

multiversx_sc::imports!();

/// Share accounting against the pooled receipt balance.
///
/// A position is worth `shares * pool_total / total_shares` receipt units;
/// whatever exceeds its principal is unclaimed base yield.
#[multiversx_sc::module]
pub trait YieldMathModule: common_math::SharedMathModule {
    /// Receipt units backing `shares`, rounded down.
    ///
    /// The last shares of the pool own the whole balance, dust included.
    fn share_value(&self, shares: &BigUint, pool_total: &BigUint, total_shares: &BigUint) -> BigUint {
        if *total_shares == 0u64 {
            return BigUint::zero();
        }
        if shares == total_shares {
            return pool_total.clone();
        }

        self.mul_div_floor(shares, pool_total, total_shares)
    }

    /// Shares minted for `received` receipt units at the pre-deposit share price.
    fn shares_to_mint(
        &self,
        received: &BigUint,
        total_shares: &BigUint,
        pool_before: &BigUint,
    ) -> BigUint {
        if *total_shares == 0u64 || *pool_before == 0u64 {
            return received.clone();
        }

        self.mul_div_floor(received, total_shares, pool_before)
    }

    /// Shares to retire so that at least `value` receipt units are released,
    /// capped at what the position holds.
    fn shares_for_value(
        &self,
        value: &BigUint,
        available_shares: &BigUint,
        pool_total: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        if *pool_total == 0u64 {
            return BigUint::zero();
        }

        let shares = self.mul_div_ceil(value, total_shares, pool_total);
        if &shares > available_shares {
            available_shares.clone()
        } else {
            shares
        }
    }

    fn base_yield(
        &self,
        position: &DepositorPosition<Self::Api>,
        pool_total: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        if *total_shares == 0u64 || *pool_total == 0u64 {
            return BigUint::zero();
        }

        let value = self.share_value(&position.share_balance, pool_total, total_shares);
        self.saturating_sub(&value, &position.principal)
    }

    /// Extra yield for a position whose lock ran its full course.
    fn timelock_bonus(
        &self,
        base_yield: &BigUint,
        position: &DepositorPosition<Self::Api>,
        timestamp: u64,
        bonus_rate_bps: usize,
    ) -> BigUint {
        if position.timelock.is_expired(timestamp) {
            self.apply_bps(base_yield, bonus_rate_bps)
        } else {
            BigUint::zero()
        }
    }
}
