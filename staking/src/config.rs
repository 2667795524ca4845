multiversx_sc::imports!();

use common_constants::{MAX_BONUS_RATE_BPS, MAX_SLIPPAGE_BPS, VALID_FEE_TIERS};
use common_errors::*;
use common_structs::ConversionRoute;

use crate::storage;

/// Owner-only settings of the staking contract.
///
/// None of these touch existing positions directly, but the bonus rate is read
/// live on every claim, so changing it also changes pending bonuses.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Sets the maximum shortfall accepted from a DEX swap against its quote.
    ///
    /// # Errors
    /// - `ERROR_INVALID_SLIPPAGE`: above `MAX_SLIPPAGE_BPS`.
    #[only_owner]
    #[endpoint(setSlippageTolerance)]
    fn set_slippage_tolerance(&self, slippage_bps: usize) {
        require!(slippage_bps <= MAX_SLIPPAGE_BPS, ERROR_INVALID_SLIPPAGE);

        self.slippage_tolerance_bps().set(slippage_bps);
        self.slippage_updated_event(slippage_bps);
    }

    /// # Errors
    /// - `ERROR_INVALID_FEE_TIER`: not one of the router's pool tiers.
    #[only_owner]
    #[endpoint(setSwapFeeTier)]
    fn set_swap_fee_tier(&self, fee_tier: u32) {
        require!(VALID_FEE_TIERS.contains(&fee_tier), ERROR_INVALID_FEE_TIER);

        self.swap_fee_tier().set(fee_tier);
        self.fee_tier_updated_event(fee_tier);
    }

    #[only_owner]
    #[endpoint(setConversionRoute)]
    fn set_conversion_route(&self, route: ConversionRoute) {
        self.conversion_route().set(route);
        self.conversion_route_updated_event(route);
    }

    /// Turns opt-in locking on or off and sets the lock length for new deposits.
    /// Existing locks keep their end time.
    #[only_owner]
    #[endpoint(setTimelockConfig)]
    fn set_timelock_config(&self, enabled: bool, duration: u64) {
        self.timelock_enabled().set(enabled);
        self.lock_duration().set(duration);
        self.timelock_config_updated_event(enabled, duration);
    }

    /// # Errors
    /// - `ERROR_INVALID_BONUS_RATE`: above `MAX_BONUS_RATE_BPS`.
    #[only_owner]
    #[endpoint(setBonusRate)]
    fn set_bonus_rate(&self, bonus_rate_bps: usize) {
        require!(bonus_rate_bps <= MAX_BONUS_RATE_BPS, ERROR_INVALID_BONUS_RATE);

        self.bonus_rate_bps().set(bonus_rate_bps);
        self.bonus_rate_updated_event(bonus_rate_bps);
    }

    /// Adds the paid staking asset to the reserve timelock bonuses are paid from.
    #[only_owner]
    #[payable]
    #[endpoint(fundBonusReserve)]
    fn fund_bonus_reserve(&self) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            asset == EgldOrEsdtTokenIdentifier::esdt(self.staking_asset().get()),
            ERROR_INVALID_ASSET
        );
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let total = self.bonus_reserve().update(|reserve| {
            *reserve += &amount;
            reserve.clone()
        });
        self.bonus_reserve_funded_event(&amount, &total);
    }

    /// Sends any held asset to the owner. Taking the staking asset shrinks the
    /// bonus reserve first.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_BALANCE`: the contract holds less than `amount`.
    #[only_owner]
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let balance = self.blockchain().get_sc_balance(&asset, 0);
        require!(balance >= amount, ERROR_INSUFFICIENT_BALANCE);

        if asset == EgldOrEsdtTokenIdentifier::esdt(self.staking_asset().get()) {
            let reserve = self.bonus_reserve().get();
            self.bonus_reserve().set(self.saturating_sub(&reserve, &amount));
        }

        let owner = self.blockchain().get_owner_address();
        self.tx()
            .to(&owner)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer();

        self.emergency_withdraw_event(&asset, &amount, &owner);
    }
}
