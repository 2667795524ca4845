#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Reserve exchange

    #[event("buy")]
    fn buy_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] base_amount: &BigUint,
        #[indexed] token_amount: &BigUint,
        reserves: &ReserveState<Self::Api>,
    );

    #[event("sell")]
    fn sell_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] seller: &ManagedAddress,
        #[indexed] token_amount: &BigUint,
        #[indexed] base_amount: &BigUint,
        reserves: &ReserveState<Self::Api>,
    );

    #[event("internal_conversion")]
    fn internal_conversion_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] direction: ConversionDirection,
        #[indexed] amount_in: &BigUint,
        #[indexed] amount_out: &BigUint,
        reserves: &ReserveState<Self::Api>,
    );

    #[event("reserve_added")]
    fn reserve_added_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        reserves: &ReserveState<Self::Api>,
    );

    #[event("reserves_seeded")]
    fn reserves_seeded_event(&self, reserves: &ReserveState<Self::Api>);

    #[event("caller_authorization")]
    fn caller_authorization_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] authorized: bool);

    // Staking

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] shares: &BigUint,
        position: &DepositorPosition<Self::Api>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] paid_out: &BigUint,
        position: &DepositorPosition<Self::Api>,
    );

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] base_yield: &BigUint,
        #[indexed] bonus: &BigUint,
        position: &DepositorPosition<Self::Api>,
    );

    #[event("egld_converted")]
    fn egld_converted_event(
        &self,
        #[indexed] route: ConversionRoute,
        #[indexed] egld_amount: &BigUint,
        #[indexed] asset_amount: &BigUint,
    );

    // Configuration

    #[event("slippage_updated")]
    fn slippage_updated_event(&self, #[indexed] slippage_bps: usize);

    #[event("fee_tier_updated")]
    fn fee_tier_updated_event(&self, #[indexed] fee_tier: u32);

    #[event("conversion_route_updated")]
    fn conversion_route_updated_event(&self, #[indexed] route: ConversionRoute);

    #[event("timelock_config_updated")]
    fn timelock_config_updated_event(&self, #[indexed] enabled: bool, #[indexed] duration: u64);

    #[event("bonus_rate_updated")]
    fn bonus_rate_updated_event(&self, #[indexed] bonus_rate_bps: usize);

    #[event("bonus_reserve_funded")]
    fn bonus_reserve_funded_event(&self, #[indexed] amount: &BigUint, #[indexed] total: &BigUint);

    #[event("emergency_withdraw")]
    fn emergency_withdraw_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );
}
