use common_constants::SWAP_DEADLINE_SECONDS;
use common_errors::ERROR_ADAPTER_SHORTFALL;
use common_proxies::{proxy_reserve_pool, proxy_swap_router};
use common_structs::{ConversionRoute, ExactInputParams};

use crate::storage;

use super::lending;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SwapsModule:
    storage::Storage
    + lending::LendingModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Turns `egld_amount` into the staking asset through the configured route.
    ///
    /// # Returns
    /// - `BigUint`: Staking asset received by this contract.
    fn convert_egld(&self, egld_amount: &BigUint) -> BigUint {
        let route = self.conversion_route().get();
        let received = match route {
            ConversionRoute::ReservePool => self.buy_from_reserve_pool(egld_amount),
            ConversionRoute::SwapRouter => self.swap_on_router(egld_amount),
        };

        self.egld_converted_event(route, egld_amount, &received);

        received
    }

    /// Buys at the fixed rate from the shared reserve pool; this contract must
    /// be one of its authorized callers. The executed amount must match a
    /// readonly quote taken just before.
    fn buy_from_reserve_pool(&self, egld_amount: &BigUint) -> BigUint {
        let reserve_pool = self.reserve_pool().get();

        let quoted = self
            .tx()
            .to(&reserve_pool)
            .typed(proxy_reserve_pool::ReservePoolProxy)
            .quote_buy(egld_amount)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let asset_before = self.staking_asset_balance();

        let token_amount = self
            .tx()
            .to(&reserve_pool)
            .typed(proxy_reserve_pool::ReservePoolProxy)
            .buy(self.blockchain().get_sc_address())
            .egld(egld_amount)
            .returns(ReturnsResult)
            .sync_call();

        let received = self.staking_asset_balance() - asset_before;
        require!(
            token_amount >= quoted && received >= token_amount,
            ERROR_ADAPTER_SHORTFALL
        );

        received
    }

    /// Exact-input swap with a minimum output derived from a fresh quote and
    /// the slippage tolerance, plus a short deadline.
    fn swap_on_router(&self, egld_amount: &BigUint) -> BigUint {
        let router = self.swap_router().get();
        let token_out = EgldOrEsdtTokenIdentifier::esdt(self.staking_asset().get());
        let fee_tier = self.swap_fee_tier().get();

        let quote = self
            .tx()
            .to(&router)
            .typed(proxy_swap_router::SwapRouterProxy)
            .quote_exact_input(
                EgldOrEsdtTokenIdentifier::egld(),
                token_out.clone(),
                fee_tier,
                egld_amount,
            )
            .returns(ReturnsResult)
            .sync_call_readonly();

        let amount_out_minimum = self.deduct_bps(&quote, self.slippage_tolerance_bps().get());
        let params = ExactInputParams {
            token_out,
            fee_tier,
            amount_out_minimum: amount_out_minimum.clone(),
            deadline: self.blockchain().get_block_timestamp() + SWAP_DEADLINE_SECONDS,
        };

        let asset_before = self.staking_asset_balance();

        self.tx()
            .to(&router)
            .typed(proxy_swap_router::SwapRouterProxy)
            .swap_exact_input(params)
            .egld(egld_amount)
            .sync_call();

        let received = self.staking_asset_balance() - asset_before;
        require!(received >= amount_out_minimum, ERROR_ADAPTER_SHORTFALL);

        received
    }
}
