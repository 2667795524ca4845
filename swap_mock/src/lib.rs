#![no_std]

use common_constants::{BPS, VALID_FEE_TIERS};
use common_structs::ExactInputParams;

multiversx_sc::imports!();

const FEE_TIER_DENOMINATOR: u64 = 1_000_000;

/// Concentrated-liquidity style router stand-in: fixed owner-set prices per
/// pair, a per-tier fee, and an optional execution drift that makes the
/// executed output worse than the quote.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        numerator: BigUint,
        denominator: BigUint,
    ) {
        require!(denominator > 0, "Invalid price");
        self.price_numerator(&token_in, &token_out).set(numerator);
        self.price_denominator(&token_in, &token_out).set(denominator);
    }

    // Simulates price movement between quote and execution
    #[only_owner]
    #[endpoint(setExecutionDrift)]
    fn set_execution_drift(&self, drift_bps: usize) {
        require!(drift_bps <= BPS, "Invalid drift");
        self.execution_drift_bps().set(drift_bps);
    }

    #[view(quoteExactInput)]
    fn quote_exact_input(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
        amount_in: BigUint,
    ) -> BigUint {
        require!(VALID_FEE_TIERS.contains(&fee_tier), "Unsupported fee tier");

        let numerator_mapper = self.price_numerator(&token_in, &token_out);
        require!(!numerator_mapper.is_empty(), "Pair not found");

        let gross = amount_in * numerator_mapper.get()
            / self.price_denominator(&token_in, &token_out).get();

        gross * BigUint::from(FEE_TIER_DENOMINATOR - fee_tier as u64)
            / BigUint::from(FEE_TIER_DENOMINATOR)
    }

    // Swaps the attached payment and sends the output back to the caller
    #[payable]
    #[endpoint(swapExactInput)]
    fn swap_exact_input(&self, params: ExactInputParams<Self::Api>) -> BigUint {
        let (token_in, amount_in) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();

        require!(
            self.blockchain().get_block_timestamp() <= params.deadline,
            "Transaction too old"
        );

        let quoted =
            self.quote_exact_input(token_in, params.token_out.clone(), params.fee_tier, amount_in);
        let drift = quoted.clone() * BigUint::from(self.execution_drift_bps().get())
            / BigUint::from(BPS);
        let amount_out = quoted - drift;

        require!(
            amount_out >= params.amount_out_minimum,
            "Too little received"
        );

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&params.token_out, 0, &amount_out)
            .transfer_if_not_empty();

        amount_out
    }

    #[storage_mapper("price_numerator")]
    fn price_numerator(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("price_denominator")]
    fn price_denominator(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        token_out: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getExecutionDrift)]
    #[storage_mapper("execution_drift_bps")]
    fn execution_drift_bps(&self) -> SingleValueMapper<usize>;
}
