multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_BASE_RESERVE, ERROR_INSUFFICIENT_TOKEN_RESERVE, ERROR_NON_DIVISIBLE_AMOUNT,
    ERROR_POOL_NOT_INITIALIZED,
};

use crate::{cache::Cache, storage};

/// Validation and transfer helpers shared by the exchange endpoints and views.
#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage + common_checks::ChecksModule {
    /// Validates an EGLD -> token conversion and returns the token amount.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: `base_amount` is zero.
    /// - `ERROR_NON_DIVISIBLE_AMOUNT`: the token amount is not a whole number of tokens.
    /// - `ERROR_INSUFFICIENT_TOKEN_RESERVE`: the token side cannot cover the output.
    fn checked_base_to_token(&self, cache: &Cache<Self>, base_amount: &BigUint) -> BigUint {
        self.require_amount_greater_than_zero(base_amount);

        let token_amount = cache.base_to_token(base_amount);
        require!(
            cache.is_whole_token_amount(&token_amount),
            ERROR_NON_DIVISIBLE_AMOUNT
        );
        require!(
            cache.has_token_reserve(&token_amount),
            ERROR_INSUFFICIENT_TOKEN_RESERVE
        );

        token_amount
    }

    /// Validates a token -> EGLD conversion and returns the EGLD amount.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: `token_amount` is zero.
    /// - `ERROR_NON_DIVISIBLE_AMOUNT`: `token_amount` is not a multiple of the rate.
    /// - `ERROR_INSUFFICIENT_BASE_RESERVE`: the EGLD side cannot cover the output.
    fn checked_token_to_base(&self, cache: &Cache<Self>, token_amount: &BigUint) -> BigUint {
        self.require_amount_greater_than_zero(token_amount);
        require!(
            cache.is_rate_aligned(token_amount),
            ERROR_NON_DIVISIBLE_AMOUNT
        );

        let base_amount = cache.token_to_base(token_amount);
        require!(
            cache.has_base_reserve(&base_amount),
            ERROR_INSUFFICIENT_BASE_RESERVE
        );

        base_amount
    }

    fn require_initialized(&self, cache: &Cache<Self>) {
        require!(cache.initialized, ERROR_POOL_NOT_INITIALIZED);
    }

    /// Transfers `amount` of `asset` to `to`, skipping empty amounts.
    fn send_asset(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint, to: &ManagedAddress) {
        self.tx()
            .to(to)
            .egld_or_single_esdt(asset, 0, amount)
            .transfer_if_not_empty();
    }
}
