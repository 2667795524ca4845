multiversx_sc::imports!();

use common_checks::ReentrancyLock;
use common_errors::{ERROR_ALREADY_INITIALIZED, ERROR_INVALID_ASSET};
use common_structs::ConversionDirection;

use crate::{access, cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait ExchangeModule:
    storage::Storage
    + utils::UtilsModule
    + access::AccessModule
    + common_checks::ChecksModule
    + common_events::EventsModule
{
    /// Buys pool tokens with the attached EGLD at the fixed rate.
    ///
    /// **Purpose**: Lets an authorized consumer (or the owner) turn EGLD into pool tokens
    /// delivered to `recipient`, drawing on the shared token reserve.
    ///
    /// **Process**:
    /// 1. Checks the caller against the authorization set and takes the reentrancy lock.
    /// 2. Computes `token = egld * rate` and validates divisibility and reserve depth.
    /// 3. Moves both counters and commits them before any transfer.
    /// 4. Sends the tokens to `recipient`.
    ///
    /// # Arguments
    /// - `recipient`: Address receiving the pool tokens.
    ///
    /// # Returns
    /// - `BigUint`: Token amount delivered.
    #[payable("EGLD")]
    #[endpoint(buy)]
    fn buy(&self, recipient: ManagedAddress) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);
        let _lock = ReentrancyLock::acquire(self);

        let base_amount = self.call_value().egld().clone_value();

        let mut cache = Cache::new(self);
        self.require_initialized(&cache);

        let token_amount = self.checked_base_to_token(&cache, &base_amount);

        cache.eth_reserve += &base_amount;
        cache.token_reserve -= &token_amount;

        let reserves = cache.snapshot();
        let pool_token = EgldOrEsdtTokenIdentifier::esdt(cache.pool_token.clone());
        drop(cache);

        self.buy_event(&caller, &recipient, &base_amount, &token_amount, &reserves);
        self.send_asset(&pool_token, &token_amount, &recipient);

        token_amount
    }

    /// Sells the attached pool tokens for EGLD at the fixed rate.
    ///
    /// The tokens arrive with the call, so the pool always holds them before
    /// paying out. The amount must be a multiple of the rate.
    ///
    /// # Arguments
    /// - `seller`: Address receiving the EGLD.
    ///
    /// # Returns
    /// - `BigUint`: EGLD amount paid.
    #[payable]
    #[endpoint(sell)]
    fn sell(&self, seller: ManagedAddress) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);
        let _lock = ReentrancyLock::acquire(self);

        let (asset, token_amount) = self.call_value().egld_or_single_fungible_esdt();

        let mut cache = Cache::new(self);
        self.require_initialized(&cache);
        require!(cache.is_pool_token(&asset), ERROR_INVALID_ASSET);

        let base_amount = self.checked_token_to_base(&cache, &token_amount);

        cache.token_reserve += &token_amount;
        cache.eth_reserve -= &base_amount;

        let reserves = cache.snapshot();
        drop(cache);

        self.sell_event(&caller, &seller, &token_amount, &base_amount, &reserves);
        self.send_asset(&EgldOrEsdtTokenIdentifier::egld(), &base_amount, &seller);

        base_amount
    }

    /// Moves value between the two reserve counters without any transfer.
    ///
    /// Same arithmetic and checks as `buy`/`sell`; used by consumers that
    /// settle the physical leg elsewhere.
    ///
    /// # Arguments
    /// - `amount`: EGLD amount for `BaseToToken`, token amount for `TokenToBase`.
    /// - `direction`: Which counter receives `amount`.
    ///
    /// # Returns
    /// - `BigUint`: The amount removed from the other counter.
    #[endpoint(convertInternal)]
    fn convert_internal(&self, amount: BigUint, direction: ConversionDirection) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);
        let _lock = ReentrancyLock::acquire(self);

        let mut cache = Cache::new(self);
        self.require_initialized(&cache);

        let amount_out = match direction {
            ConversionDirection::BaseToToken => {
                let token_amount = self.checked_base_to_token(&cache, &amount);
                cache.eth_reserve += &amount;
                cache.token_reserve -= &token_amount;
                token_amount
            },
            ConversionDirection::TokenToBase => {
                let base_amount = self.checked_token_to_base(&cache, &amount);
                cache.token_reserve += &amount;
                cache.eth_reserve -= &base_amount;
                base_amount
            },
        };

        self.internal_conversion_event(&caller, direction, &amount, &amount_out, &cache.snapshot());

        amount_out
    }

    /// Tops up one side of the reserves with the attached EGLD or pool tokens.
    #[only_owner]
    #[payable]
    #[endpoint(addReserve)]
    fn add_reserve(&self) {
        let _lock = ReentrancyLock::acquire(self);
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);

        let mut cache = Cache::new(self);
        self.credit_reserve(&mut cache, &asset, &amount);

        self.reserve_added_event(&asset, &amount, &cache.snapshot());
    }

    /// One-shot initial funding of both reserves.
    ///
    /// Accepts EGLD and/or pool tokens in the same call. A second call fails
    /// with `ERROR_ALREADY_INITIALIZED`.
    #[only_owner]
    #[payable]
    #[endpoint(seedReserves)]
    fn seed_reserves(&self) {
        let _lock = ReentrancyLock::acquire(self);
        require!(
            !self.reserves_initialized().get(),
            ERROR_ALREADY_INITIALIZED
        );

        let payments = self.call_value().all_transfers();

        let mut cache = Cache::new(self);
        for payment in payments.iter() {
            self.credit_reserve(&mut cache, &payment.token_identifier, &payment.amount);
        }
        cache.initialized = true;

        self.reserves_initialized().set(true);
        self.reserves_seeded_event(&cache.snapshot());
    }

    fn credit_reserve(
        &self,
        cache: &mut Cache<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if asset.is_egld() {
            cache.eth_reserve += amount;
        } else if cache.is_pool_token(asset) {
            cache.token_reserve += amount;
        } else {
            sc_panic!(ERROR_INVALID_ASSET);
        }
    }
}
