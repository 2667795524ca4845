multiversx_sc::imports!();

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the core state variables of the reserve pool.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the token exchanged against EGLD by this pool.
    ///
    /// # Returns
    /// - `TokenIdentifier`: The pool token.
    #[view(getPoolToken)]
    #[storage_mapper("pool_token")]
    fn pool_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Returns the fixed exchange rate, in token smallest units per EGLD smallest unit.
    ///
    /// Set once at deployment, there is no setter.
    #[view(getExchangeRate)]
    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self) -> SingleValueMapper<u64>;

    /// Returns `10^decimals` of the pool token.
    ///
    /// Buys must deliver a whole number of tokens, i.e. a multiple of this unit.
    #[view(getTokenUnit)]
    #[storage_mapper("token_unit")]
    fn token_unit(&self) -> SingleValueMapper<BigUint>;

    /// Retrieves the EGLD side of the reserves.
    ///
    /// # Returns
    /// - `BigUint`: EGLD reserve counter.
    #[view(getEthReserve)]
    #[storage_mapper("eth_reserve")]
    fn eth_reserve(&self) -> SingleValueMapper<BigUint>;

    /// Retrieves the token side of the reserves.
    ///
    /// # Returns
    /// - `BigUint`: Token reserve counter.
    #[view(getTokenReserve)]
    #[storage_mapper("token_reserve")]
    fn token_reserve(&self) -> SingleValueMapper<BigUint>;

    /// Whether the owner already seeded the reserves.
    #[view(isInitialized)]
    #[storage_mapper("reserves_initialized")]
    fn reserves_initialized(&self) -> SingleValueMapper<bool>;

    /// Contracts allowed to trade against the shared reserves, besides the owner.
    #[view(getAuthorizedCallers)]
    #[storage_mapper("authorized_callers")]
    fn authorized_callers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
