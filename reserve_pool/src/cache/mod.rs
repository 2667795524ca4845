use common_structs::ReserveState;

multiversx_sc::imports!();

/// In-memory copy of the reserve counters for the duration of one operation.
///
/// Both counters are written back together when the cache is dropped, so an
/// operation commits the two sides of a trade atomically. Callers drop the
/// cache explicitly before any outgoing transfer.
///
/// A cache opened with [`Cache::read_only`] never writes back, so views can
/// share the validation helpers and still be queried readonly.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// EGLD side of the reserves.
    pub eth_reserve: BigUint<C::Api>,
    /// Token side of the reserves.
    pub token_reserve: BigUint<C::Api>,
    /// Token smallest units per EGLD smallest unit.
    pub exchange_rate: BigUint<C::Api>,
    /// `10^decimals` of the pool token.
    pub token_unit: BigUint<C::Api>,
    pub pool_token: TokenIdentifier<C::Api>,
    pub initialized: bool,
    commit_on_drop: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Self::load(sc_ref, true)
    }

    pub fn read_only(sc_ref: &'a C) -> Self {
        Self::load(sc_ref, false)
    }

    fn load(sc_ref: &'a C, commit_on_drop: bool) -> Self {
        Cache {
            eth_reserve: sc_ref.eth_reserve().get(),
            token_reserve: sc_ref.token_reserve().get(),
            exchange_rate: BigUint::from(sc_ref.exchange_rate().get()),
            token_unit: sc_ref.token_unit().get(),
            pool_token: sc_ref.pool_token().get(),
            initialized: sc_ref.reserves_initialized().get(),
            commit_on_drop,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        if !self.commit_on_drop {
            return;
        }

        // commit both counters together
        self.sc_ref.eth_reserve().set(&self.eth_reserve);
        self.sc_ref.token_reserve().set(&self.token_reserve);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Token amount matching `base_amount` EGLD at the fixed rate.
    pub fn base_to_token(&self, base_amount: &BigUint<C::Api>) -> BigUint<C::Api> {
        base_amount * &self.exchange_rate
    }

    /// EGLD amount matching `token_amount`, rounded down.
    pub fn token_to_base(&self, token_amount: &BigUint<C::Api>) -> BigUint<C::Api> {
        token_amount / &self.exchange_rate
    }

    /// A bought amount must be a whole number of tokens.
    pub fn is_whole_token_amount(&self, token_amount: &BigUint<C::Api>) -> bool {
        (token_amount % &self.token_unit) == 0u64
    }

    /// A sold amount must convert to EGLD without remainder.
    pub fn is_rate_aligned(&self, token_amount: &BigUint<C::Api>) -> bool {
        (token_amount % &self.exchange_rate) == 0u64
    }

    pub fn has_token_reserve(&self, amount: &BigUint<C::Api>) -> bool {
        &self.token_reserve >= amount
    }

    pub fn has_base_reserve(&self, amount: &BigUint<C::Api>) -> bool {
        &self.eth_reserve >= amount
    }

    pub fn is_pool_token(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        *asset == EgldOrEsdtTokenIdentifier::esdt(self.pool_token.clone())
    }

    pub fn snapshot(&self) -> ReserveState<C::Api> {
        ReserveState {
            eth_reserve: self.eth_reserve.clone(),
            token_reserve: self.token_reserve.clone(),
        }
    }
}
