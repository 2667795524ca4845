multiversx_sc::imports!();

use common_structs::ReserveState;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait ViewModule: storage::Storage + utils::UtilsModule + common_checks::ChecksModule {
    /// Returns both reserve counters.
    #[view(getReserves)]
    fn get_reserves(&self) -> ReserveState<Self::Api> {
        ReserveState {
            eth_reserve: self.eth_reserve().get(),
            token_reserve: self.token_reserve().get(),
        }
    }

    /// Token amount a `buy` of `base_amount` EGLD would deliver right now.
    ///
    /// Fails with the same errors as `buy`.
    #[view(quoteBuy)]
    fn quote_buy(&self, base_amount: BigUint) -> BigUint {
        let cache = Cache::read_only(self);
        self.checked_base_to_token(&cache, &base_amount)
    }

    /// EGLD amount a `sell` of `token_amount` would pay right now.
    ///
    /// Fails with the same errors as `sell`.
    #[view(quoteSell)]
    fn quote_sell(&self, token_amount: BigUint) -> BigUint {
        let cache = Cache::read_only(self);
        self.checked_token_to_base(&cache, &token_amount)
    }
}
