#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod cache;
pub mod exchange;
pub mod storage;
pub mod utils;
pub mod view;

use common_constants::EGLD_DECIMALS;
pub use common_errors::*;
pub use common_events::*;

#[multiversx_sc::contract]
pub trait ReservePool:
    storage::Storage
    + common_events::EventsModule
    + common_checks::ChecksModule
    + access::AccessModule
    + exchange::ExchangeModule
    + utils::UtilsModule
    + view::ViewModule
{
    /// Initializes the reserve pool for one EGLD <-> token pair.
    ///
    /// **Purpose**: Fixes the traded token, its decimals and the exchange rate for the
    /// lifetime of the contract. Reserves start empty until the owner calls `seedReserves`.
    ///
    /// **Process**:
    /// 1. Validates the token identifier, the decimals and the rate.
    /// 2. Stores the token, the rate and the whole-token unit `10^decimals`.
    ///
    /// ### Parameters
    /// - `pool_token`: Token exchanged against EGLD.
    /// - `token_decimals`: Number of decimals of `pool_token`.
    /// - `exchange_rate`: Token smallest units per EGLD smallest unit.
    ///
    /// **Security Considerations**:
    /// - The rate has no setter and `upgrade` leaves it untouched.
    #[init]
    fn init(&self, pool_token: TokenIdentifier, token_decimals: usize, exchange_rate: u64) {
        require!(pool_token.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);
        require!(token_decimals <= EGLD_DECIMALS, ERROR_INVALID_DECIMALS);
        require!(exchange_rate > 0, ERROR_INVALID_EXCHANGE_RATE);

        self.pool_token().set(&pool_token);
        self.exchange_rate().set(exchange_rate);
        self.token_unit()
            .set(BigUint::from(10u64).pow(token_decimals as u32));
        self.eth_reserve().set(BigUint::zero());
        self.token_reserve().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
