use common_errors::ERROR_ADAPTER_SHORTFALL;
use common_proxies::proxy_lending;

use crate::storage;

multiversx_sc::imports!();

/// Calls into the lending adapter.
///
/// Amounts are always measured as balance deltas of this contract rather than
/// trusted from return values.
#[multiversx_sc::module]
pub trait LendingModule: storage::Storage {
    /// Supplies `amount` of the staking asset on this contract's behalf.
    ///
    /// # Returns
    /// - `BigUint`: Receipt units credited by the adapter for this supply.
    fn supply_to_lending(&self, amount: &BigUint) -> BigUint {
        let receipt_before = self.receipt_balance();

        self.tx()
            .to(self.lending_adapter().get())
            .typed(proxy_lending::LendingAdapterProxy)
            .supply(self.blockchain().get_sc_address())
            .single_esdt(&self.staking_asset().get(), 0, amount)
            .sync_call();

        let receipt_after = self.receipt_balance();
        require!(receipt_after > receipt_before, ERROR_ADAPTER_SHORTFALL);

        receipt_after - receipt_before
    }

    /// Redeems `receipt_amount` and requires at least as much staking asset back.
    ///
    /// # Errors
    /// - `ERROR_ADAPTER_SHORTFALL`: the adapter returned less than `receipt_amount`.
    fn withdraw_from_lending(&self, receipt_amount: &BigUint) -> BigUint {
        if *receipt_amount == 0u64 {
            return BigUint::zero();
        }

        let asset = self.staking_asset().get();
        let asset_before = self.staking_asset_balance();

        self.tx()
            .to(self.lending_adapter().get())
            .typed(proxy_lending::LendingAdapterProxy)
            .withdraw(&asset, receipt_amount, self.blockchain().get_sc_address())
            .single_esdt(&self.receipt_asset().get(), 0, receipt_amount)
            .sync_call();

        let received = self.staking_asset_balance() - asset_before;
        require!(&received >= receipt_amount, ERROR_ADAPTER_SHORTFALL);

        received
    }

    /// Current annual supply rate reported by the adapter, RAY based.
    fn lending_liquidity_rate(&self) -> BigUint {
        self.tx()
            .to(self.lending_adapter().get())
            .typed(proxy_lending::LendingAdapterProxy)
            .get_reserve_data(self.staking_asset().get())
            .returns(ReturnsResult)
            .sync_call_readonly()
            .liquidity_rate
    }

    fn receipt_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(self.receipt_asset().get()), 0)
    }

    fn staking_asset_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(self.staking_asset().get()), 0)
    }
}
