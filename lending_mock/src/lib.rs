#![no_std]

use common_constants::{BPS, RAY};
use common_errors::{ERROR_INSUFFICIENT_BALANCE, ERROR_INVALID_ASSET};
use common_structs::ReserveData;

multiversx_sc::imports!();

/// Minimal lending market: one underlying asset, one receipt token minted 1:1
/// on supply and burned on withdraw.
///
/// Interest is simulated by the owner through `accrueYield`, which mints
/// receipt tokens backed by freshly deposited underlying.
#[multiversx_sc::contract]
pub trait LendingMock {
    #[init]
    fn init(&self, asset: TokenIdentifier, receipt_asset: TokenIdentifier) {
        self.asset().set(asset);
        self.receipt_asset().set(receipt_asset);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Supplies the underlying and mints the receipt to `on_behalf_of`
    #[payable]
    #[endpoint(supply)]
    fn supply(&self, on_behalf_of: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(self.is_underlying(&asset), ERROR_INVALID_ASSET);

        self.mint_receipt(&amount, &on_behalf_of);
    }

    // Burns the attached receipt and sends the underlying, minus the configured haircut, to `to`
    #[payable]
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: TokenIdentifier, amount: BigUint, to: ManagedAddress) -> BigUint {
        let (receipt, receipt_amount) = self.call_value().egld_or_single_fungible_esdt();
        let receipt_asset = self.receipt_asset().get();
        require!(asset == self.asset().get(), ERROR_INVALID_ASSET);
        require!(
            receipt == EgldOrEsdtTokenIdentifier::esdt(receipt_asset.clone()),
            ERROR_INVALID_ASSET
        );
        require!(receipt_amount >= amount, ERROR_INSUFFICIENT_BALANCE);

        self.send().esdt_local_burn(&receipt_asset, 0, &receipt_amount);

        let haircut = amount.clone() * BigUint::from(self.withdraw_haircut_bps().get())
            / BigUint::from(BPS);
        let paid = amount - haircut;

        self.tx()
            .to(&to)
            .single_esdt(&asset, 0, &paid)
            .transfer_if_not_empty();

        paid
    }

    // Simulates interest: the attached underlying backs receipt tokens minted to `holder`
    #[only_owner]
    #[payable]
    #[endpoint(accrueYield)]
    fn accrue_yield(&self, holder: ManagedAddress) {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(self.is_underlying(&asset), ERROR_INVALID_ASSET);

        self.mint_receipt(&amount, &holder);
    }

    #[view(getReserveData)]
    fn get_reserve_data(&self, asset: TokenIdentifier) -> ReserveData<Self::Api> {
        require!(asset == self.asset().get(), ERROR_INVALID_ASSET);

        ReserveData {
            asset,
            receipt_asset: self.receipt_asset().get(),
            liquidity_rate: self.liquidity_rate().get(),
            last_update_timestamp: self.blockchain().get_block_timestamp(),
        }
    }

    #[only_owner]
    #[endpoint(setLiquidityRate)]
    fn set_liquidity_rate(&self, rate: BigUint) {
        require!(rate <= BigUint::from(RAY), "Invalid liquidity rate");
        self.liquidity_rate().set(rate);
    }

    #[only_owner]
    #[endpoint(setWithdrawHaircut)]
    fn set_withdraw_haircut(&self, haircut_bps: usize) {
        require!(haircut_bps <= BPS, "Invalid haircut");
        self.withdraw_haircut_bps().set(haircut_bps);
    }

    fn is_underlying(&self, asset: &EgldOrEsdtTokenIdentifier) -> bool {
        *asset == EgldOrEsdtTokenIdentifier::esdt(self.asset().get())
    }

    fn mint_receipt(&self, amount: &BigUint, to: &ManagedAddress) {
        let receipt = self.receipt_asset().get();
        self.send().esdt_local_mint(&receipt, 0, amount);
        self.tx().to(to).single_esdt(&receipt, 0, amount).transfer();
    }

    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getReceiptAsset)]
    #[storage_mapper("receipt_asset")]
    fn receipt_asset(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Annual supply rate, RAY based
    #[view(getLiquidityRate)]
    #[storage_mapper("liquidity_rate")]
    fn liquidity_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getWithdrawHaircut)]
    #[storage_mapper("withdraw_haircut_bps")]
    fn withdraw_haircut_bps(&self) -> SingleValueMapper<usize>;
}
