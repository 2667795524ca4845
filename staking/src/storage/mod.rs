use common_structs::{ConversionRoute, DepositorPosition, PoolAggregate};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the staking asset
    /// The token depositors stake and receive back, supplied as-is to the lending adapter.
    #[view(getStakingAsset)]
    #[storage_mapper("staking_asset")]
    fn staking_asset(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Get the receipt asset
    /// Interest-bearing token minted by the lending adapter; the contract balance of it is the pool.
    #[view(getReceiptAsset)]
    #[storage_mapper("receipt_asset")]
    fn receipt_asset(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getLendingAdapter)]
    #[storage_mapper("lending_adapter")]
    fn lending_adapter(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSwapRouter)]
    #[storage_mapper("swap_router")]
    fn swap_router(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getReservePool)]
    #[storage_mapper("reserve_pool")]
    fn reserve_pool(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the conversion route
    /// How EGLD deposits are turned into the staking asset.
    #[view(getConversionRoute)]
    #[storage_mapper("conversion_route")]
    fn conversion_route(&self) -> SingleValueMapper<ConversionRoute>;

    /// Maximum accepted shortfall of a DEX swap against its quote, in BPS.
    #[view(getSlippageTolerance)]
    #[storage_mapper("slippage_tolerance_bps")]
    fn slippage_tolerance_bps(&self) -> SingleValueMapper<usize>;

    #[view(getSwapFeeTier)]
    #[storage_mapper("swap_fee_tier")]
    fn swap_fee_tier(&self) -> SingleValueMapper<u32>;

    #[view(isTimelockEnabled)]
    #[storage_mapper("timelock_enabled")]
    fn timelock_enabled(&self) -> SingleValueMapper<bool>;

    /// Lock length, in seconds, applied when a depositor opts in.
    #[view(getLockDuration)]
    #[storage_mapper("lock_duration")]
    fn lock_duration(&self) -> SingleValueMapper<u64>;

    /// Bonus paid on top of the base yield once a lock expired, in BPS.
    #[view(getBonusRate)]
    #[storage_mapper("bonus_rate_bps")]
    fn bonus_rate_bps(&self) -> SingleValueMapper<usize>;

    /// Staking asset set aside by the owner to pay timelock bonuses.
    #[view(getBonusReserve)]
    #[storage_mapper("bonus_reserve")]
    fn bonus_reserve(&self) -> SingleValueMapper<BigUint>;

    /// Get the depositor positions
    /// One record per address, kept after a full withdrawal.
    #[storage_mapper("positions")]
    fn positions(&self, depositor: &ManagedAddress) -> SingleValueMapper<DepositorPosition<Self::Api>>;

    /// Every address that ever deposited.
    #[view(getDepositors)]
    #[storage_mapper("depositors")]
    fn depositors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getPoolAggregate)]
    #[storage_mapper("pool_aggregate")]
    fn pool_aggregate(&self) -> SingleValueMapper<PoolAggregate<Self::Api>>;
}
