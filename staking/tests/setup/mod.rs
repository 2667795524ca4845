use crate::constants::*;

use common_proxies::{proxy_lending, proxy_reserve_pool, proxy_staking, proxy_swap_router};
use common_structs::{ConversionRoute, DepositorPosition, LockStatus, PoolAggregate};
use multiversx_sc::types::{
    BigUint, CodeMetadata, EgldOrEsdtTokenIdentifier, EsdtLocalRole, ManagedAddress,
    ManagedDecimal, NumDecimals, ReturnsNewManagedAddress, ReturnsResult, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

use common_checks::ChecksModule;

pub static RECEIPT_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(STAKING_PATH, staking::ContractBuilder);
    blockchain.register_contract(RESERVE_POOL_PATH, reserve_pool::ContractBuilder);
    blockchain.register_contract(LENDING_MOCK_PATH, lending_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

pub struct StakingTestState {
    pub world: ScenarioWorld,
    pub staking_sc: ManagedAddress<StaticApi>,
    pub reserve_pool_sc: ManagedAddress<StaticApi>,
    pub lending_sc: ManagedAddress<StaticApi>,
    pub swap_sc: ManagedAddress<StaticApi>,
}

impl StakingTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let reserve_pool_sc = setup_reserve_pool(&mut world);
        let lending_sc = setup_lending_mock(&mut world);
        let swap_sc = setup_swap_mock(&mut world);
        let staking_sc = setup_staking(&mut world, &lending_sc, &swap_sc, &reserve_pool_sc);

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&reserve_pool_sc)
            .typed(proxy_reserve_pool::ReservePoolProxy)
            .authorize_caller(&staking_sc)
            .run();

        Self {
            world,
            staking_sc,
            reserve_pool_sc,
            lending_sc,
            swap_sc,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    /// Flips the reentrancy latch directly in storage.
    pub fn set_operation_ongoing(&mut self, ongoing: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .whitebox(staking::contract_obj, |sc| {
                sc.operation_ongoing().set(ongoing);
            });
    }

    // Deposits

    pub fn stake(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        lock: bool,
    ) -> DepositorPosition<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .stake(lock)
            .single_esdt(&STAKING_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn stake_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .stake(false)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn stake_egld(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        lock: bool,
    ) -> DepositorPosition<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .stake_egld(lock)
            .egld(amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn stake_egld_error(&mut self, from: TestAddress, amount: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .stake_egld(false)
            .egld(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Exits

    pub fn withdraw(&mut self, from: TestAddress, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .withdraw(amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(&mut self, from: TestAddress, amount: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .withdraw(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim(&mut self, from: TestAddress) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .claim()
            .returns(ReturnsResult)
            .run()
    }

    pub fn claim_error(&mut self, from: TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .claim()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Lending and DEX mocks

    /// Simulates interest: the owner backs `amount` of new receipt tokens minted to the pool.
    pub fn accrue_yield(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_sc)
            .typed(proxy_lending::LendingAdapterProxy)
            .accrue_yield(&self.staking_sc)
            .single_esdt(&STAKING_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn set_withdraw_haircut(&mut self, haircut_bps: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_sc)
            .typed(proxy_lending::LendingAdapterProxy)
            .set_withdraw_haircut(haircut_bps)
            .run();
    }

    pub fn set_liquidity_rate(&mut self, rate: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_sc)
            .typed(proxy_lending::LendingAdapterProxy)
            .set_liquidity_rate(rate)
            .run();
    }

    pub fn set_liquidity_rate_error(&mut self, rate: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.lending_sc)
            .typed(proxy_lending::LendingAdapterProxy)
            .set_liquidity_rate(rate)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_execution_drift(&mut self, drift_bps: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.swap_sc)
            .typed(proxy_swap_router::SwapRouterProxy)
            .set_execution_drift(drift_bps)
            .run();
    }

    pub fn revoke_staking_on_reserve_pool(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.reserve_pool_sc)
            .typed(proxy_reserve_pool::ReservePoolProxy)
            .revoke_caller(&self.staking_sc)
            .run();
    }

    // Owner configuration

    pub fn set_conversion_route(&mut self, route: ConversionRoute) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_conversion_route(route)
            .run();
    }

    pub fn set_slippage_tolerance(&mut self, slippage_bps: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_slippage_tolerance(slippage_bps)
            .run();
    }

    pub fn set_slippage_tolerance_error(&mut self, from: TestAddress, slippage_bps: usize, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_slippage_tolerance(slippage_bps)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_swap_fee_tier(&mut self, fee_tier: u32) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_swap_fee_tier(fee_tier)
            .run();
    }

    pub fn set_swap_fee_tier_error(&mut self, fee_tier: u32, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_swap_fee_tier(fee_tier)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_timelock_config(&mut self, enabled: bool, duration: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_timelock_config(enabled, duration)
            .run();
    }

    pub fn set_bonus_rate(&mut self, bonus_rate_bps: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_bonus_rate(bonus_rate_bps)
            .run();
    }

    pub fn set_bonus_rate_error(&mut self, bonus_rate_bps: usize, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .set_bonus_rate(bonus_rate_bps)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn fund_bonus_reserve(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .fund_bonus_reserve()
            .single_esdt(&STAKING_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn emergency_withdraw(&mut self, asset: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .emergency_withdraw(EgldOrEsdtTokenIdentifier::esdt(asset.to_token_identifier()), amount)
            .run();
    }

    pub fn emergency_withdraw_error(
        &mut self,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .emergency_withdraw(EgldOrEsdtTokenIdentifier::esdt(asset.to_token_identifier()), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .unpause_endpoint()
            .run();
    }

    // Views

    pub fn position(&mut self, depositor: TestAddress) -> DepositorPosition<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .position(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn unclaimed_yield(&mut self, depositor: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_unclaimed_yield(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn position_value(&mut self, depositor: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_position_value(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn aggregate(&mut self) -> PoolAggregate<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .pool_aggregate()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pooled_receipt_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_pooled_receipt_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn share_price(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_share_price()
            .returns(ReturnsResult)
            .run()
    }

    pub fn estimated_apy_bps(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_estimated_apy_bps()
            .returns(ReturnsResult)
            .run()
    }

    pub fn estimated_locked_apy_bps(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_estimated_locked_apy_bps()
            .returns(ReturnsResult)
            .run()
    }

    pub fn timelock_state(&mut self, depositor: TestAddress) -> LockStatus {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_timelock_state(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn lock_end(&mut self, depositor: TestAddress) -> u64 {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .get_lock_end(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn bonus_reserve(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .bonus_reserve()
            .returns(ReturnsResult)
            .run()
    }

    pub fn slippage_tolerance(&mut self) -> usize {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .slippage_tolerance_bps()
            .returns(ReturnsResult)
            .run()
    }

    pub fn swap_fee_tier(&mut self) -> u32 {
        self.world
            .query()
            .to(&self.staking_sc)
            .typed(proxy_staking::YieldStakingProxy)
            .swap_fee_tier()
            .returns(ReturnsResult)
            .run()
    }

    pub fn token_reserve_of_pool(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.reserve_pool_sc)
            .typed(proxy_reserve_pool::ReservePoolProxy)
            .token_reserve()
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .balance(egld(1_000))
        .esdt_balance(STAKING_TOKEN, tokens(100_000_000));

    for depositor in [ALICE_ADDRESS, BOB_ADDRESS, CAROL_ADDRESS] {
        world
            .account(depositor)
            .nonce(1)
            .balance(egld(100))
            .esdt_balance(STAKING_TOKEN, tokens(1_000_000))
            .esdt_balance(OTHER_TOKEN, tokens(1_000));
    }
}

/// Fixed-rate pool seeded with 1 EGLD and 1,000,000 staking tokens.
pub fn setup_reserve_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let reserve_pool_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_reserve_pool::ReservePoolProxy)
        .init(STAKING_TOKEN.to_token_identifier(), TOKEN_DECIMALS, RESERVE_RATE)
        .code(RESERVE_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&reserve_pool_sc)
        .typed(proxy_reserve_pool::ReservePoolProxy)
        .seed_reserves()
        .single_esdt(&STAKING_TOKEN.to_token_identifier(), 0, &tokens(1_000_000))
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&reserve_pool_sc)
        .typed(proxy_reserve_pool::ReservePoolProxy)
        .add_reserve()
        .egld(egld(1))
        .run();

    reserve_pool_sc
}

pub fn setup_lending_mock(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let lending_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_lending::LendingAdapterProxy)
        .init(
            STAKING_TOKEN.to_token_identifier(),
            RECEIPT_TOKEN.to_token_identifier(),
        )
        .code(LENDING_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(lending_sc.clone(), RECEIPT_TOKEN.as_bytes(), RECEIPT_ROLES);

    lending_sc
}

/// Router quoting 4,000 staking tokens per EGLD before fees, with inventory to pay out.
pub fn setup_swap_mock(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let swap_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap_router::SwapRouterProxy)
        .init()
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&swap_sc)
        .typed(proxy_swap_router::SwapRouterProxy)
        .set_price(
            EgldOrEsdtTokenIdentifier::egld(),
            EgldOrEsdtTokenIdentifier::esdt(STAKING_TOKEN.to_token_identifier()),
            BigUint::from(RESERVE_RATE),
            BigUint::from(1u64),
        )
        .run();

    world.set_esdt_balance(swap_sc.clone(), STAKING_TOKEN.as_bytes(), tokens(1_000_000));

    swap_sc
}

pub fn setup_staking(
    world: &mut ScenarioWorld,
    lending_sc: &ManagedAddress<StaticApi>,
    swap_sc: &ManagedAddress<StaticApi>,
    reserve_pool_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_staking::YieldStakingProxy)
        .init(
            STAKING_TOKEN.to_token_identifier(),
            RECEIPT_TOKEN.to_token_identifier(),
            lending_sc,
            swap_sc,
            reserve_pool_sc,
        )
        .code(STAKING_PATH)
        .code_metadata(CodeMetadata::PAYABLE_BY_SC)
        .returns(ReturnsNewManagedAddress)
        .run()
}
