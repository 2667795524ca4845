use multiversx_sc::types::{BigUint, TestAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const SECONDS_PER_DAY: u64 = 86_400;

pub const STAKING_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("STK-abcdef");
pub const RECEIPT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("ASTK-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");
pub const TOKEN_DECIMALS: usize = 18;

/// Staking token units per EGLD unit on the reserve pool
pub const RESERVE_RATE: u64 = 4_000;

/// Default DEX fee tier, in hundredths of a basis point (0.3%)
pub const FEE_TIER: u32 = 3_000;

pub const RAY_5_PERCENT: u128 = 50_000_000_000_000_000_000_000_000;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ALICE_ADDRESS: TestAddress = TestAddress::new("alice");
pub const BOB_ADDRESS: TestAddress = TestAddress::new("bob");
pub const CAROL_ADDRESS: TestAddress = TestAddress::new("carol");

pub const STAKING_PATH: MxscPath = MxscPath::new("output/staking.mxsc.json");
pub const RESERVE_POOL_PATH: MxscPath =
    MxscPath::new("../reserve_pool/output/reserve-pool.mxsc.json");
pub const LENDING_MOCK_PATH: MxscPath =
    MxscPath::new("../lending_mock/output/lending-mock.mxsc.json");
pub const SWAP_MOCK_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");

/// Whole staking tokens, in smallest units
pub fn tokens(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(TOKEN_DECIMALS as u32)
}

/// Whole EGLD, in wei
pub fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(18)
}

/// 0.1 EGLD
pub fn tenth_egld() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(17)
}
