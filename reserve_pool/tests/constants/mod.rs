use multiversx_sc::types::{BigUint, TestAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("TOKEN-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");
pub const TOKEN_DECIMALS: usize = 18;

/// Token units per EGLD unit
pub const RATE: u64 = 4_000;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const CONSUMER_ADDRESS: TestAddress = TestAddress::new("consumer");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");
pub const RECIPIENT_ADDRESS: TestAddress = TestAddress::new("recipient");

pub const RESERVE_POOL_PATH: MxscPath = MxscPath::new("output/reserve-pool.mxsc.json");

pub const SEED_EGLD: u64 = 1;
pub const SEED_TOKENS: u64 = 1_000_000;

/// Whole EGLD, in wei
pub fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(18)
}

/// Whole tokens, in smallest units
pub fn tokens(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(TOKEN_DECIMALS as u32)
}

/// 0.1 EGLD
pub fn tenth_egld() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(17)
}
