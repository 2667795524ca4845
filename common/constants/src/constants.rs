#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// One whole unit of an 18 decimals asset (1 EGLD)
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

pub const EGLD_DECIMALS: usize = 18;

/// Maximum swap slippage tolerance accepted by the staking config (10%)
pub const MAX_SLIPPAGE_BPS: usize = 1_000;

/// Slippage tolerance applied until the owner changes it (0.50%)
pub const DEFAULT_SLIPPAGE_BPS: usize = 50;

/// Fee tiers the DEX adapter routes through, in hundredths of a basis point
pub const VALID_FEE_TIERS: [u32; 4] = [100, 500, 3_000, 10_000];
pub const DEFAULT_FEE_TIER: u32 = 3_000;

/// Window after which a submitted swap is rejected by the router
pub const SWAP_DEADLINE_SECONDS: u64 = 300;

/// Maximum timelock bonus on top of the base yield (50%)
pub const MAX_BONUS_RATE_BPS: usize = 5_000;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DEFAULT_LOCK_DURATION: u64 = 30 * SECONDS_PER_DAY;
