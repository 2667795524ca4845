#![no_std]

pub mod proxy_lending;
pub mod proxy_reserve_pool;
pub mod proxy_staking;
pub mod proxy_swap_router;
