#![no_std]

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_NON_DIVISIBLE_AMOUNT: &[u8] =
    b"Amount does not convert to a whole number of units at the exchange rate.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INVALID_EXCHANGE_RATE: &[u8] = b"Exchange rate must be greater than zero.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid number of decimals.";

pub static ERROR_INSUFFICIENT_TOKEN_RESERVE: &[u8] = b"Not enough tokens in the reserve.";

pub static ERROR_INSUFFICIENT_BASE_RESERVE: &[u8] = b"Not enough EGLD in the reserve.";

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not authorized.";

pub static ERROR_ALREADY_INITIALIZED: &[u8] = b"Reserves already initialized.";

pub static ERROR_POOL_NOT_INITIALIZED: &[u8] = b"Reserves not initialized.";

pub static ERROR_REENTRANT_CALL: &[u8] = b"Reentrant call.";

pub static ERROR_ADAPTER_SHORTFALL: &[u8] = b"External adapter returned less than expected.";

pub static ERROR_FUNDS_LOCKED: &[u8] = b"Funds are locked.";

pub static ERROR_INSUFFICIENT_PRINCIPAL: &[u8] = b"Not enough principal deposited.";

pub static ERROR_NOTHING_TO_CLAIM: &[u8] = b"Nothing to claim.";

pub static ERROR_INSUFFICIENT_BONUS_RESERVE: &[u8] = b"Not enough funds in the bonus reserve.";

pub static ERROR_INVALID_SLIPPAGE: &[u8] = b"Invalid slippage tolerance.";

pub static ERROR_INVALID_FEE_TIER: &[u8] = b"Invalid fee tier.";

pub static ERROR_INVALID_BONUS_RATE: &[u8] = b"Invalid bonus rate.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Not enough balance.";
