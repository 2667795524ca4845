pub mod account;
pub mod claim;
pub mod deposit;
pub mod withdraw;
