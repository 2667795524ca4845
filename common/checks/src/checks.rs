#![no_std]

multiversx_sc::imports!();

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_REENTRANT_CALL};

/// Shared guards for every mutating entry point: a contract-wide reentrancy
/// latch plus the basic amount checks.
#[multiversx_sc::module]
pub trait ChecksModule {
    // Reentrancy guard
    #[view(isOperationOngoing)]
    #[storage_mapper("operation_ongoing")]
    fn operation_ongoing(&self) -> SingleValueMapper<bool>;

    fn reentrancy_guard(&self) {
        require!(!self.operation_ongoing().get(), ERROR_REENTRANT_CALL);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }
}

/// Scoped hold on the reentrancy latch.
///
/// Acquiring fails with `ERROR_REENTRANT_CALL` when another guarded entry
/// point is already executing in this contract. The latch is released when
/// the lock goes out of scope; a failed transaction reverts it with the rest
/// of the state.
pub struct ReentrancyLock<'a, C>
where
    C: ChecksModule,
{
    sc_ref: &'a C,
}

impl<'a, C> ReentrancyLock<'a, C>
where
    C: ChecksModule,
{
    pub fn acquire(sc_ref: &'a C) -> Self {
        sc_ref.reentrancy_guard();
        sc_ref.operation_ongoing().set(true);
        ReentrancyLock { sc_ref }
    }
}

impl<C> Drop for ReentrancyLock<'_, C>
where
    C: ChecksModule,
{
    fn drop(&mut self) {
        self.sc_ref.operation_ongoing().clear();
    }
}
