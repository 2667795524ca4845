use common_errors::ERROR_FUNDS_LOCKED;
use common_structs::DepositorPosition;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait TimelockModule: storage::Storage {
    /// Locks the position for the configured duration when timelocks are enabled.
    /// An existing lock is only ever extended.
    fn apply_deposit_lock(&self, position: &mut DepositorPosition<Self::Api>, timestamp: u64) {
        if !self.timelock_enabled().get() {
            return;
        }

        position
            .timelock
            .extend_to(timestamp + self.lock_duration().get());
    }

    fn require_unlocked(&self, position: &DepositorPosition<Self::Api>, timestamp: u64) {
        require!(!position.timelock.is_active(timestamp), ERROR_FUNDS_LOCKED);
    }
}
