use common_structs::DepositorPosition;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule: storage::Storage {
    /// Loads a depositor position, or a fresh empty one stamped with `timestamp`
    /// for an address that never deposited.
    fn get_position(&self, depositor: &ManagedAddress, timestamp: u64) -> DepositorPosition<Self::Api> {
        let mapper = self.positions(depositor);
        if mapper.is_empty() {
            DepositorPosition::new(timestamp)
        } else {
            mapper.get()
        }
    }

    fn store_position(&self, depositor: &ManagedAddress, position: &DepositorPosition<Self::Api>) {
        self.positions(depositor).set(position);
        self.depositors().insert(depositor.clone());
    }
}
