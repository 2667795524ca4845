use common_structs::PoolAggregate;

multiversx_sc::imports!();

/// Working copy of the pool aggregate for one mutating operation.
///
/// `pool_total` is the receipt balance held by the contract when the cache is
/// built. The aggregate is written back on drop; operations drop the cache
/// before calling the lending adapter or paying a depositor.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub aggregate: PoolAggregate<C::Api>,
    pub pool_total: BigUint<C::Api>,
    pub bonus_rate_bps: usize,
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let receipt_asset = EgldOrEsdtTokenIdentifier::esdt(sc_ref.receipt_asset().get());
        Cache {
            aggregate: sc_ref.pool_aggregate().get(),
            pool_total: sc_ref.blockchain().get_sc_balance(&receipt_asset, 0),
            bonus_rate_bps: sc_ref.bonus_rate_bps().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.pool_aggregate().set(&self.aggregate);
    }
}
