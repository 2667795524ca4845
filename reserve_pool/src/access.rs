multiversx_sc::imports!();

use common_errors::ERROR_UNAUTHORIZED;

use crate::storage;

/// Gate in front of every trading endpoint: the owner plus an open set of
/// authorized consumer contracts.
#[multiversx_sc::module]
pub trait AccessModule: storage::Storage + common_events::EventsModule {
    /// Grants `caller` access to the shared reserves.
    #[only_owner]
    #[endpoint(authorizeCaller)]
    fn authorize_caller(&self, caller: ManagedAddress) {
        self.set_caller_authorization(caller, true);
    }

    /// Removes `caller` from the authorized set. Past trades are untouched.
    #[only_owner]
    #[endpoint(revokeCaller)]
    fn revoke_caller(&self, caller: ManagedAddress) {
        self.set_caller_authorization(caller, false);
    }

    /// Adds or removes `caller` from the authorized set in one call.
    ///
    /// # Arguments
    /// - `caller`: Consumer contract address.
    /// - `authorized`: `true` to grant, `false` to revoke.
    #[only_owner]
    #[endpoint(setCallerAuthorization)]
    fn set_caller_authorization(&self, caller: ManagedAddress, authorized: bool) {
        if authorized {
            self.authorized_callers().insert(caller.clone());
        } else {
            self.authorized_callers().swap_remove(&caller);
        }

        self.caller_authorization_event(&caller, authorized);
    }

    /// Returns whether `caller` may trade against the reserves.
    #[view(isAuthorized)]
    fn is_authorized(&self, caller: ManagedAddress) -> bool {
        self.is_owner_or_authorized(&caller)
    }

    fn is_owner_or_authorized(&self, caller: &ManagedAddress) -> bool {
        *caller == self.blockchain().get_owner_address()
            || self.authorized_callers().contains(caller)
    }

    fn require_authorized(&self, caller: &ManagedAddress) {
        require!(self.is_owner_or_authorized(caller), ERROR_UNAUTHORIZED);
    }
}
