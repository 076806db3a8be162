multiversx_sc::imports!();

use crate::errors::{ERR_NOT_ADMIN, ERR_NOT_AUTHORITY};

// ============================================================
// Role Registry
// The admin is a singleton; authorities are an independent set.
// Membership changes apply to the very next authorization check.
// ============================================================

#[multiversx_sc::module]
pub trait RolesModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS — admin only
    // ========================================================

    /// Adding an existing authority is a no-op success.
    #[endpoint(addAuthority)]
    fn add_authority(&self, authority: ManagedAddress) {
        self.require_admin();
        if self.authorities().insert(authority.clone()) {
            self.authority_added_event(&authority);
        }
    }

    /// Removing a non-authority is a no-op success.
    #[endpoint(removeAuthority)]
    fn remove_authority(&self, authority: ManagedAddress) {
        self.require_admin();
        if self.authorities().swap_remove(&authority) {
            self.authority_removed_event(&authority);
        }
    }

    #[endpoint(transferAdmin)]
    fn transfer_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();
        let previous = self.admin().get();
        self.admin().set(&new_admin);
        self.admin_transferred_event(&previous, &new_admin);
    }

    // ========================================================
    // GUARDS
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(caller), ERR_NOT_ADMIN);
    }

    fn require_authority(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.authorities().contains(&caller), ERR_NOT_AUTHORITY);
        caller
    }

    fn authority_count(&self) -> u64 {
        self.authorities().len() as u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAdmin)]
    fn is_admin(&self, address: ManagedAddress) -> bool {
        self.admin().get() == address
    }

    #[view(isAuthority)]
    fn is_authority(&self, address: ManagedAddress) -> bool {
        self.authorities().contains(&address)
    }

    #[view(getAuthorities)]
    fn get_authorities(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for authority in self.authorities().iter() {
            result.push(authority);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("authorities")]
    fn authorities(&self) -> UnorderedSetMapper<ManagedAddress>;
}
