multiversx_sc::imports!();

use crate::errors::ERR_ACCESS_DENIED;

// ============================================================
// Authorization policy for proposal creation.
// Vote and finish never consult it.
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// Owner or the contract itself, so a passed proposal can rotate proposers.
    #[endpoint(addProposer)]
    fn add_proposer(&self, proposer: ManagedAddress) {
        self.require_caller_is_governor();
        if self.proposers().insert(proposer.clone()) {
            self.proposer_added_event(&proposer);
        }
    }

    #[endpoint(removeProposer)]
    fn remove_proposer(&self, proposer: ManagedAddress) {
        self.require_caller_is_governor();
        if self.proposers().swap_remove(&proposer) {
            self.proposer_removed_event(&proposer);
        }
    }

    #[view(isProposer)]
    fn is_proposer(&self, address: ManagedAddress) -> bool {
        self.proposers().contains(&address)
    }

    #[view(getProposers)]
    fn get_proposers(&self) -> MultiValueEncoded<ManagedAddress> {
        self.proposers().iter().collect()
    }

    fn require_proposer(&self, caller: &ManagedAddress) {
        require!(self.proposers().contains(caller), ERR_ACCESS_DENIED);
    }

    fn require_caller_is_governor(&self) {
        let caller = self.blockchain().get_caller();
        let is_owner = caller == self.blockchain().get_owner_address();
        let is_self = caller == self.blockchain().get_sc_address();
        require!(is_owner || is_self, ERR_ACCESS_DENIED);
    }
}
