multiversx_sc::imports!();

use crate::types::{Proposal, ProposalState};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration (set once in init) ──

    #[view(getGovernanceTokenId)]
    #[storage_mapper("governanceTokenId")]
    fn governance_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getDebatingPeriodDuration)]
    #[storage_mapper("debatingPeriodDuration")]
    fn debating_period_duration(&self) -> SingleValueMapper<u64>;

    #[view(getMinimumQuorum)]
    #[storage_mapper("minimumQuorum")]
    fn minimum_quorum(&self) -> SingleValueMapper<BigUint>;

    // ── Ledger ──

    #[storage_mapper("balance")]
    fn balance(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("freezeUntil")]
    fn freeze_until(&self, user: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(getProposalsCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[view(getProposalState)]
    #[storage_mapper("proposalState")]
    fn proposal_state(&self, id: u64) -> SingleValueMapper<ProposalState>;

    /// Never cleared, outlives the proposal body.
    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Authorization ──

    #[storage_mapper("proposers")]
    fn proposers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
