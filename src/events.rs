multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Ledger ──

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        balance: &BigUint,
    );

    // ── Proposal lifecycle ──

    #[event("proposalVotingStarted")]
    fn proposal_voting_started_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] call_data: &ManagedBuffer,
        #[indexed] recipient: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] is_for: bool,
        weight: &BigUint,
    );

    #[event("proposalAccepted")]
    fn proposal_accepted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        #[indexed] votes_against: &BigUint,
        call_result: &ManagedVec<ManagedBuffer>,
    );

    #[event("proposalDeclined")]
    fn proposal_declined_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] votes_for: &BigUint,
        #[indexed] votes_against: &BigUint,
    );

    #[event("proposalFailed")]
    fn proposal_failed_event(&self, #[indexed] proposal_id: u64);

    // ── Authorization ──

    #[event("proposerAdded")]
    fn proposer_added_event(&self, #[indexed] proposer: &ManagedAddress);

    #[event("proposerRemoved")]
    fn proposer_removed_event(&self, #[indexed] proposer: &ManagedAddress);
}
