multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_VOTED, ERR_FINISH_DATE_OVERFLOW, ERR_INVALID_PROPOSAL,
    ERR_NOT_ACTIVE_PROPOSAL_TIME, ERR_STILL_ACTIVE_PROPOSAL_TIME, ERR_ZERO_BALANCE,
};
use crate::types::{Proposal, ProposalState};

#[multiversx_sc::module]
pub trait GovernanceModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessModule
    + crate::action::ActionModule
{
    // ========================================================
    // ENDPOINT: addProposal
    // Proposer role only. No stake required from the proposer.
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(
        &self,
        call_data: ManagedBuffer,
        recipient: ManagedAddress,
        description: ManagedBuffer,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_proposer(&caller);

        let now = self.blockchain().get_block_timestamp();
        let finish_date = match now.checked_add(self.debating_period_duration().get()) {
            Some(finish_date) => finish_date,
            None => sc_panic!(ERR_FINISH_DATE_OVERFLOW),
        };

        let proposal_id = self.proposal_count().update(|count| {
            *count += 1;
            *count
        });

        self.proposal_voting_started_event(proposal_id, &call_data, &recipient, &description);

        let proposal = Proposal {
            call_data,
            recipient,
            description,
            finish_date,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
        };
        self.proposals(proposal_id).set(&proposal);
        self.proposal_state(proposal_id).set(ProposalState::Active);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the voter's whole balance at the time of voting.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, is_for: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_active_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.finish_date, ERR_NOT_ACTIVE_PROPOSAL_TIME);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let weight = self.balance(&caller).get();
        require!(weight > 0u64, ERR_ZERO_BALANCE);

        self.has_voted(proposal_id, &caller).set(true);
        self.freeze_until(&caller).update(|freeze_until| {
            if *freeze_until < proposal.finish_date {
                *freeze_until = proposal.finish_date;
            }
        });

        if is_for {
            proposal.votes_for += &weight;
        } else {
            proposal.votes_against += &weight;
        }
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, is_for, &weight);
    }

    // ========================================================
    // ENDPOINT: finishProposal
    // Anyone, once the debate period is over. The proposal body
    // is removed before the action is dispatched.
    // ========================================================

    #[endpoint(finishProposal)]
    fn finish_proposal(&self, proposal_id: u64) {
        let proposal = self.require_active_proposal(proposal_id);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.finish_date, ERR_STILL_ACTIVE_PROPOSAL_TIME);

        self.proposals(proposal_id).clear();

        if proposal.is_accepted(&self.minimum_quorum().get()) {
            self.execute_action(proposal_id, proposal);
        } else {
            self.proposal_state(proposal_id).set(ProposalState::Declined);
            self.proposal_declined_event(
                proposal_id,
                &proposal.votes_for,
                &proposal.votes_against,
            );
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// `None` for ids never allocated and for finished proposals.
    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Option<Proposal<Self::Api>> {
        if self.proposals(proposal_id).is_empty() {
            return None;
        }
        Some(self.proposals(proposal_id).get())
    }

    fn require_active_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            self.proposal_state(proposal_id).get() == ProposalState::Active,
            ERR_INVALID_PROPOSAL
        );
        self.proposals(proposal_id).get()
    }
}
