#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod action;
pub mod errors;
pub mod events;
pub mod governance;
pub mod governance_dao_proxy;
pub mod ledger;
pub mod storage;
pub mod types;

use errors::{ERR_INVALID_DEBATING_PERIOD, ERR_INVALID_TOKEN};

// ============================================================
// Contract
// Token holders deposit the governance token to gain voting
// weight; proposers submit calls that holders vote on during a
// fixed debate period.
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceDao:
    storage::StorageModule
    + events::EventsModule
    + access::AccessModule
    + ledger::LedgerModule
    + action::ActionModule
    + governance::GovernanceModule
{
    #[init]
    fn init(
        &self,
        governance_token_id: TokenIdentifier,
        debating_period_duration: u64,
        minimum_quorum: BigUint,
        proposer: ManagedAddress,
    ) {
        require!(governance_token_id.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(debating_period_duration > 0, ERR_INVALID_DEBATING_PERIOD);

        self.governance_token_id().set(&governance_token_id);
        self.debating_period_duration().set(debating_period_duration);
        self.minimum_quorum().set(&minimum_quorum);
        self.proposal_count().set(0u64);

        self.proposers().insert(proposer.clone());
        self.proposer_added_event(&proposer);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
