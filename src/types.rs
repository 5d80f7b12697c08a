multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal State — explicit lifecycle tag, one per proposal id
// ============================================================

/// Empty storage decodes to the first variant, so ids that were never
/// allocated read back as `Nonexistent`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum ProposalState {
    /// Id not allocated yet.
    Nonexistent,
    /// Debate period running (or elapsed but not finished yet).
    Active,
    /// Majority and quorum reached; the action call is in flight.
    Executing,
    /// Action executed successfully. Terminal.
    Accepted,
    /// Quorum missed or for <= against. Terminal.
    Declined,
    /// Action call could not be decoded or was rejected by the recipient. Terminal.
    Failed,
}

// ============================================================
// Proposal — body kept in storage only while Active
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// `endpoint@hexarg@hexarg...`, dispatched to `recipient` on acceptance
    pub call_data: ManagedBuffer<M>,
    pub recipient: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    /// Block timestamp at which voting closes
    pub finish_date: u64,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn turnout(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }

    /// Quorum counts both directions; a tie never passes.
    pub fn is_accepted(&self, minimum_quorum: &BigUint<M>) -> bool {
        &self.turnout() >= minimum_quorum && self.votes_for > self.votes_against
    }
}

// ============================================================
// Participant — ledger entry returned by the user view
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Participant<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    /// Balance can be withdrawn only once block timestamp is past this value
    pub freeze_until: u64,
}
