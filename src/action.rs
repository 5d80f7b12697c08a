multiversx_sc::imports!();

use crate::types::{Proposal, ProposalState};

const ARGUMENT_SEPARATOR: u8 = b'@';

/// Bytes loaded from the managed buffer per read; call data itself is unbounded.
const SCAN_CHUNK_LEN: usize = 64;

// ============================================================
// Call data decoding
// Standard transaction data layout: endpoint@hexarg@hexarg...
// ============================================================

pub struct CallAction<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> CallAction<M> {
    /// `None` for empty input, an empty endpoint name,
    /// or an argument that is not valid hex.
    pub fn decode(call_data: &ManagedBuffer<M>) -> Option<Self> {
        let len = call_data.len();
        if len == 0 {
            return None;
        }

        let mut endpoint: Option<ManagedBuffer<M>> = None;
        let mut arguments = ManagedVec::new();
        let mut part_start = 0;
        let mut offset = 0;
        let mut chunk = [0u8; SCAN_CHUNK_LEN];

        loop {
            let chunk_len = core::cmp::min(SCAN_CHUNK_LEN, len - offset);
            call_data.load_slice(offset, &mut chunk[..chunk_len]).ok()?;
            let is_last_chunk = offset + chunk_len == len;

            let separators = chunk[..chunk_len]
                .iter()
                .enumerate()
                .filter(|(_, byte)| **byte == ARGUMENT_SEPARATOR)
                .map(|(index, _)| offset + index);
            let part_ends = separators.chain(is_last_chunk.then_some(len));

            for part_end in part_ends {
                let part = copy_part(call_data, part_start, part_end)?;
                if endpoint.is_none() {
                    endpoint = Some(part);
                } else {
                    arguments.push(decode_hex_argument(&part)?);
                }
                part_start = part_end + 1;
            }

            if is_last_chunk {
                break;
            }
            offset += chunk_len;
        }

        let endpoint = endpoint?;
        if endpoint.is_empty() {
            return None;
        }
        Some(CallAction { endpoint, arguments })
    }
}

fn copy_part<M: ManagedTypeApi>(
    call_data: &ManagedBuffer<M>,
    start: usize,
    end: usize,
) -> Option<ManagedBuffer<M>> {
    if start == end {
        return Some(ManagedBuffer::new());
    }
    call_data.copy_slice(start, end - start)
}

fn decode_hex_argument<M: ManagedTypeApi>(hex_part: &ManagedBuffer<M>) -> Option<ManagedBuffer<M>> {
    let len = hex_part.len();
    if len % 2 != 0 {
        return None;
    }

    let mut decoded = ManagedBuffer::new();
    let mut hex_chunk = [0u8; SCAN_CHUNK_LEN];
    let mut byte_chunk = [0u8; SCAN_CHUNK_LEN / 2];
    let mut offset = 0;
    while offset < len {
        let chunk_len = core::cmp::min(SCAN_CHUNK_LEN, len - offset);
        hex_part.load_slice(offset, &mut hex_chunk[..chunk_len]).ok()?;
        hex::decode_to_slice(&hex_chunk[..chunk_len], &mut byte_chunk[..chunk_len / 2]).ok()?;
        decoded.append_bytes(&byte_chunk[..chunk_len / 2]);
        offset += chunk_len;
    }
    Some(decoded)
}

// ============================================================
// Action executor
// Runs after the proposal is resolved in storage. The call is
// async, so whatever the recipient does happens after this
// transaction has committed.
// ============================================================

#[multiversx_sc::module]
pub trait ActionModule: crate::storage::StorageModule + crate::events::EventsModule {
    fn execute_action(&self, proposal_id: u64, proposal: Proposal<Self::Api>) {
        if proposal.call_data.is_empty() {
            self.resolve_accepted(
                proposal_id,
                &proposal.votes_for,
                &proposal.votes_against,
                &ManagedVec::new(),
            );
            return;
        }

        let action = match CallAction::decode(&proposal.call_data) {
            Some(action) => action,
            None => {
                self.resolve_failed(proposal_id);
                return;
            }
        };

        self.proposal_state(proposal_id).set(ProposalState::Executing);

        self.tx()
            .to(&proposal.recipient)
            .raw_call(action.endpoint)
            .arguments_raw(action.arguments.into())
            .callback(self.callbacks().action_callback(
                proposal_id,
                proposal.votes_for,
                proposal.votes_against,
            ))
            .async_call_and_exit();
    }

    #[callback]
    fn action_callback(
        &self,
        proposal_id: u64,
        votes_for: BigUint,
        votes_against: BigUint,
        #[call_result] result: ManagedAsyncCallResult<MultiValueEncoded<ManagedBuffer>>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(values) => {
                let call_result = values.into_vec_of_buffers();
                self.resolve_accepted(proposal_id, &votes_for, &votes_against, &call_result);
            }
            ManagedAsyncCallResult::Err(_) => {
                self.resolve_failed(proposal_id);
            }
        }
    }

    fn resolve_accepted(
        &self,
        proposal_id: u64,
        votes_for: &BigUint,
        votes_against: &BigUint,
        call_result: &ManagedVec<ManagedBuffer>,
    ) {
        self.proposal_state(proposal_id).set(ProposalState::Accepted);
        self.proposal_accepted_event(proposal_id, votes_for, votes_against, call_result);
    }

    fn resolve_failed(&self, proposal_id: u64) {
        self.proposal_state(proposal_id).set(ProposalState::Failed);
        self.proposal_failed_event(proposal_id);
    }
}
