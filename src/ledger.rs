multiversx_sc::imports!();

use crate::errors::{ERR_ACTIVE_BALANCE, ERR_INVALID_AMOUNT, ERR_TRANSFER_FAILED};
use crate::types::Participant;

// ============================================================
// Custody of the governance token.
// Deposited balance is the voting weight; voting freezes it
// until the latest finish date among the voted proposals.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: deposit
    // Tokens arrive with the call; exactly one governance-token
    // payment is accepted.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.governance_token_payment();

        let balance = self.balance(&caller).update(|balance| {
            *balance += &payment.amount;
            balance.clone()
        });

        self.deposit_event(&caller, &payment.amount, &balance);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Bookkeeping first, token transfer last.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        require!(now > self.freeze_until(&caller).get(), ERR_ACTIVE_BALANCE);

        let balance = self.balance(&caller).get();
        require!(amount <= balance, ERR_INVALID_AMOUNT);

        let token_id = self.governance_token_id().get();
        let held = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id.clone()), 0);
        require!(held >= amount, ERR_TRANSFER_FAILED);

        let remaining = &balance - &amount;
        self.balance(&caller).set(&remaining);

        // ESDT transfers of zero are rejected by the protocol
        if amount > 0u64 {
            self.tx()
                .to(&caller)
                .single_esdt(&token_id, 0, &amount)
                .transfer();
        }

        self.withdraw_event(&caller, &amount, &remaining);
    }

    #[view(getUser)]
    fn get_user(&self, user: ManagedAddress) -> Participant<Self::Api> {
        Participant {
            balance: self.balance(&user).get(),
            freeze_until: self.freeze_until(&user).get(),
        }
    }

    fn governance_token_payment(&self) -> EsdtTokenPayment {
        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 1, ERR_TRANSFER_FAILED);

        let payment = payments.get(0).clone();
        require!(
            payment.token_identifier == self.governance_token_id().get()
                && payment.token_nonce == 0,
            ERR_TRANSFER_FAILED
        );
        require!(payment.amount > 0u64, ERR_TRANSFER_FAILED);

        payment
    }
}
