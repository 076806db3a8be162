multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_ZERO_AMOUNT};

// ============================================================
// Treasury
// Tracks the pooled balance available for proposals. The tracked
// balance never goes negative: every debit is checked first.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule: crate::roles::RolesModule + crate::events::EventsModule {
    #[endpoint(depositFunds)]
    #[payable("EGLD")]
    fn deposit_funds(&self) {
        self.require_admin();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.treasury_balance().update(|balance| *balance += &amount);

        let caller = self.blockchain().get_caller();
        self.funds_deposited_event(&caller, &amount, &self.treasury_balance().get());
    }

    /// Pays `amount` back to the admin.
    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self, amount: BigUint) {
        self.require_admin();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        self.debit_treasury(&amount);

        let caller = self.blockchain().get_caller();
        self.send().direct_egld(&caller, &amount);
        self.funds_withdrawn_event(&caller, &amount, &self.treasury_balance().get());
    }

    /// Internal payout used by the disbursement engine. A failed check
    /// aborts the whole transaction, including the caller's state change.
    fn release_funds(&self, amount: &BigUint, recipient: &ManagedAddress) {
        self.debit_treasury(amount);
        self.send().direct_egld(recipient, amount);
        self.funds_released_event(recipient, amount, &self.treasury_balance().get());
    }

    fn debit_treasury(&self, amount: &BigUint) {
        let balance = self.treasury_balance().get();
        require!(*amount <= balance, ERR_INSUFFICIENT_FUNDS);
        self.treasury_balance().set(&(balance - amount));
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Actual EGLD held by the contract, including anything sent
    /// outside `depositFunds`.
    #[view(getContractBalance)]
    fn get_contract_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getTreasuryBalance)]
    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;
}
