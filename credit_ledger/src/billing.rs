multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{ConfigKey, MarketId, RepaymentStatus};

use crate::storage;

#[multiversx_sc::module]
pub trait BillingModule: storage::Storage + common_events::EventsModule {
    /// Derives the repayment status of a borrower at `timestamp`.
    ///
    /// Status is a pure function of the outstanding obligation's cycle end date and the configured
    /// grace and delinquency durations. A borrower already recorded in default stays there until the
    /// obligation is cleared, even when a newer cycle is posted over the old one.
    ///
    /// # Returns
    /// - `(RepaymentStatus, u64)`: the status and the instant it started (zero for `Current`).
    fn get_repayment_status(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
        timestamp: u64,
    ) -> (RepaymentStatus, u64) {
        let obligation = match self.get_outstanding_obligation(market_id, borrower) {
            Some(obligation) => obligation,
            None => return (RepaymentStatus::Current, 0),
        };

        let markdown_state = self.get_markdown_state(market_id, borrower);
        if markdown_state.is_default_recorded() {
            return (RepaymentStatus::Default, markdown_state.default_start_time);
        }

        let cycle_end = self
            .payment_cycles(market_id)
            .get(obligation.payment_cycle_id)
            .end_date;
        let grace_end = cycle_end.saturating_add(self.get_config_duration(ConfigKey::GracePeriod));
        let delinquency_end =
            grace_end.saturating_add(self.get_config_duration(ConfigKey::DelinquencyPeriod));

        if timestamp < grace_end {
            (RepaymentStatus::GracePeriod, cycle_end)
        } else if timestamp < delinquency_end {
            (RepaymentStatus::Delinquent, grace_end)
        } else {
            (RepaymentStatus::Default, delinquency_end)
        }
    }

    /// Reduces the borrower's outstanding obligation by a repaid amount.
    ///
    /// # Returns
    /// - `bool`: true when this payment brought the obligation to zero.
    fn apply_obligation_payment(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
        repaid_assets: &BigUint,
    ) -> bool {
        let mut obligation = match self.get_outstanding_obligation(market_id, borrower) {
            Some(obligation) => obligation,
            None => return false,
        };

        let applied = if *repaid_assets < obligation.amount_due {
            repaid_assets.clone()
        } else {
            obligation.amount_due.clone()
        };
        obligation.amount_due -= &applied;

        self.obligation_paid_event(market_id, borrower, &applied, &obligation.amount_due);

        if obligation.is_outstanding() {
            self.repayment_obligation(market_id, borrower).set(&obligation);
            false
        } else {
            self.repayment_obligation(market_id, borrower).clear();
            true
        }
    }

    fn has_outstanding_obligation(&self, market_id: MarketId, borrower: &ManagedAddress) -> bool {
        self.get_outstanding_obligation(market_id, borrower)
            .is_some()
    }
}
