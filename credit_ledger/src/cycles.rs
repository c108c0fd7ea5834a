multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::BPS;
use common_errors::{
    ERROR_CYCLE_END_IN_FUTURE, ERROR_CYCLE_TOO_SOON, ERROR_INCONSISTENT_INPUT,
    ERROR_INVALID_REPAYMENT_BPS, ERROR_NO_PAYMENT_CYCLE,
};
use common_structs::{ConfigKey, MarketId, PaymentCycle, RepaymentObligation};

use crate::{
    accrual, billing, borrower, cache::MarketCache, markdown, premium, storage, utils,
};

#[multiversx_sc::module]
pub trait PaymentCycleModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + billing::BillingModule
    + premium::PremiumModule
    + markdown::MarkdownModule
    + borrower::BorrowerModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Closes a payment cycle ending at `end_date` and bills the listed borrowers against it.
    ///
    /// **Process**:
    /// 1. Validates the caller, the input lengths and the cycle spacing.
    /// 2. Appends the cycle.
    /// 3. For every borrower: touches it, then posts `ending_balance * bps / 10_000` (rounded up)
    ///    as its obligation, replacing the previous one.
    ///
    /// # Arguments
    /// - `market_id`: Target market, the caller must be its credit line.
    /// - `end_date`: Cycle end, not in the future and at least `CycleDuration` after the last one.
    /// - `borrowers`, `repayment_bps`, `ending_balances`: One entry per billed borrower.
    ///
    /// # Returns
    /// - `usize`: The id of the new cycle.
    #[endpoint(closeCycleAndPostObligations)]
    fn close_cycle_and_post_obligations(
        &self,
        market_id: MarketId,
        end_date: u64,
        borrowers: ManagedVec<ManagedAddress>,
        repayment_bps: ManagedVec<u64>,
        ending_balances: ManagedVec<BigUint>,
    ) -> usize {
        let mut cache = self.load_market(market_id);
        self.require_credit_line(&cache);
        self.require_obligation_input(&borrowers, &repayment_bps, &ending_balances);
        require!(end_date <= cache.timestamp, ERROR_CYCLE_END_IN_FUTURE);

        let cycles = self.payment_cycles(market_id);
        if !cycles.is_empty() {
            let last_end = cycles.get(cycles.len()).end_date;
            let min_duration = self.get_config_duration(ConfigKey::CycleDuration);
            require!(
                end_date > last_end && end_date - last_end >= min_duration,
                ERROR_CYCLE_TOO_SOON
            );
        }

        let cycle_id = self.payment_cycles(market_id).push(&PaymentCycle { end_date });
        self.payment_cycle_created_event(market_id, cycle_id, end_date);

        self.global_sync(&mut cache);
        self.post_obligations(
            &mut cache,
            cycle_id,
            &borrowers,
            &repayment_bps,
            &ending_balances,
        );

        self.emit_market_update(&cache);

        cycle_id
    }

    /// Posts obligations for more borrowers against the most recent cycle.
    #[endpoint(addObligationsToLatestCycle)]
    fn add_obligations_to_latest_cycle(
        &self,
        market_id: MarketId,
        borrowers: ManagedVec<ManagedAddress>,
        repayment_bps: ManagedVec<u64>,
        ending_balances: ManagedVec<BigUint>,
    ) {
        let mut cache = self.load_market(market_id);
        self.require_credit_line(&cache);
        self.require_obligation_input(&borrowers, &repayment_bps, &ending_balances);

        let cycle_id = self.payment_cycles(market_id).len();
        require!(cycle_id > 0, ERROR_NO_PAYMENT_CYCLE);

        self.global_sync(&mut cache);
        self.post_obligations(
            &mut cache,
            cycle_id,
            &borrowers,
            &repayment_bps,
            &ending_balances,
        );

        self.emit_market_update(&cache);
    }

    fn require_obligation_input(
        &self,
        borrowers: &ManagedVec<ManagedAddress>,
        repayment_bps: &ManagedVec<u64>,
        ending_balances: &ManagedVec<BigUint>,
    ) {
        require!(
            borrowers.len() == repayment_bps.len() && borrowers.len() == ending_balances.len(),
            ERROR_INCONSISTENT_INPUT
        );

        for bps in repayment_bps.iter() {
            require!(bps <= BPS, ERROR_INVALID_REPAYMENT_BPS);
        }
    }

    fn post_obligations(
        &self,
        cache: &mut MarketCache<Self>,
        cycle_id: usize,
        borrowers: &ManagedVec<ManagedAddress>,
        repayment_bps: &ManagedVec<u64>,
        ending_balances: &ManagedVec<BigUint>,
    ) {
        for index in 0..borrowers.len() {
            let borrower = borrowers.get(index);
            let bps = repayment_bps.get(index);
            let ending_balance = ending_balances.get(index).clone_value();

            // Premium and markdown are settled against the obligation being replaced
            self.touch_borrower(cache, &borrower);

            let amount_due =
                self.mul_div_up(&ending_balance, &BigUint::from(bps), &BigUint::from(BPS));
            let obligation = RepaymentObligation {
                payment_cycle_id: cycle_id,
                amount_due,
                ending_balance,
            };

            self.repayment_obligation(cache.market_id, &borrower)
                .set(&obligation);
            self.obligation_posted_event(
                cache.market_id,
                &borrower,
                cycle_id,
                &obligation.amount_due,
                &obligation.ending_balance,
            );

            if !obligation.is_outstanding() {
                // Nothing due: the borrower is current again
                self.clear_markdown(cache, &borrower);
            }
        }
    }
}
