multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{MarketId, Position, RepaymentStatus};

use crate::{accrual, billing, cache::MarketCache, markdown, premium, storage, utils};

#[multiversx_sc::module]
pub trait BorrowerModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + billing::BillingModule
    + premium::PremiumModule
    + markdown::MarkdownModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues base interest, then the borrower's premium.
    #[endpoint(accrueBorrowerPremium)]
    fn accrue_premium_endpoint(&self, market_id: MarketId, borrower: ManagedAddress) {
        let mut cache = self.load_market(market_id);

        self.global_sync(&mut cache);
        let (status, status_start) =
            self.get_repayment_status(market_id, &borrower, cache.timestamp);
        self.accrue_borrower_premium(&mut cache, &borrower, status, status_start);

        self.emit_market_update(&cache);
    }

    /// Refreshes premium, repayment status and markdown of one borrower.
    ///
    /// Markdown is lazy: `total_markdown_amount` only reflects a defaulted borrower as of their
    /// last touch. Keepers use this (or `touchBorrowers`) to bring the market total up to date.
    #[endpoint(touchBorrower)]
    fn touch_borrower_endpoint(&self, market_id: MarketId, borrower: ManagedAddress) {
        let mut cache = self.load_market(market_id);

        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &borrower);

        self.emit_market_update(&cache);
    }

    /// Batch version of `touchBorrower`.
    #[endpoint(touchBorrowers)]
    fn touch_borrowers(&self, market_id: MarketId, borrowers: MultiValueEncoded<ManagedAddress>) {
        let mut cache = self.load_market(market_id);

        self.global_sync(&mut cache);
        for borrower in borrowers {
            self.touch_borrower(&mut cache, &borrower);
        }

        self.emit_market_update(&cache);
    }

    /// Borrower scoped precondition of every operation: premium first, then markdown, both
    /// evaluated against the status at the current block.
    fn touch_borrower(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
    ) -> RepaymentStatus {
        let (status, status_start) =
            self.get_repayment_status(cache.market_id, borrower, cache.timestamp);

        self.accrue_borrower_premium(cache, borrower, status, status_start);
        self.update_markdown(cache, borrower, status, status_start);

        status
    }

    /// Applies a repayment to the borrower's obligation. A cleared obligation cures the borrower:
    /// default clock and markdown are reversed in the same call. Otherwise the markdown is kept
    /// within the debt left.
    fn track_repayment(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        position: &Position<Self::Api>,
        repaid_assets: &BigUint,
    ) {
        let cured = if position.has_debt() {
            self.apply_obligation_payment(cache.market_id, borrower, repaid_assets)
        } else {
            // Nothing left to bill once the whole debt is gone
            self.repayment_obligation(cache.market_id, borrower).clear();
            true
        };

        if cured {
            self.clear_markdown(cache, borrower);
        } else {
            self.cap_markdown_at_debt(cache, borrower, position);
        }

        self.refresh_premium_snapshot(cache, borrower, position);
    }
}
