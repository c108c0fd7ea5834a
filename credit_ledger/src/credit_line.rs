multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::MAX_PREMIUM_RATE;
use common_errors::ERROR_MAX_PREMIUM_RATE_EXCEEDED;
use common_structs::{BorrowerPremium, MarketId};

use crate::{accrual, billing, borrower, markdown, premium, storage, utils};

#[multiversx_sc::module]
pub trait CreditLineModule:
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
    /// Assigns a borrower's credit limit and per-second premium rate.
    ///
    /// Premium already earned at the previous rate is accrued first, so a rate change only
    /// applies from this block on. A zero limit blocks new borrows without touching existing debt.
    ///
    /// # Arguments
    /// - `market_id`: Target market, the caller must be its credit line.
    /// - `borrower`: The underwritten address.
    /// - `credit_limit`: Maximum debt in loan token units.
    /// - `premium_rate`: Per-second rate added on top of the base rate, WAD scaled.
    #[endpoint(setCreditLine)]
    fn set_credit_line(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
        credit_limit: BigUint,
        premium_rate: BigUint,
    ) {
        self.require_non_zero_address(&borrower);
        require!(
            premium_rate <= BigUint::from(MAX_PREMIUM_RATE),
            ERROR_MAX_PREMIUM_RATE_EXCEEDED
        );

        let mut cache = self.load_market(market_id);
        self.require_credit_line(&cache);

        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &borrower);

        let mut position = self.get_position(market_id, &borrower);
        position.credit_limit = credit_limit.clone();
        self.position(market_id, &borrower).set(&position);

        let premium_mapper = self.borrower_premium(market_id, &borrower);
        if premium_mapper.is_empty() {
            let borrow_assets = cache.borrow_assets_up(&position.borrow_shares);
            premium_mapper.set(BorrowerPremium::new(
                cache.timestamp,
                premium_rate.clone(),
                borrow_assets,
            ));
        } else {
            premium_mapper.update(|premium| premium.rate = premium_rate.clone());
        }

        self.set_credit_line_event(market_id, &borrower, &credit_limit, &premium_rate);
        self.emit_market_update(&cache);
    }

    /// Sets or removes (no argument) the valuation strategy used to mark down defaulted debt.
    ///
    /// Already applied markdowns are kept until each borrower is touched again.
    #[endpoint(setMarkdownStrategy)]
    fn set_markdown_strategy(&self, market_id: MarketId, strategy: OptionalValue<ManagedAddress>) {
        let cache = self.load_market(market_id);
        self.require_credit_line(&cache);

        let mapper = self.markdown_strategy(market_id);
        let strategy = match strategy.into_option() {
            Some(address) => {
                self.require_non_zero_address(&address);
                mapper.set(&address);
                address
            },
            None => {
                mapper.clear();
                ManagedAddress::zero()
            },
        };

        self.set_markdown_strategy_event(market_id, &strategy);
    }
}
