multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_proxies::proxy_markdown_strategy;
use common_structs::{MarkdownState, MarketId, Position, RepaymentStatus};

use crate::{billing, cache::MarketCache, storage};

#[multiversx_sc::module]
pub trait MarkdownModule:
    storage::Storage
    + billing::BillingModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Brings the borrower's markdown in line with its current repayment status.
    ///
    /// In `Default` the valuation strategy prices the write-down for the time spent in default,
    /// capped at the debt. In any other status the stored markdown is fully reversed.
    /// Only the delta against the last applied markdown touches `total_supply_assets`, and a
    /// growing markdown can never push supply below zero.
    fn update_markdown(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        status: RepaymentStatus,
        status_start: u64,
    ) {
        let mut state = self.get_markdown_state(cache.market_id, borrower);

        let target = if status.is_default() {
            if !state.is_default_recorded() {
                state.default_start_time = status_start;
                self.default_started_event(cache.market_id, borrower, status_start);
            }
            let position = self.get_position(cache.market_id, borrower);
            let debt = cache.borrow_assets_up(&position.borrow_shares);
            let time_in_default = cache.timestamp.saturating_sub(state.default_start_time);

            self.calculate_borrower_markdown(cache.market_id, borrower, debt, time_in_default)
        } else {
            if state.is_default_recorded() {
                state.default_start_time = 0;
                self.default_cleared_event(cache.market_id, borrower);
            }
            BigUint::zero()
        };

        self.apply_markdown(cache, borrower, &mut state, target);
    }

    /// Moves the stored markdown to `target`, applying only the difference to the market.
    fn apply_markdown(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        state: &mut MarkdownState<Self::Api>,
        target: BigUint,
    ) {
        let previous = state.last_calculated_markdown.clone();

        if target > previous {
            let delta = &target - &previous;
            let applied = self.min_of(delta, cache.market.total_supply_assets.clone());

            cache.market.total_supply_assets -= &applied;
            cache.market.total_markdown_amount += &applied;
            state.last_calculated_markdown += &applied;
        } else if target < previous {
            let delta = &previous - &target;

            cache.market.total_supply_assets += &delta;
            cache.market.total_markdown_amount =
                self.zero_floor_sub(&cache.market.total_markdown_amount, &delta);
            state.last_calculated_markdown = target;
        }

        if state.last_calculated_markdown != previous {
            self.markdown_updated_event(
                cache.market_id,
                borrower,
                &previous,
                &state.last_calculated_markdown,
                &cache.market.total_markdown_amount,
            );
        }

        let mapper = self.markdown_state(cache.market_id, borrower);
        if *state == MarkdownState::new() {
            mapper.clear();
        } else {
            mapper.set(&*state);
        }
    }

    /// Reverses any markdown applied for the borrower and forgets its default clock.
    fn clear_markdown(&self, cache: &mut MarketCache<Self>, borrower: &ManagedAddress) {
        let mut state = self.get_markdown_state(cache.market_id, borrower);
        if state.is_default_recorded() {
            state.default_start_time = 0;
            self.default_cleared_event(cache.market_id, borrower);
        }

        self.apply_markdown(cache, borrower, &mut state, BigUint::zero());
    }

    /// Lowers the stored markdown to the borrower's remaining debt, which a partial repayment
    /// can bring below the last applied markdown.
    fn cap_markdown_at_debt(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        position: &Position<Self::Api>,
    ) {
        let mut state = self.get_markdown_state(cache.market_id, borrower);
        let debt = cache.borrow_assets_up(&position.borrow_shares);
        if state.last_calculated_markdown > debt {
            self.apply_markdown(cache, borrower, &mut state, debt);
        }
    }

    /// Asks the market's valuation strategy for the borrower's write-down, capped at `debt`.
    ///
    /// Zero when no strategy is set. The call is read-only and a failing strategy aborts the call.
    fn calculate_borrower_markdown(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
        debt: BigUint,
        time_in_default: u64,
    ) -> BigUint {
        let strategy_mapper = self.markdown_strategy(market_id);
        if strategy_mapper.is_empty() || debt == 0u64 {
            return BigUint::zero();
        }

        let markdown: BigUint = self
            .tx()
            .to(&strategy_mapper.get())
            .typed(proxy_markdown_strategy::MarkdownStrategyProxy)
            .calculate_markdown(borrower, &debt, time_in_default)
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.min_of(markdown, debt)
    }
}
