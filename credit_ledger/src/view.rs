multiversx_sc::imports!();

use common_structs::{
    BorrowerPremium, MarkdownState, MarketId, PaymentCycle, Position, RepaymentObligation,
    RepaymentStatus,
};

use crate::{accrual, billing, markdown, storage, utils};

#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + billing::BillingModule
    + markdown::MarkdownModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[view(getPosition)]
    fn get_position_view(&self, market_id: MarketId, user: ManagedAddress) -> Position<Self::Api> {
        self.get_position(market_id, &user)
    }

    #[view(getBorrowerPremium)]
    fn get_borrower_premium(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
    ) -> OptionalValue<BorrowerPremium<Self::Api>> {
        let mapper = self.borrower_premium(market_id, &borrower);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    /// Returns the borrower's outstanding obligation, nothing once it is paid.
    #[view(getRepaymentObligation)]
    fn get_repayment_obligation(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
    ) -> OptionalValue<RepaymentObligation<Self::Api>> {
        self.get_outstanding_obligation(market_id, &borrower).into()
    }

    #[view(getMarkdownState)]
    fn get_markdown_state_view(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
    ) -> MarkdownState<Self::Api> {
        self.get_markdown_state(market_id, &borrower)
    }

    /// Repayment status at the current block, with the instant it started.
    #[view(getRepaymentStatus)]
    fn get_repayment_status_view(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
    ) -> MultiValue2<RepaymentStatus, u64> {
        let timestamp = self.blockchain().get_block_timestamp();
        self.get_repayment_status(market_id, &borrower, timestamp)
            .into()
    }

    #[view(getPaymentCycle)]
    fn get_payment_cycle(&self, market_id: MarketId, cycle_id: usize) -> PaymentCycle {
        self.payment_cycles(market_id).get(cycle_id)
    }

    #[view(getPaymentCycleCount)]
    fn get_payment_cycle_count(&self, market_id: MarketId) -> usize {
        self.payment_cycles(market_id).len()
    }

    /// Debt of the borrower as of the last market update, rounded up.
    #[view(getBorrowerAssets)]
    fn get_borrower_assets(&self, market_id: MarketId, borrower: ManagedAddress) -> BigUint {
        let market = self.market(market_id).get();
        let position = self.get_position(market_id, &borrower);

        self.to_assets_up(
            &position.borrow_shares,
            &market.total_borrow_assets,
            &market.total_borrow_shares,
        )
    }

    /// Assets redeemable by the supplier as of the last market update, rounded down.
    #[view(getSupplyAssets)]
    fn get_supply_assets(&self, market_id: MarketId, user: ManagedAddress) -> BigUint {
        let market = self.market(market_id).get();
        let position = self.get_position(market_id, &user);

        self.to_assets_down(
            &position.supply_shares,
            &market.total_supply_assets,
            &market.total_supply_shares,
        )
    }

    /// Markdown the borrower would carry if touched now. Nothing is stored.
    #[view(getBorrowerMarkdown)]
    fn get_borrower_markdown(&self, market_id: MarketId, borrower: ManagedAddress) -> BigUint {
        let timestamp = self.blockchain().get_block_timestamp();
        let (status, status_start) = self.get_repayment_status(market_id, &borrower, timestamp);
        if !status.is_default() {
            return BigUint::zero();
        }

        let debt = self.get_borrower_assets(market_id, borrower.clone());
        let time_in_default = timestamp.saturating_sub(status_start);

        self.calculate_borrower_markdown(market_id, &borrower, debt, time_in_default)
    }

    /// Market totals with base interest simulated up to the current block.
    ///
    /// # Returns
    /// - `MultiValue4`: total supply assets, total supply shares, total borrow assets and total
    ///   borrow shares.
    #[view(getExpectedMarketBalances)]
    fn get_expected_market_balances(
        &self,
        market_id: MarketId,
    ) -> MultiValue4<BigUint, BigUint, BigUint, BigUint> {
        self.require_market_created(market_id);

        let params = self.market_params(market_id).get();
        let mut market = self.market(market_id).get();
        let elapsed = self.blockchain().get_block_timestamp() - market.last_update;

        if elapsed > 0 && market.has_borrows() && !params.rate_model.is_zero() {
            let borrow_rate = self.fetch_borrow_rate(&params, &market);
            let interest =
                self.calc_compounded_interest(&market.total_borrow_assets, &borrow_rate, elapsed);

            market.total_borrow_assets += &interest;
            market.total_supply_assets += &interest;

            let fee_shares = self.calc_fee_shares(&market, &interest);
            market.total_supply_shares += fee_shares;
        }

        (
            market.total_supply_assets,
            market.total_supply_shares,
            market.total_borrow_assets,
            market.total_borrow_shares,
        )
            .into()
    }
}
