multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_REPAY_EXCEEDS_DEBT;
use common_structs::MarketId;

use crate::{
    accrual, billing, borrower, cache::MarketCache, markdown, positions, premium, storage, utils,
};

#[multiversx_sc::module]
pub trait SettlementModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + billing::BillingModule
    + premium::PremiumModule
    + markdown::MarkdownModule
    + borrower::BorrowerModule
    + positions::repay::PositionRepayModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Closes a borrower's account for good.
    ///
    /// The loan token sent along (optional) is repaid first, whatever debt remains is written off:
    /// its shares are burned and suppliers absorb the loss through `total_supply_assets`.
    /// Any markdown held for the borrower is reversed before the write-off so the loss is only
    /// recognized once. Settling a borrower without debt only clears its records.
    ///
    /// # Arguments
    /// - `market_id`: Target market, the caller must be its credit line.
    /// - `borrower`: The account to settle.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The shares repaid and the shares written off.
    #[payable]
    #[endpoint(settleAccount)]
    fn settle_account(
        &self,
        market_id: MarketId,
        borrower: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let mut cache = self.load_market(market_id);
        self.require_credit_line(&cache);
        let payment = self.get_optional_payment_amount(&cache);

        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &borrower);

        let position = self.get_position(market_id, &borrower);
        if !position.has_debt() {
            require!(payment == 0u64, ERROR_REPAY_EXCEEDS_DEBT);

            self.clear_borrower_records(&mut cache, &borrower);
            self.account_settled_event(
                market_id,
                &borrower,
                &BigUint::zero(),
                &BigUint::zero(),
                &BigUint::zero(),
            );
            self.emit_market_update(&cache);

            return (BigUint::zero(), BigUint::zero()).into();
        }

        let repaid_shares = if payment > 0u64 {
            let caller = self.blockchain().get_caller();
            let (repaid_assets, repaid_shares) =
                self.repay_position(&mut cache, &borrower, &payment, &BigUint::zero());
            self.repay_event(market_id, &caller, &borrower, &repaid_assets, &repaid_shares);

            repaid_shares
        } else {
            BigUint::zero()
        };

        self.clear_markdown(&mut cache, &borrower);

        let written_off_shares = self.get_position(market_id, &borrower).borrow_shares;
        let written_off_assets = self.write_off(&mut cache, &written_off_shares);

        self.clear_borrower_records(&mut cache, &borrower);

        self.account_settled_event(
            market_id,
            &borrower,
            &repaid_shares,
            &written_off_shares,
            &written_off_assets,
        );
        self.emit_market_update(&cache);

        (repaid_shares, written_off_shares).into()
    }

    /// Removes `shares` of debt from the market and charges the matching assets to suppliers.
    fn write_off(&self, cache: &mut MarketCache<Self>, shares: &BigUint) -> BigUint {
        if *shares == 0u64 {
            return BigUint::zero();
        }

        let assets = self.min_of(
            cache.borrow_assets_up(shares),
            cache.market.total_borrow_assets.clone(),
        );

        cache.market.total_supply_assets =
            self.zero_floor_sub(&cache.market.total_supply_assets, &assets);
        cache.market.total_borrow_assets -= &assets;
        cache.market.total_borrow_shares -= shares;

        assets
    }

    fn clear_borrower_records(&self, cache: &mut MarketCache<Self>, borrower: &ManagedAddress) {
        self.clear_markdown(cache, borrower);
        self.repayment_obligation(cache.market_id, borrower).clear();
        self.borrower_premium(cache.market_id, borrower).clear();

        let mut position = self.get_position(cache.market_id, borrower);
        position.borrow_shares = BigUint::zero();
        position.credit_limit = BigUint::zero();
        self.position(cache.market_id, borrower).set(&position);
    }
}
