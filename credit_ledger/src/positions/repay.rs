multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_PAYMENT, ERROR_NOTHING_TO_REPAY,
    ERROR_REPAY_EXCEEDS_DEBT,
};
use common_proxies::proxy_repay_callback;
use common_structs::MarketId;

use crate::{accrual, billing, borrower, cache::MarketCache, markdown, premium, storage, utils};

#[multiversx_sc::module]
pub trait PositionRepayModule:
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
    + multiversx_sc_modules::pause::PauseModule
{
    /// Repays debt of `on_behalf` with the loan token sent along.
    ///
    /// With `shares` zero the whole payment is repaid and shares are burned rounded down, a payment
    /// equal to the debt burns every share. With `shares` set exactly those shares are burned and
    /// their assets, rounded up, are charged from the payment; the surplus is sent back.
    /// The repayment is applied to the borrower's obligation before any tokens leave the ledger.
    ///
    /// # Arguments
    /// - `market_id`: Target market.
    /// - `shares`: Borrow shares to burn, zero to repay by payment.
    /// - `on_behalf`: Optional borrower whose debt is repaid, defaults to the caller.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The assets repaid and the shares burned.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        market_id: MarketId,
        shares: BigUint,
        on_behalf: OptionalValue<ManagedAddress>,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_not_paused();

        let caller = self.blockchain().get_caller();
        let on_behalf = on_behalf.into_option().unwrap_or_else(|| caller.clone());
        self.require_non_zero_address(&on_behalf);

        let mut cache = self.load_market(market_id);
        let payment = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &on_behalf);

        let (repaid_assets, repaid_shares) =
            self.repay_position(&mut cache, &on_behalf, &payment, &shares);

        self.repay_event(market_id, &caller, &on_behalf, &repaid_assets, &repaid_shares);
        self.emit_market_update(&cache);

        let loan_token = cache.params.loan_token.clone();
        drop(cache);

        self.send_asset(&loan_token, &(&payment - &repaid_assets), &caller);

        (repaid_assets, repaid_shares).into()
    }

    /// Repays `assets` of debt first and collects the tokens afterwards through the caller's
    /// `onCreditRepay(assets, data)` endpoint.
    ///
    /// The accounting, including the obligation update, is committed before the callback runs.
    /// The callback must send back at least `assets` of the loan token, any surplus is returned.
    ///
    /// # Arguments
    /// - `market_id`: Target market.
    /// - `assets`: Amount of debt to repay.
    /// - `on_behalf`: Borrower whose debt is repaid.
    /// - `data`: Opaque payload forwarded to the callback.
    #[endpoint(repayWithCallback)]
    fn repay_with_callback(
        &self,
        market_id: MarketId,
        assets: BigUint,
        on_behalf: ManagedAddress,
        data: ManagedBuffer,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_not_paused();
        require!(assets > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        self.require_non_zero_address(&on_behalf);

        let caller = self.blockchain().get_caller();

        let mut cache = self.load_market(market_id);
        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &on_behalf);

        let (repaid_assets, repaid_shares) =
            self.repay_position(&mut cache, &on_behalf, &assets, &BigUint::zero());

        self.repay_event(market_id, &caller, &on_behalf, &repaid_assets, &repaid_shares);
        self.emit_market_update(&cache);

        let loan_token = cache.params.loan_token.clone();
        drop(cache);

        let back_transfers = self
            .tx()
            .to(&caller)
            .typed(proxy_repay_callback::RepayCallbackProxy)
            .on_credit_repay(&repaid_assets, &data)
            .returns(ReturnsBackTransfers)
            .sync_call();

        let received =
            self.validate_callback_repayment(&loan_token, &back_transfers, &repaid_assets);
        self.send_asset(&loan_token, &(received - &repaid_assets), &caller);

        (repaid_assets, repaid_shares).into()
    }

    /// Burns borrow shares of `borrower` against `available` assets and tracks the obligation.
    ///
    /// # Returns
    /// - `(BigUint, BigUint)`: The assets consumed and the shares burned.
    fn repay_position(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        available: &BigUint,
        shares: &BigUint,
    ) -> (BigUint, BigUint) {
        let mut position = self.get_position(cache.market_id, borrower);
        require!(position.has_debt(), ERROR_NOTHING_TO_REPAY);

        let (repaid_assets, repaid_shares) = if *shares > 0u64 {
            require!(*shares <= position.borrow_shares, ERROR_REPAY_EXCEEDS_DEBT);

            let assets = cache.borrow_assets_up(shares);
            require!(*available >= assets, ERROR_INSUFFICIENT_PAYMENT);
            (assets, shares.clone())
        } else {
            let debt = cache.borrow_assets_up(&position.borrow_shares);
            require!(*available <= debt, ERROR_REPAY_EXCEEDS_DEBT);

            if *available == debt {
                (debt, position.borrow_shares.clone())
            } else {
                (available.clone(), cache.borrow_shares_down(available))
            }
        };

        position.borrow_shares -= &repaid_shares;
        cache.market.total_borrow_shares -= &repaid_shares;
        cache.market.total_borrow_assets =
            self.zero_floor_sub(&cache.market.total_borrow_assets, &repaid_assets);

        self.position(cache.market_id, borrower).set(&position);
        self.track_repayment(cache, borrower, &position, &repaid_assets);

        (repaid_assets, repaid_shares)
    }
}
