multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_BELOW_MIN_BORROW, ERROR_INSUFFICIENT_CREDIT, ERROR_INSUFFICIENT_LIQUIDITY,
    ERROR_OUTSTANDING_OBLIGATION,
};
use common_structs::{ConfigKey, MarketId};

use crate::{accrual, billing, borrower, markdown, premium, storage, utils};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
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
    /// Borrows the loan token against the caller's own credit line.
    ///
    /// **Process**:
    /// 1. Accrues base interest, then touches the caller (premium, status, markdown).
    /// 2. Rejects borrowers with an unpaid obligation.
    /// 3. Mints borrow shares (rounded up when borrowing by assets, assets rounded down when
    ///    borrowing by shares).
    /// 4. Checks the credit limit, the minimum borrow and the market liquidity.
    /// 5. Commits the market, then transfers the tokens.
    ///
    /// # Arguments
    /// - `market_id`: Target market.
    /// - `assets`: Exact amount of the loan token to borrow.
    /// - `shares`: Exact amount of borrow shares to mint.
    /// - `receiver`: Optional recipient of the tokens, defaults to the caller.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The assets borrowed and the shares minted.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        market_id: MarketId,
        assets: BigUint,
        shares: BigUint,
        receiver: OptionalValue<ManagedAddress>,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_not_paused();
        self.require_market_not_frozen(market_id);
        self.require_exactly_one_zero(&assets, &shares);

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());
        self.require_non_zero_address(&receiver);

        let mut cache = self.load_market(market_id);
        self.global_sync(&mut cache);
        self.touch_borrower(&mut cache, &caller);

        require!(
            !self.has_outstanding_obligation(market_id, &caller),
            ERROR_OUTSTANDING_OBLIGATION
        );

        let (assets, shares) = if assets > 0 {
            let shares = cache.borrow_shares_up(&assets);
            (assets, shares)
        } else {
            let assets = cache.borrow_assets_down(&shares);
            (assets, shares)
        };

        let mut position = self.get_position(market_id, &caller);
        position.borrow_shares += &shares;
        cache.market.total_borrow_shares += &shares;
        cache.market.total_borrow_assets += &assets;
        cache.require_totals_fit();

        let debt = cache.borrow_assets_up(&position.borrow_shares);
        require!(debt <= position.credit_limit, ERROR_INSUFFICIENT_CREDIT);

        let min_borrow = self.config_value(ConfigKey::MinBorrow).get();
        require!(debt >= min_borrow, ERROR_BELOW_MIN_BORROW);

        require!(
            cache.market.total_borrow_assets <= cache.market.total_supply_assets,
            ERROR_INSUFFICIENT_LIQUIDITY
        );
        require!(cache.has_reserves(&assets), ERROR_INSUFFICIENT_LIQUIDITY);

        self.position(market_id, &caller).set(&position);
        self.refresh_premium_snapshot(&cache, &caller, &position);

        self.borrow_event(market_id, &caller, &receiver, &assets, &shares);
        self.emit_market_update(&cache);

        let loan_token = cache.params.loan_token.clone();
        drop(cache);

        self.send_asset(&loan_token, &assets, &receiver);

        (assets, shares).into()
    }
}
