multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;
use common_structs::MarketId;

use crate::{accrual, storage, utils};

#[multiversx_sc::module]
pub trait PositionSupplyModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Supplies the loan token to a market.
    ///
    /// **Process**:
    /// 1. Validates the market, the payment and the beneficiary.
    /// 2. Accrues base interest so the deposit is priced at the current share value.
    /// 3. Mints supply shares rounded down to `on_behalf`.
    ///
    /// # Arguments
    /// - `market_id`: Target market.
    /// - `on_behalf`: Optional owner of the new shares, defaults to the caller.
    ///
    /// # Returns
    /// - `BigUint`: The supply shares minted.
    #[payable]
    #[endpoint(supply)]
    fn supply(&self, market_id: MarketId, on_behalf: OptionalValue<ManagedAddress>) -> BigUint {
        self.require_not_paused();
        self.require_market_not_frozen(market_id);

        let caller = self.blockchain().get_caller();
        let on_behalf = on_behalf.into_option().unwrap_or_else(|| caller.clone());
        self.require_non_zero_address(&on_behalf);

        let mut cache = self.load_market(market_id);
        let assets = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        let shares = cache.supply_shares_down(&assets);
        require!(shares > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let mut position = self.get_position(market_id, &on_behalf);
        position.supply_shares += &shares;

        cache.market.total_supply_shares += &shares;
        cache.market.total_supply_assets += &assets;
        cache.require_totals_fit();

        self.position(market_id, &on_behalf).set(&position);

        self.supply_event(market_id, &caller, &on_behalf, &assets, &shares);
        self.emit_market_update(&cache);

        shares
    }
}
