multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_proxies::proxy_rate_model;
use common_structs::{Market, MarketId, MarketParams};

use crate::{cache::MarketCache, storage, utils};

#[multiversx_sc::module]
pub trait AccrualModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues base interest of a market up to the current block.
    ///
    /// Anyone may call it. Every state-mutating endpoint does the same as its first step.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self, market_id: MarketId) {
        let mut cache = self.load_market(market_id);

        self.global_sync(&mut cache);

        self.emit_market_update(&cache);
    }

    /// Advances the market totals by the base interest accumulated since `last_update`.
    ///
    /// **Process**:
    /// 1. Skips everything when no time elapsed, so repeated calls in one block are no-ops.
    /// 2. Queries the rate model for a per-second rate when there is outstanding debt.
    /// 3. Compounds it over the elapsed time and adds the interest to both borrow and supply totals.
    /// 4. Mints fee shares to the fee recipient.
    /// 5. Moves `last_update` to the current timestamp.
    fn global_sync(&self, cache: &mut MarketCache<Self>) {
        let elapsed = cache.timestamp - cache.market.last_update;
        if elapsed == 0 {
            return;
        }

        if cache.market.has_borrows() && !cache.params.rate_model.is_zero() {
            let borrow_rate = self.fetch_borrow_rate(&cache.params, &cache.market);
            let interest = self.calc_compounded_interest(
                &cache.market.total_borrow_assets,
                &borrow_rate,
                elapsed,
            );

            cache.market.total_borrow_assets += &interest;
            cache.market.total_supply_assets += &interest;

            let fee_shares = self.mint_fee_shares(cache, &interest);
            cache.require_totals_fit();

            self.accrue_interest_event(cache.market_id, &borrow_rate, &interest, &fee_shares);
        }

        cache.market.last_update = cache.timestamp;
    }

    /// Reads the per-second borrow rate from the market's rate model.
    ///
    /// The call is read-only; a failing model aborts the whole call.
    fn fetch_borrow_rate(
        &self,
        params: &MarketParams<Self::Api>,
        market: &Market<Self::Api>,
    ) -> BigUint {
        self.tx()
            .to(&params.rate_model)
            .typed(proxy_rate_model::RateModelProxy)
            .borrow_rate(params, market)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Credits the fee part of freshly accrued `interest` to the fee recipient as supply shares.
    ///
    /// The interest is already included in `total_supply_assets`, so shares are priced against the
    /// supply without the fee to avoid diluting the recipient.
    fn mint_fee_shares(&self, cache: &mut MarketCache<Self>, interest: &BigUint) -> BigUint {
        let fee_shares = self.calc_fee_shares(&cache.market, interest);
        if fee_shares == 0u64 {
            return fee_shares;
        }

        let fee_recipient = self.fee_recipient().get();
        let mut position = self.get_position(cache.market_id, &fee_recipient);
        position.supply_shares += &fee_shares;
        self.position(cache.market_id, &fee_recipient).set(&position);

        cache.market.total_supply_shares += &fee_shares;

        fee_shares
    }

    /// Supply shares worth the fee part of `interest`, which `market` already includes.
    fn calc_fee_shares(&self, market: &Market<Self::Api>, interest: &BigUint) -> BigUint {
        if market.fee == 0u64 || *interest == 0u64 {
            return BigUint::zero();
        }

        let fee_amount = self.w_mul_down(interest, &market.fee);
        self.to_shares_down(
            &fee_amount,
            &(&market.total_supply_assets - &fee_amount),
            &market.total_supply_shares,
        )
    }
}
