multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INSUFFICIENT_SHARES};
use common_structs::MarketId;

use crate::{accrual, storage, utils};

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Withdraws supplied assets from the caller's position.
    ///
    /// Exactly one of `assets` and `shares` must be non-zero. Withdrawing by assets burns shares
    /// rounded up, withdrawing by shares pays out assets rounded down. Allowed on frozen markets.
    ///
    /// # Arguments
    /// - `market_id`: Target market.
    /// - `assets`: Exact amount of the loan token to receive.
    /// - `shares`: Exact amount of supply shares to burn.
    /// - `receiver`: Optional recipient of the tokens, defaults to the caller.
    ///
    /// # Returns
    /// - `MultiValue2<BigUint, BigUint>`: The assets withdrawn and the shares burned.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        market_id: MarketId,
        assets: BigUint,
        shares: BigUint,
        receiver: OptionalValue<ManagedAddress>,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_not_paused();
        self.require_exactly_one_zero(&assets, &shares);

        let caller = self.blockchain().get_caller();
        let receiver = receiver.into_option().unwrap_or_else(|| caller.clone());
        self.require_non_zero_address(&receiver);

        let mut cache = self.load_market(market_id);
        self.global_sync(&mut cache);

        let (assets, shares) = if assets > 0 {
            let shares = cache.supply_shares_up(&assets);
            (assets, shares)
        } else {
            let assets = cache.supply_assets_down(&shares);
            (assets, shares)
        };

        let mut position = self.get_position(market_id, &caller);
        require!(
            position.supply_shares >= shares,
            ERROR_INSUFFICIENT_SHARES
        );
        require!(
            assets <= cache.market.available_liquidity(),
            ERROR_INSUFFICIENT_LIQUIDITY
        );
        require!(cache.has_reserves(&assets), ERROR_INSUFFICIENT_LIQUIDITY);

        position.supply_shares -= &shares;
        cache.market.total_supply_shares -= &shares;
        cache.market.total_supply_assets -= &assets;

        self.position(market_id, &caller).set(&position);

        self.withdraw_event(market_id, &caller, &receiver, &assets, &shares);
        self.emit_market_update(&cache);

        let loan_token = cache.params.loan_token.clone();
        drop(cache);

        self.send_asset(&loan_token, &assets, &receiver);

        (assets, shares).into()
    }
}
