#![no_std]

multiversx_sc::imports!();

use common_constants::WAD;
use common_errors::ERROR_INVALID_UTILIZATION_RANGE;
use common_structs::{InterestRateModel, Market, MarketParams};

/// Utilization based borrow rate served to the credit ledger.
///
/// Parameters are annual rates and utilization ratios with WAD precision. The ledger reads the
/// per-second rate through `borrowRate` on every accrual.
#[multiversx_sc::contract]
pub trait RateModel: common_math::SharedMathModule + common_rates::InterestRates {
    #[init]
    fn init(
        &self,
        max_borrow_rate: BigUint,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
    ) {
        self.set_model(
            max_borrow_rate,
            base_borrow_rate,
            slope1,
            slope2,
            slope3,
            mid_utilization,
            optimal_utilization,
        );
    }

    #[upgrade]
    fn upgrade(
        &self,
        max_borrow_rate: BigUint,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
    ) {
        self.set_model(
            max_borrow_rate,
            base_borrow_rate,
            slope1,
            slope2,
            slope3,
            mid_utilization,
            optimal_utilization,
        );
    }

    /// Per-second borrow rate for the market's current utilization, WAD precision.
    #[view(borrowRate)]
    fn borrow_rate(&self, _params: MarketParams<Self::Api>, market: Market<Self::Api>) -> BigUint {
        let utilization =
            self.calc_utilization(&market.total_borrow_assets, &market.total_supply_assets);
        let rate = self.calc_borrow_rate(utilization, self.interest_rate_model().get());

        rate.into_raw_units().clone()
    }

    #[view(getInterestRateModel)]
    #[storage_mapper("interest_rate_model")]
    fn interest_rate_model(&self) -> SingleValueMapper<InterestRateModel<Self::Api>>;

    fn set_model(
        &self,
        max_borrow_rate: BigUint,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
    ) {
        require!(
            mid_utilization > 0
                && mid_utilization < optimal_utilization
                && optimal_utilization < BigUint::from(WAD),
            ERROR_INVALID_UTILIZATION_RANGE
        );

        self.interest_rate_model().set(InterestRateModel {
            max_borrow_rate: self.to_decimal_wad(max_borrow_rate),
            base_borrow_rate: self.to_decimal_wad(base_borrow_rate),
            slope1: self.to_decimal_wad(slope1),
            slope2: self.to_decimal_wad(slope2),
            slope3: self.to_decimal_wad(slope3),
            mid_utilization: self.to_decimal_wad(mid_utilization),
            optimal_utilization: self.to_decimal_wad(optimal_utilization),
        });
    }
}
