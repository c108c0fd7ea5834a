#![no_std]
use common_constants::{SECONDS_PER_YEAR, WAD, WAD_PRECISION};
use common_structs::InterestRateModel;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Computes the annual borrow rate for a given utilization and returns it per second.
    ///
    /// The curve has three linear regions split at `mid_utilization` and `optimal_utilization`,
    /// and is capped at `max_borrow_rate`.
    ///
    /// # Arguments
    /// - `utilization`: borrowed over supplied, WAD precision.
    /// - `model`: the curve parameters, WAD precision.
    ///
    /// # Returns
    /// - `ManagedDecimal`: per-second borrow rate, WAD precision.
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        model: InterestRateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = if utilization < model.mid_utilization {
            let utilization_ratio = self.div_half_up(
                &self.mul_half_up(&utilization, &model.slope1, WAD_PRECISION),
                &model.mid_utilization,
                WAD_PRECISION,
            );
            model.base_borrow_rate + utilization_ratio
        } else if utilization < model.optimal_utilization {
            let excess_utilization = utilization - model.mid_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &model.slope2, WAD_PRECISION),
                &(model.optimal_utilization - model.mid_utilization),
                WAD_PRECISION,
            );
            model.base_borrow_rate + model.slope1 + slope_contribution
        } else {
            let base_rate = model.base_borrow_rate + model.slope1 + model.slope2;
            let excess_utilization = utilization - model.optimal_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &model.slope3, WAD_PRECISION),
                &(self.wad() - model.optimal_utilization),
                WAD_PRECISION,
            );
            base_rate + slope_contribution
        };

        let capped_rate = if annual_rate > model.max_borrow_rate {
            model.max_borrow_rate
        } else {
            annual_rate
        };

        self.div_half_up(
            &capped_rate,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            WAD_PRECISION,
        )
    }

    /// Borrowed over supplied, WAD precision. Capped at 100% since markdowns can push supply
    /// below borrows.
    fn calc_utilization(
        &self,
        total_borrow_assets: &BigUint,
        total_supply_assets: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if *total_supply_assets == 0u64 {
            return self.wad_zero();
        }

        let utilization = self.w_div_down(total_borrow_assets, total_supply_assets);
        if utilization > BigUint::from(WAD) {
            return self.wad();
        }

        self.to_decimal_wad(utilization)
    }

    /// Approximates `e^(rate * elapsed) - 1` with the first three terms of its Taylor expansion.
    ///
    /// `rate` is per second, WAD scaled. The result is a WAD scaled growth factor minus one.
    fn w_taylor_compounded(&self, rate: &BigUint, elapsed: u64) -> BigUint {
        let wad = BigUint::from(WAD);
        let first_term = rate * elapsed;
        let second_term = self.mul_div_down(&first_term, &first_term, &(&wad * 2u64));
        let third_term = self.mul_div_down(&second_term, &first_term, &(&wad * 3u64));

        first_term + second_term + third_term
    }

    /// Inverse of `w_taylor_compounded`: recovers the per-second rate that produced `growth`
    /// over `elapsed` seconds, using `ln(1 + g) ~ g - g^2/2 + g^3/3`.
    fn w_inverse_taylor_compounded(&self, growth: &BigUint, elapsed: u64) -> BigUint {
        if elapsed == 0 || *growth == 0u64 {
            return BigUint::zero();
        }

        let wad = BigUint::from(WAD);
        let squared = self.w_mul_down(growth, growth);
        let second_term = &squared / 2u64;
        let third_term = self.mul_div_down(&squared, growth, &(&wad * 3u64));

        let log_growth = self.zero_floor_sub(&(growth + &third_term), &second_term);

        log_growth / elapsed
    }

    /// Interest owed on `principal` after `elapsed` seconds at `rate`.
    fn calc_compounded_interest(
        &self,
        principal: &BigUint,
        rate: &BigUint,
        elapsed: u64,
    ) -> BigUint {
        if elapsed == 0 || *rate == 0u64 {
            return BigUint::zero();
        }

        self.w_mul_down(principal, &self.w_taylor_compounded(rate, elapsed))
    }
}
