#![no_std]

use common_constants::{VIRTUAL_ASSETS, VIRTUAL_SHARES, WAD, WAD_PRECISION};
use common_errors::ERROR_MAX_UINT128_EXCEEDED;

multiversx_sc::imports!();

const U128_BYTES: usize = 16;

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// Computes `(x * y) / d` rounded down.
    fn mul_div_down(&self, x: &BigUint, y: &BigUint, d: &BigUint) -> BigUint {
        (x * y) / d
    }

    /// Computes `(x * y) / d` rounded up.
    fn mul_div_up(&self, x: &BigUint, y: &BigUint, d: &BigUint) -> BigUint {
        let numerator = x * y;
        (numerator + d - 1u64) / d
    }

    fn w_mul_down(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_down(x, y, &BigUint::from(WAD))
    }

    fn w_div_down(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_down(x, &BigUint::from(WAD), y)
    }

    fn w_div_up(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_up(x, &BigUint::from(WAD), y)
    }

    /// Returns `a - b`, or zero when `b > a`.
    fn zero_floor_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn min_of(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    /// Aborts when `value` does not fit in 128 bits.
    fn require_fits_u128(&self, value: &BigUint) {
        require!(
            value.to_bytes_be_buffer().len() <= U128_BYTES,
            ERROR_MAX_UINT128_EXCEEDED
        );
    }

    /// Converts assets to shares, rounding down. Used when minting supply shares.
    fn to_shares_down(
        &self,
        assets: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_down(
            assets,
            &(total_shares + VIRTUAL_SHARES),
            &(total_assets + VIRTUAL_ASSETS),
        )
    }

    /// Converts assets to shares, rounding up. Used when burning supply shares or minting debt.
    fn to_shares_up(
        &self,
        assets: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_up(
            assets,
            &(total_shares + VIRTUAL_SHARES),
            &(total_assets + VIRTUAL_ASSETS),
        )
    }

    fn to_assets_down(
        &self,
        shares: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_down(
            shares,
            &(total_assets + VIRTUAL_ASSETS),
            &(total_shares + VIRTUAL_SHARES),
        )
    }

    fn to_assets_up(
        &self,
        shares: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_up(
            shares,
            &(total_assets + VIRTUAL_ASSETS),
            &(total_shares + VIRTUAL_SHARES),
        )
    }

    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }
}
