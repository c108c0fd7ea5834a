multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait LinearMarkdownModule: common_math::SharedMathModule {
    /// Writes `debt` down linearly over `duration` seconds of default.
    ///
    /// Nothing at the start of default, half the debt halfway through and the whole debt from
    /// `duration` on. Rounded down.
    fn linear_markdown(&self, debt: &BigUint, time_in_default: u64, duration: u64) -> BigUint {
        if duration == 0 || time_in_default >= duration {
            return debt.clone();
        }

        self.mul_div_down(
            debt,
            &BigUint::from(time_in_default),
            &BigUint::from(duration),
        )
    }
}
