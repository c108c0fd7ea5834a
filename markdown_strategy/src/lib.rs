#![no_std]

multiversx_sc::imports!();

pub mod linear;

use common_errors::ERROR_INVALID_MARKDOWN_DURATION;

/// Valuation strategy pricing the expected loss of a defaulted borrower for the credit ledger.
#[multiversx_sc::contract]
pub trait MarkdownStrategy: linear::LinearMarkdownModule + common_math::SharedMathModule {
    /// # Arguments
    /// - `markdown_duration`: Seconds of default after which the whole debt is written down.
    #[init]
    fn init(&self, markdown_duration: u64) {
        require!(markdown_duration > 0, ERROR_INVALID_MARKDOWN_DURATION);
        self.markdown_duration().set(markdown_duration);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Markdown for `debt` after `time_in_default` seconds in default. Never above `debt`.
    #[view(calculateMarkdown)]
    fn calculate_markdown(
        &self,
        _borrower: ManagedAddress,
        debt: BigUint,
        time_in_default: u64,
    ) -> BigUint {
        self.linear_markdown(&debt, time_in_default, self.markdown_duration().get())
    }

    #[view(getMarkdownDuration)]
    #[storage_mapper("markdown_duration")]
    fn markdown_duration(&self) -> SingleValueMapper<u64>;
}
