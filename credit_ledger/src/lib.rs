#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrual;
pub mod billing;
pub mod borrower;
pub mod cache;
pub mod config;
pub mod credit_line;
pub mod cycles;
pub mod markdown;
pub mod positions;
pub mod premium;
pub mod settlement;
pub mod storage;
pub mod utils;
pub mod view;

pub use common_events::*;

#[multiversx_sc::contract]
pub trait CreditLedger:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + billing::BillingModule
    + premium::PremiumModule
    + markdown::MarkdownModule
    + borrower::BorrowerModule
    + credit_line::CreditLineModule
    + cycles::PaymentCycleModule
    + positions::supply::PositionSupplyModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + settlement::SettlementModule
    + config::ConfigModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the ledger.
    ///
    /// Markets are created afterwards by the owner through `createMarket`. Every configuration
    /// value starts at zero: no grace or delinquency period, no minimum borrow, no penalty and no
    /// minimum cycle spacing.
    ///
    /// # Arguments
    /// - `fee_recipient`: Receives the supply shares minted from market fees.
    #[init]
    fn init(&self, fee_recipient: ManagedAddress) {
        self.require_non_zero_address(&fee_recipient);
        self.fee_recipient().set(&fee_recipient);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
