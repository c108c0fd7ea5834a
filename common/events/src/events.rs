#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_market")]
    fn create_market_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] params: &MarketParams<Self::Api>,
    );

    #[event("set_fee")]
    fn set_fee_event(&self, #[indexed] market_id: MarketId, #[indexed] fee: &BigUint);

    #[event("set_fee_recipient")]
    fn set_fee_recipient_event(&self, #[indexed] fee_recipient: &ManagedAddress);

    #[event("set_config")]
    fn set_config_event(&self, #[indexed] key: ConfigKey, #[indexed] value: &BigUint);

    #[event("set_market_frozen")]
    fn set_market_frozen_event(&self, #[indexed] market_id: MarketId, #[indexed] frozen: bool);

    #[event("set_markdown_strategy")]
    fn set_markdown_strategy_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] strategy: &ManagedAddress,
    );

    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] caller: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    // Base interest of the whole market, fee shares go to the fee recipient
    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrow_rate: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] fee_shares: &BigUint,
    );

    #[event("premium_accrued")]
    fn premium_accrued_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] premium_assets: &BigUint,
        #[indexed] premium_shares: &BigUint,
        #[indexed] fee_shares: &BigUint,
    );

    #[event("set_credit_line")]
    fn set_credit_line_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] credit_limit: &BigUint,
        #[indexed] premium_rate: &BigUint,
    );

    #[event("payment_cycle_created")]
    fn payment_cycle_created_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] cycle_id: usize,
        #[indexed] end_date: u64,
    );

    #[event("obligation_posted")]
    fn obligation_posted_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] cycle_id: usize,
        #[indexed] amount_due: &BigUint,
        #[indexed] ending_balance: &BigUint,
    );

    #[event("obligation_paid")]
    fn obligation_paid_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount_applied: &BigUint,
        #[indexed] remaining_due: &BigUint,
    );

    #[event("default_started")]
    fn default_started_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] default_start_time: u64,
    );

    #[event("default_cleared")]
    fn default_cleared_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
    );

    #[event("markdown_updated")]
    fn markdown_updated_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] old_markdown: &BigUint,
        #[indexed] new_markdown: &BigUint,
        #[indexed] total_markdown_amount: &BigUint,
    );

    #[event("account_settled")]
    fn account_settled_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] repaid_shares: &BigUint,
        #[indexed] written_off_shares: &BigUint,
        #[indexed] written_off_assets: &BigUint,
    );

    #[event("update_market_state")]
    fn update_market_state_event(
        &self,
        #[indexed] market_id: MarketId,
        #[indexed] timestamp: u64,
        #[indexed] market: &Market<Self::Api>,
    );
}
