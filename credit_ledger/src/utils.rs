multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::MarketCache, storage};

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INCONSISTENT_AMOUNTS,
    ERROR_INVALID_ASSET, ERROR_INVALID_CALLBACK_REPAYMENT, ERROR_MARKET_FROZEN,
    ERROR_MARKET_NOT_CREATED, ERROR_NOT_CREDIT_LINE,
};
use common_structs::MarketId;

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    fn require_market_created(&self, market_id: MarketId) {
        require!(
            !self.market_params(market_id).is_empty(),
            ERROR_MARKET_NOT_CREATED
        );
    }

    /// Loads a market for mutation, failing on unknown ids.
    fn load_market(&self, market_id: MarketId) -> MarketCache<Self> {
        self.require_market_created(market_id);
        MarketCache::new(self, market_id)
    }

    fn require_credit_line(&self, cache: &MarketCache<Self>) {
        let caller = self.blockchain().get_caller();
        require!(cache.is_credit_line(&caller), ERROR_NOT_CREDIT_LINE);
    }

    fn require_market_not_frozen(&self, market_id: MarketId) {
        require!(!self.market_frozen(market_id).get(), ERROR_MARKET_FROZEN);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    /// Exactly one of `assets` and `shares` drives an operation.
    fn require_exactly_one_zero(&self, assets: &BigUint, shares: &BigUint) {
        require!(
            (*assets == 0u64) != (*shares == 0u64),
            ERROR_INCONSISTENT_AMOUNTS
        );
    }

    /// Returns the loan token amount sent with the call. The payment must be non-zero.
    fn get_payment_amount(&self, cache: &MarketCache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        amount
    }

    /// Returns the loan token amount sent with the call, zero when nothing was sent.
    fn get_optional_payment_amount(&self, cache: &MarketCache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        if amount == 0 {
            return amount;
        }

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        amount
    }

    #[inline]
    fn send_asset(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(token.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    #[inline(always)]
    fn emit_market_update(&self, cache: &MarketCache<Self>) {
        self.update_market_state_event(cache.market_id, cache.timestamp, &cache.market);
    }

    /// Checks the tokens handed back by a repay callback and returns the received amount.
    fn validate_callback_repayment(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        back_transfers: &BackTransfers<Self::Api>,
        required_repayment: &BigUint,
    ) -> BigUint {
        require!(
            back_transfers.payments.len() == 1,
            ERROR_INVALID_CALLBACK_REPAYMENT
        );
        let payment = back_transfers.payments.get(0);
        require!(
            payment.token_identifier == *token,
            ERROR_INVALID_CALLBACK_REPAYMENT
        );
        let repayment = payment.amount.clone();

        require!(
            repayment >= *required_repayment,
            ERROR_INVALID_CALLBACK_REPAYMENT
        );

        repayment
    }
}
