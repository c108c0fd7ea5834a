multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::*;

/// On-chain storage of the ledger: markets, per-address positions and the per-borrower
/// credit lifecycle records.
#[multiversx_sc::module]
pub trait Storage {
    /// Last market id handed out by `createMarket`. Ids start at 1.
    #[view(getLastMarketId)]
    #[storage_mapper("last_market_id")]
    fn last_market_id(&self) -> SingleValueMapper<MarketId>;

    /// Returns the immutable parameters of a market.
    ///
    /// # Arguments
    /// - `market_id`: The market identifier.
    ///
    /// # Returns
    /// - `MarketParams<Self::Api>`: loan token, rate model and credit line.
    #[view(getMarketParams)]
    #[storage_mapper("market_params")]
    fn market_params(&self, market_id: MarketId) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Returns the aggregate totals of a market as of its last update.
    ///
    /// # Returns
    /// - `Market<Self::Api>`: supply and borrow totals, fee, markdown total and last update.
    #[view(getMarket)]
    #[storage_mapper("market")]
    fn market(&self, market_id: MarketId) -> SingleValueMapper<Market<Self::Api>>;

    #[storage_mapper("position")]
    fn position(
        &self,
        market_id: MarketId,
        user: &ManagedAddress,
    ) -> SingleValueMapper<Position<Self::Api>>;

    #[storage_mapper("borrower_premium")]
    fn borrower_premium(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
    ) -> SingleValueMapper<BorrowerPremium<Self::Api>>;

    /// Append only list of closed payment cycles. Cycle ids are the 1-based indexes.
    #[storage_mapper("payment_cycles")]
    fn payment_cycles(&self, market_id: MarketId) -> VecMapper<PaymentCycle>;

    #[storage_mapper("repayment_obligation")]
    fn repayment_obligation(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
    ) -> SingleValueMapper<RepaymentObligation<Self::Api>>;

    #[storage_mapper("markdown_state")]
    fn markdown_state(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
    ) -> SingleValueMapper<MarkdownState<Self::Api>>;

    /// Valuation strategy used to mark down defaulted debt. Empty when no markdown applies.
    #[view(getMarkdownStrategy)]
    #[storage_mapper("markdown_strategy")]
    fn markdown_strategy(&self, market_id: MarketId) -> SingleValueMapper<ManagedAddress>;

    /// Receives the supply shares minted from the market fee.
    #[view(getFeeRecipient)]
    #[storage_mapper("fee_recipient")]
    fn fee_recipient(&self) -> SingleValueMapper<ManagedAddress>;

    /// Protocol configuration, read at the point of use. Missing keys read as zero.
    #[view(getConfigValue)]
    #[storage_mapper("config_value")]
    fn config_value(&self, key: ConfigKey) -> SingleValueMapper<BigUint>;

    #[view(isMarketFrozen)]
    #[storage_mapper("market_frozen")]
    fn market_frozen(&self, market_id: MarketId) -> SingleValueMapper<bool>;

    fn get_position(&self, market_id: MarketId, user: &ManagedAddress) -> Position<Self::Api> {
        let mapper = self.position(market_id, user);
        if mapper.is_empty() {
            Position::new()
        } else {
            mapper.get()
        }
    }

    fn get_markdown_state(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
    ) -> MarkdownState<Self::Api> {
        let mapper = self.markdown_state(market_id, borrower);
        if mapper.is_empty() {
            MarkdownState::new()
        } else {
            mapper.get()
        }
    }

    fn get_outstanding_obligation(
        &self,
        market_id: MarketId,
        borrower: &ManagedAddress,
    ) -> Option<RepaymentObligation<Self::Api>> {
        let mapper = self.repayment_obligation(market_id, borrower);
        if mapper.is_empty() {
            return None;
        }

        let obligation = mapper.get();
        if obligation.is_outstanding() {
            Some(obligation)
        } else {
            None
        }
    }

    fn get_config_duration(&self, key: ConfigKey) -> u64 {
        self.config_value(key).get().to_u64().unwrap_or_default()
    }
}
