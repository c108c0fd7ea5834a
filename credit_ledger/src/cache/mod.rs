use common_structs::{Market, MarketId, MarketParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of one market's state, cached from on-chain storage for the duration of a call.
///
/// **Scope**: The aggregate totals of a single market plus its immutable parameters.
///
/// **Goal**: Every step of a call (base accrual, premium, markdown, the operation itself) mutates
/// the same in-memory totals, and they are written back together when the cache is dropped.
/// The cache must be dropped before tokens leave the contract or a mutating external call is made.
pub struct MarketCache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub market_id: MarketId,
    pub market: Market<C::Api>,
    pub params: MarketParams<C::Api>,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
}

impl<'a, C> MarketCache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Loads the market from storage.
    ///
    /// # Arguments
    /// - `sc_ref`: Reference to the contract implementing `Storage` and `SharedMathModule`.
    /// - `market_id`: The market to load, it must have been created.
    pub fn new(sc_ref: &'a C, market_id: MarketId) -> Self {
        MarketCache {
            market_id,
            market: sc_ref.market(market_id).get(),
            params: sc_ref.market_params(market_id).get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            sc_ref,
        }
    }
}

impl<C> Drop for MarketCache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the market totals back to on-chain storage when the cache is dropped.
    fn drop(&mut self) {
        self.sc_ref.market(self.market_id).set(&self.market);
    }
}

impl<C> MarketCache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Checks if the contract holds enough of the loan token to pay out `amount`.
    pub fn has_reserves(&self, amount: &BigUint<C::Api>) -> bool {
        let balance = self
            .sc_ref
            .blockchain()
            .get_sc_balance(&self.params.loan_token, 0);
        balance >= *amount
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.loan_token == *asset
    }

    pub fn is_credit_line(&self, address: &ManagedAddress<C::Api>) -> bool {
        self.params.credit_line == *address
    }

    pub fn supply_shares_down(&self, assets: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_shares_down(
            assets,
            &self.market.total_supply_assets,
            &self.market.total_supply_shares,
        )
    }

    pub fn supply_shares_up(&self, assets: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_shares_up(
            assets,
            &self.market.total_supply_assets,
            &self.market.total_supply_shares,
        )
    }

    pub fn supply_assets_down(&self, shares: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_assets_down(
            shares,
            &self.market.total_supply_assets,
            &self.market.total_supply_shares,
        )
    }

    pub fn borrow_shares_down(&self, assets: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_shares_down(
            assets,
            &self.market.total_borrow_assets,
            &self.market.total_borrow_shares,
        )
    }

    pub fn borrow_shares_up(&self, assets: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_shares_up(
            assets,
            &self.market.total_borrow_assets,
            &self.market.total_borrow_shares,
        )
    }

    pub fn borrow_assets_down(&self, shares: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_assets_down(
            shares,
            &self.market.total_borrow_assets,
            &self.market.total_borrow_shares,
        )
    }

    pub fn borrow_assets_up(&self, shares: &BigUint<C::Api>) -> BigUint<C::Api> {
        self.sc_ref.to_assets_up(
            shares,
            &self.market.total_borrow_assets,
            &self.market.total_borrow_shares,
        )
    }

    /// Aborts when any of the totals outgrew the 128 bit width.
    pub fn require_totals_fit(&self) {
        self.sc_ref.require_fits_u128(&self.market.total_supply_assets);
        self.sc_ref.require_fits_u128(&self.market.total_supply_shares);
        self.sc_ref.require_fits_u128(&self.market.total_borrow_assets);
        self.sc_ref.require_fits_u128(&self.market.total_borrow_shares);
    }
}
