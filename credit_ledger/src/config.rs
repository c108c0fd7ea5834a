multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{MAX_FEE, MAX_PENALTY_RATE};
use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_CONFIG_VALUE, ERROR_MAX_FEE_EXCEEDED};
use common_structs::{ConfigKey, Market, MarketId, MarketParams};

use crate::{accrual, storage, utils};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Creates a market for `loan_token` governed by `credit_line`.
    ///
    /// # Arguments
    /// - `loan_token`: EGLD or a valid ESDT identifier.
    /// - `rate_model`: Base rate source, the zero address disables base interest.
    /// - `credit_line`: The only address allowed to underwrite, bill and settle borrowers.
    ///
    /// # Returns
    /// - `MarketId`: The id of the new market.
    #[only_owner]
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        loan_token: EgldOrEsdtTokenIdentifier,
        rate_model: ManagedAddress,
        credit_line: ManagedAddress,
    ) -> MarketId {
        require!(loan_token.is_valid(), ERROR_INVALID_ASSET);
        self.require_non_zero_address(&credit_line);

        let market_id = self.last_market_id().update(|last| {
            *last += 1;
            *last
        });

        let params = MarketParams {
            loan_token,
            rate_model,
            credit_line,
        };
        let timestamp = self.blockchain().get_block_timestamp();

        self.market_params(market_id).set(&params);
        self.market(market_id).set(Market::new(timestamp));

        self.create_market_event(market_id, &params);

        market_id
    }

    /// Sets the share of accrued interest minted to the fee recipient, WAD scaled.
    ///
    /// Interest up to this block is accrued at the previous fee.
    #[only_owner]
    #[endpoint(setFee)]
    fn set_fee(&self, market_id: MarketId, fee: BigUint) {
        require!(fee <= BigUint::from(MAX_FEE), ERROR_MAX_FEE_EXCEEDED);

        let mut cache = self.load_market(market_id);
        self.global_sync(&mut cache);

        cache.market.fee = fee.clone();

        self.set_fee_event(market_id, &fee);
        self.emit_market_update(&cache);
    }

    #[only_owner]
    #[endpoint(setFeeRecipient)]
    fn set_fee_recipient(&self, fee_recipient: ManagedAddress) {
        self.require_non_zero_address(&fee_recipient);

        self.fee_recipient().set(&fee_recipient);
        self.set_fee_recipient_event(&fee_recipient);
    }

    /// Stores a protocol configuration value.
    ///
    /// Durations are seconds and must fit in a u64, `PenaltyRate` is a per-second WAD rate capped
    /// at `MAX_PENALTY_RATE`, `MinBorrow` is in loan token units.
    #[only_owner]
    #[endpoint(setConfig)]
    fn set_config(&self, key: ConfigKey, value: BigUint) {
        match key {
            ConfigKey::GracePeriod | ConfigKey::DelinquencyPeriod | ConfigKey::CycleDuration => {
                require!(value.to_u64().is_some(), ERROR_INVALID_CONFIG_VALUE);
            },
            ConfigKey::PenaltyRate => {
                require!(
                    value <= BigUint::from(MAX_PENALTY_RATE),
                    ERROR_INVALID_CONFIG_VALUE
                );
            },
            ConfigKey::MinBorrow => {},
        }

        self.config_value(key).set(&value);
        self.set_config_event(key, &value);
    }

    /// Frozen markets reject supply and borrow. Repay, withdraw and settlement keep working.
    #[only_owner]
    #[endpoint(setMarketFrozen)]
    fn set_market_frozen(&self, market_id: MarketId, frozen: bool) {
        self.require_market_created(market_id);

        self.market_frozen(market_id).set(frozen);
        self.set_market_frozen_event(market_id, frozen);
    }
}
