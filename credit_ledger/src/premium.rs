multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{ConfigKey, Position, RepaymentStatus};

use crate::{accrual, cache::MarketCache, storage, utils};

#[multiversx_sc::module]
pub trait PremiumModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Layers the borrower's risk premium (and the delinquency penalty) on top of base interest.
    ///
    /// Must run after `global_sync`, so the growth of the borrower's debt since the snapshot is the
    /// base interest alone.
    ///
    /// **Process**:
    /// 1. Recovers the average base rate from the debt growth since the snapshot.
    /// 2. Compounds base plus premium rate over the same interval, from the snapshot.
    /// 3. The difference with the current debt is the premium, minted as borrow shares rounded up.
    /// 4. When the borrower is delinquent, penalty interest is added for the delinquent part of the
    ///    interval.
    /// 5. Refreshes the snapshot to the new debt.
    fn accrue_borrower_premium(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        status: RepaymentStatus,
        status_start: u64,
    ) {
        let premium_mapper = self.borrower_premium(cache.market_id, borrower);
        if premium_mapper.is_empty() {
            return;
        }

        let mut premium = premium_mapper.get();
        let elapsed = cache.timestamp - premium.last_accrual_time;
        if elapsed == 0 {
            return;
        }

        let mut position = self.get_position(cache.market_id, borrower);
        if position.has_debt() {
            let current_assets = cache.borrow_assets_up(&position.borrow_shares);
            let snapshot = premium.borrow_assets_at_last_accrual.clone();

            let mut premium_assets = BigUint::zero();
            if snapshot > 0 && premium.rate > 0 {
                let base_growth = self.w_div_down(
                    &self.zero_floor_sub(&current_assets, &snapshot),
                    &snapshot,
                );
                let base_rate = self.w_inverse_taylor_compounded(&base_growth, elapsed);
                let total_rate = base_rate + &premium.rate;
                let total_growth = self.calc_compounded_interest(&snapshot, &total_rate, elapsed);

                premium_assets = self.zero_floor_sub(&(snapshot + total_growth), &current_assets);
            }

            if status.is_delinquent() {
                let penalty_start = core::cmp::max(premium.last_accrual_time, status_start);
                let penalty_elapsed = cache.timestamp.saturating_sub(penalty_start);
                let penalty_rate = self.config_value(ConfigKey::PenaltyRate).get();
                let penalty_assets = self.calc_compounded_interest(
                    &(&current_assets + &premium_assets),
                    &penalty_rate,
                    penalty_elapsed,
                );
                premium_assets += penalty_assets;
            }

            if premium_assets > 0 {
                self.mint_premium(cache, borrower, &mut position, &premium_assets);
            }
        }

        premium.last_accrual_time = cache.timestamp;
        premium.borrow_assets_at_last_accrual = cache.borrow_assets_up(&position.borrow_shares);
        premium_mapper.set(&premium);
    }

    /// Adds premium assets to the borrower's debt exactly like base interest: both borrow and
    /// supply totals grow, the fee share of it goes to the fee recipient.
    fn mint_premium(
        &self,
        cache: &mut MarketCache<Self>,
        borrower: &ManagedAddress,
        position: &mut Position<Self::Api>,
        premium_assets: &BigUint,
    ) {
        let premium_shares = cache.borrow_shares_up(premium_assets);

        position.borrow_shares += &premium_shares;
        cache.market.total_borrow_shares += &premium_shares;
        cache.market.total_borrow_assets += premium_assets;
        cache.market.total_supply_assets += premium_assets;
        self.require_fits_u128(&position.borrow_shares);

        // Stored before fee minting, the fee recipient may be this same borrower
        self.position(cache.market_id, borrower).set(&*position);

        let fee_shares = self.mint_fee_shares(cache, premium_assets);
        cache.require_totals_fit();

        self.premium_accrued_event(
            cache.market_id,
            borrower,
            premium_assets,
            &premium_shares,
            &fee_shares,
        );
    }

    /// Re-bases the premium snapshot after the borrower's shares changed.
    fn refresh_premium_snapshot(
        &self,
        cache: &MarketCache<Self>,
        borrower: &ManagedAddress,
        position: &Position<Self::Api>,
    ) {
        let premium_mapper = self.borrower_premium(cache.market_id, borrower);
        if premium_mapper.is_empty() {
            return;
        }

        premium_mapper.update(|premium| {
            premium.last_accrual_time = cache.timestamp;
            premium.borrow_assets_at_last_accrual = cache.borrow_assets_up(&position.borrow_shares);
        });
    }
}
