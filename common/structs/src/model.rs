#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub type MarketId = u64;

/// Immutable parameters fixed when a market is created.
///
/// - `loan_token`: the asset supplied by lenders and borrowed on credit.
/// - `rate_model`: contract queried for the per-second base borrow rate. The zero address means no
///   base interest.
/// - `credit_line`: the only address allowed to underwrite borrowers, bill them and settle their debt.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub loan_token: EgldOrEsdtTokenIdentifier<M>,
    pub rate_model: ManagedAddress<M>,
    pub credit_line: ManagedAddress<M>,
}

/// Aggregate state of a market.
///
/// `total_markdown_amount` is the sum of every borrower's currently applied markdown. It is only as
/// fresh as the last touch of each defaulted borrower.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Market<M: ManagedTypeApi> {
    pub total_supply_assets: BigUint<M>,
    pub total_supply_shares: BigUint<M>,
    pub total_borrow_assets: BigUint<M>,
    pub total_borrow_shares: BigUint<M>,
    pub last_update: u64,
    pub fee: BigUint<M>,
    pub total_markdown_amount: BigUint<M>,
}

impl<M: ManagedTypeApi> Market<M> {
    pub fn new(timestamp: u64) -> Self {
        Market {
            total_supply_assets: BigUint::zero(),
            total_supply_shares: BigUint::zero(),
            total_borrow_assets: BigUint::zero(),
            total_borrow_shares: BigUint::zero(),
            last_update: timestamp,
            fee: BigUint::zero(),
            total_markdown_amount: BigUint::zero(),
        }
    }

    pub fn has_borrows(&self) -> bool {
        self.total_borrow_assets > 0
    }

    /// Assets that can leave the market without touching borrowed funds.
    pub fn available_liquidity(&self) -> BigUint<M> {
        if self.total_supply_assets > self.total_borrow_assets {
            &self.total_supply_assets - &self.total_borrow_assets
        } else {
            BigUint::zero()
        }
    }
}

/// A single address' claims in one market. `credit_limit` is the unsecured borrowing capacity
/// assigned by the credit line. Records are never removed, only zeroed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Position<M: ManagedTypeApi> {
    pub supply_shares: BigUint<M>,
    pub borrow_shares: BigUint<M>,
    pub credit_limit: BigUint<M>,
}

impl<M: ManagedTypeApi> Position<M> {
    pub fn new() -> Self {
        Position {
            supply_shares: BigUint::zero(),
            borrow_shares: BigUint::zero(),
            credit_limit: BigUint::zero(),
        }
    }

    pub fn has_debt(&self) -> bool {
        self.borrow_shares > 0
    }
}

impl<M: ManagedTypeApi> Default for Position<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot used to layer a per-borrower premium on top of the market base rate.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct BorrowerPremium<M: ManagedTypeApi> {
    pub last_accrual_time: u64,
    /// Per-second premium rate, WAD scaled
    pub rate: BigUint<M>,
    pub borrow_assets_at_last_accrual: BigUint<M>,
}

impl<M: ManagedTypeApi> BorrowerPremium<M> {
    pub fn new(timestamp: u64, rate: BigUint<M>, borrow_assets: BigUint<M>) -> Self {
        BorrowerPremium {
            last_accrual_time: timestamp,
            rate,
            borrow_assets_at_last_accrual: borrow_assets,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PaymentCycle {
    pub end_date: u64,
}

/// Bill posted for one borrower when a cycle is closed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct RepaymentObligation<M: ManagedTypeApi> {
    pub payment_cycle_id: usize,
    pub amount_due: BigUint<M>,
    pub ending_balance: BigUint<M>,
}

impl<M: ManagedTypeApi> RepaymentObligation<M> {
    pub fn is_outstanding(&self) -> bool {
        self.amount_due > 0
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarkdownState<M: ManagedTypeApi> {
    pub last_calculated_markdown: BigUint<M>,
    /// Zero while the borrower has never been observed in default
    pub default_start_time: u64,
}

impl<M: ManagedTypeApi> MarkdownState<M> {
    pub fn new() -> Self {
        MarkdownState {
            last_calculated_markdown: BigUint::zero(),
            default_start_time: 0,
        }
    }

    pub fn is_default_recorded(&self) -> bool {
        self.default_start_time > 0
    }
}

impl<M: ManagedTypeApi> Default for MarkdownState<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived from the borrower's obligation age, never stored.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RepaymentStatus {
    Current,
    GracePeriod,
    Delinquent,
    Default,
}

impl RepaymentStatus {
    pub fn is_delinquent(&self) -> bool {
        *self == RepaymentStatus::Delinquent
    }

    pub fn is_default(&self) -> bool {
        *self == RepaymentStatus::Default
    }
}

/// Protocol wide values read from storage at the point of use.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigKey {
    GracePeriod,
    DelinquencyPeriod,
    MinBorrow,
    PenaltyRate,
    CycleDuration,
}

/// Piecewise utilization curve served by the rate model contract.
///
/// All values are annual rates or utilization ratios with WAD precision.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct InterestRateModel<M: ManagedTypeApi> {
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub slope3: ManagedDecimal<M, NumDecimals>,
    pub mid_utilization: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
}
