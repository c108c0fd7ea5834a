#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_556_926;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Fixed point unit used by every rate and ratio in the ledger
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%

/// Virtual offsets added to both sides of the share/asset exchange rate.
/// They keep the first depositor from inflating the share price.
pub const VIRTUAL_SHARES: u64 = 1_000_000;
pub const VIRTUAL_ASSETS: u64 = 1;

/// Maximum fee taken on accrued interest (25%)
pub const MAX_FEE: u128 = 250_000_000_000_000_000;

/// Upper bound for a borrower premium, per second (~100% APR)
pub const MAX_PREMIUM_RATE: u128 = 31_688_764_615;

/// Upper bound for the delinquency penalty rate, per second (~100% APR)
pub const MAX_PENALTY_RATE: u128 = 31_688_764_615;
