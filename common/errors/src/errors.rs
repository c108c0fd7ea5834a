#![no_std]

// Authorization

pub static ERROR_NOT_CREDIT_LINE: &[u8] = b"Caller is not the credit line of this market.";

// Validation

pub static ERROR_INCONSISTENT_INPUT: &[u8] = b"Input lengths are inconsistent.";

pub static ERROR_INVALID_REPAYMENT_BPS: &[u8] = b"Repayment basis points exceed 100%.";

pub static ERROR_CYCLE_END_IN_FUTURE: &[u8] = b"Payment cycle end date is in the future.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INCONSISTENT_AMOUNTS: &[u8] = b"Exactly one of assets or shares must be zero.";

pub static ERROR_MAX_FEE_EXCEEDED: &[u8] = b"Fee exceeds the maximum allowed.";

pub static ERROR_MAX_PREMIUM_RATE_EXCEEDED: &[u8] = b"Premium rate exceeds the maximum allowed.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset for this market.";

pub static ERROR_MARKET_NOT_CREATED: &[u8] = b"Market not created.";

pub static ERROR_INVALID_CONFIG_VALUE: &[u8] = b"Invalid configuration value.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repayment exceeds the outstanding debt.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the repaid shares.";

pub static ERROR_INVALID_UTILIZATION_RANGE: &[u8] = b"Invalid utilization range.";

pub static ERROR_INVALID_MARKDOWN_DURATION: &[u8] = b"Markdown duration must be greater than zero.";

// State

pub static ERROR_OUTSTANDING_OBLIGATION: &[u8] = b"Borrower has an outstanding repayment obligation.";

pub static ERROR_NOTHING_TO_REPAY: &[u8] = b"Nothing to repay.";

pub static ERROR_CYCLE_TOO_SOON: &[u8] = b"Payment cycle closed before the minimum cycle duration.";

pub static ERROR_NO_PAYMENT_CYCLE: &[u8] = b"No payment cycle has been closed yet.";

pub static ERROR_MARKET_FROZEN: &[u8] = b"Market is frozen.";

pub static ERROR_INSUFFICIENT_CREDIT: &[u8] = b"Borrow exceeds the available credit limit.";

pub static ERROR_BELOW_MIN_BORROW: &[u8] = b"Debt is below the minimum borrow amount.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares in this position.";

// Liquidity

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

// Arithmetic

pub static ERROR_MAX_UINT128_EXCEEDED: &[u8] = b"Value exceeds the maximum 128 bit width.";

pub static ERROR_INVALID_CALLBACK_REPAYMENT: &[u8] = b"Invalid repayment from the repay callback.";
