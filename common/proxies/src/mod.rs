#![no_std]

pub mod proxy_credit_ledger;
pub mod proxy_markdown_strategy;
pub mod proxy_rate_model;
pub mod proxy_repay_callback;
