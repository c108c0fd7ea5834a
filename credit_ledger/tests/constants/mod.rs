use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const SECONDS_PER_DAY: u64 = 86_400; // 24 * 60 * 60
pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Block timestamp every test starts from
pub const START_TIMESTAMP: u64 = 1_000_000;

pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const MAX_BORROW_RATE: u128 = WAD; // 100%
pub const BASE_BORROW_RATE: u128 = WAD / 100; // 1%
pub const SLOPE1: u128 = WAD * 4 / 100; // 4%
pub const SLOPE2: u128 = WAD / 10; // 10%
pub const SLOPE3: u128 = WAD / 2; // 50%
pub const MID_UTILIZATION: u128 = WAD / 2; // 50%
pub const OPTIMAL_UTILIZATION: u128 = WAD * 9 / 10; // 90%

pub const GRACE_PERIOD: u64 = 5 * SECONDS_PER_DAY;
pub const DELINQUENCY_PERIOD: u64 = 10 * SECONDS_PER_DAY;
pub const CYCLE_DURATION: u64 = 30 * SECONDS_PER_DAY;
pub const MARKDOWN_DURATION: u64 = 70 * SECONDS_PER_DAY;

/// ~10% APR, per second
pub const PREMIUM_RATE: u64 = 3_168_876_461;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const ONE_USDC: u64 = 1_000_000;

pub const INITIAL_BALANCE: u64 = 1_000_000 * ONE_USDC;
pub const SUPPLY_AMOUNT: u64 = 100_000 * ONE_USDC;
pub const CREDIT_LIMIT: u64 = 50_000 * ONE_USDC;
pub const BORROW_AMOUNT: u64 = 10_000 * ONE_USDC;

pub const CREDIT_LEDGER_PATH: MxscPath = MxscPath::new("output/credit-ledger.mxsc.json");
pub const RATE_MODEL_PATH: MxscPath = MxscPath::new("../rate_model/output/rate-model.mxsc.json");
pub const MARKDOWN_STRATEGY_PATH: MxscPath =
    MxscPath::new("../markdown_strategy/output/markdown-strategy.mxsc.json");
pub const REPAY_CALLBACK_MOCK_PATH: MxscPath =
    MxscPath::new("../repay_callback_mock/output/repay-callback-mock.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const CREDIT_LINE_ADDRESS: TestAddress = TestAddress::new("credit-line");
pub const FEE_RECIPIENT_ADDRESS: TestAddress = TestAddress::new("fee-recipient");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const LATE_SUPPLIER_ADDRESS: TestAddress = TestAddress::new("late-supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const SECOND_BORROWER_ADDRESS: TestAddress = TestAddress::new("second-borrower");
