use crate::constants::*;

use common_proxies::{
    proxy_credit_ledger, proxy_markdown_strategy, proxy_rate_model, proxy_repay_callback,
};
use common_structs::{
    ConfigKey, MarkdownState, Market, Position, RepaymentObligation, RepaymentStatus,
};
use multiversx_sc::{
    imports::{MultiValue2, OptionalValue},
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer, ManagedVec,
        MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    },
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CREDIT_LEDGER_PATH, credit_ledger::ContractBuilder);
    blockchain.register_contract(RATE_MODEL_PATH, rate_model::ContractBuilder);
    blockchain.register_contract(MARKDOWN_STRATEGY_PATH, markdown_strategy::ContractBuilder);
    blockchain.register_contract(REPAY_CALLBACK_MOCK_PATH, repay_callback_mock::ContractBuilder);

    blockchain
}

pub struct LedgerTestState {
    pub world: ScenarioWorld,
    pub ledger_sc: ManagedAddress<StaticApi>,
    pub rate_model_sc: ManagedAddress<StaticApi>,
    pub markdown_strategy_sc: ManagedAddress<StaticApi>,
    pub market_id: u64,
}

impl LedgerTestState {
    /// Ledger with one USDC market that accrues no base interest, so balances stay exact.
    pub fn new() -> Self {
        Self::setup(false)
    }

    /// Ledger with one USDC market priced by the deployed rate model.
    pub fn new_with_interest() -> Self {
        Self::setup(true)
    }

    fn setup(with_interest: bool) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(START_TIMESTAMP);

        let rate_model_sc = setup_rate_model(&mut world);
        let markdown_strategy_sc = setup_markdown_strategy(&mut world);
        let ledger_sc = setup_ledger(&mut world);

        let rate_model = if with_interest {
            rate_model_sc.clone()
        } else {
            ManagedAddress::zero()
        };

        let market_id = world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .create_market(
                EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
                rate_model,
                CREDIT_LINE_ADDRESS.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run();

        Self {
            world,
            ledger_sc,
            rate_model_sc,
            markdown_strategy_sc,
            market_id,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Owner configuration

    pub fn set_config(&mut self, key: ConfigKey, value: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_config(key, BigUint::from(value as u128))
            .run();
    }

    pub fn set_config_error(&mut self, key: ConfigKey, value: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_config(key, BigUint::from(value as u128))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Grace, delinquency and cycle durations used by the billing tests.
    pub fn set_billing_periods(&mut self) {
        self.set_config(ConfigKey::GracePeriod, GRACE_PERIOD);
        self.set_config(ConfigKey::DelinquencyPeriod, DELINQUENCY_PERIOD);
        self.set_config(ConfigKey::CycleDuration, CYCLE_DURATION);
    }

    pub fn set_fee(&mut self, fee: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_fee(self.market_id, BigUint::from(fee))
            .run();
    }

    pub fn set_fee_recipient(&mut self, recipient: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_fee_recipient(recipient.to_managed_address())
            .run();
    }

    pub fn set_market_frozen(&mut self, frozen: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_market_frozen(self.market_id, frozen)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .unpause_endpoint()
            .run();
    }

    // Credit line operations

    pub fn set_markdown_strategy(&mut self) {
        let strategy = self.markdown_strategy_sc.clone();
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_markdown_strategy(self.market_id, OptionalValue::Some(strategy))
            .run();
    }

    pub fn clear_markdown_strategy(&mut self) {
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_markdown_strategy(self.market_id, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .run();
    }

    pub fn set_credit_line(&mut self, borrower: TestAddress, credit_limit: u64, premium_rate: u64) {
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_credit_line(
                self.market_id,
                borrower.to_managed_address(),
                BigUint::from(credit_limit),
                BigUint::from(premium_rate),
            )
            .run();
    }

    pub fn set_credit_line_error(
        &mut self,
        from: TestAddress,
        borrower: TestAddress,
        credit_limit: u64,
        premium_rate: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .set_credit_line(
                self.market_id,
                borrower.to_managed_address(),
                BigUint::from(credit_limit),
                BigUint::from(premium_rate as u128),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Closes a cycle ending at `end_date` and bills every `(borrower, bps, ending balance)` entry.
    pub fn close_cycle(&mut self, end_date: u64, obligations: &[(TestAddress, u64, u64)]) -> usize {
        let (borrowers, bps, balances) = obligation_vecs(obligations);
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .close_cycle_and_post_obligations(self.market_id, end_date, borrowers, bps, balances)
            .returns(ReturnsResult)
            .run()
    }

    pub fn close_cycle_error(
        &mut self,
        from: TestAddress,
        end_date: u64,
        borrowers: ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
        bps: ManagedVec<StaticApi, u64>,
        balances: ManagedVec<StaticApi, BigUint<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .close_cycle_and_post_obligations(self.market_id, end_date, borrowers, bps, balances)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn add_obligations(&mut self, obligations: &[(TestAddress, u64, u64)]) {
        let (borrowers, bps, balances) = obligation_vecs(obligations);
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .add_obligations_to_latest_cycle(self.market_id, borrowers, bps, balances)
            .run();
    }

    pub fn add_obligations_error(
        &mut self,
        obligations: &[(TestAddress, u64, u64)],
        error_message: &[u8],
    ) {
        let (borrowers, bps, balances) = obligation_vecs(obligations);
        self.world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .add_obligations_to_latest_cycle(self.market_id, borrowers, bps, balances)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Settles `borrower`, optionally paying part of the debt in the same call.
    pub fn settle_account(
        &mut self,
        borrower: TestAddress,
        payment: u64,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let call = self
            .world
            .tx()
            .from(CREDIT_LINE_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .settle_account(self.market_id, borrower.to_managed_address());

        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = if payment > 0 {
            call.single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(payment))
                .returns(ReturnsResult)
                .run()
        } else {
            call.returns(ReturnsResult).run()
        };

        result.into_tuple()
    }

    pub fn settle_account_error(
        &mut self,
        from: TestAddress,
        borrower: TestAddress,
        payment: u64,
        error_message: &[u8],
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .settle_account(self.market_id, borrower.to_managed_address());

        if payment > 0 {
            call.single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(payment))
                .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                .run();
        } else {
            call.returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                .run();
        }
    }

    // Supplier and borrower operations

    pub fn supply(&mut self, from: TestAddress, amount: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .supply(self.market_id, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn supply_error(&mut self, from: TestAddress, amount: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .supply(self.market_id, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: TestAddress,
        assets: u64,
        shares: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .withdraw(
                self.market_id,
                BigUint::from(assets),
                shares,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn withdraw_error(&mut self, from: TestAddress, assets: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .withdraw(
                self.market_id,
                BigUint::from(assets),
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: TestAddress,
        assets: u64,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .borrow(
                self.market_id,
                BigUint::from(assets),
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn borrow_error(&mut self, from: TestAddress, assets: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .borrow(
                self.market_id,
                BigUint::from(assets),
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Repays by assets: the whole payment goes towards the debt.
    pub fn repay(
        &mut self,
        from: TestAddress,
        amount: u64,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .repay(
                self.market_id,
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    /// Repays an exact number of shares, the surplus of `amount` is refunded.
    pub fn repay_shares(
        &mut self,
        from: TestAddress,
        shares: BigUint<StaticApi>,
        amount: u64,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .repay(
                self.market_id,
                shares,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn repay_error(&mut self, from: TestAddress, amount: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .repay(
                self.market_id,
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .accrue_interest(self.market_id)
            .run();
    }

    pub fn accrue_borrower_premium(&mut self, borrower: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .accrue_premium_endpoint(self.market_id, borrower.to_managed_address())
            .run();
    }

    pub fn touch_borrower(&mut self, borrower: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .touch_borrower_endpoint(self.market_id, borrower.to_managed_address())
            .run();
    }

    pub fn touch_borrowers(&mut self, borrowers: &[TestAddress]) {
        let mut args = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for borrower in borrowers {
            args.push(borrower.to_managed_address());
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .touch_borrowers(self.market_id, args)
            .run();
    }

    // Repay callback flow

    pub fn deploy_repay_callback_mock(&mut self) -> ManagedAddress<StaticApi> {
        let ledger = self.ledger_sc.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_repay_callback::RepayCallbackProxy)
            .init(
                ledger,
                self.market_id,
                EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
            )
            .code(REPAY_CALLBACK_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run()
    }

    pub fn set_short_repayment(&mut self, mock: &ManagedAddress<StaticApi>, short: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(mock)
            .typed(proxy_repay_callback::RepayCallbackProxy)
            .set_short_repayment(short)
            .run();
    }

    /// `from` funds the mock with `amount`, the mock then repays `borrower` through the callback.
    pub fn repay_through_callback(
        &mut self,
        mock: &ManagedAddress<StaticApi>,
        from: TestAddress,
        borrower: TestAddress,
        amount: u64,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let result: MultiValue2<BigUint<StaticApi>, BigUint<StaticApi>> = self
            .world
            .tx()
            .from(from)
            .to(mock)
            .typed(proxy_repay_callback::RepayCallbackProxy)
            .repay(
                BigUint::from(amount),
                borrower.to_managed_address(),
                ManagedBuffer::from(b"swap-route"),
            )
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn repay_through_callback_error(
        &mut self,
        mock: &ManagedAddress<StaticApi>,
        from: TestAddress,
        borrower: TestAddress,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(mock)
            .typed(proxy_repay_callback::RepayCallbackProxy)
            .repay(
                BigUint::from(amount),
                borrower.to_managed_address(),
                ManagedBuffer::from(b"swap-route"),
            )
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views

    pub fn get_market(&mut self) -> Market<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .market(self.market_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_position(&mut self, account: TestAddress) -> Position<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_position_view(self.market_id, account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrower_assets(&mut self, borrower: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_borrower_assets(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_supply_assets(&mut self, supplier: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_supply_assets(self.market_id, supplier.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_repayment_status(&mut self, borrower: TestAddress) -> (RepaymentStatus, u64) {
        let result: MultiValue2<RepaymentStatus, u64> = self
            .world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_repayment_status_view(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run();

        result.into_tuple()
    }

    pub fn get_repayment_obligation(
        &mut self,
        borrower: TestAddress,
    ) -> Option<RepaymentObligation<StaticApi>> {
        let result: OptionalValue<RepaymentObligation<StaticApi>> = self
            .world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_repayment_obligation(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run();

        result.into_option()
    }

    pub fn has_borrower_premium(&mut self, borrower: TestAddress) -> bool {
        let result: OptionalValue<common_structs::BorrowerPremium<StaticApi>> = self
            .world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_borrower_premium(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run();

        result.into_option().is_some()
    }

    pub fn get_markdown_state(&mut self, borrower: TestAddress) -> MarkdownState<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_markdown_state_view(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrower_markdown(&mut self, borrower: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_borrower_markdown(self.market_id, borrower.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_payment_cycle_count(&mut self) -> usize {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_payment_cycle_count(self.market_id)
            .returns(ReturnsResult)
            .run()
    }

    /// Supply assets, supply shares, borrow assets and borrow shares as if accrued now.
    pub fn get_expected_market_balances(
        &mut self,
    ) -> (
        BigUint<StaticApi>,
        BigUint<StaticApi>,
        BigUint<StaticApi>,
        BigUint<StaticApi>,
    ) {
        self.world
            .query()
            .to(&self.ledger_sc)
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .get_expected_market_balances(self.market_id)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn check_token_balance(&mut self, account: TestAddress, amount: u64) {
        self.world
            .check_account(account)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(amount));
    }

    pub fn check_ledger_balance(&mut self, amount: u64) {
        let ledger = self.ledger_sc.to_address();
        self.world
            .check_account(&ledger)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(amount));
    }
}

fn obligation_vecs(
    obligations: &[(TestAddress, u64, u64)],
) -> (
    ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
    ManagedVec<StaticApi, u64>,
    ManagedVec<StaticApi, BigUint<StaticApi>>,
) {
    let mut borrowers = ManagedVec::new();
    let mut bps = ManagedVec::new();
    let mut balances = ManagedVec::new();

    for (borrower, repayment_bps, ending_balance) in obligations {
        borrowers.push(borrower.to_managed_address());
        bps.push(*repayment_bps);
        balances.push(BigUint::from(*ending_balance));
    }

    (borrowers, bps, balances)
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(FEE_RECIPIENT_ADDRESS).nonce(1);

    for account in [
        CREDIT_LINE_ADDRESS,
        SUPPLIER_ADDRESS,
        LATE_SUPPLIER_ADDRESS,
        BORROWER_ADDRESS,
        SECOND_BORROWER_ADDRESS,
    ] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE));
    }
}

pub fn setup_rate_model(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_rate_model::RateModelProxy)
        .init(
            BigUint::from(MAX_BORROW_RATE),
            BigUint::from(BASE_BORROW_RATE),
            BigUint::from(SLOPE1),
            BigUint::from(SLOPE2),
            BigUint::from(SLOPE3),
            BigUint::from(MID_UTILIZATION),
            BigUint::from(OPTIMAL_UTILIZATION),
        )
        .code(RATE_MODEL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_markdown_strategy(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_markdown_strategy::MarkdownStrategyProxy)
        .init(MARKDOWN_DURATION)
        .code(MARKDOWN_STRATEGY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_ledger(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_credit_ledger::CreditLedgerProxy)
        .init(FEE_RECIPIENT_ADDRESS.to_managed_address())
        .code(CREDIT_LEDGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Absolute difference helper for interest bearing assertions.
pub fn abs_diff(a: &BigUint<StaticApi>, b: &BigUint<StaticApi>) -> BigUint<StaticApi> {
    if a > b {
        a - b
    } else {
        b - a
    }
}
