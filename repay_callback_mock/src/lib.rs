#![no_std]

use common_constants::BPS;
use common_proxies::proxy_credit_ledger;

multiversx_sc::imports!();

/// Share of the requested amount sent back when short repayment is on
pub const SHORT_REPAYMENT_BPS: u64 = 9_000;

#[multiversx_sc::contract]
pub trait RepayCallbackMock {
    #[init]
    fn init(&self, ledger: ManagedAddress, market_id: u64, token: EgldOrEsdtTokenIdentifier) {
        self.ledger().set(ledger);
        self.market_id().set(market_id);
        self.token().set(token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Starts a repayment on the ledger, which calls back `onCreditRepay` to collect the tokens.
    // Attached tokens stay here until the ledger asks for them.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        assets: BigUint,
        on_behalf: ManagedAddress,
        data: ManagedBuffer,
    ) -> MultiValue2<BigUint, BigUint> {
        self.tx()
            .to(self.ledger().get())
            .typed(proxy_credit_ledger::CreditLedgerProxy)
            .repay_with_callback(self.market_id().get(), assets, on_behalf, data)
            .returns(ReturnsResult)
            .sync_call()
    }

    // Success case: hands the ledger exactly what it asked for
    #[endpoint(onCreditRepay)]
    fn on_credit_repay(&self, assets: BigUint, _data: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let amount = if self.short_repayment().get() {
            assets * SHORT_REPAYMENT_BPS / BPS
        } else {
            assets
        };

        let payment = EgldOrEsdtTokenPayment::new(self.token().get(), 0, amount);
        self.tx().to(&caller).payment(payment).transfer();
    }

    // Test a repayment that sends back less than the ledger requested, the ledger should reject it
    #[endpoint(setShortRepayment)]
    fn set_short_repayment(&self, short: bool) {
        self.short_repayment().set(short);
    }

    #[storage_mapper("ledger")]
    fn ledger(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("market_id")]
    fn market_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("short_repayment")]
    fn short_repayment(&self) -> SingleValueMapper<bool>;
}
