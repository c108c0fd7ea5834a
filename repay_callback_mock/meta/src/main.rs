fn main() {
    multiversx_sc_meta_lib::cli_main::<repay_callback_mock::AbiProvider>();
}
