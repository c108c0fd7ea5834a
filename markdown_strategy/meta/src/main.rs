fn main() {
    multiversx_sc_meta_lib::cli_main::<markdown_strategy::AbiProvider>();
}
