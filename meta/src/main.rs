fn main() {
    multiversx_sc_meta_lib::cli_main::<public_funding::AbiProvider>();
}
