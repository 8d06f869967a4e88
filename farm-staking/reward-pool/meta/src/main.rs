fn main() {
    multiversx_sc_meta_lib::cli_main::<reward_pool::AbiProvider>();
}
