fn main() {
    multiversx_sc_meta_lib::cli_main::<dual_reward_farm::AbiProvider>();
}
