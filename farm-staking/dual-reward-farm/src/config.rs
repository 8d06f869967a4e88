multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{ERROR_NOT_INITIALIZED, ERROR_UNKNOWN_REWARD_TOKEN};
use common_structs::PoolId;

#[derive(
    TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug,
)]
pub enum RewardTrack {
    /// Released over time by the linear distributor.
    Linear,
    /// Harvested per block from the reward pool.
    BlockPool,
}

pub const REWARD_TRACKS: [RewardTrack; 2] = [RewardTrack::Linear, RewardTrack::BlockPool];

#[multiversx_sc::module]
pub trait ConfigModule {
    fn require_initialized(&self) {
        require!(self.initialized().get(), ERROR_NOT_INITIALIZED);
    }

    fn track_for_token(&self, token_id: &TokenIdentifier) -> RewardTrack {
        for track in REWARD_TRACKS {
            if self.reward_token_id(track).get() == *token_id {
                return track;
            }
        }

        sc_panic!(ERROR_UNKNOWN_REWARD_TOKEN);
    }

    #[view(isInitialized)]
    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;

    #[view(getName)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getStakingTokenId)]
    #[storage_mapper("stakingTokenId")]
    fn staking_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getDistributorAddress)]
    #[storage_mapper("distributorAddress")]
    fn distributor_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewardPoolAddress)]
    #[storage_mapper("rewardPoolAddress")]
    fn reward_pool_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolId)]
    #[storage_mapper("poolId")]
    fn pool_id(&self) -> SingleValueMapper<PoolId>;

    #[view(getRewardTokenId)]
    #[storage_mapper("rewardTokenId")]
    fn reward_token_id(&self, track: RewardTrack) -> SingleValueMapper<TokenIdentifier>;
}
