multiversx_sc::imports!();

use crate::config::RewardTrack;

#[multiversx_sc::module]
pub trait RewardTracksModule: crate::config::ConfigModule + rewards::RewardsModule {
    #[view(getClaimableReward)]
    fn claimable_reward_for_token(
        &self,
        token_id: TokenIdentifier,
        user: ManagedAddress,
    ) -> BigUint {
        let track = self.track_for_token(&token_id);
        self.claimable_reward(track, &user).get()
    }

    fn custody_balance(&self, token_id: &TokenIdentifier) -> BigUint {
        let sc_address = self.blockchain().get_sc_address();
        self.blockchain().get_esdt_balance(&sc_address, token_id, 0)
    }

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[view(getStaked)]
    #[storage_mapper("staked")]
    fn staked(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getRewardPerShare)]
    #[storage_mapper("rewardPerShare")]
    fn reward_per_share(&self, track: RewardTrack) -> SingleValueMapper<BigUint>;

    /// Scaled reward left over by the integer division of the last allocation.
    #[storage_mapper("rewardPerShareRemainder")]
    fn reward_per_share_remainder(&self, track: RewardTrack) -> SingleValueMapper<BigUint>;

    #[view(getTotalFarmRewards)]
    #[storage_mapper("totalFarmRewards")]
    fn total_farm_rewards(&self, track: RewardTrack) -> SingleValueMapper<BigUint>;

    #[view(getTotalClaimedRewards)]
    #[storage_mapper("totalClaimedRewards")]
    fn total_claimed_rewards(&self, track: RewardTrack) -> SingleValueMapper<BigUint>;

    #[view(getRewardDebt)]
    #[storage_mapper("rewardDebt")]
    fn reward_debt(&self, track: RewardTrack, user: &ManagedAddress)
        -> SingleValueMapper<BigUint>;

    #[storage_mapper("claimableReward")]
    fn claimable_reward(
        &self,
        track: RewardTrack,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
