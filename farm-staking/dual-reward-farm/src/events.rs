multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::config::RewardTrack;

#[derive(TypeAbi, TopEncode)]
pub struct RewardsAllocatedEvent<M: ManagedTypeApi> {
    total_staked: BigUint<M>,
    amount: BigUint<M>,
    reward_per_share: BigUint<M>,
    block: u64,
    epoch: u64,
    timestamp: u64,
}

#[multiversx_sc::module]
pub trait EventsModule {
    fn emit_rewards_allocated_event(
        &self,
        track: RewardTrack,
        total_staked: &BigUint,
        amount: &BigUint,
        reward_per_share: &BigUint,
    ) {
        self.rewards_allocated_event(
            track,
            &RewardsAllocatedEvent {
                total_staked: total_staked.clone(),
                amount: amount.clone(),
                reward_per_share: reward_per_share.clone(),
                block: self.blockchain().get_block_nonce(),
                epoch: self.blockchain().get_block_epoch(),
                timestamp: self.blockchain().get_block_timestamp(),
            },
        );
    }

    #[event("stake")]
    fn stake_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] reward_token_id: &TokenIdentifier,
        amount: &BigUint,
    );

    #[event("rewardsAllocated")]
    fn rewards_allocated_event(
        &self,
        #[indexed] track: RewardTrack,
        rewards_allocated: &RewardsAllocatedEvent<Self::Api>,
    );
}
