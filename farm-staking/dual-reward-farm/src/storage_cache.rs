multiversx_sc::imports!();

use crate::config::RewardTrack;
use crate::reward_tracks::RewardTracksModule;

/// Global accounting of one reward track. The mutable fields are written back when the
/// cache goes out of scope.
pub struct RewardTrackCache<'a, C: RewardTracksModule> {
    sc_ref: &'a C,
    pub track: RewardTrack,
    pub reward_token_id: TokenIdentifier<C::Api>,
    pub reward_per_share: BigUint<C::Api>,
    pub reward_per_share_remainder: BigUint<C::Api>,
    pub total_farm_rewards: BigUint<C::Api>,
    pub total_claimed_rewards: BigUint<C::Api>,
}

impl<'a, C: RewardTracksModule> RewardTrackCache<'a, C> {
    pub fn new(sc_ref: &'a C, track: RewardTrack) -> Self {
        RewardTrackCache {
            track,
            reward_token_id: sc_ref.reward_token_id(track).get(),
            reward_per_share: sc_ref.reward_per_share(track).get(),
            reward_per_share_remainder: sc_ref.reward_per_share_remainder(track).get(),
            total_farm_rewards: sc_ref.total_farm_rewards(track).get(),
            total_claimed_rewards: sc_ref.total_claimed_rewards(track).get(),
            sc_ref,
        }
    }
}

impl<'a, C: RewardTracksModule> Drop for RewardTrackCache<'a, C> {
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref
            .reward_per_share(self.track)
            .set(&self.reward_per_share);
        self.sc_ref
            .reward_per_share_remainder(self.track)
            .set(&self.reward_per_share_remainder);
        self.sc_ref
            .total_farm_rewards(self.track)
            .set(&self.total_farm_rewards);
    }
}
