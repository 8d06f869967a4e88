multiversx_sc::imports!();

use crate::config::{RewardTrack, REWARD_TRACKS};
use crate::storage_cache::RewardTrackCache;

#[multiversx_sc::module]
pub trait SettlementModule:
    crate::config::ConfigModule
    + crate::reward_tracks::RewardTracksModule
    + crate::external_interaction::ExternalInteractionModule
    + crate::events::EventsModule
    + rewards::RewardsModule
{
    /// Brings every reward track up to date and moves what the user earned so far into
    /// their claimable balance.
    fn settle(&self, user: &ManagedAddress) {
        self.pull_linear_rewards();
        if self.total_staked().get() > 0u64 {
            self.pull_block_pool_rewards();
        }

        for track in REWARD_TRACKS {
            let mut track_cache = RewardTrackCache::new(self, track);
            self.update_reward_per_share(&mut track_cache);
            self.settle_account(&track_cache, user);
        }
    }

    /// Everything that reached custody since the last settlement is shared between the
    /// current stakers. With nobody staked it waits for the next one.
    fn update_reward_per_share(&self, track_cache: &mut RewardTrackCache<Self>) {
        let total_staked = self.total_staked().get();
        if total_staked == 0u64 {
            return;
        }

        let custody = self.custody_balance(&track_cache.reward_token_id);
        let new_total_rewards = custody + &track_cache.total_claimed_rewards;
        if new_total_rewards <= track_cache.total_farm_rewards {
            return;
        }

        let allocated = &new_total_rewards - &track_cache.total_farm_rewards;
        let (increase, remainder) = self.compute_reward_per_share_increase_with_remainder(
            &allocated,
            &total_staked,
            &track_cache.reward_per_share_remainder,
        );
        track_cache.reward_per_share += increase;
        track_cache.reward_per_share_remainder = remainder;
        track_cache.total_farm_rewards = new_total_rewards;

        self.emit_rewards_allocated_event(
            track_cache.track,
            &total_staked,
            &allocated,
            &track_cache.reward_per_share,
        );
    }

    fn settle_account(&self, track_cache: &RewardTrackCache<Self>, user: &ManagedAddress) {
        let staked = self.staked(user).get();
        let reward_debt_mapper = self.reward_debt(track_cache.track, user);
        let reward_debt = reward_debt_mapper.get();

        let pending =
            self.compute_pending_rewards(&staked, &track_cache.reward_per_share, &reward_debt);
        if pending > 0u64 {
            self.claimable_reward(track_cache.track, user)
                .update(|claimable| *claimable += &pending);
        }

        let new_reward_debt =
            self.compute_accrued_rewards(&staked, &track_cache.reward_per_share);
        reward_debt_mapper.set(&new_reward_debt);
    }

    /// Must follow any change of the user's stake.
    fn sync_reward_debts(&self, user: &ManagedAddress) {
        let staked = self.staked(user).get();
        for track in REWARD_TRACKS {
            let reward_per_share = self.reward_per_share(track).get();
            let reward_debt = self.compute_accrued_rewards(&staked, &reward_per_share);
            self.reward_debt(track, user).set(&reward_debt);
        }
    }

    /// Claimable amount including rewards released but not yet settled.
    #[view(claimable)]
    fn claimable(&self, user: ManagedAddress, token_id: TokenIdentifier) -> BigUint {
        let track = self.track_for_token(&token_id);
        let settled = self.claimable_reward(track, &user).get();
        let total_staked = self.total_staked().get();
        if !self.initialized().get() || total_staked == 0u64 {
            return settled;
        }

        let incoming = match track {
            RewardTrack::Linear => self.pending_linear_rewards(),
            RewardTrack::BlockPool => self.pending_block_pool_rewards(),
        };
        let custody = self.custody_balance(&token_id);
        let total_claimed = self.total_claimed_rewards(track).get();
        let total_farm_rewards = self.total_farm_rewards(track).get();

        let mut reward_per_share = self.reward_per_share(track).get();
        let new_total_rewards = incoming + custody + total_claimed;
        if new_total_rewards > total_farm_rewards {
            let allocated = new_total_rewards - total_farm_rewards;
            let remainder = self.reward_per_share_remainder(track).get();
            let (increase, _) = self.compute_reward_per_share_increase_with_remainder(
                &allocated,
                &total_staked,
                &remainder,
            );
            reward_per_share += increase;
        }

        let staked = self.staked(&user).get();
        let reward_debt = self.reward_debt(track, &user).get();
        settled + self.compute_pending_rewards(&staked, &reward_per_share, &reward_debt)
    }
}
