multiversx_sc::imports!();

use common_structs::Timestamp;

#[multiversx_sc::module]
pub trait ScheduleModule {
    fn released_at(&self, timestamp: Timestamp) -> BigUint {
        let start = self.start_timestamp().get();
        let end = start + self.duration().get();
        let total_amount = self.total_amount().get();

        math::linear_release::<Self::Api>(start, end, timestamp, &total_amount)
    }

    #[view(getReleasedAmount)]
    fn released_amount(&self) -> BigUint {
        let current_timestamp = self.blockchain().get_block_timestamp();
        self.released_at(current_timestamp)
    }

    /// Released but not yet sent to a farm, bounded by the balance held.
    #[view(nextDistribution)]
    fn next_distribution(&self) -> BigUint {
        let released = self.released_amount();
        let distributed = self.distributed_amount().get();
        if released <= distributed {
            return BigUint::zero();
        }

        let due = released - distributed;
        let reward_token_id = self.reward_token_id().get();
        let balance = self.reward_balance(&reward_token_id);
        if due > balance {
            balance
        } else {
            due
        }
    }

    fn reward_balance(&self, reward_token_id: &TokenIdentifier) -> BigUint {
        let sc_address = self.blockchain().get_sc_address();
        self.blockchain()
            .get_esdt_balance(&sc_address, reward_token_id, 0)
    }

    #[view(getRewardTokenId)]
    #[storage_mapper("rewardTokenId")]
    fn reward_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getStartTimestamp)]
    #[storage_mapper("startTimestamp")]
    fn start_timestamp(&self) -> SingleValueMapper<Timestamp>;

    #[view(getDuration)]
    #[storage_mapper("duration")]
    fn duration(&self) -> SingleValueMapper<Timestamp>;

    #[view(getTotalAmount)]
    #[storage_mapper("totalAmount")]
    fn total_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getDistributedAmount)]
    #[storage_mapper("distributedAmount")]
    fn distributed_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastDistributionTimestamp)]
    #[storage_mapper("lastDistributionTimestamp")]
    fn last_distribution_timestamp(&self) -> SingleValueMapper<Timestamp>;
}
