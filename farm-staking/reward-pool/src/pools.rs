multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::ERROR_UNKNOWN_POOL;
use common_structs::{AllocPoint, Nonce, PoolId};

#[derive(TypeAbi, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PoolInfo<M: ManagedTypeApi> {
    pub staking_token_id: TokenIdentifier<M>,
    pub alloc_point: AllocPoint,
    pub last_reward_block: Nonce,
    pub reward_per_share: BigUint<M>,
    pub total_deposited: BigUint<M>,
}

#[multiversx_sc::module]
pub trait PoolsModule: rewards::RewardsModule + crate::events::EventsModule {
    fn update_all_pools(&self) {
        let pool_count = self.pool_count().get();
        for pool_id in 0..pool_count {
            let _ = self.update_pool(pool_id);
        }
    }

    /// Mints the rewards a pool earned since its last update and folds them into its
    /// reward per share.
    fn update_pool(&self, pool_id: PoolId) -> PoolInfo<Self::Api> {
        let pool_mapper = self.pool_info(pool_id);
        let mut pool = pool_mapper.get();
        let current_block = self.blockchain().get_block_nonce();
        if current_block <= pool.last_reward_block {
            return pool;
        }

        let rewards = self.calculate_pool_rewards(&pool, current_block);
        if rewards > 0u64 {
            let reward_token_id = self.reward_token_id().get();
            self.send().esdt_local_mint(&reward_token_id, 0, &rewards);

            let increase =
                self.compute_reward_per_share_increase(&rewards, &pool.total_deposited);
            pool.reward_per_share += increase;
        }

        pool.last_reward_block = current_block;
        pool_mapper.set(&pool);

        pool
    }

    fn calculate_pool_rewards(
        &self,
        pool: &PoolInfo<Self::Api>,
        current_block: Nonce,
    ) -> BigUint {
        let total_alloc_point = self.total_alloc_point().get();
        if current_block <= pool.last_reward_block
            || pool.total_deposited == 0u64
            || pool.alloc_point == 0
            || total_alloc_point == 0
        {
            return BigUint::zero();
        }

        let block_diff = current_block - pool.last_reward_block;
        let per_block_reward = self.reward_per_block().get();

        per_block_reward * block_diff * pool.alloc_point / total_alloc_point
    }

    fn harvest(
        &self,
        pool_id: PoolId,
        pool: &PoolInfo<Self::Api>,
        user: &ManagedAddress,
    ) -> BigUint {
        let deposited = self.deposited_amount(pool_id, user).get();
        let reward_debt = self.deposit_reward_debt(pool_id, user).get();
        let pending =
            self.compute_pending_rewards(&deposited, &pool.reward_per_share, &reward_debt);
        if pending > 0u64 {
            let reward_token_id = self.reward_token_id().get();
            self.send().direct_esdt(user, &reward_token_id, 0, &pending);
            self.harvest_event(user, pool_id, &pending);
        }

        pending
    }

    fn sync_deposit_reward_debt(
        &self,
        pool_id: PoolId,
        pool: &PoolInfo<Self::Api>,
        user: &ManagedAddress,
    ) {
        let deposited = self.deposited_amount(pool_id, user).get();
        let reward_debt = self.compute_accrued_rewards(&deposited, &pool.reward_per_share);
        self.deposit_reward_debt(pool_id, user).set(&reward_debt);
    }

    fn require_pool_exists(&self, pool_id: PoolId) {
        require!(pool_id < self.pool_count().get(), ERROR_UNKNOWN_POOL);
    }

    #[view(getPendingReward)]
    fn pending_reward(&self, pool_id: PoolId, user: ManagedAddress) -> BigUint {
        self.require_pool_exists(pool_id);

        let pool = self.pool_info(pool_id).get();
        let current_block = self.blockchain().get_block_nonce();
        let rewards = self.calculate_pool_rewards(&pool, current_block);
        let reward_per_share = &pool.reward_per_share
            + &self.compute_reward_per_share_increase(&rewards, &pool.total_deposited);

        let deposited = self.deposited_amount(pool_id, &user).get();
        let reward_debt = self.deposit_reward_debt(pool_id, &user).get();
        self.compute_pending_rewards(&deposited, &reward_per_share, &reward_debt)
    }

    #[view(getPoolStakingTokenId)]
    fn pool_staking_token_id(&self, pool_id: PoolId) -> TokenIdentifier {
        self.require_pool_exists(pool_id);
        self.pool_info(pool_id).get().staking_token_id
    }

    #[view(getRewardTokenId)]
    #[storage_mapper("rewardTokenId")]
    fn reward_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRewardPerBlock)]
    #[storage_mapper("rewardPerBlock")]
    fn reward_per_block(&self) -> SingleValueMapper<BigUint>;

    #[view(getStartBlock)]
    #[storage_mapper("startBlock")]
    fn start_block(&self) -> SingleValueMapper<Nonce>;

    #[view(getTotalAllocPoint)]
    #[storage_mapper("totalAllocPoint")]
    fn total_alloc_point(&self) -> SingleValueMapper<AllocPoint>;

    #[view(getPoolCount)]
    #[storage_mapper("poolCount")]
    fn pool_count(&self) -> SingleValueMapper<PoolId>;

    #[view(getPool)]
    #[storage_mapper("poolInfo")]
    fn pool_info(&self, pool_id: PoolId) -> SingleValueMapper<PoolInfo<Self::Api>>;

    #[view(getDeposit)]
    #[storage_mapper("depositedAmount")]
    fn deposited_amount(&self, pool_id: PoolId, user: &ManagedAddress)
        -> SingleValueMapper<BigUint>;

    #[storage_mapper("depositRewardDebt")]
    fn deposit_reward_debt(
        &self,
        pool_id: PoolId,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
