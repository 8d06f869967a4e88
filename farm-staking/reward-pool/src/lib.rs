#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod pools;

use common_errors::{
    ERROR_BAD_INPUT_TOKEN, ERROR_DEPOSIT_TOO_LOW, ERROR_NOT_AN_ESDT, ERROR_PARAMETERS,
    ERROR_SAME_TOKEN_IDS, ERROR_ZERO_AMOUNT,
};
use common_structs::{AllocPoint, Nonce, PoolId};
use pools::PoolInfo;

/// Block-based reward pool. Each pool earns a share of the per-block emission
/// proportional to its allocation points. Rewards are minted on demand.
#[multiversx_sc::contract]
pub trait RewardPool: pools::PoolsModule + rewards::RewardsModule + events::EventsModule {
    #[init]
    fn init(
        &self,
        reward_token_id: TokenIdentifier,
        reward_per_block: BigUint,
        start_block: Nonce,
        division_safety_constant: BigUint,
    ) {
        require!(reward_token_id.is_valid_esdt_identifier(), ERROR_NOT_AN_ESDT);
        require!(division_safety_constant > 0u64, ERROR_PARAMETERS);

        self.reward_token_id().set(&reward_token_id);
        self.reward_per_block().set(&reward_per_block);
        self.start_block().set(start_block);
        self.division_safety_constant()
            .set(&division_safety_constant);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addPool)]
    fn add_pool(&self, staking_token_id: TokenIdentifier, alloc_point: AllocPoint) -> PoolId {
        require!(staking_token_id.is_valid_esdt_identifier(), ERROR_NOT_AN_ESDT);
        require!(
            staking_token_id != self.reward_token_id().get(),
            ERROR_SAME_TOKEN_IDS
        );

        self.update_all_pools();

        let current_block = self.blockchain().get_block_nonce();
        let last_reward_block = current_block.max(self.start_block().get());
        let pool_id = self.pool_count().get();
        let pool = PoolInfo {
            staking_token_id: staking_token_id.clone(),
            alloc_point,
            last_reward_block,
            reward_per_share: BigUint::zero(),
            total_deposited: BigUint::zero(),
        };
        self.pool_info(pool_id).set(&pool);
        self.pool_count().set(pool_id + 1);
        self.total_alloc_point().update(|total| *total += alloc_point);

        self.pool_added_event(pool_id, &staking_token_id, alloc_point);

        pool_id
    }

    #[only_owner]
    #[endpoint(setAllocPoint)]
    fn set_alloc_point(&self, pool_id: PoolId, alloc_point: AllocPoint) {
        self.require_pool_exists(pool_id);
        self.update_all_pools();

        let pool_mapper = self.pool_info(pool_id);
        let mut pool = pool_mapper.get();
        self.total_alloc_point()
            .update(|total| *total = *total - pool.alloc_point + alloc_point);
        pool.alloc_point = alloc_point;
        pool_mapper.set(&pool);
    }

    #[only_owner]
    #[endpoint(setRewardPerBlock)]
    fn set_reward_per_block(&self, reward_per_block: BigUint) {
        self.update_all_pools();
        self.reward_per_block().set(&reward_per_block);
    }

    /// Pending rewards are paid out before the deposit is added.
    #[payable("*")]
    #[endpoint]
    fn deposit(&self, pool_id: PoolId) {
        self.require_pool_exists(pool_id);

        let (token_id, amount) = self.call_value().single_fungible_esdt();
        let caller = self.blockchain().get_caller();
        let mut pool = self.update_pool(pool_id);
        require!(token_id == pool.staking_token_id, ERROR_BAD_INPUT_TOKEN);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let _ = self.harvest(pool_id, &pool, &caller);

        self.deposited_amount(pool_id, &caller)
            .update(|deposited| *deposited += &amount);
        pool.total_deposited += &amount;
        self.pool_info(pool_id).set(&pool);
        self.sync_deposit_reward_debt(pool_id, &pool, &caller);

        self.deposit_event(&caller, pool_id, &amount);
    }

    #[endpoint]
    fn withdraw(&self, pool_id: PoolId, amount: BigUint) -> EsdtTokenPayment {
        self.require_pool_exists(pool_id);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        let deposited_mapper = self.deposited_amount(pool_id, &caller);
        require!(amount <= deposited_mapper.get(), ERROR_DEPOSIT_TOO_LOW);

        let mut pool = self.update_pool(pool_id);
        let _ = self.harvest(pool_id, &pool, &caller);

        deposited_mapper.update(|deposited| *deposited -= &amount);
        pool.total_deposited -= &amount;
        self.pool_info(pool_id).set(&pool);
        self.sync_deposit_reward_debt(pool_id, &pool, &caller);

        let payment = EsdtTokenPayment::new(pool.staking_token_id, 0, amount);
        self.send().direct_non_zero_esdt_payment(&caller, &payment);
        self.withdraw_event(&caller, pool_id, &payment.amount);

        payment
    }

    #[endpoint]
    fn claim(&self, pool_id: PoolId) -> BigUint {
        self.require_pool_exists(pool_id);

        let caller = self.blockchain().get_caller();
        let pool = self.update_pool(pool_id);
        let harvested = self.harvest(pool_id, &pool, &caller);
        self.sync_deposit_reward_debt(pool_id, &pool, &caller);

        harvested
    }
}
