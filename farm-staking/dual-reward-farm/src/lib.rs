#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod events;
pub mod external_interaction;
pub mod reward_tracks;
pub mod settlement;
pub mod storage_cache;

use common_errors::{
    ERROR_ALREADY_INITIALIZED, ERROR_BAD_INPUT_TOKEN, ERROR_INSUFFICIENT_BALANCE,
    ERROR_NOT_ACTIVE_FARM, ERROR_NOT_AN_ESDT, ERROR_PARAMETERS, ERROR_SAME_TOKEN_IDS,
    ERROR_ZERO_AMOUNT,
};
use common_structs::PoolId;
use config::RewardTrack;

pub type ClaimResultType<BigUint> =
    MultiValue2<EsdtTokenPayment<BigUint>, EsdtTokenPayment<BigUint>>;
pub type ExitResultType<BigUint> =
    MultiValue3<EsdtTokenPayment<BigUint>, EsdtTokenPayment<BigUint>, EsdtTokenPayment<BigUint>>;

/// Staking farm paying two reward tokens: one released over time by a linear
/// distributor and one harvested per block from a reward pool where the staked
/// tokens are deposited.
#[multiversx_sc::contract]
pub trait DualRewardFarm:
    config::ConfigModule
    + reward_tracks::RewardTracksModule
    + settlement::SettlementModule
    + external_interaction::ExternalInteractionModule
    + events::EventsModule
    + rewards::RewardsModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// The distributor must already designate this farm.
    #[only_owner]
    #[endpoint]
    fn initialize(
        &self,
        staking_token_id: TokenIdentifier,
        distributor_address: ManagedAddress,
        reward_pool_address: ManagedAddress,
        pool_id: PoolId,
        name: ManagedBuffer,
        division_safety_constant: BigUint,
    ) {
        require!(!self.initialized().get(), ERROR_ALREADY_INITIALIZED);
        require!(staking_token_id.is_valid_esdt_identifier(), ERROR_NOT_AN_ESDT);
        require!(division_safety_constant > 0u64, ERROR_PARAMETERS);
        require!(
            self.is_active_distributor_farm(distributor_address.clone()),
            ERROR_NOT_ACTIVE_FARM
        );

        let linear_reward_token_id =
            self.query_distributor_reward_token(distributor_address.clone());
        let (pool_reward_token_id, pool_staking_token_id) =
            self.query_reward_pool_tokens(reward_pool_address.clone(), pool_id);
        require!(
            pool_staking_token_id == staking_token_id,
            ERROR_BAD_INPUT_TOKEN
        );
        require!(
            linear_reward_token_id != staking_token_id
                && pool_reward_token_id != staking_token_id
                && linear_reward_token_id != pool_reward_token_id,
            ERROR_SAME_TOKEN_IDS
        );

        self.staking_token_id().set(&staking_token_id);
        self.distributor_address().set(&distributor_address);
        self.reward_pool_address().set(&reward_pool_address);
        self.pool_id().set(pool_id);
        self.name().set(&name);
        self.division_safety_constant()
            .set(&division_safety_constant);
        self.reward_token_id(RewardTrack::Linear)
            .set(&linear_reward_token_id);
        self.reward_token_id(RewardTrack::BlockPool)
            .set(&pool_reward_token_id);
        self.initialized().set(true);
    }

    #[payable("*")]
    #[endpoint]
    fn stake(&self) {
        self.require_initialized();

        let (token_id, amount) = self.call_value().single_fungible_esdt();
        require!(token_id == self.staking_token_id().get(), ERROR_BAD_INPUT_TOKEN);
        require!(amount > 0u64, ERROR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.settle(&caller);

        self.staked(&caller).update(|staked| *staked += &amount);
        self.total_staked().update(|total| *total += &amount);
        self.sync_reward_debts(&caller);

        self.deposit_into_reward_pool(EsdtTokenPayment::new(token_id, 0, amount.clone()));

        self.stake_event(&caller, &amount);
    }

    /// Accrued rewards stay claimable after unstaking.
    #[endpoint]
    fn unstake(&self, amount: BigUint) -> EsdtTokenPayment {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        self.unstake_common(&caller, amount)
    }

    #[endpoint]
    fn claim(&self) -> ClaimResultType<Self::Api> {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        self.claim_common(&caller)
    }

    #[endpoint]
    fn exit(&self, amount: BigUint) -> ExitResultType<Self::Api> {
        self.require_initialized();

        let caller = self.blockchain().get_caller();
        let unstaked = self.unstake_common(&caller, amount);
        let (linear_rewards, block_pool_rewards) = self.claim_common(&caller).into_tuple();

        (unstaked, linear_rewards, block_pool_rewards).into()
    }

    fn unstake_common(&self, caller: &ManagedAddress, amount: BigUint) -> EsdtTokenPayment {
        let staked_mapper = self.staked(caller);
        require!(
            amount > 0u64 && amount <= staked_mapper.get(),
            ERROR_INSUFFICIENT_BALANCE
        );

        self.settle(caller);

        staked_mapper.update(|staked| *staked -= &amount);
        self.total_staked().update(|total| *total -= &amount);
        self.sync_reward_debts(caller);

        let payment = self.withdraw_from_reward_pool(amount);
        self.send().direct_non_zero_esdt_payment(caller, &payment);
        self.unstake_event(caller, &payment.amount);

        payment
    }

    fn claim_common(&self, caller: &ManagedAddress) -> ClaimResultType<Self::Api> {
        self.settle(caller);

        let linear_rewards = self.pay_out_track(caller, RewardTrack::Linear);
        let block_pool_rewards = self.pay_out_track(caller, RewardTrack::BlockPool);

        (linear_rewards, block_pool_rewards).into()
    }

    fn pay_out_track(&self, caller: &ManagedAddress, track: RewardTrack) -> EsdtTokenPayment {
        let amount = self.claimable_reward(track, caller).take();
        let reward_token_id = self.reward_token_id(track).get();
        self.total_claimed_rewards(track)
            .update(|claimed| *claimed += &amount);
        self.claim_event(caller, &reward_token_id, &amount);

        let payment = EsdtTokenPayment::new(reward_token_id, 0, amount);
        self.send().direct_non_zero_esdt_payment(caller, &payment);

        payment
    }
}
