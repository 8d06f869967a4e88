multiversx_sc::imports!();

use common_structs::PoolId;

pub mod distributor_proxy {
    multiversx_sc::imports!();

    #[multiversx_sc::proxy]
    pub trait LinearDistributorProxy {
        #[endpoint]
        fn distribute(&self) -> BigUint;

        #[view(isActiveFarm)]
        fn is_active_farm(&self, address: ManagedAddress) -> bool;

        #[view(nextDistribution)]
        fn next_distribution(&self) -> BigUint;

        #[view(getRewardTokenId)]
        fn reward_token_id(&self) -> TokenIdentifier;
    }
}

pub mod reward_pool_proxy {
    multiversx_sc::imports!();

    use common_structs::PoolId;

    #[multiversx_sc::proxy]
    pub trait RewardPoolProxy {
        #[payable("*")]
        #[endpoint]
        fn deposit(&self, pool_id: PoolId);

        #[endpoint]
        fn withdraw(&self, pool_id: PoolId, amount: BigUint) -> EsdtTokenPayment;

        #[endpoint]
        fn claim(&self, pool_id: PoolId) -> BigUint;

        #[view(getPendingReward)]
        fn pending_reward(&self, pool_id: PoolId, user: ManagedAddress) -> BigUint;

        #[view(getPoolStakingTokenId)]
        fn pool_staking_token_id(&self, pool_id: PoolId) -> TokenIdentifier;

        #[view(getRewardTokenId)]
        fn reward_token_id(&self) -> TokenIdentifier;
    }
}

#[multiversx_sc::module]
pub trait ExternalInteractionModule: crate::config::ConfigModule {
    fn is_active_distributor_farm(&self, distributor_address: ManagedAddress) -> bool {
        let own_address = self.blockchain().get_sc_address();
        self.distributor_proxy(distributor_address)
            .is_active_farm(own_address)
            .execute_on_dest_context()
    }

    /// Pulls the released part of the linear schedule into custody. A farm that is no
    /// longer designated by the distributor receives nothing.
    fn pull_linear_rewards(&self) {
        let distributor_address = self.distributor_address().get();
        if !self.is_active_distributor_farm(distributor_address.clone()) {
            return;
        }

        let _: BigUint = self
            .distributor_proxy(distributor_address)
            .distribute()
            .execute_on_dest_context();
    }

    fn pending_linear_rewards(&self) -> BigUint {
        let distributor_address = self.distributor_address().get();
        if !self.is_active_distributor_farm(distributor_address.clone()) {
            return BigUint::zero();
        }

        self.distributor_proxy(distributor_address)
            .next_distribution()
            .execute_on_dest_context()
    }

    fn pull_block_pool_rewards(&self) {
        let pool_id = self.pool_id().get();
        let _: BigUint = self
            .reward_pool_proxy(self.reward_pool_address().get())
            .claim(pool_id)
            .execute_on_dest_context();
    }

    fn pending_block_pool_rewards(&self) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.reward_pool_proxy(self.reward_pool_address().get())
            .pending_reward(self.pool_id().get(), own_address)
            .execute_on_dest_context()
    }

    fn deposit_into_reward_pool(&self, payment: EsdtTokenPayment) {
        let pool_id = self.pool_id().get();
        let _: IgnoreValue = self
            .reward_pool_proxy(self.reward_pool_address().get())
            .deposit(pool_id)
            .with_esdt_transfer(payment)
            .execute_on_dest_context();
    }

    fn withdraw_from_reward_pool(&self, amount: BigUint) -> EsdtTokenPayment {
        let pool_id = self.pool_id().get();
        self.reward_pool_proxy(self.reward_pool_address().get())
            .withdraw(pool_id, amount)
            .execute_on_dest_context()
    }

    fn query_distributor_reward_token(
        &self,
        distributor_address: ManagedAddress,
    ) -> TokenIdentifier {
        self.distributor_proxy(distributor_address)
            .reward_token_id()
            .execute_on_dest_context()
    }

    fn query_reward_pool_tokens(
        &self,
        reward_pool_address: ManagedAddress,
        pool_id: PoolId,
    ) -> (TokenIdentifier, TokenIdentifier) {
        let reward_token_id: TokenIdentifier = self
            .reward_pool_proxy(reward_pool_address.clone())
            .reward_token_id()
            .execute_on_dest_context();
        let pool_staking_token_id: TokenIdentifier = self
            .reward_pool_proxy(reward_pool_address)
            .pool_staking_token_id(pool_id)
            .execute_on_dest_context();

        (reward_token_id, pool_staking_token_id)
    }

    #[proxy]
    fn distributor_proxy(
        &self,
        sc_address: ManagedAddress,
    ) -> distributor_proxy::Proxy<Self::Api>;

    #[proxy]
    fn reward_pool_proxy(
        &self,
        sc_address: ManagedAddress,
    ) -> reward_pool_proxy::Proxy<Self::Api>;
}
