multiversx_sc::imports!();

use common_structs::{AllocPoint, PoolId};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("poolAdded")]
    fn pool_added_event(
        &self,
        #[indexed] pool_id: PoolId,
        #[indexed] staking_token_id: &TokenIdentifier,
        alloc_point: AllocPoint,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] pool_id: PoolId,
        amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] pool_id: PoolId,
        amount: &BigUint,
    );

    #[event("harvest")]
    fn harvest_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] pool_id: PoolId,
        amount: &BigUint,
    );
}
