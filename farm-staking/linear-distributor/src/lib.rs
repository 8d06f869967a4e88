#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod schedule;

use common_errors::{ERROR_NOT_AN_ESDT, ERROR_NO_FARM_SET, ERROR_PARAMETERS, ERROR_ZERO_AMOUNT};
use common_structs::Timestamp;

/// Releases a fixed amount of reward tokens linearly over a time window and pushes the
/// released part to the farm it currently designates.
#[multiversx_sc::contract]
pub trait LinearDistributor: schedule::ScheduleModule + events::EventsModule {
    #[init]
    fn init(
        &self,
        start_timestamp: Timestamp,
        duration: Timestamp,
        total_amount: BigUint,
        reward_token_id: TokenIdentifier,
    ) {
        require!(duration > 0, ERROR_PARAMETERS);
        require!(total_amount > 0u64, ERROR_ZERO_AMOUNT);
        require!(reward_token_id.is_valid_esdt_identifier(), ERROR_NOT_AN_ESDT);

        self.start_timestamp().set(start_timestamp);
        self.duration().set(duration);
        self.total_amount().set(&total_amount);
        self.reward_token_id().set(&reward_token_id);
        self.last_distribution_timestamp().set(start_timestamp);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Designates the farm receiving future releases. Whatever was released up to now
    /// goes to the previous farm first.
    #[only_owner]
    #[endpoint(setFarm)]
    fn set_farm(&self, new_farm: ManagedAddress) {
        let farm_mapper = self.farm();
        if !farm_mapper.is_empty() {
            let previous_farm = farm_mapper.get();
            let _ = self.distribute_to(&previous_farm);
        }

        farm_mapper.set(&new_farm);
        self.farm_changed_event(&new_farm);
    }

    #[endpoint]
    fn distribute(&self) -> BigUint {
        let farm_mapper = self.farm();
        require!(!farm_mapper.is_empty(), ERROR_NO_FARM_SET);

        self.distribute_to(&farm_mapper.get())
    }

    /// Flushes the released amount to the farm, stops the schedule and returns the rest
    /// of the balance to the owner.
    #[only_owner]
    #[endpoint]
    fn empty(&self) -> BigUint {
        let farm_mapper = self.farm();
        if !farm_mapper.is_empty() {
            let _ = self.distribute_to(&farm_mapper.get());
        }

        let total_amount = self.total_amount().get();
        self.distributed_amount().set(&total_amount);

        let owner = self.blockchain().get_caller();
        let reward_token_id = self.reward_token_id().get();
        let remaining = self.reward_balance(&reward_token_id);
        let payment = EsdtTokenPayment::new(reward_token_id, 0, remaining);
        self.send().direct_non_zero_esdt_payment(&owner, &payment);
        self.emptied_event(&owner, &payment.amount);

        payment.amount
    }

    /// Sends what is released and actually held. A shortfall stays due and is paid once
    /// the balance is topped up.
    fn distribute_to(&self, farm: &ManagedAddress) -> BigUint {
        let amount = self.next_distribution();
        if amount == 0u64 {
            return amount;
        }

        let current_timestamp = self.blockchain().get_block_timestamp();
        self.distributed_amount()
            .update(|distributed| *distributed += &amount);
        self.last_distribution_timestamp().set(current_timestamp);

        let reward_token_id = self.reward_token_id().get();
        let payment = EsdtTokenPayment::new(reward_token_id, 0, amount);
        self.send().direct_non_zero_esdt_payment(farm, &payment);
        self.distribution_event(farm, &payment.amount);

        payment.amount
    }

    #[view(isActiveFarm)]
    fn is_active_farm(&self, address: ManagedAddress) -> bool {
        let farm_mapper = self.farm();
        !farm_mapper.is_empty() && farm_mapper.get() == address
    }

    #[view(getFarm)]
    #[storage_mapper("farm")]
    fn farm(&self) -> SingleValueMapper<ManagedAddress>;
}
