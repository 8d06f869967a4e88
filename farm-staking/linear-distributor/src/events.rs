multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("farmChanged")]
    fn farm_changed_event(&self, #[indexed] new_farm: &ManagedAddress);

    #[event("distribution")]
    fn distribution_event(&self, #[indexed] farm: &ManagedAddress, amount: &BigUint);

    #[event("emptied")]
    fn emptied_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);
}
