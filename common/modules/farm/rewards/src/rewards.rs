#![no_std]

multiversx_sc::imports!();

/// Accumulate-per-share arithmetic shared by every contract that splits a stream of
/// rewards between stakers. `reward_per_share` values are scaled by the division
/// safety constant.
#[multiversx_sc::module]
pub trait RewardsModule {
    fn compute_reward_per_share_increase(
        &self,
        reward_amount: &BigUint,
        total_staked: &BigUint,
    ) -> BigUint {
        if *total_staked == 0u64 {
            return BigUint::zero();
        }

        let division_safety_constant = self.division_safety_constant().get();
        reward_amount * &division_safety_constant / total_staked
    }

    /// Carries the scaled remainder of the division into the next allocation instead of
    /// dropping it. Returns the increase and the new remainder.
    fn compute_reward_per_share_increase_with_remainder(
        &self,
        reward_amount: &BigUint,
        total_staked: &BigUint,
        previous_remainder: &BigUint,
    ) -> (BigUint, BigUint) {
        if *total_staked == 0u64 {
            return (BigUint::zero(), previous_remainder.clone());
        }

        let division_safety_constant = self.division_safety_constant().get();
        let scaled_reward = reward_amount * &division_safety_constant + previous_remainder;
        let increase = &scaled_reward / total_staked;
        let remainder = &scaled_reward % total_staked;

        (increase, remainder)
    }

    fn compute_accrued_rewards(
        &self,
        staked_amount: &BigUint,
        reward_per_share: &BigUint,
    ) -> BigUint {
        let division_safety_constant = self.division_safety_constant().get();
        staked_amount * reward_per_share / &division_safety_constant
    }

    fn compute_pending_rewards(
        &self,
        staked_amount: &BigUint,
        reward_per_share: &BigUint,
        reward_debt: &BigUint,
    ) -> BigUint {
        let accrued = self.compute_accrued_rewards(staked_amount, reward_per_share);
        if &accrued > reward_debt {
            accrued - reward_debt
        } else {
            BigUint::zero()
        }
    }

    #[view(getDivisionSafetyConstant)]
    #[storage_mapper("division_safety_constant")]
    fn division_safety_constant(&self) -> SingleValueMapper<BigUint>;
}
