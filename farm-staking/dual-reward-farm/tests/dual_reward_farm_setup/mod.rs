#![allow(deprecated)]

use dual_reward_farm::config::ConfigModule;
use dual_reward_farm::reward_tracks::RewardTracksModule;
use dual_reward_farm::settlement::SettlementModule;
use dual_reward_farm::DualRewardFarm;
use linear_distributor::LinearDistributor;
use multiversx_sc::types::{Address, EsdtLocalRole};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, managed_token_id, rust_biguint,
    whitebox_legacy::*, DebugApi,
};
use reward_pool::RewardPool;

pub static STAKING_TOKEN_ID: &[u8] = b"LPTOK-abcdef";
pub static LINEAR_REWARD_TOKEN_ID: &[u8] = b"TRU-123456";
pub static POOL_REWARD_TOKEN_ID: &[u8] = b"SUSHI-123456";
pub static FARM_NAME: &[u8] = b"TRU-SUSHI dual farm";

pub const DAY: u64 = 24 * 60 * 60;
pub const REWARD_DAYS: u64 = 10;
pub const START_TIMESTAMP: u64 = 1_000_000;
pub const DURATION: u64 = REWARD_DAYS * DAY;
pub const TOTAL_LINEAR_REWARDS: u64 = 100_000_000_000;
pub const DAILY_LINEAR_REWARDS: u64 = TOTAL_LINEAR_REWARDS / REWARD_DAYS;
pub const POOL_REWARD_PER_BLOCK: u64 = 100_000_000;
pub const POOL_ID: u64 = 0;
pub const DIVISION_SAFETY_CONSTANT: u64 = 1_000_000_000_000_000_000;
pub const USER_STAKING_BALANCE: u64 = 1_000_000_000;

pub struct DualRewardFarmSetup<DistributorObjBuilder, PoolObjBuilder, FarmObjBuilder>
where
    DistributorObjBuilder: 'static + Copy + Fn() -> linear_distributor::ContractObj<DebugApi>,
    PoolObjBuilder: 'static + Copy + Fn() -> reward_pool::ContractObj<DebugApi>,
    FarmObjBuilder: 'static + Copy + Fn() -> dual_reward_farm::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub first_user: Address,
    pub second_user: Address,
    pub third_user: Address,
    pub distributor_wrapper:
        ContractObjWrapper<linear_distributor::ContractObj<DebugApi>, DistributorObjBuilder>,
    pub pool_wrapper: ContractObjWrapper<reward_pool::ContractObj<DebugApi>, PoolObjBuilder>,
    pub farm_wrapper: ContractObjWrapper<dual_reward_farm::ContractObj<DebugApi>, FarmObjBuilder>,
    pub second_farm_wrapper:
        ContractObjWrapper<dual_reward_farm::ContractObj<DebugApi>, FarmObjBuilder>,
}

impl<DistributorObjBuilder, PoolObjBuilder, FarmObjBuilder>
    DualRewardFarmSetup<DistributorObjBuilder, PoolObjBuilder, FarmObjBuilder>
where
    DistributorObjBuilder: 'static + Copy + Fn() -> linear_distributor::ContractObj<DebugApi>,
    PoolObjBuilder: 'static + Copy + Fn() -> reward_pool::ContractObj<DebugApi>,
    FarmObjBuilder: 'static + Copy + Fn() -> dual_reward_farm::ContractObj<DebugApi>,
{
    pub fn new(
        distributor_builder: DistributorObjBuilder,
        pool_builder: PoolObjBuilder,
        farm_builder: FarmObjBuilder,
    ) -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let first_user = b_mock.create_user_account(&rust_zero);
        let second_user = b_mock.create_user_account(&rust_zero);
        let third_user = b_mock.create_user_account(&rust_zero);

        b_mock.set_block_nonce(1);
        b_mock.set_block_timestamp(START_TIMESTAMP);

        let distributor_wrapper = b_mock.create_sc_account(
            &rust_zero,
            Some(&owner),
            distributor_builder,
            "linear-distributor.wasm",
        );
        b_mock
            .execute_tx(&owner, &distributor_wrapper, &rust_zero, |sc| {
                sc.init(
                    START_TIMESTAMP,
                    DURATION,
                    managed_biguint!(TOTAL_LINEAR_REWARDS),
                    managed_token_id!(LINEAR_REWARD_TOKEN_ID),
                );
            })
            .assert_ok();
        b_mock.set_esdt_balance(
            distributor_wrapper.address_ref(),
            LINEAR_REWARD_TOKEN_ID,
            &rust_biguint!(TOTAL_LINEAR_REWARDS),
        );

        let pool_wrapper =
            b_mock.create_sc_account(&rust_zero, Some(&owner), pool_builder, "reward-pool.wasm");
        b_mock
            .execute_tx(&owner, &pool_wrapper, &rust_zero, |sc| {
                sc.init(
                    managed_token_id!(POOL_REWARD_TOKEN_ID),
                    managed_biguint!(POOL_REWARD_PER_BLOCK),
                    0,
                    managed_biguint!(DIVISION_SAFETY_CONSTANT),
                );
                let pool_id = sc.add_pool(managed_token_id!(STAKING_TOKEN_ID), 100);
                assert_eq!(pool_id, POOL_ID);
            })
            .assert_ok();
        b_mock.set_esdt_local_roles(
            pool_wrapper.address_ref(),
            POOL_REWARD_TOKEN_ID,
            &[EsdtLocalRole::Mint],
        );

        let farm_wrapper = b_mock.create_sc_account(
            &rust_zero,
            Some(&owner),
            farm_builder,
            "dual-reward-farm.wasm",
        );
        let second_farm_wrapper = b_mock.create_sc_account(
            &rust_zero,
            Some(&owner),
            farm_builder,
            "dual-reward-farm-2.wasm",
        );
        for wrapper in [&farm_wrapper, &second_farm_wrapper] {
            b_mock
                .execute_tx(&owner, wrapper, &rust_zero, |sc| {
                    sc.init();
                })
                .assert_ok();
        }

        b_mock
            .execute_tx(&owner, &distributor_wrapper, &rust_zero, |sc| {
                sc.set_farm(managed_address!(farm_wrapper.address_ref()));
            })
            .assert_ok();

        for user in [&first_user, &second_user, &third_user] {
            b_mock.set_esdt_balance(user, STAKING_TOKEN_ID, &rust_biguint!(USER_STAKING_BALANCE));
        }

        let mut setup = DualRewardFarmSetup {
            b_mock,
            owner,
            first_user,
            second_user,
            third_user,
            distributor_wrapper,
            pool_wrapper,
            farm_wrapper,
            second_farm_wrapper,
        };
        setup.initialize_farm(false).assert_ok();

        setup
    }

    pub fn initialize_farm(&mut self, second_farm: bool) -> TxResult {
        let distributor_address = self.distributor_wrapper.address_ref().clone();
        let pool_address = self.pool_wrapper.address_ref().clone();
        let wrapper = if second_farm {
            &self.second_farm_wrapper
        } else {
            &self.farm_wrapper
        };

        self.b_mock
            .execute_tx(&self.owner, wrapper, &rust_biguint!(0), |sc| {
                sc.initialize(
                    managed_token_id!(STAKING_TOKEN_ID),
                    managed_address!(&distributor_address),
                    managed_address!(&pool_address),
                    POOL_ID,
                    managed_buffer!(FARM_NAME),
                    managed_biguint!(DIVISION_SAFETY_CONSTANT),
                );
            })
    }

    pub fn set_distributor_farm(&mut self, second_farm: bool) {
        let farm_address = if second_farm {
            self.second_farm_wrapper.address_ref().clone()
        } else {
            self.farm_wrapper.address_ref().clone()
        };

        self.b_mock
            .execute_tx(
                &self.owner,
                &self.distributor_wrapper,
                &rust_biguint!(0),
                |sc| {
                    sc.set_farm(managed_address!(&farm_address));
                },
            )
            .assert_ok();
    }

    pub fn empty_distributor(&mut self, expected_amount: u64) {
        self.b_mock
            .execute_tx(
                &self.owner,
                &self.distributor_wrapper,
                &rust_biguint!(0),
                |sc| {
                    let remaining = sc.empty();
                    assert_eq!(remaining, managed_biguint!(expected_amount));
                },
            )
            .assert_ok();
    }

    pub fn stake(&mut self, user: &Address, amount: u64) {
        self.stake_on(user, amount, false);
    }

    pub fn stake_on(&mut self, user: &Address, amount: u64, second_farm: bool) {
        let wrapper = if second_farm {
            &self.second_farm_wrapper
        } else {
            &self.farm_wrapper
        };

        self.b_mock
            .execute_esdt_transfer(
                user,
                wrapper,
                STAKING_TOKEN_ID,
                0,
                &rust_biguint!(amount),
                |sc| {
                    sc.stake();
                },
            )
            .assert_ok();
    }

    pub fn unstake(&mut self, user: &Address, amount: u64) {
        self.b_mock
            .execute_tx(user, &self.farm_wrapper, &rust_biguint!(0), |sc| {
                let payment = sc.unstake(managed_biguint!(amount));
                assert_eq!(payment.token_identifier, managed_token_id!(STAKING_TOKEN_ID));
                assert_eq!(payment.amount, managed_biguint!(amount));
            })
            .assert_ok();
    }

    pub fn claim(&mut self, user: &Address, expected_linear: u64, expected_pool: u64) {
        self.claim_on(user, expected_linear, expected_pool, false);
    }

    pub fn claim_on(
        &mut self,
        user: &Address,
        expected_linear: u64,
        expected_pool: u64,
        second_farm: bool,
    ) {
        let wrapper = if second_farm {
            &self.second_farm_wrapper
        } else {
            &self.farm_wrapper
        };

        self.b_mock
            .execute_tx(user, wrapper, &rust_biguint!(0), |sc| {
                let (linear_rewards, pool_rewards) = sc.claim().into_tuple();
                assert_eq!(
                    linear_rewards.token_identifier,
                    managed_token_id!(LINEAR_REWARD_TOKEN_ID)
                );
                assert_eq!(linear_rewards.amount, managed_biguint!(expected_linear));
                assert_eq!(
                    pool_rewards.token_identifier,
                    managed_token_id!(POOL_REWARD_TOKEN_ID)
                );
                assert_eq!(pool_rewards.amount, managed_biguint!(expected_pool));
            })
            .assert_ok();
    }

    pub fn exit(&mut self, user: &Address, amount: u64, expected_linear: u64, expected_pool: u64) {
        self.b_mock
            .execute_tx(user, &self.farm_wrapper, &rust_biguint!(0), |sc| {
                let (unstaked, linear_rewards, pool_rewards) =
                    sc.exit(managed_biguint!(amount)).into_tuple();
                assert_eq!(unstaked.amount, managed_biguint!(amount));
                assert_eq!(linear_rewards.amount, managed_biguint!(expected_linear));
                assert_eq!(pool_rewards.amount, managed_biguint!(expected_pool));
            })
            .assert_ok();
    }

    pub fn check_staked(&mut self, user: &Address, expected_amount: u64) {
        self.b_mock
            .execute_query(&self.farm_wrapper, |sc| {
                let staked = sc.staked(&managed_address!(user)).get();
                assert_eq!(staked, managed_biguint!(expected_amount));
            })
            .assert_ok();
    }

    pub fn check_total_staked(&mut self, expected_amount: u64) {
        self.b_mock
            .execute_query(&self.farm_wrapper, |sc| {
                assert_eq!(sc.total_staked().get(), managed_biguint!(expected_amount));
            })
            .assert_ok();
    }

    pub fn check_claimable(&mut self, user: &Address, token_id: &[u8], expected_amount: u64) {
        self.b_mock
            .execute_query(&self.farm_wrapper, |sc| {
                let claimable = sc.claimable(managed_address!(user), managed_token_id!(token_id));
                assert_eq!(claimable, managed_biguint!(expected_amount));
            })
            .assert_ok();
    }

    pub fn check_settled_claimable(
        &mut self,
        user: &Address,
        token_id: &[u8],
        expected_amount: u64,
    ) {
        self.b_mock
            .execute_query(&self.farm_wrapper, |sc| {
                let claimable = sc.claimable_reward_for_token(
                    managed_token_id!(token_id),
                    managed_address!(user),
                );
                assert_eq!(claimable, managed_biguint!(expected_amount));
            })
            .assert_ok();
    }

    pub fn check_initialized(&mut self, second_farm: bool, expected: bool) {
        let wrapper = if second_farm {
            &self.second_farm_wrapper
        } else {
            &self.farm_wrapper
        };

        self.b_mock
            .execute_query(wrapper, |sc| {
                assert_eq!(sc.initialized().get(), expected);
            })
            .assert_ok();
    }

    pub fn check_user_balance(
        &self,
        user: &Address,
        expected_linear: u64,
        expected_pool: u64,
    ) {
        self.b_mock.check_esdt_balance(
            user,
            LINEAR_REWARD_TOKEN_ID,
            &rust_biguint!(expected_linear),
        );
        self.b_mock
            .check_esdt_balance(user, POOL_REWARD_TOKEN_ID, &rust_biguint!(expected_pool));
    }

    pub fn set_time(&mut self, block_nonce: u64, timestamp: u64) {
        self.b_mock.set_block_nonce(block_nonce);
        self.b_mock.set_block_timestamp(timestamp);
    }
}
