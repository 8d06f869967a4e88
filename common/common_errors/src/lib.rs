#![no_std]

pub const ERROR_ZERO_AMOUNT: &[u8] = b"Zero amount";
pub const ERROR_NOT_AN_ESDT: &[u8] = b"Not a valid esdt id";
pub const ERROR_BAD_INPUT_TOKEN: &[u8] = b"Bad input token";
pub const ERROR_SAME_TOKEN_IDS: &[u8] = b"Same token ids";
pub const ERROR_PARAMETERS: &[u8] = b"Bad parameters";

pub const ERROR_INSUFFICIENT_BALANCE: &[u8] =
    b"Cannot withdraw amount bigger than available balance";
pub const ERROR_ALREADY_INITIALIZED: &[u8] = b"Farm already initialized";
pub const ERROR_NOT_INITIALIZED: &[u8] = b"Farm not initialized";
pub const ERROR_NOT_ACTIVE_FARM: &[u8] = b"Distributor farm is not set";
pub const ERROR_UNKNOWN_REWARD_TOKEN: &[u8] = b"Unknown reward token";

pub const ERROR_NO_FARM_SET: &[u8] = b"No farm set";

pub const ERROR_UNKNOWN_POOL: &[u8] = b"Unknown pool";
pub const ERROR_DEPOSIT_TOO_LOW: &[u8] = b"Withdraw amount exceeds deposit";
