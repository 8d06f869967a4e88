pub type Nonce = u64;
pub type Timestamp = u64;
pub type PoolId = u64;
pub type AllocPoint = u64;
