use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub deposit_token: Address,
    pub reward_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeEvent {
    pub user: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub accrual_start: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeEvent {
    pub user: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub banked_yield: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldWithdrawnEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    deposit_token: Address,
    reward_token: Address,
) {
    let event = InitializedEvent {
        admin,
        deposit_token,
        reward_token,
    };
    env.events().publish((symbol_short!("init"),), event);
}

pub fn publish_staked(
    env: &Env,
    user: Address,
    amount: i128,
    new_balance: i128,
    accrual_start: u64,
) {
    let event = StakeEvent {
        user: user.clone(),
        amount,
        new_balance,
        accrual_start,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("stake"), user), event);
}

pub fn publish_unstaked(
    env: &Env,
    user: Address,
    amount: i128,
    new_balance: i128,
    banked_yield: i128,
) {
    let event = UnstakeEvent {
        user: user.clone(),
        amount,
        new_balance,
        banked_yield,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("unstake"), user), event);
}

pub fn publish_yield_withdrawn(env: &Env, user: Address, amount: i128) {
    let event = YieldWithdrawnEvent {
        user: user.clone(),
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((symbol_short!("yield"), user), event);
}
