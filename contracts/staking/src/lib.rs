#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, token, Address, Env,
};
use yieldfarm_shared::{
    validate_positive_amount, MintableTokenClient, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD,
};

mod accrual;
mod events;

// Data Types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerRecord {
    pub staked_balance: i128,
    pub accrual_start: u64,
    pub unclaimed_yield: i128, // Banked by unstake, paid by withdraw_yield
}

impl StakerRecord {
    fn fresh(now: u64) -> Self {
        Self {
            staked_balance: 0,
            accrual_start: now,
            unclaimed_yield: 0,
        }
    }

    /// Derived from the balance; never stored separately.
    pub fn is_staking(&self) -> bool {
        self.staked_balance > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    pub admin: Address,
    pub deposit_token: Address,
    pub reward_token: Address,
}

// Storage Keys
#[contracttype]
pub enum DataKey {
    Config,
    Staker(Address),
    TotalStaked,
    TotalYieldPaid,
}

// Error Types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfiguration = 3,
    ZeroAmount = 4,
    InsufficientStake = 5,
    InsufficientFunds = 6,
    AllowanceExceeded = 7,
    NothingToClaim = 8,
    MintAuthorityMissing = 9,
    ArithmeticOverflow = 10,
}

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Initialize the staking pool
    pub fn initialize(
        env: Env,
        admin: Address,
        deposit_token: Address,
        reward_token: Address,
    ) -> Result<(), StakingError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Config) {
            return Err(StakingError::AlreadyInitialized);
        }

        if deposit_token == reward_token {
            return Err(StakingError::InvalidConfiguration);
        }

        admin.require_auth();

        let config = StakingConfig {
            admin: admin.clone(),
            deposit_token: deposit_token.clone(),
            reward_token: reward_token.clone(),
        };

        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::TotalStaked, &0i128);
        env.storage().instance().set(&DataKey::TotalYieldPaid, &0i128);

        events::publish_initialized(&env, admin.clone(), deposit_token, reward_token);

        log!(&env, "Staking pool initialized by admin: {}", admin);

        Ok(())
    }

    /// Stake deposit tokens into the pool.
    ///
    /// The pool pulls `amount` with `transfer_from`, so the user must have
    /// approved the pool beforehand. Staking into an empty position starts a
    /// new accrual period; staking on top of an active one keeps the original
    /// start, and the added funds earn over the whole period at settlement.
    pub fn stake(env: Env, user: Address, amount: i128) -> Result<(), StakingError> {
        user.require_auth();

        let config = Self::config(&env)?;

        if !validate_positive_amount(amount) {
            return Err(StakingError::ZeroAmount);
        }

        let pool = env.current_contract_address();
        let deposit_token = token::Client::new(&env, &config.deposit_token);

        if deposit_token.allowance(&user, &pool) < amount {
            return Err(StakingError::AllowanceExceeded);
        }
        if deposit_token.balance(&user) < amount {
            return Err(StakingError::InsufficientFunds);
        }

        let now = env.ledger().timestamp();
        let mut record = Self::load_record(&env, &user).unwrap_or(StakerRecord::fresh(now));

        if !record.is_staking() {
            record.accrual_start = now;
        }
        record.staked_balance = record
            .staked_balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let total_staked = Self::get_total_staked(env.clone())
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Self::save_record(&env, &user, &record);
        env.storage().instance().set(&DataKey::TotalStaked, &total_staked);

        deposit_token.transfer_from(&pool, &user, &pool, &amount);

        events::publish_staked(
            &env,
            user.clone(),
            amount,
            record.staked_balance,
            record.accrual_start,
        );

        log!(&env, "User {} staked {}, balance now {}", user, amount, record.staked_balance);

        Ok(())
    }

    /// Return `amount` deposit tokens to the user.
    ///
    /// Yield accrued on the balance before the reduction is banked first, so
    /// shrinking the stake never shrinks what was already earned.
    pub fn unstake(env: Env, user: Address, amount: i128) -> Result<(), StakingError> {
        user.require_auth();

        let config = Self::config(&env)?;

        let mut record = Self::load_record(&env, &user).ok_or(StakingError::InsufficientStake)?;

        if !validate_positive_amount(amount) || amount > record.staked_balance {
            return Err(StakingError::InsufficientStake);
        }

        let now = env.ledger().timestamp();
        let elapsed = accrual::elapsed_since(record.accrual_start, now);
        let banked = accrual::accrued_yield(record.staked_balance, elapsed)
            .ok_or(StakingError::ArithmeticOverflow)?;

        record.unclaimed_yield = record
            .unclaimed_yield
            .checked_add(banked)
            .ok_or(StakingError::ArithmeticOverflow)?;
        record.accrual_start = now;
        record.staked_balance -= amount;

        let total_staked = Self::get_total_staked(env.clone())
            .checked_sub(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;

        Self::save_record(&env, &user, &record);
        env.storage().instance().set(&DataKey::TotalStaked, &total_staked);

        let pool = env.current_contract_address();
        token::Client::new(&env, &config.deposit_token).transfer(&pool, &user, &amount);

        events::publish_unstaked(&env, user.clone(), amount, record.staked_balance, banked);

        log!(&env, "User {} unstaked {}, banked {} yield", user, amount, banked);

        Ok(())
    }

    /// Mint all yield owed to the user and restart the accrual clock.
    ///
    /// Pays banked yield plus `staked_balance * elapsed / SECONDS_PER_DAY`.
    /// The pool must hold mint authority over the reward token.
    pub fn withdraw_yield(env: Env, user: Address) -> Result<i128, StakingError> {
        user.require_auth();

        let config = Self::config(&env)?;
        let reward_token = MintableTokenClient::new(&env, &config.reward_token);

        Self::require_mint_authority(&env, &reward_token)?;

        let mut record = Self::load_record(&env, &user).ok_or(StakingError::NothingToClaim)?;
        if !record.is_staking() && record.unclaimed_yield == 0 {
            return Err(StakingError::NothingToClaim);
        }

        let now = env.ledger().timestamp();
        let elapsed = accrual::elapsed_since(record.accrual_start, now);
        let total = accrual::settle(record.unclaimed_yield, record.staked_balance, elapsed)
            .ok_or(StakingError::ArithmeticOverflow)?;

        if total == 0 {
            return Err(StakingError::NothingToClaim);
        }

        let total_paid = Self::get_total_yield_paid(env.clone())
            .checked_add(total)
            .ok_or(StakingError::ArithmeticOverflow)?;

        record.unclaimed_yield = 0;
        record.accrual_start = now;

        Self::save_record(&env, &user, &record);
        env.storage().instance().set(&DataKey::TotalYieldPaid, &total_paid);

        reward_token.mint(&user, &total);

        events::publish_yield_withdrawn(&env, user.clone(), total);

        log!(&env, "User {} withdrew {} yield after {} seconds", user, total, elapsed);

        Ok(total)
    }

    /// Seconds since the user's accrual period started; 0 for unknown users
    pub fn calculate_yield_time(env: Env, user: Address) -> u64 {
        let now = env.ledger().timestamp();
        Self::load_record(&env, &user)
            .map(|record| accrual::elapsed_since(record.accrual_start, now))
            .unwrap_or(0)
    }

    /// Yield accrued in the current period, excluding banked yield
    pub fn calculate_yield_total(env: Env, user: Address) -> Result<i128, StakingError> {
        match Self::load_record(&env, &user) {
            Some(record) => {
                let now = env.ledger().timestamp();
                let elapsed = accrual::elapsed_since(record.accrual_start, now);
                accrual::accrued_yield(record.staked_balance, elapsed)
                    .ok_or(StakingError::ArithmeticOverflow)
            }
            None => Ok(0),
        }
    }

    /// What `withdraw_yield` would pay right now
    pub fn pending_yield(env: Env, user: Address) -> Result<i128, StakingError> {
        match Self::load_record(&env, &user) {
            Some(record) => {
                let now = env.ledger().timestamp();
                let elapsed = accrual::elapsed_since(record.accrual_start, now);
                accrual::settle(record.unclaimed_yield, record.staked_balance, elapsed)
                    .ok_or(StakingError::ArithmeticOverflow)
            }
            None => Ok(0),
        }
    }

    pub fn staking_balance(env: Env, user: Address) -> i128 {
        Self::load_record(&env, &user)
            .map(|record| record.staked_balance)
            .unwrap_or(0)
    }

    pub fn is_staking(env: Env, user: Address) -> bool {
        Self::load_record(&env, &user)
            .map(|record| record.is_staking())
            .unwrap_or(false)
    }

    pub fn start_time(env: Env, user: Address) -> u64 {
        Self::load_record(&env, &user)
            .map(|record| record.accrual_start)
            .unwrap_or(0)
    }

    /// Yield banked by unstakes and not yet withdrawn
    pub fn reward_balance(env: Env, user: Address) -> i128 {
        Self::load_record(&env, &user)
            .map(|record| record.unclaimed_yield)
            .unwrap_or(0)
    }

    pub fn get_staker(env: Env, user: Address) -> Option<StakerRecord> {
        Self::load_record(&env, &user)
    }

    /// Get total amount staked in the pool
    pub fn get_total_staked(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::TotalStaked).unwrap_or(0)
    }

    /// Get total reward tokens minted as yield
    pub fn get_total_yield_paid(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::TotalYieldPaid).unwrap_or(0)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<StakingConfig, StakingError> {
        Self::config(&env)
    }

    // Internal helper functions
    fn config(env: &Env) -> Result<StakingConfig, StakingError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(StakingError::NotInitialized)
    }

    fn load_record(env: &Env, user: &Address) -> Option<StakerRecord> {
        env.storage().persistent().get(&DataKey::Staker(user.clone()))
    }

    /// Records outlive idle periods: every write pushes the entry's TTL out
    /// so banked yield is not archived while the depositor is away.
    fn save_record(env: &Env, user: &Address, record: &StakerRecord) {
        let key = DataKey::Staker(user.clone());
        env.storage().persistent().set(&key, record);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }

    /// Guard: the reward token must name this pool as its mint authority.
    /// A token that cannot answer is treated the same as one that names
    /// someone else.
    fn require_mint_authority(
        env: &Env,
        reward_token: &MintableTokenClient,
    ) -> Result<(), StakingError> {
        match reward_token.try_mint_authority() {
            Ok(Ok(authority)) if authority == env.current_contract_address() => Ok(()),
            _ => Err(StakingError::MintAuthorityMissing),
        }
    }
}
