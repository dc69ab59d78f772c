#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, log, Address, Env, String};
use yieldfarm_shared::{
    validate_positive_amount, MAX_DECIMALS, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD,
};

mod events;

// Data Types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

// Storage Keys
#[contracttype]
pub enum DataKey {
    Metadata,
    MintAuthority,
    TotalSupply,
    Balance(Address),
}

// Error Types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RewardTokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfiguration = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    ArithmeticOverflow = 6,
}

/// Reward token minted by the staking pool as yield.
///
/// There is no pre-funded supply: every unit in circulation was created by
/// `mint`, which only the mint authority may call.
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Initialize the token with its first mint authority
    pub fn initialize(
        env: Env,
        mint_authority: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), RewardTokenError> {
        if env.storage().instance().has(&DataKey::MintAuthority) {
            return Err(RewardTokenError::AlreadyInitialized);
        }

        if decimals > MAX_DECIMALS {
            return Err(RewardTokenError::InvalidConfiguration);
        }

        let metadata = TokenMetadata {
            decimals,
            name,
            symbol,
        };

        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::MintAuthority, &mint_authority);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);

        log!(&env, "Reward token initialized, mint authority: {}", mint_authority);

        Ok(())
    }

    /// Mint new tokens to `to`. Only the mint authority may call this.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), RewardTokenError> {
        let authority = Self::mint_authority(env.clone())?;
        authority.require_auth();

        if !validate_positive_amount(amount) {
            return Err(RewardTokenError::InvalidAmount);
        }

        let total_supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(RewardTokenError::ArithmeticOverflow)?;
        let balance = Self::balance(env.clone(), to.clone())
            .checked_add(amount)
            .ok_or(RewardTokenError::ArithmeticOverflow)?;

        env.storage().instance().set(&DataKey::TotalSupply, &total_supply);
        Self::write_balance(&env, &to, balance);

        events::publish_minted(&env, authority, to.clone(), amount, total_supply);

        log!(&env, "Minted {} reward tokens to {}", amount, to);

        Ok(())
    }

    /// Hand minting rights to `new_authority`. The current authority must sign.
    pub fn set_mint_authority(env: Env, new_authority: Address) -> Result<(), RewardTokenError> {
        let authority = Self::mint_authority(env.clone())?;
        authority.require_auth();

        env.storage().instance().set(&DataKey::MintAuthority, &new_authority);

        events::publish_authority_changed(&env, authority, new_authority.clone());

        log!(&env, "Mint authority transferred to {}", new_authority);

        Ok(())
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        from.require_auth();

        if !validate_positive_amount(amount) {
            return Err(RewardTokenError::InvalidAmount);
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(RewardTokenError::InsufficientBalance);
        }

        // Debit first so a self-transfer reads the already-debited balance.
        Self::write_balance(&env, &from, from_balance - amount);

        let to_balance = Self::balance(env.clone(), to.clone())
            .checked_add(amount)
            .ok_or(RewardTokenError::ArithmeticOverflow)?;
        Self::write_balance(&env, &to, to_balance);

        events::publish_transferred(&env, from, to, amount);

        Ok(())
    }

    pub fn mint_authority(env: Env) -> Result<Address, RewardTokenError> {
        env.storage()
            .instance()
            .get(&DataKey::MintAuthority)
            .ok_or(RewardTokenError::NotInitialized)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage().persistent().get(&DataKey::Balance(id)).unwrap_or(0)
    }

    pub fn decimals(env: Env) -> Result<u32, RewardTokenError> {
        Ok(Self::metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, RewardTokenError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, RewardTokenError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, RewardTokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(RewardTokenError::NotInitialized)
    }
}
