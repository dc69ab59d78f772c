#![no_std]
use soroban_sdk::{contractclient, Address, Env};

// Shared constants and interfaces used across the Yield Farm contracts
// so the staking pool and the reward token agree on units and call shapes.

// ============================================================================
// Cross-Contract Interfaces
// ============================================================================

/// The client shape the staking pool calls on the reward token.
///
/// The pool only ever mints (it never holds reward tokens) and checks that it
/// has been made the mint authority before settling yield.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableToken {
    /// Create `amount` new units and credit them to `to`.
    /// Requires authorization from the current mint authority.
    fn mint(env: Env, to: Address, amount: i128);

    /// The only address allowed to mint.
    fn mint_authority(env: Env) -> Address;
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> bool {
    amount > 0
}

// ============================================================================
// Constants
// ============================================================================

/// Seconds in a day. One staked unit earns one reward unit per day.
pub const SECONDS_PER_DAY: u64 = 86400;

/// Ledgers per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL, in ledgers, that per-account persistent entries are extended to on write.
pub const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Remaining TTL below which a write extends the entry.
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Upper bound on token decimals, matching the Stellar asset contract.
pub const MAX_DECIMALS: u32 = 18;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount(1));
        assert!(!validate_positive_amount(0));
        assert!(!validate_positive_amount(-5));
    }
}
