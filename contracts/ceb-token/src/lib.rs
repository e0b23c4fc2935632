#![no_std]

pub mod invariants;

mod storage;
mod transfer;

use ceb_types::{DECIMALS, INITIAL_SUPPLY, MIN_SUPPLY};
use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, Address, Env, String};

/// Contract error codes. Auth failures surface as host panics (require_auth).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum TokenError {
    /// Caller is not the token owner.
    Unauthorized = 1,
    /// Transfer exceeds the sender's balance.
    InsufficientBalance = 2,
    /// Spender's live allowance is smaller than the requested amount.
    InsufficientAllowance = 3,
    /// Negative amounts are not representable token values.
    NegativeAmount = 4,
    /// Allowance expiration ledger is already in the past.
    InvalidExpiration = 5,
}

#[contract]
pub struct CebToken;

#[contractimpl]
impl CebToken {
    /// Initialize the token: fixed metadata, full initial supply credited to
    /// the owner. The owner is exempt from burn by construction.
    pub fn initialize(env: Env, owner: Address) {
        if storage::has_owner(&env) {
            panic!("Already initialized");
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_total_supply(&env, INITIAL_SUPPLY);
        storage::set_balance(&env, &owner, INITIAL_SUPPLY);

        env.events()
            .publish((symbol_short!("init"), owner), INITIAL_SUPPLY);
    }

    /// Transfer `amount` from `from` to `to`.
    ///
    /// Non-exempt senders pay a 5% burn out of the amount; the burn is capped
    /// so total supply never drops below the minimum supply floor.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        transfer::execute_transfer(&env, &from, &to, amount)
    }

    /// Approve `spender` to move up to `amount` on behalf of `from`, valid
    /// until `expiration_ledger`.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(TokenError::InvalidExpiration);
        }
        storage::set_allowance(&env, &from, &spender, amount, expiration_ledger);
        env.events()
            .publish((symbol_short!("approve"), from, spender), amount);
        Ok(())
    }

    /// Get the live allowance from `from` to `spender` (0 once expired)
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender)
    }

    /// Transfer on behalf of `from`, spending `spender`'s allowance.
    ///
    /// The burn policy applies exactly as in `transfer`: it is the sender
    /// (`from`) whose exemption status decides whether a burn is taken.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }
        storage::spend_allowance(&env, &from, &spender, amount)?;
        transfer::execute_transfer(&env, &from, &to, amount)
    }

    /// Exempt `account` from burn. Owner only. Idempotent.
    pub fn add_to_whitelist(env: Env, caller: Address, account: Address) -> Result<(), TokenError> {
        caller.require_auth();
        if caller != storage::get_owner(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_whitelisted(&env, &account, true);
        env.events()
            .publish((symbol_short!("wl_add"), caller), account);
        Ok(())
    }

    /// Remove `account`'s burn exemption. Owner only. Idempotent.
    ///
    /// The owner stays exempt regardless of whitelist membership.
    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        if caller != storage::get_owner(&env) {
            return Err(TokenError::Unauthorized);
        }
        storage::set_whitelisted(&env, &account, false);
        env.events()
            .publish((symbol_short!("wl_rem"), caller), account);
        Ok(())
    }

    // === View Functions ===

    /// True if `account` has an explicit burn exemption
    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    /// Get `id`'s balance
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    /// Get the current total supply
    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    /// Get the supply floor below which burns are suppressed
    pub fn min_supply(_env: Env) -> i128 {
        MIN_SUPPLY
    }

    /// Get the token owner
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, "CEBToken")
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, "CEB")
    }
}
