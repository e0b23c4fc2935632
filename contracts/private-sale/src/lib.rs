#![no_std]

mod storage;

use ceb_types::tokens_for_payment;
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, token, Address, Env, Vec,
};
use storage::SaleConfig;

/// Contract error codes. Failures of the external payment ledger are not
/// translated; they propagate as host errors from the cross-contract call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum SaleError {
    /// Caller is not the sale owner.
    Unauthorized = 1,
    /// Buyer is not permitted to participate in the sale.
    NotWhitelisted = 2,
    /// Claim attempted before the unlock date.
    TooEarly = 3,
    /// Claim attempted twice; claims are one-shot per buyer.
    AlreadyClaimed = 4,
    /// Claim attempted with zero outstanding credit.
    NothingToClaim = 5,
    /// Negative payment amounts are not representable.
    NegativeAmount = 6,
}

#[contract]
pub struct PrivateSale;

#[contractimpl]
impl PrivateSale {
    /// Initialize the sale. All parameters are immutable afterwards; the
    /// unlock date is fixed at `now + lock_duration` seconds.
    ///
    /// The sale contract's own sale-token balance funds the claims; it must
    /// be deposited by the owner before buyers claim.
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        pay_token: Address,
        receiver: Address,
        token_price: i128,
        lock_duration: u64,
    ) {
        if storage::has_config(&env) {
            panic!("Already initialized");
        }
        owner.require_auth();

        if token_price <= 0 {
            panic!("Token price must be positive");
        }

        let unlock_date = env
            .ledger()
            .timestamp()
            .checked_add(lock_duration)
            .expect("Lock duration overflow");
        let config = SaleConfig {
            owner: owner.clone(),
            sale_token,
            pay_token,
            receiver,
            token_price,
            unlock_date,
        };
        storage::set_config(&env, &config);

        env.events()
            .publish((symbol_short!("init"), owner), unlock_date);
    }

    /// Permit `buyers` to purchase. Owner only. Idempotent per address.
    pub fn add_to_whitelist(
        env: Env,
        caller: Address,
        buyers: Vec<Address>,
    ) -> Result<(), SaleError> {
        caller.require_auth();
        let config = storage::get_config(&env);
        if caller != config.owner {
            return Err(SaleError::Unauthorized);
        }

        for buyer in buyers.iter() {
            storage::set_whitelisted(&env, &buyer);
        }

        env.events().publish((symbol_short!("wl_add"), caller), buyers);
        Ok(())
    }

    /// Purchase sale-token credit with `pay_amount` of the payment token.
    ///
    /// The payment is pulled from the buyer straight to the receiver; the
    /// buyer must have approved this contract on the payment token first.
    /// Credit accrues at `pay_amount / token_price` units (floored; any
    /// remainder is dropped) and accumulates across repeated purchases.
    pub fn buy_tokens(env: Env, buyer: Address, pay_amount: i128) -> Result<(), SaleError> {
        buyer.require_auth();

        if pay_amount < 0 {
            return Err(SaleError::NegativeAmount);
        }
        if !storage::is_whitelisted(&env, &buyer) {
            return Err(SaleError::NotWhitelisted);
        }

        let config = storage::get_config(&env);

        // Pull payment directly to the receiver; funds never rest here
        let pay_client = token::Client::new(&env, &config.pay_token);
        pay_client.transfer_from(
            &env.current_contract_address(),
            &buyer,
            &config.receiver,
            &pay_amount,
        );

        let units = tokens_for_payment(pay_amount, config.token_price);
        let credited = storage::get_credited(&env, &buyer)
            .checked_add(units)
            .expect("Credit overflow");
        storage::set_credited(&env, &buyer, credited);

        env.events()
            .publish((symbol_short!("buy"), buyer), (pay_amount, units));
        Ok(())
    }

    /// Release the buyer's credited sale tokens, once, after the unlock date.
    ///
    /// The release is an ordinary sale-token transfer from this contract's
    /// balance, so the token's burn policy applies unless this contract is on
    /// the token's exemption whitelist: a non-exempt sale delivers the credit
    /// minus the 5% burn.
    pub fn claim_tokens(env: Env, buyer: Address) -> Result<(), SaleError> {
        buyer.require_auth();

        let config = storage::get_config(&env);
        if env.ledger().timestamp() < config.unlock_date {
            return Err(SaleError::TooEarly);
        }
        if storage::is_claimed(&env, &buyer) {
            return Err(SaleError::AlreadyClaimed);
        }
        let credited = storage::get_credited(&env, &buyer);
        if credited == 0 {
            return Err(SaleError::NothingToClaim);
        }

        let sale_client = token::Client::new(&env, &config.sale_token);
        sale_client.transfer(&env.current_contract_address(), &buyer, &credited);

        storage::set_credited(&env, &buyer, 0);
        storage::set_claimed(&env, &buyer);

        env.events().publish((symbol_short!("claim"), buyer), credited);
        Ok(())
    }

    // === View Functions ===

    /// Get the sale owner
    pub fn owner(env: Env) -> Address {
        storage::get_config(&env).owner
    }

    /// Get the address of the token being sold
    pub fn sale_token_address(env: Env) -> Address {
        storage::get_config(&env).sale_token
    }

    /// Get the address of the payment token
    pub fn pay_token_address(env: Env) -> Address {
        storage::get_config(&env).pay_token
    }

    /// Get the payment receiver
    pub fn receiver_address(env: Env) -> Address {
        storage::get_config(&env).receiver
    }

    /// Get the fixed unit price
    pub fn token_price(env: Env) -> i128 {
        storage::get_config(&env).token_price
    }

    /// Get the unlock timestamp
    pub fn unlock_date(env: Env) -> u64 {
        storage::get_config(&env).unlock_date
    }

    /// Get a buyer's outstanding (unclaimed) credit
    pub fn balances(env: Env, buyer: Address) -> i128 {
        storage::get_credited(&env, &buyer)
    }

    /// True once a buyer has claimed
    pub fn claimed(env: Env, buyer: Address) -> bool {
        storage::is_claimed(&env, &buyer)
    }

    /// True if a buyer is permitted to purchase
    pub fn is_whitelisted(env: Env, buyer: Address) -> bool {
        storage::is_whitelisted(&env, &buyer)
    }
}
