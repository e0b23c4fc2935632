use crate::storage::{get_balance, get_owner, get_total_supply, is_whitelisted, set_balance, set_total_supply};
use crate::TokenError;
use ceb_types::{burn_amount, MIN_SUPPLY};
use soroban_sdk::{symbol_short, Address, Env};

/// Burn exemption is decided by the sender alone: the owner is always exempt,
/// everyone else needs an explicit whitelist entry. The receiver's status is
/// irrelevant.
pub fn is_exempt(env: &Env, id: &Address) -> bool {
    *id == get_owner(env) || is_whitelisted(env, id)
}

/// Move `amount` from `from` to `to`, applying the burn policy.
///
/// A non-exempt sender pays a 5% burn out of the transferred amount, capped
/// so total supply never drops below the floor. The receiver is credited
/// `amount - burn`.
///
/// The transfer event carries the requested `amount`; the burned share is
/// published as a separate `burn` event.
pub fn execute_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }

    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }

    let total_supply = get_total_supply(env);
    let burn = if is_exempt(env, from) {
        0
    } else {
        burn_amount(amount, total_supply, MIN_SUPPLY)
    };
    let delivered = amount - burn;

    set_balance(env, from, from_balance - amount);
    set_balance(env, to, get_balance(env, to) + delivered);

    if burn > 0 {
        set_total_supply(env, total_supply - burn);
        env.events().publish((symbol_short!("burn"), from.clone()), burn);
    }

    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );

    Ok(())
}
