#![no_std]

use soroban_fixed_point_math::FixedPoint;

/// Token decimals (18, matching the 10^18 base unit)
pub const DECIMALS: u32 = 18;

/// One whole token in base units (10^18)
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Initial supply credited to the owner at initialization: 1,000,000,000 tokens
pub const INITIAL_SUPPLY: i128 = 1_000_000_000 * UNIT;

/// Supply floor: 10,000,000 tokens (1% of initial supply).
/// Burns are capped so total supply never drops below this.
pub const MIN_SUPPLY: i128 = 10_000_000 * UNIT;

/// Burn rate applied to non-exempt transfers, in basis points (5%)
pub const BURN_RATE_BPS: i128 = 500;

/// Basis point denominator
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Compute the amount burned from a transfer of `amount` by a non-exempt
/// sender, given the current total supply.
///
/// The naive burn is `amount * BURN_RATE_BPS / BPS_DENOMINATOR` (floored).
/// It is then capped at `total_supply - min_supply` so the supply floor is
/// never breached; at the floor the burn is 0 and the transfer still
/// delivers the full amount.
pub fn burn_amount(amount: i128, total_supply: i128, min_supply: i128) -> i128 {
    let naive = amount
        .fixed_mul_floor(BURN_RATE_BPS, BPS_DENOMINATOR)
        .expect("burn overflow");
    let headroom = (total_supply - min_supply).max(0);
    naive.min(headroom)
}

/// Convert a payment amount into sale-token units at a fixed unit price.
///
/// Flooring integer division: any remainder from a non-divisible payment is
/// dropped, not refunded.
pub fn tokens_for_payment(pay_amount: i128, token_price: i128) -> i128 {
    if token_price <= 0 {
        panic!("Token price must be positive");
    }
    pay_amount / token_price
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Constant sanity ===

    #[test]
    fn test_min_supply_is_one_percent_of_initial() {
        assert_eq!(MIN_SUPPLY * 100, INITIAL_SUPPLY);
    }

    // === burn_amount tests ===

    #[test]
    fn test_burn_is_five_percent() {
        // 100 tokens -> 5 tokens burned
        assert_eq!(burn_amount(100 * UNIT, INITIAL_SUPPLY, MIN_SUPPLY), 5 * UNIT);
    }

    #[test]
    fn test_burn_rounds_down() {
        // 19 base units * 5% = 0.95 -> 0
        assert_eq!(burn_amount(19, INITIAL_SUPPLY, MIN_SUPPLY), 0);
        // 20 base units * 5% = 1
        assert_eq!(burn_amount(20, INITIAL_SUPPLY, MIN_SUPPLY), 1);
        // 39 base units * 5% = 1.95 -> 1
        assert_eq!(burn_amount(39, INITIAL_SUPPLY, MIN_SUPPLY), 1);
    }

    #[test]
    fn test_burn_zero_amount() {
        assert_eq!(burn_amount(0, INITIAL_SUPPLY, MIN_SUPPLY), 0);
    }

    #[test]
    fn test_burn_capped_near_floor() {
        // Only 2 base units of headroom left; naive burn of 5 is capped to 2
        let supply = MIN_SUPPLY + 2;
        assert_eq!(burn_amount(100, supply, MIN_SUPPLY), 2);
    }

    #[test]
    fn test_burn_exactly_consumes_headroom() {
        // Naive burn equals headroom: no capping needed, floor reached exactly
        let supply = MIN_SUPPLY + 5;
        assert_eq!(burn_amount(100, supply, MIN_SUPPLY), 5);
    }

    #[test]
    fn test_burn_suppressed_at_floor() {
        assert_eq!(burn_amount(100 * UNIT, MIN_SUPPLY, MIN_SUPPLY), 0);
    }

    #[test]
    fn test_burn_full_initial_supply_transfer() {
        // Worst-case magnitude: the entire initial supply moves at once
        let expected = INITIAL_SUPPLY / 20; // 5%
        assert_eq!(
            burn_amount(INITIAL_SUPPLY, INITIAL_SUPPLY, MIN_SUPPLY),
            expected
        );
    }

    // === tokens_for_payment tests ===

    #[test]
    fn test_tokens_at_unit_price_one() {
        assert_eq!(tokens_for_payment(1000 * UNIT, 1), 1000 * UNIT);
    }

    #[test]
    fn test_tokens_at_higher_price() {
        assert_eq!(tokens_for_payment(500, 2), 250);
    }

    #[test]
    fn test_tokens_remainder_dropped() {
        // 7 / 3 = 2, remainder 1 is not refunded
        assert_eq!(tokens_for_payment(7, 3), 2);
        assert_eq!(tokens_for_payment(2, 3), 0);
    }

    #[test]
    fn test_tokens_zero_payment() {
        assert_eq!(tokens_for_payment(0, 1), 0);
    }

    #[test]
    #[should_panic(expected = "Token price must be positive")]
    fn test_tokens_zero_price_panics() {
        tokens_for_payment(100, 0);
    }
}
