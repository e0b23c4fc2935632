// Invariant predicates for the token's supply accounting. Kept as pure
// functions so they can be checked from tests and verification tooling.

use ceb_types::{BPS_DENOMINATOR, BURN_RATE_BPS};

/// Invariant: total supply never drops below the floor
///
/// Property:
///   total_supply >= min_supply
pub fn supply_above_floor(total_supply: i128, min_supply: i128) -> bool {
    total_supply >= min_supply
}

/// Invariant: a burn never exceeds the naive 5% rate, and never breaches
/// the supply floor
///
/// Property:
///   burn <= amount * BURN_RATE_BPS / BPS_DENOMINATOR
///   total_supply - burn >= min_supply
pub fn burn_bounded(burn: i128, amount: i128, total_supply: i128, min_supply: i128) -> bool {
    burn >= 0
        && burn <= amount * BURN_RATE_BPS / BPS_DENOMINATOR
        && total_supply - burn >= min_supply
}

/// Invariant: a transfer conserves value
///
/// Property:
///   debited == delivered + burned
///
/// Whatever leaves the sender is either credited to the receiver or removed
/// from total supply; nothing else.
pub fn transfer_conserves_value(debited: i128, delivered: i128, burned: i128) -> bool {
    debited == delivered + burned
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceb_types::{burn_amount, INITIAL_SUPPLY, MIN_SUPPLY, UNIT};

    #[test]
    fn test_supply_above_floor() {
        assert!(supply_above_floor(INITIAL_SUPPLY, MIN_SUPPLY));
        assert!(supply_above_floor(MIN_SUPPLY, MIN_SUPPLY));
        assert!(!supply_above_floor(MIN_SUPPLY - 1, MIN_SUPPLY));
    }

    #[test]
    fn test_burn_bounded_normal() {
        let amount = 100 * UNIT;
        let burn = burn_amount(amount, INITIAL_SUPPLY, MIN_SUPPLY);
        assert!(burn_bounded(burn, amount, INITIAL_SUPPLY, MIN_SUPPLY));
    }

    #[test]
    fn test_burn_bounded_at_floor() {
        let amount = 100 * UNIT;
        let burn = burn_amount(amount, MIN_SUPPLY, MIN_SUPPLY);
        assert_eq!(burn, 0);
        assert!(burn_bounded(burn, amount, MIN_SUPPLY, MIN_SUPPLY));
    }

    #[test]
    fn test_burn_bounded_rejects_floor_breach() {
        // A burn that would take supply below the floor is invalid
        assert!(!burn_bounded(10, 1000, MIN_SUPPLY + 5, MIN_SUPPLY));
    }

    #[test]
    fn test_transfer_conserves_value() {
        assert!(transfer_conserves_value(100, 95, 5));
        assert!(transfer_conserves_value(100, 100, 0));
        assert!(!transfer_conserves_value(100, 95, 4));
    }
}
