//! Distance-based fares.
//!
//! A single fixed staircase from total route length to price, no zones and
//! no transfer surcharges.

/// Upper bound (inclusive, metres) of each price tier, ascending.
pub const FARE_TIERS: [(i64, u32); 7] = [
    (6_000, 3),
    (12_000, 4),
    (22_000, 5),
    (32_000, 6),
    (52_000, 7),
    (72_000, 8),
    (92_000, 9),
];

/// Price for anything longer than the last tier.
pub const MAX_FARE: u32 = 10;

/// Price of a route of `distance` metres.
///
/// Returns `None` when the distance is missing or negative.
///
/// # Examples
///
/// ```
/// use route_server::fare::calculate_price;
///
/// assert_eq!(calculate_price(Some(6_000)), Some(3));
/// assert_eq!(calculate_price(Some(6_001)), Some(4));
/// assert_eq!(calculate_price(Some(-1)), None);
/// assert_eq!(calculate_price(None), None);
/// ```
pub fn calculate_price(distance: Option<i64>) -> Option<u32> {
    let distance = distance.filter(|d| *d >= 0)?;
    let price = FARE_TIERS
        .iter()
        .find(|(limit, _)| distance <= *limit)
        .map_or(MAX_FARE, |(_, price)| *price);
    Some(price)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Longer routes never cost less
        #[test]
        fn monotonic(a in 0i64..200_000, b in 0i64..200_000) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calculate_price(Some(short)) <= calculate_price(Some(long)));
        }

        /// Every valid distance has a price between the first tier and the cap
        #[test]
        fn bounded(d in 0i64..i64::MAX) {
            let price = calculate_price(Some(d)).unwrap();
            prop_assert!((3..=MAX_FARE).contains(&price));
        }
    }
}
