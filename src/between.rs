// model = "claude-opus-4-5"
// created = "2026-02-04"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Generating keys between existing keys.
//!
//! This is the top of the crate: given optional lower and upper bounds,
//! produce a new key that sorts strictly between them. Four cases, by which
//! bounds are present:
//!
//! 1. Neither: the canonical first key, `a0`.
//! 2. Upper only: step down — reuse the bound's bare integer part if it has
//!    a fraction to spare, otherwise decrement into the previous tier.
//! 3. Lower only: step up — increment into the next tier, or extend the
//!    fraction when no next tier exists.
//! 4. Both: bisect the fractions if the tiers match, otherwise try the next
//!    tier up from the lower bound and fall back to extending its fraction.
//!
//! Bounds are `Option` and failures are typed; there is no sentinel value
//! doing double duty. A malformed key cannot reach this module at all — it
//! fails at `OrderKey::parse`.

use std::fmt;

use crate::integer::IntegerPart;
use crate::key::OrderKey;
use crate::midpoint::midpoint;

/// Why no key could be generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetweenError {
    /// The lower bound does not sort strictly before the upper bound.
    OutOfOrder,
    /// No key exists between the bounds. Only reachable at the extreme
    /// edges of the keyspace.
    Exhausted,
}

impl fmt::Display for BetweenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            BetweenError::OutOfOrder => write!(f, "bounds are not in strictly ascending order"),
            BetweenError::Exhausted => write!(f, "no key exists between the bounds"),
        };
    }
}

impl std::error::Error for BetweenError {}

/// Glue an integer part and a fractional tail into a key.
fn join(integer: &IntegerPart, fraction: &str) -> OrderKey {
    let mut out = String::with_capacity(integer.encoded_len() + fraction.len());
    integer.write(&mut out);
    out.push_str(fraction);
    return OrderKey::from_raw(out);
}

/// A key strictly between the given bounds.
///
/// `None` means unbounded on that side. With both bounds present, the lower
/// must sort strictly before the upper.
pub fn key_between(
    lower: Option<&OrderKey>,
    upper: Option<&OrderKey>,
) -> Result<OrderKey, BetweenError> {
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if lower >= upper {
            return Err(BetweenError::OutOfOrder);
        }
    }
    return match (lower, upper) {
        (None, None) => Ok(OrderKey::from_raw("a0".to_string())),
        (None, Some(upper)) => below(upper),
        (Some(lower), None) => above(lower),
        (Some(lower), Some(upper)) => between(lower, upper),
    };
}

/// A key strictly below `upper`.
fn below(upper: &OrderKey) -> Result<OrderKey, BetweenError> {
    let (integer, fraction) = upper.split();
    if integer.is_minimum() {
        // already in the lowest tier; bisect below the fraction
        let tail = midpoint("", fraction).ok_or(BetweenError::Exhausted)?;
        return Ok(join(&integer, &tail));
    }
    if !fraction.is_empty() {
        // the bare integer part sorts strictly before the full key
        return Ok(OrderKey::from_raw(integer.encode()));
    }
    let previous = integer
        .decrement()
        .into_part()
        .ok_or(BetweenError::Exhausted)?;
    if previous.is_minimum() {
        // the step landed on the reserved minimum, which is not a complete
        // key; give it a fraction instead
        let tail = midpoint("", "").ok_or(BetweenError::Exhausted)?;
        return Ok(join(&previous, &tail));
    }
    return Ok(OrderKey::from_raw(previous.encode()));
}

/// A key strictly above `lower`.
fn above(lower: &OrderKey) -> Result<OrderKey, BetweenError> {
    let (integer, fraction) = lower.split();
    return match integer.increment().into_part() {
        Some(next) => Ok(OrderKey::from_raw(next.encode())),
        None => {
            // no tier above this one; extend the fraction instead
            let tail = midpoint(fraction, "").ok_or(BetweenError::Exhausted)?;
            Ok(join(&integer, &tail))
        }
    };
}

/// A key strictly between two present bounds.
fn between(lower: &OrderKey, upper: &OrderKey) -> Result<OrderKey, BetweenError> {
    let (lower_int, lower_frac) = lower.split();
    let (upper_int, upper_frac) = upper.split();
    if lower_int == upper_int {
        // same tier: the gap is entirely fractional
        let tail = midpoint(lower_frac, upper_frac).ok_or(BetweenError::Exhausted)?;
        return Ok(join(&lower_int, &tail));
    }
    let next = lower_int
        .increment()
        .into_part()
        .ok_or(BetweenError::Exhausted)?;
    let encoded = next.encode();
    if encoded.as_str() < upper.as_str() {
        // the next tier up fits strictly below the upper bound
        return Ok(OrderKey::from_raw(encoded));
    }
    // stay in the lower bound's tier and extend past its fraction
    let tail = midpoint(lower_frac, "").ok_or(BetweenError::Exhausted)?;
    return Ok(join(&lower_int, &tail));
}

/// `count` distinct keys strictly between the bounds, in ascending order.
///
/// With both bounds present the keys spread by recursive bisection, median
/// first, so they stay short. With an unbounded side they fill outward from
/// the bound one step at a time.
pub fn n_keys_between(
    lower: Option<&OrderKey>,
    upper: Option<&OrderKey>,
    count: usize,
) -> Result<Vec<OrderKey>, BetweenError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if count == 1 {
        return Ok(vec![key_between(lower, upper)?]);
    }
    if upper.is_none() {
        let mut out = Vec::with_capacity(count);
        let mut last = key_between(lower, None)?;
        for _ in 1..count {
            let next = key_between(Some(&last), None)?;
            out.push(last);
            last = next;
        }
        out.push(last);
        return Ok(out);
    }
    if lower.is_none() {
        let mut out = Vec::with_capacity(count);
        let mut first = key_between(None, upper)?;
        for _ in 1..count {
            let previous = key_between(None, Some(&first))?;
            out.push(first);
            first = previous;
        }
        out.push(first);
        out.reverse();
        return Ok(out);
    }
    // both bounds: place the median, then fill each half
    let median_index = count / 2;
    let median = key_between(lower, upper)?;
    let mut out = n_keys_between(lower, Some(&median), median_index)?;
    let rest = n_keys_between(Some(&median), upper, count - median_index - 1)?;
    out.push(median);
    out.extend(rest);
    return Ok(out);
}
