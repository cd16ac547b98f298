// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-04"
// driver = "Isaac Clayton"

//! Digit-wise bisection of fractional tails.
//!
//! Given two fractional tails `a < b`, `midpoint` finds a short string
//! strictly between them. The tails are compared digit by digit: the longest
//! common prefix carries over unchanged, and the first position with a gap
//! gets the digit halfway across it. When two digits are adjacent there is
//! no room at that position, so the search either borrows `b`'s next digit
//! or extends `a` by one position and tries again, adding precision until a
//! gap opens up.
//!
//! While scanning the common prefix, `a` reads as if padded with rank-0
//! digits past its end. Without the padding, a `b` that continues with
//! zeros past the end of `a` would fall through to the borrow branch and
//! produce a tail ending in the minimum digit, which no valid key may have.
//!
//! Tails are re-sliced by index throughout; nothing is copied until the
//! result is assembled.

use crate::digit;

/// Whether a tail ends in the minimum digit. Such tails are not canonical:
/// trimming the digit yields an equivalent shorter value.
fn ends_in_min(tail: &[u8]) -> bool {
    return tail.last() == Some(&digit::DIGITS[0]);
}

/// A string strictly between fractional tails `a` and `b`.
///
/// An empty `a` means "start of tier"; an empty `b` means "no upper limit".
/// Returns `None` if `b` is non-empty and `a >= b`, if either tail ends in
/// the minimum digit, or if a byte outside the alphabet appears.
///
/// The result never ends in the minimum digit, so appending it to a valid
/// integer part always yields a valid key.
pub fn midpoint(a: &str, b: &str) -> Option<String> {
    let out = bisect(a.as_bytes(), b.as_bytes())?;
    return Some(String::from_utf8(out).expect("digit alphabet is ascii"));
}

fn bisect(a: &[u8], b: &[u8]) -> Option<Vec<u8>> {
    if !b.is_empty() && a >= b {
        return None;
    }
    if ends_in_min(a) || ends_in_min(b) {
        return None;
    }

    if !b.is_empty() {
        // strip the longest common prefix, reading `a` as padded with
        // rank-0 digits past its end
        let mut n = 0;
        while n < b.len() && b[n] == *a.get(n).unwrap_or(&digit::DIGITS[0]) {
            n += 1;
        }
        if n > 0 {
            let a_tail = if n < a.len() { &a[n..] } else { &[][..] };
            let mut out = b[..n].to_vec();
            out.extend(bisect(a_tail, &b[n..])?);
            return Some(out);
        }
    }

    let a_rank = match a.first() {
        Some(&head) => digit::rank(head)? as usize,
        None => 0,
    };
    let b_rank = match b.first() {
        Some(&head) => digit::rank(head)? as usize,
        None => digit::RADIX as usize,
    };

    if b_rank - a_rank > 1 {
        // a digit fits strictly between; ties round toward the upper half
        let mid = (a_rank + b_rank + 1) / 2;
        return Some(vec![digit::from_rank(mid as u8)]);
    }
    if b.len() > 1 {
        // adjacent first digits, but b's first digit alone already sorts
        // strictly between the tails
        return Some(vec![b[0]]);
    }
    // no gap at this position: keep a's digit and bisect one level deeper
    let a_tail = if a.is_empty() { &[][..] } else { &a[1..] };
    let mut out = vec![digit::from_rank(a_rank as u8)];
    out.extend(bisect(a_tail, &[])?);
    return Some(out);
}
