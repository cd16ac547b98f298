//! AFL fuzz harness for order key generation.
//!
//! The input splits at the first zero byte into two candidate key strings.
//! Anything the parser accepts must then uphold the generation contract:
//! the result sorts strictly between the bounds and revalidates as a key.
//! Parser rejections are fine; panics and contract violations are findings.

use afl::fuzz;

use betwixt::between::key_between;
use betwixt::key::OrderKey;

fn check(lower: Option<&OrderKey>, upper: Option<&OrderKey>) {
    let result = match key_between(lower, upper) {
        Ok(result) => result,
        // out-of-order bounds are a legal rejection, nothing to check
        Err(_) => return,
    };
    assert!(
        OrderKey::parse(result.as_str()).is_ok(),
        "generated key fails validation: {result}",
    );
    if let Some(lower) = lower {
        assert!(&result > lower, "{result} <= {lower}");
    }
    if let Some(upper) = upper {
        assert!(&result < upper, "{result} >= {upper}");
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut halves = data.splitn(2, |&byte| byte == 0);
        let first = halves.next().unwrap_or(&[]);
        let second = halves.next().unwrap_or(&[]);

        let first = std::str::from_utf8(first).ok().and_then(|raw| OrderKey::parse(raw).ok());
        let second = std::str::from_utf8(second).ok().and_then(|raw| OrderKey::parse(raw).ok());

        check(first.as_ref(), None);
        check(None, first.as_ref());
        check(second.as_ref(), None);
        check(None, second.as_ref());
        check(first.as_ref(), second.as_ref());
        check(second.as_ref(), first.as_ref());
    });
}
