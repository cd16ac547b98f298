// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Betwixt - order keys for reorderable lists and collaborative sequences.
//!
//! An order key is a string whose plain lexicographic order encodes a
//! position in a sequence. Given the keys of two neighbors, `key_between`
//! produces a new key that sorts strictly between them, so an item can be
//! inserted (or moved) without renumbering anything else. The library is a
//! pure function of its inputs: no state, no I/O, safe from any thread.
//!
//! # Quick Start
//!
//! ```
//! use betwixt::between::key_between;
//! use betwixt::key::OrderKey;
//!
//! // The first item in an empty list
//! let first = key_between(None, None).unwrap();
//! assert_eq!(first.as_str(), "a0");
//!
//! // Append after it
//! let second = key_between(Some(&first), None).unwrap();
//! assert_eq!(second.as_str(), "a1");
//!
//! // Wedge a third item between the two
//! let wedged = key_between(Some(&first), Some(&second)).unwrap();
//! assert!(first < wedged && wedged < second);
//!
//! // Keys round-trip through their string form
//! let parsed: OrderKey = wedged.as_str().parse().unwrap();
//! assert_eq!(parsed, wedged);
//! ```

pub mod between;
pub mod digit;
pub mod integer;
pub mod key;
pub mod midpoint;
