//! Fuzz target for metainfo decoding.
//!
//! Goal: The decoder should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_decode_component
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = metalint_parse::fuzz::decode(data);
});
