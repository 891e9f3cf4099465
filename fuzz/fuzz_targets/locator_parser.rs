//! Fuzz target for the connection locator parser.
//!
//! This target feeds arbitrary strings to the parser to find crashes and
//! panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_locator_parser
//! ```

#![no_main]

use jtds_url::{ConnectionProperties, accepts_locator, parse_locator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        let accepted = accepts_locator(input);
        if let Ok(props) = parse_locator(input, &ConnectionProperties::new()) {
            assert!(accepted);
            assert!(props.server_family().is_some());
        }
    }
});
