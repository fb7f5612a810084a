//! Fuzz target: parse arbitrary text as a complex number.
//!
//! Parsing must never panic, only return `FormatError`. Whenever a value does
//! parse, its exact `repr()` must parse back to the same components.

#![no_main]

use complexlib::Complex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Skip excessively large inputs.
    if text.len() > 1024 {
        return;
    }

    let Ok(value) = text.parse::<Complex>() else {
        return;
    };

    let repr = value.repr();
    let back: Complex = repr.parse().expect("repr output must parse");
    if !value.real_part().is_nan() {
        assert_eq!(back.real_part().to_bits(), value.real_part().to_bits(), "{repr}");
    }
    if !value.imaginary_part().is_nan() {
        assert_eq!(back.imaginary_part().to_bits(), value.imaginary_part().to_bits(), "{repr}");
    }
});
