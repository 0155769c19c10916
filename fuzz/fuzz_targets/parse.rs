#![no_main]

use libfuzzer_sys::fuzz_target;
use sigil::{default_registry, parse, tokenize_words};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let registry = default_registry();
        // Tokenizing and parsing never fail; this checks they never panic or hang.
        let result = parse(&registry, s);
        assert_eq!(result.success, result.errors.is_empty());
        let _ = tokenize_words(&registry, s);
    }
});
