#![no_main]
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;
use vv_expand::{expand_in, Syntax};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() { return; }

    // Use first byte to select the syntax
    let syntax = if data[0] % 2 == 0 { Syntax::Passthrough } else { Syntax::Host };

    let mut vars = HashMap::new();
    vars.insert("A".to_string(), "$(B)".to_string());
    vars.insert("B".to_string(), "b".to_string());

    if let Ok(input) = std::str::from_utf8(&data[1..]) {
        if let Ok(out) = expand_in(input, &vars, syntax) {
            // Inputs without a token come back unchanged
            if syntax == Syntax::Passthrough && !input.contains("$(") {
                assert_eq!(out, input);
            }
        }
    }
});
