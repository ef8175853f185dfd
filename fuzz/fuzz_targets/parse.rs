#![no_main]

use libfuzzer_sys::fuzz_target;
use lingo_syntax::{lexer, parser, writer};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer never fails; it must always terminate with Eof
        let tokens = lexer::lex(s);
        assert!(tokens.last().is_some_and(|t| t.kind == lexer::TokenKind::Eof));

        // Whatever parses must also render
        if let Ok(block) = parser::parse(s) {
            let _ = writer::write_block(&block, &writer::FormatConfig::default());
        }
    }
});
