//! Smoke test for bytere.
//!
//! With arguments, compiles the first as a pattern and reports each remaining
//! argument as match/no match:
//!
//! ```text
//! RUST_LOG=debug cargo run --example smoke -- '(ab|cd)*' abcd abc
//! ```

use bytere::{compile, run, Lexer};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some((pattern, inputs)) = args.split_first() {
        check_pattern(pattern, inputs);
        return;
    }

    println!("Running bytere smoke tests...\n");

    test_reference_pattern();
    test_parse_error();
    test_lexer();

    println!("\nAll smoke tests passed!");
}

fn check_pattern(pattern: &str, inputs: &[String]) {
    let dfa = match compile(pattern) {
        Ok(dfa) => dfa,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    print!("{}", dfa);
    for input in inputs {
        let verdict = if run(&dfa, input) { "match" } else { "no match" };
        println!("{:?}: {}", input, verdict);
    }
}

fn test_reference_pattern() {
    let dfa = compile("([a-cd]*|az?)").unwrap();
    for s in ["", "a", "d", "aa", "bcda", "az"] {
        assert!(run(&dfa, s), "{:?}", s);
    }
    for s in ["e", "azz"] {
        assert!(!run(&dfa, s), "{:?}", s);
    }
    println!("✓ Reference pattern ({} DFA states)", dfa.len());
}

fn test_parse_error() {
    let err = compile("(a").unwrap_err();
    assert_eq!(err.position(), Some(2));
    println!("✓ Parse error: {}", err);
}

fn test_lexer() {
    let lexer = Lexer::new(&["[a-z]+", "\\d+", "[\\+\\-\\*/=]", "\\s+"])
        .unwrap()
        .ignore(3);
    let tokens = lexer.tokenize("x = y + 42").unwrap();
    assert_eq!(tokens.len(), 5);
    println!("✓ Lexer ({} tokens)", tokens.len());
}
