#![allow(dead_code)]
use basic::lang::compile;
use basic::mach::{Program, Runtime, TokenReader};

pub fn exec(source: &str) -> String {
    exec_with_input(source, "")
}

pub fn exec_with_input(source: &str, input: &str) -> String {
    exec_n(source, input, None)
}

pub fn exec_seeded(source: &str, seed: u64) -> String {
    exec_n(source, "", Some(seed))
}

/// Runs `source` against canned `input`. Whatever was printed comes back
/// with a `?` line for the error that stopped the run, if any.
pub fn exec_n(source: &str, input: &str, seed: Option<u64>) -> String {
    let statements = match compile(source) {
        Ok(statements) => statements,
        Err(error) => return format!("?{}\n", error),
    };
    let mut runtime = Runtime::new(
        Program::new(statements),
        TokenReader::new(input.as_bytes()),
        String::new(),
    );
    if let Some(seed) = seed {
        runtime.seed(seed);
    }
    let result = runtime.run();
    let mut s = runtime.into_output();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
