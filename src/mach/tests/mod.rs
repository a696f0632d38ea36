use crate::lang::compile;
use crate::mach::{Program, Runtime, TokenReader};

mod for_test;
mod gosub_test;

fn run(s: &str) -> String {
    run_with_input(s, "")
}

fn run_with_input(s: &str, input: &str) -> String {
    let statements = match compile(s) {
        Ok(statements) => statements,
        Err(error) => return format!("?{}\n", error),
    };
    let mut runtime = Runtime::new(
        Program::new(statements),
        TokenReader::new(input.as_bytes()),
        String::new(),
    );
    let result = runtime.run();
    let mut s = runtime.into_output();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
