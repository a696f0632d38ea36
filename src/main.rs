//! # BASIC
//!
//! Runs a labeled BASIC program from a file.
//!

fn main() {
    basic::term::main();
}
