//! # BASIC Tree
//!
//! A small BASIC dialect with labels instead of line numbers.
//!
//! Programs are plain text files. The interpreter lexes and parses the
//! whole file, links the statements into a flat program, then walks the
//! syntax tree of each statement as it runs.
//! ```text
//! $ basic hello.bas
//! Hello World
//! ```
//!
//! Stop a running program with CTRL-C.
//! Pass `--seed` to make `random()` repeatable, `--ast` to print the parsed
//! program instead of running it, and `-v` or `-vv` for more logging.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
