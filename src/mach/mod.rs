/*!
## Rust Machine Module

This Rust module links parsed BASIC statements into a flat program and
executes it.

*/

/// Index of an instruction in a linked [`Program`].
pub type Address = usize;

mod function;
mod io;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use io::{Input, Output, TokenReader};
pub use operation::Operation;
pub use program::Program;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
