use super::{Address, Val};
use crate::error;
use crate::lang::{ast::*, Error, Ident};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Linked program
///
/// The statements are flattened into an array with label wrappers removed.
/// Execution moves by index: the statement after `i` is `i + 1` and
/// `len()` is the end of the program.

#[derive(Debug, Default)]
pub struct Program {
    instructions: Vec<Statement>,
    labels: HashMap<Rc<str>, Address>,
    data: VecDeque<Val>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Program {
        let mut program = Program::default();
        let mut have_data = false;
        for statement in statements {
            let mut statement = statement;
            while let Statement::Label(_, name, inner) = statement {
                let index = program.instructions.len();
                if program.labels.insert(name.clone(), index).is_some() {
                    warn!(
                        "label {} is defined more than once; using line {}",
                        name,
                        inner.line()
                    );
                }
                statement = *inner;
            }
            if let Statement::Data(line, literals) = &statement {
                if have_data {
                    warn!("ignoring DATA in line {}; only the first DATA is read", line);
                } else {
                    have_data = true;
                    program.data = literals.iter().filter_map(Program::literal).collect();
                }
            }
            program.instructions.push(statement);
        }
        debug!(
            instructions = program.instructions.len(),
            labels = program.labels.len(),
            data = program.data.len(),
            "linked program"
        );
        program
    }

    fn literal(expr: &Expression) -> Option<Val> {
        match expr {
            Expression::Integer(n) => Some(Val::Integer(*n)),
            Expression::Float(n) => Some(Val::Float(*n)),
            Expression::String(s) => Some(Val::String(s.clone())),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: Address) -> Option<&Statement> {
        self.instructions.get(index)
    }

    pub fn data(&self) -> &VecDeque<Val> {
        &self.data
    }

    pub fn label(&self, name: &str) -> Result<Address> {
        match self.labels.get(name) {
            Some(index) => Ok(*index),
            None => Err(error!(UndefinedLabel; name.to_string())),
        }
    }

    /// The NEXT closing the FOR at `index`. Loops in between are skipped
    /// by counting; a NEXT naming this loop's variable closes it at any depth.
    pub fn matching_next(&self, index: Address, var: &Ident) -> Option<Address> {
        let mut depth = 0usize;
        for (i, statement) in self.instructions.iter().enumerate().skip(index + 1) {
            match statement {
                Statement::For(..) => depth += 1,
                Statement::Next(_, Some(named)) if named == var => return Some(i),
                Statement::Next(..) => {
                    if depth == 0 {
                        return Some(i);
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        None
    }
}
