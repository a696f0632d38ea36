use super::{Address, Input, Operation, Output, Program, Stack, Val, Var};
use crate::error;
use crate::lang::{ast::*, Error, ErrorCode, Ident, Kind, Param};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering as Cmp;
use std::collections::VecDeque;
use std::convert::TryFrom;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// IF runs its target in place; this bounds how deep that can chain.
const MAX_IF_DEPTH: usize = 64;

/// ## Execution engine
///
/// Owns every piece of state a run needs. `run` steps through the linked
/// program until END, the end of the program, or the first error.

pub struct Runtime<I: Input, O: Output> {
    program: Rc<Program>,
    vars: Var,
    data: VecDeque<Val>,
    calls: Stack<Address>,
    loops: Stack<LoopFrame>,
    rng: StdRng,
    interrupted: Arc<AtomicBool>,
    input: I,
    output: O,
}

/// An active FOR: its variable and the index of its header.
#[derive(Debug)]
struct LoopFrame {
    var: Ident,
    header: Address,
}

enum Flow {
    Next,
    Jump(Address),
    Halt,
}

impl<I: Input, O: Output> Runtime<I, O> {
    pub fn new(program: Program, input: I, output: O) -> Runtime<I, O> {
        let data = program.data().clone();
        Runtime {
            program: Rc::new(program),
            vars: Var::new(),
            data,
            calls: Stack::new("TOO MANY GOSUB", ErrorCode::ReturnWithoutGosub),
            loops: Stack::new("TOO MANY FOR", ErrorCode::NextWithoutFor),
            rng: StdRng::from_entropy(),
            interrupted: Arc::new(AtomicBool::new(false)),
            input,
            output,
        }
    }

    /// Makes `random()` repeatable.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Setting the returned flag stops the run with BREAK before the next
    /// statement.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        let program = Rc::clone(&self.program);
        let mut pc: Address = 0;
        while let Some(statement) = program.get(pc) {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Err(error!(Break, statement.line()));
            }
            trace!(pc, "{}", statement);
            let flow = match self.execute(statement, pc, 0) {
                Ok(flow) => flow,
                Err(e) => return Err(e.in_line_number(statement.line())),
            };
            pc = match flow {
                Flow::Next => pc + 1,
                Flow::Jump(addr) => addr,
                Flow::Halt => break,
            };
        }
        debug!(vars = self.vars.len(), "halted");
        Ok(())
    }

    /// `pc` is the index control returns relative to. It is the statement's
    /// own index except when IF runs a labeled statement in place.
    fn execute(&mut self, statement: &Statement, pc: Address, depth: usize) -> Result<Flow> {
        match statement {
            Statement::Let(_, ident, expr) => {
                let val = self.evaluate(ident.kind(), expr)?;
                self.vars.store(ident, val)?;
                Ok(Flow::Next)
            }
            Statement::Print(_, items) => {
                self.r#print(items)?;
                Ok(Flow::Next)
            }
            Statement::Read(_, idents) => {
                self.r#read(idents)?;
                Ok(Flow::Next)
            }
            Statement::Data(..) => Ok(Flow::Next),
            Statement::Input(_, items) => {
                self.r#input(items)?;
                Ok(Flow::Next)
            }
            Statement::If(_, condition, label) => {
                if !self.condition(condition)? {
                    return Ok(Flow::Next);
                }
                if depth >= MAX_IF_DEPTH {
                    return Err(error!(OutOfMemory; "IF NESTED TOO DEEPLY"));
                }
                let program = Rc::clone(&self.program);
                let target = program.label(label)?;
                match program.get(target) {
                    Some(Statement::For(..)) | Some(Statement::Next(..)) => Err(error!(
                        AdvancedFeature;
                        format!("IF CANNOT RUN FOR OR NEXT AT {}", label)
                    )),
                    Some(statement) => self.execute(statement, pc, depth + 1),
                    None => Err(error!(InternalError; "LABEL PAST END")),
                }
            }
            Statement::For(_, ident, init, end, step) => self.r#for(pc, ident, init, end, step),
            Statement::Next(_, ident) => self.r#next(ident.as_ref()),
            Statement::Gosub(_, label) => {
                let target = self.program.label(label)?;
                self.calls.push(pc + 1)?;
                Ok(Flow::Jump(target))
            }
            Statement::Return(_) => Ok(Flow::Jump(self.calls.pop()?)),
            Statement::End(_) => Ok(Flow::Halt),
            Statement::Label(_, _, statement) => self.execute(statement, pc, depth),
            Statement::While(..) => Err(error!(AdvancedFeature; "WHILE IS NOT IMPLEMENTED")),
        }
    }

    /// String literals print as they are; anything else prints its value
    /// on a line of its own.
    fn r#print(&mut self, items: &[Expression]) -> Result<()> {
        for item in items {
            match item {
                Expression::String(s) => self.output.print(s)?,
                _ => {
                    let val = self.evaluate(item.kind(), item)?;
                    self.output.print(&format!("{}\n", val))?;
                }
            }
        }
        Ok(())
    }

    fn r#read(&mut self, idents: &[Ident]) -> Result<()> {
        if idents.len() != self.data.len() {
            return Err(error!(OutOfData;
                format!("READ OF {} WITH {} DATA LEFT", idents.len(), self.data.len())));
        }
        for ident in idents {
            let val = match self.data.pop_front() {
                Some(val) => val,
                None => return Err(error!(OutOfData)),
            };
            if val.kind() != ident.kind() {
                return Err(error!(TypeMismatch;
                    format!("{} CANNOT READ {}", ident, val)));
            }
            self.vars.store(ident, val)?;
        }
        Ok(())
    }

    fn r#input(&mut self, items: &[Expression]) -> Result<()> {
        for item in items {
            match item {
                Expression::String(prompt) => self.output.print(prompt)?,
                Expression::Var(ident) => {
                    let val = match ident.kind() {
                        Kind::Integer => Val::Integer(self.input.integer()?),
                        Kind::Float => Val::Float(self.input.float()?),
                        Kind::String => Val::String(self.input.string()?.into()),
                    };
                    self.vars.store(ident, val)?;
                }
                _ => return Err(error!(InternalError; "INPUT OF AN EXPRESSION")),
            }
        }
        Ok(())
    }

    fn r#for(
        &mut self,
        pc: Address,
        ident: &Ident,
        init: &Expression,
        end: &Expression,
        step: &Expression,
    ) -> Result<Flow> {
        if ident.kind() != Kind::Integer {
            return Err(error!(TypeMismatch; "FOR NEEDS AN INTEGER VARIABLE"));
        }
        let reentry = matches!(self.loops.last(), Some(frame) if frame.header == pc);
        let step = self.integer(step)?;
        let value = if reentry {
            let current = i32::try_from(self.vars.fetch(ident)?)?;
            match current.checked_add(step) {
                Some(n) => n,
                None => return Err(error!(Overflow)),
            }
        } else {
            self.integer(init)?
        };
        self.vars.store(ident, Val::Integer(value))?;
        let end = self.integer(end)?;
        let done = if step < 0 { value <= end } else { value >= end };
        if !reentry {
            self.forget_loop(pc);
        }
        if done {
            if reentry {
                self.loops.pop()?;
            }
            let next = match self.program.matching_next(pc, ident) {
                Some(next) => next,
                None => return Err(error!(ForWithoutNext)),
            };
            // A NEXT naming an outer loop still has to run to close it.
            return match self.program.get(next) {
                Some(Statement::Next(_, Some(named))) if named != ident => Ok(Flow::Jump(next)),
                _ => Ok(Flow::Jump(next + 1)),
            };
        }
        if !reentry {
            self.loops.push(LoopFrame {
                var: ident.clone(),
                header: pc,
            })?;
        }
        Ok(Flow::Next)
    }

    /// A FOR entered again from the top drops its old frame and every
    /// frame above it.
    fn forget_loop(&mut self, header: Address) {
        if let Some(index) = self.loops.iter().position(|f| f.header == header) {
            self.loops.drain(index..);
        }
    }

    fn r#next(&mut self, ident: Option<&Ident>) -> Result<Flow> {
        if let Some(ident) = ident {
            loop {
                match self.loops.last() {
                    Some(frame) if frame.var == *ident => break,
                    Some(_) => {
                        self.loops.pop()?;
                    }
                    None => return Err(error!(NextWithoutFor; ident.to_string())),
                }
            }
        }
        match self.loops.last() {
            Some(frame) => Ok(Flow::Jump(frame.header)),
            None => Err(error!(NextWithoutFor)),
        }
    }

    fn condition(&mut self, expr: &Expression) -> Result<bool> {
        use Expression::*;
        let (lhs, rhs) = match expr {
            Less(l, r) | LessEqual(l, r) | Greater(l, r) | GreaterEqual(l, r)
            | NotEqual(l, r) | Equal(l, r) => (l, r),
            _ => return Err(error!(TypeMismatch; "EXPECTED COMPARISON")),
        };
        let kind = lhs.kind();
        if kind == Kind::String {
            return Err(error!(TypeMismatch; "CANNOT COMPARE STRINGS"));
        }
        let ord = Operation::compare(self.evaluate(kind, lhs)?, self.evaluate(kind, rhs)?)?;
        Ok(match expr {
            Less(..) => ord == Some(Cmp::Less),
            LessEqual(..) => ord == Some(Cmp::Less) || ord == Some(Cmp::Equal),
            Greater(..) => ord == Some(Cmp::Greater),
            GreaterEqual(..) => ord == Some(Cmp::Greater) || ord == Some(Cmp::Equal),
            NotEqual(..) => ord != Some(Cmp::Equal),
            _ => ord == Some(Cmp::Equal),
        })
    }

    fn integer(&mut self, expr: &Expression) -> Result<i32> {
        i32::try_from(self.evaluate(Kind::Integer, expr)?)
    }

    /// Evaluates `expr` as a value of `kind`. Nothing converts: a literal,
    /// variable or built-in of another type is a type mismatch.
    fn evaluate(&mut self, kind: Kind, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::Integer(n) if kind == Kind::Integer => Ok(Val::Integer(*n)),
            Expression::Float(n) if kind == Kind::Float => Ok(Val::Float(*n)),
            Expression::String(s) if kind == Kind::String => Ok(Val::String(s.clone())),
            Expression::Var(ident) if ident.kind() == kind => self.vars.fetch(ident),
            Expression::Var(ident) => Err(error!(TypeMismatch;
                format!("{} IS {}, NOT {}", ident, ident.kind(), kind))),
            Expression::Add(l, r) => {
                Operation::sum(self.evaluate(kind, l)?, self.evaluate(kind, r)?)
            }
            Expression::Subtract(l, r) => {
                Operation::subtract(self.evaluate(kind, l)?, self.evaluate(kind, r)?)
            }
            Expression::Multiply(l, r) => {
                Operation::multiply(self.evaluate(kind, l)?, self.evaluate(kind, r)?)
            }
            Expression::Divide(l, r) => {
                Operation::divide(self.evaluate(kind, l)?, self.evaluate(kind, r)?)
            }
            Expression::Function(function, params) if function.returns() == kind => {
                let mut args: Vec<Val> = vec![];
                for (param, expr) in function.params().iter().zip(params.iter()) {
                    let kind = match param {
                        Param::Of(kind) => *kind,
                        Param::Numeric => expr.kind(),
                    };
                    args.push(self.evaluate(kind, expr)?);
                }
                function.call(args, &mut self.rng)
            }
            _ => Err(error!(TypeMismatch; format!("{} IS NOT {}", expr, kind))),
        }
    }
}
