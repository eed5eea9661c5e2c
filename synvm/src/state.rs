//! Per-case execution state
//!
//! One `ExecState` per case: a read-only view of the instruction
//! sequence, an instruction pointer, the flat local-binding table, and
//! the captured return value. Locals are seeded by cloning the case's
//! inputs, so no two states ever share mutable data.

use crate::context::Context;
use crate::error::{ExecError, ExecResult};
use crate::program::{Instruction, Param};
use crate::value::Value;

/// A named, owned binding in the local table
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub name: String,
    pub value: Value,
}

/// Mutable engine instance for one run
#[derive(Debug)]
pub struct ExecState<'p> {
    program: &'p [Instruction],
    ip: usize,
    locals: Vec<Local>,
    result: Option<Value>,
    /// PRINT side channel, one line per emitted value
    pub prints: Vec<String>,
    /// Local-table dumps collected when tracing is enabled
    pub trace: Vec<String>,
}

impl<'p> ExecState<'p> {
    /// Seed a fresh state for one case of the context.
    ///
    /// Input values are cloned positionally under the context's input
    /// names; the case must supply exactly one value per name.
    pub fn for_case(
        program: &'p [Instruction],
        ctx: &Context,
        case_index: usize,
    ) -> ExecResult<Self> {
        let case = ctx.case(case_index)?;

        if case.inputs.len() != ctx.input_names.len() {
            return Err(ExecError::InputArityMismatch {
                expected: ctx.input_names.len(),
                got: case.inputs.len(),
            });
        }

        let locals = ctx
            .input_names
            .iter()
            .zip(case.inputs.iter())
            .map(|(name, value)| Local {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(ExecState {
            program,
            ip: 0,
            locals,
            result: None,
            prints: Vec::new(),
            trace: Vec::new(),
        })
    }

    /// The instruction sequence this state runs
    pub fn program(&self) -> &'p [Instruction] {
        self.program
    }

    /// Current instruction pointer
    pub fn ip(&self) -> usize {
        self.ip
    }

    pub(crate) fn set_ip(&mut self, ip: usize) {
        self.ip = ip;
    }

    /// Halted once the pointer is at or past the end of the sequence
    pub fn is_halted(&self) -> bool {
        self.ip >= self.program.len()
    }

    /// Index of a binding in the table
    pub(crate) fn find_local(&self, name: &str) -> ExecResult<usize> {
        self.locals
            .iter()
            .position(|local| local.name == name)
            .ok_or_else(|| ExecError::unknown_local(name))
    }

    /// Current value of a binding
    pub fn local(&self, name: &str) -> ExecResult<&Value> {
        let index = self.find_local(name)?;
        Ok(&self.locals[index].value)
    }

    /// Install or replace a binding. Rebinding an existing name drops
    /// the previous value and keeps exactly one table entry.
    pub fn bind(&mut self, name: &str, value: Value) {
        match self.locals.iter_mut().find(|local| local.name == name) {
            Some(local) => local.value = value,
            None => self.locals.push(Local {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub(crate) fn replace_at(&mut self, index: usize, value: Value) {
        self.locals[index].value = value;
    }

    pub(crate) fn local_at(&self, index: usize) -> &Value {
        &self.locals[index].value
    }

    /// Resolve an operand against the current table: a literal is read
    /// in place, a reference follows the name at this instant.
    pub fn resolve<'a>(&'a self, param: &'a Param) -> ExecResult<&'a Value> {
        match param {
            Param::Literal(value) => Ok(value),
            Param::Local(name) => self.local(name),
        }
    }

    /// Captured return value, if a RET has executed
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub(crate) fn set_result(&mut self, value: Value) {
        self.result = Some(value);
    }

    /// Take ownership of the captured return value
    pub fn take_result(&mut self) -> Option<Value> {
        self.result.take()
    }

    /// Number of bindings currently in the table
    pub fn local_count(&self) -> usize {
        self.locals.len()
    }

    /// Diagnostic listing of the current bindings, in table order
    pub fn dump_locals(&self) -> Vec<String> {
        self.locals
            .iter()
            .map(|local| format!("LOCAL {} = {}", local.name, local.value))
            .collect()
    }
}
