//! The dispatch loop
//!
//! `step` consumes exactly one instruction; `run` drives a state to the
//! halted position under the configured step bound. Int arithmetic is
//! wrapping 32-bit, float arithmetic is single-precision IEEE-754.

use crate::config::EngineConfig;
use crate::error::{ExecError, ExecResult};
use crate::program::{Opcode, Param};
use crate::state::ExecState;
use crate::value::Value;

/// The binding name carried by an operand: the label of a reference, or
/// the embedded text of a literal.
fn binding_name(op: Opcode, param: &Param) -> ExecResult<&str> {
    match param {
        Param::Local(name) => Ok(name),
        Param::Literal(Value::Text(name)) => Ok(name),
        Param::Literal(_) => Err(ExecError::ExpectedName { op }),
    }
}

impl<'p> ExecState<'p> {
    /// Execute one instruction. Does nothing once halted.
    pub fn step(&mut self) -> ExecResult<()> {
        let program = self.program();
        let Some(inst) = program.get(self.ip()) else {
            return Ok(());
        };

        match inst.op {
            Opcode::Let => {
                let name = binding_name(Opcode::Let, inst.param(0)?)?.to_string();
                let value = self.resolve(inst.param(1)?)?.clone();
                self.bind(&name, value);
                self.advance();
            }
            Opcode::Add => {
                let name = binding_name(Opcode::Add, inst.param(0)?)?;
                let target = self.find_local(name)?;
                let sum = {
                    let left = self.resolve(inst.param(1)?)?;
                    let right = self.resolve(inst.param(2)?)?;
                    match (left, right, self.local_at(target)) {
                        (Value::Int(l), Value::Int(r), Value::Int(_)) => {
                            Value::Int(l.wrapping_add(*r))
                        }
                        (Value::Float(l), Value::Float(r), Value::Float(_)) => {
                            Value::Float(l + r)
                        }
                        (l, r, t) => {
                            return Err(ExecError::unsupported_operands(
                                Opcode::Add,
                                format!(
                                    "{}, {}, {}",
                                    l.type_name(),
                                    r.type_name(),
                                    t.type_name()
                                ),
                            ));
                        }
                    }
                };
                self.replace_at(target, sum);
                self.advance();
            }
            Opcode::Mul => {
                let name = binding_name(Opcode::Mul, inst.param(0)?)?;
                let target = self.find_local(name)?;
                let product = {
                    let left = self.resolve(inst.param(1)?)?;
                    let right = self.resolve(inst.param(2)?)?;
                    match (left, right, self.local_at(target)) {
                        (Value::Int(l), Value::Int(r), Value::Int(_)) => {
                            Value::Int(l.wrapping_mul(*r))
                        }
                        (Value::Float(l), Value::Float(r), Value::Float(_)) => {
                            Value::Float(l * r)
                        }
                        (l, r, t) => {
                            return Err(ExecError::unsupported_operands(
                                Opcode::Mul,
                                format!(
                                    "{}, {}, {}",
                                    l.type_name(),
                                    r.type_name(),
                                    t.type_name()
                                ),
                            ));
                        }
                    }
                };
                self.replace_at(target, product);
                self.advance();
            }
            Opcode::Jump => {
                let target = self.int_operand(Opcode::Jump, inst.param(0)?)?;
                self.jump_to(target)?;
            }
            Opcode::Cmp => {
                let left = self.int_operand(Opcode::Cmp, inst.param(0)?)?;
                let right = self.int_operand(Opcode::Cmp, inst.param(1)?)?;
                if left == right {
                    let target = self.int_operand(Opcode::Cmp, inst.param(2)?)?;
                    self.jump_to(target)?;
                } else {
                    self.advance();
                }
            }
            Opcode::Print => {
                let line = match self.resolve(inst.param(0)?)? {
                    Value::Int(n) => n.to_string(),
                    other => {
                        return Err(ExecError::UnsupportedPrint {
                            type_name: other.type_name(),
                        });
                    }
                };
                self.prints.push(line);
                self.advance();
            }
            Opcode::Ret => {
                let value = self.resolve(inst.param(0)?)?.clone();
                self.set_result(value);
                self.set_ip(program.len());
            }
        }

        Ok(())
    }

    /// Drive `step` until halted, bounded by the configured step limit.
    /// Returns the captured return value, or `None` if the program ran
    /// off the end without a RET.
    pub fn run(&mut self, config: &EngineConfig) -> ExecResult<Option<Value>> {
        let mut steps: u64 = 0;

        while !self.is_halted() {
            if steps >= config.max_steps {
                return Err(ExecError::StepLimitExceeded {
                    limit: config.max_steps,
                });
            }
            self.step()?;
            steps += 1;

            if config.dump_locals {
                let dump = self.dump_locals();
                self.trace.extend(dump);
            }
        }

        Ok(self.take_result())
    }

    fn advance(&mut self) {
        self.set_ip(self.ip() + 1);
    }

    fn int_operand(&self, op: Opcode, param: &Param) -> ExecResult<i32> {
        let value = self.resolve(param)?;
        value.as_int().ok_or_else(|| {
            ExecError::unsupported_operands(op, value.type_name().to_string())
        })
    }

    /// Absolute jump. The pointer stays within [0, len]; landing exactly
    /// on len halts the run.
    fn jump_to(&mut self, target: i32) -> ExecResult<()> {
        let limit = self.program().len();
        if target < 0 || target as usize > limit {
            return Err(ExecError::InvalidJumpTarget { target, limit });
        }
        self.set_ip(target as usize);
        Ok(())
    }
}
