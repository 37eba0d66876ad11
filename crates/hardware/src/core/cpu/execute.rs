//! Instruction handlers.
//!
//! Every handler works on the scratch latches of the running cycle, whose PC
//! already points at the following instruction. Address and data arithmetic
//! wraps modulo 2^16.

use super::Cpu;
use crate::common::{AccessType, Anomaly, SimError};
use crate::core::arch::latches::Latches;
use crate::isa::decode::{Instruction, Operand, RET_BASE_REG};

/// Register that receives the return address of a subroutine call.
const LINK_REG: usize = 7;

impl Cpu {
    /// Dispatches a decoded instruction to its handler.
    ///
    /// # Arguments
    ///
    /// * `next` - Scratch latches for this cycle.
    /// * `inst` - The decoded instruction.
    pub fn execute(&mut self, next: &mut Latches, inst: Instruction) -> Result<(), SimError> {
        match inst {
            Instruction::Add { dr, sr1, op2 } => {
                let val = next.regs.read(sr1).wrapping_add(operand(next, op2));
                next.write_cc(dr, val);
            }
            Instruction::And { dr, sr1, op2 } => {
                let val = next.regs.read(sr1) & operand(next, op2);
                next.write_cc(dr, val);
            }
            Instruction::Not { dr, sr } => {
                let val = !next.regs.read(sr);
                next.write_cc(dr, val);
            }
            Instruction::Br { nzp, offset } => {
                if next.cc.matches(nzp) {
                    next.pc = next.pc.wrapping_add(offset);
                }
            }
            Instruction::Jmp { base } => self.exec_jmp(next, base),
            Instruction::Jsr { offset } => {
                self.link(next);
                next.pc = next.pc.wrapping_add(offset);
            }
            Instruction::Jsrr { base } => {
                self.link(next);
                next.pc = next.regs.read(base);
            }
            Instruction::Ld { dr, offset } => {
                let val = self.bus.read(next.pc.wrapping_add(offset), AccessType::Read);
                next.write_cc(dr, val);
            }
            Instruction::Ldi { dr, offset } => {
                let ptr = self.bus.read(next.pc.wrapping_add(offset), AccessType::Read);
                let val = self.bus.read(ptr, AccessType::Read);
                next.write_cc(dr, val);
            }
            Instruction::Ldr { dr, base, offset } => {
                let addr = next.regs.read(base).wrapping_add(offset);
                let val = self.bus.read(addr, AccessType::Read);
                next.write_cc(dr, val);
            }
            Instruction::Lea { dr, offset } => {
                next.regs.write(dr, next.pc.wrapping_add(offset));
            }
            Instruction::Rti => match self.stack.pop(&self.bus.memory) {
                Ok(addr) => next.pc = addr,
                Err(_) => self.report(Anomaly::InterruptReturnOnEmptyStack),
            },
            Instruction::St { sr, offset } => {
                self.bus
                    .write(next.pc.wrapping_add(offset), next.regs.read(sr))?;
            }
            Instruction::Sti { sr, offset } => {
                let ptr = self.bus.read(next.pc.wrapping_add(offset), AccessType::Read);
                self.bus.write(ptr, next.regs.read(sr))?;
            }
            Instruction::Str { sr, base, offset } => {
                let addr = next.regs.read(base).wrapping_add(offset);
                self.bus.write(addr, next.regs.read(sr))?;
            }
            Instruction::Trap { vector } => self.exec_trap(next, vector)?,
            Instruction::Reserved => {}
        }
        Ok(())
    }

    /// `JMP BaseR`. The `RET` form first restores R7 from the call stack.
    fn exec_jmp(&mut self, next: &mut Latches, base: usize) {
        if base == RET_BASE_REG {
            match self.stack.pop(&self.bus.memory) {
                Ok(ret) => next.regs.write(RET_BASE_REG, ret),
                Err(_) => self.report(Anomaly::ReturnOnEmptyStack),
            }
        }
        next.pc = next.regs.read(base);
    }

    /// Saves the return address in R7 and pushes it on the call stack.
    ///
    /// R7 is written before the target is read, so `JSRR R7` jumps to the
    /// instruction after the call.
    fn link(&mut self, next: &mut Latches) {
        next.regs.write(LINK_REG, next.pc);
        if let Err(anomaly) = self.stack.push(&mut self.bus.memory, next.pc) {
            self.report(anomaly);
        }
    }
}

/// Resolves the second operand of ADD/AND.
#[inline]
fn operand(latches: &Latches, op: Operand) -> u16 {
    match op {
        Operand::Reg(r) => latches.regs.read(r),
        Operand::Imm(v) => v,
    }
}
