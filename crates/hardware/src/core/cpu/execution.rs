//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the word at PC and advances PC before anything else happens.
//! 2. **Decode/Execute:** Decodes the word and runs its handler on a scratch copy of the latches.
//! 3. **Commit:** Swaps the scratch copy in as the current state and counts the instruction.
//! 4. **Observability:** Emits a trace event with the disassembly when tracing is enabled.

use tracing::trace;

use super::Cpu;
use crate::common::{AccessType, SimError};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// Offsets are computed from the incremented PC. Anomalies raised during
    /// the cycle are reported before it commits.
    ///
    /// # Returns
    ///
    /// `Err` only for fatal conditions (keyboard interrupt, console failure);
    /// the failing cycle is not committed.
    pub fn step(&mut self) -> Result<(), SimError> {
        let pc = self.current.pc;
        let word = self.bus.read(pc, AccessType::Fetch);

        let mut next = self.current;
        next.ir = word;
        next.pc = pc.wrapping_add(1);

        let inst = decode(word);
        if self.trace {
            trace!(
                pc = format_args!("{pc:#06x}"),
                ir = format_args!("{word:#06x}"),
                "{}",
                disassemble(word)
            );
        }

        let result = self.execute(&mut next, inst);
        self.flush_anomalies();
        result?;

        self.current = next;
        self.stats.record_instruction(inst.class());
        Ok(())
    }
}
