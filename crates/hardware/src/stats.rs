//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LC-3 simulator. It provides:
//! 1. **Instruction count:** The retired-instruction counter shown by register dumps.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, control, trap, ignored).
//! 3. **Anomalies:** Counts of every reported-and-continue condition, by kind.

use std::fmt::Write as _;
use std::time::Instant;

use crate::common::{AccessType, Anomaly};
use crate::isa::decode::InstructionClass;

/// Frame around the whole report.
const RULE: &str = "==========================================================";

/// Separator between report sections.
const SECTION_RULE: &str = "----------------------------------------------------------";

/// Simulation statistics structure.
///
/// Collects instruction and anomaly counts together with the wall-clock
/// start time used for the throughput line of the summary.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of cycles completed (one instruction per cycle).
    pub instructions_retired: u64,

    /// Count of ADD, AND, NOT, and LEA instructions retired.
    pub inst_alu: u64,
    /// Count of LD, LDI, and LDR instructions retired.
    pub inst_load: u64,
    /// Count of ST, STI, and STR instructions retired.
    pub inst_store: u64,
    /// Count of BR, JMP/RET, JSR/JSRR, and RTI instructions retired.
    pub inst_control: u64,
    /// Count of TRAP instructions retired.
    pub inst_trap: u64,
    /// Count of unassigned opcodes skipped.
    pub inst_ignored: u64,

    /// Out-of-range instruction fetches.
    pub oob_fetches: u64,
    /// Out-of-range data reads.
    pub oob_reads: u64,
    /// Out-of-range data writes.
    pub oob_writes: u64,
    /// Pushes rejected because the call stack was full.
    pub stack_overflows: u64,
    /// Pops attempted on an empty call stack (including RET/RTI on empty).
    pub stack_underflows: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            inst_trap: 0,
            inst_ignored: 0,
            oob_fetches: 0,
            oob_reads: 0,
            oob_writes: 0,
            stack_overflows: 0,
            stack_underflows: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction of the given class.
    pub const fn record_instruction(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Control => self.inst_control += 1,
            InstructionClass::Trap => self.inst_trap += 1,
            InstructionClass::Ignored => self.inst_ignored += 1,
        }
    }

    /// Counts one reported anomaly.
    pub const fn record_anomaly(&mut self, anomaly: &Anomaly) {
        match anomaly {
            Anomaly::OutOfRange { access, .. } => match access {
                AccessType::Fetch => self.oob_fetches += 1,
                AccessType::Read => self.oob_reads += 1,
                AccessType::Write => self.oob_writes += 1,
            },
            Anomaly::StackOverflow { .. } => self.stack_overflows += 1,
            Anomaly::StackUnderflow
            | Anomaly::ReturnOnEmptyStack
            | Anomaly::InterruptReturnOnEmptyStack => self.stack_underflows += 1,
        }
    }

    /// Total number of anomalies of every kind.
    pub const fn anomalies(&self) -> u64 {
        self.oob_fetches
            + self.oob_reads
            + self.oob_writes
            + self.stack_overflows
            + self.stack_underflows
    }

    /// Renders the summary, instruction mix, and anomaly sections.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let kips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        let mut out = String::new();
        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "LC-3 SIMULATION STATISTICS");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "sim_kips                 {kips:.2}");
        let _ = writeln!(out, "{SECTION_RULE}");

        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.control", self.inst_control),
            ("op.trap", self.inst_trap),
            ("op.ignored", self.inst_ignored),
        ] {
            let _ = writeln!(
                out,
                "  {name:<22} {count} ({:.2}%)",
                (count as f64 / instr) * 100.0
            );
        }
        let _ = writeln!(out, "{SECTION_RULE}");

        let _ = writeln!(out, "ANOMALIES");
        let _ = writeln!(out, "  mem.oob_fetch          {}", self.oob_fetches);
        let _ = writeln!(out, "  mem.oob_read           {}", self.oob_reads);
        let _ = writeln!(out, "  mem.oob_write          {}", self.oob_writes);
        let _ = writeln!(out, "  stack.overflow         {}", self.stack_overflows);
        let _ = writeln!(out, "  stack.underflow        {}", self.stack_underflows);
        let _ = writeln!(out, "{RULE}");
        out
    }

    /// Prints the full statistics report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}
