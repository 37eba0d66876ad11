//! Simulator: the execution driver around the CPU.
//!
//! The CPU knows how to run one instruction. The simulator adds the
//! run/halt protocol the command shell relies on:
//! 1. **Loading:** Places program images and sets the initial PC and flags.
//! 2. **Driving:** `run(n)` and `go()` cycle until PC reaches zero, checking before each cycle.
//! 3. **Inspection:** Formats memory and register dumps between cycles.

use std::fmt::Write as _;

use tracing::info;

use crate::common::SimError;
use crate::common::constants::HALT_ADDRESS;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::cc::ConditionCode;
use crate::sim::loader::ProgramImage;
use crate::soc::Console;

/// Separator line used by both dumps.
const DUMP_RULE: &str = "-------------------------------------";

/// Destination of a memory dump; the session log indents rows by one space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpStyle {
    /// Interactive output.
    Console,
    /// Session log file.
    Log,
}

impl DumpStyle {
    /// Prefix written before each memory row.
    const fn row_indent(self) -> &'static str {
        match self {
            Self::Console => "  ",
            Self::Log => " ",
        }
    }
}

/// Result of a `run` or `go` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cycles executed by this request.
    pub cycles: u64,
    /// `true` if the request stopped because PC reached zero.
    pub halted: bool,
}

/// Top-level simulator: CPU plus run flag.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state, bus, call stack, and stats.
    pub cpu: Cpu,
    /// Cleared once the driver observes PC zero.
    run_bit: bool,
    /// PC override applied after loading.
    start_pc: Option<u16>,
}

impl Simulator {
    /// Creates a simulator with empty memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration.
    /// * `console` - Console driver for device registers and traps.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            cpu: Cpu::new(config, console),
            run_bit: true,
            start_pc: config.general.start_pc,
        }
    }

    /// Loads program images in order.
    ///
    /// PC becomes the base of the first image (or the configured start PC)
    /// and the condition codes are reset to Z.
    ///
    /// # Returns
    ///
    /// The number of words each image stored.
    pub fn load(&mut self, images: &[ProgramImage]) -> Result<Vec<usize>, SimError> {
        let mut counts = Vec::with_capacity(images.len());
        for image in images {
            counts.push(image.load_into(&mut self.cpu.bus.memory)?);
            if self.cpu.current.pc == HALT_ADDRESS {
                self.cpu.current.pc = image.base;
            }
        }
        if let Some(pc) = self.start_pc {
            self.cpu.current.pc = pc;
        }
        self.cpu.current.cc = ConditionCode::Zero;
        self.run_bit = true;
        Ok(counts)
    }

    /// Returns `true` once a run request has observed the halt condition.
    pub const fn is_halted(&self) -> bool {
        !self.run_bit
    }

    /// Executes a single cycle regardless of the run flag.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.cpu.step()
    }

    /// Runs at most `n` cycles.
    ///
    /// Stops early, clearing the run flag, if PC is zero before a cycle.
    /// Does nothing if the simulator is already halted.
    pub fn run(&mut self, n: u64) -> Result<RunOutcome, SimError> {
        let mut outcome = RunOutcome {
            cycles: 0,
            halted: self.is_halted(),
        };
        if outcome.halted {
            return Ok(outcome);
        }
        while outcome.cycles < n {
            if self.cpu.pc() == HALT_ADDRESS {
                self.halt();
                outcome.halted = true;
                break;
            }
            self.cpu.step()?;
            outcome.cycles += 1;
        }
        Ok(outcome)
    }

    /// Runs until PC reaches zero.
    ///
    /// Does nothing if the simulator is already halted.
    pub fn go(&mut self) -> Result<RunOutcome, SimError> {
        let mut outcome = RunOutcome {
            cycles: 0,
            halted: true,
        };
        if self.is_halted() {
            return Ok(outcome);
        }
        while self.cpu.pc() != HALT_ADDRESS {
            self.cpu.step()?;
            outcome.cycles += 1;
        }
        self.halt();
        Ok(outcome)
    }

    fn halt(&mut self) {
        self.run_bit = false;
        info!(
            instructions = self.cpu.stats.instructions_retired,
            "simulator halted"
        );
    }

    /// Formats the words in `[low, high]`.
    ///
    /// Reads bypass the bus, so inspection never raises anomalies or
    /// touches device registers. An empty range yields only the header.
    pub fn memory_dump(&self, low: u16, high: u16, style: DumpStyle) -> String {
        let indent = style.row_indent();
        let mut out = String::new();
        let _ = writeln!(out, "\nMemory content [0x{low:04x}..0x{high:04x}] :");
        let _ = writeln!(out, "{DUMP_RULE}");
        for addr in low..=high {
            let _ = writeln!(
                out,
                "{indent}0x{addr:04x} ({addr}) : {:#04x}",
                self.cpu.bus.memory.read(addr)
            );
        }
        out.push('\n');
        out
    }

    /// Formats the instruction count, PC, condition codes, and registers.
    pub fn register_dump(&self) -> String {
        let state = &self.cpu.current;
        let mut out = String::new();
        let _ = writeln!(out, "\nCurrent register/bus values :");
        let _ = writeln!(out, "{DUMP_RULE}");
        let _ = writeln!(
            out,
            "Instruction Count : {}",
            self.cpu.stats.instructions_retired
        );
        let _ = writeln!(out, "PC                : 0x{:04x}", state.pc);
        let _ = writeln!(out, "CCs: {}", state.cc);
        let _ = writeln!(out, "Registers:");
        for (idx, val) in state.regs.iter() {
            let _ = writeln!(out, "{idx}: 0x{val:04x}");
        }
        out.push('\n');
        out
    }
}
