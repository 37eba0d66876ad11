//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Holds the committed latches (PC, condition codes, IR, registers).
//! 2. **Memory Port:** Owns the bus with its device intercepts and range checks.
//! 3. **Call Stack:** Owns the emulated return-address stack in reserved memory.
//! 4. **Reporting:** Logs and counts every reported-and-continue anomaly.

/// Instruction handlers for every opcode.
pub mod execute;

/// The fetch-decode-execute cycle.
pub mod execution;

/// Emulated call stack over reserved memory.
pub mod stack;

/// Built-in trap services (console I/O and halt).
pub mod trap;

use tracing::warn;

use self::stack::CallStack;
use crate::common::Anomaly;
use crate::config::Config;
use crate::core::arch::latches::Latches;
use crate::soc::{Bus, Console};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The CPU executes one instruction per cycle. Handlers never touch
/// `current` directly; they work on a scratch copy that the cycle commits.
#[derive(Debug)]
pub struct Cpu {
    /// Committed architectural state.
    pub current: Latches,
    /// Memory port and console.
    pub bus: Bus,
    /// Emulated call stack.
    pub stack: CallStack,
    /// Execution statistics. `instructions_retired` is the reporting counter.
    pub stats: SimStats,
    /// Emit a trace event per executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed memory and registers.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    /// * `console` - Console driver behind the device registers and traps.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with PC 0 and the Z flag set.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            current: Latches::default(),
            bus: Bus::new(config.memory.clone(), console),
            stack: CallStack::new(&config.stack),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Current program counter.
    #[inline]
    pub const fn pc(&self) -> u16 {
        self.current.pc
    }

    /// Logs an anomaly and counts it; execution continues.
    pub fn report(&mut self, anomaly: Anomaly) {
        warn!(pc = format_args!("{:#06x}", self.current.pc), "{anomaly}");
        self.stats.record_anomaly(&anomaly);
    }

    /// Reports every anomaly the bus queued during the current cycle.
    fn flush_anomalies(&mut self) {
        for anomaly in self.bus.drain_anomalies() {
            self.report(anomaly);
        }
    }
}
