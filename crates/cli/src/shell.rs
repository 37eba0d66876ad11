//! Interactive command shell.
//!
//! Reads one command per line. Only the first letter of a command word is
//! significant (`rd...` is a register dump, any other `r...` is run), so
//! `g`, `go`, and `GO` are all the same request.

use std::io::{BufRead, Write};

use lc3sim_core::SimError;
use lc3sim_core::sim::{DumpStyle, SessionLog, Simulator};

/// Prompt printed before every command.
const PROMPT: &str = "LC-3-SIM> ";

/// Help text for `?`.
const HELP: &str = "\
----------------LC-3 ISIM Help-----------------------
go               -  run program to completion
run n            -  execute program for n instructions
mdump low high   -  dump memory from low to high
rdump            -  dump the register & bus values
?                -  display this help menu
quit             -  exit the program
";

/// A parsed shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run to halt.
    Go,
    /// Run at most this many cycles.
    Run(u64),
    /// Dump memory in `[low, high]`.
    MemoryDump {
        /// First address.
        low: u16,
        /// Last address, inclusive.
        high: u16,
    },
    /// Dump the register state.
    RegisterDump,
    /// Print the help text.
    Help,
    /// Leave the shell.
    Quit,
    /// Unrecognised or malformed input.
    Invalid,
}

/// Whether the shell keeps reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Prompt again.
    Continue,
    /// Stop reading.
    Quit,
}

/// Parses an integer the way C's `%i` does: `0x` hex, leading-`0` octal, or decimal.
pub fn parse_int(token: &str) -> Option<i64> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let magnitude = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if body.len() > 1 && body.starts_with('0') {
        i64::from_str_radix(&body[1..], 8).ok()?
    } else {
        body.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Command::Invalid;
    };
    let mut chars = word.chars().map(|c| c.to_ascii_lowercase());

    match chars.next() {
        Some('g') => Command::Go,
        Some('?') => Command::Help,
        Some('q') => Command::Quit,
        Some('m') => {
            let low = tokens.next().and_then(parse_int);
            let high = tokens.next().and_then(parse_int);
            match (low, high) {
                (Some(low), Some(high)) => Command::MemoryDump {
                    low: low as u16,
                    high: high as u16,
                },
                _ => Command::Invalid,
            }
        }
        Some('r') if chars.next() == Some('d') => Command::RegisterDump,
        Some('r') => tokens
            .next()
            .and_then(parse_int)
            .map_or(Command::Invalid, |n| Command::Run(n.max(0) as u64)),
        _ => Command::Invalid,
    }
}

/// The command loop around a simulator.
#[derive(Debug)]
pub struct Shell<W> {
    sim: Simulator,
    log: SessionLog,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Creates a shell writing its responses to `out`.
    pub const fn new(sim: Simulator, log: SessionLog, out: W) -> Self {
        Self { sim, log, out }
    }

    /// The simulator being driven.
    pub const fn simulator(&self) -> &Simulator {
        &self.sim
    }

    /// Reads and executes commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), SimError> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out, "\nBye.")?;
                return Ok(());
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            writeln!(self.out)?;

            if self.execute(parse_command(&line))? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Executes one command.
    pub fn execute(&mut self, command: Command) -> Result<Flow, SimError> {
        match command {
            Command::Go => {
                if self.refuse_if_halted()? {
                    return Ok(Flow::Continue);
                }
                writeln!(self.out, "Simulating...")?;
                self.out.flush()?;
                let _ = self.sim.go()?;
                write!(self.out, "\nSimulator halted\n\n")?;
            }
            Command::Run(n) => {
                if self.refuse_if_halted()? {
                    return Ok(Flow::Continue);
                }
                write!(self.out, "Simulating for {n} cycles...\n\n")?;
                self.out.flush()?;
                if self.sim.run(n)?.halted {
                    write!(self.out, "\nSimulator halted\n\n")?;
                }
            }
            Command::MemoryDump { low, high } => {
                let shown = self.sim.memory_dump(low, high, DumpStyle::Console);
                let logged = self.sim.memory_dump(low, high, DumpStyle::Log);
                self.show(&shown, &logged)?;
            }
            Command::RegisterDump => {
                let dump = self.sim.register_dump();
                self.show(&dump, &dump)?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {
                writeln!(self.out, "Bye.")?;
                return Ok(Flow::Quit);
            }
            Command::Invalid => writeln!(self.out, "Invalid Command")?,
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// Prints the refusal message if the simulator has halted.
    fn refuse_if_halted(&mut self) -> Result<bool, SimError> {
        if self.sim.is_halted() {
            write!(self.out, "Can't simulate, Simulator is halted\n\n")?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Prints a dump and mirrors it to the session log.
    fn show(&mut self, shown: &str, logged: &str) -> Result<(), SimError> {
        self.out.write_all(shown.as_bytes())?;
        self.log.record(logged)
    }
}
