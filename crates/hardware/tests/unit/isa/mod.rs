
/// Disassembler output.
pub mod disasm;
