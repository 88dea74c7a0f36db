// Error types for the emulator core.
//
// The core distinguishes errors that are fatal to a session (a bad ROM, an
// unsupported mapper, a CPU that decoded a byte with no defined instruction)
// from failures that belong to a collaborator (the renderer, the controller
// source) and never corrupt emulated state.

use std::fmt;

/// Errors raised by the emulator core.
///
/// `BadRomHeader`, `UnsupportedMapper`, `IllegalOpcode`, and `MapperFault` are
/// fatal: the session that produced them cannot continue. `HostIoError` wraps
/// a failure in an external collaborator (renderer, controller source) and is
/// surfaced without touching emulated state.
#[derive(Debug)]
pub enum NesError {
    /// The iNES header is missing its magic number or declares an impossible
    /// PRG/CHR size.
    BadRomHeader(String),
    /// The cartridge's mapper id has no registered implementation.
    UnsupportedMapper(u8),
    /// The CPU fetched a byte with no defined 6502 instruction.
    IllegalOpcode { pc: u16, opcode: u8 },
    /// A mapper received a write outside its registered window, or reached
    /// an invalid bank configuration.
    MapperFault(String),
    /// A host collaborator (renderer, controller source) failed. Emulated
    /// state is unaffected.
    HostIoError(String),
}

impl fmt::Display for NesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NesError::BadRomHeader(msg) => write!(f, "bad iNES header: {}", msg),
            NesError::UnsupportedMapper(id) => write!(f, "unsupported mapper: {}", id),
            NesError::IllegalOpcode { pc, opcode } => {
                write!(f, "illegal opcode ${:02X} at PC=${:04X}", opcode, pc)
            }
            NesError::MapperFault(msg) => write!(f, "mapper fault: {}", msg),
            NesError::HostIoError(msg) => write!(f, "host I/O error: {}", msg),
        }
    }
}

impl std::error::Error for NesError {}

pub type Result<T> = std::result::Result<T, NesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_opcode_message_includes_pc_and_opcode() {
        let err = NesError::IllegalOpcode {
            pc: 0xC000,
            opcode: 0x02,
        };
        let msg = err.to_string();
        assert!(msg.contains("C000"));
        assert!(msg.contains("02"));
    }

    #[test]
    fn unsupported_mapper_reports_id() {
        let err = NesError::UnsupportedMapper(222);
        assert!(err.to_string().contains("222"));
    }
}
