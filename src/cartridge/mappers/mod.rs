// Mappers module - the mapper factory and individual mapper implementations.
//
// Each mapper handles memory mapping and banking for one cartridge board
// type. `create_mapper` dispatches on the iNES mapper id recorded in the
// `Cartridge` and wraps it in the matching concrete implementation.

mod mapper0;
mod mapper1;
mod mapper11;
mod mapper2;
mod mapper3;
mod mapper4;
mod mapper66;
mod mapper7;

use super::{Cartridge, Mapper};
use crate::error::NesError;
use mapper0::Mapper0;
use mapper1::Mapper1;
use mapper11::Mapper11;
use mapper2::Mapper2;
use mapper3::Mapper3;
use mapper4::Mapper4;
use mapper66::Mapper66;
use mapper7::Mapper7;

/// Create a mapper instance based on the mapper number recorded in the
/// cartridge's iNES header.
///
/// # Errors
/// Returns `NesError::UnsupportedMapper` if the mapper id has no registered
/// implementation.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, NesError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        1 => Ok(Box::new(Mapper1::new(cartridge))),
        2 => Ok(Box::new(Mapper2::new(cartridge))),
        3 => Ok(Box::new(Mapper3::new(cartridge))),
        4 => Ok(Box::new(Mapper4::new(cartridge))),
        7 => Ok(Box::new(Mapper7::new(cartridge))),
        11 => Ok(Box::new(Mapper11::new(cartridge))),
        66 => Ok(Box::new(Mapper66::new(cartridge))),
        mapper_num => Err(NesError::UnsupportedMapper(mapper_num)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Mirroring;

    #[test]
    fn test_mapper0_creation() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 1024], // 16KB PRG-ROM
            chr_rom: vec![0xBB; 8 * 1024],  // 8KB CHR-ROM
            chr_is_ram: false,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(result.is_ok());

        let mapper = result.unwrap();
        assert_eq!(mapper.mirroring(), Mirroring::Horizontal);
    }

    #[test]
    fn test_unsupported_mapper() {
        let cartridge = Cartridge {
            prg_rom: vec![0; 16 * 1024],
            chr_rom: vec![0; 8 * 1024],
            chr_is_ram: false,
            mapper: 99,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(matches!(result, Err(NesError::UnsupportedMapper(99))));
    }
}
