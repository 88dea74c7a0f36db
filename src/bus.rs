// Bus module - CPU memory bus implementation
//
// This module implements the main memory bus that connects the CPU to all memory-mapped
// components in the NES system. It handles address routing, memory mirroring, and
// owns the devices that live in CPU address space: RAM, the PPU register window,
// the APU/controller window, and the cartridge mapper.
//
// # NES Memory Map (CPU Address Space)
//
// ```text
// $0000-$07FF: 2KB Internal RAM
// $0800-$1FFF: Mirrors of RAM (3 times)
// $2000-$2007: PPU Registers
// $2008-$3FFF: Mirrors of PPU Registers (repeating every 8 bytes)
// $4000-$4013, $4015, $4017: APU registers
// $4014: OAM DMA trigger
// $4016-$4017: Controller ports
// $4018-$401F: APU and I/O test functionality (usually disabled)
// $4020-$FFFF: Cartridge space (PRG-ROM, PRG-RAM, and mapper registers)
// ```

use crate::apu::Apu;
use crate::cartridge::{Mapper, Mirroring};
use crate::controller::ControllerPort;
use crate::ppu::Ppu;
use crate::ram::Ram;
use std::cell::RefCell;
use std::rc::Rc;

/// Trait for memory-mapped components.
///
/// `read` takes `&mut self` because several devices mutate on read: PPU
/// register reads clear VBlank and advance the address latch; controller
/// reads shift a bit out of the port.
pub trait MemoryMappedDevice {
    /// Read a byte from the device.
    fn read(&mut self, addr: u16) -> u8;

    /// Write a byte to the device.
    fn write(&mut self, addr: u16, data: u8);
}

/// Cartridge-space stand-in mounted until a real cartridge is loaded.
///
/// $8000-$FFFF behaves as plain read/write RAM (and CHR as 8KB of RAM). No
/// real NES mapper allows writing PRG-ROM like this; this exists purely so
/// CPU-focused unit tests and benchmarks can poke a test program directly
/// into cartridge space without constructing an iNES image first.
/// `Emulator::load_rom` replaces this with the cartridge's real mapper via
/// `Bus::set_mapper`.
struct OpenBusMapper {
    prg: Box<[u8; 0x8000]>,
    chr: Box<[u8; 0x2000]>,
}

impl OpenBusMapper {
    fn new() -> Self {
        OpenBusMapper {
            prg: Box::new([0; 0x8000]),
            chr: Box::new([0; 0x2000]),
        }
    }
}

impl Mapper for OpenBusMapper {
    fn cpu_read(&self, address: u16) -> u8 {
        self.prg[(address - 0x8000) as usize]
    }

    fn cpu_write(&mut self, address: u16, value: u8) {
        self.prg[(address - 0x8000) as usize] = value;
    }

    fn ppu_read(&self, address: u16) -> u8 {
        self.chr[address as usize]
    }

    fn ppu_write(&mut self, address: u16, value: u8) {
        self.chr[address as usize] = value;
    }

    fn mirroring(&self) -> Mirroring {
        Mirroring::Horizontal
    }
}

/// The CPU's 16-bit address bus.
///
/// Owns RAM and the controller ports outright; holds non-owning handles to
/// the PPU and the cartridge mapper (both of which the emulator core also
/// hands to other components, so ownership lives at the emulator).
pub struct Bus {
    ram: Ram,
    ppu: Rc<RefCell<Ppu>>,
    mapper: Rc<RefCell<Box<dyn Mapper>>>,
    apu: Apu,
    controllers: ControllerPort,

    /// Pending OAM DMA: set by a `$4014` write, drained by the emulator loop
    /// which stalls the CPU and copies the page into OAM.
    pending_oam_dma: Option<u8>,
}

impl Bus {
    /// Create a new bus with its own PPU and no cartridge loaded (cartridge
    /// space behaves as scratch RAM until `set_mapper` attaches a real one).
    pub fn new() -> Self {
        Bus {
            ram: Ram::new(),
            ppu: Rc::new(RefCell::new(Ppu::new())),
            mapper: Rc::new(RefCell::new(Box::new(OpenBusMapper::new()))),
            apu: Apu::new(),
            controllers: ControllerPort::new(),
            pending_oam_dma: None,
        }
    }

    /// Shared handle to the bus's PPU, for the emulator core to tick directly.
    pub fn ppu(&self) -> Rc<RefCell<Ppu>> {
        Rc::clone(&self.ppu)
    }

    /// Attach (or replace) the cartridge mapper backing `$4020-$FFFF`.
    pub fn set_mapper(&mut self, mapper: Rc<RefCell<Box<dyn Mapper>>>) {
        self.mapper = mapper;
    }

    /// Shared handle to the currently attached mapper, for the emulator core
    /// to drive `tick_scanline`/`irq_pending` directly.
    pub fn mapper(&self) -> Rc<RefCell<Box<dyn Mapper>>> {
        Rc::clone(&self.mapper)
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerPort {
        &mut self.controllers
    }

    /// Take a pending OAM DMA request, if one is queued, clearing it.
    pub fn take_pending_oam_dma(&mut self) -> Option<u8> {
        self.pending_oam_dma.take()
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu.borrow_mut().read(addr & 0x2007),
            0x4016 | 0x4017 => self.controllers.read(addr),
            0x4000..=0x4015 => self.apu.read(addr),
            0x4018..=0x401F => 0,
            0x4020..=0xFFFF => self.mapper.borrow().cpu_read(addr),
        }
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, data),
            0x2000..=0x3FFF => self.ppu.borrow_mut().write(addr & 0x2007, data),
            0x4014 => self.pending_oam_dma = Some(data),
            0x4016 => self.controllers.write(addr, data),
            0x4017 => {
                self.controllers.write(addr, data);
                self.apu.write(addr, data);
            }
            0x4000..=0x4015 => self.apu.write(addr, data),
            0x4018..=0x401F => {}
            0x4020..=0xFFFF => self.mapper.borrow_mut().cpu_write(addr, data),
        }
    }

    /// Read a 16-bit word from the bus (little-endian).
    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a 16-bit word to the bus (little-endian).
    pub fn write_u16(&mut self, addr: u16, data: u16) {
        let lo = (data & 0xFF) as u8;
        let hi = (data >> 8) as u8;
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Copy one page ($XX00-$XXFF) into PPU OAM, as triggered by a `$4014` write.
    pub fn run_oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..256u16 {
            let byte = self.read(base + i);
            self.ppu.borrow_mut().write_oam(i as u8, byte);
        }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
