// Emulator module - Main emulator coordinator
//
// This module provides the main emulator interface that coordinates all NES components
// (CPU, PPU, APU, Bus), runs the frame loop, and manages configuration and the
// recent-ROMs list.

mod config;
mod recent_roms;

pub use config::{EmulatorConfig, SpeedMode};
pub use recent_roms::RecentRomsList;

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

/// Main emulator structure
///
/// Coordinates all NES components and provides high-level functionality
/// for loading ROMs, running frames, and managing configuration.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus (connects all components)
    bus: Bus,

    /// Currently loaded cartridge (its mapper is also installed on the bus and PPU)
    cartridge: Option<Cartridge>,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,

    /// Paused state
    paused: bool,

    /// Speed mode
    speed_mode: SpeedMode,

    /// Frame timing for speed control
    #[allow(dead_code)]
    last_frame_time: Option<Instant>,
}

impl Emulator {
    /// Create a new emulator instance
    ///
    /// Initializes all components to their power-on state.
    ///
    /// # Returns
    ///
    /// A new emulator instance
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// ```
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            cartridge: None,
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
            speed_mode: SpeedMode::Normal,
            last_frame_time: None,
        }
    }

    /// Load a ROM file
    ///
    /// Loads a ROM from the specified path and initializes the emulator state.
    /// Adds the ROM to the recent ROMs list.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ROM file (.nes)
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// ```
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;

        let mapper = Rc::new(RefCell::new(create_mapper(cartridge.clone())?));
        self.bus.set_mapper(Rc::clone(&mapper));
        self.bus.ppu().borrow_mut().set_mapper(mapper);

        // Store the cartridge and path
        self.cartridge = Some(cartridge);
        self.rom_path = Some(path.to_path_buf());

        // Add to recent ROMs list
        let mut recent_roms = RecentRomsList::load_or_default();
        recent_roms.add(path);
        recent_roms.save()?;

        // Reset the emulator
        self.reset();

        Ok(())
    }

    /// Reset the emulator
    ///
    /// Resets all components to their power-on state, as if pressing the reset button.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.reset();
    /// ```
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.ppu().borrow_mut().reset();
        self.paused = false;
    }

    /// Run until a full video frame has been produced.
    ///
    /// Drives [`Emulator::step`] in a loop, so it is a no-op (returns
    /// immediately) while paused.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// emulator.run_frame();
    /// ```
    pub fn run_frame(&mut self) {
        if self.paused {
            return;
        }
        loop {
            if self.step() {
                break;
            }
        }
    }

    /// Run a single CPU instruction and its associated PPU and mapper ticks.
    ///
    /// Services any pending OAM DMA first, steps the CPU, ticks the PPU three
    /// times per CPU cycle consumed, calls `Mapper::tick_scanline` at dot 260
    /// of rendering scanlines (the PPU A12-rising-edge approximation mappers
    /// like MMC3 count IRQs from), then dispatches a mapper IRQ or PPU NMI if
    /// either became pending. Returns `true` if a video frame was completed.
    pub fn step(&mut self) -> bool {
        if let Some(page) = self.bus.take_pending_oam_dma() {
            self.bus.run_oam_dma(page);
        }

        let cycles = self.cpu.step(&mut self.bus);

        let ppu = self.bus.ppu();
        let mapper = self.bus.mapper();
        let mut frame_complete = false;

        for _ in 0..3 * cycles {
            if ppu.borrow_mut().step() {
                frame_complete = true;
            }

            let rendering_line = ppu.borrow().scanline() <= 239 && ppu.borrow().rendering_enabled();
            if ppu.borrow().cycle() == 260 && rendering_line {
                mapper.borrow_mut().tick_scanline();
            }
        }

        if mapper.borrow().irq_pending() {
            mapper.borrow_mut().irq_clear();
            self.cpu.irq(&mut self.bus);
        }

        if ppu.borrow().nmi_pending() {
            ppu.borrow_mut().clear_nmi();
            self.cpu.nmi(&mut self.bus);
        }

        frame_complete
    }

    /// Set speed mode
    ///
    /// Controls emulation speed (normal, fast forward, slow motion).
    ///
    /// # Arguments
    ///
    /// * `mode` - The speed mode to set
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::{Emulator, SpeedMode};
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.set_speed_mode(SpeedMode::FastForward2x);
    /// ```
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.speed_mode = mode;
    }

    /// Get current speed mode
    ///
    /// # Returns
    ///
    /// The current speed mode
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Pause the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.pause();
    /// ```
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.resume();
    /// ```
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.toggle_pause();
    /// ```
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Check if emulator is paused
    ///
    /// # Returns
    ///
    /// true if paused, false otherwise
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to Bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to Bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get reference to configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
