// APU module - Audio Processing Unit register stub
//
// Models the $4000-$4017 write surface the rest of the bus depends on:
// values written to any channel register are latched and, where the real
// hardware allows it, readable back. Audio synthesis (mixing pulse/triangle/
// noise/DMC into a waveform) is not implemented; a real backend would sit
// behind the `audio` feature and `cpal`, driven from the latched register
// state here, but that wiring doesn't exist yet.
//
// ## Register Map
//
// ### Pulse 1 ($4000-$4003) / Pulse 2 ($4004-$4007)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4000/4 | Duty cycle, envelope                  |
// | $4001/5 | Sweep unit                            |
// | $4002/6 | Timer low byte                        |
// | $4003/7 | Length counter, timer high bits       |
//
// ### Triangle ($4008-$400B)
// | $4008   | Linear counter                        |
// | $4009   | Unused                                |
// | $400A   | Timer low byte                        |
// | $400B   | Length counter, timer high bits       |
//
// ### Noise ($400C-$400F)
// | $400C   | Envelope                              |
// | $400D   | Unused                                |
// | $400E   | Mode, period                          |
// | $400F   | Length counter                        |
//
// ### DMC ($4010-$4013)
// | $4010   | Flags, rate                           |
// | $4011   | Direct load                           |
// | $4012   | Sample address                        |
// | $4013   | Sample length                         |
//
// ### Control ($4015, $4017)
// | $4015   | Status/Control (R/W)                  |
// | $4017   | Frame counter (W)                     |

use crate::bus::MemoryMappedDevice;

/// Latched $4000-$4017 register state, without channel synthesis.
pub struct Apu {
    // Pulse 1 ($4000-$4003)
    pulse1_duty_envelope: u8,
    pulse1_sweep: u8,
    pulse1_timer_low: u8,
    pulse1_length_timer_high: u8,

    // Pulse 2 ($4004-$4007)
    pulse2_duty_envelope: u8,
    pulse2_sweep: u8,
    pulse2_timer_low: u8,
    pulse2_length_timer_high: u8,

    // Triangle ($4008-$400B)
    triangle_linear_counter: u8,
    triangle_unused: u8,
    triangle_timer_low: u8,
    triangle_length_timer_high: u8,

    // Noise ($400C-$400F)
    noise_envelope: u8,
    noise_unused: u8,
    noise_mode_period: u8,
    noise_length_counter: u8,

    // DMC ($4010-$4013)
    dmc_flags_rate: u8,
    dmc_direct_load: u8,
    dmc_sample_address: u8,
    dmc_sample_length: u8,

    /// $4015: channel enable bits as last written (bit N = channel N enabled)
    status_control: u8,

    /// $4017: frame counter mode / IRQ inhibit, as last written
    frame_counter: u8,
}

impl Apu {
    /// Create a new APU instance with default (post-reset) register state.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::apu::Apu;
    ///
    /// let apu = Apu::new();
    /// ```
    pub fn new() -> Self {
        Apu {
            pulse1_duty_envelope: 0,
            pulse1_sweep: 0,
            pulse1_timer_low: 0,
            pulse1_length_timer_high: 0,

            pulse2_duty_envelope: 0,
            pulse2_sweep: 0,
            pulse2_timer_low: 0,
            pulse2_length_timer_high: 0,

            triangle_linear_counter: 0,
            triangle_unused: 0,
            triangle_timer_low: 0,
            triangle_length_timer_high: 0,

            noise_envelope: 0,
            noise_unused: 0,
            noise_mode_period: 0,
            noise_length_counter: 0,

            dmc_flags_rate: 0,
            dmc_direct_load: 0,
            dmc_sample_address: 0,
            dmc_sample_length: 0,

            status_control: 0,
            frame_counter: 0,
        }
    }

    /// Reset the APU to its power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            // $4015: Status/Control - read returns which channels are enabled.
            // Bit 0: Pulse 1, Bit 1: Pulse 2, Bit 2: Triangle, Bit 3: Noise,
            // Bit 4: DMC. Frame-IRQ (bit 6) and DMC-IRQ (bit 7) are not
            // modeled since no channel ever raises them here.
            0x4015 => self.status_control & 0x1F,

            // Every other register is write-only on real hardware.
            _ => 0,
        }
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            // Pulse 1 ($4000-$4003)
            0x4000 => self.pulse1_duty_envelope = data,
            0x4001 => self.pulse1_sweep = data,
            0x4002 => self.pulse1_timer_low = data,
            0x4003 => self.pulse1_length_timer_high = data,

            // Pulse 2 ($4004-$4007)
            0x4004 => self.pulse2_duty_envelope = data,
            0x4005 => self.pulse2_sweep = data,
            0x4006 => self.pulse2_timer_low = data,
            0x4007 => self.pulse2_length_timer_high = data,

            // Triangle ($4008-$400B)
            0x4008 => self.triangle_linear_counter = data,
            0x4009 => self.triangle_unused = data,
            0x400A => self.triangle_timer_low = data,
            0x400B => self.triangle_length_timer_high = data,

            // Noise ($400C-$400F)
            0x400C => self.noise_envelope = data,
            0x400D => self.noise_unused = data,
            0x400E => self.noise_mode_period = data,
            0x400F => self.noise_length_counter = data,

            // DMC ($4010-$4013)
            0x4010 => self.dmc_flags_rate = data,
            0x4011 => self.dmc_direct_load = data,
            0x4012 => self.dmc_sample_address = data,
            0x4013 => self.dmc_sample_length = data,

            // $4014: OAM DMA, handled by the bus rather than the APU
            0x4014 => {}

            // $4015: Status/Control - enable/disable channels
            0x4015 => self.status_control = data,

            // $4016: Controller 1, handled separately
            0x4016 => {}

            // $4017: Frame counter mode / IRQ inhibit
            0x4017 => self.frame_counter = data,

            _ => {}
        }
    }
}

impl MemoryMappedDevice for Apu {
    fn read(&mut self, addr: u16) -> u8 {
        self.read_register(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.write_register(addr, data);
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
