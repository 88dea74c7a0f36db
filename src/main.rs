// NES Emulator - Main Entry Point

use nes_rs::display::{run_emulator, WindowConfig};
use nes_rs::emulator::Emulator;
use std::env;
use std::process::ExitCode;

struct Args {
    rom_path: String,
    scale: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut rom_path = None;
    let mut scale = 3;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scale" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--scale requires a value".to_string())?;
                scale = value
                    .parse()
                    .map_err(|_| format!("invalid --scale value: {}", value))?;
            }
            other if rom_path.is_none() => rom_path = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }

    let rom_path = rom_path.ok_or_else(|| "missing ROM path".to_string())?;
    Ok(Args { rom_path, scale })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <rom.nes> [--scale N]", program);
}

fn main() -> ExitCode {
    let program = env::args().next().unwrap_or_else(|| "nes-rs".to_string());

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage(&program);
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = Emulator::new();

    println!("NES Emulator (nes-rs) v0.1.0");
    println!("==============================");
    println!("Loading ROM: {}", args.rom_path);

    if let Err(err) = emulator.load_rom(&args.rom_path) {
        eprintln!("Failed to load ROM '{}': {}", args.rom_path, err);
        return ExitCode::FAILURE;
    }

    let config = WindowConfig::new()
        .with_scale(args.scale)
        .with_fps(60)
        .with_vsync(true);

    println!("Press the close button or Ctrl+C to exit.");

    if let Err(err) = run_emulator(config, emulator) {
        eprintln!("Display error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
