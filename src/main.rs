/*
 * This is the CLI frontend of the emu6502 library: it builds a machine,
 * runs the CPU on its own thread until Ctrl-C or the given duration and
 * prints what was measured.
 */
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use emu6502::{
    disassemble, AddressableIO, MachineConfig, MemoryPreset, CPU, RESET_VECTOR_ADDR, VERSION,
};
use log::info;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Run a MOS 6502 fetch loop against a clock
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine description YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Memory layout: minimal, commodore64 or apple2
    #[arg(long)]
    preset: Option<MemoryPreset>,

    /// Clock period in nanoseconds, 0 runs as fast as possible
    #[arg(long)]
    period_ns: Option<u64>,

    /// Binary image to load in memory
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Hexadecimal address the image is loaded at
    #[arg(long, value_name = "HEX")]
    load_address: Option<String>,

    /// Hexadecimal address written in the reset vector
    #[arg(long, value_name = "HEX")]
    reset_vector: Option<String>,

    /// Fill the memory with random bytes before loading the image
    #[arg(long)]
    randomize_ram: bool,

    /// Stop the CPU after this many seconds
    #[arg(short, long, value_name = "SECS")]
    duration: Option<f64>,

    /// Print N instructions from the reset vector target and exit
    #[arg(long, value_name = "N")]
    disassemble: Option<usize>,

    /// More logs, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command line flags take precedence over the config file.
    fn machine_config(&self) -> Result<MachineConfig> {
        let mut config = match &self.config {
            Some(path) => MachineConfig::load(path)
                .with_context(|| format!("Failed to load machine config {}", path.display()))?,
            None => MachineConfig::default(),
        };

        if let Some(preset) = self.preset {
            config.preset = preset;
            config.rom_masks = None;
        }
        if let Some(period) = self.period_ns {
            config.period_ns = period;
        }
        if let Some(image) = &self.image {
            config.image = Some(image.clone());
        }
        if let Some(address) = &self.load_address {
            config.load_address = address.clone();
        }
        if let Some(vector) = &self.reset_vector {
            config.reset_vector = Some(vector.clone());
        }
        config.randomize_ram |= self.randomize_ram;

        Ok(config)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    info!("emu6502 {}", VERSION);

    let config = cli.machine_config()?;
    let memory = config.build_memory().context("Failed to build the memory")?;

    if let Some(count) = cli.disassemble {
        let start = memory.read_word(RESET_VECTOR_ADDR);
        for line in disassemble(&memory, start, count) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut cpu = CPU::new(memory, config.clock());
    let handle = cpu.handle();

    let interrupted = handle.clone();
    ctrlc::set_handler(move || {
        interrupted.terminate();
    })
    .context("Failed to install the Ctrl-C handler")?;

    if let Some(seconds) = cli.duration {
        let duration = Duration::try_from_secs_f64(seconds)
            .with_context(|| format!("Invalid duration {} seconds", seconds))?;
        let timer = handle.clone();
        thread::spawn(move || {
            thread::sleep(duration);
            timer.terminate();
        });
    }

    let worker = thread::Builder::new()
        .name("cpu".to_owned())
        .spawn(move || {
            cpu.start();
            cpu
        })
        .context("Failed to spawn the CPU thread")?;
    let cpu = worker
        .join()
        .map_err(|_| anyhow!("The CPU thread panicked"))?;

    println!("{} cycles, {:.0} Hz", cpu.cycles(), cpu.frequency());
    println!("{:?}", cpu.registers());

    Ok(())
}
