use crate::cpu_instruction::{decode, RESET_VECTOR_ADDR};
use crate::memory::{little_endian, AddressableIO};
use crate::pulse::PulseSource;
use crate::registers::Registers;
use log::{debug, info, trace};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Number of cycles the frequency is measured over.
pub const FREQUENCY_WINDOW: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CPUState {
    /// Built, not started yet.
    Idle = 0,
    Resetting = 1,
    Running = 2,
    Terminated = 3,
}

impl CPUState {
    fn from_u8(value: u8) -> CPUState {
        match value {
            1 => CPUState::Resetting,
            2 => CPUState::Running,
            3 => CPUState::Terminated,
            _ => CPUState::Idle,
        }
    }
}

impl fmt::Display for CPUState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            CPUState::Idle => "idle",
            CPUState::Resetting => "resetting",
            CPUState::Running => "running",
            CPUState::Terminated => "terminated",
        })
    }
}

/*
 * What other threads may observe of a running CPU. The registers are not
 * part of it, only the CPU thread touches them.
 */
#[derive(Debug)]
struct SharedState {
    terminate: AtomicBool,
    cycles: AtomicU64,
    frequency: AtomicU64, // f64 bits
    state: AtomicU8,
}

impl Default for SharedState {
    fn default() -> Self {
        SharedState {
            terminate: AtomicBool::new(false),
            cycles: AtomicU64::new(0),
            frequency: AtomicU64::new(0f64.to_bits()),
            state: AtomicU8::new(CPUState::Idle as u8),
        }
    }
}

/// Thread safe remote control of a CPU.
#[derive(Debug, Clone)]
pub struct CPUHandle {
    shared: Arc<SharedState>,
}

impl CPUHandle {
    /// Asks the CPU loop to stop. Returns true for the call that actually
    /// raised the flag, later calls have no effect.
    pub fn terminate(&self) -> bool {
        !self.shared.terminate.swap(true, Ordering::SeqCst)
    }

    /// Last measured clock frequency in Hz.
    pub fn frequency(&self) -> f64 {
        f64::from_bits(self.shared.frequency.load(Ordering::Relaxed))
    }

    /// Bus cycles performed since the end of the reset sequence.
    pub fn cycles(&self) -> u64 {
        self.shared.cycles.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> CPUState {
        CPUState::from_u8(self.shared.state.load(Ordering::SeqCst))
    }
}

/*
 * CPU
 * Owns the registers, the memory bus and the clock. Every memory access is
 * one bus cycle gated by one pulse of the clock. The CPU thread calls
 * start(), any other thread may stop it through a CPUHandle.
 */
pub struct CPU<M: AddressableIO, P: PulseSource> {
    registers: Registers,
    memory: M,
    pulse: P,
    shared: Arc<SharedState>,
}

impl<M: AddressableIO, P: PulseSource> CPU<M, P> {
    pub fn new(memory: M, pulse: P) -> CPU<M, P> {
        CPU {
            registers: Registers::default(),
            memory,
            pulse,
            shared: Arc::new(SharedState::default()),
        }
    }

    pub fn handle(&self) -> CPUHandle {
        CPUHandle {
            shared: self.shared.clone(),
        }
    }

    pub fn terminate(&self) -> bool {
        !self.shared.terminate.swap(true, Ordering::SeqCst)
    }

    pub fn frequency(&self) -> f64 {
        f64::from_bits(self.shared.frequency.load(Ordering::Relaxed))
    }

    pub fn cycles(&self) -> u64 {
        self.shared.cycles.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> CPUState {
        CPUState::from_u8(self.shared.state.load(Ordering::SeqCst))
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Runs the reset sequence then the fetch loop until terminated.
    pub fn start(&mut self) {
        if self.reset() {
            self.run();
        }
        self.set_state(CPUState::Terminated);
        info!(
            "CPU terminated after {} cycles ({:.0} Hz) {:?}",
            self.cycles(),
            self.frequency(),
            self.registers
        );
    }

    /*
     * Power-on bus activity: two instruction fetch shaped reads, three stack
     * reads walking the stack pointer down, then the reset vector. The CPU
     * is running once the sequence completes. Returns false when terminated
     * before that.
     */
    pub fn reset(&mut self) -> bool {
        self.set_state(CPUState::Resetting);
        debug!("CPU reset");
        if self.reset_sequence().is_none() {
            return false;
        }
        self.set_state(CPUState::Running);

        true
    }

    fn reset_sequence(&mut self) -> Option<()> {
        let program_counter = self.registers.program_counter;
        self.clocked_read(program_counter)?;
        self.clocked_read(program_counter.wrapping_add(1))?;
        for _ in 0..3 {
            self.clocked_read(self.registers.stack_address())?;
            self.registers.decrement_stack_pointer();
        }
        let low = self.clocked_read(RESET_VECTOR_ADDR)?;
        let high = self.clocked_read(RESET_VECTOR_ADDR + 1)?;
        self.registers.program_counter = little_endian(&[low, high]);
        self.registers.status_register.interrupt = true;
        debug!(
            "reset vector loaded, starting at #0x{:04X}",
            self.registers.program_counter
        );

        Some(())
    }

    /// One running bus cycle: reads the byte under the program counter and
    /// moves to the next one. `None` when terminated while waiting.
    pub fn tick(&mut self) -> Option<u8> {
        let address = self.registers.program_counter;
        let byte = self.clocked_read(address)?;
        self.registers.advance_program_counter();
        self.shared.cycles.fetch_add(1, Ordering::Relaxed);
        if log::log_enabled!(log::Level::Trace) {
            match decode(byte) {
                Some((instruction, mode)) => {
                    trace!("#0x{:04X}: 0x{:02x} {} {}", address, byte, instruction, mode)
                }
                None => trace!("#0x{:04X}: 0x{:02x}", address, byte),
            }
        }

        Some(byte)
    }

    fn run(&mut self) {
        let mut window_start = Instant::now();

        while self.tick().is_some() {
            if self.cycles() % FREQUENCY_WINDOW == 0 {
                let now = Instant::now();
                self.measure_frequency(FREQUENCY_WINDOW, now - window_start);
                window_start = now;
            }
        }

        // not even one full window, use whatever elapsed
        let cycles = self.cycles();
        if cycles < FREQUENCY_WINDOW {
            self.measure_frequency(cycles, window_start.elapsed());
        }
    }

    fn measure_frequency(&self, cycles: u64, elapsed: std::time::Duration) {
        let seconds = elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return;
        }
        let hertz = cycles as f64 / seconds;
        self.shared.frequency.store(hertz.to_bits(), Ordering::Relaxed);
        debug!("clock frequency {:.0} Hz", hertz);
    }

    /// Waits for a pulse then performs the read. Termination is only seen
    /// before the read, never in the middle of it.
    fn clocked_read(&mut self, address: u16) -> Option<u8> {
        if !self.wait_for_clock() {
            return None;
        }

        Some(self.memory.read(address))
    }

    fn wait_for_clock(&mut self) -> bool {
        loop {
            if self.shared.terminate.load(Ordering::SeqCst) {
                return false;
            }
            if self.pulse.value() {
                return true;
            }
            std::hint::spin_loop();
        }
    }

    fn set_state(&self, state: CPUState) {
        self.shared.state.store(state as u8, Ordering::SeqCst);
    }
}

impl<M: AddressableIO, P: PulseSource> fmt::Debug for CPU<M, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU [{} | {:?}]", self.state(), self.registers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryImage;
    use crate::pulse::{ManualPulse, PulseOff, PulseOn};
    use std::cell::RefCell;

    /// Records every address read on the bus.
    struct BusRecorder {
        image: MemoryImage,
        reads: RefCell<Vec<u16>>,
    }

    impl AddressableIO for BusRecorder {
        fn read(&self, address: u16) -> u8 {
            self.reads.borrow_mut().push(address);
            self.image.read(address)
        }

        fn write(&mut self, address: u16, value: u8) -> bool {
            self.image.write(address, value)
        }
    }

    fn image_with_reset_vector(target: u16) -> MemoryImage {
        let mut image = MemoryImage::new();
        image.set_word(RESET_VECTOR_ADDR, target);

        image
    }

    /// Stops the CPU after `count` pulses.
    struct CountedPulse {
        remaining: usize,
        handle: Option<CPUHandle>,
    }

    impl PulseSource for CountedPulse {
        fn value(&mut self) -> bool {
            if self.remaining == 0 {
                if let Some(handle) = &self.handle {
                    handle.terminate();
                }
                return false;
            }
            self.remaining -= 1;
            true
        }
    }

    #[test]
    fn test_reset_sequence() {
        let memory = BusRecorder {
            image: image_with_reset_vector(0x0800),
            reads: RefCell::new(Vec::new()),
        };
        let mut cpu = CPU::new(memory, PulseOn);
        assert_eq!(CPUState::Idle, cpu.state());
        assert!(cpu.reset());

        assert_eq!(
            vec![0x0000, 0x0001, 0x0100, 0x01ff, 0x01fe, 0xfffc, 0xfffd],
            *cpu.memory().reads.borrow()
        );
        assert_eq!(0x0800, cpu.registers().program_counter);
        assert_eq!(0xfd, cpu.registers().stack_pointer);
        assert!(cpu.registers().status_register.interrupt);
        assert_eq!(0, cpu.cycles());
        assert_eq!(CPUState::Running, cpu.state());
    }

    #[test]
    fn test_state_after_reset_and_ticks() {
        let mut cpu = CPU::new(image_with_reset_vector(0x0800), PulseOn);
        let handle = cpu.handle();
        assert!(cpu.reset());
        for _ in 0..3 {
            cpu.tick();
        }
        assert_eq!(CPUState::Running, cpu.state());
        assert_eq!(CPUState::Running, handle.state());
        assert_eq!(3, handle.cycles());
    }

    #[test]
    fn test_interrupted_reset_stays_resetting() {
        let mut cpu = CPU::new(
            image_with_reset_vector(0x0800),
            CountedPulse {
                remaining: 3,
                handle: None,
            },
        );
        cpu.pulse.handle = Some(cpu.handle());
        assert!(!cpu.reset());
        assert_eq!(CPUState::Resetting, cpu.state());
        assert_eq!(0x0000, cpu.registers().program_counter);
    }

    #[test]
    fn test_cpu_and_handle_agree() {
        let mut cpu = CPU::new(
            image_with_reset_vector(0x0800),
            CountedPulse {
                remaining: 7 + 120,
                handle: None,
            },
        );
        let handle = cpu.handle();
        cpu.pulse.handle = Some(handle.clone());
        cpu.start();

        assert_eq!(120, cpu.cycles());
        assert_eq!(cpu.cycles(), handle.cycles());
        assert_eq!(cpu.frequency().to_bits(), handle.frequency().to_bits());
        assert_eq!(cpu.state(), handle.state());
        // already raised by the pulse source
        assert!(!cpu.terminate());
        assert!(!handle.terminate());
    }

    #[test]
    fn test_tick() {
        let mut image = image_with_reset_vector(0x0800);
        image.load(0x0800, &[0xa9, 0xc0]).unwrap();
        let mut cpu = CPU::new(image, PulseOn);
        cpu.reset();

        assert_eq!(Some(0xa9), cpu.tick());
        assert_eq!(Some(0xc0), cpu.tick());
        assert_eq!(0x0802, cpu.registers().program_counter);
        assert_eq!(2, cpu.cycles());
    }

    #[test]
    fn test_program_counter_wraps() {
        let mut cpu = CPU::new(image_with_reset_vector(0xffff), PulseOn);
        cpu.reset();
        cpu.tick();
        assert_eq!(0x0000, cpu.registers().program_counter);
    }

    #[test]
    fn test_terminated_before_reset() {
        let mut cpu = CPU::new(image_with_reset_vector(0x0800), PulseOff);
        assert!(cpu.terminate());
        assert!(!cpu.terminate());
        cpu.start();
        assert_eq!(CPUState::Terminated, cpu.state());
        assert_eq!(0x0000, cpu.registers().program_counter);
        assert_eq!(0, cpu.cycles());
    }

    #[test]
    fn test_tick_waits_for_the_pulse() {
        let source = ManualPulse::new();
        let trigger = source.trigger();
        let mut cpu = CPU::new(image_with_reset_vector(0x0800), source);
        trigger.pulse();
        cpu.terminate();
        // the pulse is armed but termination wins before the read
        assert_eq!(None, cpu.tick());
        assert!(trigger.is_pending());
    }

    #[test]
    fn test_counted_run() {
        let mut cpu = CPU::new(
            image_with_reset_vector(0x0800),
            CountedPulse {
                remaining: 7 + 250,
                handle: None,
            },
        );
        cpu.pulse.handle = Some(cpu.handle());
        cpu.start();

        assert_eq!(250, cpu.cycles());
        assert_eq!(0x0800 + 250, cpu.registers().program_counter);
        assert_eq!(CPUState::Terminated, cpu.state());
        assert!(cpu.frequency() > 0.0);
    }

    #[test]
    fn test_short_run_frequency() {
        let mut cpu = CPU::new(
            image_with_reset_vector(0x0800),
            CountedPulse {
                remaining: 7 + 10,
                handle: None,
            },
        );
        cpu.pulse.handle = Some(cpu.handle());
        cpu.start();

        assert_eq!(10, cpu.cycles());
        assert!(cpu.frequency() > 0.0);
    }

    #[test]
    fn test_debug() {
        let cpu = CPU::new(MemoryImage::new(), PulseOff);
        assert_eq!(
            "CPU [idle | Registers [A:0x00, X:0x00, Y:0x00 | SP:0x00 PC:0x0000 | nv-bdizc]]",
            format!("{:?}", cpu)
        );
    }
}
