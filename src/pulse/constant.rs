use super::PulseSource;

/// Always high, the CPU runs as fast as the host allows.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulseOn;

impl PulseSource for PulseOn {
    fn value(&mut self) -> bool {
        true
    }
}

/// Never high, the CPU waits forever until it is terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulseOff;

impl PulseSource for PulseOff {
    fn value(&mut self) -> bool {
        false
    }
}
