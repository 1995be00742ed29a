//! Clock signals gating the bus cycles of the CPU.
//!
//! A [`PulseSource`] is polled in a busy loop by the CPU thread, each `true`
//! grants one bus cycle. Pulses are not queued: a source polled late still
//! grants a single cycle.
mod clock;
mod constant;
mod manual;

pub use clock::Clock;
pub use constant::{PulseOff, PulseOn};
pub use manual::{ManualPulse, ManualTrigger};

pub trait PulseSource {
    /// Tells if a clock edge occurred since the last granted pulse.
    fn value(&mut self) -> bool;
}

impl<P: PulseSource + ?Sized> PulseSource for Box<P> {
    fn value(&mut self) -> bool {
        (**self).value()
    }
}

impl<P: PulseSource + ?Sized> PulseSource for &mut P {
    fn value(&mut self) -> bool {
        (**self).value()
    }
}
