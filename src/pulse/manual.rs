use super::PulseSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/*
 * ManualPulse
 * Single stepping: the CPU side polls the ManualPulse, any thread holding a
 * ManualTrigger arms the next pulse. Arming twice before the pulse is
 * consumed still grants a single cycle.
 */
#[derive(Debug, Default)]
pub struct ManualPulse {
    armed: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
pub struct ManualTrigger {
    armed: Arc<AtomicBool>,
}

impl ManualPulse {
    pub fn new() -> ManualPulse {
        ManualPulse::default()
    }

    pub fn trigger(&self) -> ManualTrigger {
        ManualTrigger {
            armed: self.armed.clone(),
        }
    }
}

impl ManualTrigger {
    pub fn pulse(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// True while the last pulse has not been consumed yet.
    pub fn is_pending(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

impl PulseSource for ManualPulse {
    fn value(&mut self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }
}
