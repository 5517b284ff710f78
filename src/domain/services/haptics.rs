use std::rc::Rc;

/// Short vibration feedback tied to a user interaction.
///
/// Implementations are best-effort: devices without a vibration motor
/// simply ignore the call.
pub trait Haptics {
    fn pulse(&self, duration_ms: u32);
}

/// Cloneable handle to whichever `Haptics` the app was given
#[derive(Clone)]
pub struct SharedHaptics(Rc<dyn Haptics>);

impl SharedHaptics {
    pub fn new(haptics: impl Haptics + 'static) -> Self {
        Self(Rc::new(haptics))
    }
}

impl Haptics for SharedHaptics {
    fn pulse(&self, duration_ms: u32) {
        self.0.pulse(duration_ms)
    }
}
