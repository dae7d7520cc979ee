//! GPIO pin abstractions
//!
//! The signal bridge only drives outputs, so only the output side is
//! abstracted here.

/// Digital output pin
///
/// Implementations handle the register writes for the specific chip.
/// `set_state` is the capability the output bank relies on; the other
/// methods exist so the blink and level helpers read naturally.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn set_state(&mut self, high: bool) {
        T::set_state(self, high)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}
