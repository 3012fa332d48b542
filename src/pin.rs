//! Data line direction control.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// A single-wire data line that can be switched between driving and sampling.
///
/// The DHT protocol needs the host to drive the line during the wake/reset
/// sequence and then float it so the sensor can answer. Neither direction
/// enables an internal pull resistor: the sensor module carries its own
/// pull-up.
pub trait DataLine: InputPin + OutputPin {
    /// Configures the line as a floating digital output.
    fn set_output(&mut self) -> Result<(), Self::Error>;

    /// Configures the line as a floating digital input.
    fn set_input(&mut self) -> Result<(), Self::Error>;
}

/// Adapts an open-drain pin to [`DataLine`].
///
/// An open-drain output that is driven high is effectively an input, so
/// switching to input mode just releases the line.
pub struct OpenDrain<P>(pub P);

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for OpenDrain<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}

impl<P: OutputPin> OutputPin for OpenDrain<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }
}

impl<P: InputPin + OutputPin> DataLine for OpenDrain<P> {
    fn set_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_input(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTx,
    };

    #[test]
    fn test_open_drain_input_releases_line() {
        let mut pin = PinMock::new(&[PinTx::set(PinState::High)]);

        let mut line = OpenDrain(pin.clone());
        line.set_output().unwrap();
        line.set_input().unwrap();

        pin.done();
    }

    #[test]
    fn test_open_drain_passes_through() {
        let mut pin = PinMock::new(&[
            PinTx::set(PinState::Low),
            PinTx::get(PinState::Low),
            PinTx::get(PinState::High),
        ]);

        let mut line = OpenDrain(pin.clone());
        line.set_low().unwrap();
        assert!(line.is_low().unwrap());
        assert!(line.is_high().unwrap());

        pin.done();
    }
}
