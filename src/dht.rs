use embedded_hal::delay::DelayNs;

use crate::{
    config::Timing,
    error::DhtError,
    frame::{FrameBuilder, MIN_FRAME_BITS, decode},
    pin::DataLine,
    variant::Variant,
};

/// Driver for the DHT11 and DHT22 temperature and humidity sensors.
///
/// A `Dht` can only be obtained through [`Dht::initialize`], so every handle
/// owns a data line that has already been configured successfully.
pub struct Dht<PIN, D> {
    pin: PIN,
    delay: D,
    variant: Variant,
    timing: Timing,
}

/// Reading returned by the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl<PIN, DELAY, E> Dht<PIN, DELAY>
where
    PIN: DataLine<Error = E>,
    DELAY: DelayNs,
{
    /// Configures the data line and creates a driver with the default [`Timing`].
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO line connected to the sensor's data pin.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `variant` - Which sensor model is attached.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Configuration` if the line cannot be set up as an output.
    pub fn initialize(pin: PIN, delay: DELAY, variant: Variant) -> Result<Self, DhtError<E>> {
        Self::initialize_with_timing(pin, delay, variant, Timing::default())
    }

    /// Like [`Dht::initialize`], with custom timing parameters.
    pub fn initialize_with_timing(
        mut pin: PIN,
        delay: DELAY,
        variant: Variant,
        timing: Timing,
    ) -> Result<Self, DhtError<E>> {
        if let Err(e) = pin.set_output() {
            error!("failed to set up {} data line", variant);
            return Err(DhtError::Configuration(e));
        }
        info!("{} set up", variant);

        Ok(Dht {
            pin,
            delay,
            variant,
            timing,
        })
    }

    /// Reads a temperature and humidity measurement from the sensor.
    ///
    /// This blocks for the whole transaction: the wake and reset pulses alone
    /// take about 270 ms with the default timing. Bits are classified by
    /// counting `delay_us(1)` ticks, so the result is only as accurate as the
    /// delay provider. Run it with interrupts masked or at high priority where
    /// possible; on a general-purpose OS expect occasional checksum failures.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if the read is successful and the checksum is valid.
    /// * `Err(DhtError)` if the sensor did not answer, the frame was cut short,
    ///   the checksum did not match or a pin operation failed.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        self.start()?;
        self.wait_for_response()?;

        let captured = self.capture()?;
        let bits = captured.bits();
        let frame = captured.frame();

        if bits < MIN_FRAME_BITS {
            warn!(
                "{}: got too few bits: {}, should be at least 40",
                self.variant, bits
            );
        } else {
            debug!(
                "{}: frame {:?}, computed checksum {}",
                self.variant,
                frame.0,
                frame.checksum()
            );
        }

        let result = decode(self.variant, bits, &frame);
        match &result {
            Ok(reading) => info!(
                "{}: temperature {} C, humidity {} %",
                self.variant, reading.temperature, reading.relative_humidity
            ),
            Err(DhtError::ChecksumMismatch { expected, computed }) => warn!(
                "{}: checksum incorrect after {} bits, expected {} but got {}",
                self.variant, bits, expected, computed
            ),
            Err(_) => {}
        }
        result
    }

    /// Sensor model this driver decodes for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Timing parameters in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Releases the data line and delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Sends the wake and reset pulses, then hands the line to the sensor.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        self.pin.set_output()?;

        // Let the sensor settle
        self.pin.set_high()?;
        self.delay.delay_ms(self.timing.wake_ms);

        // Reset pulse
        self.pin.set_low()?;
        self.delay.delay_ms(self.timing.reset_ms);
        self.pin.set_high()?;
        self.delay.delay_us(self.timing.release_us);

        self.pin.set_input()?;
        Ok(())
    }

    /// Waits for the sensor to pull the line low.
    fn wait_for_response(&mut self) -> Result<(), DhtError<E>> {
        for _ in 0..self.timing.max_start_wait {
            if self.pin.is_low()? {
                return Ok(());
            }
            self.delay.delay_us(1);
        }
        warn!("{}: no response from sensor", self.variant);
        Err(DhtError::SensorUnresponsive)
    }

    /// Captures data bits until the sensor releases the line.
    ///
    /// The first transitions are the response preamble (low, high) and the
    /// low lead-in of bit 0. After that each bit is a fixed low period followed
    /// by a high period whose length is the bit value, so only the even
    /// transitions carry data.
    fn capture(&mut self) -> Result<FrameBuilder, DhtError<E>> {
        let mut builder = FrameBuilder::new();
        let mut last_high = true;

        for i in 0..self.timing.max_transitions {
            let ticks = self.measure(last_high)?;
            last_high = self.pin.is_high()?;
            if ticks >= self.timing.release_ticks {
                break;
            }
            if i > 3 && i % 2 == 0 {
                builder.push(ticks > self.timing.break_ticks);
            }
        }

        Ok(builder)
    }

    /// Counts 1 µs ticks while the line stays at `high`, up to `release_ticks`.
    fn measure(&mut self, high: bool) -> Result<u32, DhtError<E>> {
        let mut ticks = 0;
        while self.pin.is_high()? == high {
            ticks += 1;
            self.delay.delay_us(1);
            if ticks >= self.timing.release_ticks {
                break;
            }
        }
        Ok(ticks)
    }
}
