//! DHT11 / DHT22 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 and DHT22 (AM2302)
//! temperature and humidity sensors, built on top of the [`embedded-hal`] traits.
//!
//! A read is a single blocking transaction: the driver wakes and resets the
//! sensor, samples its self-timed reply by counting 1 µs delay ticks per line
//! level, assembles the 40-bit frame, checks its checksum and scales the
//! payload according to the sensor [`Variant`].
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Optional logging through `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access, plus [`DataLine`] for
//!   switching the line between output and input
//! - [`DelayNs`] for accurate timing
//!
//! Open-drain pins can be wrapped in [`OpenDrain`].
//!
//! # Timing accuracy
//! Bits are told apart by how many sampling ticks a high period lasts, so
//! preemption during [`Dht::read`] corrupts the result. Call it from a
//! critical section or a high-priority context on bare metal. Under a
//! general-purpose OS accuracy is reduced and checksum failures are expected;
//! retry after the sensor's cooldown.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! The two logging features are mutually exclusive.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod dht;
pub mod error;
pub mod format;
pub mod frame;
pub mod pin;
pub mod variant;

pub use config::Timing;
pub use dht::{Dht, Reading};
pub use error::DhtError;
pub use format::{TwoDecimals, format_two_decimals};
pub use frame::RawFrame;
pub use pin::{DataLine, OpenDrain};
pub use variant::Variant;
