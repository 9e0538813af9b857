//! Rumble force feedback for Linux event devices.
//!
//! Game controllers with vibration motors expose them through the kernel's evdev force feedback
//! interface. An effect is described by a `struct ff_effect`, uploaded once with the `EVIOCSFF`
//! ioctl, then started and stopped any number of times by writing `EV_FF` events to the device.
//! When it is no longer needed it is removed with `EVIOCRMFF`. The kernel documents the protocol
//! in <https://www.kernel.org/doc/Documentation/input/ff.txt>.
//!
//! This crate covers the rumble (two-motor) effect type:
//!
//! - [`build_rumble`] validates magnitudes and a duration and encodes them as an
//!   [`FFEffectDescriptor`], laid out byte for byte like the kernel struct.
//! - [`upload`] hands the descriptor to a device and returns an [`EffectHandle`] carrying the id
//!   the kernel assigned.
//! - [`EffectHandle::play`] and [`EffectHandle::stop`] write the `EV_FF` events, and
//!   [`EffectHandle::remove`] consumes the handle and frees the effect.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::time::Duration;
//! use evdev_rumble::{Device, FFDevice};
//!
//! let device = Device::open("/dev/input/event0")?;
//! if device.supports_ff_rumble() {
//!     let descriptor = evdev_rumble::build_rumble(0.5, 0.5, Duration::from_millis(200))?;
//!     let effect = evdev_rumble::upload(&device, &descriptor)?;
//!     effect.play()?;
//!     std::thread::sleep(Duration::from_millis(200));
//!     effect.stop()?;
//!     effect.remove()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Everything is synchronous. The device is not locked internally, so callers that use one device
//! from several threads must serialize the calls themselves.

// has to be first for its macro
#[macro_use]
mod attribute_set;

mod builder;
mod compat;
mod constants;
mod device;
mod effect;
mod error;
mod event;
mod ff;
mod sys;

#[cfg(test)]
mod tests;

pub use attribute_set::{AttributeSet, AttributeSetRef, AttributeSetRefIter};
pub use builder::{build_rumble, RumbleParams, MAX_DURATION_MS};
pub use constants::*;
pub use device::Device;
pub use effect::{upload, EffectHandle, FFDevice};
pub use error::{Error, Motor, ValidationError};
pub use event::InputEvent;
pub use ff::{EffectId, FFEffectDescriptor, FFReplay, FFRumble, FFTrigger};

/// An error type for the `FromStr` implementation for enum-like types in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumParseError(());

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("unknown constant name")
    }
}

impl std::error::Error for EnumParseError {}

/// Views a kernel struct as the bytes it is sent as.
///
/// # Safety
///
/// `T` must have no uninitialized (padding) bytes.
unsafe fn cast_to_bytes<T: ?Sized>(mem: &T) -> &[u8] {
    std::slice::from_raw_parts(mem as *const T as *const u8, std::mem::size_of_val(mem))
}
