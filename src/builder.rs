use std::time::Duration;

use crate::error::{Motor, ValidationError};
use crate::ff::{FFEffectDescriptor, FFReplay, FFRumble};

/// Longest replay length the kernel accepts. Larger values wrap negative in its signed checks.
pub const MAX_DURATION_MS: u16 = 0x7fff;

/// Validates rumble parameters and encodes them as an upload-ready descriptor.
///
/// Magnitudes are fractions of full strength in `[0.0, 1.0]` and are scaled to `round(m * 65535)`.
/// The duration is truncated to whole milliseconds; a zero duration plays until stopped, but a
/// nonzero duration shorter than a millisecond is rejected instead of silently becoming zero.
///
/// ```
/// use std::time::Duration;
///
/// let effect = evdev_rumble::build_rumble(1.0, 0.25, Duration::from_millis(500))?;
/// assert_eq!(effect.id(), -1);
/// assert_eq!(effect.replay().length, 500);
/// assert_eq!(effect.rumble_data().strong_magnitude, 0xffff);
/// # Ok::<(), evdev_rumble::ValidationError>(())
/// ```
pub fn build_rumble(
    strong_magnitude: f32,
    weak_magnitude: f32,
    duration: Duration,
) -> Result<FFEffectDescriptor, ValidationError> {
    let strong_magnitude = scale_magnitude(Motor::Strong, strong_magnitude)?;
    let weak_magnitude = scale_magnitude(Motor::Weak, weak_magnitude)?;
    let length = duration_ms(duration)?;

    Ok(FFEffectDescriptor::rumble(
        FFReplay { length, delay: 0 },
        FFRumble {
            strong_magnitude,
            weak_magnitude,
        },
    ))
}

fn scale_magnitude(motor: Motor, value: f32) -> Result<u16, ValidationError> {
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange { motor, value });
    }
    // f64 holds the product of an f32 and 65535 exactly, so only the final round() rounds
    Ok((f64::from(value) * f64::from(u16::MAX)).round() as u16)
}

fn duration_ms(duration: Duration) -> Result<u16, ValidationError> {
    let ms = duration.as_millis();
    if ms == 0 && !duration.is_zero() {
        return Err(ValidationError::DurationTooShort(duration));
    }
    if ms > u128::from(MAX_DURATION_MS) {
        return Err(ValidationError::DurationTooLong(duration));
    }
    Ok(ms as u16)
}

/// Rumble parameters kept as plain values, e.g. loaded from a settings file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RumbleParams {
    pub strong_magnitude: f32,
    pub weak_magnitude: f32,
    pub duration: Duration,
}

impl RumbleParams {
    pub fn build(&self) -> Result<FFEffectDescriptor, ValidationError> {
        build_rumble(self.strong_magnitude, self.weak_magnitude, self.duration)
    }
}
