use std::fmt;
use std::mem;
use std::time::{Duration, SystemTime};

use crate::compat::input_event;
use crate::constants::{EventType, FFEffectType};
use crate::ff::EffectId;

/// A raw `struct input_event` record, as written to an event device.
///
/// Writing an `EV_FF` record whose code is an uploaded effect's id starts the effect (value `1`,
/// or a repeat count) or stops it (value `0`).
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct InputEvent(input_event);

impl InputEvent {
    /// The size of one record, 24 bytes on 64-bit targets.
    pub const SIZE: usize = mem::size_of::<input_event>();

    /// Creates an event with a zero timestamp. The kernel ignores the timestamp on write.
    pub fn new(type_: EventType, code: u16, value: i32) -> Self {
        InputEvent(input_event {
            time: libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            },
            type_: type_.0,
            code,
            value,
        })
    }

    /// An `EV_FF` event addressed to an uploaded effect.
    pub fn ff_control(id: EffectId, value: i32) -> Self {
        Self::new(EventType::FORCEFEEDBACK, id.code(), value)
    }

    /// An `EV_FF` event adjusting a device-wide setting such as `FF_GAIN`.
    pub(crate) fn ff_setting(setting: FFEffectType, value: u16) -> Self {
        Self::new(EventType::FORCEFEEDBACK, setting.0, value.into())
    }

    /// The record's timestamp, or `None` if a decoded record holds one `SystemTime` can't
    /// represent (negative microseconds, or out of range).
    #[inline]
    pub fn timestamp(&self) -> Option<SystemTime> {
        let tv = &self.0.time;
        let usec = u64::try_from(tv.tv_usec).ok()?;
        let dur = Duration::from_secs(tv.tv_sec.unsigned_abs() as u64)
            .checked_add(Duration::from_micros(usec))?;
        if tv.tv_sec >= 0 {
            SystemTime::UNIX_EPOCH.checked_add(dur)
        } else {
            SystemTime::UNIX_EPOCH.checked_sub(dur)
        }
    }

    #[inline]
    pub fn event_type(&self) -> EventType {
        EventType(self.0.type_)
    }

    #[inline]
    pub fn code(&self) -> u16 {
        self.0.code
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.0.value
    }

    /// The record exactly as it is written to the device.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: input_event has no padding on any supported target.
        unsafe { crate::cast_to_bytes(&self.0) }
    }

    /// Reads a record back. Returns `None` if the length is not [`InputEvent::SIZE`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        // SAFETY: the length matches and input_event is plain integers.
        Some(InputEvent(unsafe {
            std::ptr::read_unaligned(bytes.as_ptr() as *const input_event)
        }))
    }
}

impl fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("InputEvent");
        match self.timestamp() {
            Some(time) => debug.field("time", &time),
            None => debug
                .field("tv_sec", &self.0.time.tv_sec)
                .field("tv_usec", &self.0.time.tv_usec),
        };
        debug
            .field("type", &self.event_type())
            .field("code", &self.code())
            .field("value", &self.value())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn record_is_24_bytes() {
        assert_eq!(InputEvent::SIZE, 24);
    }

    #[test]
    #[cfg(all(target_pointer_width = "64", target_endian = "little"))]
    fn play_record_layout() {
        let ev = InputEvent::ff_control(EffectId::new(7).unwrap(), 1);
        let bytes = ev.as_bytes();

        assert!(bytes[..16].iter().all(|&b| b == 0));
        assert_eq!(&bytes[16..18], &0x15u16.to_le_bytes());
        assert_eq!(&bytes[18..20], &7u16.to_le_bytes());
        assert_eq!(&bytes[20..24], &1i32.to_le_bytes());
    }

    #[test]
    fn decode_recovers_record() {
        let ev = InputEvent::ff_control(EffectId::new(12).unwrap(), 0);
        let back = InputEvent::from_bytes(ev.as_bytes()).unwrap();

        assert_eq!(back, ev);
        assert_eq!(back.event_type(), EventType::FORCEFEEDBACK);
        assert_eq!(back.code(), 12);
        assert_eq!(back.value(), 0);
        assert_eq!(back.timestamp(), Some(SystemTime::UNIX_EPOCH));
        assert!(InputEvent::from_bytes(&ev.as_bytes()[1..]).is_none());
    }

    fn decoded(sec: libc::time_t, usec: libc::suseconds_t) -> InputEvent {
        let mut raw = InputEvent::ff_control(EffectId::new(1).unwrap(), 1).0;
        raw.time.tv_sec = sec;
        raw.time.tv_usec = usec;
        InputEvent::from_bytes(InputEvent(raw).as_bytes()).unwrap()
    }

    #[test]
    fn unnormalized_microseconds_carry_into_seconds() {
        let ev = decoded(1, 5_000_000);
        assert_eq!(
            ev.timestamp(),
            Some(SystemTime::UNIX_EPOCH + Duration::from_secs(6))
        );
        assert!(format!("{:?}", ev).contains("time"));
    }

    #[test]
    fn unrepresentable_timestamps_print_raw_fields() {
        let ev = decoded(1, -1);
        assert_eq!(ev.timestamp(), None);
        let printed = format!("{:?}", ev);
        assert!(printed.contains("tv_usec: -1"), "{printed}");

        let ev = decoded(libc::time_t::MAX, libc::suseconds_t::MAX);
        assert_eq!(ev.timestamp(), None);
        assert!(format!("{:?}", ev).contains("tv_sec"));
    }

    #[test]
    fn settings_use_the_setting_code() {
        let ev = InputEvent::ff_setting(FFEffectType::FF_GAIN, 0xffff);
        assert_eq!(ev.code(), 0x60);
        assert_eq!(ev.value(), 0xffff);
    }
}
