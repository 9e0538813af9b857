//! Byte layout of the force feedback effect descriptor handed to `EVIOCSFF`.
//!
//! The kernel reads `struct ff_effect` by offset, so [`FFEffectDescriptor`] is laid out field for
//! field like it and only ever carries the rumble member of the kernel's union. The union sits at
//! offset 16: the header is 14 bytes and the union is at least 4-byte aligned because its periodic
//! member holds a `u32`. The two bytes in between are written out explicitly.
//!
//! `EVIOCSFF` encodes `sizeof(struct ff_effect)` and the kernel copies that many bytes, so the
//! descriptor keeps a zeroed tail for the rest of the union. Size and offsets are checked against
//! libc's definition at compile time.

use std::mem::{self, offset_of};

use crate::compat::ff_effect;
use crate::constants::FFEffectType;

/// Trigger information for the force feedback effect.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FFTrigger {
    /// The button number that triggers the force feedback effect.
    pub button: u16,
    /// How long to wait before the force feedback effect can be triggered again in milliseconds.
    pub interval: u16,
}

/// Scheduling information for the force feedback effect.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FFReplay {
    /// How long the force feedback effect should last in milliseconds. Zero plays until stopped.
    pub length: u16,
    /// How long to wait before the force feedback effect should play in milliseconds.
    pub delay: u16,
}

/// Motor strengths of a rumble effect.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FFRumble {
    /// The magnitude of the heavy motor.
    pub strong_magnitude: u16,
    /// The magnitude of the light motor.
    pub weak_magnitude: u16,
}

/// Offset of the kernel's effect union.
const UNION_OFFSET: usize = 16;

/// Bytes of the kernel union left over after the rumble member.
const UNION_TAIL: usize = mem::size_of::<ff_effect>() - UNION_OFFSET - mem::size_of::<FFRumble>();

/// Identifier the kernel picks for an uploaded effect.
///
/// The kernel numbers effects from zero per device. The `-1` request sentinel is not an
/// `EffectId`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EffectId(i16);

impl EffectId {
    /// Returns `None` for negative values, which the kernel never assigns.
    pub const fn new(raw: i16) -> Option<Self> {
        if raw < 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The id as stored in the descriptor.
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// The id as it appears in the `code` of an `EV_FF` event.
    pub const fn code(self) -> u16 {
        self.0 as u16
    }
}

/// A kernel `struct ff_effect` holding a rumble effect.
///
/// Build one with [`build_rumble`](crate::build_rumble) or [`FFEffectDescriptor::rumble`] and
/// pass it to [`upload`](crate::upload).
#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct FFEffectDescriptor {
    effect_type: u16,
    id: i16,
    direction: u16,
    trigger: FFTrigger,
    replay: FFReplay,
    _pad: [u8; 2],
    rumble: FFRumble,
    _tail: [u8; UNION_TAIL],
}

const _: () = {
    assert!(mem::size_of::<FFEffectDescriptor>() == mem::size_of::<ff_effect>());
    assert!(offset_of!(FFEffectDescriptor, effect_type) == offset_of!(ff_effect, type_));
    assert!(offset_of!(FFEffectDescriptor, id) == offset_of!(ff_effect, id));
    assert!(offset_of!(FFEffectDescriptor, direction) == offset_of!(ff_effect, direction));
    assert!(offset_of!(FFEffectDescriptor, trigger) == offset_of!(ff_effect, trigger));
    assert!(offset_of!(FFEffectDescriptor, replay) == offset_of!(ff_effect, replay));
    assert!(offset_of!(FFEffectDescriptor, _pad) == 14);
    assert!(offset_of!(FFEffectDescriptor, rumble) == offset_of!(ff_effect, u));
    assert!(offset_of!(FFEffectDescriptor, rumble) == UNION_OFFSET);
    assert!(offset_of!(FFEffectDescriptor, _tail) == UNION_OFFSET + 4);
};

impl FFEffectDescriptor {
    /// The descriptor's size in bytes, equal to the kernel's `sizeof(struct ff_effect)`.
    pub const SIZE: usize = mem::size_of::<Self>();

    /// A rumble effect that asks the kernel to allocate a new id on upload.
    pub const fn rumble(replay: FFReplay, rumble: FFRumble) -> Self {
        Self {
            effect_type: FFEffectType::FF_RUMBLE.0,
            id: -1,
            direction: 0,
            trigger: FFTrigger {
                button: 0,
                interval: 0,
            },
            replay,
            _pad: [0; 2],
            rumble,
            _tail: [0; UNION_TAIL],
        }
    }

    pub fn effect_type(&self) -> FFEffectType {
        FFEffectType(self.effect_type)
    }

    /// The raw id field: `-1` before upload, or the id of the effect being modified.
    pub fn id(&self) -> i16 {
        self.id
    }

    pub fn direction(&self) -> u16 {
        self.direction
    }

    pub fn trigger(&self) -> FFTrigger {
        self.trigger
    }

    pub fn replay(&self) -> FFReplay {
        self.replay
    }

    pub fn rumble_data(&self) -> FFRumble {
        self.rumble
    }

    /// Targets an already uploaded effect, so uploading this descriptor modifies it in place.
    pub(crate) fn with_id(mut self, id: EffectId) -> Self {
        self.id = id.raw();
        self
    }

    pub(crate) fn set_raw_id(&mut self, id: i16) {
        self.id = id;
    }

    /// The exact bytes the kernel will read.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: repr(C) with only integer fields and no implicit padding, so every byte is
        // initialized.
        unsafe { crate::cast_to_bytes(self) }
    }

    /// Reads a descriptor back from kernel bytes. Returns `None` if the length is not
    /// [`FFEffectDescriptor::SIZE`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        // SAFETY: the length matches and every bit pattern is a valid descriptor.
        Some(unsafe { std::ptr::read_unaligned(bytes.as_ptr() as *const Self) })
    }
}

impl std::fmt::Debug for FFEffectDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FFEffectDescriptor")
            .field("effect_type", &self.effect_type())
            .field("id", &self.id)
            .field("direction", &self.direction)
            .field("trigger", &self.trigger)
            .field("replay", &self.replay)
            .field("rumble", &self.rumble)
            .finish()
    }
}
