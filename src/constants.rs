use crate::compat::{EV_CNT, FF_CNT};

/// Event types supported by the device.
///
/// Only [`EventType::FORCEFEEDBACK`] is written by this crate, but the whole table is kept so
/// that a device's capability set prints legibly.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventType(pub u16);

evdev_enum!(
    EventType,
    Array,
    /// A bookkeeping event. Usually not important to applications.
    SYNCHRONIZATION = 0x00,
    /// A key changed state.
    KEY = 0x01,
    /// Movement on a relative axis.
    RELATIVE = 0x02,
    /// Movement on an absolute axis.
    ABSOLUTE = 0x03,
    /// Miscellaneous events that don't fall into other categories.
    MISC = 0x04,
    /// Change in a switch value.
    SWITCH = 0x05,
    /// An LED was toggled.
    LED = 0x11,
    /// A sound was made.
    SOUND = 0x12,
    /// Key repeat configuration.
    REPEAT = 0x14,
    /// The device can create haptic effects. Writing an event of this type starts or stops an
    /// uploaded effect, or adjusts gain and autocenter.
    FORCEFEEDBACK = 0x15,
    POWER = 0x16,
    /// A force feedback effect's state changed.
    FORCEFEEDBACKSTATUS = 0x17,
);

impl EventType {
    pub(crate) const COUNT: usize = EV_CNT;
}

/// Force feedback effect types and device controls, as found in the `EV_FF` capability bitmap.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FFEffectType(pub u16);

evdev_enum!(
    FFEffectType,
    Array,
    /// Two-motor vibration. The only effect type this crate builds.
    FF_RUMBLE = 0x50,
    FF_PERIODIC = 0x51,
    FF_CONSTANT = 0x52,
    FF_SPRING = 0x53,
    FF_FRICTION = 0x54,
    FF_DAMPER = 0x55,
    FF_INERTIA = 0x56,
    FF_RAMP = 0x57,
    FF_SQUARE = 0x58,
    FF_TRIANGLE = 0x59,
    FF_SINE = 0x5a,
    FF_SAW_UP = 0x5b,
    FF_SAW_DOWN = 0x5c,
    FF_CUSTOM = 0x5d,
    /// The device accepts a global gain, see [`Device::set_ff_gain`](crate::Device::set_ff_gain).
    FF_GAIN = 0x60,
    /// The device can autocenter, see
    /// [`Device::set_ff_autocenter`](crate::Device::set_ff_autocenter).
    FF_AUTOCENTER = 0x61,
);

impl FFEffectType {
    pub(crate) const COUNT: usize = FF_CNT;
}
