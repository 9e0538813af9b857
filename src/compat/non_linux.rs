//! FreeBSD and other non-Linux targets don't have these available in libc, because they're in
//! the "linux-like" impl directory. They are copied here so the force feedback layout checks
//! still have something to compare against.

#![allow(non_camel_case_types)]

pub const FF_MAX: u16 = 0x7f;
pub const FF_CNT: usize = FF_MAX as usize + 1;
pub const EV_MAX: u16 = 0x1f;
pub const EV_CNT: usize = EV_MAX as usize + 1;

#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct input_event {
    pub time: libc::timeval,
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ff_replay {
    pub length: u16,
    pub delay: u16,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ff_trigger {
    pub button: u16,
    pub interval: u16,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ff_effect {
    pub type_: u16,
    pub id: i16,
    pub direction: u16,
    pub trigger: ff_trigger,
    pub replay: ff_replay,
    // Stands in for the kernel union. Its widest member holds a pointer.
    #[cfg(target_pointer_width = "64")]
    pub u: [u64; 4],
    #[cfg(target_pointer_width = "32")]
    pub u: [u32; 7],
}
