use crate::ff::FFEffectDescriptor;
use nix::{ioctl_read, ioctl_read_buf, ioctl_write_int, ioctl_write_ptr};

ioctl_read!(eviocgeffects, b'E', 0x84, ::libc::c_int);
ioctl_read_buf!(eviocgname, b'E', 0x06, u8);

// The request size is sizeof(struct ff_effect), which the descriptor matches. The kernel writes
// the allocated id back through the pointer.
ioctl_write_ptr!(eviocsff, b'E', 0x80, FFEffectDescriptor);
// Takes the effect id by value, not by pointer.
ioctl_write_int!(eviocrmff, b'E', 0x81);

macro_rules! eviocgbit_ioctl {
    ($mac:ident!($name:ident, $ev:ident, $ty:ty)) => {
        eviocgbit_ioctl!($mac!($name, $crate::EventType::$ev.0, $ty));
    };
    ($mac:ident!($name:ident, $ev:expr, $ty:ty)) => {
        $mac!($name, b'E', 0x20 + $ev, $ty);
    };
}

eviocgbit_ioctl!(ioctl_read_buf!(eviocgbit_type, 0, u8));
eviocgbit_ioctl!(ioctl_read_buf!(eviocgbit_ff, FORCEFEEDBACK, u8));
