//! Kernel input structs and limits.
//!
//! Linux-like targets get these from libc. Everything else uses the copies in `non_linux`.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(
        target_os = "linux",
        target_os = "l4re",
        target_os = "android",
        target_os = "emscripten"
    ))] {
        pub(crate) use libc::{ff_effect, input_event, EV_CNT, FF_CNT};
    } else {
        mod non_linux;
        pub(crate) use non_linux::{ff_effect, input_event, EV_CNT, FF_CNT};
    }
}
