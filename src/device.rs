use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;
use std::time::Duration;

use crate::attribute_set::{AttributeSet, AttributeSetRef};
use crate::builder::build_rumble;
use crate::constants::{EventType, FFEffectType};
use crate::effect::{upload, EffectHandle, FFDevice};
use crate::error::Error;
use crate::event::InputEvent;
use crate::ff::{EffectId, FFEffectDescriptor};
use crate::sys;

fn read_name(fd: RawFd) -> Option<String> {
    let mut buf = vec![0; 256];
    match unsafe { sys::eviocgname(fd, buf.as_mut_slice()) } {
        // the returned length counts the trailing \0
        Ok(len) if len > 1 => {
            buf.truncate((len as usize).min(buf.len()));
            let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
            buf.truncate(end);
            Some(String::from_utf8_lossy(&buf).into_owned())
        }
        _ => None,
    }
}

/// An open event device, used to upload and play force feedback effects.
///
/// The capabilities are read once when the device is opened.
#[derive(Debug)]
pub struct Device {
    file: File,
    name: Option<String>,
    ty: AttributeSet<EventType>,
    supported_ff: Option<AttributeSet<FFEffectType>>,
    max_ff_effects: usize,
}

impl Device {
    /// Opens a device, given its system path.
    ///
    /// Paths are typically something like `/dev/input/event0`. Playing effects needs write
    /// access; if the device can only be opened read-only, capabilities can still be queried.
    #[inline(always)]
    pub fn open(path: impl AsRef<Path>) -> io::Result<Device> {
        Self::_open(path.as_ref())
    }

    fn _open(path: &Path) -> io::Result<Device> {
        let mut options = OpenOptions::new();

        // Try to load read/write, then fall back to read-only.
        let file = options
            .read(true)
            .write(true)
            .open(path)
            .or_else(|_| options.write(false).open(path))?;

        let ty = {
            let mut ty = AttributeSet::<EventType>::new();
            unsafe { sys::eviocgbit_type(file.as_raw_fd(), ty.as_mut_raw_slice())? };
            ty
        };

        let name = read_name(file.as_raw_fd());

        let (supported_ff, max_ff_effects) = if ty.contains(EventType::FORCEFEEDBACK) {
            let mut ff = AttributeSet::<FFEffectType>::new();
            unsafe { sys::eviocgbit_ff(file.as_raw_fd(), ff.as_mut_raw_slice())? };

            let mut max: libc::c_int = 0;
            unsafe { sys::eviocgeffects(file.as_raw_fd(), &mut max)? };

            (Some(ff), max.max(0) as usize)
        } else {
            (None, 0)
        };

        log::debug!(
            "opened {} ({:?}): ff = {:?}, {} effect slots",
            path.display(),
            name,
            supported_ff,
            max_ff_effects
        );

        Ok(Device {
            file,
            name,
            ty,
            supported_ff,
            max_ff_effects,
        })
    }

    /// Returns the device's name as read from the kernel.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the set of event types the device supports.
    pub fn supported_events(&self) -> &AttributeSetRef<EventType> {
        &self.ty
    }

    /// Returns the set of force feedback effects supported by a device.
    pub fn supported_ff(&self) -> Option<&AttributeSetRef<FFEffectType>> {
        self.supported_ff.as_deref()
    }

    /// How many effects the device can hold at once.
    pub fn max_ff_effects(&self) -> usize {
        self.max_ff_effects
    }

    /// Builds and uploads a rumble effect in one go. See [`build_rumble`] for the parameters.
    pub fn rumble(
        &self,
        strong_magnitude: f32,
        weak_magnitude: f32,
        duration: Duration,
    ) -> Result<EffectHandle<'_, Self>, Error> {
        let descriptor = build_rumble(strong_magnitude, weak_magnitude, duration)?;
        Ok(upload(self, &descriptor)?)
    }

    /// Sets the force feedback gain, i.e. how strong the force feedback effects should be for the
    /// device. A gain of 0 means no gain, whereas `u16::MAX` is the maximum gain.
    pub fn set_ff_gain(&self, value: u16) -> io::Result<()> {
        self.write_event(&InputEvent::ff_setting(FFEffectType::FF_GAIN, value))
    }

    /// Enables or disables autocenter for the force feedback device.
    pub fn set_ff_autocenter(&self, value: u16) -> io::Result<()> {
        self.write_event(&InputEvent::ff_setting(FFEffectType::FF_AUTOCENTER, value))
    }
}

impl FFDevice for Device {
    fn supported_ff(&self) -> Option<&AttributeSetRef<FFEffectType>> {
        Device::supported_ff(self)
    }

    fn upload_effect(&self, descriptor: &FFEffectDescriptor) -> io::Result<EffectId> {
        let mut effect = *descriptor;
        let ptr: *mut FFEffectDescriptor = &mut effect;

        unsafe { sys::eviocsff(self.file.as_raw_fd(), ptr)? };

        EffectId::new(effect.id()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("kernel returned effect id {}", effect.id()),
            )
        })
    }

    fn remove_effect(&self, id: EffectId) -> io::Result<()> {
        unsafe { sys::eviocrmff(self.file.as_raw_fd(), id.raw() as _)? };
        Ok(())
    }

    fn write_event(&self, event: &InputEvent) -> io::Result<()> {
        (&self.file).write_all(event.as_bytes())
    }
}

impl AsRawFd for Device {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
