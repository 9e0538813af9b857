//! Uploading, triggering and removing effects.
//!
//! An effect goes through three states: built but not uploaded (an [`FFEffectDescriptor`]),
//! uploaded (an [`EffectHandle`]), and removed (the handle is consumed by
//! [`EffectHandle::remove`]). Every operation is a single blocking request on the device. Errors
//! are returned as they come and nothing is retried.

use std::fmt;
use std::io;
use std::num::NonZeroU16;

use crate::attribute_set::AttributeSetRef;
use crate::constants::FFEffectType;
use crate::event::InputEvent;
use crate::ff::{EffectId, FFEffectDescriptor};

/// What the effect lifecycle needs from an open event device.
///
/// [`Device`](crate::Device) implements this over a real `/dev/input/event*` node. Callers that
/// share a device across threads must serialize access themselves.
pub trait FFDevice {
    /// The force feedback effects the device supports, or `None` if it has no `EV_FF` support.
    fn supported_ff(&self) -> Option<&AttributeSetRef<FFEffectType>>;

    /// Issues the upload request (`EVIOCSFF`) and returns the id the kernel stored in the
    /// descriptor. A descriptor with id `-1` allocates a new effect; any other id modifies that
    /// effect.
    fn upload_effect(&self, descriptor: &FFEffectDescriptor) -> io::Result<EffectId>;

    /// Issues the removal request (`EVIOCRMFF`).
    fn remove_effect(&self, id: EffectId) -> io::Result<()>;

    /// Writes one raw event record to the device.
    fn write_event(&self, event: &InputEvent) -> io::Result<()>;

    /// Returns `true` if the device can play rumble effects.
    fn supports_ff_rumble(&self) -> bool {
        self.supported_ff()
            .map_or(false, |ff| ff.contains(FFEffectType::FF_RUMBLE))
    }
}

/// Uploads an effect and returns the handle that plays, stops and removes it.
///
/// The descriptor's id is ignored: a fresh id is always requested. Whether the device supports
/// the effect type is the caller's business, see [`FFDevice::supports_ff_rumble`]; the kernel
/// rejects unsupported effects with an error.
pub fn upload<'d, D: FFDevice + ?Sized>(
    device: &'d D,
    descriptor: &FFEffectDescriptor,
) -> io::Result<EffectHandle<'d, D>> {
    let mut request = *descriptor;
    request.set_raw_id(-1);

    let id = device.upload_effect(&request).map_err(|e| {
        log::debug!("force feedback upload failed: {}", e);
        e
    })?;
    log::debug!("uploaded force feedback effect {}", id.raw());

    Ok(EffectHandle { device, id })
}

/// A force feedback effect that has been successfully uploaded to a device.
///
/// The handle borrows the device, so the device outlives it. Dropping a handle without calling
/// [`remove`](EffectHandle::remove) leaves the effect on the device until the device is closed.
#[must_use = "an uploaded effect does nothing until it is played"]
pub struct EffectHandle<'d, D: ?Sized> {
    device: &'d D,
    id: EffectId,
}

impl<D: ?Sized> fmt::Debug for EffectHandle<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EffectHandle").field("id", &self.id).finish()
    }
}

impl<'d, D: FFDevice + ?Sized> EffectHandle<'d, D> {
    /// Returns the effect ID.
    pub fn id(&self) -> EffectId {
        self.id
    }

    /// Returns the device the effect was uploaded to.
    pub fn device(&self) -> &'d D {
        self.device
    }

    /// Starts the effect. Playing an effect that is already playing restarts it.
    pub fn play(&self) -> io::Result<()> {
        self.control(1)
    }

    /// Starts the effect and has the device repeat it `count` times.
    pub fn play_repeated(&self, count: NonZeroU16) -> io::Result<()> {
        self.control(count.get().into())
    }

    /// Stops the effect. Stopping an effect that isn't playing is not an error.
    pub fn stop(&self) -> io::Result<()> {
        self.control(0)
    }

    fn control(&self, value: i32) -> io::Result<()> {
        log::trace!("force feedback effect {} <- {}", self.id.raw(), value);
        self.device.write_event(&InputEvent::ff_control(self.id, value))
    }

    /// Replaces the effect's parameters in place, keeping its id.
    pub fn update(&mut self, descriptor: &FFEffectDescriptor) -> io::Result<()> {
        let request = descriptor.with_id(self.id);
        let id = self.device.upload_effect(&request)?;
        if id != self.id {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "kernel moved effect {} to id {} on update",
                    self.id.raw(),
                    id.raw()
                ),
            ));
        }
        log::debug!("updated force feedback effect {}", self.id.raw());
        Ok(())
    }

    /// Removes the effect from the device.
    ///
    /// The handle is consumed whether or not the request succeeds. On failure the error is
    /// returned and the effect may still occupy a slot until the device is closed.
    pub fn remove(self) -> io::Result<()> {
        match self.device.remove_effect(self.id) {
            Ok(()) => {
                log::debug!("removed force feedback effect {}", self.id.raw());
                Ok(())
            }
            Err(e) => {
                log::debug!("removing force feedback effect {} failed: {}", self.id.raw(), e);
                Err(e)
            }
        }
    }
}
