#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::io;

use evdev_rumble::{
    AttributeSet, AttributeSetRef, EffectId, FFDevice, FFEffectDescriptor, FFEffectType, InputEvent,
};

/// One request as the device saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(FFEffectDescriptor),
    Remove(EffectId),
    Write(InputEvent),
}

/// An in-memory stand-in for an event device that records every request.
pub struct RecordingDevice {
    ff: Option<AttributeSet<FFEffectType>>,
    next_id: Cell<i16>,
    fail_with: Cell<Option<i32>>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingDevice {
    /// A rumble-capable device that hands out ids starting at `first_id`.
    pub fn rumble(first_id: i16) -> Self {
        Self {
            ff: Some([FFEffectType::FF_RUMBLE, FFEffectType::FF_GAIN].into_iter().collect()),
            next_id: Cell::new(first_id),
            fail_with: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A device without `EV_FF` support.
    pub fn without_ff() -> Self {
        Self {
            ff: None,
            ..Self::rumble(0)
        }
    }

    /// Makes every following request fail with the given errno.
    pub fn fail_with(&self, errno: libc::c_int) {
        self.fail_with.set(Some(errno));
    }

    pub fn recover(&self) {
        self.fail_with.set(None);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<InputEvent> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Write(ev) => Some(*ev),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> io::Result<()> {
        match self.fail_with.get() {
            Some(errno) => Err(io::Error::from_raw_os_error(errno)),
            None => Ok(()),
        }
    }
}

impl FFDevice for RecordingDevice {
    fn supported_ff(&self) -> Option<&AttributeSetRef<FFEffectType>> {
        self.ff.as_deref()
    }

    fn upload_effect(&self, descriptor: &FFEffectDescriptor) -> io::Result<EffectId> {
        self.calls.borrow_mut().push(Call::Upload(*descriptor));
        self.check()?;

        let raw = if descriptor.id() == -1 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        } else {
            descriptor.id()
        };
        Ok(EffectId::new(raw).expect("test ids are non-negative"))
    }

    fn remove_effect(&self, id: EffectId) -> io::Result<()> {
        self.calls.borrow_mut().push(Call::Remove(id));
        self.check()
    }

    fn write_event(&self, event: &InputEvent) -> io::Result<()> {
        self.calls.borrow_mut().push(Call::Write(*event));
        self.check()
    }
}
