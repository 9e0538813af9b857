#![cfg(feature = "device-test")]

//! Runs against a real rumble-capable device named by `EVDEV_RUMBLE_DEVICE`, e.g.
//! `EVDEV_RUMBLE_DEVICE=/dev/input/event5 cargo test --features device-test`.

use std::time::Duration;

use evdev_rumble::{Device, FFDevice};

fn open_test_device() -> std::io::Result<Option<Device>> {
    match std::env::var_os("EVDEV_RUMBLE_DEVICE") {
        Some(path) => Device::open(path).map(Some),
        None => Ok(None),
    }
}

#[test]
pub fn test_rumble_on_device() -> Result<(), Box<dyn std::error::Error>> {
    let Some(device) = open_test_device()? else {
        return Ok(());
    };
    assert!(device.supports_ff_rumble(), "{:?} cannot rumble", device.name());
    assert!(device.max_ff_effects() > 0);

    let effect = device.rumble(0.5, 0.5, Duration::from_millis(100))?;
    effect.play()?;
    std::thread::sleep(Duration::from_millis(100));
    effect.stop()?;
    effect.stop()?;
    effect.remove()?;

    Ok(())
}

#[test]
pub fn test_removed_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let Some(device) = open_test_device()? else {
        return Ok(());
    };

    let effect = device.rumble(0.2, 0.2, Duration::from_millis(10))?;
    let id = effect.id();
    effect.remove()?;

    assert!(device.remove_effect(id).is_err());

    Ok(())
}
