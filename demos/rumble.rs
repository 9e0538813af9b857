//! Rumbles a device once: `cargo run --example rumble -- /dev/input/eventN [strong] [weak] [ms]`

use std::time::Duration;

use evdev_rumble::{Device, FFDevice};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: rumble <device> [strong] [weak] [ms]")?;
    let strong: f32 = args.next().map_or(Ok(1.0), |s| s.parse())?;
    let weak: f32 = args.next().map_or(Ok(1.0), |s| s.parse())?;
    let ms: u64 = args.next().map_or(Ok(1000), |s| s.parse())?;

    let device = Device::open(&path)?;
    println!("{}: {:?}", path, device.name());
    println!("supported effects: {:?}", device.supported_ff());

    if !device.supports_ff_rumble() {
        return Err("device cannot rumble".into());
    }

    println!("It's time to rumble!");
    let effect = device.rumble(strong, weak, Duration::from_millis(ms))?;
    effect.play()?;
    std::thread::sleep(Duration::from_millis(ms));
    effect.stop()?;
    effect.remove()?;

    Ok(())
}
