use crate::{AttributeSet, EventType, FFEffectType};

#[test]
pub fn test_iteration_ff_effects() -> std::io::Result<()> {
    let mut ff: AttributeSet<FFEffectType> = AttributeSet::new();

    ff.insert(FFEffectType::FF_GAIN);
    ff.insert(FFEffectType::FF_RUMBLE);
    ff.insert(FFEffectType::FF_PERIODIC);

    assert_eq!(
        vec![
            FFEffectType::FF_RUMBLE,
            FFEffectType::FF_PERIODIC,
            FFEffectType::FF_GAIN
        ],
        ff.iter().collect::<Vec<_>>()
    );

    ff.remove(FFEffectType::FF_PERIODIC);
    assert_eq!(2, ff.iter().count());
    assert!(!ff.contains(FFEffectType::FF_PERIODIC));

    Ok(())
}

#[test]
pub fn test_raw_bitmap_matches_eviocgbit_layout() -> std::io::Result<()> {
    let mut ff: AttributeSet<FFEffectType> = AttributeSet::new();
    // FF_RUMBLE is bit 0x50: byte 10, bit 0
    ff.as_mut_raw_slice()[10] = 0b0000_0001;

    assert!(ff.contains(FFEffectType::FF_RUMBLE));
    assert_eq!(1, ff.iter().count());

    let mut ty: AttributeSet<EventType> = AttributeSet::new();
    // EV_FF is bit 0x15: byte 2, bit 5
    ty.as_mut_raw_slice()[2] = 0b0010_0000;
    assert!(ty.contains(EventType::FORCEFEEDBACK));

    Ok(())
}

#[test]
pub fn test_codes_past_the_bitmap_are_absent() {
    let ff: AttributeSet<FFEffectType> = [FFEffectType::FF_RUMBLE].into_iter().collect();
    assert!(!ff.contains(FFEffectType(0xffff)));
}

#[test]
pub fn test_names_parse_and_print() {
    assert_eq!(
        "FF_RUMBLE".parse::<FFEffectType>(),
        Ok(FFEffectType::FF_RUMBLE)
    );
    assert!("FF_NOPE".parse::<FFEffectType>().is_err());
    assert_eq!(format!("{:?}", EventType::FORCEFEEDBACK), "FORCEFEEDBACK");
    assert_eq!(format!("{:?}", FFEffectType(0x42)), "unknown code: 66");
}
