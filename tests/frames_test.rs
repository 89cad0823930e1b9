// Frame table and encoder property tests against the public API

use ble_dmx_frames::encoding::{adjust_day_number, pack_day_with_position, pack_weekdays, scale_percentage};
use ble_dmx_frames::*;

const CLOCK: FixedClock = FixedClock::new(4, 21, 5);

fn sample_color() -> Color {
    Color::new(0xC8, 0x10, 0x7F)
}

#[test]
fn test_ble00_frames() {
    assert_eq!(
        ble00::power(true).as_bytes(),
        &[0x7E, 0xFF, 0x04, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        ble00::power(false).as_bytes(),
        &[0x7E, 0xFF, 0x04, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        ble00::color(sample_color()).as_bytes(),
        &[0x7E, 0xFF, 0x05, 0x03, 0xC8, 0x10, 0x7F, 0xFF, 0xEF]
    );
    assert_eq!(
        ble00::brightness(60).as_bytes(),
        &[0x7E, 0xFF, 0x01, 19, 60, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        ble00::color_temperature(10).as_bytes(),
        &[0x7E, 0xFF, 0x09, 3, 10, 0xFF, 0xFF, 0xFF, 0xEF]
    );
}

#[test]
fn test_dmx_frames() {
    assert_eq!(
        dmx::power(true).as_bytes(),
        &[0x7B, 0xFF, 0x04, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::power(false).as_bytes(),
        &[0x7B, 0xFF, 0x04, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::color(sample_color()).as_bytes(),
        &[0x7B, 0x00, 0x07, 0xC8, 0x10, 0x7F, 0x00, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::brightness(60).as_bytes(),
        &[0x7B, 0xFF, 0x01, 19, 60, 0x00, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::color_temperature(60).as_bytes(),
        &[0x7B, 0xFF, 0x09, 19, 60, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::pattern(42).as_bytes(),
        &[0x7B, 0xFF, 0x03, 42, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::mic_eq(200).as_bytes(),
        &[0x7B, 0xFF, 0x0B, 200, 0x00, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::custom_color(sample_color(), 3, 5).as_bytes(),
        &[0x7B, 0x03, 0x0E, 0xFD, 0xC8, 0x10, 0x7F, 0x05, 0xBF]
    );
    assert_eq!(
        dmx::custom_mode(CustomPatternMode::Breathe).as_bytes(),
        &[0x7B, 0xFF, 0x13, 0x05, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::custom_direction(Direction::Forward).as_bytes(),
        &[0x7B, 0xFF, 0x0D, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        dmx::custom_direction(Direction::Reverse).as_bytes(),
        &[0x7B, 0xFF, 0x0D, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
}

#[test]
fn test_dmx_timing_frames() {
    let entry = Timing::new(6, 45, 17, [false, true, false, true, false, true, false]);
    assert_eq!(
        dmx::timing(&entry, 2, &CLOCK).as_bytes(),
        &[0x8B, 0x42, 17, 0x2A, 6, 45, 21, 5, 0xBF]
    );
    assert_eq!(
        dmx::timing_end(3, &CLOCK).as_bytes(),
        &[0x7B, 0xFF, 0x10, 4, 3, 0xFF, 21, 5, 0xBF]
    );
}

#[test]
fn test_clear_timing_entry() {
    assert_eq!(
        dmx::timing(&Timing::clear(), 0, &CLOCK).as_bytes(),
        &[0x8B, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 21, 5, 0xBF]
    );
}

#[test]
fn test_led_frames() {
    assert_eq!(
        led::power(true).as_bytes(),
        &[0x7B, 0x01, 0x04, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        led::power(false).as_bytes(),
        &[0x7B, 0x01, 0x04, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        led::color(sample_color()).as_bytes(),
        &[0x7B, 0x01, 0x07, 0xC8, 0x10, 0x7F, 0x00, 0xFF, 0xBF]
    );
    assert_eq!(
        led::brightness(60).as_bytes(),
        &[0x7B, 0xFF, 0x01, 19, 60, 0x02, 0xFF, 0xFF, 0xBF]
    );
    assert_eq!(
        led::color_temperature(60).as_bytes(),
        &[0x7B, 0xFF, 0x09, 19, 60, 0x02, 0xFF, 0xFF, 0xBF]
    );
}

#[test]
fn test_settings_frames() {
    assert_eq!(
        settings::welcome(true).as_bytes(),
        &[0x7E, 0xFF, 0x12, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        settings::welcome(false).as_bytes(),
        &[0x7E, 0xFF, 0x12, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        settings::select_box(LightBox::Center).as_bytes(),
        &[0x7E, 0xFF, 0x12, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
    );
    assert_eq!(
        settings::strip_length(60).as_bytes(),
        &[0x7B, 0xFF, 0x05, 0x04, 0x00, 60, 0x03, 0xFF, 0xBF]
    );
}

#[test]
fn test_frame_lengths() {
    let entry = Timing::new(0, 0, 0, [false; 7]);
    let nine = [
        ble00::power(true),
        ble00::color(Color::WHITE),
        ble00::brightness(1),
        ble00::color_temperature(1),
        dmx::power(true),
        dmx::color(Color::WHITE),
        dmx::brightness(1),
        dmx::color_temperature(1),
        dmx::pattern(1),
        dmx::timing(&entry, 0, &CLOCK),
        dmx::timing_end(1, &CLOCK),
        dmx::custom_color(Color::WHITE, 1, 1),
        dmx::custom_mode(CustomPatternMode::Off),
        dmx::custom_direction(Direction::Forward),
        led::power(true),
        led::color(Color::WHITE),
        led::brightness(1),
        led::color_temperature(1),
        settings::welcome(true),
        settings::select_box(LightBox::RightRear),
        settings::strip_length(1),
    ];
    for frame in &nine {
        assert_eq!(frame.len(), 9, "{frame:?}");
    }
    assert_eq!(dmx::mic_eq(1).len(), 8);
}

#[test]
fn test_scale_percentage_property() {
    for p in -1000..=1000 {
        let clamped = p.clamp(0, 100);
        let (scaled, echoed) = scale_percentage(p);
        assert_eq!(i32::from(echoed), clamped);
        assert_eq!(i32::from(scaled), clamped * 32 / 100);
    }
    assert_eq!(scale_percentage(150), (32, 100));
    assert_eq!(scale_percentage(-5), (0, 0));
    assert_eq!(scale_percentage(50), (16, 50));
}

#[test]
fn test_weekday_packing_is_bijective() {
    let mut seen = [false; 128];
    for mask in 0u8..128 {
        let selection: [bool; 7] = std::array::from_fn(|i| mask & (1u8 << i) != 0);
        let packed = pack_weekdays(&selection);
        assert_eq!(packed, mask);
        assert!(!seen[packed as usize]);
        seen[packed as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
    assert_eq!(pack_weekdays(&[true, false, false, false, false, false, true]), 65);
}

#[test]
fn test_day_position_and_normalizer() {
    assert_eq!(pack_day_with_position(3, 5), 0x35);
    assert_eq!(adjust_day_number(1), 7);
    assert_eq!(adjust_day_number(2), 1);
    assert_eq!(adjust_day_number(7), 6);
}

#[test]
fn test_values_above_127_keep_their_bit_pattern() {
    let frame = dmx::pattern(200);
    assert_eq!(frame[3], 200);
    assert_eq!(frame.to_signed()[3], -56);
    assert_eq!(dmx::pattern(300)[3], 0xD2);
    assert_eq!(ble00::color(Color::new(255, 128, 0)).to_signed()[4..7], [-1, -128, 0]);
}

#[test]
fn test_encoders_are_idempotent() {
    let entry = Timing::new(12, 0, 9, [true; 7]);
    assert_eq!(ble00::brightness(33), ble00::brightness(33));
    assert_eq!(dmx::color(sample_color()), dmx::color(sample_color()));
    assert_eq!(led::color_temperature(77), led::color_temperature(77));
    assert_eq!(settings::strip_length(512), settings::strip_length(512));
    assert_eq!(
        dmx::timing(&entry, 1, &CLOCK),
        dmx::timing(&entry, 1, &CLOCK)
    );
    assert_eq!(dmx::timing_end(1, &CLOCK), dmx::timing_end(1, &CLOCK));
}

#[test]
fn test_encoder_matches_free_functions() {
    let encoder = Encoder::with_clock(Family::Dmx, CLOCK);
    let entry = Timing::new(6, 45, 17, [true; 7]);
    assert_eq!(
        encoder
            .encode(&Command::Timing {
                timing: entry,
                list_position: 2,
            })
            .unwrap(),
        dmx::timing(&entry, 2, &CLOCK)
    );
    assert_eq!(
        encoder.encode(&Command::MicEq(7)).unwrap(),
        dmx::mic_eq(7)
    );

    let frames = encoder
        .encode_all(&[
            Command::CustomColor {
                color: Color::RED,
                list_position: 1,
                list_size: 1,
            },
            Command::CustomMode(CustomPatternMode::Flow),
            Command::CustomDirection(Direction::Forward),
        ])
        .unwrap();
    assert_eq!(
        frames,
        dmx::custom_pattern(&[Color::RED], CustomPatternMode::Flow, Direction::Forward)
    );
}
