use super::*;

#[test]
fn ease_out_is_clamped() {
    assert!((ease_out_cubic(-1.0) - 0.0).abs() < f64::EPSILON);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    assert!((ease_out_cubic(2.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn counter_starts_at_zero_and_ends_at_target() {
    let c = HERO_COUNTERS[1];
    assert_eq!(c.value_at(0.0), 0);
    assert_eq!(c.value_at(2500.0), 500);
    assert_eq!(c.value_at(9000.0), 500);
    assert!(c.is_done(2500.0));
    assert!(!c.is_done(2499.0));
}

#[test]
fn halfway_value_is_floored() {
    // 0.875 * 20 = 17.5
    assert_eq!(HERO_COUNTERS[0].value_at(1000.0), 17);
}

#[test]
fn counter_is_monotonic() {
    let c = HERO_COUNTERS[2];
    let mut last = 0;
    for step in 0..=22 {
        let v = c.value_at(f64::from(step) * 100.0);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(last, 300);
}

#[test]
fn zero_duration_jumps_to_end() {
    let c = CounterSpec { end: 7, duration_ms: 0, suffix: "", label: "" };
    assert_eq!(c.value_at(0.0), 7);
}
