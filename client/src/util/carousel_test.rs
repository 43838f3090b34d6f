use super::*;

const CARD: f64 = 300.0;

fn carousel(len: usize, visible_items: usize) -> Carousel {
    Carousel::new(CarouselConfig { len, visible_items, snap: SnapBehavior::default() })
}

/// Drag from `from_x` to `to_x` over `ms`, then release immediately.
fn fling(c: &mut Carousel, from_x: f64, to_x: f64, ms: f64) -> Option<usize> {
    c.pointer_down(from_x, 0.0, CARD);
    c.pointer_move(to_x, ms);
    c.pointer_up(ms, CARD)
}

// =============================================================
// Viewport breakpoints
// =============================================================

#[test]
fn visible_items_follow_breakpoints() {
    assert_eq!(visible_items_for_width(375.0), 1);
    assert_eq!(visible_items_for_width(767.9), 1);
    assert_eq!(visible_items_for_width(768.0), 2);
    assert_eq!(visible_items_for_width(1023.0), 2);
    assert_eq!(visible_items_for_width(1024.0), 3);
    assert_eq!(visible_items_for_width(1920.0), 3);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn clamped_index_always_within_bounds() {
    for visible in 1..=3 {
        for n in 0_usize..12 {
            let upper = n.saturating_sub(visible);
            for raw in -20_i64..20 {
                let idx = clamp_index(raw, n, visible);
                assert!(idx <= upper, "n={n} visible={visible} raw={raw} idx={idx}");
            }
        }
    }
}

#[test]
fn navigation_never_leaves_bounds() {
    for visible in 1..=3 {
        for n in 0..10 {
            let mut c = carousel(n, visible);
            for _ in 0..15 {
                c.next();
                c.finish_snap();
                assert!(c.index() <= n.saturating_sub(visible));
            }
            for _ in 0..15 {
                c.prev();
                c.finish_snap();
            }
            assert_eq!(c.index(), 0);
        }
    }
}

#[test]
fn drag_release_never_leaves_bounds() {
    for visible in 1..=3 {
        for n in 0..8 {
            for dx in [-5000.0, -700.0, -20.0, 0.0, 40.0, 900.0, 5000.0] {
                let mut c = carousel(n, visible);
                c.go_to(n / 2);
                c.finish_snap();
                fling(&mut c, 500.0, 500.0 + dx, 16.0);
                assert!(c.index() <= n.saturating_sub(visible), "n={n} visible={visible} dx={dx}");
            }
        }
    }
}

#[test]
fn controls_hidden_when_everything_fits() {
    assert!(!carousel(3, 3).controls_visible());
    assert!(!carousel(2, 3).controls_visible());
    assert!(!carousel(0, 1).controls_visible());
    assert!(carousel(4, 3).controls_visible());
}

#[test]
fn prev_next_availability() {
    let mut c = carousel(5, 3);
    assert!(!c.can_go_prev());
    assert!(c.can_go_next());
    c.go_to(2);
    assert!(c.can_go_prev());
    assert!(!c.can_go_next());
}

// =============================================================
// Explicit navigation
// =============================================================

#[test]
fn next_goes_straight_to_snapping() {
    let mut c = carousel(5, 1);
    assert_eq!(c.next(), 1);
    assert_eq!(c.phase(), CarouselPhase::Snapping { target: 1 });
    c.finish_snap();
    assert_eq!(c.phase(), CarouselPhase::Idle);
    assert!((c.offset(CARD) - 300.0).abs() < f64::EPSILON);
}

#[test]
fn navigation_ignored_while_dragging() {
    let mut c = carousel(5, 1);
    c.pointer_down(100.0, 0.0, CARD);
    assert_eq!(c.next(), 0);
    assert!(c.is_dragging());
}

// =============================================================
// Drag and snap
// =============================================================

#[test]
fn drag_translates_offset_without_clamping() {
    let mut c = carousel(5, 1);
    c.pointer_down(400.0, 0.0, CARD);
    // Dragging right at index 0 overshoots the start.
    let offset = c.pointer_move(520.0, 16.0).unwrap();
    assert!((offset + 120.0).abs() < f64::EPSILON);
    assert!((c.offset(CARD) + 120.0).abs() < f64::EPSILON);
}

#[test]
fn pointer_move_outside_drag_is_ignored() {
    let mut c = carousel(5, 1);
    assert_eq!(c.pointer_move(10.0, 1.0), None);
    assert_eq!(c.pointer_up(1.0, CARD), None);
}

#[test]
fn slow_release_rounds_to_nearest() {
    let mut c = carousel(6, 1);
    // 130px of travel over 1000ms: 0.13 px/ms, under the threshold.
    assert_eq!(fling(&mut c, 500.0, 370.0, 1000.0), Some(0));

    let mut c = carousel(6, 1);
    // 170px slowly: round(170/300) = 1.
    assert_eq!(fling(&mut c, 500.0, 330.0, 1000.0), Some(1));
}

#[test]
fn fast_forward_fling_takes_ceiling() {
    let mut c = carousel(6, 1);
    // 60px in 20ms = 3 px/ms forward; raw 60/300 = 0.2 -> ceil = 1.
    assert_eq!(fling(&mut c, 500.0, 440.0, 20.0), Some(1));
    assert_eq!(c.phase(), CarouselPhase::Snapping { target: 1 });
}

#[test]
fn fast_backward_fling_takes_floor() {
    let mut c = carousel(6, 1);
    c.go_to(3);
    c.finish_snap();
    // Back 80px fast from offset 900: raw 820/300 = 2.73 -> floor = 2.
    assert_eq!(fling(&mut c, 200.0, 280.0, 10.0), Some(2));
}

#[test]
fn fling_result_is_clamped() {
    let mut c = carousel(4, 3);
    assert_eq!(fling(&mut c, 900.0, 0.0, 20.0), Some(1));
    let mut c = carousel(4, 3);
    assert_eq!(fling(&mut c, 0.0, 900.0, 20.0), Some(0));
}

#[test]
fn pause_before_release_discards_velocity() {
    let mut c = carousel(6, 1);
    c.pointer_down(500.0, 0.0, CARD);
    c.pointer_move(440.0, 20.0);
    assert_eq!(c.pointer_up(500.0, CARD), Some(0));
}

#[test]
fn twitch_at_end_of_slow_drag_is_not_a_fling() {
    let mut c = carousel(6, 1);
    c.pointer_down(500.0, 0.0, CARD);
    let mut x = 500.0;
    let mut t = 0.0;
    for _ in 0..13 {
        x -= 2.0;
        t += 16.0;
        c.pointer_move(x, t);
    }
    // 1px in 1ms is 1 px/ms on its own; smoothed it stays slow.
    c.pointer_move(x - 1.0, t + 1.0);
    match c.phase() {
        CarouselPhase::Dragging(track) => assert!(track.velocity < DEFAULT_FLING_THRESHOLD, "{}", track.velocity),
        other => panic!("expected dragging, got {other:?}"),
    }
    // 27px: round -> 0, a fling would have taken ceil -> 1.
    assert_eq!(c.pointer_up(t + 1.0, CARD), Some(0));
}

#[test]
fn sustained_fast_drag_still_flings() {
    let mut c = carousel(6, 1);
    c.pointer_down(500.0, 0.0, CARD);
    for step in 1..=5 {
        c.pointer_move(500.0 - 30.0 * f64::from(step), 10.0 * f64::from(step));
    }
    // 150px at 3 px/ms: raw 0.5 would round up anyway, so check the velocity.
    match c.phase() {
        CarouselPhase::Dragging(track) => assert!(track.velocity > DEFAULT_FLING_THRESHOLD),
        other => panic!("expected dragging, got {other:?}"),
    }
    assert_eq!(c.pointer_up(50.0, CARD), Some(1));
}

#[test]
fn click_slop_separates_taps_from_drags() {
    let mut c = carousel(6, 1);
    assert!(!c.is_past_click_slop());
    c.pointer_down(200.0, 0.0, CARD);
    c.pointer_move(204.0, 10.0);
    assert!(!c.is_past_click_slop());
    c.pointer_move(193.0, 20.0);
    assert!(c.is_past_click_slop());
    c.pointer_up(20.0, CARD);
    assert!(!c.is_past_click_slop());
}

#[test]
fn nearest_snap_ignores_velocity() {
    let mut c = Carousel::new(CarouselConfig { len: 6, visible_items: 1, snap: SnapBehavior::Nearest });
    assert_eq!(fling(&mut c, 500.0, 440.0, 20.0), Some(0));
}

#[test]
fn snap_index_direct_cases() {
    let fast = SnapBehavior::Fling { threshold: 0.5 };
    assert_eq!(snap_index(450.0, 300.0, 0.1, fast), 2);
    assert_eq!(snap_index(420.0, 300.0, 0.1, fast), 1);
    assert_eq!(snap_index(310.0, 300.0, 2.0, fast), 2);
    assert_eq!(snap_index(590.0, 300.0, -2.0, fast), 1);
    assert_eq!(snap_index(-50.0, 300.0, -2.0, fast), -1);
    assert_eq!(snap_index(100.0, 0.0, 0.0, fast), 0);
}

#[test]
fn drag_can_start_during_snap() {
    let mut c = carousel(6, 1);
    c.next();
    c.pointer_down(0.0, 0.0, CARD);
    assert!(c.is_dragging());
    assert!((c.offset(CARD) - 300.0).abs() < f64::EPSILON);
}

// =============================================================
// Resize and data changes
// =============================================================

#[test]
fn resize_reclamps_without_resetting() {
    let mut c = carousel(5, 1);
    c.go_to(4);
    c.finish_snap();
    c.set_visible_items(3);
    assert_eq!(c.index(), 2);

    let mut c = carousel(5, 3);
    c.go_to(1);
    c.finish_snap();
    c.set_visible_items(1);
    assert_eq!(c.index(), 1);
}

#[test]
fn shrinking_list_reclamps() {
    let mut c = carousel(10, 2);
    c.go_to(8);
    c.set_len(4);
    assert_eq!(c.index(), 2);
    assert_eq!(c.phase(), CarouselPhase::Snapping { target: 2 });
}

#[test]
fn zero_visible_items_treated_as_one() {
    let c = carousel(3, 0);
    assert_eq!(c.visible_items(), 1);
    assert_eq!(c.max_index(), 2);
}
