//! Carousel position model: button navigation, drag-to-scroll and snapping.
//!
//! DESIGN
//! ======
//! One parameterized model serves every horizontally scrolling card list.
//! It is a three-phase machine:
//!
//! ```text
//!   Idle --pointer_down--> Dragging --pointer_move--> Dragging
//!   Dragging --pointer_up--> Snapping --finish_snap--> Idle
//!   Idle --next/prev--> Snapping
//! ```
//!
//! Offsets are in pixels measured from the first card; a larger offset shows
//! later cards. The drag offset is left unclamped so the strip can overshoot
//! while the pointer is down; the index is clamped on release.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Below this viewport width one card is visible.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Below this viewport width two cards are visible; otherwise three.
pub const TABLET_BREAKPOINT_PX: f64 = 1024.0;
/// Release speed (px/ms) above which a drag counts as a fling.
pub const DEFAULT_FLING_THRESHOLD: f64 = 0.5;
/// A release this long after the last move carries no velocity.
pub const FLING_STALE_MS: f64 = 100.0;
/// Time constant (ms) of the release-velocity smoothing.
pub const VELOCITY_SMOOTHING_MS: f64 = 50.0;
/// Horizontal travel (px) after which a press counts as a drag, not a click.
pub const CLICK_SLOP_PX: f64 = 6.0;

/// Number of cards that fit a viewport of `width` pixels.
#[must_use]
pub fn visible_items_for_width(width: f64) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        1
    } else if width < TABLET_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

/// How a released drag picks its resting card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapBehavior {
    /// Always the nearest card boundary.
    Nearest,
    /// Nearest boundary, unless the release speed exceeds `threshold` px/ms,
    /// in which case the boundary in the direction of travel.
    Fling { threshold: f64 },
}

impl Default for SnapBehavior {
    fn default() -> Self {
        Self::Fling { threshold: DEFAULT_FLING_THRESHOLD }
    }
}

/// Unclamped card index for a raw offset. `velocity` is in px/ms, positive
/// when moving toward later cards.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn snap_index(raw_offset: f64, card_width: f64, velocity: f64, snap: SnapBehavior) -> i64 {
    if card_width <= 0.0 || !raw_offset.is_finite() {
        return 0;
    }
    let position = raw_offset / card_width;
    let snapped = match snap {
        SnapBehavior::Nearest => position.round(),
        SnapBehavior::Fling { threshold } => {
            if velocity > threshold {
                position.ceil()
            } else if velocity < -threshold {
                position.floor()
            } else {
                position.round()
            }
        }
    };
    snapped as i64
}

/// Largest valid index for `len` cards with `visible` on screen.
#[must_use]
pub fn max_index(len: usize, visible: usize) -> usize {
    len.saturating_sub(visible.max(1))
}

/// Clamp a (possibly negative) index into `[0, max_index]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn clamp_index(index: i64, len: usize, visible: usize) -> usize {
    let max = max_index(len, visible) as i64;
    index.clamp(0, max) as usize
}

/// Pointer bookkeeping while a drag is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTrack {
    pub start_x: f64,
    pub start_offset: f64,
    pub last_x: f64,
    pub last_t: f64,
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Dragging(DragTrack),
    Snapping { target: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub len: usize,
    pub visible_items: usize,
    pub snap: SnapBehavior,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    config: CarouselConfig,
    index: usize,
    phase: CarouselPhase,
}

impl Carousel {
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let config = CarouselConfig { visible_items: config.visible_items.max(1), ..config };
        Self { config, index: 0, phase: CarouselPhase::Idle }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.config.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.len == 0
    }

    #[must_use]
    pub fn visible_items(&self) -> usize {
        self.config.visible_items
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        max_index(self.config.len, self.config.visible_items)
    }

    /// Previous/next controls are only rendered when there is something to scroll.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.config.len > self.config.visible_items
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index < self.max_index()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging(_))
    }

    #[must_use]
    pub fn is_snapping(&self) -> bool {
        matches!(self.phase, CarouselPhase::Snapping { .. })
    }

    fn reclamp(&mut self) {
        self.index = self.index.min(self.max_index());
        if let CarouselPhase::Snapping { target } = &mut self.phase {
            *target = (*target).min(max_index(self.config.len, self.config.visible_items));
        }
    }

    /// Update the item count (e.g. after a fetch) and re-clamp.
    pub fn set_len(&mut self, len: usize) {
        self.config.len = len;
        self.reclamp();
    }

    /// Update the visible count after a resize. Only re-clamps the index.
    pub fn set_visible_items(&mut self, visible_items: usize) {
        self.config.visible_items = visible_items.max(1);
        self.reclamp();
    }

    /// Offset to render, in pixels from the first card.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(&self, card_width: f64) -> f64 {
        match self.phase {
            CarouselPhase::Dragging(track) => track.start_offset - (track.last_x - track.start_x),
            CarouselPhase::Idle | CarouselPhase::Snapping { .. } => self.index as f64 * card_width,
        }
    }

    /// Idle/Snapping -> Dragging. Ignored if a drag is already active.
    pub fn pointer_down(&mut self, x: f64, t_ms: f64, card_width: f64) {
        if self.is_dragging() || self.is_empty() {
            return;
        }
        let start_offset = self.offset(card_width);
        self.phase = CarouselPhase::Dragging(DragTrack {
            start_x: x,
            start_offset,
            last_x: x,
            last_t: t_ms,
            velocity: 0.0,
        });
    }

    /// Dragging -> Dragging. Returns the new unclamped offset.
    pub fn pointer_move(&mut self, x: f64, t_ms: f64) -> Option<f64> {
        let CarouselPhase::Dragging(track) = &mut self.phase else {
            return None;
        };
        let dt = t_ms - track.last_t;
        if dt > 0.0 {
            // Moving the pointer left reveals later cards.
            let instant = -(x - track.last_x) / dt;
            let weight = 1.0 - (-dt / VELOCITY_SMOOTHING_MS).exp();
            track.velocity += (instant - track.velocity) * weight;
        }
        track.last_x = x;
        track.last_t = t_ms;
        Some(track.start_offset - (track.last_x - track.start_x))
    }

    /// Whether the active drag has travelled past [`CLICK_SLOP_PX`].
    #[must_use]
    pub fn is_past_click_slop(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging(track) if (track.last_x - track.start_x).abs() > CLICK_SLOP_PX)
    }

    /// Dragging -> Snapping. Returns the clamped resting index.
    pub fn pointer_up(&mut self, t_ms: f64, card_width: f64) -> Option<usize> {
        let CarouselPhase::Dragging(track) = self.phase else {
            return None;
        };
        let velocity = if t_ms - track.last_t > FLING_STALE_MS { 0.0 } else { track.velocity };
        let raw = track.start_offset - (track.last_x - track.start_x);
        let target = clamp_index(
            snap_index(raw, card_width, velocity, self.config.snap),
            self.config.len,
            self.config.visible_items,
        );
        self.index = target;
        self.phase = CarouselPhase::Snapping { target };
        Some(target)
    }

    /// Jump straight to `index` (clamped), skipping the drag phases.
    pub fn go_to(&mut self, index: usize) -> usize {
        if self.is_dragging() {
            return self.index;
        }
        let target = index.min(self.max_index());
        self.index = target;
        self.phase = CarouselPhase::Snapping { target };
        target
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.index.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Snapping -> Idle once the settle animation ends.
    pub fn finish_snap(&mut self) {
        if self.is_snapping() {
            self.phase = CarouselPhase::Idle;
        }
    }
}
