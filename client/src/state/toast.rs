//! Transient notification state.
//!
//! Each `show` bumps a sequence number; the auto-hide timer carries the
//! number it was armed with, so an older timer cannot hide a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub seq: u64,
}

impl ToastState {
    /// Show `message` and return the sequence number the hide timer must match.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.seq += 1;
        self.visible = true;
        self.message = message.into();
        self.kind = kind;
        self.duration_ms = duration_ms;
        self.seq
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hide only if no newer toast was shown since `seq` was issued.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }
}
