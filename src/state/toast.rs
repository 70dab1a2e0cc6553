//! Toast notification state.
//!
//! DESIGN
//! ======
//! The root component provides one `RwSignal<ToastState>`; only one toast is
//! visible at a time. Every `show` bumps a sequence number and the
//! auto-dismiss timer only clears the toast it was started for, so a newer
//! message is never cut short by an older timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Auto-dismiss delay.
pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// BEM modifier for the toast container.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "⚠",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub seq: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<ToastMessage>,
    next_seq: u64,
}

impl ToastState {
    /// Replace the visible toast and return its sequence number.
    pub fn show(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(ToastMessage { seq, kind, text: text.into() });
        seq
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.show(ToastKind::Info, text)
    }

    /// Clear the toast only if it is still the one identified by `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }
}
