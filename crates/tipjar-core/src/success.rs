//! Success page state
//!
//! The page is display-only: it echoes the `amount` query parameter and
//! counts down to a redirect home. Reaching it proves nothing about payment.

use crate::format::{format_yen, parse_leading_int};

/// Seconds the success page waits before returning home
pub const SUCCESS_REDIRECT_SECS: u32 = 5;

/// Result of one countdown tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Seconds still remaining
    Remaining(u32),
    /// Countdown reached zero; navigate now
    Elapsed,
}

/// One-second countdown driven by an external timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub const fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by one second. Once elapsed, further ticks keep returning
    /// [`Tick::Elapsed`].
    pub const fn tick(&mut self) -> Tick {
        if self.remaining <= 1 {
            self.remaining = 0;
            Tick::Elapsed
        } else {
            self.remaining -= 1;
            Tick::Remaining(self.remaining)
        }
    }

    /// Caption under the home button
    pub fn caption(&self) -> String {
        if self.is_elapsed() {
            "トップページに戻ります...".into()
        } else {
            format!("{}秒後に自動的にトップページに戻ります", self.remaining)
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(SUCCESS_REDIRECT_SECS)
    }
}

/// Badge text for the `amount` query parameter, e.g. `Some("3000")` → `¥3,000`.
///
/// Absent or unparseable values hide the badge.
pub fn amount_badge(query_amount: Option<&str>) -> Option<String> {
    query_amount.and_then(parse_leading_int).map(format_yen)
}
