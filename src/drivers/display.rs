//! Time display.
//!
//! Renders remaining seconds as `MM:SS` (minutes clamped to 99).  The
//! driver keeps the last frame drawn and never redraws an identical one;
//! changed frames are drawn at most once per refresh interval, except
//! through [`DisplayDriver::show_now`].  Drawing goes to the console log.

use core::fmt::Write;

use heapless::String;
use log::info;

use crate::pins;

/// `MM:SS`.
pub type Frame = String<5>;

const MAX_MINUTES: u32 = 99;

/// Format `seconds` as `MM:SS`, clamping minutes to 99.
pub fn format_mmss(seconds: u32) -> Frame {
    let minutes = (seconds / 60).min(MAX_MINUTES);
    let secs = seconds % 60;
    let mut frame = Frame::new();
    // Five bytes always fit: two-digit minutes, colon, two-digit seconds.
    let _ = write!(frame, "{minutes:02}:{secs:02}");
    frame
}

pub struct DisplayDriver {
    refresh_ms: u32,
    last_frame: Option<Frame>,
    last_draw_ms: Option<u32>,
}

impl DisplayDriver {
    pub fn new(refresh_ms: u32) -> Self {
        info!(
            "display: panel on SDA={} SCL={}, refresh {} ms",
            pins::DISPLAY_SDA_GPIO,
            pins::DISPLAY_SCL_GPIO,
            refresh_ms
        );
        Self {
            refresh_ms,
            last_frame: None,
            last_draw_ms: None,
        }
    }

    /// Throttled update.  Returns `true` if a frame was drawn.
    pub fn show(&mut self, seconds: u32, now_ms: u32) -> bool {
        let frame = format_mmss(seconds);
        if self.last_frame.as_ref() == Some(&frame) {
            return false;
        }
        if let Some(at) = self.last_draw_ms {
            if now_ms.wrapping_sub(at) < self.refresh_ms {
                return false;
            }
        }
        self.draw(frame, now_ms);
        true
    }

    /// Unthrottled update.
    pub fn show_now(&mut self, seconds: u32, now_ms: u32) {
        let frame = format_mmss(seconds);
        if self.last_frame.as_ref() != Some(&frame) {
            self.draw(frame, now_ms);
        }
    }

    /// Blank the panel.
    pub fn clear(&mut self) {
        if self.last_frame.take().is_some() {
            self.last_draw_ms = None;
            info!("display: cleared");
        }
    }

    /// Frame currently on the panel; `None` when blank.
    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    fn draw(&mut self, frame: Frame, now_ms: u32) {
        info!("display: {}", frame);
        self.last_frame = Some(frame);
        self.last_draw_ms = Some(now_ms);
    }
}
