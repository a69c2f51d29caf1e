//! Periodic tick source for the shared countdown.
//!
//! On ESP-IDF a periodic `esp_timer` calls [`Countdown::decrement_one`] once
//! per period.  The callback runs in the ESP timer task context (not ISR)
//! and only takes the countdown's short critical section.
//!
//! On simulation targets a named background thread sleeps for the period
//! and does the same.  The timer stops when the [`TickTimer`] is dropped.

use crate::countdown::Countdown;
use crate::error::{Error, Result};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

// ── ESP-IDF ───────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub struct TickTimer {
    handle: esp_timer_handle_t,
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn tick_cb(arg: *mut core::ffi::c_void) {
    // SAFETY: `arg` is the `&'static Countdown` registered in `start()`;
    // it outlives every callback and is only accessed through `&`.
    let countdown = unsafe { &*(arg as *const Countdown) };
    countdown.decrement_one();
}

#[cfg(target_os = "espidf")]
impl TickTimer {
    /// Start decrementing `countdown` every `period_ms`.
    pub fn start(countdown: &'static Countdown, period_ms: u32) -> Result<Self> {
        let args = esp_timer_create_args_t {
            callback: Some(tick_cb),
            arg: countdown as *const Countdown as *mut core::ffi::c_void,
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: c"tick".as_ptr(),
            skip_unhandled_events: false,
        };
        let mut handle: esp_timer_handle_t = core::ptr::null_mut();

        // SAFETY: `args` and `handle` are valid for the duration of the
        // call; the callback argument is 'static.
        let ret = unsafe { esp_timer_create(&args, &mut handle) };
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer create failed (rc={})", ret);
            return Err(Error::Timer(ret));
        }

        // SAFETY: `handle` was just created and is not running.
        let ret = unsafe { esp_timer_start_periodic(handle, u64::from(period_ms) * 1_000) };
        if ret != ESP_OK {
            log::error!("hw_timer: tick timer start failed (rc={})", ret);
            // SAFETY: never started, safe to delete.
            unsafe { esp_timer_delete(handle) };
            return Err(Error::Timer(ret));
        }

        info!("hw_timer: tick every {} ms", period_ms);
        Ok(Self { handle })
    }
}

#[cfg(target_os = "espidf")]
impl Drop for TickTimer {
    fn drop(&mut self) {
        // SAFETY: `handle` is a valid timer owned by this struct.
        unsafe {
            esp_timer_stop(self.handle);
            esp_timer_delete(self.handle);
        }
    }
}

// ── Simulation ────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub struct TickTimer {
    stop: std::sync::Arc<std::sync::atomic::AtomicBool>,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(not(target_os = "espidf"))]
impl TickTimer {
    /// Start decrementing `countdown` every `period_ms`.
    pub fn start(countdown: &'static Countdown, period_ms: u32) -> Result<Self> {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let period = Duration::from_millis(u64::from(period_ms));

        let thread = std::thread::Builder::new()
            .name("tick".into())
            .spawn(move || {
                while !flag.load(Ordering::Acquire) {
                    std::thread::sleep(period);
                    if flag.load(Ordering::Acquire) {
                        break;
                    }
                    countdown.decrement_one();
                }
            })
            .map_err(|_| Error::Init("tick thread spawn failed"))?;

        info!("hw_timer(sim): tick every {} ms", period_ms);
        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }
}

#[cfg(not(target_os = "espidf"))]
impl Drop for TickTimer {
    fn drop(&mut self) {
        self.stop.store(true, std::sync::atomic::Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
