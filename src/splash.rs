//! Splash gate
//!
//! The splash screen is visible from startup until a one-shot timer fires,
//! then hidden for the rest of the session. `SplashGate` is the shared flag;
//! `SplashTimer` owns the timer thread and cancels it when dropped, so no
//! callback runs after the UI has been torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

/// Shared visibility flag for the splash screen
#[derive(Debug, Clone)]
pub struct SplashGate {
    visible: Arc<AtomicBool>,
}

impl SplashGate {
    /// A gate that starts visible
    pub fn shown() -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A gate that is already hidden (splash disabled)
    pub fn hidden() -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    /// Hide the splash
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn hide(&self) -> bool {
        self.visible.swap(false, Ordering::AcqRel)
    }
}

/// One-shot timer that hides a `SplashGate`
///
/// Dropping the timer before it fires cancels it.
pub struct SplashTimer {
    cancel: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SplashTimer {
    /// Start the timer
    ///
    /// After `delay`, the gate is hidden and `on_hidden` runs once. If the
    /// timer is dropped first, neither happens.
    pub fn start<F>(gate: SplashGate, delay: Duration, on_hidden: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel::<()>();
        let handle = thread::spawn(move || match cancelled.recv_timeout(delay) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if gate.hide() {
                    info!(delay_ms = delay.as_millis() as u64, "splash hidden");
                    on_hidden();
                }
            }
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                debug!("splash timer cancelled");
            }
        });

        Self {
            cancel: Some(cancel),
            handle: Some(handle),
        }
    }

    /// Whether the timer thread has finished (fired or cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        // Dropping the sender wakes the thread with Disconnected if it is
        // still waiting.
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        cond()
    }

    #[test]
    fn test_gate_transitions_once() {
        let gate = SplashGate::shown();
        assert!(gate.is_visible());
        assert!(gate.hide());
        assert!(!gate.is_visible());
        assert!(!gate.hide());
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_hidden_gate() {
        let gate = SplashGate::hidden();
        assert!(!gate.is_visible());
        assert!(!gate.hide());
    }

    #[test]
    fn test_timer_hides_after_delay() {
        let gate = SplashGate::shown();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let started = Instant::now();
        let timer = SplashTimer::start(gate.clone(), Duration::from_millis(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(gate.is_visible());

        assert!(wait_until(Duration::from_secs(5), || !gate.is_visible()));
        assert!(started.elapsed() >= Duration::from_millis(60));
        assert!(wait_until(Duration::from_secs(5), || timer.is_finished()));

        drop(timer);
        assert!(!gate.is_visible());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let gate = SplashGate::shown();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let timer = SplashTimer::start(gate.clone(), Duration::from_secs(30), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let started = Instant::now();
        drop(timer);

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(gate.is_visible());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
