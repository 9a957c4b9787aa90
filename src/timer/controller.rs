//! Thread-safe driver for the timer engine.
//!
//! One background thread advances the countdown; menu commands arrive on
//! other threads. All shared state sits behind a single mutex so a stop
//! issued concurrently with a tick is linearized, and a condvar bounds how
//! long `stop` waits to be observed.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::timer::engine::{Snapshot, TimerEngine};

struct Shared {
    engine: TimerEngine,
    ticker_alive: bool,
}

struct Core {
    shared: Mutex<Shared>,
    wake: Condvar,
}

/// Command surface over a [`TimerEngine`], safe to clone and call from any
/// thread.
///
/// The first `start_focus` spawns the ticker thread; the liveness flag is
/// checked and set under the engine mutex, so at most one ticker ever runs.
#[derive(Clone)]
pub struct SessionController {
    core: Arc<Core>,
}

impl SessionController {
    /// Wrap an engine for concurrent use.
    #[must_use]
    pub fn new(engine: TimerEngine) -> Self {
        Self {
            core: Arc::new(Core {
                shared: Mutex::new(Shared {
                    engine,
                    ticker_alive: false,
                }),
                wake: Condvar::new(),
            }),
        }
    }

    /// Start a focus session and make sure the ticker is running.
    pub fn start_focus(&self) {
        let mut shared = self.lock();
        shared.engine.start_focus();
        self.ensure_ticker(&mut shared);
    }

    /// Skip the current focus session to its rest.
    pub fn skip_to_rest(&self) {
        self.lock().engine.skip_to_rest();
    }

    /// Skip the current rest to the next focus session.
    pub fn skip_to_focus(&self) {
        let mut shared = self.lock();
        shared.engine.skip_to_focus();
        self.ensure_ticker(&mut shared);
    }

    /// Stop the timer and return to idle.
    ///
    /// Wakes the ticker so it observes the stop immediately instead of at
    /// the end of its current wait.
    pub fn stop(&self) {
        let mut shared = self.lock();
        shared.engine.stop();
        self.core.wake.notify_all();
    }

    /// Get the read model for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().engine.snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // The engine cannot panic mid-mutation; recover the data on poison.
        self.core
            .shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_ticker(&self, shared: &mut MutexGuard<'_, Shared>) {
        if !shared.engine.is_running() || shared.ticker_alive {
            return;
        }
        shared.ticker_alive = true;
        let controller = self.clone();
        thread::spawn(move || controller.run_ticker());
    }

    fn run_ticker(&self) {
        let mut shared = self.lock();
        loop {
            if !shared.engine.is_running() {
                shared.ticker_alive = false;
                return;
            }

            let interval = shared.engine.tick_interval();
            let (guard, timeout) = self
                .core
                .wake
                .wait_timeout(shared, interval)
                .unwrap_or_else(PoisonError::into_inner);
            shared = guard;

            if !shared.engine.is_running() {
                shared.ticker_alive = false;
                return;
            }
            // A wake without timeout is either a stop (handled above) or
            // spurious; only a full interval counts as a tick.
            if timeout.timed_out() {
                shared.engine.tick();
            }
        }
    }
}
