use parking_lot::Mutex;
use serde::Serialize;
use std::{sync::{atomic::{AtomicBool, Ordering}, Arc}, thread};
use tracing::{debug, info, warn};

use crate::click_log::{ClickLog, ClickLogEntry};
use crate::emitter::ClickEmitter;
use crate::error::{ClickerError, EmitError};
use crate::interval::{sleep_duration, IntervalConfig, IntervalMode};

// -------------- Click Engine --------------

/// Handle to one click worker thread.
///
/// Every job owns its own running flag, so a worker still sleeping after `stop`
/// cannot be revived by the next `start`. Dropping the handle stops the worker;
/// the thread itself is never joined.
struct ClickJob {
    running: Arc<AtomicBool>,
}

impl ClickJob {
    fn spawn(config: IntervalConfig, emitter: Arc<dyn ClickEmitter>, log: Arc<ClickLog>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = Arc::clone(&running);

        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            debug!(?config, "click worker started");
            while running_clone.load(Ordering::Acquire) {
                match emitter.emit() {
                    Ok(()) => {
                        let entry = ClickLogEntry::now();
                        log.append(entry);
                        info!("Clicked at {entry}");
                    }
                    Err(e) => warn!("{e}"),
                }
                // Stop takes effect once this sleep is over
                thread::sleep(sleep_duration(config.next_delay(&mut rng)));
            }
            info!("Clicker thread stopped.");
        });

        Self { running }
    }

    fn stop(&self) { self.running.store(false, Ordering::Release); }
}

impl Drop for ClickJob {
    fn drop(&mut self) { self.stop(); }
}

// -------------- Control Facade --------------

/// Point-in-time view returned by `GET /api/status`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickerStatus {
    pub is_clicking: bool,
    pub log_count: usize,
    pub mode: IntervalMode,
    pub min_interval: f64,
    pub max_interval: f64,
}

struct ClickerState {
    config: IntervalConfig,
    job: Option<ClickJob>,
}

/// The single clicking state of the process and the operations on it.
pub struct Clicker {
    state: Mutex<ClickerState>,
    log: Arc<ClickLog>,
    emitter: Arc<dyn ClickEmitter>,
}

impl Clicker {
    pub fn new(emitter: Arc<dyn ClickEmitter>) -> Self {
        Self::with_config(emitter, IntervalConfig::default())
    }

    /// `config` is what `status` reports until the first `start`.
    pub fn with_config(emitter: Arc<dyn ClickEmitter>, config: IntervalConfig) -> Self {
        Self {
            state: Mutex::new(ClickerState { config, job: None }),
            log: Arc::new(ClickLog::new()),
            emitter,
        }
    }

    pub fn start(&self, config: IntervalConfig) -> Result<(), ClickerError> {
        let mut state = self.state.lock();
        if state.job.is_some() { return Err(ClickerError::AlreadyRunning); }

        state.config = config;
        state.job = Some(ClickJob::spawn(config, Arc::clone(&self.emitter), Arc::clone(&self.log)));
        info!(
            "Starting clicker. Mode: {}, Min: {}, Max: {}",
            config.mode.as_str(), config.min_secs, config.max_secs
        );
        Ok(())
    }

    /// Returns without waiting for the worker to wind down.
    pub fn stop(&self) -> Result<(), ClickerError> {
        let job = self.state.lock().job.take().ok_or(ClickerError::NotRunning)?;
        job.stop();
        info!("Stopping clicker.");
        Ok(())
    }

    pub fn is_running(&self) -> bool { self.state.lock().job.is_some() }

    pub fn status(&self) -> ClickerStatus {
        let state = self.state.lock();
        ClickerStatus {
            is_clicking: state.job.is_some(),
            log_count: self.log.len(),
            mode: state.config.mode,
            min_interval: state.config.min_secs,
            max_interval: state.config.max_secs,
        }
    }

    /// One manual click, logged as a test entry. Independent of the worker.
    pub fn test_click(&self) -> Result<(), EmitError> {
        info!("Performing a test click.");
        self.emitter.emit()?;
        self.log.append(ClickLogEntry::test_now());
        Ok(())
    }

    pub fn read_log(&self) -> Vec<ClickLogEntry> { self.log.snapshot() }
    pub fn log_count(&self) -> usize { self.log.len() }

    pub fn clear_log(&self) {
        self.log.clear();
        info!("Click log cleared.");
    }
}
