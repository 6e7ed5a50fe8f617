//! Session state machine and the background listening loop.
//!
//! The session is either inactive or active. Activation speaks a greeting
//! and starts exactly one listening thread; deactivation (from the
//! activation control or from an exit keyword inside the loop) speaks a
//! single farewell and lets the loop wind down cooperatively.
//!
//! A fresh activity flag is allocated per activation, so a stale loop
//! that has not yet observed its deactivation can never be revived by a
//! later re-activation. The farewell is guarded by `swap(false)`: whoever
//! flips the flag first speaks it, exactly once, even when a keyword exit
//! races a manual toggle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::dispatch::{Dispatcher, Outcome};
use crate::domain::{StatusEvent, Utterance};
use crate::speech::{SpeechInput, Voice};

/// Owns the active/inactive state and the background listening loop
pub struct SessionController {
    active: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    recognizer: Arc<dyn SpeechInput>,
    dispatcher: Arc<Dispatcher>,
    voice: Voice,
    status_tx: Sender<StatusEvent>,
    user_name: String,
}

impl SessionController {
    /// Create an inactive session controller
    pub fn new(
        recognizer: Arc<dyn SpeechInput>,
        dispatcher: Arc<Dispatcher>,
        voice: Voice,
        status_tx: Sender<StatusEvent>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            worker: None,
            recognizer,
            dispatcher,
            voice,
            status_tx,
            user_name: user_name.into(),
        }
    }

    /// Whether the session is currently active
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Toggle between active and inactive (the activation control)
    pub fn toggle(&mut self) {
        if self.is_active() {
            self.deactivate();
        } else {
            self.activate();
        }
    }

    /// Activate the session: greet and start the listening loop
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }

        // Reap the previous worker if it has already finished; a still
        // blocked one holds a stale (false) flag and exits on its own.
        if let Some(handle) = self.worker.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }

        let active = Arc::new(AtomicBool::new(true));
        self.active = Arc::clone(&active);

        self.push_status(StatusEvent::system("Annie is active!"));
        self.voice.speak(&format!(
            "Hello {}! How can I assist you today?",
            self.user_name
        ));

        let recognizer = Arc::clone(&self.recognizer);
        let dispatcher = Arc::clone(&self.dispatcher);
        let voice = self.voice.clone();
        let status_tx = self.status_tx.clone();
        let user_name = self.user_name.clone();

        info!("session activated");
        self.worker = Some(thread::spawn(move || {
            run_loop(active, recognizer, dispatcher, voice, status_tx, user_name);
        }));
    }

    /// Deactivate the session: farewell and let the loop wind down
    pub fn deactivate(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            info!("session deactivated");
            self.push_status(StatusEvent::system("Annie is going to sleep."));
            self.voice
                .speak(&format!("Okay, {}. Call me when you need me.", self.user_name));
        }
    }

    /// Stop listening without the farewell (window close)
    pub fn shutdown(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }

    fn push_status(&self, event: StatusEvent) {
        let _ = self.status_tx.send(event);
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The background listening loop: capture, dispatch, repeat while active.
///
/// Cancellation is cooperative - the flag is observed between cycles, so
/// an in-flight capture or backend call finishes before the loop stops.
fn run_loop(
    active: Arc<AtomicBool>,
    recognizer: Arc<dyn SpeechInput>,
    dispatcher: Arc<Dispatcher>,
    voice: Voice,
    status_tx: Sender<StatusEvent>,
    user_name: String,
) {
    while active.load(Ordering::SeqCst) {
        let _ = status_tx.send(StatusEvent::system("Listening..."));

        let utterance = match recognizer.capture() {
            Ok(utterance) => utterance,
            Err(e) => {
                // DeviceUnavailable: reported once, then the loop stops.
                let _ = status_tx.send(StatusEvent::error(format!("{e}")));
                active.store(false, Ordering::SeqCst);
                break;
            }
        };

        let text = match &utterance {
            Utterance::Recognized(text) => text,
            Utterance::NotUnderstood => {
                let _ = status_tx.send(StatusEvent::system("Sorry, I didn't get that."));
                continue;
            }
        };

        let _ = status_tx.send(StatusEvent::heard(format!("You: {text}")));

        match dispatcher.dispatch(text) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Deactivate) => {
                if active.swap(false, Ordering::SeqCst) {
                    let _ = status_tx.send(StatusEvent::system("Annie is going to sleep."));
                    voice.speak(&format!("Okay, {user_name}. Call me when you need me."));
                }
                break;
            }
            Err(e) => {
                // Backend failure aborts this cycle only.
                let _ = status_tx.send(StatusEvent::error(format!("Chat backend error: {e:#}")));
            }
        }
    }

    debug!("listening loop stopped");
}
