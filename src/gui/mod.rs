//! Desktop GUI for the assistant.
//!
//! One fixed-size window with the webcam feed on top, a headline showing
//! the most recent status, the activation circle, and a scrolling log of
//! everything heard and spoken.

pub mod app;
pub mod runner;

pub use app::AnnieApp;
pub use runner::run_gui;
