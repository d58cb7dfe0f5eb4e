//! Board-agnostic logic for the PineTime health tracker
//!
//! Everything here runs without touching hardware:
//!
//! - Screen router (main menu, stopwatch, health metrics)
//! - Stopwatch accumulation and `MM:SS.CC` formatting
//! - Simulated heart rate and step generators
//! - The app state machine tying inputs, timers and redraws together
//! - Layout, hit testing and rendering onto any `Rgb565` draw target
//!
//! The firmware owns the peripherals and drives [`App`] from a single UI task.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod health;
pub mod periodic;
pub mod router;
pub mod stopwatch;
pub mod ui;

pub use app::{Action, ActiveScreen, App, Input, Redraw};
pub use config::{AppConfig, ConfigError};
pub use health::{HealthSample, MetricSimulator, SimulatorConfig};
pub use periodic::Periodic;
pub use router::{Router, Screen};
pub use stopwatch::{Elapsed, Stopwatch};
