//! App state machine
//!
//! Combines the router with the state owned by the mounted screen. Screen
//! state is created on navigation and dropped when the screen is left, which
//! also cancels its periodic generators.

use chrono::{NaiveTime, Timelike};
use embedded_graphics::geometry::Point;
use rand_core::RngCore;

use crate::config::AppConfig;
use crate::health::{HealthSample, MetricSimulator};
use crate::router::{Router, Screen};
use crate::stopwatch::Stopwatch;
use crate::ui::layout;

/// User input delivered by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Single tap at a screen position
    Tap(Point),
    /// Swipe towards the right edge (dismiss)
    SwipeRight,
    /// Hardware button press
    Button,
}

/// What a button on screen does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    OpenChrono,
    OpenHealth,
    ToggleStopwatch,
    /// Return to the main menu
    Back,
}

/// Parts of the panel waiting to be repainted.
///
/// Each part is one bit, so requests made during a tick merge with `|`.
/// [`Redraw::FULL`] clears the panel and paints everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Redraw(u8);

impl Redraw {
    pub const NONE: Self = Self(0);
    /// Header clock
    pub const CLOCK: Self = Self(1 << 0);
    /// Stopwatch readout
    pub const READOUT: Self = Self(1 << 1);
    /// Start/stop button
    pub const TOGGLE: Self = Self(1 << 2);
    /// Heart rate and step values
    pub const METRICS: Self = Self(1 << 3);
    /// The screen changed
    pub const FULL: Self = Self(1 << 7);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// `true` if every part of `other` is pending
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for Redraw {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for Redraw {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The mounted screen and its private state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveScreen {
    Main,
    Chrono(Stopwatch),
    Health(MetricSimulator),
}

impl ActiveScreen {
    /// Fresh state for `screen`
    fn mount(screen: Screen, config: &AppConfig) -> Self {
        match screen {
            Screen::Main => ActiveScreen::Main,
            Screen::Chrono => ActiveScreen::Chrono(Stopwatch::new(config.stopwatch_quantum_ms)),
            Screen::Health => ActiveScreen::Health(MetricSimulator::new(config.simulator)),
        }
    }
}

/// Health tracker app
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    router: Router,
    active: ActiveScreen,
    /// Time of day for the header, `None` until the clock is known
    clock: Option<NaiveTime>,
    redraw: Redraw,
}

impl App {
    /// Start on the main menu with a full redraw pending
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            router: Router::new(),
            active: ActiveScreen::Main,
            clock: None,
            redraw: Redraw::FULL,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Current screen
    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    /// Stopwatch, if the stopwatch screen is mounted
    pub fn stopwatch(&self) -> Option<&Stopwatch> {
        match &self.active {
            ActiveScreen::Chrono(stopwatch) => Some(stopwatch),
            _ => None,
        }
    }

    /// Latest health sample, if the health screen is mounted
    pub fn health(&self) -> Option<HealthSample> {
        match &self.active {
            ActiveScreen::Health(simulator) => Some(simulator.sample()),
            _ => None,
        }
    }

    pub fn clock(&self) -> Option<NaiveTime> {
        self.clock
    }

    /// Switch to `target`, mounting fresh state for it.
    ///
    /// Returns `false` if `target` is already shown.
    pub fn navigate(&mut self, target: Screen) -> bool {
        if self.router.current() == target {
            return false;
        }

        self.router.navigate(target);
        self.active = ActiveScreen::mount(target, &self.config);
        self.request(Redraw::FULL);
        true
    }

    /// Apply an input. Returns `true` if it was handled.
    ///
    /// Back on the main menu is left unhandled.
    pub fn handle(&mut self, input: Input) -> bool {
        let action = match input {
            Input::Tap(point) => layout::hit_test(self.screen(), point),
            Input::SwipeRight | Input::Button => Some(Action::Back),
        };

        match action {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Perform `action`. Returns `true` if it changed anything.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::OpenChrono => self.navigate(Screen::Chrono),
            Action::OpenHealth => self.navigate(Screen::Health),
            Action::Back => self.navigate(Screen::Main),
            Action::ToggleStopwatch => match &mut self.active {
                ActiveScreen::Chrono(stopwatch) => {
                    stopwatch.toggle();
                    self.request(Redraw::TOGGLE);
                    true
                }
                _ => false,
            },
        }
    }

    /// Advance the mounted screen's timers by `dt_ms`.
    pub fn advance<R: RngCore + ?Sized>(&mut self, dt_ms: u32, rng: &mut R) {
        let (changed, redraw) = match &mut self.active {
            ActiveScreen::Main => (false, Redraw::NONE),
            ActiveScreen::Chrono(stopwatch) => (stopwatch.advance(dt_ms), Redraw::READOUT),
            ActiveScreen::Health(simulator) => (simulator.advance(dt_ms, rng), Redraw::METRICS),
        };

        if changed {
            self.request(redraw);
        }
    }

    /// Update the header clock. Only a change of the shown `HH:MM` redraws.
    pub fn set_clock(&mut self, time: NaiveTime) {
        let shown = |t: NaiveTime| (t.hour(), t.minute());
        if self.clock.map(shown) != Some(shown(time)) {
            self.request(Redraw::CLOCK);
        }
        self.clock = Some(time);
    }

    /// Add `redraw` to what the next frame repaints
    pub fn request(&mut self, redraw: Redraw) {
        self.redraw |= redraw;
    }

    /// Return and clear the pending redraw
    pub fn take_redraw(&mut self) -> Redraw {
        core::mem::take(&mut self.redraw)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
