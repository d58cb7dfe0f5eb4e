//! Screen router

/// Screens of the app
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Main menu
    #[default]
    Main,
    /// Stopwatch
    Chrono,
    /// Simulated health metrics
    Health,
}

impl Screen {
    /// Short identifier, used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::Chrono => "chrono",
            Screen::Health => "health",
        }
    }
}

/// Holds the current screen. No history, every target is always legal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Router {
    current: Screen,
}

impl Router {
    /// Create a router on the main menu
    pub const fn new() -> Self {
        Self {
            current: Screen::Main,
        }
    }

    /// Switch to `target`
    pub fn navigate(&mut self, target: Screen) {
        self.current = target;
    }

    /// Currently shown screen
    pub const fn current(&self) -> Screen {
        self.current
    }
}
