//! Touch controller module for PineTime

use cst816s::{TouchGesture, CST816S};
use embassy_nrf::{
    gpio::{Input, Output},
    peripherals::{P0_10, P0_28, TWISPI1},
    twim::Twim,
};
use embassy_time::Delay;
use embedded_graphics::geometry::Point;
use health_tracker_core::Input as UiInput;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// The controller did not answer after reset
    Setup,
}

pub struct TouchController<'a> {
    touchpad: CST816S<Twim<'a, TWISPI1>, Input<'a, P0_28>, Output<'a, P0_10>>,
}

impl<'a> TouchController<'a> {
    /// Reset and configure the CST816S
    pub fn init(
        twim: Twim<'a, TWISPI1>,
        interrupt_pin: Input<'a, P0_28>,
        reset_pin: Output<'a, P0_10>,
    ) -> Result<Self, Error> {
        let mut touchpad = CST816S::new(twim, interrupt_pin, reset_pin);
        touchpad.setup(&mut Delay).map_err(|_| Error::Setup)?;
        Ok(Self { touchpad })
    }

    /// Check for a new touch event the app understands
    pub fn try_event_detected(&mut self) -> Option<UiInput> {
        let event = self.touchpad.read_one_touch_event(true)?;
        match event.gesture {
            TouchGesture::SingleClick => Some(UiInput::Tap(Point::new(event.x, event.y))),
            TouchGesture::SlideRight => Some(UiInput::SwipeRight),
            _ => None,
        }
    }
}
