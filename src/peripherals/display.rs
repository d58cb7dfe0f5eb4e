//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26, SPI2},
    spim::Spim,
};
use embassy_time::Delay;
use embedded_graphics::draw_target::DrawTarget;
use health_tracker_core::{
    ui::{
        self,
        layout::{LCD_H, LCD_W},
    },
    App, Redraw,
};
use mipidsi::{models::ST7789, Builder, Orientation};

type Lcd<'a> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI2>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

/// Error raised by the LCD driver while drawing
pub type DrawError<'a> = <Lcd<'a> as DrawTarget>::Error;

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// The ST7789 did not accept the init sequence
    Init,
}

/// ST7789 panel showing the app
pub struct Display<'a> {
    lcd: Lcd<'a>,
}

impl<'a> Display<'a> {
    /// Configure the panel on boot
    pub fn init(
        spim: Spim<'a, SPI2>,
        cs: Output<'a, P0_25>,
        dc: Output<'a, P0_18>,
        rst: Output<'a, P0_26>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc, cs))
            .with_display_size(LCD_W as u16, LCD_H as u16)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst))
            .map_err(|_| Error::Init)?;

        Ok(Self { lcd })
    }

    /// Draw what the app asks for
    pub fn render(&mut self, app: &App, redraw: Redraw) -> Result<(), DrawError<'a>> {
        ui::draw(app, redraw, &mut self.lcd)
    }
}
