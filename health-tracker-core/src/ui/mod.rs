//! Screens of the health tracker
//!
//! [`draw`] renders the app onto any `Rgb565` draw target. A full redraw
//! clears the panel and paints the whole screen. Otherwise only the parts
//! named in the [`Redraw`] are repainted, so a running stopwatch costs one
//! readout per 10 ms tick.

use chrono::Timelike;
use embedded_graphics::{
    mono_font::iso_8859_1::{FONT_10X20, FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use profont::PROFONT_24_POINT;

use crate::app::{ActiveScreen, App, Redraw};
use crate::health::HealthSample;
use crate::stopwatch::Stopwatch;

pub mod layout;
mod widgets;

use layout::*;

// Colors
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
pub const PRIMARY: Rgb565 = Rgb565::new(21, 50, 31);
pub const SECONDARY: Rgb565 = Rgb565::new(31, 40, 8);
pub const SURFACE: Rgb565 = Rgb565::new(4, 9, 5);
pub const CAPTION: Rgb565 = Rgb565::new(22, 45, 22);
pub const RUNNING: Rgb565 = Rgb565::RED;
pub const STOPPED: Rgb565 = Rgb565::GREEN;

// Labels
const TITLE_TEXT: &str = "Rastreador De Salud";
const CHRONO_TEXT: &str = "Cronómetro";
const HEALTH_TEXT: &str = "Salud";
const START_TEXT: &str = "Iniciar";
const STOP_TEXT: &str = "Detener";
const BACK_TEXT: &str = "Volver";
const HEART_RATE_TEXT: &str = "Ritmo cardíaco";
const STEPS_TEXT: &str = "Pasos";

/// Render whatever `redraw` asks for
pub fn draw<D>(app: &App, redraw: Redraw, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if redraw.contains(Redraw::FULL) {
        draw_full(app, target)
    } else {
        draw_parts(app, redraw, target)
    }
}

/// Clear the panel and paint the current screen
pub fn draw_full<D>(app: &App, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BACKGROUND)?;

    match app.active() {
        ActiveScreen::Main => {
            widgets::text_centered(target, TITLE_TEXT, TITLE, &FONT_10X20, FOREGROUND)?;
            widgets::button(target, CHRONO_BUTTON, CHRONO_TEXT, &FONT_10X20, PRIMARY, BACKGROUND)?;
            widgets::button(target, HEALTH_BUTTON, HEALTH_TEXT, &FONT_10X20, SECONDARY, BACKGROUND)?;
        }
        ActiveScreen::Chrono(_) => {
            widgets::button(target, CHRONO_BACK_BUTTON, BACK_TEXT, &FONT_10X20, PRIMARY, BACKGROUND)?;
        }
        ActiveScreen::Health(_) => {
            draw_card(target, HEART_CARD, HEART_RATE_TEXT)?;
            draw_card(target, STEPS_CARD, STEPS_TEXT)?;
            widgets::button(target, HEALTH_BACK_BUTTON, BACK_TEXT, &FONT_10X20, PRIMARY, BACKGROUND)?;
        }
    }

    let every_part = Redraw::CLOCK | Redraw::READOUT | Redraw::TOGGLE | Redraw::METRICS;
    draw_parts(app, every_part, target)
}

/// Repaint the dynamic parts of the current screen named in `redraw`
fn draw_parts<D>(app: &App, redraw: Redraw, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if redraw.contains(Redraw::CLOCK) {
        draw_header(app, target)?;
    }

    match app.active() {
        ActiveScreen::Main => {}
        ActiveScreen::Chrono(stopwatch) => {
            if redraw.contains(Redraw::READOUT) {
                draw_readout(stopwatch, target)?;
            }
            if redraw.contains(Redraw::TOGGLE) {
                draw_toggle(stopwatch, target)?;
            }
        }
        ActiveScreen::Health(simulator) => {
            if redraw.contains(Redraw::METRICS) {
                draw_metrics(&simulator.sample(), target)?;
            }
        }
    }
    Ok(())
}

fn draw_header<D>(app: &App, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf = [0u8; 8];
    let label = match app.clock() {
        Some(time) => widgets::show(
            &mut buf,
            format_args!("{:02}:{:02}", time.hour(), time.minute()),
        ),
        None => "",
    };
    widgets::value(target, HEADER, label, &FONT_10X20, FOREGROUND, BACKGROUND, true)
}

fn draw_readout<D>(stopwatch: &Stopwatch, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf = [0u8; 12];
    let readout = widgets::show(&mut buf, format_args!("{}", stopwatch.elapsed()));
    widgets::fixed_value(target, READOUT, readout, &PROFONT_24_POINT, FOREGROUND, BACKGROUND)
}

fn draw_toggle<D>(stopwatch: &Stopwatch, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (label, fill) = if stopwatch.is_running() {
        (STOP_TEXT, RUNNING)
    } else {
        (START_TEXT, STOPPED)
    };
    widgets::button(target, TOGGLE_BUTTON, label, &FONT_10X20, fill, BACKGROUND)
}

fn draw_card<D>(target: &mut D, card: Rectangle, caption: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    widgets::card(target, card, SURFACE)?;
    let caption_area = Rectangle::new(
        card.top_left + Point::new(CARD_PADDING, CARD_PADDING),
        Size::new(card.size.width - 2 * CARD_PADDING as u32, CARD_CAPTION_H as u32),
    );
    widgets::value(target, caption_area, caption, &FONT_6X10, CAPTION, SURFACE, false)
}

fn draw_metrics<D>(sample: &HealthSample, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf = [0u8; 16];
    let heart_rate = widgets::show(&mut buf, format_args!("{} BPM", sample.heart_rate));
    widgets::value(
        target,
        card_value_area(HEART_CARD),
        heart_rate,
        &FONT_10X20,
        FOREGROUND,
        SURFACE,
        false,
    )?;

    let mut buf = [0u8; 16];
    let steps = widgets::show(&mut buf, format_args!("{}", sample.steps));
    widgets::value(
        target,
        card_value_area(STEPS_CARD),
        steps,
        &FONT_10X20,
        FOREGROUND,
        SURFACE,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::health::tests::XorShift;
    use crate::router::Screen;
    use chrono::NaiveTime;
    use core::convert::Infallible;

    const UNPAINTED: Rgb565 = Rgb565::new(1, 2, 3);

    /// In-memory panel that fails the test on out-of-bounds pixels
    struct Framebuffer {
        pixels: Vec<Rgb565>,
        touched: Vec<bool>,
    }

    impl Framebuffer {
        fn new() -> Self {
            let len = (LCD_W * LCD_H) as usize;
            Self {
                pixels: vec![UNPAINTED; len],
                touched: vec![false; len],
            }
        }

        fn index(point: Point) -> usize {
            assert!(
                point.x >= 0 && point.y >= 0 && (point.x as u32) < LCD_W && (point.y as u32) < LCD_H,
                "pixel {:?} outside the panel",
                point
            );
            point.y as usize * LCD_W as usize + point.x as usize
        }

        fn pixel(&self, point: Point) -> Rgb565 {
            self.pixels[Self::index(point)]
        }

        fn reset_touched(&mut self) {
            self.touched.iter_mut().for_each(|t| *t = false);
        }

        fn touched_in(&self, area: &Rectangle) -> bool {
            area.points().any(|p| self.touched[Self::index(p)])
        }

        fn region(&self, area: &Rectangle) -> Vec<Rgb565> {
            area.points().map(|p| self.pixel(p)).collect()
        }
    }

    impl OriginDimensions for Framebuffer {
        fn size(&self) -> Size {
            Size::new(LCD_W, LCD_H)
        }
    }

    impl DrawTarget for Framebuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                let index = Self::index(point);
                self.pixels[index] = color;
                self.touched[index] = true;
            }
            Ok(())
        }
    }

    fn rendered(app: &App) -> Framebuffer {
        let mut fb = Framebuffer::new();
        draw_full(app, &mut fb).unwrap();
        fb
    }

    #[test]
    fn test_full_draw_every_screen_in_bounds() {
        for screen in [Screen::Main, Screen::Chrono, Screen::Health] {
            let mut app = App::default();
            app.navigate(screen);
            app.set_clock(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
            let fb = rendered(&app);
            assert!(fb.pixels.iter().all(|p| *p != UNPAINTED));
        }
    }

    #[test]
    fn test_buttons_are_painted() {
        let fb = rendered(&App::default());
        assert_eq!(fb.pixel(CHRONO_BUTTON.center() + Point::new(0, 25)), PRIMARY);
        assert_eq!(fb.pixel(HEALTH_BUTTON.center() + Point::new(0, 20)), SECONDARY);
    }

    #[test]
    fn test_toggle_button_color_follows_state() {
        let mut app = App::default();
        app.navigate(Screen::Chrono);
        let inside = TOGGLE_BUTTON.center() + Point::new(0, 20);
        assert_eq!(rendered(&app).pixel(inside), STOPPED);

        app.apply(Action::ToggleStopwatch);
        let mut fb = rendered(&app);
        assert_eq!(fb.pixel(inside), RUNNING);

        app.apply(Action::ToggleStopwatch);
        draw(&app, Redraw::TOGGLE, &mut fb).unwrap();
        assert_eq!(fb.pixel(inside), STOPPED);
    }

    #[test]
    fn test_readout_changes_with_elapsed_time() {
        let mut app = App::default();
        let mut rng = XorShift::new(1);
        app.navigate(Screen::Chrono);
        let mut fb = rendered(&app);
        let before = fb.region(&READOUT);

        app.apply(Action::ToggleStopwatch);
        app.advance(1_230, &mut rng);
        draw(&app, Redraw::READOUT, &mut fb).unwrap();
        assert_ne!(fb.region(&READOUT), before);
    }

    #[test]
    fn test_metrics_redraw_leaves_static_parts_alone() {
        let mut app = App::default();
        let mut rng = XorShift::new(9);
        app.navigate(Screen::Health);
        let mut fb = rendered(&app);

        app.advance(3_000, &mut rng);
        fb.reset_touched();
        draw(&app, Redraw::METRICS, &mut fb).unwrap();

        assert!(fb.touched_in(&card_value_area(HEART_CARD)));
        assert!(fb.touched_in(&card_value_area(STEPS_CARD)));
        assert!(!fb.touched_in(&HEALTH_BACK_BUTTON));
    }

    #[test]
    fn test_clock_on_main_only_touches_header() {
        let mut app = App::default();
        app.set_clock(NaiveTime::from_hms_opt(7, 5, 0).unwrap());
        let mut fb = rendered(&app);
        fb.reset_touched();
        draw(&app, Redraw::CLOCK, &mut fb).unwrap();
        assert!(fb.touched_in(&HEADER));
        assert!(!fb.touched_in(&CHRONO_BUTTON));
        assert!(!fb.touched_in(&HEALTH_BUTTON));
    }

    #[test]
    fn test_none_draws_nothing() {
        let app = App::default();
        let mut fb = Framebuffer::new();
        draw(&app, Redraw::NONE, &mut fb).unwrap();
        assert!(fb.touched.iter().all(|t| !*t));
    }

    #[test]
    fn test_stopwatch_tick_repaints_only_the_readout() {
        let mut app = App::default();
        let mut rng = XorShift::new(2);
        app.set_clock(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        app.navigate(Screen::Chrono);
        app.apply(Action::ToggleStopwatch);
        let mut fb = rendered(&app);
        app.take_redraw();
        let header = fb.region(&HEADER);
        let toggle = fb.region(&TOGGLE_BUTTON);

        app.advance(10, &mut rng);
        let redraw = app.take_redraw();
        fb.reset_touched();
        draw(&app, redraw, &mut fb).unwrap();

        assert!(fb.touched_in(&READOUT));
        assert!(!fb.touched_in(&HEADER));
        assert!(!fb.touched_in(&TOGGLE_BUTTON));
        assert!(!fb.touched_in(&CHRONO_BACK_BUTTON));
        assert_eq!(fb.region(&HEADER), header);
        assert_eq!(fb.region(&TOGGLE_BUTTON), toggle);

        // Glyph cells only, not the whole readout box
        let written = fb.touched.iter().filter(|t| **t).count();
        let glyphs = 8 * PROFONT_24_POINT.character_size.width * PROFONT_24_POINT.character_size.height;
        assert!(written <= glyphs as usize);
        assert!(written < READOUT.size.width as usize * READOUT.size.height as usize);
    }

    #[test]
    fn test_readout_overwrites_previous_digits() {
        let mut app = App::default();
        let mut rng = XorShift::new(8);
        app.navigate(Screen::Chrono);
        app.apply(Action::ToggleStopwatch);
        app.advance(59_990, &mut rng);
        let mut fb = rendered(&app);

        app.advance(10, &mut rng);
        draw(&app, Redraw::READOUT, &mut fb).unwrap();
        let fresh = rendered(&app);
        assert_eq!(fb.region(&READOUT), fresh.region(&READOUT));
    }
}
