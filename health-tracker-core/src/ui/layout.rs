//! Screen layout and hit testing
//!
//! All positions are for the 240x240 panel. The header strip at the top holds
//! the clock on every screen.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::app::Action;
use crate::router::Screen;

pub const LCD_W: u32 = 240;
pub const LCD_H: u32 = 240;

/// Full panel area
pub const SCREEN: Rectangle = Rectangle::new(Point::zero(), Size::new(LCD_W, LCD_H));

/// Clock strip
pub const HEADER: Rectangle = Rectangle::new(Point::zero(), Size::new(LCD_W, 28));

// Main menu
pub const TITLE: Point = Point::new(LCD_W as i32 / 2, 58);
pub const CHRONO_BUTTON: Rectangle = Rectangle::new(Point::new(40, 84), Size::new(160, 64));
pub const HEALTH_BUTTON: Rectangle = Rectangle::new(Point::new(60, 164), Size::new(120, 48));

// Stopwatch
pub const READOUT: Rectangle = Rectangle::new(Point::new(20, 56), Size::new(200, 44));
pub const TOGGLE_BUTTON: Rectangle = Rectangle::new(Point::new(50, 116), Size::new(140, 48));
pub const CHRONO_BACK_BUTTON: Rectangle = Rectangle::new(Point::new(70, 180), Size::new(100, 40));

// Health metrics
pub const HEART_CARD: Rectangle = Rectangle::new(Point::new(10, 34), Size::new(220, 68));
pub const STEPS_CARD: Rectangle = Rectangle::new(Point::new(10, 108), Size::new(220, 68));
pub const HEALTH_BACK_BUTTON: Rectangle = Rectangle::new(Point::new(70, 188), Size::new(100, 40));

/// Inset of card content from the card edge
pub const CARD_PADDING: i32 = 12;
/// Height of the caption line inside a card
pub const CARD_CAPTION_H: i32 = 18;

static MAIN_BUTTONS: [(Rectangle, Action); 2] = [
    (CHRONO_BUTTON, Action::OpenChrono),
    (HEALTH_BUTTON, Action::OpenHealth),
];

static CHRONO_BUTTONS: [(Rectangle, Action); 2] = [
    (TOGGLE_BUTTON, Action::ToggleStopwatch),
    (CHRONO_BACK_BUTTON, Action::Back),
];

static HEALTH_BUTTONS: [(Rectangle, Action); 1] = [(HEALTH_BACK_BUTTON, Action::Back)];

/// Tappable areas of `screen`
pub fn buttons(screen: Screen) -> &'static [(Rectangle, Action)] {
    match screen {
        Screen::Main => &MAIN_BUTTONS,
        Screen::Chrono => &CHRONO_BUTTONS,
        Screen::Health => &HEALTH_BUTTONS,
    }
}

/// Action of the button under `point`, if any
pub fn hit_test(screen: Screen, point: Point) -> Option<Action> {
    buttons(screen)
        .iter()
        .find(|(area, _)| area.contains(point))
        .map(|(_, action)| *action)
}

/// Area of a card that holds its value, below the caption
pub fn card_value_area(card: Rectangle) -> Rectangle {
    Rectangle::new(
        card.top_left + Point::new(CARD_PADDING, CARD_PADDING + CARD_CAPTION_H),
        Size::new(
            card.size.width - 2 * CARD_PADDING as u32,
            card.size.height - (2 * CARD_PADDING + CARD_CAPTION_H) as u32,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREENS: [Screen; 3] = [Screen::Main, Screen::Chrono, Screen::Health];

    fn inside_screen(area: &Rectangle) -> bool {
        SCREEN.contains(area.top_left)
            && area
                .bottom_right()
                .map(|p| SCREEN.contains(p))
                .unwrap_or(false)
    }

    #[test]
    fn test_button_centres_hit_their_action() {
        for screen in SCREENS {
            for (area, action) in buttons(screen) {
                assert_eq!(hit_test(screen, area.center()), Some(*action));
            }
        }
    }

    #[test]
    fn test_empty_areas_miss() {
        for screen in SCREENS {
            assert_eq!(hit_test(screen, Point::new(0, 0)), None);
            assert_eq!(hit_test(screen, Point::new(239, 239)), None);
        }
        assert_eq!(hit_test(Screen::Main, READOUT.top_left), None);
    }

    #[test]
    fn test_layout_fits_panel() {
        let areas = [
            HEADER,
            CHRONO_BUTTON,
            HEALTH_BUTTON,
            READOUT,
            TOGGLE_BUTTON,
            CHRONO_BACK_BUTTON,
            HEART_CARD,
            STEPS_CARD,
            HEALTH_BACK_BUTTON,
        ];
        for area in areas {
            assert!(inside_screen(&area), "{:?} leaves the panel", area);
        }
    }

    #[test]
    fn test_buttons_do_not_overlap_header_or_each_other() {
        for screen in SCREENS {
            let areas = buttons(screen);
            for (i, (a, _)) in areas.iter().enumerate() {
                assert!(a.intersection(&HEADER).is_zero_sized());
                for (b, _) in &areas[i + 1..] {
                    assert!(a.intersection(b).is_zero_sized());
                }
            }
        }
    }

    #[test]
    fn test_card_value_area_inside_card() {
        for card in [HEART_CARD, STEPS_CARD] {
            let value = card_value_area(card);
            assert_eq!(value.intersection(&card), value);
            assert!(value.size.height > 20);
        }
    }
}
