//! Drawing helpers shared by the screens

use core::fmt;

use embedded_graphics::{
    geometry::Size,
    mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};

/// Text centred on its anchor point
fn centered() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

/// Text starting at its anchor point, vertically centred
fn left_middle() -> TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Left)
        .baseline(Baseline::Middle)
        .build()
}

/// Format into `buf`, falling back to a placeholder if it does not fit
pub fn show<'a>(buf: &'a mut [u8], args: fmt::Arguments) -> &'a str {
    format_no_std::show(buf, args).unwrap_or("--")
}

/// Pill-shaped button with a centred label
pub fn button<D>(
    target: &mut D,
    area: Rectangle,
    label: &str,
    font: &MonoFont<'_>,
    fill: Rgb565,
    text: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = area.size.height / 2;
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(target)?;
    Text::with_text_style(label, area.center(), MonoTextStyle::new(font, text), centered())
        .draw(target)?;
    Ok(())
}

/// Rounded card background
pub fn card<D>(target: &mut D, area: Rectangle, fill: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(target)
}

/// Centred text at `anchor`
pub fn text_centered<D>(
    target: &mut D,
    label: &str,
    anchor: Point,
    font: &MonoFont<'_>,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(label, anchor, MonoTextStyle::new(font, color), centered())
        .draw(target)?;
    Ok(())
}

/// Clear `area` to `background`, then draw `label` in it.
///
/// Used for labels whose width changes between redraws.
pub fn value<D>(
    target: &mut D,
    area: Rectangle,
    label: &str,
    font: &MonoFont<'_>,
    color: Rgb565,
    background: Rgb565,
    center: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&area, background)?;

    let style = MonoTextStyle::new(font, color);
    if center {
        Text::with_text_style(label, area.center(), style, centered()).draw(target)?;
    } else {
        let anchor = Point::new(area.top_left.x, area.center().y);
        Text::with_text_style(label, anchor, style, left_middle()).draw(target)?;
    }
    Ok(())
}

/// Draw `label` centred in `area` over its own background.
///
/// Only the glyph cells are written, so the label must keep the same width
/// between redraws.
pub fn fixed_value<D>(
    target: &mut D,
    area: Rectangle,
    label: &str,
    font: &MonoFont<'_>,
    color: Rgb565,
    background: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyleBuilder::new()
        .font(font)
        .text_color(color)
        .background_color(background)
        .build();
    Text::with_text_style(label, area.center(), style, centered()).draw(target)?;
    Ok(())
}
