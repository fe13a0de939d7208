//! Menu screen renderers.
//!
//! Each function draws one complete frame: clear, draw, present.
//! Layout assumes the 128×64 canvas described in [`crate::config`].

use core::fmt::Write;

use heapless::String;

use crate::config::{
    CLOSE_MARKER, DISPLAY_HEIGHT, DISPLAY_WIDTH, FIRMWARE_TITLE, FRAME_RADIUS, LIST_ROW_HEIGHT,
    LIST_START_Y, TITLE_BAR_HEIGHT, TRANSMISSION_TITLE,
};
use crate::menu::catalog::{Category, MenuEntry};
use crate::ui::canvas::{Canvas, Font};

/// Function screen title bar is slimmer than the menu one.
const FUNCTION_TITLE_BAR_HEIGHT: i32 = 10;
const FUNCTION_TITLE_BAR_RADIUS: i32 = 3;

/// Outer frame plus menu title bar.
fn draw_chrome<C: Canvas>(canvas: &mut C) -> Result<(), C::Error> {
    canvas.draw_frame(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, FRAME_RADIUS)?;
    canvas.draw_frame(0, 0, DISPLAY_WIDTH, TITLE_BAR_HEIGHT, FRAME_RADIUS)
}

/// Main menu: one category at a time with its icon and side chevrons.
pub fn draw_main_menu<C: Canvas>(canvas: &mut C, category: Category) -> Result<(), C::Error> {
    canvas.clear()?;
    draw_chrome(canvas)?;

    canvas.set_font(Font::Tiny);
    canvas.draw_text(4, 9, FIRMWARE_TITLE)?;
    canvas.draw_text(110, 8, CLOSE_MARKER)?;
    canvas.draw_text(119, 55, ">")?;
    canvas.draw_text(5, 55, "<")?;

    canvas.set_font(Font::Headline);
    let label = category.label();
    let label_width = canvas.text_width(label);
    canvas.draw_text(DISPLAY_WIDTH / 2 - label_width / 2, 58, label)?;

    let icon = category.icon();
    let icon_width = canvas.text_width(icon);
    canvas.draw_text((DISPLAY_WIDTH - icon_width) / 2, 35, icon)?;

    canvas.present()
}

/// Vertical list with a cursor on `selected`.
fn draw_list<C: Canvas>(
    canvas: &mut C,
    title: &str,
    items: &[MenuEntry],
    selected: usize,
) -> Result<(), C::Error> {
    canvas.clear()?;
    draw_chrome(canvas)?;

    canvas.set_font(Font::Tiny);
    canvas.draw_text(5, 9, title)?;
    canvas.draw_text(110, 8, CLOSE_MARKER)?;

    for (row, entry) in items.iter().enumerate() {
        let y = LIST_START_Y + row as i32 * LIST_ROW_HEIGHT;
        if row == selected {
            canvas.set_font(Font::Tiny);
            canvas.draw_text(4, y, ">")?;
        }
        canvas.set_font(Font::List);
        canvas.draw_text(12, y, entry.label)?;
    }

    canvas.present()
}

/// Category submenu; the title echoes the highlighted entry.
pub fn draw_category_menu<C: Canvas>(
    canvas: &mut C,
    category: Category,
    selected: usize,
) -> Result<(), C::Error> {
    let items = category.items();
    // Matches the 20-byte title buffer of the device: 19 glyphs max.
    let mut title: String<19> = String::new();
    push_truncated(&mut title, ":// ");
    push_truncated(&mut title, items[selected].label);
    draw_list(canvas, &title, items, selected)
}

/// Infrared transmission submenu with its fixed title.
pub fn draw_transmission_menu<C: Canvas>(
    canvas: &mut C,
    items: &[MenuEntry],
    selected: usize,
) -> Result<(), C::Error> {
    draw_list(canvas, TRANSMISSION_TITLE, items, selected)
}

/// Function screen for the selected leaf of `category`.
pub fn draw_function_screen<C: Canvas>(
    canvas: &mut C,
    category: Category,
    selected: usize,
) -> Result<(), C::Error> {
    canvas.clear()?;
    canvas.draw_frame(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT, FRAME_RADIUS)?;
    canvas.draw_frame(
        0,
        0,
        DISPLAY_WIDTH,
        FUNCTION_TITLE_BAR_HEIGHT,
        FUNCTION_TITLE_BAR_RADIUS,
    )?;

    canvas.set_font(Font::Tiny);
    canvas.draw_text(109, 7, CLOSE_MARKER)?;

    let mut title: String<29> = String::new();
    push_truncated(&mut title, category.label());
    push_truncated(&mut title, ":");
    push_truncated(&mut title, category.items()[selected].label);
    canvas.draw_text(8, 8, &title)?;

    canvas.set_font(Font::Status);
    canvas.draw_text(111, 23, category.icon())?;

    canvas.present()
}

/// Append as much of `text` as fits.
pub(crate) fn push_truncated<const N: usize>(buf: &mut String<N>, text: &str) {
    for c in text.chars() {
        if buf.push(c).is_err() {
            break;
        }
    }
}

/// Format into a fixed buffer, dropping whatever does not fit.
pub(crate) fn format_line<const N: usize>(args: core::fmt::Arguments<'_>) -> String<N> {
    struct Truncating<'a, const N: usize>(&'a mut String<N>);

    impl<const N: usize> Write for Truncating<'_, N> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            push_truncated(self.0, s);
            Ok(())
        }
    }

    let mut line = String::new();
    let _ = Truncating(&mut line).write_fmt(args);
    line
}
