//! Integration tests for neoos host-testable logic.
//!
//! Everything here goes through the public API only: a recording canvas
//! stands in for the OLED and scripted pins stand in for the buttons.

use std::collections::VecDeque;

use neoos::actions::gpio::PinBank;
use neoos::actions::{ActionDispatch, CallbackTable, DeviceActions};
use neoos::menu::{Category, MenuNavigator, Screen};
use neoos::ui::input::RawButtons;
use neoos::ui::{Button, ButtonInput, ButtonPad, ButtonSet, Canvas, Font};
use neoos::Error;

// ═══════════════════════════════════════════════════════════════════
// Test doubles
// ═══════════════════════════════════════════════════════════════════

/// Keeps every string drawn since the last `clear`.
#[derive(Default)]
struct TextLog {
    texts: Vec<(i32, i32, String)>,
    presents: usize,
}

impl TextLog {
    fn has(&self, text: &str) -> bool {
        self.texts.iter().any(|(_, _, t)| t == text)
    }

    fn at(&self, text: &str) -> Option<(i32, i32)> {
        self.texts
            .iter()
            .find(|(_, _, t)| t == text)
            .map(|(x, y, _)| (*x, *y))
    }
}

impl Canvas for TextLog {
    type Error = ();

    fn clear(&mut self) -> Result<(), ()> {
        self.texts.clear();
        Ok(())
    }

    fn present(&mut self) -> Result<(), ()> {
        self.presents += 1;
        Ok(())
    }

    fn draw_frame(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _r: i32) -> Result<(), ()> {
        Ok(())
    }

    fn set_font(&mut self, _font: Font) {}

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), ()> {
        self.texts.push((x, y, text.to_string()));
        Ok(())
    }

    fn text_width(&self, text: &str) -> i32 {
        text.len() as i32 * 6
    }
}

/// One queued set of presses per tick.
struct Script(VecDeque<ButtonSet>);

impl Script {
    fn new(ticks: &[&[Button]]) -> Self {
        Self(
            ticks
                .iter()
                .map(|presses| presses.iter().copied().collect())
                .collect(),
        )
    }
}

impl ButtonInput for Script {
    fn poll_pressed(&mut self, _button: Button) -> bool {
        false
    }

    fn poll_all(&mut self) -> ButtonSet {
        self.0.pop_front().unwrap_or_default()
    }
}

/// Physical levels of the six buttons, set directly by the test.
#[derive(Default)]
struct Levels([bool; 6]);

impl RawButtons for Levels {
    fn is_down(&mut self, button: Button) -> bool {
        self.0[button as usize]
    }
}

#[derive(Default)]
struct Header([bool; 5]);

impl PinBank for Header {
    fn read(&mut self, slot: usize) -> Result<bool, Error> {
        Ok(self.0[slot])
    }

    fn write(&mut self, slot: usize, high: bool) -> Result<(), Error> {
        self.0[slot] = high;
        Ok(())
    }
}

fn run<A: ActionDispatch>(
    nav: &mut MenuNavigator<A>,
    canvas: &mut TextLog,
    ticks: &[&[Button]],
) {
    let mut script = Script::new(ticks);
    for _ in 0..ticks.len() {
        nav.tick(&mut script, canvas).unwrap();
    }
}

// ═══════════════════════════════════════════════════════════════════
// Navigation through the public API
// ═══════════════════════════════════════════════════════════════════

#[test]
fn infrared_transmission_walkthrough() {
    use Button::*;

    let mut nav = MenuNavigator::new(CallbackTable::new());
    let mut canvas = TextLog::default();

    run(&mut nav, &mut canvas, &[&[Right], &[Right]]);
    assert_eq!(nav.state().category(), Category::Infrared);
    assert!(canvas.has("INFRARED"));

    run(&mut nav, &mut canvas, &[&[Select]]);
    assert_eq!(nav.state().screen(), Screen::CategorySubMenu);
    assert_eq!(nav.state().sub_index(), 0);
    // The list title follows the highlighted row, not the category.
    assert_eq!(canvas.at(":// TRANSMISSION"), Some((5, 9)));
    for label in ["TRANSMISSION", "RECIEVE", "LIBRARY", "BOMBARDMENT", "BACK"] {
        assert!(canvas.has(label), "missing {label}");
    }

    run(&mut nav, &mut canvas, &[&[Select]]);
    assert_eq!(nav.state().screen(), Screen::TransmissionSubMenu);
    assert_eq!(nav.state().transmission_index(), 0);
    assert!(canvas.has(":// INFRARED TRANSMISSION"));

    run(&mut nav, &mut canvas, &[&[Right], &[Right]]);
    assert_eq!(nav.state().transmission_index(), 2);
    assert_eq!(nav.state().selected_transmission_entry().label, "BURST SEND");

    run(&mut nav, &mut canvas, &[&[Back]]);
    assert_eq!(nav.state().screen(), Screen::CategorySubMenu);
    assert_eq!(nav.state().sub_index(), 0);
    assert!(nav.running().is_none());
}

#[test]
fn every_tick_presents_one_frame() {
    let mut nav = MenuNavigator::new(CallbackTable::new());
    let mut canvas = TextLog::default();

    run(&mut nav, &mut canvas, &[&[], &[Button::Down], &[]]);
    assert_eq!(canvas.presents, 3);
    assert_eq!(nav.state().category(), Category::Ble);
}

// ═══════════════════════════════════════════════════════════════════
// Device actions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn burst_send_runs_until_back_then_returns_to_transmission_menu() {
    use Button::*;

    let mut nav = MenuNavigator::new(DeviceActions::new(Header::default()));
    let mut canvas = TextLog::default();

    run(
        &mut nav,
        &mut canvas,
        &[&[Right], &[Right], &[Select], &[Select], &[Down], &[Down]],
    );
    assert_eq!(nav.state().transmission_index(), 2);

    run(&mut nav, &mut canvas, &[&[Select]]);
    assert!(nav.running().is_some());
    assert!(canvas.has("BURST SEND MODE"));
    assert!(canvas.has("Burst Count: 0"));

    // Navigation presses belong to the action while it runs.
    run(&mut nav, &mut canvas, &[&[Left], &[], &[Up]]);
    assert!(nav.running().is_some());
    assert_eq!(nav.state().transmission_index(), 2);
    assert!(canvas.has("Burst Count: 3"));
    assert_eq!(canvas.at("Press B to exit"), Some((10, 50)));

    run(&mut nav, &mut canvas, &[&[Back]]);
    assert!(nav.running().is_none());
    assert_eq!(nav.state().screen(), Screen::TransmissionSubMenu);
    assert_eq!(nav.state().transmission_index(), 0);
    assert!(canvas.has(":// INFRARED TRANSMISSION"));
}

#[test]
fn gpio_toggle_inverts_header_pins() {
    use Button::*;

    let mut nav = MenuNavigator::new(DeviceActions::new(Header([true, false, false, true, false])));
    let mut canvas = TextLog::default();

    // GPIO is the fifth category; TOGGLE is its third item.
    run(
        &mut nav,
        &mut canvas,
        &[&[Left], &[Left], &[Select], &[Down], &[Down], &[Select]],
    );
    assert_eq!(nav.state().screen(), Screen::FunctionScreen);
    assert!(canvas.has("GPIO:TOGGLE"));

    run(&mut nav, &mut canvas, &[&[Select]]);
    assert!(nav.running().is_some());
    assert!(canvas.has("GPIO TOGGLE MODE"));
    assert_eq!(nav.actions_mut().pins_mut().0, [false, true, true, false, true]);

    run(&mut nav, &mut canvas, &[&[Back]]);
    assert!(nav.running().is_none());
    assert_eq!(nav.state().screen(), Screen::FunctionScreen);
}

// ═══════════════════════════════════════════════════════════════════
// Debounced input
// ═══════════════════════════════════════════════════════════════════

#[test]
fn held_button_moves_the_carousel_once() {
    let mut nav = MenuNavigator::new(CallbackTable::new());
    let mut canvas = TextLog::default();
    let mut pad = ButtonPad::new(Levels::default());

    pad.raw_mut().0[Button::Right as usize] = true;
    for now in (0..500).step_by(50) {
        pad.sample(now);
        nav.tick(&mut pad, &mut canvas).unwrap();
    }

    assert_eq!(nav.state().category_index(), 1);
}

#[test]
fn bounce_inside_window_is_swallowed() {
    let mut nav = MenuNavigator::new(CallbackTable::new());
    let mut canvas = TextLog::default();
    let mut pad = ButtonPad::new(Levels::default());
    let right = Button::Right as usize;

    // down, up, down within 75 ms: one press. Down again at 150 ms: another.
    for (now, down) in [(0, true), (20, false), (40, true), (100, false), (150, true)] {
        pad.raw_mut().0[right] = down;
        pad.sample(now);
        nav.tick(&mut pad, &mut canvas).unwrap();
    }

    assert_eq!(nav.state().category_index(), 2);
}
