//! Button identifiers and the debounced input adapter.
//!
//! The navigator only ever asks "was this button just pressed?". The
//! [`ButtonPad`] answers that from raw active-low pin levels: each
//! button gets its own edge-triggered [`Debouncer`], and accepted
//! presses are latched until polled.

use crate::config::BUTTON_DEBOUNCE_MS;

/// The six physical buttons, in the order they are polled each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button A.
    Select,
    /// Button B.
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Button {
    /// Poll and dispatch order.
    pub const ALL: [Button; 6] = [
        Button::Select,
        Button::Back,
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of buttons pressed during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Remove `button`, returning whether it was present.
    pub fn take(&mut self, button: Button) -> bool {
        let present = self.contains(button);
        self.0 &= !button.bit();
        present
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in poll order.
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::empty();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Debounced press source consumed by the navigator.
///
/// `poll_pressed` must return `true` at most once per physical press.
pub trait ButtonInput {
    fn poll_pressed(&mut self, button: Button) -> bool;

    /// Poll every button once, in [`Button::ALL`] order.
    fn poll_all(&mut self) -> ButtonSet {
        Button::ALL
            .into_iter()
            .filter(|b| self.poll_pressed(*b))
            .collect()
    }
}

/// Raw pin levels. `true` means the button is physically held down.
pub trait RawButtons {
    fn is_down(&mut self, button: Button) -> bool;
}

/// Edge-triggered debouncer for a single button.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    held: bool,
    last_press_ms: Option<u64>,
    window_ms: u64,
}

impl Debouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            held: false,
            last_press_ms: None,
            window_ms,
        }
    }

    /// Feed the current level; returns `true` when a new press is accepted.
    ///
    /// A press is a released→held edge at least `window_ms` after the
    /// previous accepted press. Edges inside the window are contact
    /// bounce and are swallowed, but still mark the button as held so a
    /// long hold never reports twice.
    pub fn update(&mut self, is_down: bool, now_ms: u64) -> bool {
        let edge = is_down && !self.held;
        self.held = is_down;
        if !edge {
            return false;
        }

        let outside_window = match self.last_press_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.window_ms,
            None => true,
        };
        if outside_window {
            self.last_press_ms = Some(now_ms);
        }
        outside_window
    }
}

/// Six debounced buttons over a raw pin source.
pub struct ButtonPad<R> {
    raw: R,
    debouncers: [Debouncer; 6],
    pending: ButtonSet,
}

impl<R: RawButtons> ButtonPad<R> {
    pub fn new(raw: R) -> Self {
        Self::with_window(raw, BUTTON_DEBOUNCE_MS)
    }

    pub fn with_window(raw: R, window_ms: u64) -> Self {
        Self {
            raw,
            debouncers: [Debouncer::new(window_ms); 6],
            pending: ButtonSet::empty(),
        }
    }

    /// Sample every pin once and latch newly accepted presses.
    pub fn sample(&mut self, now_ms: u64) {
        for button in Button::ALL {
            let down = self.raw.is_down(button);
            if self.debouncers[button as usize].update(down, now_ms) {
                self.pending.insert(button);
            }
        }
    }

    pub fn raw_mut(&mut self) -> &mut R {
        &mut self.raw
    }
}

impl<R: RawButtons> ButtonInput for ButtonPad<R> {
    fn poll_pressed(&mut self, button: Button) -> bool {
        self.pending.take(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Levels([bool; 6]);

    impl RawButtons for Levels {
        fn is_down(&mut self, button: Button) -> bool {
            self.0[button as usize]
        }
    }

    #[test]
    fn debouncer_accepts_first_edge() {
        let mut d = Debouncer::new(75);
        assert!(d.update(true, 1_000));
    }

    #[test]
    fn debouncer_reports_a_hold_once() {
        let mut d = Debouncer::new(75);
        assert!(d.update(true, 0));
        for t in (10..1_000).step_by(10) {
            assert!(!d.update(true, t));
        }
    }

    #[test]
    fn debouncer_rejects_bounce_inside_window() {
        let mut d = Debouncer::new(75);
        assert!(d.update(true, 100));
        assert!(!d.update(false, 110));
        assert!(!d.update(true, 120));
        assert!(!d.update(false, 130));
        // Held through the end of the window: still no second report.
        assert!(!d.update(true, 140));
        assert!(!d.update(true, 200));
    }

    #[test]
    fn debouncer_accepts_second_press_after_window() {
        let mut d = Debouncer::new(75);
        assert!(d.update(true, 100));
        assert!(!d.update(false, 150));
        assert!(d.update(true, 175));
    }

    #[test]
    fn button_set_iterates_in_poll_order() {
        let set: ButtonSet = [Button::Down, Button::Select, Button::Left]
            .into_iter()
            .collect();
        let order: heapless::Vec<Button, 6> = set.iter().collect();
        assert_eq!(
            order.as_slice(),
            [Button::Select, Button::Left, Button::Down]
        );
    }

    #[test]
    fn button_set_take_clears_member() {
        let mut set = ButtonSet::empty();
        set.insert(Button::Back);
        assert!(set.take(Button::Back));
        assert!(!set.take(Button::Back));
        assert!(set.is_empty());
    }

    #[test]
    fn pad_latches_until_polled() {
        let mut pad = ButtonPad::with_window(Levels::default(), 75);
        pad.raw_mut().0[Button::Right as usize] = true;
        pad.sample(0);
        assert!(pad.poll_pressed(Button::Right));
        assert!(!pad.poll_pressed(Button::Right));
        assert!(!pad.poll_pressed(Button::Left));
    }

    #[test]
    fn pad_poll_all_collects_simultaneous_presses() {
        let mut pad = ButtonPad::with_window(Levels::default(), 75);
        pad.raw_mut().0[Button::Select as usize] = true;
        pad.raw_mut().0[Button::Up as usize] = true;
        pad.sample(0);
        let pressed = pad.poll_all();
        assert!(pressed.contains(Button::Select));
        assert!(pressed.contains(Button::Up));
        assert!(!pressed.contains(Button::Back));
        assert!(pad.poll_all().is_empty());
    }

    #[test]
    fn pad_debounces_each_button_independently() {
        let mut pad = ButtonPad::with_window(Levels::default(), 75);
        pad.raw_mut().0[Button::Left as usize] = true;
        pad.sample(0);
        pad.raw_mut().0[Button::Right as usize] = true;
        pad.sample(10);
        let pressed = pad.poll_all();
        assert!(pressed.contains(Button::Left));
        assert!(pressed.contains(Button::Right));
    }
}
