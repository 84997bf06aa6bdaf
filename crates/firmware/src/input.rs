//! User button debouncing.
//!
//! The NUCLEO user button (PC13) is active-low and bounces for a few
//! milliseconds on each transition. [`Debouncer`] is fed one raw sample per
//! [`POLL_MS`] and reports an edge only once [`SETTLE_SAMPLES`] consecutive
//! samples agree. Pure logic, host-testable; `main.rs` owns the pin.

/// Interval between samples while the button is settling.
pub const POLL_MS: u64 = 5;

/// Consecutive identical samples needed to accept a new level (20 ms).
pub const SETTLE_SAMPLES: u8 = 4;

/// Upper bound on samples taken after one EXTI edge before giving up.
pub const MAX_SETTLE_POLLS: u8 = 20;

/// A debounced transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// The button went down.
    Pressed,
    /// The button came back up.
    Released,
}

/// Sample-counting debouncer for one button.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    pressed: bool,
    agreeing: u8,
}

impl Debouncer {
    /// A debouncer that starts in the released state.
    pub const fn new() -> Self {
        Self {
            pressed: false,
            agreeing: 0,
        }
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one raw sample (`true` = pressed).
    ///
    /// Returns the edge once the new level has held for
    /// [`SETTLE_SAMPLES`] samples in a row.
    pub fn sample(&mut self, raw_pressed: bool) -> Option<ButtonEdge> {
        if raw_pressed == self.pressed {
            self.agreeing = 0;
            return None;
        }
        self.agreeing = self.agreeing.saturating_add(1);
        if self.agreeing < SETTLE_SAMPLES {
            return None;
        }
        self.agreeing = 0;
        self.pressed = raw_pressed;
        Some(if raw_pressed {
            ButtonEdge::Pressed
        } else {
            ButtonEdge::Released
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(d: &mut Debouncer, samples: &[bool]) -> Vec<ButtonEdge> {
        samples.iter().filter_map(|&s| d.sample(s)).collect()
    }

    #[test]
    fn clean_press_is_reported_once() {
        let mut d = Debouncer::new();
        let edges = feed(&mut d, &[true; 10]);
        assert_eq!(edges, vec![ButtonEdge::Pressed]);
        assert!(d.is_pressed());
    }

    #[test]
    fn bounce_shorter_than_settle_window_is_ignored() {
        let mut d = Debouncer::new();
        let edges = feed(&mut d, &[true, false, true, true, false, false]);
        assert!(edges.is_empty());
        assert!(!d.is_pressed());
    }

    #[test]
    fn bouncy_press_then_release() {
        let mut d = Debouncer::new();
        let mut samples = vec![true, false, true];
        samples.extend([true; 4]);
        samples.extend([false, true]);
        samples.extend([false; 4]);
        assert_eq!(
            feed(&mut d, &samples),
            vec![ButtonEdge::Pressed, ButtonEdge::Released]
        );
    }

    #[test]
    fn settle_window_fits_poll_budget() {
        assert!(SETTLE_SAMPLES < MAX_SETTLE_POLLS);
        assert_eq!(u64::from(SETTLE_SAMPLES) * POLL_MS, 20);
    }
}
