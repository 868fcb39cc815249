//! Testimonial carousel.
//!
//! [`CarouselState`] is the plain state: a cyclic index over `len` items, the
//! auto-play flag and the direction of the last move. It knows nothing about
//! time. [`CarouselController`] wraps it with the auto-advance timer.
//!
//! The index and the auto-play flag are independent fields. Every operation
//! keeps `current_index < len`; only manual navigation touches the flag.

mod controller;

pub use controller::CarouselController;

use crate::error::CarouselError;

/// Sign of the last index change, used only to pick enter/exit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current_index: usize,
    is_auto_playing: bool,
    direction: Direction,
}

impl CarouselState {
    /// A carousel over `len` items, starting at the first one with auto-play on.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current_index: 0,
            is_auto_playing: true,
            direction: Direction::None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether advancing can change anything at all.
    pub fn can_advance(&self) -> bool {
        self.len > 1
    }

    /// User-triggered forward move. Pauses auto-play.
    pub fn next(&mut self) {
        self.is_auto_playing = false;
        self.step_forward();
    }

    /// User-triggered backward move. Pauses auto-play.
    pub fn previous(&mut self) {
        self.is_auto_playing = false;
        if !self.can_advance() {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.len - 1
        } else {
            self.current_index - 1
        };
        self.direction = Direction::Backward;
    }

    /// Jump to `index`. Pauses auto-play.
    ///
    /// An out-of-range index is rejected and leaves the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.is_auto_playing = false;
        self.direction = match index.cmp(&self.current_index) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
            std::cmp::Ordering::Greater => Direction::Forward,
        };
        self.current_index = index;
        Ok(())
    }

    /// Timer-driven move. Leaves auto-play untouched.
    pub fn auto_advance(&mut self) {
        self.step_forward();
    }

    pub fn set_auto_play(&mut self, on: bool) {
        self.is_auto_playing = on;
    }

    pub fn toggle_auto_play(&mut self) {
        self.is_auto_playing = !self.is_auto_playing;
    }

    fn step_forward(&mut self) {
        if !self.can_advance() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.len;
        self.direction = Direction::Forward;
    }
}

/// Outcome of a finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
}

impl Swipe {
    /// Classify a drag by its swipe power, `|offset| * velocity`.
    ///
    /// A fast leftward flick (negative velocity) goes to the next item, a
    /// rightward one to the previous item. Anything within `threshold` is
    /// treated as an accidental drag.
    pub fn classify(offset_px: f64, velocity_px_per_s: f64, threshold: f64) -> Option<Swipe> {
        let power = offset_px.abs() * velocity_px_per_s;
        if power < -threshold {
            Some(Swipe::Next)
        } else if power > threshold {
            Some(Swipe::Previous)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn starts_at_zero_with_auto_play() {
        let carousel = CarouselState::new(5).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_auto_playing());
        assert_eq!(carousel.direction(), Direction::None);
    }

    #[test]
    fn next_wraps_and_pauses() {
        let mut carousel = CarouselState::new(3).unwrap();
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn previous_wraps_from_zero_to_last() {
        let mut carousel = CarouselState::new(5).unwrap();
        carousel.previous();
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.direction(), Direction::Backward);
        assert!(!carousel.is_auto_playing());
    }

    proptest! {
        #[test]
        fn next_then_previous_is_identity((len, start) in (2usize..64).prop_flat_map(|len| (Just(len), 0..len))) {
            let mut carousel = CarouselState::new(len).unwrap();
            carousel.go_to(start).unwrap();
            carousel.next();
            carousel.previous();
            prop_assert_eq!(carousel.current_index(), start);
        }

        #[test]
        fn index_stays_in_range_for_any_sequence(len in 1usize..32, ops in vec(0u8..3, 0..500)) {
            let mut carousel = CarouselState::new(len).unwrap();
            for op in ops {
                match op {
                    0 => carousel.next(),
                    1 => carousel.previous(),
                    _ => carousel.auto_advance(),
                }
                prop_assert!(carousel.current_index() < len);
            }
        }
    }

    #[test]
    fn go_to_sets_exact_index_and_pauses() {
        let mut carousel = CarouselState::new(5).unwrap();
        carousel.go_to(3).unwrap();
        assert_eq!(carousel.current_index(), 3);
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.direction(), Direction::Forward);

        carousel.go_to(1).unwrap();
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn go_to_out_of_range_leaves_state_alone() {
        let mut carousel = CarouselState::new(3).unwrap();
        let before = carousel;
        assert_eq!(
            carousel.go_to(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel, before);
    }

    #[test]
    fn single_item_navigation_keeps_index() {
        let mut carousel = CarouselState::new(1).unwrap();
        carousel.next();
        carousel.previous();
        carousel.auto_advance();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::None);
    }

    #[test]
    fn auto_advance_keeps_auto_play() {
        let mut carousel = CarouselState::new(4).unwrap();
        carousel.auto_advance();
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn toggle_flips_flag_only() {
        let mut carousel = CarouselState::new(4).unwrap();
        carousel.auto_advance();
        carousel.toggle_auto_play();
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.current_index(), 1);
        carousel.toggle_auto_play();
        assert!(carousel.is_auto_playing());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn swipe_respects_threshold_both_ways() {
        assert_eq!(Swipe::classify(-200.0, -100.0, 10_000.0), Some(Swipe::Next));
        assert_eq!(Swipe::classify(200.0, 100.0, 10_000.0), Some(Swipe::Previous));
        assert_eq!(Swipe::classify(50.0, 100.0, 10_000.0), None);
        assert_eq!(Swipe::classify(-100.0, -100.0, 10_000.0), None);
    }
}
