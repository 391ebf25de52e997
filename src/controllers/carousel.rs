use gloo_timers::callback::Interval;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TestimonialEntry {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel has no entries")]
    EmptyCollection,
    #[error("testimonial index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// A scheduled repeating callback that can be cancelled.
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for Interval {
    fn cancel(self) {
        // The returned closure is dropped right away, which releases the JS side.
        let _ = Interval::cancel(self);
    }
}

/// Testimonial rotation with an optional auto-advance timer.
///
/// The controller owns the timer handle. The first manual move cancels it and
/// auto-advance never comes back for this instance.
pub struct CarouselController<H: TimerHandle> {
    entries: Vec<TestimonialEntry>,
    current: usize,
    auto_advance: Option<H>,
}

impl<H: TimerHandle> CarouselController<H> {
    pub fn new(entries: Vec<TestimonialEntry>) -> Self {
        Self {
            entries,
            current: 0,
            auto_advance: None,
        }
    }

    /// Hands the controller the repeating timer that drives `tick`.
    pub fn with_auto_advance(mut self, handle: H) -> Self {
        self.cancel_auto_advance();
        self.auto_advance = Some(handle);
        self
    }

    pub fn entries(&self) -> &[TestimonialEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current_index() == Some(index)
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.auto_advance.is_some()
    }

    pub fn cancel_auto_advance(&mut self) {
        if let Some(handle) = self.auto_advance.take() {
            handle.cancel();
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        self.cancel_auto_advance();
        self.show(index)
    }

    pub fn next(&mut self) -> Result<usize, CarouselError> {
        self.cancel_auto_advance();
        self.advance()
    }

    pub fn previous(&mut self) -> Result<usize, CarouselError> {
        self.cancel_auto_advance();
        let len = self.non_empty_len()?;
        self.show((self.current + len - 1) % len)
    }

    /// Timer-driven advance. Does nothing once auto-advance is off.
    pub fn tick(&mut self) -> Result<Option<usize>, CarouselError> {
        if !self.auto_advance_enabled() {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    fn advance(&mut self) -> Result<usize, CarouselError> {
        let len = self.non_empty_len()?;
        self.show((self.current + 1) % len)
    }

    fn show(&mut self, index: usize) -> Result<usize, CarouselError> {
        let len = self.non_empty_len()?;
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        self.current = index;
        Ok(index)
    }

    fn non_empty_len(&self) -> Result<usize, CarouselError> {
        match self.entries.len() {
            0 => Err(CarouselError::EmptyCollection),
            len => Ok(len),
        }
    }
}

impl<H: TimerHandle> Drop for CarouselController<H> {
    fn drop(&mut self) {
        self.cancel_auto_advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl TimerHandle for FakeTimer {
        fn cancel(self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn entries(n: usize) -> Vec<TestimonialEntry> {
        (0..n)
            .map(|i| TestimonialEntry {
                quote: format!("Great service {}", i),
                author: format!("Customer {}", i),
                detail: String::new(),
            })
            .collect()
    }

    fn active_count(carousel: &CarouselController<FakeTimer>) -> usize {
        (0..carousel.len()).filter(|&i| carousel.is_active(i)).count()
    }

    #[test]
    fn test_ticks_cycle_through_entries() {
        let timer = FakeTimer::default();
        let mut carousel = CarouselController::new(entries(3)).with_auto_advance(timer.clone());
        for k in 1..=10 {
            assert_eq!(carousel.tick(), Ok(Some(k % 3)));
            assert_eq!(carousel.current_index(), Some(k % 3));
            assert_eq!(active_count(&carousel), 1);
        }
        assert_eq!(timer.cancelled.get(), 0);
    }

    #[test]
    fn test_manual_previous_disables_ticks_for_good() {
        let timer = FakeTimer::default();
        let mut carousel = CarouselController::new(entries(3)).with_auto_advance(timer.clone());
        carousel.tick().unwrap();
        assert_eq!(carousel.previous(), Ok(0));
        assert!(!carousel.auto_advance_enabled());
        assert_eq!(timer.cancelled.get(), 1);

        for _ in 0..5 {
            assert_eq!(carousel.tick(), Ok(None));
        }
        assert_eq!(carousel.current_index(), Some(0));

        // already cancelled, nothing left to cancel
        carousel.next().unwrap();
        carousel.cancel_auto_advance();
        assert_eq!(timer.cancelled.get(), 1);
    }

    #[test]
    fn test_dot_selection_disables_auto_advance() {
        let timer = FakeTimer::default();
        let mut carousel = CarouselController::new(entries(4)).with_auto_advance(timer.clone());
        assert_eq!(carousel.go_to(3), Ok(3));
        assert!(carousel.is_active(3));
        assert_eq!(active_count(&carousel), 1);
        assert_eq!(timer.cancelled.get(), 1);
    }

    #[test]
    fn test_go_to_out_of_range_keeps_current() {
        let mut carousel = CarouselController::<FakeTimer>::new(entries(2));
        assert_eq!(
            carousel.go_to(2),
            Err(CarouselError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn test_wraparound_and_round_trip() {
        let mut carousel = CarouselController::<FakeTimer>::new(entries(3));
        assert_eq!(carousel.previous(), Ok(2));
        assert_eq!(carousel.next(), Ok(0));
        for start in 0..3 {
            carousel.go_to(start).unwrap();
            carousel.next().unwrap();
            carousel.previous().unwrap();
            assert_eq!(carousel.current_index(), Some(start));
        }
    }

    #[test]
    fn test_empty_carousel() {
        let timer = FakeTimer::default();
        let mut carousel = CarouselController::new(Vec::new()).with_auto_advance(timer.clone());
        assert_eq!(carousel.tick(), Err(CarouselError::EmptyCollection));
        assert_eq!(carousel.current_index(), None);
        assert_eq!(active_count(&carousel), 0);
        assert_eq!(carousel.next(), Err(CarouselError::EmptyCollection));
        assert_eq!(carousel.previous(), Err(CarouselError::EmptyCollection));
        assert_eq!(carousel.go_to(0), Err(CarouselError::EmptyCollection));
        assert!(!carousel.auto_advance_enabled());
    }

    #[test]
    fn test_drop_cancels_timer() {
        let timer = FakeTimer::default();
        {
            let _carousel = CarouselController::new(entries(2)).with_auto_advance(timer.clone());
        }
        assert_eq!(timer.cancelled.get(), 1);
    }
}
