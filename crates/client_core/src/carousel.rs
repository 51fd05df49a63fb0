use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tokio::{sync::watch, time::Instant};

use crate::deferred::DeferredTask;

pub const ROTATION_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("testimonial {index} is out of range (have {len})")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialCarousel {
    len: usize,
    current: usize,
}

impl TestimonialCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn select(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Starts advancing on a fixed interval. Rotation stops when the
    /// returned handle is dropped.
    pub fn spawn_rotation(self, interval: Duration) -> CarouselRotation {
        let (state, _) = watch::channel(self);
        let state = Arc::new(state);
        let ticker_state = state.clone();
        let task = DeferredTask::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            loop {
                ticker.tick().await;
                ticker_state.send_modify(|carousel| {
                    carousel.advance();
                });
            }
        });
        CarouselRotation { state, _task: task }
    }
}

pub struct CarouselRotation {
    state: Arc<watch::Sender<TestimonialCarousel>>,
    _task: DeferredTask,
}

impl CarouselRotation {
    pub fn current(&self) -> usize {
        self.state.borrow().current()
    }

    /// Jumps to a testimonial. The rotation timer keeps its cadence.
    pub fn select(&self, index: usize) -> Result<(), OutOfRange> {
        let mut result = Ok(());
        self.state.send_if_modified(|carousel| {
            result = carousel.select(index);
            result.is_ok()
        });
        result
    }

    pub fn subscribe(&self) -> watch::Receiver<TestimonialCarousel> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around() {
        let mut carousel = TestimonialCarousel::new(3);
        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 2);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = TestimonialCarousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.select(0), Err(OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut carousel = TestimonialCarousel::new(3);
        carousel.select(2).expect("in range");
        assert_eq!(carousel.current(), 2);
        assert!(carousel.select(3).is_err());
        assert_eq!(carousel.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn rotation_advances_on_the_interval() {
        let rotation = TestimonialCarousel::new(3).spawn_rotation(ROTATION_INTERVAL);
        assert_eq!(rotation.current(), 0);

        tokio::time::sleep(ROTATION_INTERVAL + Duration::from_millis(1)).await;
        assert_eq!(rotation.current(), 1);

        tokio::time::sleep(ROTATION_INTERVAL * 2).await;
        assert_eq!(rotation.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_selection_keeps_rotating_from_the_new_index() {
        let rotation = TestimonialCarousel::new(3).spawn_rotation(ROTATION_INTERVAL);
        tokio::time::sleep(Duration::from_millis(100)).await;
        rotation.select(2).expect("select");
        assert_eq!(rotation.current(), 2);

        tokio::time::sleep(ROTATION_INTERVAL).await;
        assert_eq!(rotation.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_rotation_stops_the_timer() {
        let rotation = TestimonialCarousel::new(3).spawn_rotation(ROTATION_INTERVAL);
        let watcher = rotation.subscribe();
        drop(rotation);

        tokio::time::sleep(ROTATION_INTERVAL * 3).await;
        assert_eq!(watcher.borrow().current(), 0);
    }
}
