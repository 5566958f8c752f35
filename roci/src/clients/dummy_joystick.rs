use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{InputSample, Joystick};

/// Dummy Joystick for debug or tests.
#[derive(Debug)]
pub struct DummyJoystick {
    pub samples: Vec<InputSample>,
    index: Mutex<usize>,
    stopped: Mutex<bool>,
}

impl DummyJoystick {
    /// Creates a new `DummyJoystick` which yields the given samples in
    /// order, then reports the device as gone.
    pub fn new(samples: Vec<InputSample>) -> Self {
        Self {
            samples,
            index: Mutex::default(),
            stopped: Mutex::default(),
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock().unwrap()
    }
}

#[async_trait]
impl Joystick for DummyJoystick {
    async fn next_sample(&self) -> Option<InputSample> {
        if *self.stopped.lock().unwrap() {
            return None;
        }
        let mut index = self.index.lock().unwrap();
        let sample = self.samples.get(*index).cloned();
        if sample.is_some() {
            *index += 1;
        }
        sample
    }

    fn stop(&self) {
        *self.stopped.lock().unwrap() = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain() {
        let joystick = DummyJoystick::new(vec![
            InputSample::new(vec![0.1], vec![true]),
            InputSample::new(vec![0.2], vec![false]),
        ]);
        assert_eq!(
            joystick.next_sample().await,
            Some(InputSample::new(vec![0.1], vec![true]))
        );
        assert_eq!(
            joystick.next_sample().await,
            Some(InputSample::new(vec![0.2], vec![false]))
        );
        assert_eq!(joystick.next_sample().await, None);
    }

    #[tokio::test]
    async fn test_stop() {
        let joystick = DummyJoystick::new(vec![InputSample::default()]);
        assert!(!joystick.is_stopped());
        joystick.stop();
        assert!(joystick.is_stopped());
        assert_eq!(joystick.next_sample().await, None);
    }
}
