use async_trait::async_trait;
use auto_impl::auto_impl;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One reading of every axis and button of an input device at a point
/// in time. Axes and buttons are addressed by position, the way the
/// device driver reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    pub axes: Vec<f64>,
    pub buttons: Vec<bool>,
}

impl InputSample {
    pub fn new(axes: Vec<f64>, buttons: Vec<bool>) -> Self {
        Self { axes, buttons }
    }

    /// Returns the axis value at `index`, or an error when the sample
    /// carries fewer axes than the configured layout expects.
    pub fn axis(&self, index: usize) -> Result<f64, Error> {
        self.axes.get(index).copied().ok_or(Error::SampleTooShort {
            kind: "axes",
            index,
            len: self.axes.len(),
        })
    }

    /// Returns the button state at `index`, or an error when the sample
    /// carries fewer buttons than the configured layout expects.
    pub fn button(&self, index: usize) -> Result<bool, Error> {
        self.buttons
            .get(index)
            .copied()
            .ok_or(Error::SampleTooShort {
                kind: "buttons",
                index,
                len: self.buttons.len(),
            })
    }
}

#[async_trait]
#[auto_impl(Box, Arc)]
pub trait Joystick: Send + Sync {
    /// Waits for the next sample. `None` means the device is gone and
    /// no further samples will arrive.
    async fn next_sample(&self) -> Option<InputSample>;
    fn stop(&self);
}
