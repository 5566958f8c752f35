use auto_impl::auto_impl;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Velocity and turn command consumed by the motion executor.
///
/// `mode` selects the executor's drive mode and is 1 while the
/// drive-mode button is held, 0 otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveCommand {
    pub turn: f64,
    pub velocity: f64,
    pub mode: u8,
}

impl DriveCommand {
    pub fn new(turn: f64, velocity: f64, mode: u8) -> Self {
        Self {
            turn,
            velocity,
            mode,
        }
    }
}

#[auto_impl(Box, Rc, Arc)]
pub trait Operator {
    fn send_command(&self, command: &DriveCommand) -> Result<(), Error>;
    fn current_command(&self) -> Result<DriveCommand, Error>;
}
