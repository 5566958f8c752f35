use std::fmt;

use auto_impl::auto_impl;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Zero-argument request for a state change of the navigation stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavAction {
    Stop,
    Pause,
    GetMap,
    StartExploration,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavAction::Stop => "stop",
            NavAction::Pause => "pause",
            NavAction::GetMap => "get_map",
            NavAction::StartExploration => "start_exploration",
        };
        f.write_str(name)
    }
}

#[auto_impl(Box, Arc)]
pub trait Navigator: Send + Sync {
    /// Requests `action` from the navigation stack and blocks until the
    /// peer answers. An explicit refusal is an error like any transport
    /// failure.
    fn trigger(&self, action: NavAction) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NavAction::Stop.to_string(), "stop");
        assert_eq!(NavAction::Pause.to_string(), "pause");
        assert_eq!(NavAction::GetMap.to_string(), "get_map");
        assert_eq!(
            NavAction::StartExploration.to_string(),
            "start_exploration"
        );
    }
}
