use std::sync::Mutex;

use crate::error::Error;
use crate::traits::{NavAction, Navigator};

/// Dummy Navigator for debug or tests. Records every trigger request.
/// A failure message can be injected to exercise error paths; when set,
/// `trigger` still records the request but returns `Error::Rejected`.
#[derive(Debug, Default)]
pub struct DummyNavigator {
    requests: Mutex<Vec<NavAction>>,
    fail_message: Mutex<Option<String>>,
}

impl DummyNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: &str) {
        *self.fail_message.lock().unwrap() = Some(message.to_owned());
    }

    pub fn requests(&self) -> Vec<NavAction> {
        self.requests.lock().unwrap().clone()
    }
}

impl Navigator for DummyNavigator {
    fn trigger(&self, action: NavAction) -> Result<(), Error> {
        self.requests.lock().unwrap().push(action);
        match self.fail_message.lock().unwrap().as_ref() {
            Some(message) => Err(Error::Rejected {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
