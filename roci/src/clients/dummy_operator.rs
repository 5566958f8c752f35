use std::cell::RefCell;

use crate::error::Error;
use crate::traits::{DriveCommand, Operator};

/// Dummy Operator for debug or tests. Records every sent command.
#[derive(Clone, Debug, Default)]
pub struct DummyOperator {
    pub commands: RefCell<Vec<DriveCommand>>,
}

impl DummyOperator {
    pub fn new() -> Self {
        Self {
            commands: RefCell::new(vec![]),
        }
    }

    pub fn sent_commands(&self) -> Vec<DriveCommand> {
        self.commands.borrow().clone()
    }
}

impl Operator for DummyOperator {
    fn send_command(&self, command: &DriveCommand) -> Result<(), Error> {
        self.commands.borrow_mut().push(command.to_owned());
        Ok(())
    }

    fn current_command(&self) -> Result<DriveCommand, Error> {
        Ok(self.commands.borrow().last().copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_set_get() {
        let operator = DummyOperator::new();
        let command = operator.current_command().unwrap();
        assert_approx_eq!(command.turn, 0.0);
        assert_approx_eq!(command.velocity, 0.0);
        assert_eq!(command.mode, 0);
        operator
            .send_command(&DriveCommand::new(0.1, -0.2, 1))
            .unwrap();
        let command = operator.current_command().unwrap();
        assert_approx_eq!(command.turn, 0.1);
        assert_approx_eq!(command.velocity, -0.2);
        assert_eq!(command.mode, 1);
        assert_eq!(operator.sent_commands().len(), 1);
    }
}
