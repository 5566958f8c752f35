mod dummy_joystick;
mod dummy_navigator;
mod dummy_operator;

pub use dummy_joystick::*;
pub use dummy_navigator::*;
pub use dummy_operator::*;
