mod joystick;
mod navigator;
mod operator;

pub use joystick::*;
pub use navigator::*;
pub use operator::*;
