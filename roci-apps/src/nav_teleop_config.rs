use std::path::Path;

use roci_joystick_gilrs::GilJoystickConfig;
use roci_teleop::TeleopNodeConfig;
use roci_web::WebNavClientConfig;
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct NavTeleopConfig {
    #[serde(default)]
    pub teleop_node_config: TeleopNodeConfig,
    #[serde(default)]
    pub gil_joystick_config: GilJoystickConfig,
    #[serde(default)]
    pub web_client_config: WebNavClientConfig,
}

impl NavTeleopConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))
    }
}
