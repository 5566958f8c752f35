use roci::{DriveCommand, Error, NavAction, Navigator, Operator};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::utils::{get_drive_command, send_drive_command, send_trigger};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct WebNavClientConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    "http://127.0.0.1:7878".to_owned()
}

impl Default for WebNavClientConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

/// Client of the navigation web bridge. One instance serves both the
/// continuous drive-command channel and the trigger requests.
#[derive(Debug, Clone)]
pub struct WebNavClient {
    base_url: Url,
}

impl WebNavClient {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn new_from_config(config: WebNavClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.url).map_err(|e| Error::InvalidConfig {
            message: format!("url {}: {e}", config.url),
        })?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Operator for WebNavClient {
    fn send_command(&self, command: &DriveCommand) -> Result<(), Error> {
        debug!("send_command: {command:?}");
        send_drive_command(&self.base_url, command)
    }

    fn current_command(&self) -> Result<DriveCommand, Error> {
        get_drive_command(&self.base_url)
    }
}

impl Navigator for WebNavClient {
    fn trigger(&self, action: NavAction) -> Result<(), Error> {
        debug!("trigger: {action}");
        send_trigger(&self.base_url, action)
    }
}
