use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use roci::Joystick;
use roci_apps::{utils::init_tracing, NavTeleopConfig};
use roci_joystick_gilrs::GilJoystick;
use roci_teleop::TeleopNode;
use roci_web::WebNavClient;
use tracing::{debug, info};

/// Joystick remote operation for a 2D navigation stack.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!("args: {args:?}");

    if args.show_default_config {
        print!("{}", toml::to_string(&NavTeleopConfig::default())?);
        return Ok(());
    }

    let config = match &args.config_path {
        Some(path) => NavTeleopConfig::new(path)?,
        None => NavTeleopConfig::default(),
    };

    let client = Arc::new(WebNavClient::new_from_config(config.web_client_config)?);
    info!("navigation bridge: {}", client.base_url());
    let mut node = TeleopNode::new(config.teleop_node_config, client.clone(), client)?;

    let joystick = Arc::new(GilJoystick::new_from_config(config.gil_joystick_config));
    let joystick_cloned = joystick.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        info!("stopping");
        joystick_cloned.stop();
    });

    node.run(joystick).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn parse_args() {
        Args::command().debug_assert();
        let bin = "nav_teleop";
        assert!(Args::try_parse_from([bin]).is_ok());
        assert!(Args::try_parse_from([bin, "--show-default-config"]).is_ok());
        assert!(Args::try_parse_from([bin, "--config-path", "path"]).is_ok());
        assert!(
            Args::try_parse_from([bin, "--show-default-config", "--config-path", "path"]).is_ok()
        );
    }
}
