use std::fmt;

use roci::{DriveCommand, NavAction};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RpcResult {
    pub(crate) is_ok: bool,
    pub(crate) reason: String,
}

fn map_connection_error<E: fmt::Display>(url: &Url) -> impl FnOnce(E) -> roci::Error + '_ {
    move |e: E| roci::Error::Connection {
        message: format!("url:{url}: {e}"),
    }
}

fn get<T: DeserializeOwned>(url: Url) -> Result<T, roci::Error> {
    ureq::get(url.as_str())
        .call()
        .map_err(map_connection_error(&url))?
        .into_json::<T>()
        .map_err(map_connection_error(&url))
}

fn post<T: Serialize, U: DeserializeOwned>(url: Url, msg: T) -> Result<U, roci::Error> {
    ureq::post(url.as_str())
        .send_json(serde_json::to_value(msg).unwrap())
        .map_err(map_connection_error(&url))?
        .into_json()
        .map_err(map_connection_error(&url))
}

pub(crate) fn action_path(action: NavAction) -> &'static str {
    match action {
        NavAction::Stop => "stop",
        NavAction::Pause => "pause",
        NavAction::GetMap => "get_map",
        NavAction::StartExploration => "start_exploration",
    }
}

pub(crate) fn send_drive_command(
    base_url: &Url,
    command: &DriveCommand,
) -> Result<(), roci::Error> {
    let res: RpcResult = post(base_url.join("drive_command").unwrap(), command)?;
    if !res.is_ok {
        return Err(roci::Error::Rejected {
            message: res.reason,
        });
    }
    Ok(())
}

pub(crate) fn get_drive_command(base_url: &Url) -> Result<DriveCommand, roci::Error> {
    get(base_url.join("drive_command").unwrap())
}

pub(crate) fn send_trigger(base_url: &Url, action: NavAction) -> Result<(), roci::Error> {
    let res: RpcResult = post(base_url.join(action_path(action)).unwrap(), serde_json::json!({}))?;
    if !res.is_ok {
        return Err(roci::Error::Rejected {
            message: res.reason,
        });
    }
    Ok(())
}
