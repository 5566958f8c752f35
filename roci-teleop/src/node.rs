use roci::{DriveCommand, Error, InputSample, Joystick, NavAction, Navigator, Operator};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Button and axis bindings of the teleop node.
///
/// Indices address the positional arrays of [`InputSample`]. The
/// defaults match a Logitech F710 in XInput mode: the right stick
/// drives, the left stick turns, RB selects the alternate drive mode,
/// B stops the navigator, BACK pauses it, Y fetches the map and A
/// starts exploration.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TeleopNodeConfig {
    #[serde(default = "default_velocity_axis")]
    pub velocity_axis: usize,
    #[serde(default = "default_turn_axis")]
    pub turn_axis: usize,
    #[serde(default = "default_drive_mode_button")]
    pub drive_mode_button: usize,
    #[serde(default = "default_stop_button")]
    pub stop_button: usize,
    #[serde(default = "default_pause_button")]
    pub pause_button: usize,
    #[serde(default = "default_get_map_button")]
    pub get_map_button: usize,
    #[serde(default = "default_explore_button")]
    pub explore_button: usize,
}

fn default_velocity_axis() -> usize {
    4
}

fn default_turn_axis() -> usize {
    0
}

fn default_drive_mode_button() -> usize {
    5
}

fn default_stop_button() -> usize {
    1
}

fn default_pause_button() -> usize {
    6
}

fn default_get_map_button() -> usize {
    3
}

fn default_explore_button() -> usize {
    0
}

impl Default for TeleopNodeConfig {
    fn default() -> Self {
        Self {
            velocity_axis: default_velocity_axis(),
            turn_axis: default_turn_axis(),
            drive_mode_button: default_drive_mode_button(),
            stop_button: default_stop_button(),
            pause_button: default_pause_button(),
            get_map_button: default_get_map_button(),
            explore_button: default_explore_button(),
        }
    }
}

impl TeleopNodeConfig {
    fn validate(&self) -> Result<(), Error> {
        if self.velocity_axis == self.turn_axis {
            return Err(Error::InvalidConfig {
                message: format!(
                    "velocity and turn are both bound to axis {}",
                    self.velocity_axis
                ),
            });
        }
        let buttons = [
            ("drive_mode", self.drive_mode_button),
            ("stop", self.stop_button),
            ("pause", self.pause_button),
            ("get_map", self.get_map_button),
            ("explore", self.explore_button),
        ];
        for (i, (name_a, index_a)) in buttons.iter().enumerate() {
            for (name_b, index_b) in &buttons[i + 1..] {
                if index_a == index_b {
                    return Err(Error::InvalidConfig {
                        message: format!(
                            "{name_a} and {name_b} are both bound to button {index_a}"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Drive-command emission gate. Firing a one-shot action (get-map or
/// start-exploration) suppresses exactly one subsequent emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmissionState {
    Armed,
    SuppressOnce,
}

/// Translates input samples into drive commands for an [`Operator`] and
/// trigger requests for a [`Navigator`].
///
/// Every sample produces one drive command and at most one navigator
/// request, chosen by fixed priority: stop, pause, get-map,
/// start-exploration. The sample right after a one-shot request emits
/// no drive command.
pub struct TeleopNode<O, N>
where
    O: Operator,
    N: Navigator,
{
    operator: O,
    navigator: N,
    config: TeleopNodeConfig,
    emission: EmissionState,
}

impl<O, N> TeleopNode<O, N>
where
    O: Operator,
    N: Navigator,
{
    pub fn new(config: TeleopNodeConfig, operator: O, navigator: N) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            operator,
            navigator,
            config,
            emission: EmissionState::Armed,
        })
    }

    pub fn config(&self) -> &TeleopNodeConfig {
        &self.config
    }

    /// Processes one sample. A malformed sample (shorter than the
    /// configured bindings require) is logged and skipped whole; this
    /// method never panics and never returns an error.
    pub fn handle_sample(&mut self, sample: &InputSample) {
        if let Err(e) = self.process_sample(sample) {
            error!("discarding input sample: {e}");
        }
    }

    fn process_sample(&mut self, sample: &InputSample) -> Result<(), Error> {
        let config = &self.config;
        // Read every bound index first so a short sample is rejected
        // before any side effect.
        let velocity = sample.axis(config.velocity_axis)?;
        let turn = -sample.axis(config.turn_axis)?;
        let drive_mode = sample.button(config.drive_mode_button)?;
        let stop = sample.button(config.stop_button)?;
        let pause = sample.button(config.pause_button)?;
        let get_map = sample.button(config.get_map_button)?;
        let explore = sample.button(config.explore_button)?;

        match self.emission {
            EmissionState::SuppressOnce => {
                self.emission = EmissionState::Armed;
            }
            EmissionState::Armed => {
                let command = DriveCommand {
                    turn,
                    velocity,
                    mode: drive_mode as u8,
                };
                debug!("drive command: {command:?}");
                if let Err(e) = self.operator.send_command(&command) {
                    error!("failed to send drive command to operator: {e}");
                }
            }
        }

        let action = if stop {
            Some(NavAction::Stop)
        } else if pause {
            Some(NavAction::Pause)
        } else if get_map {
            Some(NavAction::GetMap)
        } else if explore {
            Some(NavAction::StartExploration)
        } else {
            None
        };

        if let Some(action) = action {
            if let Err(e) = self.navigator.trigger(action) {
                error!("failed to send {action} request to navigator: {e}");
            }
            // One-shot actions gate the next emission whether or not the
            // request itself went through.
            if matches!(action, NavAction::GetMap | NavAction::StartExploration) {
                self.emission = EmissionState::SuppressOnce;
            }
        }
        Ok(())
    }

    /// Feeds the node from `joystick` until the device reports no more
    /// samples. Samples are handled one at a time, in arrival order.
    pub async fn run<J>(&mut self, joystick: J)
    where
        J: Joystick,
    {
        while let Some(sample) = joystick.next_sample().await {
            debug!("sample: {sample:?}");
            self.handle_sample(&sample);
        }
    }
}
