//! [`roci::Joystick`] implementation using [gilrs](https://gitlab.com/gilrs-project/gilrs).

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use roci::{async_trait, InputSample, Joystick};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
#[cfg(not(target_os = "macos"))]
use tracing::info;
use tracing::{debug, error};

/// Translation from gilrs buttons and axes to the positional layout of
/// [`InputSample`].
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Map {
    #[serde_as(as = "Vec<(_, _)>")]
    #[serde(default = "default_button_map")]
    button_map: HashMap<gilrs::Button, usize>,
    #[serde_as(as = "Vec<(_, _)>")]
    #[serde(default = "default_axis_map")]
    axis_map: HashMap<gilrs::Axis, usize>,
    #[serde_as(as = "Vec<(_, _)>")]
    #[serde(default = "default_axis_value_map")]
    axis_value_map: HashMap<usize, f64>,
}

impl Map {
    pub fn new() -> Self {
        Self {
            button_map: default_button_map(),
            axis_map: default_axis_map(),
            axis_value_map: default_axis_value_map(),
        }
    }

    fn button_len(&self) -> usize {
        self.button_map.values().max().map_or(0, |i| i + 1)
    }

    fn axis_len(&self) -> usize {
        self.axis_map.values().max().map_or(0, |i| i + 1)
    }

    /// An all-zero sample sized for this layout.
    fn empty_sample(&self) -> InputSample {
        InputSample::new(vec![0.0; self.axis_len()], vec![false; self.button_len()])
    }

    fn convert_button(&self, b: gilrs::Button) -> Option<usize> {
        match self.button_map.get(&b) {
            Some(index) => {
                debug!("convert_button {b:?} -> {index}");
                Some(*index)
            }
            None => {
                debug!("unknown button {b:?}");
                None
            }
        }
    }

    fn convert_axis(&self, a: gilrs::Axis, v: f32) -> Option<(usize, f64)> {
        match self.axis_map.get(&a) {
            Some(index) => {
                debug!("convert_axis {a:?} -> {index}");
                Some((
                    *index,
                    v as f64 * self.axis_value_map.get(index).unwrap_or(&1.0),
                ))
            }
            None => {
                debug!("unknown axis {a:?}");
                None
            }
        }
    }

    fn apply_button(&self, sample: &mut InputSample, b: gilrs::Button, pressed: bool) -> bool {
        match self.convert_button(b) {
            Some(index) => {
                sample.buttons[index] = pressed;
                true
            }
            None => false,
        }
    }

    fn apply_axis(&self, sample: &mut InputSample, a: gilrs::Axis, v: f32) -> bool {
        match self.convert_axis(a, v) {
            Some((index, value)) => {
                sample.axes[index] = value;
                true
            }
            None => false,
        }
    }

    /// Folds one gilrs event into `sample`. Returns false for events
    /// with no slot in the layout.
    fn apply_event(&self, sample: &mut InputSample, event: gilrs::EventType) -> bool {
        match event {
            gilrs::EventType::ButtonPressed(b, _c) => self.apply_button(sample, b, true),
            gilrs::EventType::ButtonReleased(b, _c) => self.apply_button(sample, b, false),
            gilrs::EventType::AxisChanged(a, v, _c) => self.apply_axis(sample, a, v),
            _ => false,
        }
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

// Logitech F710 (XInput) layout: A=0, B=1, X=2, Y=3, LB=4, RB=5,
// BACK=6, START=7, Logitech=8, left stick=9, right stick=10.
fn default_button_map() -> HashMap<gilrs::Button, usize> {
    let mut button_map = HashMap::new();
    button_map.insert(gilrs::Button::South, 0);
    button_map.insert(gilrs::Button::East, 1);
    button_map.insert(gilrs::Button::West, 2);
    button_map.insert(gilrs::Button::North, 3);
    button_map.insert(gilrs::Button::LeftTrigger, 4);
    button_map.insert(gilrs::Button::RightTrigger, 5);
    button_map.insert(gilrs::Button::Select, 6);
    button_map.insert(gilrs::Button::Start, 7);
    button_map.insert(gilrs::Button::Mode, 8);
    button_map.insert(gilrs::Button::LeftThumb, 9);
    button_map.insert(gilrs::Button::RightThumb, 10);
    button_map
}

// Axes: left stick X=0 Y=1, LT=2, right stick X=3 Y=4, RT=5.
fn default_axis_map() -> HashMap<gilrs::Axis, usize> {
    let mut axis_map = HashMap::new();
    axis_map.insert(gilrs::Axis::LeftStickX, 0);
    axis_map.insert(gilrs::Axis::LeftStickY, 1);
    axis_map.insert(gilrs::Axis::LeftZ, 2);
    axis_map.insert(gilrs::Axis::RightStickX, 3);
    axis_map.insert(gilrs::Axis::RightStickY, 4);
    axis_map.insert(gilrs::Axis::RightZ, 5);
    axis_map
}

// Sticks report positive to the right; the sample layout is positive
// to the left.
fn default_axis_value_map() -> HashMap<usize, f64> {
    let mut axis_value_map = HashMap::new();
    axis_value_map.insert(0, -1.0);
    axis_value_map.insert(3, -1.0);
    axis_value_map
}

pub struct GilJoystick {
    rx: flume::Receiver<InputSample>,
    _handle: std::thread::JoinHandle<()>,
    is_running: Arc<AtomicBool>,
}

impl GilJoystick {
    pub fn new(id: usize, map: Map) -> Self {
        let (tx, rx) = flume::unbounded();
        let is_running = Arc::new(AtomicBool::new(true));
        let is_running_cloned = is_running.clone();
        let _handle = std::thread::spawn(move || {
            let mut gil = gilrs::Gilrs::new().unwrap();
            // gilrs cannot enumerate gamepads on macOS.
            #[cfg(not(target_os = "macos"))]
            {
                let mut is_found = false;
                for (connected_id, gamepad) in gil.gamepads() {
                    info!("{} is {:?}", gamepad.name(), gamepad.power_info());
                    if id == connected_id.into() {
                        is_found = true;
                    }
                }
                if !is_found {
                    panic!("No joystick id={id} is found");
                }
            }
            let mut sample = map.empty_sample();
            while is_running_cloned.load(Ordering::Relaxed) {
                // next_event does not block, so poll with a short sleep
                match gil.next_event() {
                    Some(gilrs::Event {
                        id: recv_id, event, ..
                    }) => {
                        if id == recv_id.into() && map.apply_event(&mut sample, event) {
                            tx.send(sample.clone()).unwrap();
                        }
                    }
                    None => {
                        std::thread::sleep(Duration::from_secs_f64(0.01));
                    }
                }
            }
        });

        Self {
            rx,
            _handle,
            is_running,
        }
    }

    pub fn new_from_config(config: GilJoystickConfig) -> Self {
        Self::new(config.device_id, config.map)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GilJoystickConfig {
    #[serde(default)]
    device_id: usize,
    #[serde(default)]
    map: Map,
}

#[async_trait]
impl Joystick for GilJoystick {
    async fn next_sample(&self) -> Option<InputSample> {
        match self.rx.recv_async().await {
            Ok(sample) => Some(sample),
            Err(e) => {
                error!("recv error: {e}");
                None
            }
        }
    }

    fn stop(&self) {
        self.is_running.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_map() {
        let m = Map::default();
        assert_eq!(m.convert_button(gilrs::Button::South), Some(0));
        assert_eq!(m.convert_button(gilrs::Button::North), Some(3));
        assert_eq!(m.convert_button(gilrs::Button::RightTrigger), Some(5));
        assert_eq!(m.convert_button(gilrs::Button::C), None);
        let (index, value) = m.convert_axis(gilrs::Axis::RightStickY, 0.1).unwrap();
        assert_eq!(index, 4);
        assert_approx_eq!(value, 0.1);
        // stick X axes are mirrored
        let (index, value) = m.convert_axis(gilrs::Axis::LeftStickX, 0.2).unwrap();
        assert_eq!(index, 0);
        assert_approx_eq!(value, -0.2);
    }

    #[test]
    fn test_sample_layout() {
        let m = Map::default();
        let sample = m.empty_sample();
        assert_eq!(sample.axes.len(), 6);
        assert_eq!(sample.buttons.len(), 11);
    }

    #[test]
    fn test_apply_events() {
        let m = Map::default();
        let mut sample = m.empty_sample();
        assert!(m.apply_button(&mut sample, gilrs::Button::East, true));
        assert!(sample.buttons[1]);
        assert!(m.apply_button(&mut sample, gilrs::Button::East, false));
        assert!(!sample.buttons[1]);
        assert!(m.apply_axis(&mut sample, gilrs::Axis::RightStickY, 0.8));
        assert_approx_eq!(sample.axes[4], 0.8);
        assert!(!m.apply_button(&mut sample, gilrs::Button::C, true));
    }

    #[test]
    fn test_make_map() {
        let m = Map {
            button_map: HashMap::new(),
            axis_map: HashMap::new(),
            axis_value_map: HashMap::new(),
        };
        assert_eq!(m.convert_button(gilrs::Button::North), None);
        assert_eq!(m.convert_axis(gilrs::Axis::RightStickY, 0.1), None);
        let sample = m.empty_sample();
        assert!(sample.axes.is_empty());
        assert!(sample.buttons.is_empty());
    }

    #[test]
    fn test_config_from_empty_toml() {
        let config: GilJoystickConfig = toml::from_str("").unwrap();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.map.button_len(), 11);
    }
}
