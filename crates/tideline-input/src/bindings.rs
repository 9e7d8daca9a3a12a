//! Control bindings: which physical keys drive which avatar/camera control.
//!
//! [`KeyBindings`] maps every [`Control`] to one or more [`KeyCode`]s. Key
//! codes are (de)serialized by their winit variant name (`"KeyW"`,
//! `"ShiftLeft"`), so bindings can be overridden from `config.ron`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Errors produced while applying keybinding overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The override names a control that does not exist.
    #[error("unknown control: {0}")]
    UnknownControl(String),
    /// The override names a key this crate cannot resolve.
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

/// Semantic controls read by the kinematics each tick.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Control {
    /// Move toward the camera's look direction.
    Forward,
    /// Move away from the camera's look direction.
    Backward,
    StrafeLeft,
    StrafeRight,
    /// Rise (fly camera only).
    Jump,
    /// Sink (fly camera only).
    Crouch,
    /// Run / fly faster.
    Boost,
    /// Toggle between third-person and fly camera.
    CameraMode,
}

impl Control {
    /// Every control, in declaration order.
    pub const ALL: [Control; 8] = [
        Control::Forward,
        Control::Backward,
        Control::StrafeLeft,
        Control::StrafeRight,
        Control::Jump,
        Control::Crouch,
        Control::Boost,
        Control::CameraMode,
    ];

    /// Resolve a control from its variant name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|control| format!("{control:?}") == name)
    }
}

/// Resolve a [`KeyCode`] from its winit variant name.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    if let Some(letter) = name.strip_prefix("Key")
        && letter.len() == 1
    {
        let code = match letter.as_bytes()[0] {
            b'A' => KeyCode::KeyA,
            b'B' => KeyCode::KeyB,
            b'C' => KeyCode::KeyC,
            b'D' => KeyCode::KeyD,
            b'E' => KeyCode::KeyE,
            b'F' => KeyCode::KeyF,
            b'G' => KeyCode::KeyG,
            b'H' => KeyCode::KeyH,
            b'I' => KeyCode::KeyI,
            b'J' => KeyCode::KeyJ,
            b'K' => KeyCode::KeyK,
            b'L' => KeyCode::KeyL,
            b'M' => KeyCode::KeyM,
            b'N' => KeyCode::KeyN,
            b'O' => KeyCode::KeyO,
            b'P' => KeyCode::KeyP,
            b'Q' => KeyCode::KeyQ,
            b'R' => KeyCode::KeyR,
            b'S' => KeyCode::KeyS,
            b'T' => KeyCode::KeyT,
            b'U' => KeyCode::KeyU,
            b'V' => KeyCode::KeyV,
            b'W' => KeyCode::KeyW,
            b'X' => KeyCode::KeyX,
            b'Y' => KeyCode::KeyY,
            b'Z' => KeyCode::KeyZ,
            _ => return None,
        };
        return Some(code);
    }
    if let Some(digit) = name.strip_prefix("Digit")
        && digit.len() == 1
    {
        let code = match digit.as_bytes()[0] {
            b'0' => KeyCode::Digit0,
            b'1' => KeyCode::Digit1,
            b'2' => KeyCode::Digit2,
            b'3' => KeyCode::Digit3,
            b'4' => KeyCode::Digit4,
            b'5' => KeyCode::Digit5,
            b'6' => KeyCode::Digit6,
            b'7' => KeyCode::Digit7,
            b'8' => KeyCode::Digit8,
            b'9' => KeyCode::Digit9,
            _ => return None,
        };
        return Some(code);
    }
    Some(match name {
        "Space" => KeyCode::Space,
        "Tab" => KeyCode::Tab,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "CapsLock" => KeyCode::CapsLock,
        "Backquote" => KeyCode::Backquote,
        "Minus" => KeyCode::Minus,
        "Equal" => KeyCode::Equal,
        "Comma" => KeyCode::Comma,
        "Period" => KeyCode::Period,
        "Slash" => KeyCode::Slash,
        "Semicolon" => KeyCode::Semicolon,
        "Quote" => KeyCode::Quote,
        "BracketLeft" => KeyCode::BracketLeft,
        "BracketRight" => KeyCode::BracketRight,
        "Backslash" => KeyCode::Backslash,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "AltLeft" => KeyCode::AltLeft,
        "AltRight" => KeyCode::AltRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        _ => return None,
    })
}

/// A [`KeyCode`] that serializes as its variant name.
///
/// Only keys [`key_from_name`] resolves can be written, so every saved
/// binding reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyName(pub KeyCode);

impl Serialize for KeyName {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let name = format!("{:?}", self.0);
        if key_from_name(&name) != Some(self.0) {
            return Err(serde::ser::Error::custom(format!("key has no config name: {name}")));
        }
        name.serialize(s)
    }
}

impl<'de> Deserialize<'de> for KeyName {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        key_from_name(&name)
            .map(KeyName)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }
}

/// Control-to-keys table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "HashMap<Control, Vec<KeyName>>", from = "HashMap<Control, Vec<KeyName>>")]
pub struct KeyBindings {
    keys: HashMap<Control, Vec<KeyCode>>,
}

impl From<KeyBindings> for HashMap<Control, Vec<KeyName>> {
    fn from(bindings: KeyBindings) -> Self {
        bindings
            .keys
            .into_iter()
            .map(|(control, keys)| (control, keys.into_iter().map(KeyName).collect()))
            .collect()
    }
}

impl From<HashMap<Control, Vec<KeyName>>> for KeyBindings {
    fn from(map: HashMap<Control, Vec<KeyName>>) -> Self {
        let mut bindings = KeyBindings::default();
        for (control, keys) in map {
            bindings.bind(control, keys.into_iter().map(|k| k.0).collect());
        }
        bindings
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (Control::Forward, vec![KeyCode::KeyW, KeyCode::ArrowUp]),
            (Control::Backward, vec![KeyCode::KeyS, KeyCode::ArrowDown]),
            (Control::StrafeLeft, vec![KeyCode::KeyA, KeyCode::ArrowLeft]),
            (Control::StrafeRight, vec![KeyCode::KeyD, KeyCode::ArrowRight]),
            (Control::Jump, vec![KeyCode::Space]),
            (Control::Crouch, vec![KeyCode::ControlLeft]),
            (Control::Boost, vec![KeyCode::ShiftLeft]),
            (Control::CameraMode, vec![KeyCode::KeyC]),
        ]);
        Self { keys }
    }
}

impl KeyBindings {
    /// Defaults with the given overrides applied. Each overridden control
    /// loses its default keys.
    pub fn with_overrides(overrides: &HashMap<String, Vec<String>>) -> Result<Self, BindingError> {
        let mut bindings = Self::default();
        for (control_name, key_names) in overrides {
            let control = Control::from_name(control_name)
                .ok_or_else(|| BindingError::UnknownControl(control_name.clone()))?;
            let keys = key_names
                .iter()
                .map(|name| {
                    key_from_name(name).ok_or_else(|| BindingError::UnknownKey(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            tracing::debug!(?control, ?keys, "keybinding override");
            bindings.bind(control, keys);
        }
        Ok(bindings)
    }

    /// Replace the keys bound to `control`.
    pub fn bind(&mut self, control: Control, keys: Vec<KeyCode>) {
        self.keys.insert(control, keys);
    }

    /// Keys bound to `control`.
    pub fn keys(&self, control: Control) -> &[KeyCode] {
        self.keys.get(&control).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any key bound to `control` is held.
    pub fn is_held(&self, control: Control, keyboard: &KeyboardState) -> bool {
        self.keys(control).iter().any(|&k| keyboard.is_held(k))
    }

    /// Whether any key bound to `control` went down this frame.
    pub fn just_pressed(&self, control: Control, keyboard: &KeyboardState) -> bool {
        self.keys(control).iter().any(|&k| keyboard.just_pressed(k))
    }
}
