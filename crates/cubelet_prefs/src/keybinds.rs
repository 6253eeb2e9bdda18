use std::collections::BTreeMap;

use cubelet_core::Move;
use serde::{Deserialize, Serialize};

/// Keyboard bindings from a key to a move token.
///
/// Keys are stored as strings so that they survive the round trip through
/// `config`, which only supports string map keys.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindPreferences(pub BTreeMap<String, String>);

impl KeybindPreferences {
    /// Returns the move bound to `key`, inverted if `shift` is held.
    ///
    /// Returns `None` if the key is unbound or bound to an invalid token.
    pub fn move_for_key(&self, key: char, shift: bool) -> Option<Move> {
        let key = key.to_lowercase().to_string();
        let token = self.0.get(&key)?;
        match cubelet_core::parse_move(token) {
            Ok(mv) if shift => Some(mv.rev()),
            Ok(mv) => Some(mv),
            Err(e) => {
                log::warn!("ignoring keybind {key:?} => {token:?}: {e}");
                None
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of moves in a scramble.
    pub length: usize,
}
