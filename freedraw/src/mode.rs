use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapter::MapAdapter;
use crate::model::EventType;
use crate::notify::update_for;
use crate::options::Options;
use crate::state::MapState;

/// Bitmask of the interactions currently permitted on the map.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Mode(u8);

impl Mode {
    pub const NONE: Mode = Mode(0);
    pub const CREATE: Mode = Mode(1);
    pub const EDIT: Mode = Mode(2);
    pub const DELETE: Mode = Mode(4);
    pub const APPEND: Mode = Mode(8);
    pub const EDIT_APPEND: Mode = Mode(Self::EDIT.0 | Self::APPEND.0);
    pub const ALL: Mode = Mode(Self::CREATE.0 | Self::EDIT.0 | Self::DELETE.0 | Self::APPEND.0);

    /// Unknown bits are dropped so the value is always a union of the base flags.
    pub const fn from_bits(bits: u8) -> Mode {
        Mode(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Mode) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Mode {
    fn from(bits: u8) -> Self {
        Mode::from_bits(bits)
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.0
    }
}

impl BitOr for Mode {
    type Output = Mode;
    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitAnd for Mode {
    type Output = Mode;
    fn bitand(self, rhs: Mode) -> Mode {
        Mode(self.0 & rhs.0)
    }
}

impl BitXor for Mode {
    type Output = Mode;
    fn bitxor(self, rhs: Mode) -> Mode {
        Mode(self.0 ^ rhs.0)
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("Mode(NONE)");
        }
        let names: Vec<&str> = CLASSES[1..]
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, class)| &class["mode-".len()..])
            .collect();
        write!(f, "Mode({})", names.join("|"))
    }
}

/// Container class for each base flag; `mode-none` marks the empty mask.
pub const CLASSES: [(Mode, &str); 5] = [
    (Mode::NONE, "mode-none"),
    (Mode::CREATE, "mode-create"),
    (Mode::EDIT, "mode-edit"),
    (Mode::DELETE, "mode-delete"),
    (Mode::APPEND, "mode-append"),
];

/// Applies `mode` to the map and returns it unchanged.
pub fn mode_for<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    mode: Mode,
    options: &Options,
) -> Mode {
    debug!("mode {:?} -> {:?}", state.mode, mode);
    state.mode = mode;
    adapter.fire(&crate::model::Event::Mode { mode });

    // The map must not pan while a stroke can start.
    adapter.set_dragging(!mode.contains(Mode::CREATE));

    let editable = mode.contains(Mode::EDIT);
    for (id, polygon) in state.registry.iter() {
        adapter.set_polygon_mode(id, mode);
        for &marker in &polygon.edges {
            adapter.set_marker_enabled(marker, editable);
        }
    }

    classes_for(adapter, mode);

    if options.notify_after_edit_exit && std::mem::take(&mut state.deferred_edit) {
        debug!("flushing deferred edit notification");
        update_for(&state.registry, adapter, EventType::Edit);
    }

    mode
}

pub fn classes_for<A: MapAdapter + ?Sized>(adapter: &mut A, mode: Mode) {
    for (flag, class) in CLASSES {
        adapter.set_class(class, false);
        let present = if flag.is_none() { mode.is_none() } else { mode.contains(flag) };
        if present {
            adapter.set_class(class, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_masks() {
        assert_eq!(Mode::EDIT_APPEND, Mode::EDIT | Mode::APPEND);
        assert_eq!(Mode::ALL.bits(), 15);
        assert_eq!(Mode::from_bits(0xff), Mode::ALL);
    }

    #[test]
    fn contains_requires_every_bit() {
        assert!(Mode::ALL.contains(Mode::EDIT_APPEND));
        assert!(!Mode::EDIT.contains(Mode::EDIT_APPEND));
        assert!(!Mode::ALL.contains(Mode::NONE));
    }

    #[test]
    fn debug_lists_flags() {
        assert_eq!(format!("{:?}", Mode::CREATE | Mode::DELETE), "Mode(create|delete)");
        assert_eq!(format!("{:?}", Mode::NONE), "Mode(NONE)");
    }
}
