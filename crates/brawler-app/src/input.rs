//! Keyboard sampling turned into edge-triggered commands.
//!
//! Hosts sample the held state of the attack keys once per frame. A key
//! produces a command only on the frame it goes down; holding it does nothing
//! further until it is released and pressed again.

use brawler_core::commands::PlayerCommand;
use brawler_core::enums::Direction;

/// Held state of the attack keys for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySample {
    pub left: bool,
    pub right: bool,
    /// The no-direction special move.
    pub down: bool,
}

/// Remembers the previous sample to detect key-down edges.
#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    previous: KeySample,
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's sample. At most one command per frame; when several
    /// keys go down together, left beats right beats down.
    pub fn sample(&mut self, keys: KeySample) -> Option<PlayerCommand> {
        let pressed = KeySample {
            left: keys.left && !self.previous.left,
            right: keys.right && !self.previous.right,
            down: keys.down && !self.previous.down,
        };
        self.previous = keys;

        if pressed.left {
            Some(PlayerCommand::Attack {
                direction: Direction::Left,
            })
        } else if pressed.right {
            Some(PlayerCommand::Attack {
                direction: Direction::Right,
            })
        } else if pressed.down {
            Some(PlayerCommand::Special)
        } else {
            None
        }
    }
}
