//! Track geometry: colors, token positions and board coordinates.
//!
//! ## Coordinates
//!
//! A token's position is stored *relative to its own color*: `0` is the
//! color's entry cell, `50` is the last shared cell before the home
//! stretch, `51..=56` are the six private stretch cells and `57` is
//! finished. Only main-track positions have an absolute cell, obtained by
//! rotating the relative distance by the color's start offset.
//!
//! ```text
//!   HOME   0 ........ 50 | 51 .. 56 | 57
//!   (-1)   shared track  |  stretch | FINISHED
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells on the shared circular track.
pub const TRACK_CELLS: u8 = 52;

/// Last relative position on the shared track.
pub const LAST_MAIN: i8 = 50;

/// First relative position inside the private home stretch.
pub const STRETCH_START: i8 = 51;

/// Relative position of a finished token.
pub const FINISH: i8 = 57;

/// Absolute safe cells: each entry cell plus the star eight steps past it.
pub const SAFE_CELLS: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Player color. Fixes the track offset and the private home stretch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in seating order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zone a token position falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Not yet in play.
    Home,
    /// On the shared 52-cell track.
    Main,
    /// In the color's private home stretch.
    Stretch,
    /// Done; never moves again.
    Finished,
}

/// A token's position relative to its own color's entry cell.
///
/// Serializes as the bare relative value. Deserializing goes through
/// [`TokenPosition::new`], so a snapshot with an out-of-range token is
/// rejected instead of loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct TokenPosition(i8);

/// Raw value outside `-1..=57`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("token position {0} is outside -1..=57")]
pub struct InvalidPosition(pub i8);

impl TokenPosition {
    /// Token waiting at home.
    pub const HOME: Self = Self(-1);

    /// The color's own entry cell.
    pub const ENTRY: Self = Self(0);

    /// Token that has reached the end of its stretch.
    pub const FINISHED: Self = Self(FINISH);

    /// Build a position from its raw value, rejecting anything outside
    /// `-1..=57`.
    #[must_use]
    pub const fn new(raw: i8) -> Option<Self> {
        if raw >= -1 && raw <= FINISH {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw relative value (`-1` for home).
    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    #[must_use]
    pub fn zone(self) -> Zone {
        zone_of(self)
    }

    #[must_use]
    pub fn is_home(self) -> bool {
        self == Self::HOME
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self == Self::FINISHED
    }
}

impl TryFrom<i8> for TokenPosition {
    type Error = InvalidPosition;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(InvalidPosition(raw))
    }
}

impl From<TokenPosition> for i8 {
    fn from(position: TokenPosition) -> Self {
        position.0
    }
}

impl Default for TokenPosition {
    fn default() -> Self {
        Self::HOME
    }
}

impl std::fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.zone() {
            Zone::Home => f.write_str("home"),
            Zone::Finished => f.write_str("finished"),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Classify a position by numeric range.
#[must_use]
pub fn zone_of(position: TokenPosition) -> Zone {
    match position.0 {
        i8::MIN..=-1 => Zone::Home,
        0..=LAST_MAIN => Zone::Main,
        STRETCH_START..=56 => Zone::Stretch,
        _ => Zone::Finished,
    }
}

/// A color's entry point on the shared track. Colors sit a quarter
/// track apart, so every path is a rotation of the others.
#[must_use]
pub const fn start_offset(color: Color) -> u8 {
    (color.index() as u8) * (TRACK_CELLS / 4)
}

/// Absolute board cell of a main-track position, `None` off the track.
#[must_use]
pub fn absolute_cell(color: Color, position: TokenPosition) -> Option<u8> {
    match position.zone() {
        Zone::Main => Some((start_offset(color) + position.0 as u8) % TRACK_CELLS),
        _ => None,
    }
}

/// Whether tokens on this cell are protected from capture.
///
/// [`SAFE_CELLS`] is closed under rotation by a quarter track, so this
/// answers for absolute cells and for color-relative distances alike.
#[must_use]
pub fn is_safe_cell(cell: u8) -> bool {
    SAFE_CELLS.contains(&(cell % TRACK_CELLS))
}

/// Where a token lands after moving `dice` steps, `None` if it may not
/// move. Leaving home needs a six and lands on the entry cell; anything
/// that would overshoot [`TokenPosition::FINISHED`] is illegal.
#[must_use]
pub fn advance(position: TokenPosition, dice: u8) -> Option<TokenPosition> {
    if !(1..=6).contains(&dice) {
        return None;
    }

    match position.zone() {
        Zone::Home => (dice == 6).then_some(TokenPosition::ENTRY),
        Zone::Main | Zone::Stretch => TokenPosition::new(position.0 + dice as i8),
        Zone::Finished => None,
    }
}
