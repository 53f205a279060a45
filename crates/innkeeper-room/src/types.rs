//! Value types for the room layer: room numbers, room tiers, and guests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nightly rate for a [`RoomType::Standard`] room.
pub const STANDARD_RATE: f64 = 100.0;

/// Nightly rate for a [`RoomType::Suite`] room.
pub const SUITE_RATE: f64 = 250.0;

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// The identity key of a room within a registry.
///
/// A newtype over `u32` so a room number can't be mixed up with a count
/// or an index. `#[serde(transparent)]` keeps it a bare integer in JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The tier of a room. The price is a pure function of the tier; there
/// are no per-room overrides.
///
/// Adding a tier means adding a variant here, and every `match` on
/// `RoomType` in the workspace will refuse to compile until it handles
/// the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Suite,
}

impl RoomType {
    /// Every tier, in declaration order.
    pub const ALL: [RoomType; 2] = [RoomType::Standard, RoomType::Suite];

    /// Returns the fixed nightly rate for this tier.
    pub fn price(self) -> f64 {
        match self {
            Self::Standard => STANDARD_RATE,
            Self::Suite => SUITE_RATE,
        }
    }

    /// Returns the stable discriminator written to snapshot files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Standard => "StandardRoom",
            Self::Suite => "SuiteRoom",
        }
    }

    /// Parses a discriminator produced by [`tag`](Self::tag).
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything
    /// else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Suite => write!(f, "Suite"),
        }
    }
}

// ---------------------------------------------------------------------------
// Guest
// ---------------------------------------------------------------------------

/// A named occupant.
///
/// A guest has no identity beyond its name, and two guests with the same
/// name are not deduplicated. A guest doesn't know which room it is in;
/// the room holds the association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: String,
}

impl Guest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Guest: {}>", self.name)
    }
}
