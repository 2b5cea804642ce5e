// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contact direction classification.
//!
//! A direction names the side of the *first* actor that made contact with
//! the second one during the current tick:
//!
//! - `Top`: the first actor rose into the second from below.
//! - `Bot`: the first actor came down onto the second from above.
//! - `Left`: the first actor moved left into the second.
//! - `Right`: the first actor moved right into the second.
//! - Diagonals combine one vertical and one horizontal side.
//!
//! Classification compares the first actor's previous-tick box against the
//! second actor's current box, so it reports how an overlap was created
//! rather than the overlap's current shape. Contacts that already existed on
//! the previous tick are reported as `None` and are not re-resolved.

use crate::actor::Actor;
use core::cmp::Ordering;
use core::fmt;
use wze_geom::Rect;

/// Side of the first actor involved in a new contact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// No new contact this tick.
    #[default]
    None,
    /// Contact on the first actor's top side.
    Top,
    /// Contact on the first actor's bottom side.
    Bot,
    /// Contact on the first actor's left side.
    Left,
    /// Contact on the first actor's right side.
    Right,
    /// Corner contact, top and left.
    TopLeft,
    /// Corner contact, top and right.
    TopRight,
    /// Corner contact, bottom and left.
    BotLeft,
    /// Corner contact, bottom and right.
    BotRight,
}

/// Vertical component of a [`Direction`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Vertical {
    Top,
    Bot,
}

/// Horizontal component of a [`Direction`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Horizontal {
    Left,
    Right,
}

impl Direction {
    /// All eight contact directions (excludes `None`).
    pub const CONTACTS: [Self; 8] = [
        Self::Top,
        Self::Bot,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BotLeft,
        Self::BotRight,
    ];

    /// Returns `true` for [`Direction::None`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` for the four corner directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BotLeft | Self::BotRight
        )
    }

    /// The direction the second actor sees for the same contact.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Top => Self::Bot,
            Self::Bot => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::TopLeft => Self::BotRight,
            Self::TopRight => Self::BotLeft,
            Self::BotLeft => Self::TopRight,
            Self::BotRight => Self::TopLeft,
        }
    }

    pub(crate) const fn vertical(self) -> Option<Vertical> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(Vertical::Top),
            Self::Bot | Self::BotLeft | Self::BotRight => Some(Vertical::Bot),
            Self::None | Self::Left | Self::Right => None,
        }
    }

    pub(crate) const fn horizontal(self) -> Option<Horizontal> {
        match self {
            Self::Left | Self::TopLeft | Self::BotLeft => Some(Horizontal::Left),
            Self::Right | Self::TopRight | Self::BotRight => Some(Horizontal::Right),
            Self::None | Self::Top | Self::Bot => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Top => "top",
            Self::Bot => "bot",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BotLeft => "bot_left",
            Self::BotRight => "bot_right",
        };
        f.write_str(name)
    }
}

/// Classifies the contact between `actor1` (moving) and `actor2`.
///
/// Uses `actor1`'s previous-tick box as the swept reference and both actors'
/// current boxes. See [`classify`] for the exact rules.
#[must_use]
pub fn direction(actor1: &Actor, actor2: &Actor) -> Direction {
    classify(&actor1.prev_bounds(), &actor1.bounds(), &actor2.bounds())
}

/// Classifies a contact from raw rectangles.
///
/// - `prev`: first actor's previous-tick box.
/// - `current`: first actor's current box.
/// - `other`: second actor's current box.
///
/// Rules, in order:
/// 1. `prev` already overlapped `other`: the contact is not new, `None`.
/// 2. `current` does not overlap `other`: `None`.
/// 3. `prev` and `other` nest horizontally: `Top` if `prev` was fully below,
///    `Bot` if fully above.
/// 4. They nest vertically: `Left` if `prev` was fully right of `other`,
///    `Right` if fully left.
/// 5. Otherwise pick the quadrant `other` sits in relative to `prev`; an
///    edge that still lines up on one axis decides the cardinal side, and
///    otherwise the current penetration depths are compared. Equal depths
///    yield the corner direction.
#[must_use]
pub fn classify(prev: &Rect, current: &Rect, other: &Rect) -> Direction {
    let (p, c, b) = (prev, current, other);

    if p.overlaps(b) {
        return Direction::None;
    }
    if !c.overlaps(b) {
        return Direction::None;
    }

    if (b.left() <= p.left() && p.right() <= b.right())
        || (p.left() <= b.left() && b.right() <= p.right())
    {
        if p.top() < b.bottom() {
            return Direction::Top;
        }
        if b.top() < p.bottom() {
            return Direction::Bot;
        }
    }
    if (b.bottom() <= p.bottom() && p.top() <= b.top())
        || (p.bottom() <= b.bottom() && b.top() <= p.top())
    {
        if b.right() < p.left() {
            return Direction::Left;
        }
        if p.right() < b.left() {
            return Direction::Right;
        }
    }

    if b.left() < p.left() && p.top() < b.top() {
        if p.left() <= b.right() {
            return Direction::Top;
        }
        if b.bottom() <= p.top() {
            return Direction::Left;
        }
        return tie_break(
            b.right() - c.left(),
            c.top() - b.bottom(),
            [Direction::Top, Direction::Left, Direction::TopLeft],
        );
    }
    if p.right() < b.right() && p.top() < b.top() {
        if b.left() <= p.right() {
            return Direction::Top;
        }
        if b.bottom() <= p.top() {
            return Direction::Right;
        }
        return tie_break(
            c.right() - b.left(),
            c.top() - b.bottom(),
            [Direction::Top, Direction::Right, Direction::TopRight],
        );
    }
    if b.left() < p.left() && b.bottom() < p.bottom() {
        if p.left() <= b.right() {
            return Direction::Bot;
        }
        if p.bottom() <= b.top() {
            return Direction::Left;
        }
        return tie_break(
            b.right() - c.left(),
            b.top() - c.bottom(),
            [Direction::Bot, Direction::Left, Direction::BotLeft],
        );
    }
    if p.right() < b.right() && b.bottom() < p.bottom() {
        if b.left() <= p.right() {
            return Direction::Bot;
        }
        if p.bottom() <= b.top() {
            return Direction::Right;
        }
        return tie_break(
            c.right() - b.left(),
            b.top() - c.bottom(),
            [Direction::Bot, Direction::Right, Direction::BotRight],
        );
    }

    Direction::None
}

/// `[vertical, horizontal, corner]`: a deeper horizontal penetration means
/// the contact is resolved vertically, and vice versa.
fn tie_break(horizontal: f64, vertical: f64, [v, h, corner]: [Direction; 3]) -> Direction {
    match horizontal.partial_cmp(&vertical) {
        Some(Ordering::Greater) => v,
        Some(Ordering::Less) => h,
        _ => corner,
    }
}
