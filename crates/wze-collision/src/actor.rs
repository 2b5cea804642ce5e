// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Actors and the arena that owns them.
//!
//! The engine owns every [`Actor`] inside an [`ActorArena`]; the collision
//! system only stores [`ActorId`] handles per layer. Handles are generational,
//! so an id kept after its actor was removed never aliases a newer actor that
//! reuses the same slot.

use core::fmt;
use wze_geom::{Rect, Vec2};

/// Generational handle to an actor stored in an [`ActorArena`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActorId {
    index: usize,
    generation: u32,
}

impl ActorId {
    /// Slot index inside the arena.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Rectangular, axis-aligned collision participant.
///
/// Carries the current center and hitbox, the previous-tick snapshot of both
/// (the swept reference used for direction classification) and the
/// force/resistance pair used when splitting corrections.
///
/// The previous-tick snapshot only advances at the end of a layer pass, or
/// explicitly through [`Actor::teleport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    position: Vec2,
    hitbox: Vec2,
    prev_position: Vec2,
    prev_hitbox: Vec2,
    force: u64,
    resistance: u64,
}

impl Actor {
    /// Creates an actor centered on `position` with a `width × height` hitbox.
    ///
    /// The previous-tick snapshot starts equal to the current state, so a
    /// freshly spawned actor reports no swept contact on its first pass.
    /// Force and resistance start at zero.
    #[must_use]
    pub fn new(position: Vec2, width: f64, height: f64) -> Self {
        let hitbox = Vec2::new(width, height);
        Self {
            position,
            hitbox,
            prev_position: position,
            prev_hitbox: hitbox,
            force: 0,
            resistance: 0,
        }
    }

    /// Builder-style force setter.
    #[must_use]
    pub fn with_force(mut self, force: u64) -> Self {
        self.force = force;
        self
    }

    /// Builder-style resistance setter.
    #[must_use]
    pub fn with_resistance(mut self, resistance: u64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Current center.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current center X.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.position.x()
    }

    /// Current center Y.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.position.y()
    }

    /// Moves the current center without touching the previous-tick snapshot.
    ///
    /// This is how gameplay applies desired motion before a pass.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Adds `delta` to the current center.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Places the actor at `position` and resets the swept reference there.
    ///
    /// Use for spawns and teleports: the next pass sees no motion, so the
    /// actor cannot register a contact "entered" from its old location.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
    }

    /// Current hitbox as `(width, height)`.
    #[must_use]
    pub const fn hitbox(&self) -> Vec2 {
        self.hitbox
    }

    /// Replaces the current hitbox. The previous hitbox is left alone.
    pub fn set_hitbox(&mut self, width: f64, height: f64) {
        self.hitbox = Vec2::new(width, height);
    }

    /// Center at the end of the last completed pass.
    #[must_use]
    pub const fn prev_position(&self) -> Vec2 {
        self.prev_position
    }

    /// Hitbox at the end of the last completed pass.
    #[must_use]
    pub const fn prev_hitbox(&self) -> Vec2 {
        self.prev_hitbox
    }

    /// How strongly this actor pushes others.
    #[must_use]
    pub const fn force(&self) -> u64 {
        self.force
    }

    /// Sets the push strength.
    pub fn set_force(&mut self, force: u64) {
        self.force = force;
    }

    /// How strongly this actor resists being pushed.
    #[must_use]
    pub const fn resistance(&self) -> u64 {
        self.resistance
    }

    /// Sets the push resistance.
    pub fn set_resistance(&mut self, resistance: u64) {
        self.resistance = resistance;
    }

    /// Current world-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.hitbox.x(), self.hitbox.y())
    }

    /// Previous-tick bounding box (the swept reference).
    #[must_use]
    pub fn prev_bounds(&self) -> Rect {
        Rect::from_center_size(
            self.prev_position,
            self.prev_hitbox.x(),
            self.prev_hitbox.y(),
        )
    }

    /// Returns `true` if the previous-tick snapshot equals the current state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.prev_position == self.position && self.prev_hitbox == self.hitbox
    }

    /// Copies the current state into the previous-tick snapshot.
    pub(crate) fn snapshot(&mut self) {
        self.prev_position = self.position;
        self.prev_hitbox = self.hitbox;
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    actor: Option<Actor>,
}

/// Engine-owned contiguous store of actors addressed by [`ActorId`].
///
/// Freed slots are recycled most-recently-freed first, with their generation
/// bumped so stale handles stop resolving.
#[derive(Debug, Clone, Default)]
pub struct ActorArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    len: usize,
}

impl ActorArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `actor` and returns its handle.
    pub fn insert(&mut self, actor: Actor) -> ActorId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.actor = Some(actor);
            return ActorId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            actor: Some(actor),
        });
        ActorId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Removes and returns the actor behind `id`, if it is still live.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let actor = slot.actor.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(actor)
    }

    /// Returns `true` if `id` refers to a live actor.
    #[must_use]
    pub fn contains(&self, id: ActorId) -> bool {
        self.get(id).is_some()
    }

    /// Shared access to a live actor.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.actor.as_ref())
    }

    /// Exclusive access to a live actor.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.actor.as_mut())
    }

    /// Exclusive access to two distinct live actors at once.
    ///
    /// Returns `None` if either handle is stale or both name the same slot.
    pub fn pair_mut(&mut self, a: ActorId, b: ActorId) -> Option<(&mut Actor, &mut Actor)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (lo, hi, swapped) = if a.index < b.index {
            (a.index, b.index, false)
        } else {
            (b.index, a.index, true)
        };
        let (head, tail) = self.slots.split_at_mut(hi);
        let first = head[lo].actor.as_mut()?;
        let second = tail[0].actor.as_mut()?;
        if swapped {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    /// Number of live actors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live actors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates live actors in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.actor.as_ref().map(|actor| {
                (
                    ActorId {
                        index,
                        generation: slot.generation,
                    },
                    actor,
                )
            })
        })
    }
}
