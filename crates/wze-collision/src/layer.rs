// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision layers: ordered rosters of actor handles.
//!
//! Roster order is insertion order and is part of the resolution contract:
//! pairs are visited in that order and later pairs observe positions moved
//! by earlier ones.

use crate::actor::ActorId;
use core::fmt;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Identifier of a collision layer in `[0, 255]`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LayerId(u8);

impl LayerId {
    /// Wraps a raw layer number.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw layer number.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl From<u8> for LayerId {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Layer membership table.
///
/// Keeps one insertion-ordered roster per non-empty layer plus a reverse
/// index so an actor belongs to at most one layer.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayerTable {
    rosters: BTreeMap<LayerId, Vec<ActorId>>,
    membership: FxHashMap<ActorId, LayerId>,
}

impl LayerTable {
    /// Moves `id` into `layer` (or out of every layer for `None`).
    ///
    /// Returns the layer the actor previously belonged to. Re-assigning the
    /// same layer keeps the actor's roster position.
    pub(crate) fn assign(&mut self, id: ActorId, layer: Option<LayerId>) -> Option<LayerId> {
        let previous = self.membership.get(&id).copied();
        if previous == layer {
            return previous;
        }
        self.remove(id);
        if let Some(layer) = layer {
            self.rosters.entry(layer).or_default().push(id);
            self.membership.insert(id, layer);
        }
        previous
    }

    /// Drops `id` from its roster, keeping the other members' order.
    pub(crate) fn remove(&mut self, id: ActorId) -> Option<LayerId> {
        let layer = self.membership.remove(&id)?;
        if let Some(roster) = self.rosters.get_mut(&layer) {
            roster.retain(|member| *member != id);
            if roster.is_empty() {
                self.rosters.remove(&layer);
            }
        }
        Some(layer)
    }

    /// Empties `layer`, returning its former members in roster order.
    pub(crate) fn clear(&mut self, layer: LayerId) -> Vec<ActorId> {
        let members = self.rosters.remove(&layer).unwrap_or_default();
        for id in &members {
            self.membership.remove(id);
        }
        members
    }

    pub(crate) fn layer_of(&self, id: ActorId) -> Option<LayerId> {
        self.membership.get(&id).copied()
    }

    pub(crate) fn members(&self, layer: LayerId) -> &[ActorId] {
        self.rosters.get(&layer).map_or(&[], Vec::as_slice)
    }

    /// Non-empty layers in ascending id order.
    pub(crate) fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.rosters.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Actor, ActorArena};
    use wze_geom::Vec2;

    fn ids(n: usize) -> Vec<ActorId> {
        let mut arena = ActorArena::new();
        (0..n)
            .map(|_| arena.insert(Actor::new(Vec2::ZERO, 1.0, 1.0)))
            .collect()
    }

    #[test]
    fn moving_between_layers_preserves_remaining_order() {
        let ids = ids(4);
        let (l0, l1) = (LayerId::new(0), LayerId::new(1));
        let mut table = LayerTable::default();
        for id in &ids {
            table.assign(*id, Some(l0));
        }
        assert_eq!(table.assign(ids[1], Some(l1)), Some(l0));
        assert_eq!(table.members(l0), &[ids[0], ids[2], ids[3]]);
        assert_eq!(table.members(l1), &[ids[1]]);
        assert_eq!(table.layer_of(ids[1]), Some(l1));

        assert_eq!(table.assign(ids[1], Some(l0)), Some(l1));
        assert_eq!(table.members(l0), &[ids[0], ids[2], ids[3], ids[1]]);
        assert!(table.members(l1).is_empty());
        assert_eq!(table.layers().collect::<Vec<_>>(), vec![l0]);
    }

    #[test]
    fn reassigning_same_layer_keeps_position() {
        let ids = ids(2);
        let layer = LayerId::new(7);
        let mut table = LayerTable::default();
        table.assign(ids[0], Some(layer));
        table.assign(ids[1], Some(layer));
        table.assign(ids[0], Some(layer));
        assert_eq!(table.members(layer), &[ids[0], ids[1]]);
    }

    #[test]
    fn clear_and_remove_drop_membership() {
        let ids = ids(3);
        let layer = LayerId::new(255);
        let mut table = LayerTable::default();
        for id in &ids {
            table.assign(*id, Some(layer));
        }
        assert_eq!(table.remove(ids[0]), Some(layer));
        assert_eq!(table.remove(ids[0]), None);
        assert_eq!(table.clear(layer), vec![ids[1], ids[2]]);
        assert_eq!(table.layer_of(ids[2]), None);
        assert_eq!(table.layers().count(), 0);
    }
}
