// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Layer pass: pairwise resolution with force propagation along push chains.
//!
//! Every member takes a turn as the *root*. The root's force is compared
//! with the summed resistance of everything it newly touches (its
//! requirement). Without a surplus the root only backs out of each contact.
//! With a surplus, each contact is pushed with that surplus on top of the
//! contact's own resistance; a contact that actually moved becomes a
//! *branch* and receives the leftover force to push whatever it touches in
//! turn. When a branch settles, its parent backs out of it once more.
//!
//! Branch recursion is driven by an explicit stack of `Frame`s. Actors on
//! the current push path (the root and all ancestor branches) are excluded
//! from a frame's requirement and from its candidates, so a chain never
//! pushes back into itself and depth is bounded by the roster length.

use crate::actor::{ActorArena, ActorId};
use crate::direction::direction;
use crate::layer::LayerId;
use crate::pair::resolve_pair;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wze_geom::Tick;

/// Summary of one layer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerReport {
    /// Layer that was resolved.
    pub layer: LayerId,
    /// Tick the pass ran in.
    pub tick: Tick,
    /// Live members visited.
    pub members: usize,
    /// Pairwise corrections applied (including re-separations).
    pub corrections: usize,
    /// Branches opened by force propagation.
    pub branch_pushes: usize,
    /// Deepest push path reached, counting the root.
    pub max_depth: usize,
}

impl LayerReport {
    pub(crate) const fn empty(layer: LayerId, tick: Tick) -> Self {
        Self {
            layer,
            tick,
            members: 0,
            corrections: 0,
            branch_pushes: 0,
            max_depth: 0,
        }
    }
}

/// One actor distributing force to its contacts.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Roster position of the pushing actor.
    branch: usize,
    /// Force available to this actor.
    force: u64,
    /// Summed resistance of new contacts off the push path.
    requirement: u64,
    /// Next roster position to consider.
    cursor: usize,
    /// Child branch to back out of once its own frame has finished.
    settle: Option<usize>,
}

pub(crate) struct LayerPass<'a> {
    arena: &'a mut ActorArena,
    members: Vec<ActorId>,
    on_path: Vec<bool>,
    epsilon: f64,
    report: LayerReport,
}

impl<'a> LayerPass<'a> {
    pub(crate) fn new(
        arena: &'a mut ActorArena,
        members: Vec<ActorId>,
        epsilon: f64,
        report: LayerReport,
    ) -> Self {
        let on_path = vec![false; members.len()];
        Self {
            arena,
            members,
            on_path,
            epsilon,
            report,
        }
    }

    /// Resolves every root in roster order, then advances each member's
    /// swept snapshot exactly once.
    pub(crate) fn run(mut self) -> LayerReport {
        self.report.members = self.members.len();
        for root in 0..self.members.len() {
            let force = self.force_of(root);
            self.drive(root, force);
        }
        for id in &self.members {
            if let Some(actor) = self.arena.get_mut(*id) {
                actor.snapshot();
            }
        }
        self.report
    }

    fn drive(&mut self, root: usize, force: u64) {
        let mut stack = vec![self.open(root, force)];
        self.report.max_depth = self.report.max_depth.max(stack.len());

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.settle.take() {
                let branch = frame.branch;
                self.resolve(branch, 0, child);
                continue;
            }

            let Some(next) = (frame.cursor..self.members.len()).find(|&i| !self.on_path[i])
            else {
                let done = frame.branch;
                stack.pop();
                self.on_path[done] = false;
                continue;
            };
            frame.cursor = next + 1;

            let Frame {
                branch,
                force,
                requirement,
                ..
            } = *frame;
            if force <= requirement {
                self.resolve(branch, 0, next);
                continue;
            }

            let surplus = force - requirement;
            let incoming = self.resistance_of(next).saturating_add(surplus);
            if self.resolve(branch, incoming, next) {
                frame.settle = Some(next);
                trace!(
                    from = %self.members[branch],
                    to = %self.members[next],
                    surplus,
                    depth = stack.len(),
                    "branch push"
                );
                self.report.branch_pushes += 1;
                let child = self.open(next, surplus);
                stack.push(child);
                self.report.max_depth = self.report.max_depth.max(stack.len());
            }
        }
    }

    /// Puts `branch` on the push path and computes its requirement.
    fn open(&mut self, branch: usize, force: u64) -> Frame {
        self.on_path[branch] = true;
        let requirement = self.requirement(branch);
        Frame {
            branch,
            force,
            requirement,
            cursor: 0,
            settle: None,
        }
    }

    /// Summed resistance of off-path members `branch` newly touches.
    fn requirement(&self, branch: usize) -> u64 {
        let Some(actor) = self.arena.get(self.members[branch]) else {
            return 0;
        };
        self.members
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.on_path[*i])
            .filter_map(|(_, id)| self.arena.get(*id))
            .filter(|other| !direction(actor, other).is_none())
            .fold(0u64, |acc, other| acc.saturating_add(other.resistance()))
    }

    fn resolve(&mut self, first: usize, force: u64, second: usize) -> bool {
        let (a, b) = (self.members[first], self.members[second]);
        let Some((actor1, actor2)) = self.arena.pair_mut(a, b) else {
            return false;
        };
        let Some(separation) = resolve_pair(actor1, force, actor2, self.epsilon) else {
            return false;
        };
        separation.apply(actor1, actor2);
        self.report.corrections += 1;
        debug!(
            first = %a,
            second = %b,
            force,
            direction = %separation.direction,
            "separated"
        );
        true
    }

    fn force_of(&self, slot: usize) -> u64 {
        self.arena
            .get(self.members[slot])
            .map_or(0, |actor| actor.force())
    }

    fn resistance_of(&self, slot: usize) -> u64 {
        self.arena
            .get(self.members[slot])
            .map_or(0, |actor| actor.resistance())
    }
}
