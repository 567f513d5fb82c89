//! Target storage with generational indices.
//!
//! The `TargetStore` owns every target in a project and tracks generations
//! to detect stale references to removed targets.

use crate::target::{Target, TargetId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Slot {
    /// Even generations are free, odd generations are alive.
    generation: u32,
    target: Option<Target>,
}

/// Owns targets and hands out generational identifiers.
///
/// Slots are reused from a free list. When a target is removed its slot's
/// generation is incremented, so old identifiers stop resolving.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetStore {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    live_count: usize,
}

impl TargetStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a target and returns its identifier.
    #[allow(clippy::cast_possible_truncation)]
    pub fn insert(&mut self, target: Target) -> TargetId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            // was even/free, now odd/alive
            slot.generation += 1;
            slot.target = Some(target);
            TargetId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                target: Some(target),
            });
            TargetId::new(index, 1)
        }
    }

    /// Removes a target, returning it if the identifier was live.
    pub fn remove(&mut self, id: TargetId) -> Option<Target> {
        if !self.exists(id) {
            return None;
        }
        let slot = &mut self.slots[id.index as usize];
        slot.generation += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;
        slot.target.take()
    }

    /// Checks if an identifier refers to a live target.
    #[must_use]
    pub fn exists(&self, id: TargetId) -> bool {
        self.slots
            .get(id.index as usize)
            .is_some_and(|slot| slot.generation == id.generation && id.generation % 2 == 1)
    }

    /// Returns the target for a live identifier.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&Target> {
        if !self.exists(id) {
            return None;
        }
        self.slots[id.index as usize].target.as_ref()
    }

    /// Returns the number of live targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Checks that the free list, generations and live count agree.
    ///
    /// # Errors
    ///
    /// Returns a description of the first inconsistency.
    pub fn validate(&self) -> Result<(), String> {
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.target.is_some() != (slot.generation % 2 == 1) {
                return Err(format!("slot {index} generation does not match its contents"));
            }
        }
        let mut seen = vec![false; self.slots.len()];
        for &index in &self.free_list {
            match self.slots.get(index as usize) {
                Some(slot) if slot.target.is_none() && !seen[index as usize] => {
                    seen[index as usize] = true;
                }
                Some(_) => return Err(format!("free list entry {index} is not a free slot")),
                None => return Err(format!("free list entry {index} is out of range")),
            }
        }
        let live = self.slots.iter().filter(|slot| slot.target.is_some()).count();
        if live != self.live_count {
            return Err(format!(
                "live count {} does not match {live} stored targets",
                self.live_count
            ));
        }
        Ok(())
    }

    /// Iterates over live targets with their identifiers.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &Target)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.target
                .as_ref()
                .map(|target| (TargetId::new(idx as u32, slot.generation), target))
        })
    }
}
