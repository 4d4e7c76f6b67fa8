use std::collections::BTreeMap;

use pokertracker_core::{Entity, PlayerId};

use crate::player::Player;

/// Owned player storage injected into a [`crate::Ledger`].
///
/// Enumeration order is whatever the implementation yields; callers must not
/// depend on it.
pub trait PlayerStore: Send + Sync {
    fn get(&self, id: &PlayerId) -> Option<&Player>;
    fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player>;
    fn insert(&mut self, player: Player);
    fn remove(&mut self, id: &PlayerId) -> Option<Player>;
    fn iter(&self) -> Box<dyn Iterator<Item = &Player> + '_>;
    fn count(&self) -> usize;
}

/// In-memory store keyed by id. Ids are time-ordered, so iteration follows
/// creation order.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    players: BTreeMap<PlayerId, Player>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    fn get_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    fn insert(&mut self, player: Player) {
        self.players.insert(*player.id(), player);
    }

    fn remove(&mut self, id: &PlayerId) -> Option<Player> {
        self.players.remove(id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Player> + '_> {
        Box::new(self.players.values())
    }

    fn count(&self) -> usize {
        self.players.len()
    }
}
