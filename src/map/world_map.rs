//! WorldMap - the owned territory store

use crate::core::types::TerritoryId;
use crate::map::territory::Territory;

/// The full set of territories for one game session
///
/// Owned by the session and dropped with it. Territories are looked up
/// by their 1-based user-facing ID; only the combat resolver mutates
/// entries, through [`WorldMap::pair_mut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    territories: Vec<Territory>,
}

impl WorldMap {
    pub fn new(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Whether a 1-based ID addresses a slot on this map
    pub fn contains(&self, id: TerritoryId) -> bool {
        matches!(id.index(), Some(i) if i < self.territories.len())
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index()?)
    }

    /// Disjoint mutable access to two territories at once
    ///
    /// Returns `None` if either ID is out of range or the IDs coincide.
    pub fn pair_mut(
        &mut self,
        a: TerritoryId,
        b: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let (i, j) = (a.index()?, b.index()?);
        if i == j || i >= self.territories.len() || j >= self.territories.len() {
            return None;
        }
        if i < j {
            let (left, right) = self.territories.split_at_mut(j);
            Some((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(i);
            Some((&mut right[0], &mut left[j]))
        }
    }

    /// Number of territories held by the given color
    pub fn count_owned_by(&self, color: &str) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(color))
            .count()
    }

    /// Whether any territory is still held by the given color
    pub fn any_owned_by(&self, color: &str) -> bool {
        self.territories.iter().any(|t| t.is_owned_by(color))
    }

    /// Total troops on the map, all armies combined
    pub fn total_troops(&self) -> u32 {
        self.territories.iter().map(|t| t.troops).sum()
    }
}
