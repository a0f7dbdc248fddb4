use aiexec_domain::symbol::{Location, SymbolName};
use fxhash::FxHashMap;

/// Symbol name to location, iterated in insertion order.
///
/// Inserting an existing name replaces its location in place.
#[derive(Debug, Clone, Default)]
pub struct LocationMap {
    entries: Vec<(SymbolName, Location)>,
    index: FxHashMap<SymbolName, usize>,
}

impl LocationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<SymbolName>, location: Location) {
        let name = name.into();
        match self.index.get(&name).copied() {
            Some(slot) => self.entries[slot].1 = location,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, location));
            }
        }
    }

    #[must_use]
    pub fn location_of(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &SymbolName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SymbolName, &Location)> {
        self.entries.iter().map(|(name, location)| (name, location))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<SymbolName>> FromIterator<(N, Location)> for LocationMap {
    fn from_iter<I: IntoIterator<Item = (N, Location)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<N: Into<SymbolName>> Extend<(N, Location)> for LocationMap {
    fn extend<I: IntoIterator<Item = (N, Location)>>(&mut self, iter: I) {
        for (name, location) in iter {
            self.insert(name, location);
        }
    }
}
