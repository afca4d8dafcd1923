//! The player's inventory.

use std::collections::BTreeMap;
use std::fmt;

/// Things the player can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// Obtained by felling a tree.
    Wood,
    /// Dropped by enemies; restores health when used.
    Medkit,
}

impl Item {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Item::Wood => "Wood",
            Item::Medkit => "Medkit",
        }
    }
}

/// Item counts, listed in a stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<Item, u32>,
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` units of `item`.
    pub fn add(&mut self, item: Item, count: u32) {
        if count > 0 {
            *self.items.entry(item).or_insert(0) += count;
        }
    }

    /// Removes one unit of `item`. Returns `false` if there was none.
    pub fn take(&mut self, item: Item) -> bool {
        match self.items.get_mut(&item) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                let _ = self.items.remove(&item);
                true
            }
            None => false,
        }
    }

    /// How many units of `item` are carried.
    pub fn count(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(item, count)` pairs in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.items.iter().map(|(item, n)| (*item, *n))
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }

        for (i, (item, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} x{}", item.name(), count)?;
        }

        Ok(())
    }
}
