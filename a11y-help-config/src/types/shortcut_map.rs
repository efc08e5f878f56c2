//! Total map keyed by [`ShortcutName`].
//!
//! Every shortcut has exactly one slot, so lookups never fail and iteration
//! always follows declaration order.

use super::shortcut::ShortcutName;
use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// A value for every [`ShortcutName`].
///
/// Slots are only filled by the constructors, one per name in declaration
/// order, so indexing by [`ShortcutName::index`] always lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMap<T> {
    slots: Vec<T>,
}

impl<T> ShortcutMap<T> {
    /// Build a map by computing the value for each shortcut.
    pub fn from_fn(f: impl FnMut(ShortcutName) -> T) -> Self {
        Self {
            slots: ShortcutName::ALL.into_iter().map(f).collect(),
        }
    }

    /// Promote a partial map, failing on the first shortcut without a value.
    pub fn try_from_partial(mut partial: BTreeMap<ShortcutName, T>) -> Result<Self, ConfigError> {
        let slots = ShortcutName::ALL
            .into_iter()
            .map(|name| {
                partial
                    .remove(&name)
                    .ok_or(ConfigError::MissingShortcut(name))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { slots })
    }

    pub fn get(&self, name: ShortcutName) -> &T {
        &self.slots[name.index()]
    }

    pub fn get_mut(&mut self, name: ShortcutName) -> &mut T {
        &mut self.slots[name.index()]
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ShortcutName, &T)> + Clone {
        ShortcutName::ALL.into_iter().zip(self.slots.iter())
    }

    /// Mutable entries in declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ShortcutName, &mut T)> {
        ShortcutName::ALL.into_iter().zip(self.slots.iter_mut())
    }

    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Always [`ShortcutName::COUNT`].
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Index<ShortcutName> for ShortcutMap<T> {
    type Output = T;

    fn index(&self, name: ShortcutName) -> &T {
        self.get(name)
    }
}

impl<T> IndexMut<ShortcutName> for ShortcutMap<T> {
    fn index_mut(&mut self, name: ShortcutName) -> &mut T {
        self.get_mut(name)
    }
}
