use std::hash::BuildHasherDefault;

use crate::hash::default::DefaultHasher;
use crate::id::WidgetId;

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::{HashMap, HashSet};
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use hashbrown::{HashMap, HashSet};
}

/// Builder for the active default hasher, shared by every keyed collection.
pub type IdBuildHasher = BuildHasherDefault<DefaultHasher>;

pub type WidgetMap<V> = map::HashMap<WidgetId, V, IdBuildHasher>;
pub type WidgetSet = map::HashSet<WidgetId, IdBuildHasher>;

/// Insertion-ordered map; iteration order is the order containers were created.
pub type WidgetIndexMap<V> = indexmap::IndexMap<WidgetId, V, IdBuildHasher>;
