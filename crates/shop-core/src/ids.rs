//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs double as indices: every `shop-*` crate stores per-node and per-agent
//! data in plain `Vec`s indexed by `id.index()`.  The `INVALID` sentinel
//! (`MAX` of the inner integer) marks "no node yet" fields, e.g. a customer
//! that has not reached its first waypoint.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns `INVALID` so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a customer in the simulation's agent pool.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a waypoint node in the shop-floor graph.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a product name in the graph's interned catalog.
    /// `u16` keeps shopping lists compact (max 65,535 distinct products).
    pub struct ProductId(u16);
}
