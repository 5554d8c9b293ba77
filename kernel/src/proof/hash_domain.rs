//! Typed domain separators for canonical hashing.
//!
//! Adding a domain is a single change here: the enum, `as_bytes()`, `ALL`
//! and `Display` are generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used
        /// as a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Grid layout fingerprint (dimensions + obstacle set).
    GridLayout => b"PATHFINDER::GRID_LAYOUT::V1\0",

    /// Ordered trace event stream of one traversal.
    TraceEvents => b"PATHFINDER::TRACE_EVENTS::V1\0",

    /// Search policy snapshot (step cap, limits, cost model).
    SearchPolicy => b"PATHFINDER::SEARCH_POLICY::V1\0",

    /// Harness run report.
    RunReport => b"PATHFINDER::RUN_REPORT::V1\0",
}
