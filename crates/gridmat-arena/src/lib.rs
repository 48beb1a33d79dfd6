//! Bulk block arena allocation for gridmat containers.
//!
//! A [`BlockArena`] grants contiguous blocks of a caller-chosen element
//! type and reclaims them only in bulk: an explicit
//! [`BlockArena::release_all`] or the arena's own drop, whichever comes
//! first. Individual blocks are never freed, resized, or merged.
//!
//! # Architecture
//!
//! ```text
//! BlockArena<T>
//! ├── IndexMap<u32, Block<T>>  (tracked blocks, insertion order = allocation order)
//! ├── generation counter       (advanced on release_all)
//! └── Box<dyn AllocObserver>   (per-arena diagnostics sink)
//! ```
//!
//! Callers hold [`BlockHandle`]s, never pointers. A handle resolves to a
//! borrowed slice through [`BlockArena::get`]; after a bulk release it
//! resolves to `None`, so a released block can never be reached again.
//!
//! # Safety
//!
//! All storage is owned `Box<[T]>` with default-constructed elements.
//! No `unsafe`, no `MaybeUninit`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod handle;

// Public re-exports for the primary API surface.
pub use arena::BlockArena;
pub use handle::BlockHandle;
