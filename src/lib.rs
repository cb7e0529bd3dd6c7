//! Growable sequence stores with injected comparators.
//!
//! This crate provides a variable-length array of fixed-size elements with
//! indexed access, positional insert/remove, concatenation, reversal,
//! comparator-driven membership queries and a stable in-place merge sort.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ comparator.rs│────▶│   store.rs   │────▶│   sort.rs   │
//! │ (Comparator, │     │(SequenceStore│     │(merge_sort_ │
//! │  three_way)  │     │   <T: Copy>) │     │     by)     │
//! └──────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    ▲
//!        ▼                   ▼                    │
//! ┌──────────────┐     ┌──────────────┐           │
//! │   tree.rs    │     │    raw.rs    │───────────┘
//! │(Unbalanced-  │     │  (RawStore,  │
//! │    Tree)     │     │ byte slots)  │
//! └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          growth.rs  +  verify/contracts.rs           │
//! │  (doubling policy, checked arithmetic, debug-build  │
//! │   size/capacity/ordering contracts)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module       | Provides                                         |
//! |--------------|--------------------------------------------------|
//! | `store`      | `SequenceStore<T>`: typed core                   |
//! | `raw`        | `RawStore`: runtime-stride opaque elements       |
//! | `comparator` | `Comparator<T>`: shared three-way ordering       |
//! | `sort`       | Stable merge sort with a single scratch buffer   |
//! | `handle`     | `StoreHandle<T>`: explicit destroy, `NullHandle` |
//! | `tree`       | `UnbalancedTree<T>`: insert/contains BST         |
//! | `growth`     | Capacity doubling policy                         |
//! | `config`     | `StoreConfig`: JSON-loadable parameters          |
//!
//! # Usage
//!
//! ```
//! use dynseq::{Comparator, SequenceStore};
//!
//! let mut store = SequenceStore::with_comparator(2, Comparator::natural())?;
//! for v in [3, 1, 2] {
//!     store.append(v)?;
//! }
//! assert_eq!(store.capacity(), 4);
//!
//! store.sort()?;
//! assert_eq!(store.as_slice(), &[1, 2, 3]);
//! assert_eq!(store.index_of(&2)?, Some(1));
//! # Ok::<(), dynseq::StoreError>(())
//! ```

// Module declarations
pub mod comparator;
pub mod config;
pub mod error;
pub mod growth;
pub mod handle;
pub mod raw;
pub mod sort;
mod store;
pub mod testing;
pub mod tree;
pub mod verify;

// Re-exports for public API
pub use comparator::Comparator;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use growth::DEFAULT_CAPACITY;
pub use handle::{destroy, StoreHandle};
pub use raw::{RawComparator, RawStore};
pub use sort::{is_sorted_by, merge_sort_by};
pub use store::SequenceStore;
pub use tree::UnbalancedTree;
