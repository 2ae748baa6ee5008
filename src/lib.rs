//! # rdefrag - An In-Place Memory Defragmentation Library
//!
//! This crate manages a single fixed-size buffer of plain-data elements
//! and **defragments it in place**: free space is recognized by its
//! content (all-zero bytes), occupied data is everything else, and one
//! compaction pass packs the data together without any scratch buffer.
//!
//! ## Overview
//!
//! ```text
//!   In-Place Defragmentation:
//!
//!   Before:
//!
//!   ┌──────┬───────┬──────────┬───────┬────┬───────┐
//!   │ free │ data1 │   free   │ data2 │free│ data3 │
//!   └──────┴───────┴──────────┴───────┴────┴───────┘
//!
//!   After one defragment() call:
//!
//!   ┌────────────────────┬───────┬───────┬───────┐
//!   │        free        │ data1 │ data2 │ data3 │
//!   └────────────────────┴───────┴───────┴───────┘
//!   ▲                    ▲
//!   │                    │
//!   offset 0             occupied data packed at the high end
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rdefrag
//!   ├── error      - Precondition failures for raw buffer adoption
//!   ├── manager    - MemoryManager and the occupied-run iterator
//!   ├── region     - FreeRegion descriptor and the ordered region list
//!   └── scan       - Free-space scanner (internal)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rdefrag::{FreeRegion, MemoryManager};
//!
//! let mut memory = [7u32, 0, 0, 9, 0, 4];
//! let mut manager = MemoryManager::new(&mut memory);
//!
//! // Three occupied elements split by two free regions.
//! assert_eq!(manager.free_lengths().collect::<Vec<_>>(), vec![2, 1]);
//!
//! manager.defragment();
//!
//! assert_eq!(manager.free_regions(), &[FreeRegion::new(0, 3)]);
//!
//! drop(manager);
//! assert_eq!(memory, [0, 0, 0, 7, 9, 4]);
//! ```
//!
//! ## How It Works
//!
//! Adopting a buffer scans it once, recording every maximal run of
//! all-zero elements as a [`FreeRegion`] in ascending address order.
//! Compaction then walks the regions from the tail of the buffer
//! towards the head, shifting each occupied run right by the total
//! free space recorded behind it:
//!
//! ```text
//!   Compaction (tail to head):
//!
//!   regions:  {start: 0, len: 3}  {start: 8, len: 5}  {start: 17, len: 2}
//!
//!   step 1: offset = 2    move run 13..17 right by 2
//!   step 2: offset = 7    move run  3..8  right by 7
//!   step 3: offset = 10   move run  0..0  (empty, head of buffer)
//!
//!   then zero the first 10 elements and record {start: 0, len: 10}
//! ```
//!
//! Because runs move strictly rightward and the rightmost run moves
//! first, every destination is settled before it is written, so the
//! overlapping copies are safe. Afterwards the buffer holds exactly one
//! free region at offset 0 and all occupied data, in its original
//! order, packed at the high end.
//!
//! ## Features
//!
//! - **In place**: No scratch buffer, moves are overlap-safe copies
//! - **Nothing stored beside the data**: Free space is recognized purely
//!   by its all-zero byte pattern
//! - **Generic elements**: Any `Copy` element type, classified by its
//!   representation bytes
//! - **Chainable**: `defragment()` returns `&mut Self` for follow-up
//!   queries
//!
//! ## Limitations
//!
//! - **Zero is the sentinel**: Occupied data that legitimately holds
//!   all-zero bytes cannot be told apart from free space and will be
//!   absorbed into it
//! - **Plain data only**: Element types with padding bytes may classify
//!   unpredictably, since padding content is unspecified
//! - **Single-threaded only**: One manager borrows the buffer
//!   exclusively, there is no synchronization
//! - **No allocation**: The buffer is owned by the caller, the manager
//!   only rearranges its contents
//!
//! ## Safety
//!
//! The slice-based API is entirely safe. Adopting a raw pointer with
//! [`MemoryManager::from_raw_parts`] is `unsafe`: null, misaligned and
//! oversized handles are rejected as [`MemoryError`]s, but liveness and
//! exclusive access remain the caller's contract.

mod error;
mod manager;
mod region;
mod scan;

pub use error::MemoryError;
pub use manager::{MemoryManager, OccupiedRuns};
pub use region::FreeRegion;
