use std::{mem, ptr, slice};

use log::{debug, trace};

use crate::error::MemoryError;
use crate::region::{FreeRegion, RegionList};
use crate::scan::scan_free_regions;

/// Defragmenter for one externally-owned buffer of plain-data elements.
///
/// Free space is whatever reads as all-zero bytes; everything else is
/// occupied data. The manager never allocates or frees the buffer, it
/// only rearranges the elements inside it.
pub struct MemoryManager<'mem, T> {
  memory: &'mem mut [T],
  regions: RegionList,
}

impl<'mem, T: Copy> MemoryManager<'mem, T> {
  /// Adopts a buffer and scans it once for free regions.
  pub fn new(memory: &'mem mut [T]) -> Self {
    let regions = scan_free_regions(memory);

    Self { memory, regions }
  }

  /// Adopts `len` elements starting at `memory`, like
  /// [`MemoryManager::new`] but from raw parts.
  ///
  /// The broken handles this can detect are reported as errors instead
  /// of being dereferenced: a null pointer, a pointer misaligned for
  /// `T`, and an element count whose byte size overflows the
  /// addressable range.
  ///
  /// # Safety
  ///
  /// `memory` must point to `len` initialized elements that stay alive,
  /// and are not read or written through any other handle, for `'mem`.
  pub unsafe fn from_raw_parts(
    memory: *mut T,
    len: usize,
  ) -> Result<Self, MemoryError> {
    if memory.is_null() {
      return Err(MemoryError::NullMemory);
    }

    if !memory.is_aligned() {
      return Err(MemoryError::Misaligned);
    }

    if len.saturating_mul(mem::size_of::<T>()) > isize::MAX as usize {
      return Err(MemoryError::SizeOverflow { len });
    }

    Ok(Self::new(unsafe { slice::from_raw_parts_mut(memory, len) }))
  }

  /// Packs all occupied data at the high end of the buffer, leaving a
  /// single free region at offset 0.
  ///
  /// Occupied runs are moved from the tail towards the head, each
  /// shifted right by the total free space behind it, so destinations
  /// are settled before anything is written and overlapping moves stay
  /// safe. Returns `&mut Self` so queries can be chained.
  pub fn defragment(&mut self) -> &mut Self {
    let regions = self.regions.as_slice();
    let mut offset = 0;

    for index in (0..regions.len()).rev() {
      let region = regions[index];
      offset += region.len;

      // The occupied run in front of this region ends where the region
      // starts and begins past the previous region (or at offset 0).
      let run_start = match index.checked_sub(1) {
        Some(previous) => regions[previous].end(),
        None => 0,
      };

      trace!(
        "moving occupied run {}..{} right by {} elements",
        run_start,
        region.start,
        offset,
      );

      self.memory.copy_within(run_start..region.start, run_start + offset);
    }

    self.regions.clear();

    if offset > 0 {
      // All-zero bytes are the free-space convention, so the zeroed
      // prefix holds valid free elements.
      unsafe { ptr::write_bytes(self.memory.as_mut_ptr(), 0, offset) };

      self.regions.push_tail(FreeRegion::new(0, offset));
    }

    debug!(
      "defragment packed {} free elements at the front of {}",
      offset,
      self.memory.len(),
    );

    self
  }

  /// Elements in the managed buffer, free and occupied alike.
  pub fn len(&self) -> usize {
    self.memory.len()
  }

  pub fn is_empty(&self) -> bool {
    self.memory.is_empty()
  }

  /// Free regions in ascending address order.
  pub fn free_regions(&self) -> &[FreeRegion] {
    self.regions.as_slice()
  }

  /// Length of each free region, in address order.
  pub fn free_lengths(&self) -> impl Iterator<Item = usize> + '_ {
    self.regions.iter().map(|region| region.len)
  }

  /// Total free elements across all regions.
  pub fn free_total(&self) -> usize {
    self.regions.total_free()
  }

  pub fn region_count(&self) -> usize {
    self.regions.len()
  }

  /// Occupied runs between the free regions, in address order.
  pub fn occupied_runs(&self) -> OccupiedRuns<'_, T> {
    OccupiedRuns {
      memory: self.memory,
      regions: self.regions.iter(),
      cursor: 0,
    }
  }
}

/// Iterator over the occupied runs of a buffer, yielding each run as a
/// slice of elements.
pub struct OccupiedRuns<'a, T> {
  memory: &'a [T],
  regions: slice::Iter<'a, FreeRegion>,
  cursor: usize,
}

impl<'a, T> Iterator for OccupiedRuns<'a, T> {
  type Item = &'a [T];

  fn next(&mut self) -> Option<&'a [T]> {
    loop {
      match self.regions.next() {
        Some(region) => {
          let run = &self.memory[self.cursor..region.start];
          self.cursor = region.end();

          if !run.is_empty() {
            return Some(run);
          }
        }
        None if self.cursor < self.memory.len() => {
          let run = &self.memory[self.cursor..];
          self.cursor = self.memory.len();

          return Some(run);
        }
        None => return None,
      }
    }
  }
}
