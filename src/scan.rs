use std::{mem, slice};

use log::debug;

use crate::region::{FreeRegion, RegionList};

/// The raw bytes backing one element.
fn element_bytes<T>(element: &T) -> &[u8] {
  // A live reference always spans at most isize::MAX bytes.
  unsafe { slice::from_raw_parts((element as *const T).cast::<u8>(), mem::size_of::<T>()) }
}

/// True when every byte of the element's representation is zero.
///
/// This is the crate's free-space convention: an element whose bytes
/// are all zero counts as free, anything else counts as occupied.
pub fn is_zeroed<T>(element: &T) -> bool {
  element_bytes(element).iter().all(|&byte| byte == 0)
}

enum ScanState {
  Free { start: usize },
  Occupied,
}

/// Walks the buffer once and records every maximal run of zeroed
/// elements as a free region, in ascending address order.
pub fn scan_free_regions<T>(memory: &[T]) -> RegionList {
  let mut regions = RegionList::new();
  let mut state = ScanState::Occupied;

  for (offset, element) in memory.iter().enumerate() {
    state = match state {
      ScanState::Occupied if is_zeroed(element) => ScanState::Free { start: offset },
      ScanState::Free { start } if !is_zeroed(element) => {
        regions.push_tail(FreeRegion::new(start, offset - start));
        ScanState::Occupied
      }
      unchanged => unchanged,
    };
  }

  // A free run touching the end of the buffer has no occupied element
  // behind it to close it off.
  if let ScanState::Free { start } = state {
    regions.push_tail(FreeRegion::new(start, memory.len() - start));
  }

  debug!(
    "scan found {} free regions covering {} of {} elements",
    regions.len(),
    regions.total_free(),
    memory.len(),
  );

  regions
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_zeroed_integers() {
    assert!(is_zeroed(&0u8));
    assert!(is_zeroed(&0i32));
    assert!(is_zeroed(&0u64));

    assert!(!is_zeroed(&1u8));
    assert!(!is_zeroed(&-1i32));
    assert!(!is_zeroed(&0x0100_0000_0000_0000u64));
  }

  #[test]
  fn test_is_zeroed_looks_at_bytes_not_values() {
    // Negative zero compares equal to 0.0 but carries a sign bit, so
    // it is occupied under the byte convention.
    assert!(is_zeroed(&0.0f32));
    assert!(!is_zeroed(&-0.0f32));
  }

  #[test]
  fn test_is_zeroed_compound_element() {
    assert!(is_zeroed(&[0u8; 4]));
    assert!(!is_zeroed(&[0u8, 0, 1, 0]));
  }

  #[test]
  fn test_scan_empty_buffer() {
    let regions = scan_free_regions::<u32>(&[]);

    assert_eq!(regions.len(), 0);
  }

  #[test]
  fn test_scan_fully_occupied() {
    let regions = scan_free_regions(&[1u8, 2, 3]);

    assert_eq!(regions.len(), 0);
    assert_eq!(regions.total_free(), 0);
  }

  #[test]
  fn test_scan_fully_free() {
    let regions = scan_free_regions(&[0u8; 6]);

    assert_eq!(regions.as_slice(), &[FreeRegion::new(0, 6)]);
  }

  #[test]
  fn test_scan_single_element_runs() {
    let regions = scan_free_regions(&[1u16, 0, 1, 0, 1]);

    assert_eq!(
      regions.as_slice(),
      &[FreeRegion::new(1, 1), FreeRegion::new(3, 1)],
    );
  }

  #[test]
  fn test_scan_runs_touching_both_ends() {
    let regions = scan_free_regions(&[0u8, 0, 7, 7, 0, 7, 0, 0, 0]);

    assert_eq!(
      regions.as_slice(),
      &[
        FreeRegion::new(0, 2),
        FreeRegion::new(4, 1),
        FreeRegion::new(6, 3),
      ],
    );
  }

  #[test]
  fn test_scan_regions_are_maximal() {
    let regions = scan_free_regions(&[9u8, 0, 0, 0, 0, 9]);

    // One run of four, never split into shorter adjacent regions.
    assert_eq!(regions.as_slice(), &[FreeRegion::new(1, 4)]);
  }
}
