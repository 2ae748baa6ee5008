use std::slice;

/// A maximal run of free (all-zero) elements inside the managed buffer.
///
/// Offsets are element indices, not byte addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRegion {
  pub start: usize,
  pub len: usize,
}

impl FreeRegion {
  pub fn new(
    start: usize,
    len: usize,
  ) -> Self {
    Self { start, len }
  }

  /// First offset past the region.
  pub fn end(&self) -> usize {
    self.start + self.len
  }
}

/// Free regions of one buffer, kept in ascending address order.
///
/// Regions never touch: two adjacent free runs would be a single
/// maximal run, so consecutive entries are always separated by at
/// least one occupied element.
#[derive(Debug)]
pub struct RegionList {
  regions: Vec<FreeRegion>,
}

impl RegionList {
  pub fn new() -> Self {
    Self {
      regions: Vec::new(),
    }
  }

  /// Appends a region behind every existing one.
  pub fn push_tail(
    &mut self,
    region: FreeRegion,
  ) {
    debug_assert!(region.len > 0, "zero-length region");
    if let Some(last) = self.regions.last() {
      debug_assert!(
        region.start > last.end(),
        "region {:?} is not past the current tail {:?}",
        region,
        last,
      );
    }
    self.regions.push(region);
  }

  pub fn clear(&mut self) {
    self.regions.clear();
  }

  pub fn len(&self) -> usize {
    self.regions.len()
  }

  /// Sum of all region lengths, in elements.
  pub fn total_free(&self) -> usize {
    self.regions.iter().map(|region| region.len).sum()
  }

  pub fn as_slice(&self) -> &[FreeRegion] {
    &self.regions
  }

  pub fn iter(&self) -> slice::Iter<'_, FreeRegion> {
    self.regions.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_region_end() {
    let region = FreeRegion::new(3, 5);

    assert_eq!(region.start, 3);
    assert_eq!(region.len, 5);
    assert_eq!(region.end(), 8);
  }

  #[test]
  fn test_empty_list() {
    let list = RegionList::new();

    assert_eq!(list.len(), 0);
    assert_eq!(list.total_free(), 0);
    assert!(list.as_slice().is_empty());
  }

  #[test]
  fn test_push_tail_keeps_address_order() {
    let mut list = RegionList::new();

    list.push_tail(FreeRegion::new(0, 3));
    list.push_tail(FreeRegion::new(8, 5));
    list.push_tail(FreeRegion::new(17, 2));

    assert_eq!(list.len(), 3);
    assert_eq!(list.total_free(), 10);
    assert_eq!(
      list.as_slice(),
      &[
        FreeRegion::new(0, 3),
        FreeRegion::new(8, 5),
        FreeRegion::new(17, 2),
      ],
    );
  }

  #[test]
  fn test_iter_walks_both_directions() {
    let mut list = RegionList::new();

    list.push_tail(FreeRegion::new(1, 2));
    list.push_tail(FreeRegion::new(6, 4));

    let forward: Vec<usize> = list.iter().map(|region| region.start).collect();
    let backward: Vec<usize> = list.iter().rev().map(|region| region.start).collect();

    assert_eq!(forward, vec![1, 6]);
    assert_eq!(backward, vec![6, 1]);
  }

  #[test]
  fn test_clear_empties_the_list() {
    let mut list = RegionList::new();

    list.push_tail(FreeRegion::new(4, 1));
    list.clear();

    assert_eq!(list.len(), 0);
    assert_eq!(list.total_free(), 0);
  }
}
