use thiserror::Error;

/// Rejected preconditions when adopting a raw buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
  #[error("memory pointer is null")]
  NullMemory,

  #[error("memory pointer is not aligned for the element type")]
  Misaligned,

  #[error("{len} elements overflow the addressable byte range")]
  SizeOverflow { len: usize },
}
