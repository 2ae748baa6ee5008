use std::{mem, ptr, slice};

use libc::{c_void, free, malloc};
use rdefrag::MemoryManager;

/// Prints one line per query surface: the free block lengths and the
/// occupied block contents (nonzero bytes of each run, as text).
fn render_state(
  label: &str,
  manager: &MemoryManager<'_, i32>,
) {
  let lengths: Vec<String> = manager.free_lengths().map(|len| len.to_string()).collect();

  let mut runs: Vec<String> = Vec::new();
  for run in manager.occupied_runs() {
    let mut text = String::new();
    for &element in run {
      for byte in element.to_ne_bytes() {
        if byte != 0 {
          text.push(byte as char);
        }
      }
    }
    runs.push(text);
  }

  println!(
    "[{}] Free block lengths: {} | Occupied block contents: {}",
    label,
    lengths.join(", "),
    runs.join(","),
  );
}

fn main() {
  // RUST_LOG=debug shows the scan summary, RUST_LOG=trace every move.
  env_logger::init();

  const LEN: usize = 21;

  unsafe {
    // --------------------------------------------------------------------
    // 1) Fill an externally-owned heap buffer with a fragmented message.
    //    Zeroed elements are free space, everything else is data.
    // --------------------------------------------------------------------
    let raw = malloc(LEN * mem::size_of::<i32>()) as *mut i32;
    assert!(!raw.is_null());

    let pattern: [i32; LEN] = [
      0, 0, 0,
      'C' as i32, 'O' as i32, 'N' as i32, 'T' as i32, 'I' as i32,
      0, 0, 0, 0, 0,
      'G' as i32, 'U' as i32, 'O' as i32, 'U' as i32,
      0, 0,
      'S' as i32, '!' as i32,
    ];
    ptr::copy_nonoverlapping(pattern.as_ptr(), raw, LEN);
    println!("[1] Wrote a fragmented message into {} heap elements", LEN);

    // --------------------------------------------------------------------
    // 2) Adopt the raw buffer. The constructor scans it once and records
    //    every free region.
    // --------------------------------------------------------------------
    let mut manager = MemoryManager::from_raw_parts(raw, LEN).unwrap();
    println!("\n[2] Adopted the buffer");
    render_state("before", &manager);

    // --------------------------------------------------------------------
    // 3) Defragment in place and chain the queries off the same call.
    // --------------------------------------------------------------------
    println!("\n[3] Defragmenting");
    let free_total = manager.defragment().free_total();
    render_state("after", &manager);

    let region = manager.free_regions()[0];
    println!(
      "[3] One region of {} elements, offsets {}..{}",
      free_total,
      region.start,
      region.end(),
    );

    // --------------------------------------------------------------------
    // 4) The moves went through the caller's buffer, not a copy. Read the
    //    packed tail directly from the raw allocation.
    // --------------------------------------------------------------------
    drop(manager);

    let tail = slice::from_raw_parts(raw.add(free_total), LEN - free_total);
    let message: String = tail.iter().map(|&element| element as u8 as char).collect();
    println!("\n[4] Raw buffer tail reads {:?}", message);

    free(raw as *mut c_void);
  }

  // --------------------------------------------------------------------
  // 5) Degenerate case: an empty buffer has nothing to scan or move.
  // --------------------------------------------------------------------
  let mut empty: [u8; 0] = [];
  let mut manager = MemoryManager::new(&mut empty);

  println!(
    "\n[5] Empty buffer: {} regions, {} free elements after defragment",
    manager.region_count(),
    manager.defragment().free_total(),
  );
}
