pub mod filter;

pub use filter::{even_numbers, print_even_numbers, Parity};

/// Header printed on its own line before the filtered numbers.
pub const HEADER: &str = "**The List of Even Numbers in this evenArr Array***";

/// Fixed input scanned by the binary.
pub const EVEN_ARR: [i64; 10] = [1, 8, 5, 22, 14, 17, 10, 18, 35, 44];
