use std::fmt::Display;
use std::io::{self, Write};

use log::{debug, trace};

/// Evenness test used by the filter.
///
/// Remainders are floored (`rem_euclid`), so negative values are classified
/// the same way as their absolute value: `-4` is even, `-3` is not.
pub trait Parity {
    fn is_even(&self) -> bool;
}

macro_rules! impl_parity_int {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_even(&self) -> bool {
                    self.rem_euclid(2) == 0
                }
            }
        )*
    };
}

macro_rules! impl_parity_float {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                // NaN and the infinities have no remainder
                #[inline]
                fn is_even(&self) -> bool {
                    self.is_finite() && self.rem_euclid(2.0) == 0.0
                }
            }
        )*
    };
}

impl_parity_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_parity_float!(f32, f64);

/// Returns the even elements of `xs` in their original order.
pub fn even_numbers<T: Parity + Copy>(xs: &[T]) -> Vec<T> {
    xs.iter().copied().filter(Parity::is_even).collect()
}

/// Writes every even element of `xs` to `out`, each followed by a single
/// space, as soon as it is found. No newline is written.
///
/// Returns the elements that were written.
pub fn print_even_numbers<T, W>(out: &mut W, xs: &[T]) -> io::Result<Vec<T>>
where
    T: Parity + Display + Copy,
    W: Write,
{
    let mut evens = Vec::new();
    for (idx, &x) in xs.iter().enumerate() {
        if x.is_even() {
            trace!("selected {} at index {}", x, idx);
            write!(out, "{} ", x)?;
            evens.push(x);
        }
    }
    debug!("scanned {} elements, {} even", xs.len(), evens.len());
    Ok(evens)
}
