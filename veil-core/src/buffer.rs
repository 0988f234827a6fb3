#![forbid(unsafe_code)]

//! Typed buffer concatenation.
//!
//! The element type is fixed at compile time through the sealed [`Element`]
//! trait, so concatenating buffers of different element widths is a type
//! error rather than a runtime surprise.

mod sealed {
    pub trait Sealed {}
}

/// Numeric element types a buffer may carry.
///
/// Sealed; implemented for the fixed-width integers and floats only.
pub trait Element: sealed::Sealed + Copy {}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Element for $ty {}
        )*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Concatenate buffers in argument order into one newly allocated buffer.
///
/// Returns `None` when `buffers` is empty: "nothing to concatenate" is a
/// distinct outcome from concatenating supplied-but-empty buffers, which
/// yields `Some` of a zero-length buffer.
pub fn concat<T: Element>(buffers: &[&[T]]) -> Option<Vec<T>> {
    if buffers.is_empty() {
        return None;
    }
    let total: usize = buffers.iter().map(|b| b.len()).sum();
    let mut out = Vec::with_capacity(total);
    for buf in buffers {
        out.extend_from_slice(buf);
    }
    Some(out)
}
