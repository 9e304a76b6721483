//! Time source

/// Monotonic millisecond counter
///
/// The value wraps at `u32::MAX`; consumers compare with `wrapping_sub`.
pub trait Millis {
    /// Milliseconds since an arbitrary fixed point
    fn millis(&self) -> u32;
}

impl<T: Millis + ?Sized> Millis for &T {
    fn millis(&self) -> u32 {
        (**self).millis()
    }
}
