#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// `log::trace!` when the `log` feature is enabled; otherwise nothing.
///
/// Arguments are not evaluated when the feature is off.
macro_rules! trace {
  ($($arg:tt)+) => {{
    #[cfg(feature = "log")]
    {
      ::log::trace!(target: "hashes::blake3", $($arg)+);
    }
    #[cfg(not(feature = "log"))]
    {
      let _ = || {
        let _ = ::core::format_args!($($arg)+);
      };
    }
  }};
}

pub(crate) use trace;
