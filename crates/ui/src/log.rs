//! Logging shims.
//!
//! On target the `defmt` feature routes to defmt/RTT; on the desktop
//! emulator the `tracing` feature routes to tracing. With neither enabled the
//! macros compile to nothing. Arguments must be primitives or `&str` so that
//! both backends can format them.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }};
}

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
        #[cfg(feature = "tracing")]
        tracing::info!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use info;
