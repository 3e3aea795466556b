//! Logging shims.
//!
//! Routes the driver's log statements to `defmt` or `log` depending on the
//! enabled feature. With neither enabled the macros compile to nothing; the
//! fallbacks reach the rest of the crate through `#[macro_use]`.

#![allow(unused_macros, unused_imports)]

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, trace, warn};

#[cfg(all(feature = "log", not(feature = "defmt")))]
pub(crate) use log::{debug, trace, warn};

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
