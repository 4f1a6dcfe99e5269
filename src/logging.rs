//! Internal log macros.
//!
//! With the `logging` feature they forward to the `log` facade; without it
//! the arguments are type-checked and nothing is emitted.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use debug;
pub(crate) use trace;
