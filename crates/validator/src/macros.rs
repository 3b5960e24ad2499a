//! Macros that expand the format table into code.
//!
//! The table itself lives in [`catalog::format`](crate::catalog::format) as
//! `for_each_format!`; the macros here are its callbacks.

// ============================================================================
// FACADE METHODS
// ============================================================================

/// Generates one [`Validator`](crate::Validator) method per format row.
///
/// Each method forwards to [`Validator::check`](crate::Validator::check)
/// with its format, so the row's doc comment becomes the method's.
macro_rules! format_methods {
    ($(
        $(#[$doc:meta])*
        $variant:ident, $method:ident, $name:literal, $category:ident,
        $pattern:literal, $example:literal, $counterexample:literal;
    )+) => {
        $(
            $(#[$doc])*
            ///
            #[doc = concat!("Conforming: `", $example, "`. Not conforming: `", $counterexample, "`.")]
            #[inline]
            pub fn $method<M: OutputMode>(&self, value: &str, mode: M) -> M::Output {
                self.check(Format::$variant, value, mode)
            }
        )+
    };
}

pub(crate) use format_methods;
