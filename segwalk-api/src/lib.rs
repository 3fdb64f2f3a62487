// builders + evaluation helpers on top of the core crate
pub mod builders;
pub mod utils;

#[cfg(feature = "test-utils")]
pub mod test_utils;
