//! A random walk on a discrete segment with two absorbing ends, the textbook environment used to
//! introduce value estimation.

pub mod config;
pub mod segment;

pub use config::SegmentConfig;
pub use segment::Segment;
