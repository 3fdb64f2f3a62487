pub mod variable_size_buffer;

pub use variable_size_buffer::VariableSizedTrajectoryBuffer;
