pub mod env_pools;
pub mod trajectory_buffers;
