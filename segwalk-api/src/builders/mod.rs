pub mod env;
pub mod env_pool;
