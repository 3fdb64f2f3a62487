pub mod vec_env_pool;

pub use vec_env_pool::VecEnvPool;
