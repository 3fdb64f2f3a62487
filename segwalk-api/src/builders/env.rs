use anyhow::Result;
use segwalk_core::env::Env;
use segwalk_env::{Segment, SegmentConfig};

pub trait EnvBuilderTrait: Sync + Send + 'static {
    type Env: Env;

    fn build_env(&self) -> Result<Self::Env>;
}

impl EnvBuilderTrait for SegmentConfig {
    type Env = Segment;

    fn build_env(&self) -> Result<Self::Env> {
        Ok(self.build())
    }
}

impl<E: Env, F: Sync + Send + 'static> EnvBuilderTrait for F
where
    F: Fn() -> Result<E>,
{
    type Env = E;

    fn build_env(&self) -> Result<Self::Env> {
        (self)()
    }
}
