use crate::builders::env::EnvBuilderTrait;
use anyhow::Result;
use segwalk_core::sampler::env_pools::VecEnvPool;

pub enum BuilderType<EB: EnvBuilderTrait> {
    EnvBuilder { builder: EB, n_envs: usize },
    EnvBuilderVec { builders: Vec<EB> },
}

impl<EB: EnvBuilderTrait> BuilderType<EB> {
    pub fn num_envs(&self) -> usize {
        match self {
            Self::EnvBuilder { n_envs, .. } => *n_envs,
            Self::EnvBuilderVec { builders } => builders.len(),
        }
    }

    pub fn build_all_envs(&self) -> Result<Vec<EB::Env>> {
        match self {
            Self::EnvBuilder { builder, n_envs } => {
                (0..*n_envs).map(|_| builder.build_env()).collect()
            }
            Self::EnvBuilderVec { builders } => builders.iter().map(|b| b.build_env()).collect(),
        }
    }
}

/// Collects the settings of a [`VecEnvPool`]. The seed fixes the reset seeds of every environment
/// in the pool.
pub struct EnvPoolBuilder {
    pub n_envs: usize,
    pub seed: Option<u64>,
}

impl Default for EnvPoolBuilder {
    fn default() -> Self {
        Self {
            n_envs: 1,
            seed: None,
        }
    }
}

impl EnvPoolBuilder {
    pub fn with_n_envs(mut self, n_envs: usize) -> Self {
        self.n_envs = n_envs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn builder_type<EB: EnvBuilderTrait>(&self, builder: EB) -> BuilderType<EB> {
        BuilderType::EnvBuilder {
            builder,
            n_envs: self.n_envs,
        }
    }

    pub fn build<EB: EnvBuilderTrait>(&self, builder: EB) -> Result<VecEnvPool<EB::Env>>
    where
        EB::Env: Send,
    {
        self.build_from(&self.builder_type(builder))
    }

    pub fn build_from<EB: EnvBuilderTrait>(
        &self,
        builder_type: &BuilderType<EB>,
    ) -> Result<VecEnvPool<EB::Env>>
    where
        EB::Env: Send,
    {
        let envs = builder_type.build_all_envs()?;
        Ok(VecEnvPool::new(envs, self.seed))
    }
}
