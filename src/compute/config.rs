use crate::error::LayerError;

pub struct ComputeConfig {
    pub threads: usize,
    // Batches with fewer elements than this are copied on the calling thread
    pub parallel_threshold: usize,
}

impl ComputeConfig {
    pub fn build(self) -> Result<Self, LayerError> {
        check_threads(self.threads)?;

        Ok(self)
    }

    pub fn sequential() -> Self {
        Self {
            threads: 1,
            parallel_threshold: usize::MAX,
        }
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            parallel_threshold: 10000,
        }
    }
}

fn check_threads(threads: usize) -> Result<(), LayerError> {
    if threads == 0 {
        return Err(LayerError::InvalidConfig("threads must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_every_cpu() {
        let config = ComputeConfig::default().build().unwrap();
        assert_eq!(config.threads, num_cpus::get());
        assert_eq!(config.parallel_threshold, 10000);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let config = ComputeConfig { threads: 0, ..Default::default() };
        assert!(matches!(config.build(), Err(LayerError::InvalidConfig(_))));
    }
}
