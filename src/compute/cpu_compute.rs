use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::LayerError;

use super::config::ComputeConfig;

// Copies exactly count elements from the front of src to the front of dst
pub fn copy<T: Copy>(count: usize, src: &[T], dst: &mut [T]) {
    assert!(src.len() >= count, "copy of {} elements from a source of {}", count, src.len());
    assert!(dst.len() >= count, "copy of {} elements into a destination of {}", count, dst.len());
    dst[..count].copy_from_slice(&src[..count]);
}

pub struct CpuCompute {
    // None runs parallel work on the rayon global pool
    pool: Option<ThreadPool>,
    parallel_threshold: usize,
}

impl CpuCompute {
    pub fn new(config: ComputeConfig) -> Result<Self, LayerError> {
        let config = config.build()?;

        let pool = if config.threads == 1 {
            None
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .thread_name(|idx| format!("switch-cpu-{}", idx))
                .build()
                .map_err(|e| LayerError::ThreadPool(e.to_string()))?;
            debug!("built CPU pool with {} threads", config.threads);
            Some(pool)
        };

        // A single thread never benefits from splitting the batch
        let parallel_threshold = if config.threads == 1 {
            usize::MAX
        } else {
            config.parallel_threshold
        };

        Ok(Self { pool, parallel_threshold })
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    // Chunks are visited in no particular order past the parallel threshold
    pub fn for_each_item<T, F>(&self, item_len: usize, dst: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        if item_len == 0 {
            return;
        }

        if dst.len() < self.parallel_threshold {
            dst.chunks_mut(item_len)
                .enumerate()
                .for_each(|(i, item)| f(i, item));
            return;
        }

        match &self.pool {
            Some(pool) => pool.install(|| par_for_each_item(item_len, dst, &f)),
            None => par_for_each_item(item_len, dst, &f),
        }
    }
}

fn par_for_each_item<T, F>(item_len: usize, dst: &mut [T], f: &F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    dst.par_chunks_mut(item_len)
        .enumerate()
        .for_each(|(i, item)| f(i, item));
}

impl Default for CpuCompute {
    fn default() -> Self {
        Self {
            pool: None,
            parallel_threshold: ComputeConfig::default().parallel_threshold,
        }
    }
}
