pub mod config;
pub mod cpu_compute;

pub use config::ComputeConfig;
pub use cpu_compute::{copy, CpuCompute};
