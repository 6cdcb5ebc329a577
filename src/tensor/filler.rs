use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use std::f64::consts::PI;

use super::{blob::Blob, element::Element};

#[derive(Clone, Debug)]
pub enum Filler {
    Constant(f64),
    Uniform {
        min: f64,
        max: f64,
    },
    Gaussian {
        mean: f64,
        std: f64,
    },
    // Whole numbers in [0, choices), for selector blobs
    Selector {
        choices: usize,
    },
}

impl Filler {
    // Box-Muller transform to generate normal distribution
    fn normal_sample<R: Rng>(rng: &mut R, mean: f64, std: f64) -> f64 {
        let uniform = Uniform::new(f64::EPSILON, 1.0);

        let u1 = uniform.sample(rng);
        let u2 = uniform.sample(rng);

        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std * z
    }

    pub fn fill<T: Element>(&self, blob: &mut Blob<T>) {
        self.fill_with(&mut thread_rng(), blob);
    }

    pub fn fill_seeded<T: Element>(&self, blob: &mut Blob<T>, seed: u64) {
        self.fill_with(&mut StdRng::seed_from_u64(seed), blob);
    }

    // Output gradients for exercising a backward pass
    pub fn fill_gradients_seeded<T: Element>(&self, blob: &mut Blob<T>, seed: u64) {
        self.fill_slice(&mut StdRng::seed_from_u64(seed), blob.gradients_mut());
    }

    pub fn fill_with<T: Element, R: Rng>(&self, rng: &mut R, blob: &mut Blob<T>) {
        self.fill_slice(rng, blob.values_mut());
    }

    fn fill_slice<T: Element, R: Rng>(&self, rng: &mut R, values: &mut [T]) {
        match self {
            Filler::Constant(value) => {
                values.fill(T::from_f64(*value));
            },

            Filler::Uniform { min, max } => {
                let dist = Uniform::new(*min, *max);
                for v in values.iter_mut() {
                    *v = T::from_f64(dist.sample(rng));
                }
            },

            Filler::Gaussian { mean, std } => {
                for v in values.iter_mut() {
                    *v = T::from_f64(Self::normal_sample(rng, *mean, *std));
                }
            },

            Filler::Selector { choices } => {
                assert!(*choices > 0, "selector filler needs at least one choice");
                for v in values.iter_mut() {
                    *v = T::from_f64(rng.gen_range(0..*choices) as f64);
                }
            },
        }
    }
}
