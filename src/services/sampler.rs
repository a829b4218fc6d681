use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("cannot sample from an empty range (max value {0})")]
    NegativeRange(i64),
    #[error("sampled index {index} is outside of 0..{len}")]
    OutOfRange { index: usize, len: usize },
}

/// Source of uniformly distributed integers. Every other part of a forecast is
/// deterministic given the values drawn here.
pub trait Sampler {
    /// Returns a value uniformly distributed over `[0, max_inclusive]`.
    fn sample(&mut self, max_inclusive: i64) -> Result<usize, SamplerError>;
}

/// Draws an index into a collection of `len` elements.
pub(crate) fn draw_index<S: Sampler + ?Sized>(
    sampler: &mut S,
    len: usize,
) -> Result<usize, SamplerError> {
    let index = sampler.sample(len as i64 - 1)?;
    if index >= len {
        return Err(SamplerError::OutOfRange { index, len });
    }
    Ok(index)
}

pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Seeds from OS entropy unless a seed is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample(&mut self, max_inclusive: i64) -> Result<usize, SamplerError> {
        if max_inclusive < 0 {
            return Err(SamplerError::NegativeRange(max_inclusive));
        }
        Ok(self.rng.gen_range(0..=max_inclusive as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SequenceSampler;

    #[test]
    fn sample_rejects_negative_range() {
        let mut sampler = RandomSampler::from_seed(Some(1));
        assert_eq!(sampler.sample(-1), Err(SamplerError::NegativeRange(-1)));
    }

    #[test]
    fn sample_of_zero_is_always_zero() {
        let mut sampler = RandomSampler::from_seed(Some(7));
        for _ in 0..100 {
            assert_eq!(sampler.sample(0), Ok(0));
        }
    }

    #[test]
    fn sample_covers_the_whole_inclusive_range() {
        let mut sampler = RandomSampler::from_seed(Some(42));
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let value = sampler.sample(3).unwrap();
            assert!(value <= 3);
            seen[value] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn draw_index_of_empty_collection_fails() {
        let mut sampler = RandomSampler::from_seed(Some(3));
        assert_eq!(
            draw_index(&mut sampler, 0),
            Err(SamplerError::NegativeRange(-1))
        );
    }

    #[test]
    fn draw_index_rejects_values_beyond_the_collection() {
        let mut sampler = SequenceSampler::new(&[5]);
        assert_eq!(
            draw_index(&mut sampler, 2),
            Err(SamplerError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn same_seed_draws_the_same_sequence() {
        let mut first = RandomSampler::from_seed(Some(99));
        let mut second = RandomSampler::from_seed(Some(99));
        let a: Vec<usize> = (0..20).map(|_| first.sample(10).unwrap()).collect();
        let b: Vec<usize> = (0..20).map(|_| second.sample(10).unwrap()).collect();
        assert_eq!(a, b);
    }
}
