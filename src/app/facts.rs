use super::catalog;

/// Uniform source of random indices.
///
/// The generator takes this as a seam so tests can drive it with a fixed
/// sequence instead of OS entropy.
pub trait RandomSource {
    /// Return an index uniformly distributed over `[0, len)`. `len` is
    /// always non-zero (the catalogs are non-empty by construction).
    fn next_index(&mut self, len: usize) -> usize;
}

/// Production source backed by the operating system's entropy pool.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let mut bytes = [0u8; 8];
        if getrandom::fill(&mut bytes).is_err() {
            // No entropy source available: degrade to the first item
            // rather than failing.
            return 0;
        }
        (u64::from_le_bytes(bytes) % len as u64) as usize
    }
}

/// Picks the currently displayed cat fact.
///
/// Starts on the first fact in the catalog. `regenerate` may land on the
/// fact already shown; that is a valid outcome, not something to retry.
pub struct FactGenerator<R: RandomSource> {
    current: &'static str,
    random: R,
}

impl FactGenerator<OsRandom> {
    pub fn new() -> Self {
        Self::with_random(OsRandom)
    }
}

impl Default for FactGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> FactGenerator<R> {
    pub fn with_random(random: R) -> Self {
        Self {
            current: catalog::facts()[0],
            random,
        }
    }

    /// The fact currently on display.
    pub fn current(&self) -> &'static str {
        self.current
    }

    /// Select a new fact uniformly at random and make it current.
    pub fn regenerate(&mut self) -> &'static str {
        let facts = catalog::facts();
        let index = self.random.next_index(facts.len());
        self.current = facts[index];
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of indices, then repeats the last one.
    struct ScriptedRandom {
        indices: Vec<usize>,
        position: usize,
    }

    impl ScriptedRandom {
        fn new(indices: Vec<usize>) -> Self {
            Self {
                indices,
                position: 0,
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_index(&mut self, len: usize) -> usize {
            let index = self.indices[self.position.min(self.indices.len() - 1)];
            self.position += 1;
            index % len
        }
    }

    #[test]
    fn test_starts_on_first_fact() {
        let generator = FactGenerator::with_random(ScriptedRandom::new(vec![3]));
        assert_eq!(generator.current(), catalog::facts()[0]);
    }

    #[test]
    fn test_regenerate_follows_random_source() {
        let mut generator = FactGenerator::with_random(ScriptedRandom::new(vec![4, 1, 9]));
        assert_eq!(generator.regenerate(), catalog::facts()[4]);
        assert_eq!(generator.regenerate(), catalog::facts()[1]);
        assert_eq!(generator.regenerate(), catalog::facts()[9]);
    }

    #[test]
    fn test_repeat_selection_is_allowed() {
        let mut generator = FactGenerator::with_random(ScriptedRandom::new(vec![2, 2, 2]));
        let first = generator.regenerate();
        let second = generator.regenerate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_os_random_results_stay_in_catalog() {
        let mut generator = FactGenerator::new();
        for _ in 0..100 {
            let fact = generator.regenerate();
            assert!(catalog::facts().contains(&fact));
        }
    }

    #[test]
    fn test_os_random_index_in_range() {
        let mut random = OsRandom;
        for _ in 0..100 {
            assert!(random.next_index(10) < 10);
        }
    }
}
