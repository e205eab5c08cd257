use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single random source for one overworld session.
///
/// Every probabilistic decision in the core (encounter trigger, species pick,
/// flee chance, capture roll) draws from this, so a session seeded or scripted
/// in a test is fully deterministic. Draws are labelled with a reason string;
/// a scripted source that runs dry panics with the label so the failing test
/// names the draw it was missing.
#[derive(Debug, Clone)]
pub enum SessionRng {
    /// OS-seeded or seed-derived generator for normal play.
    Live(StdRng),
    /// Pre-scripted rolls in [0,1) for tests.
    Scripted { rolls: Vec<f32>, index: usize },
}

impl SessionRng {
    pub fn new_random() -> Self {
        SessionRng::Live(StdRng::from_os_rng())
    }

    pub fn new_seeded(seed: u64) -> Self {
        SessionRng::Live(StdRng::seed_from_u64(seed))
    }

    pub fn new_for_test(rolls: Vec<f32>) -> Self {
        SessionRng::Scripted { rolls, index: 0 }
    }

    /// One uniform sample in [0,1).
    pub fn next_roll(&mut self, reason: &str) -> f32 {
        match self {
            SessionRng::Live(rng) => rng.random::<f32>(),
            SessionRng::Scripted { rolls, index } => {
                if *index >= rolls.len() {
                    panic!(
                        "SessionRng exhausted! Tried to get a value for: '{}'. Need more scripted rolls.",
                        reason
                    );
                }
                let roll = rolls[*index];

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", roll, reason);

                *index += 1;
                roll
            }
        }
    }

    /// Uniform pick of an index in [0, len). `len` must be nonzero.
    pub fn next_index(&mut self, reason: &str, len: usize) -> usize {
        debug_assert!(len > 0, "next_index called with empty range");
        match self {
            SessionRng::Live(rng) => rng.random_range(0..len),
            scripted => {
                let roll = scripted.next_roll(reason);
                ((roll * len as f32) as usize).min(len - 1)
            }
        }
    }
}
