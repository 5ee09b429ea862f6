//! "Did you know" fact pool
//!
//! One fact is shown at random above the gallery, once per launch.

use rand::Rng;

/// Fixed fact pool.
pub const FACTS: [&str; 8] = [
    "Venus spins backward: on Venus the Sun rises in the west and sets in the east.",
    "A day on Venus is longer than a year on Venus.",
    "There are more stars in the universe than grains of sand on all the world's beaches.",
    "Neutron stars can spin at a rate of 600 rotations per second.",
    "One teaspoon of a neutron star would weigh about 6 billion tons on Earth.",
    "Jupiter has the shortest day of all the planets — it rotates once every ~10 hours.",
    "Saturn would float in water because it's mostly made of gas and is less dense than water.",
    "The footprints on the Moon will likely remain for millions of years because there is no wind to erode them.",
];

/// Pick one fact uniformly at random.
pub fn random_fact() -> &'static str {
    let idx = rand::rng().random_range(0..FACTS.len());
    FACTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fact_is_from_pool() {
        for _ in 0..50 {
            let fact = random_fact();
            assert!(FACTS.contains(&fact));
        }
    }

    #[test]
    fn test_pool_has_no_empty_facts() {
        assert!(FACTS.iter().all(|f| !f.is_empty()));
    }
}
