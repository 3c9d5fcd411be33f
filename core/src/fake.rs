//! `rand` backed [`DataGenerator`] producing faker-style values.

use mapmark_common::generator::DataGenerator;
use mapmark_common::geo::{MAX_LATITUDE, MAX_LONGITUDE};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Chen", "Dolores", "Edsger", "Fatima", "Grace", "Hiro", "Ines",
    "Jamal", "Katherine", "Linus", "Margaret", "Niklaus", "Olga", "Priya", "Radia", "Sven",
    "Tomasz",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Becker", "Cormier", "Dietrich", "Erdman", "Fahey", "Gutmann", "Hettinger",
    "Jacobson", "Kuhlman", "Lowe", "Mertz", "Nader", "Okuneva", "Prosacco", "Quigley",
    "Runolfsdottir", "Schamberger", "Torphy", "Wintheiser",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "and Sons", "LLC", "Group"];

const ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Cross-platform", "Decentralized", "Ergonomic", "Focused",
    "Horizontal", "Integrated", "Multi-layered", "Proactive", "Robust", "Streamlined",
];

const DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "dynamic", "fault-tolerant",
    "heuristic", "mission-critical", "real-time", "scalable", "tangible", "zero tolerance",
];

const NOUNS: &[&str] = &[
    "ability", "algorithm", "archive", "capacity", "extranet", "framework", "hierarchy",
    "initiative", "middleware", "paradigm", "project", "workforce",
];

/// Random source for demo entities.
///
/// Two generators built with the same seed hand out the same sequence.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds a seeded generator when `seed` is given, an OS-seeded one otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn coordinate_component(&mut self, max: f64) -> String {
        format!("{:.4}", self.rng.random_range(-max..=max))
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for RandomGenerator {
    fn company_name(&mut self) -> String {
        match self.rng.random_range(0..3) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(COMPANY_SUFFIXES)),
            1 => format!("{}-{}", self.pick(LAST_NAMES), self.pick(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES)
            ),
        }
    }

    fn catch_phrase(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(ADJECTIVES),
            self.pick(DESCRIPTORS),
            self.pick(NOUNS)
        )
    }

    fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    fn latitude(&mut self) -> String {
        self.coordinate_component(MAX_LATITUDE)
    }

    fn longitude(&mut self) -> String {
        self.coordinate_component(MAX_LONGITUDE)
    }
}
