//! Survey command
//!
//! Generates many independent puzzles and reports how the rules behave in
//! aggregate: solution sizes, how often the serial fallback fires, and how
//! often each rule holds.

use crate::core::{LETTER_COUNT, Letter};
use crate::facts::{BombFacts, generator::random_bomb};
use crate::puzzle::{Solution, generate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Aggregate statistics over surveyed puzzles
#[derive(Debug)]
pub struct SurveyResult {
    pub total_puzzles: usize,
    pub base_seed: u64,
    /// Solution size -> number of puzzles
    pub size_distribution: FxHashMap<usize, usize>,
    pub fallback_count: usize,
    /// Per letter, how many puzzles had its rule hold
    pub rule_hits: [usize; LETTER_COUNT],
    pub average_size: f64,
    pub min_size: usize,
    pub max_size: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl SurveyResult {
    /// Fraction of puzzles in which a letter's rule held
    #[must_use]
    pub fn hit_rate(&self, letter: Letter) -> f64 {
        if self.total_puzzles == 0 {
            return 0.0;
        }
        self.rule_hits[letter.index()] as f64 / self.total_puzzles as f64
    }

    #[must_use]
    pub fn fallback_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            return 0.0;
        }
        self.fallback_count as f64 / self.total_puzzles as f64
    }
}

struct PuzzleSample {
    size: usize,
    fallback: bool,
    hits: [bool; LETTER_COUNT],
}

/// Survey `count` puzzles seeded `base_seed`, `base_seed + 1`, ...
///
/// Each puzzle gets a random bomb unless `fixed_facts` is given. Puzzles are
/// evaluated in parallel; results do not depend on scheduling.
///
/// # Panics
///
/// Will not panic - the progress template is a constant known to parse.
pub fn run_survey(
    count: usize,
    base_seed: u64,
    fixed_facts: Option<&BombFacts>,
    show_progress: bool,
) -> SurveyResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb.set_message("evaluating");

    let start = Instant::now();

    let samples: Vec<PuzzleSample> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let sample = sample_puzzle(base_seed.wrapping_add(offset), fixed_facts);
            pb.inc(1);
            sample
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut size_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut fallback_count = 0;
    let mut rule_hits = [0usize; LETTER_COUNT];
    let mut total_size = 0;
    let mut min_size = usize::MAX;
    let mut max_size = 0;

    for sample in &samples {
        *size_distribution.entry(sample.size).or_insert(0) += 1;
        if sample.fallback {
            fallback_count += 1;
        }
        for (hits, &hit) in rule_hits.iter_mut().zip(&sample.hits) {
            if hit {
                *hits += 1;
            }
        }
        total_size += sample.size;
        min_size = min_size.min(sample.size);
        max_size = max_size.max(sample.size);
    }

    let total_puzzles = samples.len();
    if total_puzzles == 0 {
        min_size = 0;
    }

    SurveyResult {
        total_puzzles,
        base_seed,
        size_distribution,
        fallback_count,
        rule_hits,
        average_size: if total_puzzles == 0 {
            0.0
        } else {
            total_size as f64 / total_puzzles as f64
        },
        min_size,
        max_size,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn sample_puzzle(seed: u64, fixed_facts: Option<&BombFacts>) -> PuzzleSample {
    let mut rng = StdRng::seed_from_u64(seed);
    let random_facts;
    let facts = if let Some(facts) = fixed_facts {
        facts
    } else {
        random_facts = random_bomb(&mut rng);
        &random_facts
    };

    let (letters, colors) = generate(&mut rng);
    let solution = Solution::evaluate(&letters, &colors, facts);

    let mut hits = [false; LETTER_COUNT];
    for verdict in Solution::explain(&letters, &colors, facts) {
        hits[verdict.letter.index()] = verdict.holds;
    }

    PuzzleSample {
        size: solution.count(),
        fallback: solution.fallback().is_some(),
        hits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::SerialNumber;

    #[test]
    fn survey_runs() {
        let result = run_survey(200, 1, None, false);

        assert_eq!(result.total_puzzles, 200);
        assert!(result.min_size >= 1);
        assert!(result.max_size <= LETTER_COUNT);
        assert!(result.average_size >= result.min_size as f64);
        assert!(result.average_size <= result.max_size as f64);
    }

    #[test]
    fn survey_distribution_sums_correctly() {
        let result = run_survey(150, 9, None, false);
        let total: usize = result.size_distribution.values().sum();
        assert_eq!(total, result.total_puzzles);
    }

    #[test]
    fn survey_is_deterministic() {
        let a = run_survey(100, 42, None, false);
        let b = run_survey(100, 42, None, false);

        assert_eq!(a.rule_hits, b.rule_hits);
        assert_eq!(a.fallback_count, b.fallback_count);
        assert_eq!(a.size_distribution, b.size_distribution);
    }

    #[test]
    fn survey_with_fixed_facts() {
        let facts = BombFacts::new(SerialNumber::new("XN4AB2").unwrap());
        let result = run_survey(50, 0, Some(&facts), false);

        // N and W hold on every puzzle for this serial number
        assert_eq!(result.rule_hits[Letter::N.index()], 50);
        assert_eq!(result.rule_hits[Letter::W.index()], 50);
        assert!((result.hit_rate(Letter::N) - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.fallback_count, 0);
        assert_eq!(result.rule_hits[Letter::A.index()], 0);
    }

    #[test]
    fn survey_empty() {
        let result = run_survey(0, 0, None, false);

        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.min_size, 0);
        assert!(result.fallback_rate().abs() < f64::EPSILON);
    }
}
