//! Randomness and time sources for the synthesizer
//!
//! Both are traits so tests can pin the knowledge-graph coin-flip and the
//! relative dates.

use chrono::{Local, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

/// Source of percentile rolls
pub trait Dice: Send + Sync {
    /// A uniform draw in `0..100`
    fn roll(&self) -> u32;
}

/// Rolls from the thread-local generator.
///
/// The generator is seeded once per thread by `rand`, never per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDice;

impl Dice for ThreadDice {
    fn roll(&self) -> u32 {
        rand::thread_rng().gen_range(0..100)
    }
}

/// Reproducible rolls from a seeded generator shared behind a mutex
#[derive(Debug)]
pub struct SeededDice {
    rng: Mutex<StdRng>,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Dice for SeededDice {
    fn roll(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..100)
    }
}

/// Always rolls the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedDice(pub u32);

impl Dice for FixedDice {
    fn roll(&self) -> u32 {
        self.0
    }
}

/// Source of the current date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_dice_in_range() {
        let dice = ThreadDice;
        for _ in 0..1000 {
            assert!(dice.roll() < 100);
        }
    }

    #[test]
    fn test_seeded_dice_is_reproducible() {
        let a = SeededDice::new(42);
        let b = SeededDice::new(42);
        let rolls_a: Vec<u32> = (0..20).map(|_| a.roll()).collect();
        let rolls_b: Vec<u32> = (0..20).map(|_| b.roll()).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|r| *r < 100));
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
