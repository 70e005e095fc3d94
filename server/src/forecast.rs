//! Randomized five-day weather forecast.
//!
//! The generator owns its random source so tests can seed it and get the same
//! forecast every run.

use chrono::{DateTime, Days, Utc};
use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::WeatherForecast;

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

const DAYS: u64 = 5;

#[derive(Debug)]
pub struct ForecastService {
    rng: Mutex<StdRng>,
}

impl ForecastService {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// One entry for each of the five days after `now`.
    pub fn forecast(&self, now: DateTime<Utc>) -> Vec<WeatherForecast> {
        let mut rng = self.rng.lock();
        (1..=DAYS)
            .map(|day| {
                let temperature_c = rng.random_range(-20..55);
                WeatherForecast {
                    date: now + Days::new(day),
                    temperature_c,
                    temperature_f: to_fahrenheit(temperature_c),
                    summary: SUMMARIES[rng.random_range(0..SUMMARIES.len())].to_string(),
                }
            })
            .collect()
    }
}

/// Truncates toward zero.
fn to_fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}
