use anyhow::Result;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::{Sighting, SightingKind};

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 50;
const RANDOM_WINDOW_DAYS: i64 = 365;
const ID_OFFSET_RANGE: i64 = 1000;

/// Fixed initial data used to populate the store at startup. Idempotent:
/// repeated calls return list-equal results.
pub fn seed_sightings() -> Vec<Sighting> {
    vec![
        sighting(1, fixed_date(2020, 1, 25, 7, 30), SightingKind::LampShade, 14),
        sighting(2, fixed_date(2020, 1, 20, 21, 11), SightingKind::Blob, 3),
        sighting(3, fixed_date(2020, 1, 25, 7, 30), SightingKind::Blob, 3),
        sighting(4, fixed_date(2020, 1, 25, 7, 30), SightingKind::LampShade, 14),
        sighting(5, fixed_date(2020, 1, 25, 7, 30), SightingKind::Blob, 3),
    ]
}

/// Builds a sighting with random attributes: kind uniform over the
/// enumeration, speed in [1, 50] knots, timestamp within the past year with
/// seconds zeroed, and an id derived from the current epoch millis plus a
/// random offset so collisions with existing ids are negligible.
pub fn random_sighting<R: Rng + ?Sized>(rng: &mut R) -> Sighting {
    let now = Utc::now();
    let id = now.timestamp_millis() + rng.gen_range(0..ID_OFFSET_RANGE);

    let kind = SightingKind::ALL[rng.gen_range(0..SightingKind::ALL.len())];
    let speed = rng.gen_range(MIN_SPEED..=MAX_SPEED);

    let day = (now - Duration::days(rng.gen_range(0..RANDOM_WINDOW_DAYS))).date_naive();
    let time = NaiveTime::from_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), 0)
        .unwrap_or_default();
    let timestamp = day.and_time(time).and_utc();

    Sighting {
        id,
        timestamp,
        kind,
        speed,
    }
}

/// Source of new sightings consumed by the coordinator. The seam exists so
/// tests can substitute a deterministic or failing source.
pub trait SightingSource: Send {
    fn next_sighting(&mut self) -> Result<Sighting>;
}

/// Production source backed by an owned RNG. Ids from one source are strictly
/// increasing: rapid calls can land in the same millisecond, where the raw
/// time-plus-offset id could repeat.
pub struct RandomSightingSource {
    rng: StdRng,
    last_id: i64,
}

impl RandomSightingSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last_id: 0,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_id: 0,
        }
    }
}

impl Default for RandomSightingSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SightingSource for RandomSightingSource {
    fn next_sighting(&mut self) -> Result<Sighting> {
        let mut sighting = random_sighting(&mut self.rng);
        if sighting.id <= self.last_id {
            sighting.id = self.last_id + 1;
        }
        self.last_id = sighting.id;
        Ok(sighting)
    }
}

fn sighting(id: i64, timestamp: DateTime<Utc>, kind: SightingKind, speed: u32) -> Sighting {
    Sighting {
        id,
        timestamp,
        kind,
        speed,
    }
}

fn fixed_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn seed_sightings_is_deterministic() {
        assert_eq!(seed_sightings(), seed_sightings());
    }

    #[test]
    fn seed_sightings_matches_initial_data() {
        let seeds = seed_sightings();
        assert_eq!(seeds.len(), 5);
        assert_eq!(
            seeds.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(seeds[0].kind, SightingKind::LampShade);
        assert_eq!(seeds[0].speed, 14);
        assert_eq!(seeds[1].timestamp, fixed_date(2020, 1, 20, 21, 11));
        assert_eq!(seeds[1].speed, 3);
    }

    #[test]
    fn random_sighting_is_reproducible_with_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = random_sighting(&mut a);
        let second = random_sighting(&mut b);
        // Ids mix in wall-clock millis, so compare the rng-driven fields.
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.speed, second.speed);
        assert_eq!(
            first.timestamp.time().minute(),
            second.timestamp.time().minute()
        );
    }

    #[test]
    fn random_sighting_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        for _ in 0..200 {
            let s = random_sighting(&mut rng);
            assert!((MIN_SPEED..=MAX_SPEED).contains(&s.speed));
            assert_eq!(s.timestamp.second(), 0);
            assert_eq!(s.timestamp.nanosecond(), 0);
            assert!(s.timestamp > now - Duration::days(RANDOM_WINDOW_DAYS + 1));
            assert!(s.timestamp < now + Duration::days(1));
        }
    }

    #[test]
    fn random_source_yields_distinct_ids() {
        let mut source = RandomSightingSource::from_seed(1);
        let mut ids = std::collections::HashSet::new();
        for _ in 0..50 {
            let s = source.next_sighting().unwrap();
            assert!(ids.insert(s.id), "duplicate id {}", s.id);
        }
    }
}
