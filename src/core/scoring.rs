use rand::Rng;
use crate::models::{Profile, ScoringWeights, CompatibilityDetails};
use crate::core::{
    similarity::{circular_distance, hobby_overlap, name_similarity, normalize_tokens},
    zodiac::{compatibility, ZodiacSign},
};

/// Round and clamp a raw score into `[min, max]`
#[inline]
pub fn clamp_score(raw: f64, min: u8, max: u8) -> u8 {
    if raw.is_nan() {
        return min;
    }
    raw.round().clamp(min as f64, max as f64) as u8
}

/// Personality score (0-100)
///
/// score = round(
///     name_score * 0.4 +
///     birthday_score * 0.4 +
///     gender_score * 0.2
/// )
pub fn personality_score<R: Rng + ?Sized>(p1: &Profile, p2: &Profile, rng: &mut R) -> u8 {
    let name = name_score(&p1.name, &p2.name, rng) as f64;
    let birthday = birthday_score(p1, p2) as f64;
    let gender = gender_score(&p1.gender, &p2.gender, rng) as f64;

    clamp_score(name * 0.4 + birthday * 0.4 + gender * 0.2, 0, 100)
}

/// Character-overlap score of two names, with a random lift of up to 30
pub fn name_score<R: Rng + ?Sized>(name1: &str, name2: &str, rng: &mut R) -> u8 {
    let similarity = name_similarity(name1, name2) * 100.0;
    clamp_score(similarity + rng.gen_range(0.0..30.0), 40, 100)
}

/// Birthday proximity score (deterministic)
///
/// Year difference dominates (70%); month and day difference make up the rest.
pub fn birthday_score(p1: &Profile, p2: &Profile) -> u8 {
    let (year1, month1, day1) = p1.birth_parts();
    let (year2, month2, day2) = p2.birth_parts();

    let year_diff = year1.abs_diff(year2) as f64;
    let age_diff_score = (100.0 - year_diff * 5.0).max(0.0);

    let month_diff = month1.abs_diff(month2) as f64;
    let day_diff = day1.abs_diff(day2) as f64;
    let month_day_score = (100.0 - month_diff * 8.0 - day_diff * 1.5).max(0.0);

    clamp_score(age_diff_score * 0.7 + month_day_score * 0.3, 0, 100)
}

/// Gender compatibility, uniform in 85..=100 for any pairing
pub fn gender_score<R: Rng + ?Sized>(_gender1: &str, _gender2: &str, rng: &mut R) -> u8 {
    rng.gen_range(85..=100)
}

/// Hobby overlap score
pub fn hobbies_score<R: Rng + ?Sized>(hobbies1: &[String], hobbies2: &[String], rng: &mut R) -> u8 {
    let hobbies1 = normalize_tokens(hobbies1);
    let hobbies2 = normalize_tokens(hobbies2);

    match (hobbies1.is_empty(), hobbies2.is_empty()) {
        (true, true) => 50,
        (true, false) | (false, true) => rng.gen_range(40..60),
        (false, false) => {
            let ratio = hobby_overlap(&hobbies1, &hobbies2);
            clamp_score(ratio * 100.0 + rng.gen_range(0.0..20.0), 30, 100)
        }
    }
}

/// Lifestyle score from birth month (season) and day (routine)
pub fn lifestyle_score<R: Rng + ?Sized>(p1: &Profile, p2: &Profile, rng: &mut R) -> u8 {
    let (_, month1, day1) = p1.birth_parts();
    let (_, month2, day2) = p2.birth_parts();

    let month_diff = circular_distance(month1, month2, 12) as f64;
    let season_score = (100.0 - month_diff * 15.0).max(0.0);

    let day_diff = circular_distance(day1, day2, 31) as f64;
    let routine_score = (100.0 - day_diff * 5.0).max(0.0);

    let base = season_score * 0.4 + routine_score * 0.6;
    clamp_score(base + rng.gen_range(0.0..15.0), 40, 100)
}

/// Zodiac score: table lookup plus an integer jitter of up to 5 either way
pub fn zodiac_score<R: Rng + ?Sized>(p1: &Profile, p2: &Profile, rng: &mut R) -> u8 {
    let sign1 = ZodiacSign::from_date(p1.birthday);
    let sign2 = ZodiacSign::from_date(p2.birthday);

    let base = compatibility(sign1, sign2) as i32;
    let jitter: i32 = rng.gen_range(-5..=5);

    clamp_score((base + jitter) as f64, 40, 100)
}

/// Long-term potential, recomputed from fresh personality, hobby and lifestyle draws
pub fn long_term_score<R: Rng + ?Sized>(p1: &Profile, p2: &Profile, rng: &mut R) -> u8 {
    let personality = personality_score(p1, p2, rng) as f64;
    let hobbies = hobbies_score(&p1.hobbies, &p2.hobbies, rng) as f64;
    let lifestyle = lifestyle_score(p1, p2, rng) as f64;

    let base = personality * 0.4 + hobbies * 0.3 + lifestyle * 0.3;
    clamp_score(base + rng.gen_range(-5.0..5.0), 40, 100)
}

/// Weighted overall score (0-100)
pub fn overall_score(details: &CompatibilityDetails, weights: &ScoringWeights) -> u8 {
    let total = details.personality as f64 * weights.personality
        + details.hobbies as f64 * weights.hobbies
        + details.lifestyle as f64 * weights.lifestyle
        + details.zodiac as f64 * weights.zodiac
        + details.long_term as f64 * weights.long_term;

    clamp_score(total, 0, 100)
}
