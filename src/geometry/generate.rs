//! Random circle generation
//!
//! Radii are drawn independently and uniformly from `[min_radius, max_radius]`
//! as `min + (max - min) * u` with `u` in [0, 1).

use crate::error::{Error, Result};
use crate::geometry::Circle;
use crate::rng::{source_for, RandomSource};

/// Check generation bounds
///
/// Returns the count as `usize` once all bounds hold.
pub fn validate_bounds(count: i64, min_radius: f64, max_radius: f64) -> Result<usize> {
    let count = usize::try_from(count)
        .map_err(|_| Error::Generation("count must be non-negative".to_string()))?;
    if min_radius.is_nan() || min_radius < 0.0 {
        return Err(Error::Generation(
            "min_radius must be non-negative".to_string(),
        ));
    }
    if max_radius.is_nan() || max_radius <= 0.0 {
        return Err(Error::Generation(
            "max_radius must be greater than zero".to_string(),
        ));
    }
    if min_radius > max_radius {
        return Err(Error::Generation(
            "min_radius cannot be greater than max_radius".to_string(),
        ));
    }
    Ok(count)
}

/// Generate circles with radii drawn from the given source
///
/// # Arguments
/// * `count` - Number of circles to generate
/// * `min_radius` - Lower radius bound (inclusive)
/// * `max_radius` - Upper radius bound
/// * `source` - Random source, consumed in order
pub fn generate_circles(
    count: i64,
    min_radius: f64,
    max_radius: f64,
    source: &mut dyn RandomSource,
) -> Result<Vec<Circle>> {
    let count = validate_bounds(count, min_radius, max_radius)?;
    let span = max_radius - min_radius;

    Ok(source
        .floats(count)
        .into_iter()
        .map(|u| Circle::new((min_radius + span * u).min(max_radius)))
        .collect())
}

/// Generate circles, seeded when `seed` is given and from entropy otherwise
pub fn generate(
    count: i64,
    min_radius: f64,
    max_radius: f64,
    seed: Option<i64>,
) -> Result<Vec<Circle>> {
    let mut source = source_for(seed);
    generate_circles(count, min_radius, max_radius, source.as_mut())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::pseudo::SeededSource;

    fn radii(circles: &[Circle]) -> Vec<f64> {
        circles.iter().map(|c| c.radius).collect()
    }

    #[test]
    fn test_generates_exact_count_within_range() {
        for count in [0, 1, 5, 250] {
            let circles = generate(count, 1.5, 4.0, Some(42)).unwrap();
            assert_eq!(circles.len(), count as usize);
            for circle in &circles {
                assert!(
                    (1.5..=4.0).contains(&circle.radius),
                    "Radius {} out of range",
                    circle.radius
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_radii() {
        let first = generate(20, 1.0, 10.0, Some(7)).unwrap();
        let second = generate(20, 1.0, 10.0, Some(7)).unwrap();
        assert_eq!(radii(&first), radii(&second));
    }

    #[test]
    fn test_seed_matches_explicit_source() {
        let mut source = SeededSource::new(99);
        let explicit = generate_circles(6, 2.0, 3.0, &mut source).unwrap();
        let seeded = generate(6, 2.0, 3.0, Some(99)).unwrap();
        assert_eq!(explicit, seeded);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let first = generate(16, 0.0, 100.0, None).unwrap();
        let second = generate(16, 0.0, 100.0, None).unwrap();
        assert_ne!(radii(&first), radii(&second));
    }

    #[test]
    fn test_degenerate_range() {
        let circles = generate(3, 1.0, 1.0, Some(1)).unwrap();
        assert!(circles.iter().all(|c| c.radius == 1.0));
    }

    #[test]
    fn test_negative_count() {
        let result = generate(-1, 1.0, 10.0, None);
        assert!(matches!(result, Err(Error::Generation(_))));
    }

    #[test]
    fn test_negative_min_radius() {
        assert!(generate(1, -0.5, 10.0, None).is_err());
    }

    #[test]
    fn test_non_positive_max_radius() {
        assert!(generate(1, 0.0, 0.0, None).is_err());
        assert!(generate(1, 0.0, -1.0, None).is_err());
    }

    #[test]
    fn test_inverted_range() {
        let result = generate(1, 2.0, 1.0, None);
        assert!(matches!(result, Err(Error::Generation(_))));
    }

    #[test]
    fn test_nan_bounds_rejected() {
        assert!(generate(1, f64::NAN, 1.0, None).is_err());
        assert!(generate(1, 0.0, f64::NAN, None).is_err());
    }
}
