//! Summary statistics over a circle sequence

use crate::geometry::{Circle, CircleRecord};
use serde::Serialize;

/// Aggregate statistics for an ordered sequence of circles
///
/// Radius statistics and `largest` are `None` for an empty sequence so that
/// absence stays distinguishable from a zero-valued statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSummary {
    /// Circles in generation order
    pub circles: Vec<Circle>,
    /// First circle with the maximum area
    pub largest: Option<Circle>,
    pub total_area: f64,
    pub average_radius: Option<f64>,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
}

/// Structured form of a summary, ready for serialization
///
/// `None` fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub count: usize,
    pub total_area: f64,
    pub average_radius: Option<f64>,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    pub largest: Option<CircleRecord>,
    pub circles: Vec<CircleRecord>,
}

impl CircleSummary {
    /// Number of circles summarized
    pub fn count(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Structured record with derived measurements for every circle
    pub fn as_record(&self) -> SummaryRecord {
        SummaryRecord {
            count: self.count(),
            total_area: self.total_area,
            average_radius: self.average_radius,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            largest: self.largest.as_ref().map(Circle::record),
            circles: self.circles.iter().map(Circle::record).collect(),
        }
    }
}

/// Build a summary of the given circles
///
/// Areas and radii are accumulated in input order. Ties for the largest
/// circle go to the earliest one.
pub fn summarize(circles: Vec<Circle>) -> CircleSummary {
    let Some(first) = circles.first().copied() else {
        return CircleSummary {
            circles,
            largest: None,
            total_area: 0.0,
            average_radius: None,
            min_radius: None,
            max_radius: None,
        };
    };

    let mut total_area = 0.0;
    let mut radius_sum = 0.0;
    let mut largest = first;
    let mut min_radius = first.radius;
    let mut max_radius = first.radius;

    for circle in &circles {
        total_area += circle.area();
        radius_sum += circle.radius;
        if circle.area() > largest.area() {
            largest = *circle;
        }
        min_radius = min_radius.min(circle.radius);
        max_radius = max_radius.max(circle.radius);
    }

    let average_radius = radius_sum / circles.len() as f64;

    CircleSummary {
        circles,
        largest: Some(largest),
        total_area,
        average_radius: Some(average_radius),
        min_radius: Some(min_radius),
        max_radius: Some(max_radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_summary() {
        let summary = summarize(Vec::new());

        assert!(summary.is_empty());
        assert_eq!(summary.largest, None);
        assert_eq!(summary.total_area, 0.0);
        assert_eq!(summary.average_radius, None);
        assert_eq!(summary.min_radius, None);
        assert_eq!(summary.max_radius, None);
    }

    #[test]
    fn test_two_circles() {
        let summary = summarize(vec![Circle::new(1.0), Circle::new(2.0)]);

        assert_eq!(summary.count(), 2);
        assert_relative_eq!(summary.total_area, 5.0 * PI);
        assert_eq!(summary.average_radius, Some(1.5));
        assert_eq!(summary.largest.map(|c| c.radius), Some(2.0));
        assert_eq!(summary.min_radius, Some(1.0));
        assert_eq!(summary.max_radius, Some(2.0));
    }

    #[test]
    fn test_order_preserved() {
        let circles = vec![Circle::new(3.0), Circle::new(1.0), Circle::new(2.0)];
        let summary = summarize(circles.clone());
        assert_eq!(summary.circles, circles);
        assert_eq!(summary.min_radius, Some(1.0));
        assert_eq!(summary.max_radius, Some(3.0));
    }

    #[test]
    fn test_largest_tie_goes_to_first() {
        // 0.0 and -0.0 have equal areas but are distinguishable by sign
        let summary = summarize(vec![Circle::new(0.0), Circle::new(-0.0)]);
        let largest = summary.largest.unwrap();
        assert!(largest.radius.is_sign_positive());

        let summary = summarize(vec![Circle::new(-0.0), Circle::new(0.0)]);
        assert!(summary.largest.unwrap().radius.is_sign_negative());
    }

    #[test]
    fn test_empty_record_uses_null() {
        let record = summarize(Vec::new()).as_record();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["count"], 0);
        assert_eq!(json["total_area"], 0.0);
        assert!(json["average_radius"].is_null());
        assert!(json["min_radius"].is_null());
        assert!(json["max_radius"].is_null());
        assert!(json["largest"].is_null());
        assert_eq!(json["circles"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_record_fields() {
        let record = summarize(vec![Circle::new(1.0), Circle::new(2.0)]).as_record();

        assert_eq!(record.count, 2);
        assert_eq!(record.circles.len(), 2);
        assert_eq!(record.circles[0].radius, 1.0);
        assert_relative_eq!(record.circles[1].area, 4.0 * PI);
        let largest = record.largest.unwrap();
        assert_eq!(largest.radius, 2.0);
        assert_relative_eq!(largest.circumference, 4.0 * PI);
    }
}
