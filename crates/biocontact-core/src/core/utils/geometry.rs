use nalgebra::{Point3, Vector3};

/// Euclidean distance between two points.
///
/// Evaluates `sqrt(dx² + dy² + dz²)` with the differences taken as `b - a`.
/// Swapping the arguments only negates each difference, so the result is
/// bit-for-bit symmetric and exactly zero for identical points.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Option<Point3<f64>> {
    let (sum, count) = points
        .into_iter()
        .fold((Vector3::<f64>::zeros(), 0usize), |(sum, count), p| {
            (sum + p.coords, count + 1)
        });
    if count == 0 {
        None
    } else {
        Some(Point3::from(sum / count as f64))
    }
}

/// Weighted centroid, per axis `Σ(wₖ·cₖ) / Σwₖ`.
///
/// Returns `None` when there are no points or the weights sum to zero.
pub fn weighted_centroid<'a>(
    points: impl IntoIterator<Item = (&'a Point3<f64>, f64)>,
) -> Option<Point3<f64>> {
    let (weighted_sum, total_weight) = points.into_iter().fold(
        (Vector3::zeros(), 0.0),
        |(sum, total): (Vector3<f64>, f64), (p, w)| (sum + p.coords * w, total + w),
    );
    if total_weight == 0.0 {
        None
    } else {
        Some(Point3::from(weighted_sum / total_weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn distance_matches_pythagorean_example() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert!((distance(&a, &b) - 50.0f64.sqrt()).abs() < EPS);
        assert!((distance(&a, &b) - 7.0710678).abs() < 1e-7);
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        let a = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_satisfies_triangle_inequality() {
        let a = Point3::new(0.3, -1.7, 2.2);
        let b = Point3::new(-4.1, 0.9, 5.5);
        let c = Point3::new(2.8, 3.3, -0.4);

        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c) + EPS);
        assert!(distance(&a, &b) <= distance(&a, &c) + distance(&c, &b) + EPS);
    }

    #[test]
    fn centroid_of_collinear_points_is_middle_point() {
        let points = [
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        ];
        let center = centroid(&points).unwrap();
        assert!((center - Point3::new(2.0, 2.0, 2.0)).norm() < EPS);
    }

    #[test]
    fn centroid_of_nothing_is_none() {
        assert!(centroid(&[] as &[Point3<f64>]).is_none());
    }

    #[test]
    fn weighted_centroid_uses_weights_per_axis() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(4.0, 8.0, -4.0);
        let center = weighted_centroid([(&a, 3.0), (&b, 1.0)]).unwrap();
        assert!((center - Point3::new(1.0, 2.0, -1.0)).norm() < EPS);
    }

    #[test]
    fn weighted_centroid_with_zero_total_weight_is_none() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert!(weighted_centroid([(&a, 0.0)]).is_none());
        assert!(weighted_centroid(std::iter::empty()).is_none());
    }
}
