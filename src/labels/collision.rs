use super::bounds::LabelBounds;

/// Axis-aligned overlap test. Rectangles that merely touch count as
/// overlapping.
pub fn overlaps(a: &LabelBounds, b: &LabelBounds) -> bool {
    !(a.max_x < b.min_x || a.min_x > b.max_x || a.max_y < b.min_y || a.min_y > b.max_y)
}

/// True when `bounds` overlaps any of `placed`.
pub fn collides_with_any<'a, I>(bounds: &LabelBounds, placed: I) -> bool
where
    I: IntoIterator<Item = &'a LabelBounds>,
{
    placed.into_iter().any(|other| overlaps(bounds, other))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> LabelBounds {
        LabelBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[test]
    fn separated_rects_do_not_overlap() {
        let a = rect(0.0, 10.0, 0.0, 10.0);
        assert!(!overlaps(&a, &rect(20.0, 30.0, 0.0, 10.0)));
        assert!(!overlaps(&a, &rect(0.0, 10.0, 10.5, 12.0)));
        assert!(!overlaps(&a, &rect(-9.0, -0.1, -5.0, 5.0)));
    }

    #[test]
    fn touching_edges_overlap() {
        let a = rect(0.0, 10.0, 0.0, 10.0);
        assert!(overlaps(&a, &rect(10.0, 20.0, 0.0, 10.0)));
        assert!(overlaps(&a, &rect(10.0, 20.0, 10.0, 20.0)));
    }

    #[test]
    fn containment_overlaps() {
        let outer = rect(0.0, 100.0, 0.0, 100.0);
        let inner = rect(40.0, 60.0, 45.0, 55.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn overlap_is_symmetric_and_reflexive() {
        let rects = [
            rect(0.0, 10.0, 0.0, 10.0),
            rect(5.0, 15.0, 5.0, 15.0),
            rect(10.0, 11.0, -3.0, 0.0),
            rect(-20.0, -10.0, 30.0, 40.0),
            rect(2.0, 2.0, 2.0, 2.0),
        ];
        for a in &rects {
            assert!(overlaps(a, a));
            for b in &rects {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn collides_with_any_checks_every_rect() {
        let placed = vec![rect(0.0, 10.0, 0.0, 10.0), rect(50.0, 60.0, 50.0, 60.0)];
        assert!(collides_with_any(&rect(55.0, 70.0, 55.0, 70.0), &placed));
        assert!(!collides_with_any(&rect(20.0, 30.0, 20.0, 30.0), &placed));
        let none: Vec<LabelBounds> = Vec::new();
        assert!(!collides_with_any(&rect(20.0, 30.0, 20.0, 30.0), &none));
    }
}
