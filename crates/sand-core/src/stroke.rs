//! Turning pointer motion into grid coordinates.

/// Interpolates a held pointer between frames so fast drags leave a
/// continuous trail.
///
/// Feed it one pointer sample per frame. While the button is held, each
/// sample after the first yields `resolution + 1` evenly spaced points on
/// the segment from the previous sample, floored to grid cells. Releasing
/// the button forgets the previous sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    previous: Option<(f32, f32)>,
    resolution: u32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Stroke {
    /// A stroke sampling `resolution` segments per frame (at least one).
    pub fn new(resolution: u32) -> Self {
        Self {
            previous: None,
            resolution: resolution.max(1),
        }
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }

    /// Record this frame's pointer sample and return the cells it covers.
    ///
    /// Consecutive duplicate cells are collapsed.
    pub fn sample(&mut self, down: bool, x: f32, y: f32) -> Vec<(i32, i32)> {
        let mut points: Vec<(i32, i32)> = Vec::new();
        if let (true, Some((px, py))) = (down, self.previous) {
            for i in 0..=self.resolution {
                let (t, n) = (i as f32, self.resolution as f32);
                let sx = px + (x - px) * t / n;
                let sy = py + (y - py) * t / n;
                let cell = (sx.floor() as i32, sy.floor() as i32);
                if points.last() != Some(&cell) {
                    points.push(cell);
                }
            }
        }
        self.previous = down.then_some((x, y));
        points
    }
}

/// Cells covered by a square pen of side `size` centered on `(x, y)`.
///
/// Cells whose coordinates would overflow `i32` are left out.
pub fn pen(size: u32, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
    let size = i32::try_from(size).unwrap_or(i32::MAX);
    let half = size / 2;
    (0..size).flat_map(move |dx| {
        (0..size).filter_map(move |dy| {
            let px = x.checked_add(dx - half)?;
            let py = y.checked_add(dy - half)?;
            Some((px, py))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_paints_nothing() {
        let mut stroke = Stroke::default();
        assert!(stroke.sample(true, 3.0, 3.0).is_empty());
        assert!(stroke.is_active());
    }

    #[test]
    fn held_still_paints_one_cell() {
        let mut stroke = Stroke::default();
        stroke.sample(true, 3.5, 2.2);
        assert_eq!(stroke.sample(true, 3.5, 2.2), vec![(3, 2)]);
    }

    #[test]
    fn drag_interpolates_between_samples() {
        let mut stroke = Stroke::new(10);
        stroke.sample(true, 0.0, 0.0);
        let points = stroke.sample(true, 10.0, 0.0);
        let xs: Vec<i32> = points.iter().map(|p| p.0).collect();
        assert_eq!(xs, (0..=10).collect::<Vec<_>>());
        assert!(points.iter().all(|p| p.1 == 0));
    }

    #[test]
    fn release_clears_previous() {
        let mut stroke = Stroke::default();
        stroke.sample(true, 0.0, 0.0);
        assert!(stroke.sample(false, 5.0, 5.0).is_empty());
        assert!(!stroke.is_active());
        // the next press starts a fresh path rather than joining the old one
        assert!(stroke.sample(true, 9.0, 9.0).is_empty());
        assert_eq!(stroke.sample(true, 9.0, 9.0), vec![(9, 9)]);
    }

    #[test]
    fn negative_coordinates_floor_downward() {
        let mut stroke = Stroke::default();
        stroke.sample(true, -0.5, -1.5);
        assert_eq!(stroke.sample(true, -0.5, -1.5), vec![(-1, -2)]);
    }

    #[test]
    fn pen_covers_centered_square() {
        let mut cells: Vec<_> = pen(3, 5, 5).collect();
        cells.sort();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&(4, 4)));
        assert_eq!(cells.last(), Some(&(6, 6)));
    }

    #[test]
    fn pen_at_coordinate_limits_drops_overflowing_cells() {
        let mut high: Vec<_> = pen(3, i32::MAX, 0).collect();
        high.sort();
        assert_eq!(high.len(), 6);
        assert!(high.iter().all(|&(x, _)| x >= i32::MAX - 1));

        let low: Vec<_> = pen(3, i32::MIN, i32::MIN).collect();
        assert_eq!(low.len(), 4);
        assert!(low.contains(&(i32::MIN, i32::MIN)));
    }

    #[test]
    fn huge_pointer_sample_saturates() {
        let mut stroke = Stroke::default();
        stroke.sample(true, 1e12, 0.0);
        let points = stroke.sample(true, 1e12, 0.0);
        assert_eq!(points, vec![(i32::MAX, 0)]);
        assert_eq!(pen(3, points[0].0, points[0].1).count(), 6);
    }

    #[test]
    fn pen_of_one_is_the_point() {
        assert_eq!(pen(1, 2, 3).collect::<Vec<_>>(), vec![(2, 3)]);
        assert_eq!(pen(0, 2, 3).count(), 0);
    }
}
