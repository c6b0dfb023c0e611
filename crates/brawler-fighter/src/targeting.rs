//! Target acquisition inside an attack zone.

use brawler_core::geometry::Rect;

/// An enemy as seen by target acquisition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCandidate<T> {
    pub handle: T,
    /// Horizontal anchor of the enemy.
    pub x: f64,
    pub hit_region: Rect,
}

/// Pick the candidate nearest to `origin_x` among those whose hit region overlaps `zone`.
///
/// Distance is the absolute horizontal gap between anchors. On a tie the
/// earliest candidate in iteration order wins.
pub fn select_target<T>(
    zone: &Rect,
    origin_x: f64,
    candidates: impl IntoIterator<Item = TargetCandidate<T>>,
) -> Option<TargetCandidate<T>> {
    let mut best: Option<(f64, TargetCandidate<T>)> = None;
    for candidate in candidates {
        if !zone.overlaps(&candidate.hit_region) {
            continue;
        }
        let distance = (candidate.x - origin_x).abs();
        match &best {
            Some((best_distance, _)) if distance >= *best_distance => {}
            _ => best = Some((distance, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(handle: u32, x: f64) -> TargetCandidate<u32> {
        TargetCandidate {
            handle,
            x,
            hit_region: Rect::new(x - 20.0, 260.0, 40.0, 80.0),
        }
    }

    #[test]
    fn test_empty_zone_selects_nothing() {
        let zone = Rect::new(140.0, 252.0, 240.0, 96.0);
        assert!(select_target(&zone, 400.0, vec![candidate(1, 600.0)]).is_none());
        assert!(select_target(&zone, 400.0, Vec::<TargetCandidate<u32>>::new()).is_none());
    }

    #[test]
    fn test_nearest_wins() {
        let zone = Rect::new(140.0, 252.0, 240.0, 96.0);
        let picked = select_target(&zone, 400.0, vec![candidate(1, 200.0), candidate(2, 330.0)]).unwrap();
        assert_eq!(picked.handle, 2);
    }

    #[test]
    fn test_tie_goes_to_first_found() {
        let zone = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let picked = select_target(&zone, 400.0, vec![candidate(7, 300.0), candidate(8, 500.0)]).unwrap();
        assert_eq!(picked.handle, 7);
    }
}
