use crate::config::defaults::DEFAULT_OVERHEAD_THRESHOLD_KM;
use crate::position::distance::haversine_km;
use crate::position::types::Position;

/// A fixed point on the ground watching for the ISS.
///
/// The ISS counts as overhead while its ground track is within
/// `overhead_threshold_km` of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    position: Position,
    overhead_threshold_km: f64,
}

impl Observer {
    pub fn new(position: Position, overhead_threshold_km: f64) -> Self {
        Self {
            position,
            overhead_threshold_km,
        }
    }

    /// An observer using the default overhead threshold.
    pub fn at(position: Position) -> Self {
        Self::new(position, DEFAULT_OVERHEAD_THRESHOLD_KM)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn overhead_threshold_km(&self) -> f64 {
        self.overhead_threshold_km
    }

    pub fn distance_km(&self, target: &Position) -> f64 {
        haversine_km(&self.position, target)
    }

    /// True if `target` is within the threshold, boundary included.
    pub fn is_overhead(&self, target: &Position) -> bool {
        self.distance_km(target) <= self.overhead_threshold_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahmedabad() -> Observer {
        Observer::at(Position::new(23.184445, 72.611403).unwrap())
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(ahmedabad().overhead_threshold_km(), 300.0);
    }

    #[test]
    fn test_within_threshold_is_overhead() {
        // Two degrees north along the same meridian, about 222 km.
        let iss = Position::new(25.184445, 72.611403).unwrap();
        assert!(ahmedabad().is_overhead(&iss));
    }

    #[test]
    fn test_beyond_threshold_is_not_overhead() {
        // Three degrees north, about 334 km.
        let iss = Position::new(26.184445, 72.611403).unwrap();
        assert!(!ahmedabad().is_overhead(&iss));
    }

    #[test]
    fn test_custom_threshold() {
        let observer = Observer::new(Position::new(23.184445, 72.611403).unwrap(), 400.0);
        let iss = Position::new(26.184445, 72.611403).unwrap();

        assert!(observer.is_overhead(&iss));
        assert!(observer.distance_km(&iss) > 300.0);
    }

    #[test]
    fn test_same_point_is_overhead() {
        let observer = ahmedabad();
        assert!(observer.is_overhead(&observer.position()));
    }
}
