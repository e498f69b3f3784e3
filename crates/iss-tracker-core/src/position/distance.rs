use crate::position::types::Position;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two positions along the Earth's surface.
pub fn haversine_km(from: &Position, to: &Position) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let delta_phi = (to.latitude() - from.latitude()).to_radians();
    let delta_lambda = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_phi / 2.).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.).sin().powi(2);

    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
