const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Compass label for a wind bearing in degrees.
///
/// Each point covers 22.5 degrees centred on its heading, so `N` spans
/// `[348.75, 11.25)`. Bearings outside `[0, 360)` wrap.
pub fn wind_direction(bearing: f64) -> &'static str {
    let index = ((bearing + 11.25) / 22.5).floor() as i64;
    COMPASS_POINTS[index.rem_euclid(16) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_boundaries() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(11.24), "N");
        assert_eq!(wind_direction(11.26), "NNE");
        assert_eq!(wind_direction(348.75), "N");
        assert_eq!(wind_direction(360.0), "N");
    }

    #[test]
    fn cardinal_points() {
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(180.0), "S");
        assert_eq!(wind_direction(270.0), "W");
        assert_eq!(wind_direction(348.74), "NNW");
    }

    #[test]
    fn negative_bearing_wraps() {
        assert_eq!(wind_direction(-90.0), "W");
    }
}
