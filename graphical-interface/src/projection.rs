use egui::Pos2;

/// Equirectangular projection of a latitude/longitude pair onto a plane of
/// the given size, used by the flat map renderer. Total: out-of-range
/// coordinates land outside the canvas instead of failing.
pub fn project_point(lat: f64, lon: f64, width: f32, height: f32) -> Pos2 {
    let x = (((lon + 180.0) / 360.0) as f32) * width;
    let y = (((90.0 - lat) / 180.0) as f32) * height;
    Pos2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates_project_within_the_canvas() {
        let samples = [
            (90.0, -180.0),
            (-90.0, 180.0),
            (0.0, 0.0),
            (40.6413, -73.7781),
            (51.47, -0.4543),
            (-33.9461, 151.1772),
        ];

        for (lat, lon) in samples {
            let point = project_point(lat, lon, 1100.0, 550.0);
            assert!(point.x >= 0.0 && point.x <= 1100.0, "x for {} {}", lat, lon);
            assert!(point.y >= 0.0 && point.y <= 550.0, "y for {} {}", lat, lon);
        }
    }

    #[test]
    fn test_the_null_island_projects_to_the_canvas_center() {
        assert_eq!(
            project_point(0.0, 0.0, 1100.0, 550.0),
            Pos2::new(550.0, 275.0)
        );
    }

    #[test]
    fn test_out_of_range_input_lands_outside_the_canvas_not_in_an_error() {
        let point = project_point(120.0, 400.0, 100.0, 100.0);
        assert!(point.y < 0.0);
        assert!(point.x > 100.0);
    }
}
