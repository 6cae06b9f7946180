use radial_velocity::figure::{LEGEND, legend_text, view_bounds};
use radial_velocity::kinematics::OrbitalConfig;
use radial_velocity::scene::Scene;

#[test]
fn view_is_square_and_frames_the_whole_system() {
    let scene = Scene::from_degrees(&OrbitalConfig::default(), 45.0);
    let ((x0, x1), (y0, y1)) = view_bounds(&scene);

    assert!(((x1 - x0) - (y1 - y0)).abs() < 1e-12, "equal axis scale");
    let observer = scene.config.observer;
    assert!(x0 < observer[0] && observer[0] < x1);
    assert!(y0 < observer[1] && observer[1] < y1);
    let reach = scene.radii.planet;
    assert!(x1 > reach && y0 < -reach && y1 > reach);
    // Observer at (-2, 0) and planet orbit reaching 10/11 set the horizontal span.
    assert!(((x1 - x0) - (2.0 + 10.0 / 11.0 + 0.4 + 0.4)).abs() < 1e-12);
}

#[test]
fn legend_lists_every_mark() {
    let text = legend_text();
    assert_eq!(text.lines().count(), LEGEND.len());
    assert!(text.starts_with("- green dot: observer (Earth)\n"));
    assert!(text.contains("- orange arrow: star velocity V\n"));
}
