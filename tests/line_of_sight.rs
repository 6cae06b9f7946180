use radial_velocity::core::vector::norm;
use radial_velocity::kinematics::{
    ConfigError, LineOfSightDirection, OrbitalConfig, OrbitalMotion, PhaseAngle,
    compute_body_states, compute_line_of_sight,
};

const TOL: f64 = 1e-9;

#[test]
fn direction_points_from_observer_to_center_of_mass() {
    let config = OrbitalConfig::default();
    let dir = LineOfSightDirection::from_config(&config).expect("direction");
    assert_eq!(dir.unit(), [1.0, 0.0]);

    let tilted = LineOfSightDirection::new([0.0, -3.0], [4.0, 0.0]).expect("direction");
    assert!((tilted.unit()[0] - 0.8).abs() < TOL);
    assert!((tilted.unit()[1] - 0.6).abs() < TOL);

    assert_eq!(
        LineOfSightDirection::new([1.0, 1.0], [1.0, 1.0]),
        Err(ConfigError::DegenerateLineOfSight)
    );
}

#[test]
fn aligned_and_orthogonal_velocities() {
    let receding = compute_line_of_sight([-2.0, 0.0], [0.0, 0.0], [0.5, 0.0]);
    assert!((receding.signed_speed - 0.5).abs() < TOL);
    assert!(receding.angle_from_line_of_sight_deg.abs() < 0.05);
    assert!(receding.is_receding());

    let approaching = compute_line_of_sight([-2.0, 0.0], [0.0, 0.0], [-0.5, 0.0]);
    assert!((approaching.signed_speed + 0.5).abs() < TOL);
    assert!((approaching.angle_from_line_of_sight_deg - 180.0).abs() < 0.05);

    let across = compute_line_of_sight([-2.0, 0.0], [0.0, 0.0], [0.0, 0.7]);
    assert!(across.signed_speed.abs() < TOL);
    assert!((across.angle_from_line_of_sight_deg - 90.0).abs() < TOL);
    assert!((across.complement_deg()).abs() < TOL);
}

#[test]
fn signed_speed_never_exceeds_speed() {
    for config in [OrbitalConfig::default(), OrbitalConfig::fixed_speeds()] {
        for deg in (0..=360).map(f64::from) {
            let b = compute_body_states(&config, PhaseAngle::from_degrees(deg));
            for body in [b.star, b.planet] {
                let los = body.line_of_sight(&config);
                assert!(los.signed_speed.abs() <= body.speed() + TOL, "θ = {deg}");
                assert!((0.0..=180.0).contains(&los.angle_from_line_of_sight_deg));
            }
        }
    }
}

#[test]
fn quarter_turn_star_recedes_planet_approaches() {
    let config = OrbitalConfig::default();
    let b = compute_body_states(&config, PhaseAngle::from_degrees(90.0));
    let star = b.star.line_of_sight(&config);
    let planet = b.planet.line_of_sight(&config);
    assert!((star.signed_speed - 1.0 / 11.0).abs() < TOL);
    assert!((planet.signed_speed + 10.0 / 11.0).abs() < TOL);
    assert!(star.angle_from_line_of_sight_deg < 0.05);
    assert!((planet.angle_from_line_of_sight_deg - 180.0).abs() < 0.05);
    let component = planet.component();
    assert!((norm(&component) - 10.0 / 11.0).abs() < TOL);
}

#[test]
fn zero_velocity_reports_ninety_degrees() {
    let config = OrbitalConfig {
        motion: OrbitalMotion::Angular { angular_speed: 0.0 },
        ..OrbitalConfig::default()
    };
    config.validate().expect("stationary system is valid");
    let b = compute_body_states(&config, PhaseAngle::from_degrees(37.0));
    for body in [b.star, b.planet] {
        let los = body.line_of_sight(&config);
        assert_eq!(los.signed_speed, 0.0);
        assert_eq!(los.angle_from_line_of_sight_deg, 90.0);
    }
}

#[test]
fn coincident_observer_falls_back_to_ninety_degrees() {
    let los = compute_line_of_sight([0.0, 0.0], [0.0, 0.0], [0.3, 0.4]);
    assert_eq!(los.signed_speed, 0.0);
    assert_eq!(los.angle_from_line_of_sight_deg, 90.0);
}
