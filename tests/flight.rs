use projectile_sim::prelude::*;
use projectile_sim::{add_spherical, LaunchParams, SimError, Simulator, Spherical};

#[test]
fn default_scenario_lands_near_target() {
    let params = LaunchParams::new(30.0, 15.0, 40.0, 20.0, 170.0, 10.0, 20.0, 0.01);
    let mut sim = Simulator::new(&params).unwrap();
    let distance = sim.run(&params).unwrap();

    assert!(distance.is_finite());
    assert!(distance >= 0.0);
    assert_eq!(format!("{distance:.2}"), "5.00");

    let history = sim.history();
    assert!(history.len() >= 2);
    assert_eq!(history.times().len(), history.speeds().len());
    assert!(sim.state().height() <= 0.0);
}

#[test]
fn independent_runs_share_nothing() {
    let params = LaunchParams::default();
    let handles: Vec<_> = [10.0, 25.0, 40.0, 55.0]
        .into_iter()
        .map(|elevation| {
            let params = LaunchParams {
                elevation,
                ..params
            };
            std::thread::spawn(move || Simulator::new(&params)?.fly())
        })
        .collect();

    let distances: Vec<FloatType> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    let mut sequential = Simulator::new(&params).unwrap();
    for (elevation, distance) in [10.0, 25.0, 40.0, 55.0].into_iter().zip(distances) {
        let expected = sequential
            .run(&LaunchParams {
                elevation,
                ..params
            })
            .unwrap();
        assert_eq!(distance, expected);
    }
}

#[test]
fn zero_interval_is_a_configuration_error() {
    let params = LaunchParams {
        interval: 0.0,
        ..Default::default()
    };
    let err = Simulator::new(&params).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("interval"));
}

#[test]
fn spherical_sum_is_public() {
    let sum = add_spherical(3.0, 0.0, 0.0, 4.0, 90.0, 0.0);
    assert!((sum.magnitude - 5.0).abs() < 1e-9);
    assert_eq!(Spherical::ZERO.to_components(), Vector3::zeros());
}
