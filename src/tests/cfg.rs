use crate::{
    constants::{CONVERGENCE_THRESHOLD, MAX_ITERATIONS},
    prelude::Config,
};

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.max_iterations, MAX_ITERATIONS);
    assert_eq!(cfg.max_iterations, 100);
    assert_eq!(cfg.convergence_threshold, CONVERGENCE_THRESHOLD);
    assert_eq!(cfg.convergence_threshold, 1E-12);
}

#[test]
fn config_builder() {
    let cfg = Config::default()
        .with_max_iterations(20)
        .with_convergence_threshold(1E-9);

    assert_eq!(cfg.max_iterations, 20);
    assert_eq!(cfg.convergence_threshold, 1E-9);
}

#[cfg(feature = "serde")]
#[test]
fn config_deserialization() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());

    let cfg: Config = serde_json::from_str("{\"max_iterations\": 10}").unwrap();
    assert_eq!(cfg.max_iterations, 10);
    assert_eq!(cfg.convergence_threshold, CONVERGENCE_THRESHOLD);

    let cfg: Config = serde_json::from_str(
        "{\"max_iterations\": 200, \"convergence_threshold\": 1E-14}",
    )
    .unwrap();
    assert_eq!(cfg.max_iterations, 200);
    assert_eq!(cfg.convergence_threshold, 1E-14);
}
