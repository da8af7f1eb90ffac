use noisegen::config::load_config;
use noisegen::source::{FractalMode, NoiseKind};
use noisegen::EqualizerKind;
use std::path::Path;

#[test]
fn demo_config_loads_and_resolves() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/noisegen.json");
    let config = load_config(&path).expect("demo config should parse");

    let noise = config.noise.resolve();
    assert_eq!(noise.kind, NoiseKind::Simplex);
    assert_eq!(noise.fractal, FractalMode::Fbm);

    let pipeline = config
        .pipeline
        .resolve(config.width, config.height)
        .expect("demo pipeline section should be valid");
    assert_eq!(pipeline.blur_sigma, 4.8);
    assert_eq!(pipeline.iterations, 2);
    assert!(pipeline.equalize);
    assert_eq!(pipeline.equalizer, EqualizerKind::Fine);
    assert!(config.output.report_json.is_some());
}

#[test]
fn missing_config_reports_path() {
    let err = load_config(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.contains("does/not/exist.json"), "err={err}");
}
