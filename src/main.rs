use log::info;
use noisegen::config::load_config;
use noisegen::image::io::{save_rgba_png, write_json_file};
use noisegen::source::NoiseSource;
use noisegen::Pipeline;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let pipeline_config = config.pipeline.resolve(config.width, config.height)?;
    let source = NoiseSource::new(config.noise.resolve());
    let mut pipeline = Pipeline::new(pipeline_config);
    let (image, report) = pipeline.run_with_report(&source);

    save_rgba_png(&image, &config.output.image)?;
    info!(
        "Saved {}x{} noise to {} in {:.1} ms",
        image.w,
        image.h,
        config.output.image.display(),
        report.timings.total_ms
    );

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &report)?;
        info!("Saved run report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: noisegen <config.json>".to_string()
}
