use pattern_tales::{adapter, logging, ConfigError, ConsoleNarrator, DemoConfig};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = DemoConfig::discover()?;
    let out = ConsoleNarrator::new(config.color);

    adapter::run_demo(&out);
    Ok(())
}
