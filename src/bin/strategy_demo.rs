use pattern_tales::{logging, strategy, ConfigError, ConsoleNarrator, DemoConfig};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = DemoConfig::discover()?;
    let out = ConsoleNarrator::new(config.color);

    strategy::run_demo(&out);
    Ok(())
}
