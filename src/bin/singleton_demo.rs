use pattern_tales::{logging, singleton, ConfigError, ConsoleNarrator, DemoConfig};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = DemoConfig::discover()?;
    let out = ConsoleNarrator::new(config.color);

    singleton::run_demo(&out);
    Ok(())
}
