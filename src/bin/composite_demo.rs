use pattern_tales::{composite, logging, ConfigError, ConsoleNarrator, DemoConfig};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = DemoConfig::discover()?;
    let out = ConsoleNarrator::new(config.color);

    composite::run_demo(&out, &config.tree_style());
    Ok(())
}
