use pattern_tales::{adapter, composite, logging, singleton, strategy};
use pattern_tales::{ConfigError, ConsoleNarrator, DemoConfig, Narrator};

fn main() -> Result<(), ConfigError> {
    logging::init();
    let config = DemoConfig::discover()?;
    let out = ConsoleNarrator::new(config.color);

    out.heading("=== Adapter ===");
    adapter::run_demo(&out);
    out.say("");

    out.heading("=== Composite ===");
    composite::run_demo(&out, &config.tree_style());
    out.say("");

    out.heading("=== Singleton ===");
    singleton::run_demo(&out);
    out.say("");

    out.heading("=== Strategy ===");
    strategy::run_demo(&out);
    Ok(())
}
