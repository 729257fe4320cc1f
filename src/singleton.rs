// Pattern: Singleton - one process-wide Registry, created lazily on first request.
// The constructor is private to this module; `Registry::instance` is the only way in.

use crate::narrator::Narrator;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static INSTANCE: OnceLock<Registry> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Registry {
    id: u32,
    // Keeps the struct unconstructible outside this module.
    _private: (),
}

impl Registry {
    fn new() -> Self {
        let id = rand::thread_rng().gen_range(0..10_000);
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::info!(id, "created registry instance");
        Self { id, _private: () }
    }

    /// Identifier picked when the instance was created.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The shared instance. `OnceLock` serializes concurrent first calls, so
    /// the constructor runs at most once per process.
    pub fn instance() -> &'static Registry {
        INSTANCE.get_or_init(Registry::new)
    }

    /// Same as [`Registry::instance`], narrating creation and every hand-out.
    pub fn instance_with(out: &dyn Narrator) -> &'static Registry {
        let registry = INSTANCE.get_or_init(|| {
            out.say("Created new instance...");
            Registry::new()
        });
        out.say(&format!("Returning singleton with id: {}", registry.id));
        registry
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

pub fn get_instance() -> &'static Registry {
    Registry::instance()
}

pub fn run_demo(out: &dyn Narrator) {
    let highlander = Registry::instance_with(out);
    let spartacus = Registry::instance_with(out);

    out.say(&format!(
        "Both requests share one instance: {}",
        std::ptr::eq(highlander, spartacus)
    ));
}
