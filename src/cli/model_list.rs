//! Model listing functionality
//!
//! Prints the built-in model registry. The list is static by design; there
//! is no remote model discovery.

use std::error::Error;

use crate::core::config::Config;
use crate::core::registry::ModelRegistry;

pub fn list_models() -> Result<(), Box<dyn Error>> {
    let registry = ModelRegistry::builtin();
    let config = Config::load()?;

    println!("🤖 Available Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    if let Some(default_model) = &config.default_model {
        println!("🎯 Default model: {default_model} (from config)");
        println!();
    }

    for model in registry.models() {
        println!("  • {}", model.id);
        println!("    Name: {}", model.display_name);
        println!("    {}", model.description);
        println!();
    }

    Ok(())
}
