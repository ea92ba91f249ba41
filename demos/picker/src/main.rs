//! Picker demo walking the suite selection flow
//!
//! Builds the registry from the built-in suites, prints which benchmarks each
//! side implements, then exercises toggle and the bulk operations.

use anyhow::Result;
use benchlab_core::{config, logging, BenchConfig, Suite};
use tracing::info;

/// Configuration from `BENCHLAB_CONFIG` (a JSON document), or defaults
fn load_config() -> Result<BenchConfig> {
    match std::env::var("BENCHLAB_CONFIG") {
        Ok(json) => Ok(BenchConfig::from_json(&json)?),
        Err(_) => Ok(BenchConfig::default()),
    }
}

fn main() -> Result<()> {
    let config = config::init_config_with(load_config()?).get_config();
    logging::init_with_filter(&config.log_filter);
    benchlab_core::init()?;

    let state = benchlab_suites::selection_state()?;
    state.on_change(|registry| {
        info!(selected = registry.selected().len(), "selection changed");
    });

    if config.preselect_all {
        state.select_all();
    }

    print_registry(&state.read());

    // walk the selection operations
    state.toggle(Suite::Random);
    info!(selected = ?state.selected(), "after toggling random");

    state.select_all();
    info!(selected = ?state.selected(), "after select-all");

    state.deselect_all();
    info!(selected = ?state.selected(), "after deselect-all");

    Ok(())
}

fn print_registry(registry: &benchlab_core::SuiteRegistry) {
    for (suite, entry) in registry.iter() {
        let marker = if entry.is_selected() { "[x]" } else { "[ ]" };
        println!("{marker} {} ({} benchmarks)", suite.label(), entry.benchmarks().len());
        for (name, pair) in entry.benchmarks().iter() {
            let us = if pair.has_us() { "us" } else { "--" };
            let them = if pair.has_them() { "them" } else { "----" };
            println!("      {name:<20} {us:>2} / {them}");
        }
    }
}
