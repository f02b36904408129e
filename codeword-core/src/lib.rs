use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod database;
pub mod inject;
pub mod location;
pub mod notes;

pub use config::{find_default_config, CodewordConfig};
pub use inject::{
    add_codeword_to_cache, guess_chance_of_spawn, total_relative_probability, CodewordInjector,
    InjectedNote, InjectionReport,
};
pub use location::{
    DatabaseTables, ItemDistribution, Location, LocationBase, LocationTable, StaticLootDetails,
};
pub use notes::{note_for_map, CacheContainer, ExfilNote, SECRET_EXFIL_MAPS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectorSettings {
    /// Database root, or its `locations` directory.
    pub database_path: PathBuf,
    /// Where to write the rewritten `staticLoot.json` files. Defaults to
    /// `database_path`.
    pub output_path: Option<PathBuf>,
    /// `config.json`; the built-in defaults are used when absent. The CLI
    /// falls back to `config/config.json` under the working directory.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured chance.
    pub chance: Option<f64>,
    pub dry_run: bool,
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum CodewordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodewordError>;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub report: InjectionReport,
    pub written: Vec<PathBuf>,
    pub log_path: Option<PathBuf>,
}

pub fn run(settings: InjectorSettings) -> Result<RunSummary> {
    if !settings.database_path.exists() {
        return Err(CodewordError::Config(format!(
            "Database path does not exist: {}",
            settings.database_path.display()
        )));
    }

    let mut config = match &settings.config_path {
        Some(path) => CodewordConfig::load(path)?,
        None => CodewordConfig::default(),
    };
    if let Some(chance) = settings.chance {
        config.chance = chance;
        config.check()?;
    }
    log::info!("using chance {}%", config.chance);

    let mut tables = DatabaseTables {
        locations: database::load_locations(&settings.database_path)?,
    };
    log::info!(
        "loaded {} locations from {}",
        tables.locations.len(),
        settings.database_path.display()
    );

    let injector = CodewordInjector::new(config);
    let report = injector.post_db_load(&mut tables);

    let out_root = settings
        .output_path
        .clone()
        .unwrap_or_else(|| settings.database_path.clone());

    let written = if settings.dry_run {
        log::info!("dry run: nothing written");
        Vec::new()
    } else {
        if !out_root.exists() {
            fs::create_dir_all(&out_root)?;
        }
        database::save_static_loot(&out_root, &tables.locations, &report.touched_maps())?
    };

    let log_path = if settings.debug && !settings.dry_run {
        let path = out_root.join("codeword_log.txt");
        fs::write(&path, build_log(&injector, &report))?;
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        report,
        written,
        log_path,
    })
}

fn build_log(injector: &CodewordInjector, report: &InjectionReport) -> String {
    let mut log = format!("Codeword injector chance: {}\n", injector.config().chance);
    log.push_str(&format!("notes injected: {}\n", report.injected.len()));
    for entry in &report.injected {
        log.push_str(&format!(
            "  {}: {} <- {} ({}) weight {}\n",
            entry.map,
            entry.container.label(),
            entry.note.name(),
            entry.note.tpl(),
            entry.weight
        ));
    }
    if report.missing_maps.is_empty() {
        log.push_str("missing maps: none\n");
    } else {
        log.push_str(&format!("missing maps: {}\n", report.missing_maps.join(", ")));
    }
    log
}
