use clap::Parser;
use std::path::{Path, PathBuf};

use codeword_core::{find_default_config, run, InjectorSettings};

#[derive(Debug, Parser)]
#[command(
    name = "codeword-injector",
    version,
    about = "Adds secret exfil codeword notes to map loot tables"
)]
struct Args {
    /// Server database root, or its `locations` directory.
    #[arg(long)]
    database: PathBuf,

    /// Write rewritten loot files here instead of over the database.
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the configured chance (percent).
    #[arg(long, allow_negative_numbers = true)]
    chance: Option<f64>,

    #[arg(long, default_value_t = false)]
    dry_run: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Without `--config`, the shipped `config/config.json` under `base` is
    /// used when present.
    fn into_settings(self, base: &Path) -> InjectorSettings {
        InjectorSettings {
            database_path: self.database,
            output_path: self.output,
            config_path: self.config.or_else(|| find_default_config(base)),
            chance: self.chance,
            dry_run: self.dry_run,
            debug: self.debug,
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = args.into_settings(Path::new("."));
    if let Some(path) = &settings.config_path {
        log::debug!("config: {}", path.display());
    }

    match run(settings) {
        Ok(summary) => {
            for entry in &summary.report.injected {
                println!(
                    "{:<16} {:<22} {:<12} weight {}",
                    entry.map,
                    entry.container.label(),
                    entry.note.name(),
                    entry.weight
                );
            }
            println!(
                "{} notes injected, {} files written",
                summary.report.injected.len(),
                summary.written.len()
            );
            if let Some(path) = &summary.log_path {
                log::info!("log written to {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_flag() {
        let args = Args::try_parse_from([
            "codeword-injector",
            "--database",
            "db",
            "--output",
            "out",
            "--config",
            "my.json",
            "--chance",
            "25",
            "--dry-run",
            "--debug",
        ])
        .unwrap();
        let settings = args.into_settings(Path::new("."));

        assert_eq!(settings.database_path, PathBuf::from("db"));
        assert_eq!(settings.output_path, Some(PathBuf::from("out")));
        assert_eq!(settings.config_path, Some(PathBuf::from("my.json")));
        assert_eq!(settings.chance, Some(25.0));
        assert!(settings.dry_run);
        assert!(settings.debug);
    }

    #[test]
    fn defaults_without_optional_flags() {
        let tmp = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from(["codeword-injector", "--database", "db"]).unwrap();
        let settings = args.into_settings(tmp.path());

        assert_eq!(settings.output_path, None);
        assert_eq!(settings.config_path, None);
        assert_eq!(settings.chance, None);
        assert!(!settings.dry_run);
        assert!(!settings.debug);
    }

    #[test]
    fn accepts_negative_chance() {
        let args =
            Args::try_parse_from(["codeword-injector", "--database", "db", "--chance", "-10"])
                .unwrap();
        assert_eq!(args.chance, Some(-10.0));
    }

    #[test]
    fn falls_back_to_shipped_config() {
        let tmp = tempfile::tempdir().unwrap();
        let shipped = tmp.path().join("config").join("config.json");
        std::fs::create_dir_all(shipped.parent().unwrap()).unwrap();
        std::fs::write(&shipped, r#"{"chance": 10}"#).unwrap();

        let args = Args::try_parse_from(["codeword-injector", "--database", "db"]).unwrap();
        assert_eq!(args.into_settings(tmp.path()).config_path, Some(shipped));

        let args = Args::try_parse_from([
            "codeword-injector",
            "--database",
            "db",
            "--config",
            "other.json",
        ])
        .unwrap();
        assert_eq!(
            args.into_settings(tmp.path()).config_path,
            Some(PathBuf::from("other.json"))
        );
    }

    #[test]
    fn database_is_required() {
        assert!(Args::try_parse_from(["codeword-injector"]).is_err());
    }
}
