#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use roulement::{
    calendar::MonthConfig,
    io,
    report::{prepare_reports, TextReport},
    search::{SearchOptions, Solver},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de plannings de garde (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration du mois
    #[arg(long, global = true, default_value = "planning.json")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire la configuration de référence (décembre 2025)
    InitConfig,

    /// Valider la configuration
    Check,

    /// Afficher la classification des jours du mois
    Calendar,

    /// Énumérer puis classer les plannings du mois
    Solve {
        /// Nombre de solutions affichées (0 = aucune, juste le compte)
        #[arg(long, default_value_t = 3)]
        top: usize,
        /// Plafond de solutions collectées (0 = illimité)
        #[arg(long, default_value_t = 100_000)]
        max_solutions: usize,
        /// Désactiver l'élagage (diagnostic)
        #[arg(long)]
        no_prune: bool,
        /// Export JSON des solutions classées (optionnel)
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV des solutions classées (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.config)?;

    let code = match cli.cmd {
        Commands::InitConfig => {
            storage.save(&MonthConfig::december_2025())?;
            println!("Config written to {}", cli.config);
            0
        }
        Commands::Check => {
            let config = storage.load()?;
            config.build()?;
            println!(
                "OK: {} days, target {}h (shift {}h, leave {}h)",
                config.day_count, config.target_hours, config.shift_hours, config.leave_hours
            );
            0
        }
        Commands::Calendar => {
            let config = load_or_default(&storage);
            let calendar = config.build()?;
            for day in calendar.days() {
                let status = if day.holiday { "holiday" } else { "workday" };
                let day_shift = if day.day_shift { " day-shift" } else { "" };
                let night_shift = if day.night_shift { " night-shift" } else { "" };
                println!("{:2} | {status}{day_shift}{night_shift}", day.number);
            }
            0
        }
        Commands::Solve {
            top,
            max_solutions,
            no_prune,
            out_json,
            out_csv,
        } => {
            let config = load_or_default(&storage);
            let calendar = config.build()?;
            let opts = SearchOptions {
                prune: !no_prune,
                max_solutions: if max_solutions == 0 {
                    None
                } else {
                    Some(max_solutions)
                },
            };
            let set = Solver::new(&calendar).solve(opts);
            println!("Found {} solution(s)", set.len());
            if set.is_empty() {
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                if let Some(path) = out_json {
                    io::export_solutions_json(path, &set)?;
                }
                if let Some(path) = out_csv {
                    io::export_solutions_csv(path, &set)?;
                }
                if top > 0 {
                    let renderer = TextReport;
                    for report in prepare_reports(&calendar, &set, top, &renderer)? {
                        println!("\n{}", report.content);
                    }
                }
                0
            }
        }
    };

    std::process::exit(code);
}

/// Repli sur l'instance de référence quand le fichier de config est absent.
fn load_or_default(storage: &JsonStorage) -> MonthConfig {
    match storage.load() {
        Ok(c) => c,
        Err(_) => MonthConfig::december_2025(),
    }
}
