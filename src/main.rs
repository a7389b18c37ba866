// src/main.rs
//
// Calculatrice web — point d’entrée
// ---------------------------------
// - serve  : serveur HTTP (page du pavé + POST /calculate)
// - eval   : évaluation ponctuelle en ligne de commande
// - bureau : pavé natif egui (feature "bureau")
//
// Logs : RUST_LOG (défaut "info"), ex. RUST_LOG=calculatrice_web=debug

use std::net::IpAddr;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use calculatrice_web::noyau::{evaluer, Limites, MARQUEUR_ERREUR};
use calculatrice_web::serveur::{config::ServerConfig, start_server};

/// Titre unique (fenêtre native).
#[cfg(feature = "bureau")]
const TITRE_APP: &str = "Calculatrice";

#[derive(Parser)]
#[command(name = "calculatrice-web")]
#[command(about = "Calculatrice : pavé web + évaluation d’expressions arithmétiques")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Démarre le serveur HTTP
    Serve(ServeArgs),
    /// Évalue une expression et affiche le résultat (ou "Error")
    Eval {
        /// Expression, ex. "(1+2)*3"
        #[arg(allow_hyphen_values = true)]
        expression: String,
        #[command(flatten)]
        limites: LimitesArgs,
    },
    /// Ouvre le pavé natif (binaire compilé avec la feature "bureau")
    Bureau {
        #[command(flatten)]
        limites: LimitesArgs,
    },
}

#[derive(Args)]
struct ServeArgs {
    /// Adresse d’écoute
    #[arg(long, env = "CALC_HOST", default_value = "127.0.0.1")]
    host: IpAddr,
    /// Port d’écoute
    #[arg(short, long, env = "CALC_PORT", default_value_t = 5000)]
    port: u16,
    /// CORS ouvert à toutes les origines (développement)
    #[arg(long)]
    cors_all: bool,
    /// Taille max du corps de requête (Kio)
    #[arg(long, default_value_t = 16)]
    max_body_kb: u64,
    #[command(flatten)]
    limites: LimitesArgs,
}

#[derive(Args)]
struct LimitesArgs {
    /// Longueur max d’une expression (caractères)
    #[arg(long, default_value_t = Limites::default().longueur_max)]
    longueur_max: usize,
}

impl LimitesArgs {
    fn limites(&self) -> Limites {
        Limites {
            longueur_max: self.longueur_max,
            ..Limites::default()
        }
    }
}

fn init_logs() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logs();

    match cli.command {
        Commands::Serve(args) => {
            let config = ServerConfig {
                host: args.host,
                port: args.port,
                cors_all: args.cors_all,
                max_body_size_kb: args.max_body_kb,
                limites: args.limites.limites(),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(start_server(config))?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Eval {
            expression,
            limites,
        } => match evaluer(&expression, &limites.limites()) {
            Ok(v) => {
                println!("{v}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                debug!(erreur = %e, "évaluation refusée");
                println!("{MARQUEUR_ERREUR}");
                Ok(ExitCode::FAILURE)
            }
        },

        Commands::Bureau { limites } => {
            lancer_bureau(limites.limites())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(feature = "bureau")]
fn lancer_bureau(limites: Limites) -> anyhow::Result<()> {
    use calculatrice_web::app::AppCalc;
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 420.0])
            .with_min_inner_size([300.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(limites)))),
    )
    .map_err(|e| anyhow::anyhow!("fenêtre native: {e}"))
}

#[cfg(not(feature = "bureau"))]
fn lancer_bureau(_limites: Limites) -> anyhow::Result<()> {
    anyhow::bail!("pavé natif indisponible : recompiler avec `--features bureau`")
}
