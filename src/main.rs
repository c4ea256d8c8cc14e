// src/main.rs
//
// Calculatrice RPN — point d'entrée terminal
// -----------------------------------------
// - `-e EXPR` : évalue une fois et affiche le résultat (ou la sentinelle)
// - sans `-e` : lit stdin ligne par ligne, chaque caractère est un bouton
// - journaux sur stderr (RUST_LOG prioritaire), stdout reste l'affichage

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_rpn::app::terminal;
use calculatrice_rpn::noyau::{evaluate, evaluate_detaille};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calculatrice infix -> postfix (shunting-yard)")]
struct Cli {
    /// Expression à évaluer une seule fois.
    #[arg(short, long)]
    expression: Option<String>,

    /// Affiche aussi la forme normalisée et le postfix.
    #[arg(long)]
    demarche: bool,

    /// Journaux de debug pour le noyau.
    #[arg(short, long)]
    verbose: bool,
}

fn installer_journaux(verbose: bool) {
    let defaut = if verbose {
        "warn,calculatrice_rpn=debug"
    } else {
        "warn"
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    installer_journaux(cli.verbose);

    if let Some(expr) = cli.expression.as_deref() {
        println!("{}", evaluate(expr));
        if cli.demarche {
            match evaluate_detaille(expr) {
                Ok(c) => {
                    println!("  normalisée : {}", c.normalisee);
                    println!("  postfix    : {}", c.postfix);
                }
                Err(e) => println!("  erreur     : {e}"),
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    terminal::boucle(stdin.lock(), io::stdout().lock(), cli.demarche)?;
    Ok(())
}
