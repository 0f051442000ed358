//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Calcule le prix total avec remise et taxe dépendant de l'état.
#[derive(Parser, Debug)]
#[command(name = "retail-calc")]
#[command(author, version, about, long_about = None)]
#[command(before_help = "Calculateur de vente au détail")]
pub struct Cli {
    /// Quantité d'articles vendus
    #[arg(
        short,
        long,
        value_name = "number",
        allow_negative_numbers = true,
        required_unless_present = "generate"
    )]
    pub quantity: Option<f64>,

    /// Prix de l'article en TTC
    #[arg(
        short,
        long,
        value_name = "number",
        allow_negative_numbers = true,
        required_unless_present = "generate"
    )]
    pub price: Option<f64>,

    /// Etat dans lequel la vente a lieu
    #[arg(short, long, value_name = "string", required_unless_present = "generate")]
    pub state: Option<String>,

    /// Verbosité des logs (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Génère le script de complétion pour un shell
    #[arg(long, value_enum, value_name = "shell")]
    pub generate: Option<Shell>,
}
