use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "sqroot",
    version,
    about = "Square root calculator CLI",
    allow_negative_numbers = true
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = Method::Std,
        help = "Square-root strategy"
    )]
    pub method: Method,
    /// Number to take the square root of. Extra values are ignored.
    #[arg(value_name = "NUMBER")]
    pub values: Vec<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Std,
    Newton,
}
