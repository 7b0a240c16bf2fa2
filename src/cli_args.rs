use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "flatlinectl")]
#[command(about = "Delete expired JWT refresh tokens from a flatline server")]
pub struct Cli {
    /// Base URL of the API (e.g. http://localhost:8080)
    pub base_url: String,

    /// Admin username
    pub username: String,

    /// Admin password
    pub password: String,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
