use clap::Parser;
use presctl::action::Action;
use presctl::config::Configuration;
use std::io::IsTerminal;

#[derive(clap::Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration toml file, default to /etc/presctl/presctl.toml.
    #[clap(
        short,
        long = "config",
        global = true,
        default_value = "/etc/presctl/presctl.toml",
        env = "PRESCTL_CONFIG"
    )]
    config_path: String,
    #[clap(subcommand)]
    command: Action,
}

impl Args {
    async fn execute(self) -> Result<(), presctl::Error> {
        let config = Configuration::from_path(&self.config_path)?;
        let client = config.client().build();
        let mut stdout = std::io::stdout().lock();
        self.command.execute(&client, &mut stdout).await
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let directive =
        std::env::var("LOG").unwrap_or_else(|_| "presctl=warn,presctl_client=warn".into());
    let _ = presctl::init_logs(&directive, std::io::stderr().is_terminal());

    if let Err(err) = Args::parse().execute().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
