use hackdeck::{ask, keys, providers, set_key, ChatClient, KeyStore};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hackdeck",
    version,
    about = "AI-assisted ethical hacking dashboard for the terminal"
)]
struct Cli {
    /// Skip the TUI and run a subcommand directly
    #[arg(long)]
    no_tui: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported AI providers
    Providers,
    /// Show which providers have a stored API key
    Keys,
    /// Store an API key for a provider
    SetKey {
        /// Provider id (perplexity, grok, gemini, cohere)
        provider: String,
        /// The API key to store
        key: String,
    },
    /// Send a one-shot prompt to a provider and print the reply
    Ask {
        /// The prompt to send
        prompt: String,
        /// Provider id to query
        #[arg(long, default_value = "perplexity")]
        provider: String,
        /// Optional system prompt
        #[arg(long)]
        system: Option<String>,
        /// Sampling temperature (provider default when omitted)
        #[arg(long)]
        temperature: Option<f64>,
        /// Reply token budget (provider default when omitted)
        #[arg(long)]
        max_tokens: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // If a subcommand is given or --no-tui is set, run in CLI mode
    if cli.no_tui || cli.command.is_some() {
        match cli.command {
            Some(Commands::Providers) => providers(),
            Some(Commands::Keys) => keys(&mut KeyStore::open_default()),
            Some(Commands::SetKey { provider, key }) => {
                set_key(&mut KeyStore::open_default(), &provider, &key)
            }
            Some(Commands::Ask {
                prompt,
                provider,
                system,
                temperature,
                max_tokens,
            }) => {
                let mut client = ChatClient::new(KeyStore::open_default());
                ask(
                    &mut client,
                    &provider,
                    &prompt,
                    system.as_deref(),
                    temperature,
                    max_tokens,
                )
                .await
            }
            None => {
                eprintln!("No subcommand given. Run without --no-tui to launch the TUI.");
                Ok(())
            }
        }
    } else {
        hackdeck::tui::run().await
    }
}
