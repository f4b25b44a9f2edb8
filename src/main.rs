use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

use ens_domain_bot::application::dispatcher::{BotUrls, Collaborators, SkillDispatcher};
use ens_domain_bot::application::messaging::MessageParser;
use ens_domain_bot::domain::entities::{ChainRegistry, SkillRegistry, TokenRegistry};
use ens_domain_bot::infrastructure::adapters::console::ConsoleTransport;
use ens_domain_bot::infrastructure::config::Config;
use ens_domain_bot::infrastructure::memory::ConversationMemory;
use ens_domain_bot::infrastructure::oneinch::OneInchClient;
use ens_domain_bot::infrastructure::resolver::EnsDataResolver;

#[derive(Parser)]
#[command(name = "ens-domain-bot")]
#[command(about = "ENS domain and DeFi skill bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot on the console
    Run {
        /// Sender address attached to every request
        #[arg(short, long)]
        sender: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { sender } => {
            run_bot(cli.config, sender);
        }
        Commands::Version => {
            println!("ens-domain-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String, sender: Option<String>) {
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    let api_key = config.oneinch_api_key();
    if api_key.is_none() {
        tracing::warn!("ONEINCH_API_KEY not set; swap and portfolio skills will fail");
    }

    let resolver = EnsDataResolver::new(
        config.resolver.base_url.clone(),
        Duration::from_secs(config.resolver.timeout_seconds),
    )
    .expect("failed to build resolver client");
    let oneinch = Arc::new(
        OneInchClient::new(
            config.oneinch.base_url.clone(),
            api_key,
            Duration::from_secs(config.oneinch.timeout_seconds),
        )
        .expect("failed to build 1inch client"),
    );

    let transport = Arc::new(ConsoleTransport::new());
    let dispatcher = SkillDispatcher::new(
        Collaborators {
            resolver: Arc::new(resolver),
            transport: transport.clone(),
            memory: Arc::new(ConversationMemory::new()),
            swap_api: oneinch.clone(),
            portfolio_api: oneinch,
        },
        TokenRegistry::mainnet(),
        ChainRegistry::mainnet(),
        BotUrls {
            frame: config.urls.frame.clone(),
            ens_app: config.urls.ens_app.clone(),
            txpay: config.urls.txpay.clone(),
        },
    );

    let registry = SkillRegistry::defaults();
    let parser = MessageParser::new(config.bot.prefix.clone());

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        tracing::info!("Console mode, {} skills registered. Type /hi for help.", registry.len());
        loop {
            let Some(line) = transport.read_line("> ") else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            if line == "exit" || line == "quit" {
                break;
            }

            match parser.parse(&line, sender.as_deref(), &registry) {
                Some(request) => {
                    if let Some(response) = dispatcher.handle(&request).await {
                        println!("[BOT {}] {}", response.code, response.message);
                    }
                }
                None => {
                    println!("[BOT] Not a command. Type /hi for the skill list.");
                }
            }
        }
    });
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).expect("failed to serialize default config");
    match std::fs::write("config.yaml", yaml) {
        Ok(()) => println!("Wrote config.yaml"),
        Err(e) => eprintln!("Failed to write config.yaml: {}", e),
    }
}
