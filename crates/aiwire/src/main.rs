//! aiwire CLI
//!
//! Small operational surface over the wiring layer: validate a
//! configuration by actually wiring it, and list what this build can
//! wire.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aiwire_domain::ports::{ChatClient, EmbeddingClient, VectorStore};
use aiwire_infrastructure::{ConfigLoader, init_app, init_logging};
use aiwire_registry::{
    list_capabilities, list_chat_providers, list_embedding_providers, list_vector_store_providers,
};

#[derive(Parser)]
#[command(name = "aiwire", about = "Conditional wiring of AI provider clients", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load configuration, wire all integrations, and report the result
    Check,
    /// List registered providers and capability markers in this build
    Providers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => check(cli.config),
        Command::Providers => {
            print_providers();
            Ok(())
        }
    }
}

fn check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }

    let config = loader.load().context("configuration binding failed")?;
    init_logging(&config.logging).context("logging initialization failed")?;

    let context = init_app(config).context("wiring failed")?;

    println!("Wired integrations:");
    print_role("chat", context.chat().map(|c| c.provider_name().to_string()));
    print_role(
        "embedding",
        context.embedding().map(|e| e.provider_name().to_string()),
    );
    print_role(
        "vector_store",
        context
            .vector_store()
            .map(|v| format!("{} (index: {})", v.provider_name(), v.index_name())),
    );

    Ok(())
}

fn print_role(role: &str, wired: Option<String>) {
    match wired {
        Some(provider) => println!("  {role:<13} {provider}"),
        None => println!("  {role:<13} (not active)"),
    }
}

fn print_providers() {
    println!("Chat providers:");
    for (name, description) in list_chat_providers() {
        println!("  - {name}: {description}");
    }
    println!();

    println!("Embedding providers:");
    for (name, description) in list_embedding_providers() {
        println!("  - {name}: {description}");
    }
    println!();

    println!("Vector store providers:");
    for (name, description) in list_vector_store_providers() {
        println!("  - {name}: {description}");
    }
    println!();

    println!("Capabilities:");
    for (name, description) in list_capabilities() {
        println!("  - {name}: {description}");
    }
}
