use anyhow::Result;
use clap::Parser;
use coia::config::Config;
use coia::{AliasGenerator, AliasRequest, NormalizationPolicy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "coia", version, about = "Generate a normalized alias")]
struct Cli {
    /// Language code (e.g., en, fr). Defaults to COIA_LANG or "fr".
    #[arg(long)]
    lang: Option<String>,

    /// Flags (digits only, at most 10).
    #[arg(long, default_value = "02")]
    flags: String,

    /// Who the alias is about. Leave empty for the localized "me".
    #[arg(long, default_value = "")]
    who: String,

    /// Role description.
    #[arg(long, default_value = "Directeur général")]
    role: String,

    /// Scope or organization. Empty for none.
    #[arg(long, default_value = "Crédit Agricole")]
    scope: String,

    /// Normalization policy: standard or simple. Defaults to COIA_POLICY.
    #[arg(long)]
    policy: Option<NormalizationPolicy>,

    /// JSON file of language profiles merged over the built-in tables.
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// List the configured language codes and exit.
    #[arg(long)]
    list_languages: bool,
}

#[derive(Serialize)]
struct AliasOutput<'a> {
    lang: &'a str,
    flags: &'a str,
    who: &'a str,
    role: &'a str,
    scope: &'a str,
    policy: NormalizationPolicy,
    alias: &'a str,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout only carries the alias)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coia=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.profiles.clone() {
        config.profiles_file = Some(path);
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    let registry = config.load_registry()?;

    if cli.list_languages {
        for code in registry.codes() {
            println!("{}", code);
        }
        return Ok(());
    }

    let lang = cli.lang.as_deref().unwrap_or(&config.default_language);
    info!("Generating alias for language '{}' ({} policy)", lang, config.policy);

    let generator = AliasGenerator::new(&registry).with_policy(config.policy);
    let request = AliasRequest::new(lang, &cli.flags, &cli.who, &cli.role, &cli.scope);
    let alias = generator.generate(&request)?;

    if cli.json {
        let output = AliasOutput {
            lang,
            flags: &cli.flags,
            who: &cli.who,
            role: &cli.role,
            scope: &cli.scope,
            policy: config.policy,
            alias: &alias,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}: {} {} {} {} -> {}",
            lang, cli.flags, cli.who, cli.role, cli.scope, alias
        );
    }

    Ok(())
}
