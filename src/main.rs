use anyhow::Result;
use clap::Parser;
use colored::*;
use repos_export::{GitHubClient, constants, credentials, export, origin};
use std::path::Path;

#[derive(Parser)]
#[command(name = "repos-export")]
#[command(about = "Export the GitHub repositories you own or can push to into a CSV file")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    Cli::parse();
    let repo_path = Path::new(".");

    println!("Getting current repository owner...");
    let origin = origin::resolve(repo_path)?;
    println!(
        "Current repository: {}",
        format!("{}/{}", origin.owner, origin.repo).cyan().bold()
    );

    let token = credentials::resolve_token(repo_path);
    if token.is_none() {
        println!(
            "{}",
            format!(
                "Warning: {} environment variable not set",
                constants::auth::TOKEN_ENV_VAR
            )
            .yellow()
        );
        println!(
            "{}",
            format!(
                "Set {} or run: git config {} <your_token>",
                constants::auth::TOKEN_ENV_VAR,
                constants::auth::TOKEN_GIT_CONFIG_KEY
            )
            .yellow()
        );
    }

    let client = GitHubClient::new(token)?;
    println!(
        "Fetching repositories for user: {}",
        origin.owner.cyan().bold()
    );
    let records = client.list_repos_with_write_access(&origin.owner).await?;

    if records.is_empty() {
        println!("{}", "No repositories found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} repositories with write access", records.len()).green()
    );

    let output = Path::new(constants::output::DEFAULT_CSV_FILE);
    export::write_csv(&records, output)?;
    println!(
        "{}",
        format!(
            "Successfully wrote {} repositories to {}",
            records.len(),
            output.display()
        )
        .green()
    );

    println!();
    println!("Top {} repositories:", records.len().min(10));
    for (i, record) in records.iter().take(10).enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            record.full_name.bold(),
            record.permissions
        );
    }

    Ok(())
}
