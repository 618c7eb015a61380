//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3003")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        "Triage".cyan().bold(),
        "Analysis Server".bold()
    );
    println!();
    println!(
        "  {}  POST http://{}:{}/analyze",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    triage_web::run_server(&args.host, args.port).await?;

    Ok(())
}
