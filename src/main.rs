use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shiftboard::App;
use shiftboard_core::{seed, AppConfig};

#[derive(Parser)]
#[command(name = "shiftboard")]
#[command(about = "Front-office shift operations board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with the demo dataset and print the derived checklist
    Demo {
        /// Username to sign in with
        #[arg(short, long, default_value = "Ahmed.Ihsaan")]
        username: String,

        /// Password to sign in with
        #[arg(short, long, default_value = seed::DEMO_PASSWORD)]
        password: String,
    },
    /// Print today's seeded roster
    Roster,
    /// Export the seed dataset as JSON
    Seed {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "shiftboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { username, password }) => run_demo(&username, &password).await?,
        Some(Commands::Roster) => print_roster(),
        Some(Commands::Seed { out }) => export_seed(out)?,
        Some(Commands::Config) => show_config()?,
        None => run_demo("Ahmed.Ihsaan", seed::DEMO_PASSWORD).await?,
    }

    Ok(())
}

async fn run_demo(username: &str, password: &str) -> anyhow::Result<()> {
    let mut app = App::seeded();

    let user = app
        .login(username, password)
        .await
        .with_context(|| format!("signing in as {username}"))?;
    let shift = app.current_shift().context("no shift derived")?;

    println!("{}", app.config().app_name);
    println!(
        "{} shift, {} — {} ({})",
        shift.shift_type,
        shift.date,
        user.name,
        user.role.display_name()
    );
    println!("Occupancy: {}%", shift.occupancy);
    println!();

    // Group by category in catalog order; dangling categories go last.
    let mut categories: Vec<&str> = app
        .catalog()
        .categories()
        .iter()
        .map(String::as_str)
        .collect();
    for task in &shift.tasks {
        if !categories.contains(&task.category.as_str()) {
            categories.push(task.category.as_str());
        }
    }

    for category in categories {
        let tasks: Vec<_> = shift
            .tasks
            .iter()
            .filter(|t| t.category == category)
            .collect();
        if tasks.is_empty() {
            continue;
        }
        println!("{category}");
        for task in tasks {
            let mark = if task.is_completed { "x" } else { " " };
            println!("  [{mark}] {}", task.label);
        }
    }

    println!();
    println!(
        "{} of {} tasks complete",
        shift.completed_count(),
        shift.tasks.len()
    );
    Ok(())
}

fn print_roster() {
    let today = Local::now().date_naive();
    let catalog = seed::catalog();
    let roster = seed::roster(&catalog, today);

    println!("Roster for {today}");
    for assignment in roster.assignments_on(today) {
        let name = catalog
            .user(assignment.user_id)
            .map(|u| u.name.as_str())
            .unwrap_or("(unassigned)");
        println!("  {:<10} {}", assignment.shift_type, name);
    }
}

fn export_seed(out: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset = seed::dataset(Local::now().date_naive());
    let json = serde_json::to_string_pretty(&dataset).context("serializing seed dataset")?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing seed dataset to {}", path.display()))?;
            tracing::info!(path = %path.display(), "seed dataset written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn show_config() -> anyhow::Result<()> {
    let path = AppConfig::default_path().context("no config directory on this platform")?;
    let config = AppConfig::load(&path)?;
    println!("Config path: {}", path.display());
    println!("App name:        {}", config.app_name);
    println!("Logo URL:        {}", config.logo_url);
    println!("Support message: {}", config.support_message);
    Ok(())
}
