use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "reporta")]
#[command(about = "Reporta - community incident reporting client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and purge stored credentials
    Logout,
    /// Show the current session
    Whoami,
    /// Manage incident reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },
}

#[derive(Subcommand)]
enum ReportAction {
    /// Submit a new report
    Create {
        #[arg(long)]
        title: String,
        /// security | infrastructure | services | behavior | other
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        /// Derived from your network origin when omitted
        #[arg(long)]
        location: Option<String>,
    },
    /// List reports
    List {
        /// all | pending | approved | rejected
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Edit one of your reports
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete one of your reports
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Approve a report (admin)
    Approve { id: i64 },
    /// Reject a report (admin)
    Reject { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await,
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&name, &email, &password).await,
        Commands::Logout => commands::auth::logout().await,
        Commands::Whoami => commands::auth::whoami().await,
        Commands::Report { action } => match action {
            ReportAction::Create {
                title,
                category,
                description,
                location,
            } => commands::report::create(title, &category, description, location).await,
            ReportAction::List { filter } => commands::report::list(&filter).await,
            ReportAction::Update {
                id,
                title,
                category,
                description,
                location,
            } => commands::report::update(id, title, &category, description, location).await,
            ReportAction::Delete { id, yes } => commands::report::delete(id, yes).await,
            ReportAction::Approve { id } => commands::report::approve(id).await,
            ReportAction::Reject { id } => commands::report::reject(id).await,
        },
    }
}
