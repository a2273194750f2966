use anyhow::Result;
use clap::{Parser, Subcommand};

use prs_admin::api::{ApiClient, HttpTransport};
use prs_admin::auth::SessionContext;
use prs_admin::cli::{
    handle_audit_command, handle_employee_command, handle_login, handle_logout,
    handle_radio_command, handle_sap_command, handle_user_command, handle_whoami, AuditCommands,
    EmployeeCommands, RadioCommands, SapCommands, UserCommands,
};
use prs_admin::config::{settings::API_URL_ENV_VAR, AdminPaths, Settings};
use prs_admin::logging;
use prs_admin::storage::SessionStore;

#[derive(Parser)]
#[command(
    name = "prs-admin",
    version,
    about = "Administration console for the radio lending backend",
    long_about = "prs-admin manages employees, radio-frequency devices, SAP users and \
                  system users of the radio lending backend, and shows its audit log. \
                  Use the subcommands for scripting or `prs-admin tui` for the \
                  interactive console."
)]
struct Cli {
    /// Backend base URL, overriding the configured one
    #[arg(long, global = true, env = API_URL_ENV_VAR)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Log in and store the session tokens
    Login {
        /// Username (prompted if omitted)
        username: Option<String>,
        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Employee catalog
    #[command(subcommand, alias = "emp")]
    Employee(EmployeeCommands),

    /// Radio-frequency device catalog
    #[command(subcommand)]
    Radio(RadioCommands),

    /// SAP user catalog
    #[command(subcommand)]
    Sap(SapCommands),

    /// System users
    #[command(subcommand)]
    User(UserCommands),

    /// Audit log
    #[command(subcommand)]
    Audit(AuditCommands),

    /// Show current configuration and paths
    Config {
        /// Store a new backend base URL
        #[arg(long)]
        set_api_url: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AdminPaths::new()?;
    paths.ensure_directories()?;
    let stored_settings = Settings::load_or_create(&paths)?;
    let settings = stored_settings
        .clone()
        .with_api_url_override(cli.api_url.as_deref());

    if matches!(cli.command, Some(Commands::Tui)) {
        logging::init_file(&paths.log_file())?;
    } else {
        logging::init_stderr()?;
    }

    let store = SessionStore::new(paths.session_file());
    let session = SessionContext::from_session(store.load()?);
    let mut client = ApiClient::new(HttpTransport::from_settings(&settings)?, session);

    match cli.command {
        Some(Commands::Tui) => {
            prs_admin::tui::run_tui(client, store, &settings)?;
        }
        Some(Commands::Login {
            username,
            password_stdin,
        }) => {
            handle_login(&mut client, &store, username, password_stdin)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&mut client, &store)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&client)?;
        }
        Some(Commands::Employee(cmd)) => {
            handle_employee_command(&client, cmd)?;
        }
        Some(Commands::Radio(cmd)) => {
            handle_radio_command(&client, cmd)?;
        }
        Some(Commands::Sap(cmd)) => {
            handle_sap_command(&client, cmd)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&client, &settings.date_format, cmd)?;
        }
        Some(Commands::Audit(cmd)) => {
            handle_audit_command(&client, settings.audit_limit, &settings.date_format, cmd)?;
        }
        Some(Commands::Config { set_api_url }) => {
            if let Some(url) = set_api_url {
                let updated = stored_settings.with_api_url_override(Some(&url));
                updated.save(&paths)?;
                println!("URL del servidor guardada: {}", updated.api_base_url);
                return Ok(());
            }

            println!("prs-admin Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  API base URL:   {}", settings.api_base_url);
            println!("  Audit limit:    {}", settings.audit_limit);
            println!("  Date format:    {}", settings.date_format);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Timeout:        {}s", secs),
                None => println!("  Timeout:        (default)"),
            }
        }
        None => {
            println!("prs-admin - Radio lending administration console");
            println!();
            println!("Run 'prs-admin --help' for usage information.");
            println!("Run 'prs-admin tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
