use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use gatewarden_cli::OutputFormat;
use gatewarden_cli::commands;
use gatewarden_cli::commands::{CredentialOpts, RouterOpts};

#[derive(Parser)]
#[command(name = "gatewarden")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Drive a home router's admin console from the command line or over REST",
    long_about = "Gatewarden logs into the router's HTML admin console with a headless \
                  browser and performs management operations on your behalf: list \
                  connected devices, manage the wireless MAC filter, rotate passwords, \
                  and reboot. Run `gatewarden serve` to expose the same operations as a \
                  REST API for the dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for listing commands
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server for the dashboard
    Serve {
        #[command(flatten)]
        router: RouterOpts,

        /// Address to bind the API server on
        #[arg(long, env = "GATEWARDEN_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to bind the API server on
        #[arg(short, long, env = "GATEWARDEN_PORT", default_value_t = 3000)]
        port: u16,

        /// Origin allowed to call the API with credentials (repeatable)
        #[arg(long = "allowed-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
        allowed_origins: Vec<String>,
    },

    /// List devices connected to the router
    Devices {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,
    },

    /// List devices on the wireless MAC filter list
    Blocked {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,
    },

    /// Add a device to the MAC filter list
    Block {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,

        /// MAC address to block
        #[arg(value_name = "MAC")]
        mac: String,

        /// Name to record for the device
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Remove a device from the MAC filter list
    Unblock {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,

        /// MAC address to unblock
        #[arg(value_name = "MAC")]
        mac: String,
    },

    /// Change the 2.4 GHz Wi-Fi password
    WifiPassword {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,

        /// Current Wi-Fi password (checked against the router before changing)
        #[arg(long)]
        current: String,

        /// New Wi-Fi password
        #[arg(long)]
        new: String,
    },

    /// Change the admin console password
    AdminPassword {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,

        /// Current admin password
        #[arg(long)]
        current: String,

        /// New admin password
        #[arg(long)]
        new: String,
    },

    /// Reboot the router
    Reboot {
        #[command(flatten)]
        router: RouterOpts,

        #[command(flatten)]
        creds: CredentialOpts,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve {
            router,
            host,
            port,
            allowed_origins,
        } => commands::serve::execute(&router, &host, port, allowed_origins),
        Commands::Devices { router, creds } => {
            commands::devices::execute(&router, &creds, cli.format)
        }
        Commands::Blocked { router, creds } => {
            commands::blocked::execute(&router, &creds, cli.format)
        }
        Commands::Block {
            router,
            creds,
            mac,
            name,
        } => commands::block::execute(&router, &creds, &mac, &name),
        Commands::Unblock { router, creds, mac } => {
            commands::unblock::execute(&router, &creds, &mac)
        }
        Commands::WifiPassword {
            router,
            creds,
            current,
            new,
        } => commands::wifi_password::execute(&router, &creds, &current, &new),
        Commands::AdminPassword {
            router,
            creds,
            current,
            new,
        } => commands::admin_password::execute(&router, &creds, &current, &new),
        Commands::Reboot { router, creds } => commands::reboot::execute(&router, &creds),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("gatewarden=debug,gatewarden_core=debug,gatewarden_browser=debug,gatewarden_api=debug")
    } else {
        EnvFilter::new("gatewarden=info,gatewarden_browser=info,gatewarden_api=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
