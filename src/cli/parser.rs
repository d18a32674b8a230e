use crate::files::ReportFormat;
use crate::models::DirectionMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for aubconv
/// CLI application to convert biometric attendance logs to AUB format
#[derive(Parser)]
#[command(
    name = "aubconv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert tab-separated biometric attendance logs into the AUB payroll format",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert a raw biometric log into an AUB file
    Convert {
        /// Raw biometric log (tab-separated text, `-` for stdin)
        input: String,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Output file (default: converted_aub_format.txt)"
        )]
        output: Option<String>,

        #[arg(long, value_enum, help = "How the in/out flag is derived")]
        mode: Option<DirectionMode>,

        #[arg(long = "stdout", help = "Print the converted data instead of writing a file")]
        to_stdout: bool,

        #[arg(long, value_name = "FILE", help = "Write the list of skipped lines")]
        report: Option<String>,

        #[arg(long = "report-format", value_enum, help = "Skip report format")]
        report_format: Option<ReportFormat>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,

        #[arg(long, short = 'v', help = "Print processing diagnostics")]
        verbose: bool,
    },

    /// Show how a raw biometric log would be parsed, without writing anything
    Inspect {
        /// Raw biometric log (tab-separated text, `-` for stdin)
        input: String,

        #[arg(long, value_enum, help = "How the in/out flag is derived")]
        mode: Option<DirectionMode>,

        #[arg(long, help = "Show at most N records")]
        limit: Option<usize>,
    },
}
