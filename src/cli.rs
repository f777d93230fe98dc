use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cfr-launcher")]
#[command(
    about = "Decompile Java archives and class files with the CFR decompiler",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for messages
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory holding config/, log/, cfr/ and the default output folder
    #[arg(long, global = true, env = "CFR_LAUNCHER_HOME", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Language variant; selects the default output folder name
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CFR_LAUNCHER_LANG",
        default_value_t = Locale::En
    )]
    pub lang: Locale,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decompile a .jar or .class file into the output directory
    Run {
        /// The .jar or .class file to decompile (prompted for when omitted)
        input: Option<PathBuf>,

        /// Java executable used to launch cfr.jar
        #[arg(long, env = "CFR_LAUNCHER_JAVA", default_value = "java")]
        java: String,

        /// Extra options passed to CFR after `--outputdir`
        #[arg(last = true, allow_hyphen_values = true)]
        cfr_args: Vec<String>,
    },

    /// Show or change the output directory
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show resolved paths and whether the CFR core can be found
    Status {
        /// Java executable to look up on PATH
        #[arg(long, env = "CFR_LAUNCHER_JAVA", default_value = "java")]
        java: String,
    },

    /// Open the output directory in the file manager
    Open,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current output directory
    Show,

    /// Persist a new output directory
    SetOutput {
        /// Directory that receives decompiled sources
        dir: PathBuf,
    },

    /// Forget the configured output directory and use the default again
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    /// English (default output folder `output`)
    En,
    /// Chinese (default output folder `shuchu`)
    Zh,
}
