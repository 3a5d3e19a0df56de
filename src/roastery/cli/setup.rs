use clap::{Args, Parser, Subcommand};
use roastery::api::FieldChanges;
use roastery::model::{GrindForm, RoastDegree};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roastery", bin_name = "roastery", version = get_version())]
#[command(about = "Coffee inventory: list, add and edit products in a local SQLite file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (overrides the configured one)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// One line typed into `roastery shell`.
#[derive(Parser, Debug)]
#[command(name = "roastery", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all products
    #[command(alias = "ls")]
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a product
    #[command(alias = "a")]
    Add(RecordArgs),

    /// Edit the product in the selected row
    #[command(alias = "e")]
    Edit {
        /// Row number as shown by `list` (exactly one)
        #[arg(num_args = 0..)]
        rows: Vec<usize>,

        #[command(flatten)]
        fields: RecordArgs,
    },

    /// Show one product by id
    Show {
        id: i64,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the database file and the coffee table
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (database, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session
    Shell,
}

/// Form inputs. Price and volume are taken verbatim so the form's own checks report them.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// Variety name
    #[arg(long)]
    pub variety: Option<String>,

    /// Roast degree: 1/light, 2/medium, 3/strong
    #[arg(long, value_name = "ROAST")]
    pub roast: Option<RoastDegree>,

    /// Ground or whole bean: 0/ground, 1/whole-bean
    #[arg(long, value_name = "GRIND")]
    pub grind: Option<GrindForm>,

    /// Taste description
    #[arg(long, allow_hyphen_values = true)]
    pub taste: Option<String>,

    /// Price, a non-negative integer
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Package volume, a positive integer
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,
}

impl From<RecordArgs> for FieldChanges {
    fn from(args: RecordArgs) -> Self {
        FieldChanges {
            variety: args.variety,
            roast_degree: args.roast,
            ground_or_bean: args.grind,
            taste_description: args.taste,
            price: args.price,
            package_volume: args.volume,
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins unless `--verbose` was given.
/// `ansi` is false when color is turned off by flag or config.
pub fn init_logging(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("roastery=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default subscriber");
    }
}
