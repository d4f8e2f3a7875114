use assembly_source::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
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
#[command(name = "assembly-source", bin_name = "assembly-source", version = get_version())]
#[command(about = "Read and rewrite [assembly: ...] attributes in AssemblyInfo sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source dialect (csharp, jscript). Defaults to jscript for .js files
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    /// JSON file with document options
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value of an attribute
    Get {
        /// AssemblyInfo source file
        file: PathBuf,

        /// Attribute name (e.g. AssemblyVersion)
        key: String,
    },

    /// Set attributes, printing the result or writing it back
    Set {
        /// AssemblyInfo source file (created from scratch if missing)
        file: PathBuf,

        /// Assignments such as AssemblyVersion=1.2.0 or ComVisible=false
        #[arg(required = true, num_args = 1..)]
        assignments: Vec<String>,

        /// Write the result back to the file instead of stdout
        #[arg(short, long)]
        in_place: bool,

        /// Do not add the JScript `import System.Reflection;` header
        #[arg(long)]
        no_preamble: bool,
    },

    /// List all attributes
    #[command(alias = "ls")]
    List {
        /// AssemblyInfo source file
        file: PathBuf,

        /// Print as a JSON object
        #[arg(long)]
        json: bool,
    },
}
