//! # CLI Layer
//!
//! A thin client over [`AttributeDocument`]. This is the only place that:
//! - Reads and writes files
//! - Writes to stdout/stderr and sets the exit code
//! - Installs the tracing subscriber
//!
//! Handlers build a document, call the library, and hand results to `render`.

mod render;
mod setup;

use assembly_source::{
    AssemblyError, AttributeDocument, DocumentOptions, Language, RenderOptions, Result,
};
use clap::Parser;
use serde_json::Value;
use setup::{Cli, Commands};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use render::print_error;

const LOG_ENV: &str = "ASSEMBLY_SOURCE_LOG";

struct AppContext {
    options: DocumentOptions,
    language_override: Option<Language>,
    config_given: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Get { file, key } => handle_get(&ctx, &file, &key),
        Commands::Set {
            file,
            assignments,
            in_place,
            no_preamble,
        } => handle_set(&ctx, &file, &assignments, in_place, no_preamble),
        Commands::List { file, json } => handle_list(&ctx, &file, json),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let options = match &cli.config {
        Some(path) => DocumentOptions::load(path)?,
        None => DocumentOptions::default(),
    };

    Ok(AppContext {
        options,
        language_override: cli.language,
        config_given: cli.config.is_some(),
    })
}

impl AppContext {
    /// Explicit `--language` wins, then the options file, then the file extension.
    fn options_for(&self, file: &Path) -> DocumentOptions {
        let language = match self.language_override {
            Some(language) => language,
            None if self.config_given => self.options.language,
            None => language_from_extension(file).unwrap_or(self.options.language),
        };
        DocumentOptions::new(language)
    }
}

fn language_from_extension(file: &Path) -> Option<Language> {
    match file.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "js" => Some(Language::JScript),
        "cs" => Some(Language::CSharp),
        _ => None,
    }
}

fn load_document(ctx: &AppContext, file: &Path) -> Result<AttributeDocument> {
    let options = ctx.options_for(file);
    debug!(file = %file.display(), language = %options.language, "loading document");
    let bytes = fs::read(file)?;
    AttributeDocument::with_options(bytes, &options)
}

fn handle_get(ctx: &AppContext, file: &Path, key: &str) -> Result<()> {
    let doc = load_document(ctx, file)?;
    let value = doc
        .get(key)
        .ok_or_else(|| AssemblyError::NotFound(key.to_string()))?;
    println!("{}", render::format_value(value));
    Ok(())
}

fn handle_set(
    ctx: &AppContext,
    file: &Path,
    assignments: &[String],
    in_place: bool,
    no_preamble: bool,
) -> Result<()> {
    let mut doc = match load_document(ctx, file) {
        Ok(doc) => doc,
        Err(AssemblyError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!(file = %file.display(), "file not found, generating a new document");
            AttributeDocument::with_options(None::<&str>, &ctx.options_for(file))?
        }
        Err(e) => return Err(e),
    };

    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        doc.set(key, value)?;
    }

    let output = doc.to_source_with(&RenderOptions {
        preamble: !no_preamble,
    });
    if in_place {
        fs::write(file, output)?;
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, file: &Path, json: bool) -> Result<()> {
    let doc = load_document(ctx, file)?;
    let attributes = doc.attributes();
    if json {
        println!("{}", render::render_attribute_json(&attributes)?);
    } else if !attributes.is_empty() {
        let color = colored::control::SHOULD_COLORIZE.should_colorize();
        println!("{}", render::render_attribute_list(&attributes, color));
    }
    Ok(())
}

/// Splits `Key=value`. Values that parse as JSON are used as such (so `false`
/// and `3` keep their types); anything else is taken as a plain string.
fn parse_assignment(assignment: &str) -> Result<(&str, Value)> {
    let (key, raw) = assignment.split_once('=').ok_or_else(|| {
        AssemblyError::Usage(format!("Expected KEY=VALUE, got `{}`", assignment))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AssemblyError::Usage(format!(
            "Missing attribute name in `{}`",
            assignment
        )));
    }

    let value = serde_json::from_str::<Value>(raw)
        .unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_assignment_keeps_json_scalars() {
        assert_eq!(
            parse_assignment("ComVisible=false").unwrap(),
            ("ComVisible", json!(false))
        );
        assert_eq!(parse_assignment("Build=42").unwrap(), ("Build", json!(42)));
        assert_eq!(
            parse_assignment("Title=\"quoted\"").unwrap(),
            ("Title", json!("quoted"))
        );
    }

    #[test]
    fn parse_assignment_falls_back_to_strings() {
        assert_eq!(
            parse_assignment("AssemblyVersion=1.2.0").unwrap(),
            ("AssemblyVersion", json!("1.2.0"))
        );
        assert_eq!(parse_assignment("Empty=").unwrap(), ("Empty", json!("")));
        assert_eq!(
            parse_assignment("Copyright=a=b").unwrap(),
            ("Copyright", json!("a=b"))
        );
    }

    #[test]
    fn parse_assignment_rejects_malformed_input() {
        assert!(matches!(
            parse_assignment("NoValue"),
            Err(AssemblyError::Usage(_))
        ));
        assert!(matches!(
            parse_assignment("=x"),
            Err(AssemblyError::Usage(_))
        ));
    }

    #[test]
    fn language_follows_extension() {
        assert_eq!(
            language_from_extension(Path::new("Properties/AssemblyInfo.js")),
            Some(Language::JScript)
        );
        assert_eq!(
            language_from_extension(Path::new("AssemblyInfo.CS")),
            Some(Language::CSharp)
        );
        assert_eq!(language_from_extension(Path::new("AssemblyInfo")), None);
    }

    #[test]
    fn explicit_language_overrides_extension() {
        let ctx = AppContext {
            options: DocumentOptions::default(),
            language_override: Some(Language::CSharp),
            config_given: false,
        };
        assert_eq!(
            ctx.options_for(Path::new("a.js")).language,
            Language::CSharp
        );
    }
}
