//! # assembly-source Architecture
//!
//! assembly-source reads and rewrites the `[assembly: ...]` attribute declarations of
//! `AssemblyInfo` sources (C# and JScript .NET) **without parsing the language**. Everything
//! that is not an attribute declaration is carried through byte for byte.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads and writes files                 │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document (document.rs)                                     │
//! │  - Fragment list + attribute registry                       │
//! │  - get / set / attributes / to_source                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Scanning and literals                                      │
//! │  - scanner.rs: line-anchored declaration discovery          │
//! │  - expr.rs: `Name(literal)` grammar for JScript             │
//! │  - value.rs: literal decode/encode                          │
//! │  - naming.rs: canonical keys and the `Attribute` suffix     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Text In, Text Out
//!
//! The library never touches the filesystem (apart from loading a JSON options file on
//! request). A document is built from a string or buffer and rendered back to a string;
//! callers decide where it goes.
//!
//! ## Round-Trip Guarantee
//!
//! An unmodified document renders to exactly its input. The only exception is the
//! JScript header: rendering a JScript document that lacks `import System.Reflection`
//! prepends it unless [`RenderOptions::preamble`] is off.
//!
//! ## Example
//!
//! ```
//! use assembly_source::{AttrValue, AttributeDocument};
//!
//! let mut doc = AttributeDocument::new("[assembly: AssemblyVersion(\"1.0.0\")]\n")?;
//! assert_eq!(doc.get("AssemblyVersion"), Some(&AttrValue::from("1.0.0")));
//!
//! doc.set("AssemblyVersion", "1.1.0")?;
//! doc.set("ComVisible", false)?;
//! assert_eq!(
//!     doc.to_source(),
//!     "[assembly: AssemblyVersion(\"1.1.0\")]\n[assembly: ComVisible(false)]"
//! );
//! # Ok::<(), assembly_source::AssemblyError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`document`]: [`AttributeDocument`], the editing API
//! - [`scanner`]: Declaration discovery
//! - [`expr`]: Call-expression parsing for JScript declarations
//! - [`value`]: Attribute values and the literal codec
//! - [`naming`]: Key normalization and suffix handling
//! - [`source`]: Accepted input forms
//! - [`config`]: Dialect and rendering options
//! - [`error`]: Error types

pub mod config;
pub mod document;
pub mod error;
pub mod expr;
pub mod naming;
pub mod scanner;
pub mod source;
pub mod value;

pub use config::{DocumentOptions, Language, RenderOptions};
pub use document::AttributeDocument;
pub use error::{AssemblyError, Result};
pub use source::Source;
pub use value::AttrValue;
