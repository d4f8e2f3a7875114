//! # Attribute Document
//!
//! An [`AttributeDocument`] splits its source into an ordered list of
//! fragments and keeps a registry of the attributes it found:
//!
//! ```text
//! source:     using System.Reflection;\n[assembly: AssemblyTitle("Foo")]\n
//! fragments:  Literal(0..25)            Attribute(25..57)                  Literal(57..58)
//! registry:   AssemblyTitle -> { written: "AssemblyTitle", value: "Foo", fragment: 1 }
//! ```
//!
//! Rendering concatenates the fragments, so an untouched document renders to
//! exactly its input. Updating an attribute replaces only the fragment its
//! registry entry points at; adding one appends a fragment at the end.
//!
//! ## Duplicates
//!
//! When a key is declared more than once, the last declaration wins. Earlier
//! declarations are demoted to literal fragments: they keep rendering as
//! written but are no longer affected by `set`.
//!
//! ## Suffix mode
//!
//! Rewritten names carry the `Attribute` suffix once the document is in
//! suffix mode. C# documents enter it the first time a suffixed name is
//! registered, so the written form depends on declaration order:
//!
//! ```text
//! [assembly: AssemblyTitle("a")]             <- registered before: stays "AssemblyTitle"
//! [assembly: ComVisibleAttribute(false)]     <- switches suffix mode on
//! set("NewAttr", true)                       -> [assembly: NewAttrAttribute(true)]
//! ```
//!
//! Each entry resolves its written name when registered and keeps it. JScript
//! documents are always in suffix mode.

use crate::config::{DocumentOptions, Language, RenderOptions};
use crate::error::{AssemblyError, Result};
use crate::naming;
use crate::scanner;
use crate::source::Source;
use crate::value::{self, AttrValue};
use indexmap::IndexMap;
use std::fmt;
use std::ops::Range;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    /// Verbatim slice of the input.
    Literal(Range<usize>),
    /// Separator inserted before an appended declaration.
    Newline,
    /// Text of a registered declaration.
    Attribute(AttributeText),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeText {
    Original(Range<usize>),
    Written(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    written_name: String,
    value: AttrValue,
    fragment: usize,
}

/// Editable view of the `[assembly: ...]` declarations in a source file.
#[derive(Debug, Clone)]
pub struct AttributeDocument {
    source: String,
    language: Language,
    fragments: Vec<Fragment>,
    registry: IndexMap<String, Entry>,
    suffix_mode: bool,
}

impl AttributeDocument {
    /// Scan `source` as C#.
    pub fn new<'a>(source: impl Into<Source<'a>>) -> Result<Self> {
        Self::with_options(source, &DocumentOptions::default())
    }

    /// Scan `source` in the dialect selected by `options`.
    pub fn with_options<'a>(
        source: impl Into<Source<'a>>,
        options: &DocumentOptions,
    ) -> Result<Self> {
        let source = source.into().into_text()?;
        let language = options.language;

        let mut document = Self {
            source: String::new(),
            language,
            fragments: Vec::new(),
            registry: IndexMap::new(),
            suffix_mode: language.always_suffixed(),
        };

        let mut cursor = 0;
        for declaration in scanner::scan(&source, language) {
            let (name, value) = declaration.parse()?;

            if declaration.span.start > cursor {
                document
                    .fragments
                    .push(Fragment::Literal(cursor..declaration.span.start));
            }
            document
                .fragments
                .push(Fragment::Attribute(AttributeText::Original(
                    declaration.span.clone(),
                )));
            cursor = declaration.span.end;

            let index = document.fragments.len() - 1;
            let (key, suffixed) = naming::canonicalize(name, language);
            document.register(key, suffixed, value, index);
        }

        if cursor < source.len() {
            document.fragments.push(Fragment::Literal(cursor..source.len()));
        }

        debug!(
            language = %language,
            fragments = document.fragments.len(),
            attributes = document.registry.len(),
            "scanned document"
        );

        document.source = source;
        Ok(document)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Current value of `key`, or `None` if it was never declared or set.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        let (key, _) = naming::canonicalize(key, self.language);
        self.registry.get(&key).map(|entry| &entry.value)
    }

    /// Set `key` to `value`, rewriting its declaration or appending a new one.
    ///
    /// Fails without touching the document when the value has no literal form
    /// (`null`, arrays, objects).
    pub fn set<V>(&mut self, key: &str, value: V) -> Result<()>
    where
        V: TryInto<AttrValue>,
        AssemblyError: From<V::Error>,
    {
        let value: AttrValue = value.try_into()?;
        let literal = value::encode(&value)?;
        let (key, suffixed) = naming::canonicalize(key, self.language);

        if let Some(entry) = self.registry.get_mut(&key) {
            debug!(key = %key, fragment = entry.fragment, "rewriting attribute");
            self.fragments[entry.fragment] = Fragment::Attribute(AttributeText::Written(
                declaration_text(&entry.written_name, &literal),
            ));
            entry.value = value;
            return Ok(());
        }

        if !self.fragments.is_empty() && !self.ends_with_newline() {
            self.fragments.push(Fragment::Newline);
        }
        // Filled in once the written name is resolved.
        self.fragments
            .push(Fragment::Attribute(AttributeText::Written(String::new())));
        let index = self.fragments.len() - 1;

        let written_name = self
            .register(key, suffixed, value, index)
            .written_name
            .clone();
        debug!(name = %written_name, fragment = index, "appending attribute");
        self.fragments[index] = Fragment::Attribute(AttributeText::Written(declaration_text(
            &written_name,
            &literal,
        )));
        Ok(())
    }

    /// Snapshot of every registered attribute, in registration order.
    pub fn attributes(&self) -> IndexMap<String, AttrValue> {
        self.registry
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    /// Render with default options.
    pub fn to_source(&self) -> String {
        self.to_source_with(&RenderOptions::default())
    }

    pub fn to_source_with(&self, options: &RenderOptions) -> String {
        let mut out = String::with_capacity(self.source.len());
        for fragment in &self.fragments {
            out.push_str(self.fragment_text(fragment));
        }

        match self.language.preamble() {
            Some(preamble)
                if options.preamble
                    && !out.is_empty()
                    && !self.language.has_preamble(&out) =>
            {
                format!("{}\n{}", preamble, out)
            }
            _ => out,
        }
    }

    fn register(
        &mut self,
        key: String,
        suffixed: bool,
        value: AttrValue,
        fragment: usize,
    ) -> &Entry {
        if suffixed && !self.suffix_mode {
            debug!(key = %key, "suffixed name seen, enabling suffix mode");
            self.suffix_mode = true;
        }

        let entry = Entry {
            written_name: naming::written_name(&key, self.suffix_mode),
            value,
            fragment,
        };
        debug!(key = %key, fragment, "registered attribute");

        let (index, previous) = self.registry.insert_full(key, entry);
        if let Some(previous) = previous {
            self.demote(previous.fragment);
        }
        &self.registry[index]
    }

    /// Turn a superseded declaration into pass-through text.
    fn demote(&mut self, index: usize) {
        if let Fragment::Attribute(AttributeText::Original(span)) = &self.fragments[index] {
            self.fragments[index] = Fragment::Literal(span.clone());
        }
    }

    /// Whether the last fragment ends with a newline followed only by whitespace.
    fn ends_with_newline(&self) -> bool {
        self.fragments.last().is_some_and(|fragment| {
            let text = self.fragment_text(fragment);
            text[text.trim_end().len()..].contains('\n')
        })
    }

    fn fragment_text<'a>(&'a self, fragment: &'a Fragment) -> &'a str {
        match fragment {
            Fragment::Literal(span) | Fragment::Attribute(AttributeText::Original(span)) => {
                &self.source[span.clone()]
            }
            Fragment::Newline => "\n",
            Fragment::Attribute(AttributeText::Written(text)) => text,
        }
    }
}

impl fmt::Display for AttributeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

fn declaration_text(name: &str, literal: &str) -> String {
    format!("[assembly: {}({})]", name, literal)
}
