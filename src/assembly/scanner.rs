//! Line-anchored discovery of `[assembly: ...]` declarations.
//!
//! A declaration only counts when its `[` is the first non-blank character of
//! a line, so bracketed text inside comments or string literals elsewhere on
//! a line passes through untouched. Scanning walks the input once with a
//! single compiled pattern per dialect.

use crate::config::Language;
use crate::error::Result;
use crate::expr;
use crate::value::{self, AttrValue};
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use std::ops::Range;
use tracing::trace;

/// C#: `Name(args)` with a plain alphanumeric name and no `)` inside args.
static CSHARP_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?P<decl>\[\s*assembly\s*:\s*(?P<name>[A-Za-z0-9]+)\s*\((?P<args>[^)]+)\)\s*\])",
    )
    .expect("C# declaration pattern compiles")
});

/// JScript: any single-line body; quoted strings may contain `]`. An
/// unterminated quote runs to the closing bracket so the body parser can
/// reject it instead of the line passing through as text.
static JSCRIPT_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*(?P<decl>\[[ \t]*assembly[ \t]*:(?P<body>(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|['"][^\]\n]*|[^\]"'\n])*)\])"#,
    )
    .expect("JScript declaration pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body<'s> {
    Call { name: &'s str, args: &'s str },
    Expression(&'s str),
}

/// One declaration found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'s> {
    /// Byte range from `[` through `]`.
    pub span: Range<usize>,
    pub text: &'s str,
    body: Body<'s>,
}

impl<'s> Declaration<'s> {
    /// Declared name and decoded value.
    pub fn parse(&self) -> Result<(&'s str, AttrValue)> {
        match self.body {
            Body::Call { name, args } => Ok((name, value::decode(args)?)),
            Body::Expression(body) => {
                let call = expr::parse_call(body)?;
                let value = match call.argument {
                    Some(argument) => value::decode(argument)?,
                    None => AttrValue::Null,
                };
                Ok((call.callee, value))
            }
        }
    }
}

/// Iterator over the declarations of a text, in order.
pub struct Declarations<'s> {
    captures: CaptureMatches<'static, 's>,
    language: Language,
}

pub fn scan(text: &str, language: Language) -> Declarations<'_> {
    let pattern = match language {
        Language::CSharp => &*CSHARP_DECLARATION,
        Language::JScript => &*JSCRIPT_DECLARATION,
    };
    Declarations {
        captures: pattern.captures_iter(text),
        language,
    }
}

impl<'s> Iterator for Declarations<'s> {
    type Item = Declaration<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        let decl = caps.name("decl")?;
        let body = match self.language {
            Language::CSharp => Body::Call {
                name: caps.name("name")?.as_str(),
                args: caps.name("args")?.as_str(),
            },
            Language::JScript => Body::Expression(caps.name("body")?.as_str()),
        };
        trace!(start = decl.start(), end = decl.end(), "found declaration");

        Some(Declaration {
            span: decl.range(),
            text: decl.as_str(),
            body,
        })
    }
}
