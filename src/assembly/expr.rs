//! Minimal call-expression grammar for JScript declarations.
//!
//! ```text
//! declaration := Identifier ( '(' Literal? ')' )?
//! ```
//!
//! Only the shape is checked here; the argument text is handed to
//! [`crate::value::decode`].

use crate::error::{AssemblyError, Result};

/// A parsed declaration body such as `AssemblyTitle("x")` or `Marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallExpr<'a> {
    pub callee: &'a str,
    /// Raw argument text, `None` for markers and empty argument lists.
    pub argument: Option<&'a str>,
}

pub fn parse_call(body: &str) -> Result<CallExpr<'_>> {
    let text = body.trim();
    let fail = |reason: String| AssemblyError::Expression {
        body: text.to_string(),
        reason,
    };

    let ident_len = text
        .char_indices()
        .find(|(_, c)| !is_ident_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let callee = &text[..ident_len];

    match callee.chars().next() {
        None => return Err(fail("expected an identifier".into())),
        Some(c) if c.is_ascii_digit() => {
            return Err(fail("identifier cannot start with a digit".into()))
        }
        Some(_) => {}
    }

    let rest = text[ident_len..].trim_start();
    match rest.chars().next() {
        None => {
            return Ok(CallExpr {
                callee,
                argument: None,
            })
        }
        Some('(') => {}
        Some('.') | Some('[') => return Err(fail("callee must be a plain identifier".into())),
        Some(other) => return Err(fail(format!("unexpected `{}`", other))),
    }

    let inner = &rest[1..];
    let (args, close) =
        split_arguments(inner).ok_or_else(|| fail("unbalanced parentheses or quotes".into()))?;
    if !inner[close + 1..].trim().is_empty() {
        return Err(fail("unexpected input after the argument list".into()));
    }

    match args.as_slice() {
        [] => Ok(CallExpr {
            callee,
            argument: None,
        }),
        [one] => Ok(CallExpr {
            callee,
            argument: Some(one),
        }),
        many => Err(fail(format!(
            "expected at most one argument, found {}",
            many.len()
        ))),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Splits the text following `(` into top-level arguments. Returns them with
/// the byte offset of the matching `)`.
fn split_arguments(text: &str) -> Option<(Vec<&str>, usize)> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' if depth == 0 => {
                let last = text[start..i].trim();
                if !last.is_empty() || !args.is_empty() {
                    args.push(last);
                }
                return Some((args, i));
            }
            ')' | ']' | '}' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                args.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    None
}
