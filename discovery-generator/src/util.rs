// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A grab bag of helper functions

use anyhow::Result;
use regex::Regex;
use std::fmt::Write as FmtWrite;

const MAX_COMMENT_LINE_LENGTH: usize = 70;

// Converts snake_case to PascalCase.
pub fn snake_to_pascal(s: &str) -> String {
    let mut value = String::new();
    let mut seen_underscore = true;
    for c in s.chars() {
        if c == '_' {
            seen_underscore = true;
            continue;
        }
        if seen_underscore {
            value.extend(c.to_uppercase());
            seen_underscore = false;
            continue;
        }
        value.push(c);
    }
    value
}

// Converts camelCase to snake_case.
pub fn camel_to_snake(s: &str) -> String {
    let mut value = String::new();
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            value.push('_')
        }
        value.push(c.to_ascii_lowercase());
    }
    value
}

/// Uppercase the first character.
pub fn to_title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns a Rust identifier for a JSON property or a query parameter.
///
/// `range.start` becomes `range_start` and keywords get a `_` suffix.
pub fn field_name(s: &str) -> String {
    let name = camel_to_snake(s).replace(['.', '-'], "_");
    if is_keyword(&name) {
        return format!("{name}_");
    }
    name
}

/// Returns the name of the constant for an OAuth scope URL.
///
/// `https://www.googleapis.com/auth/genomics.readonly` becomes
/// `GENOMICS_READONLY`.
pub fn scope_const_name(scope: &str) -> String {
    let last = scope.trim_end_matches('/').rsplit('/').next().unwrap_or(scope);
    last.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Determine if the string is a keyword. See https://doc.rust-lang.org/reference/keywords.html
pub fn is_keyword(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
        "try",
    ];
    KEYWORDS.contains(&s)
}

/// Turns a discovery doc description into a rustdoc comment.
pub fn as_comment(prefix: &str, comment: String, add_padding: bool) -> Result<String> {
    wrap_comment(prefix, "///", comment, add_padding)
}

/// Turns a discovery doc description into a crate level rustdoc comment.
pub fn as_crate_comment(comment: String) -> Result<String> {
    wrap_comment("", "//!", comment, false)
}

fn wrap_comment(
    prefix: &str,
    marker: &str,
    mut comment: String,
    add_padding: bool,
) -> Result<String> {
    if comment.is_empty() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    let mut padding = String::new();
    let mut line_length: usize = MAX_COMMENT_LINE_LENGTH;
    let mut line_num: usize = 0;
    let re_url = Regex::new(r"^\(?http\S+$")?;

    while comment.chars().count() > 0 {
        if add_padding && line_num == 1 {
            padding.push_str("  ");
            line_length = MAX_COMMENT_LINE_LENGTH - 2;
        }
        let mut line = comment.clone();
        if line.chars().count() < line_length {
            writeln!(
                &mut buf,
                "{}{} {}{}",
                prefix,
                marker,
                padding,
                comment_replacer(&line, prefix, marker)
            )?;
            break;
        }

        // Don't break URLs.
        // Find the number of bytes for line_length code-points.
        let i = line.chars().take(line_length).collect::<String>().len();
        let mut split_index = if !re_url.is_match(&line[..i]) {
            line = line[..i].into();
            line.rfind(' ')
        } else {
            line.find(' ')
        };
        let new_line_index = line.find('\n');
        if new_line_index.is_some() && (split_index.is_none() || new_line_index < split_index) {
            split_index = new_line_index;
        }
        if let Some(si) = split_index {
            line = line[..si].into();
        }
        writeln!(
            &mut buf,
            "{}{} {}{}",
            prefix,
            marker,
            padding,
            comment_replacer(&line, prefix, marker)
        )?;
        comment = comment[line.len()..].to_string();
        if split_index.is_some() {
            comment = comment[1..].to_string();
        }
        line_num += 1;
    }
    Ok(buf)
}

fn comment_replacer(comment: &str, prefix: &str, marker: &str) -> String {
    comment
        .replace('\n', &format!("\n{prefix}{marker} "))
        .replace("`\"", "\"")
        .replace("\"`", "\"")
}
