//! Formatting of class features (attributes and methods).
//!
//! Boards store features as display strings such as `+ edad: int` or
//! `+ rodar(): void`. The functions here build those strings and split them
//! back into a name and a type.

/// Type used when an attribute declares none.
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "string";

/// Return type used when a method declares none.
pub const DEFAULT_RETURN_TYPE: &str = "void";

/// Visibility markers that may prefix a feature string.
const VISIBILITY_MARKERS: [char; 4] = ['+', '-', '#', '~'];

/// A feature string split into its name and optional type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFeature<'a> {
    name: &'a str,
    type_name: Option<&'a str>,
}

impl<'a> ParsedFeature<'a> {
    /// Feature name, possibly empty.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Declared type, or `None` when the string carries no type.
    pub fn type_name(&self) -> Option<&'a str> {
        self.type_name
    }
}

/// Formats an attribute as `+ {name}: {type}`, defaulting the type to
/// [`DEFAULT_ATTRIBUTE_TYPE`].
///
/// # Examples
///
/// ```
/// # use classboard_core::feature::format_attribute;
/// assert_eq!(format_attribute("edad", Some("int")), "+ edad: int");
/// assert_eq!(format_attribute("nombre", None), "+ nombre: string");
/// ```
pub fn format_attribute(name: &str, type_name: Option<&str>) -> String {
    let type_name = non_empty(type_name).unwrap_or(DEFAULT_ATTRIBUTE_TYPE);
    format!("+ {name}: {type_name}")
}

/// Formats a method as `+ {name}(): {returnType}`, defaulting the return
/// type to [`DEFAULT_RETURN_TYPE`].
///
/// # Examples
///
/// ```
/// # use classboard_core::feature::format_method;
/// assert_eq!(format_method("rodar", None), "+ rodar(): void");
/// ```
pub fn format_method(name: &str, return_type: Option<&str>) -> String {
    let return_type = non_empty(return_type).unwrap_or(DEFAULT_RETURN_TYPE);
    format!("+ {name}(): {return_type}")
}

/// Splits an attribute string such as `+ edad: int` into name and type.
///
/// The visibility marker is optional. Everything after the first `:` is the
/// type.
pub fn parse_attribute(entry: &str) -> ParsedFeature<'_> {
    let body = strip_visibility(entry);
    match body.split_once(':') {
        Some((name, type_name)) => ParsedFeature {
            name: name.trim(),
            type_name: non_empty(Some(type_name.trim())),
        },
        None => ParsedFeature {
            name: body.trim(),
            type_name: None,
        },
    }
}

/// Splits a method string such as `+ rodar(): void` into name and return
/// type.
///
/// Parameter lists are not part of the board model and are dropped.
pub fn parse_method(entry: &str) -> ParsedFeature<'_> {
    let body = strip_visibility(entry);
    let Some(open) = body.find('(') else {
        return parse_attribute(body);
    };

    let name = body[..open].trim();
    let rest = &body[open..];
    let type_name = rest
        .rfind(')')
        .map(|close| rest[close + 1..].trim_start())
        .and_then(|after| after.strip_prefix(':'))
        .map(str::trim);

    ParsedFeature {
        name,
        type_name: non_empty(type_name),
    }
}

/// Splits newline separated editor input into feature strings, dropping
/// blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_visibility(entry: &str) -> &str {
    let trimmed = entry.trim_start();
    trimmed
        .strip_prefix(VISIBILITY_MARKERS)
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
