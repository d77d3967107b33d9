//! XML tree access for XMI documents.
//!
//! XMI 1.1 names everything with the `UML:` prefix. Elements are matched on
//! their qualified name as written in the document (`UML:Class`, `ref`), not
//! on the namespace URI, because tools disagree on the URI bound to `UML`.
//!
//! Hand-written documents frequently use the `UML:` prefix without declaring
//! it. Such documents are accepted: [`SourceText::prepare`] declares the missing prefixes
//! on the root element and keeps track of the shift so spans still point
//! into the caller's text.

use std::borrow::Cow;

use log::debug;
use roxmltree::{Document, Node, ParsingOptions, TextPos};

use crate::{error::DecodeError, span::Span};

/// Upper bound on distinct undeclared prefixes that are patched in.
const MAX_UNDECLARED_PREFIXES: usize = 16;

/// Namespace URI given to prefixes the document uses without declaring.
const UNDECLARED_NAMESPACE: &str = "urn:classboard:undeclared";

/// The text handed to the XML parser, possibly with extra namespace
/// declarations, and the mapping back to the caller's offsets.
#[derive(Debug)]
pub(crate) struct SourceText<'a> {
    text: Cow<'a, str>,
    inserted_at: usize,
    inserted_len: usize,
}

impl<'a> SourceText<'a> {
    /// Prepare `xml` for parsing, declaring every prefix that is used but
    /// never bound.
    pub(crate) fn prepare(xml: &'a str) -> Result<Self, DecodeError> {
        let mut source = Self {
            text: Cow::Borrowed(xml),
            inserted_at: 0,
            inserted_len: 0,
        };

        for _ in 0..MAX_UNDECLARED_PREFIXES {
            let err = match Document::parse_with_options(&source.text, parsing_options()) {
                Ok(_) => return Ok(source),
                Err(err) => err,
            };

            let roxmltree::Error::UnknownNamespace(prefix, _) = &err else {
                return Err(malformed(&err, &source));
            };
            debug!(prefix = prefix.as_str(); "Declaring undeclared namespace prefix");
            source.declare_prefix(xml, prefix).ok_or_else(|| malformed(&err, &source))?;
        }

        Err(DecodeError::malformed(
            "too many undeclared namespace prefixes",
            None,
        ))
    }

    /// Parse the prepared text.
    pub(crate) fn parse(&self) -> Result<Document<'_>, DecodeError> {
        Document::parse_with_options(&self.text, parsing_options())
            .map_err(|err| malformed(&err, self))
    }

    /// Span of `node` in the caller's original text.
    pub(crate) fn span_of(&self, node: Node<'_, '_>) -> Span {
        let range = node.range();
        Span::new(self.original_offset(range.start)..self.original_offset(range.end))
    }

    fn original_offset(&self, offset: usize) -> usize {
        if self.inserted_len == 0 || offset <= self.inserted_at {
            offset
        } else if offset >= self.inserted_at + self.inserted_len {
            offset - self.inserted_len
        } else {
            self.inserted_at
        }
    }

    fn original_len(&self) -> usize {
        self.text.len() - self.inserted_len
    }

    /// Insert an `xmlns:{prefix}` declaration right after the root element
    /// name. Returns `None` when no root start tag can be located.
    fn declare_prefix(&mut self, original: &str, prefix: &str) -> Option<()> {
        let at = match self.inserted_len {
            0 => root_name_end(original)?,
            _ => self.inserted_at + self.inserted_len,
        };
        let declaration = format!(" xmlns:{prefix}=\"{UNDECLARED_NAMESPACE}:{prefix}\"");

        let mut text = self.text.clone().into_owned();
        text.insert_str(at, &declaration);

        if self.inserted_len == 0 {
            self.inserted_at = at;
        }
        self.inserted_len += declaration.len();
        self.text = Cow::Owned(text);
        Some(())
    }

    /// Byte offset of a parser position within the caller's text.
    fn offset_of(&self, pos: TextPos) -> usize {
        let offset = offset_at(&self.text, pos);
        self.original_offset(offset)
    }
}

fn parsing_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

fn malformed(err: &roxmltree::Error, source: &SourceText<'_>) -> DecodeError {
    let len = source.original_len();
    let span = match err {
        roxmltree::Error::NoRootNode => None,
        _ if len == 0 => None,
        _ => {
            let offset = source.offset_of(err.pos()).min(len - 1);
            Some(Span::new(offset..offset + 1))
        }
    };
    DecodeError::malformed(err.to_string(), span)
}

/// Converts a 1-based row/column position into a byte offset.
fn offset_at(text: &str, pos: TextPos) -> usize {
    let row = pos.row.max(1) as usize;
    let col = pos.col.max(1) as usize;

    let line_start = if row == 1 {
        0
    } else {
        text.match_indices('\n')
            .nth(row - 2)
            .map(|(index, _)| index + 1)
            .unwrap_or(text.len())
    };

    text[line_start..]
        .char_indices()
        .nth(col - 1)
        .map(|(index, _)| line_start + index)
        .unwrap_or(text.len())
}

/// Byte offset just past the root element's name in its start tag.
fn root_name_end(text: &str) -> Option<usize> {
    let mut rest = 0;
    loop {
        let open = rest + text[rest..].find('<')?;
        let after = &text[open + 1..];

        if after.starts_with("!--") {
            rest = open + after.find("-->")? + 4;
            continue;
        }
        if after.starts_with('?') || after.starts_with('!') {
            rest = open + after.find('>')? + 2;
            continue;
        }

        let name_len = after
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .unwrap_or(after.len());
        return (name_len > 0).then_some(open + 1 + name_len);
    }
}

/// The qualified name of an element as written in the document.
///
/// Returns `None` for non-element nodes.
pub(crate) fn qualified_name<'a>(node: Node<'a, '_>) -> Option<Cow<'a, str>> {
    if !node.is_element() {
        return None;
    }

    let tag = node.tag_name();
    let prefix = tag
        .namespace()
        .and_then(|namespace| node.lookup_prefix(namespace))
        .filter(|prefix| !prefix.is_empty());

    Some(match prefix {
        Some(prefix) => Cow::Owned(format!("{prefix}:{}", tag.name())),
        None => Cow::Borrowed(tag.name()),
    })
}

/// True when `node` is an element with the given qualified name.
pub(crate) fn is_named(node: Node<'_, '_>, name: &str) -> bool {
    qualified_name(node).is_some_and(|qualified| qualified == name)
}

/// All descendant elements of `node` (excluding `node`) named `name`, in
/// document order.
pub(crate) fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |descendant| is_named(*descendant, name))
}

/// The first descendant element of `node` named `name`.
pub(crate) fn first_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> Option<Node<'a, 'input>> {
    descendants_named(node, name).next()
}

/// Concatenated text content of `node`, trimmed. `None` when empty.
pub(crate) fn text_content(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|descendant| descendant.text())
        .collect();

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Value of the first `UML:TaggedValue` below `node` whose `tag` equals `tag`.
pub(crate) fn tagged_value<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.descendants()
        .filter(|descendant| is_named(*descendant, "UML:TaggedValue"))
        .find(|tagged| tagged.attribute("tag") == Some(tag))
        .and_then(|tagged| tagged.attribute("value"))
}
