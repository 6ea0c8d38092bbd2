//! Identifier and primitive-name helpers shared by resolution and emission.
//!
//! The interesting case is "generic" definition names: Swagger 2.0 documents
//! produced by some frameworks encode parametrized models as
//! `PagedResultDto[UserDto]`, which is not a legal identifier in any target
//! language and has to be flattened before emission.

/// Characters that may not appear in a generated definition name.
const ILLEGAL_NAME_CHARS: &[char] = &[
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '<', '>', '?', ':', '"',
    '{', '}', ',', '.', '/', ';', '\'', '[', ']',
];

/// The raw segment after the last `/`, or the whole string if there is none.
pub(crate) fn trailing_segment(ref_path: &str) -> &str {
    match ref_path.rfind('/') {
        Some(idx) => &ref_path[idx + 1..],
        None => ref_path,
    }
}

/// Class name for a `$ref` path.
///
/// Takes the trailing segment of the path; plain names come back unchanged,
/// generic-shaped names (see [`is_generic_name`]) are flattened into a single
/// identifier with illegal characters replaced by `_` and trailing `_` runs
/// stripped.
pub fn ref_class_name(ref_path: &str) -> String {
    let name = trailing_segment(ref_path);
    if !is_generic_name(name) {
        return name.to_string();
    }
    let flattened: String = name
        .chars()
        .map(|c| if ILLEGAL_NAME_CHARS.contains(&c) { '_' } else { c })
        .collect();
    trim_char(&flattened, Some('_'), TrimSide::Right).to_string()
}

/// Whether a definition name is generic-shaped: a non-empty prefix, then
/// `[`, then non-empty content, then `]` closing the whole name.
pub fn is_generic_name(name: &str) -> bool {
    if !name.ends_with(']') {
        return false;
    }
    let inner_end = name.len() - 1;
    name[..inner_end]
        .char_indices()
        .any(|(i, c)| c == '[' && i > 0 && i + 1 < inner_end)
}

/// Splits a generic-shaped name at its first `[` into the outer name and the
/// bracketed inner content (closing bracket excluded).
///
/// A name with no `[` comes back whole, with an empty inner part.
pub fn split_generic_name(name: &str) -> (&str, &str) {
    let Some(open) = name.find('[') else {
        return (name, "");
    };
    let inner = &name[open + 1..];
    let inner = match inner.char_indices().next_back() {
        Some((idx, _)) => &inner[..idx],
        None => inner,
    };
    (&name[..open], inner)
}

/// Which end [`trim_char`] strips from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
    /// Leading occurrences only.
    Left,
    /// Trailing occurrences only.
    Right,
    /// Both ends.
    Both,
}

/// Strips repeated occurrences of a literal character from one or both ends.
///
/// With no character given, ASCII whitespace is trimmed instead.
pub fn trim_char(s: &str, ch: Option<char>, side: TrimSide) -> &str {
    match ch {
        Some(c) => match side {
            TrimSide::Left => s.trim_start_matches(c),
            TrimSide::Right => s.trim_end_matches(c),
            TrimSide::Both => s.trim_matches(c),
        },
        None => {
            let ws = |c: char| c.is_ascii_whitespace();
            match side {
                TrimSide::Left => s.trim_start_matches(ws),
                TrimSide::Right => s.trim_end_matches(ws),
                TrimSide::Both => s.trim_matches(ws),
            }
        }
    }
}

/// Maps a swagger primitive name to the TypeScript base type used in
/// operation signatures.
///
/// The table is case-sensitive and intentionally narrow: anything it does
/// not recognize, including `number` and `boolean`, falls back to `any`.
/// Descriptor resolution handles those two properly; this table mirrors the
/// signature-level behavior as-is. A missing or empty name means the
/// operation declared no type at all, hence `any | null`.
pub fn to_base_type(name: Option<&str>) -> &'static str {
    match name {
        None | Some("") => "any | null",
        Some("array") => "[]",
        Some("Int64" | "integer") => "number",
        Some("Guid" | "String" | "string") => "string",
        Some("file") => "any",
        Some(_) => "any",
    }
}

/// Method name for a URL template: the last path segment that is not a
/// `{placeholder}`, or `""` when every segment is one.
pub fn get_method_name(path: &str) -> &str {
    path.rsplit('/')
        .find(|segment| !is_path_placeholder(segment))
        .unwrap_or("")
}

/// A segment wrapped entirely in braces with non-empty content.
fn is_path_placeholder(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}')
}
