//! Parenthesis scanner for signature parameter lists.
//!
//! The scanner walks the text between a signature's outer parentheses and
//! produces a raw tree: runs of text between parentheses are kept verbatim
//! (`RawNode::Text`), every parenthesised tuple becomes a nested
//! `RawGroup` annotated with the array suffix that follows its closing
//! parenthesis. Commas are not interpreted here; the flattener splits text
//! runs in a second pass once the whole tree is known.
//!
//! All delimiters are ASCII, so byte offsets are always valid `str`
//! boundaries.

/// One item of a raw parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    /// Unsplit text between two parentheses, e.g. `"uint256,address,"`.
    Text(String),
    /// A parenthesised tuple.
    Group(RawGroup),
}

/// A parenthesised parameter list as seen by the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGroup {
    pub items: Vec<RawNode>,
    /// Run of `[`, `]` and digits right after the closing parenthesis.
    pub array_suffix: String,
}

/// Scan a parameter list (the text between the outer parentheses).
///
/// Returns the group together with the number of bytes consumed. For the
/// outermost call that is the full input length; for a nested call it
/// covers everything up to and including the closing parenthesis and its
/// array suffix, so the caller can resume right after it.
pub fn scan_group(input: &str) -> (RawGroup, usize) {
    let bytes = input.as_bytes();
    let mut group = RawGroup::default();
    let mut pending = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'(' => {
                flush(&mut group, &input[pending..pos]);
                let (inner, consumed) = scan_group(&input[pos + 1..]);
                pos += 1 + consumed;
                pending = pos;
                group.items.push(RawNode::Group(inner));
            }
            b')' => {
                flush(&mut group, &input[pending..pos]);
                group.array_suffix = extract_array(input, pos + 1).to_string();
                let consumed = pos + 1 + group.array_suffix.len();
                return (group, consumed);
            }
            _ => pos += 1,
        }
    }

    flush(&mut group, &input[pending..]);
    (group, pos)
}

/// Return the maximal run of `[`, `]` and ASCII digits starting at `offset`.
///
/// An offset at or past the end of the input yields an empty suffix.
pub fn extract_array(input: &str, offset: usize) -> &str {
    let Some(rest) = input.get(offset..) else {
        return "";
    };
    let end = rest
        .bytes()
        .position(|b| !is_array_byte(b))
        .unwrap_or(rest.len());
    &rest[..end]
}

fn is_array_byte(b: u8) -> bool {
    b == b'[' || b == b']' || b.is_ascii_digit()
}

fn flush(group: &mut RawGroup, segment: &str) {
    if !segment.is_empty() {
        group.items.push(RawNode::Text(segment.to_string()));
    }
}
