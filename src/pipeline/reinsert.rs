//! Positional reinsertion of rendered fragments.

use crate::error::{Error, MathKind, Result};

/// Replace the nth occurrence of `token` with `replacements[n]`.
///
/// The number of occurrences must equal the number of replacements, otherwise
/// the markdown engine dropped, duplicated or escaped a placeholder and the
/// output would be corrupted. Replacement text is never searched for further
/// tokens.
pub fn reinsert(
    text: &str,
    token: char,
    kind: MathKind,
    replacements: Vec<String>,
) -> Result<String> {
    let found = text.matches(token).count();
    if found != replacements.len() {
        return Err(Error::PlaceholderMismatch {
            kind,
            expected: replacements.len(),
            found,
        });
    }

    let extra: usize = replacements.iter().map(String::len).sum();
    let mut output = String::with_capacity(text.len() + extra);
    let mut queue = replacements.into_iter();
    let mut rest = text;

    while let Some(pos) = rest.find(token) {
        // Counted above, so the queue cannot run dry here.
        let Some(fragment) = queue.next() else { break };
        output.push_str(&rest[..pos]);
        output.push_str(&fragment);
        rest = &rest[pos + token.len_utf8()..];
    }
    output.push_str(rest);

    Ok(output)
}
