//! Text normalization applied to rendered axioms.
//!
//! Rendering produces full entity IRIs and, with some writers, a stray
//! separator before closing parentheses. Both are repaired here, at the
//! composition boundary, rather than inside the composition logic.

/// Normalizes a rendered axiom: collapses SNOMED concept IRIs to the short
/// `:id` prefix form and removes the `") )"` separator artifact.
pub(crate) fn normalize_rendered_axiom(text: &str) -> String {
    collapse_core_namespace(text).replace(") )", "))")
}

/// Collapses `<http://snomed.info/id/NNN>` to `:NNN` wherever the local part
/// is purely numeric. Other IRIs are left untouched.
fn collapse_core_namespace(text: &str) -> String {
    const PREFIX: &str = "<http://snomed.info/id/";

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(PREFIX) {
        out.push_str(&rest[..start]);
        let after = &rest[start + PREFIX.len()..];
        match after.find('>') {
            Some(end) if !after[..end].is_empty()
                && after[..end].bytes().all(|b| b.is_ascii_digit()) =>
            {
                out.push(':');
                out.push_str(&after[..end]);
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str(PREFIX);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
