use rtaudit_model::FieldSpec;

/// Pull the value field out of `line` when its key field matches `spec`.
///
/// The line is trimmed and split on tab characters. Lines that are too
/// short, untagged, or tagged with a different key yield `None`;
/// malformed input is never an error at this level.
pub fn extract_field<'a>(line: &'a str, spec: &FieldSpec) -> Option<&'a str> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if *fields.get(spec.key_index)? != spec.key {
        return None;
    }
    fields.get(spec.value_index).copied()
}
