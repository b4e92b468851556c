//! Header normalization.

use std::collections::HashSet;

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Builds unique column names from a raw header record.
///
/// Empty names become `Unnamed: <index>`; repeated names get `.1`, `.2`, ...
/// suffixes in order of appearance.
pub fn build_column_names<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        let mut name = normalize_header(value);
        if name.is_empty() {
            name = format!("Unnamed: {index}");
        }
        if seen.contains(&name) {
            let mut suffix = 1usize;
            while seen.contains(&format!("{name}.{suffix}")) {
                suffix += 1;
            }
            name = format!("{name}.{suffix}");
        }
        seen.insert(name.clone());
        columns.push(name);
    }
    columns
}
