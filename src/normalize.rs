//! Pure string normalizers turning free-text user input into valid
//! identifiers. Every function is total and idempotent: applying it to its
//! own output yields the same string.

/// Joins the non-separator runs of `input` with `joiner`, dropping leading
/// and trailing separators.
fn collapse_runs(input: &str, is_separator: fn(char) -> bool, joiner: &str) -> String {
    input
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Normalizes a free-text name into a Java-style class name.
///
/// Non-alphanumerics are removed from each whitespace-separated word and
/// the words are concatenated with their initial character uppercased:
/// `"my mod"` becomes `"MyMod"`, `"my_mod"` becomes `"Mymod"`.
pub fn normalize_class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.trim().split_whitespace() {
        // Filter before capitalizing, so the first surviving character is
        // the one that gets uppercased and the result is idempotent.
        let word: String = word.chars().filter(char::is_ascii_alphanumeric).collect();
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Normalizes a single dot-free namespace segment: lowercased with
/// whitespace and non-alphanumerics removed.
pub fn normalize_namespace_segment(name: &str) -> String {
    name.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalizes a dotted class namespace by normalizing each segment and
/// dropping segments that normalize to nothing.
pub fn normalize_class_namespace(name: &str) -> String {
    name.trim()
        .split('.')
        .map(normalize_namespace_segment)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Normalizes a name for use as a file name. Whitespace runs become a
/// single underscore, the first colon becomes a double underscore, and
/// anything outside `[A-Za-z0-9_.-]` is removed.
pub fn normalize_file_name(name: &str) -> String {
    let collapsed = collapse_runs(name.trim(), char::is_whitespace, "_");
    let mut out = String::with_capacity(collapsed.len());
    let mut colon_seen = false;
    for c in collapsed.chars() {
        if c == ':' && !colon_seen {
            out.push_str("__");
            colon_seen = true;
        } else if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
            out.push(c);
        }
    }
    out
}

/// Normalizes a mod id: lowercase snake case, with whitespace and hyphen
/// runs collapsed to a single underscore.
pub fn normalize_mod_id(name: &str) -> String {
    collapse_runs(name.trim(), |c| c.is_whitespace() || c == '-', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalizes a generic lowercase identifier, keeping underscores and
/// hyphens.
pub fn normalize_name(name: &str) -> String {
    collapse_runs(name.trim(), char::is_whitespace, "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalizes a repository name: whitespace runs become hyphens, case is
/// preserved.
pub fn normalize_repo_name(name: &str) -> String {
    collapse_runs(name.trim(), char::is_whitespace, "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}

/// Normalizes a repository owner: whitespace removed, case preserved.
pub fn normalize_repo_owner(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}

/// Normalizes a vendor name: lowercase alphanumerics only.
pub fn normalize_vendor_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
