//! Pure path utilities: normalization, splitting, root detection.
//!
//! The canonical separator is `/`. Archive entry names may arrive with
//! backslashes (Windows-authored ZIPs); callers are expected to rewrite
//! those to `/` before calling into this module (see
//! [`crate::fs::ArchiveFileSystem`]'s constructors).

/// The root path. An empty string, by convention, rather than `"/"`.
pub const ROOT: &str = "";

/// True iff `path` is the root path.
pub fn is_root(path: &str) -> bool {
    path.is_empty()
}

/// Removes any trailing `/` from `path`, unless `path` is exactly `/`, in
/// which case the result is the root path (`""`).
pub fn cut_trailing_separators(path: &str) -> &str {
    if path == "/" {
        return ROOT;
    }
    path.trim_end_matches('/')
}

/// Normalizes `path`: collapses runs of separators, resolves `.` segments,
/// and resolves `..` by popping the previous segment unless at the top (in
/// which case a leading `..` is preserved). Accepts either separator on
/// input; always emits `/`.
pub fn normalize(path: &str) -> String {
    let rewritten = path.replace('\\', "/");
    let absolute = rewritten.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for segment in rewritten.split('/') {
        match segment {
            "" | "." => continue,
            ".." if !absolute => match stack.last() {
                Some(&top) if top != ".." => {
                    stack.pop();
                }
                _ => stack.push(".."),
            },
            ".." => match stack.last() {
                Some(_) => {
                    stack.pop();
                }
                None => {}
            },
            other => stack.push(other),
        }
    }

    if absolute {
        format!("/{}", stack.join("/"))
    } else {
        stack.join("/")
    }
}

/// Splits `path` into `(parent, base)` on the last `/`. If there is no
/// separator, the parent is the root path and `base` is the whole of
/// `path`.
pub fn split(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => (ROOT, path),
    }
}

/// Joins a directory path and a single base name into a canonical child
/// path.
pub fn join(parent: &str, base: &str) -> String {
    if is_root(parent) {
        base.to_owned()
    } else {
        format!("{parent}/{base}")
    }
}
