use std::borrow::Cow;

/// Directory portion of an archive path (`OEBPS/content.opf` -> `OEBPS`).
///
/// Paths without a separator reside at the container root, returning `""`.
pub(crate) fn parent(href: &str) -> &str {
    href.rfind('/')
        .map_or("", |index| if index == 0 { "/" } else { &href[..index] })
}

pub(crate) fn decode(encoded: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(encoded).decode_utf8_lossy()
}

/// Joins `relative` onto `parent_dir` and cleans the result.
///
/// A leading `/` on `relative` does not reset the join, whether or not
/// `parent_dir` is empty; `..` never climbs above the container root.
pub(crate) fn join(parent_dir: &str, relative: &str) -> String {
    if parent_dir.is_empty() {
        normalize(relative.trim_start_matches('/'))
    } else {
        normalize(&format!("{parent_dir}/{relative}"))
    }
}

/// Removes empty, `.` and `..` segments.
///
/// Only `/` separates segments; any other character, `\` included,
/// is part of an entry name.
fn normalize(href: &str) -> String {
    let rooted = href.starts_with('/');
    let mut stack = Vec::new();

    for segment in href.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(segment),
        }
    }

    let joined = stack.join("/");
    if rooted { format!("/{joined}") } else { joined }
}
