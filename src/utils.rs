use crate::options::ImageFormat;
use std::collections::HashMap;
use url::Url;

/// Longest file stem produced, leaving room for a dedup suffix and extension
/// under the common 255-byte file name limit.
pub const MAX_STEM_BYTES: usize = 200;

/// Parse `input` as an absolute http(s) URL.
pub fn validate_url(input: &str) -> Result<Url, String> {
    let parsed = Url::parse(input).map_err(|e| format!("invalid URL '{input}': {e}"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!("unsupported URL scheme '{scheme}' in '{input}'")),
    }
}

/// Derive a filesystem-safe file name for a capture of `url`.
pub fn filename_for_url(url: &str, format: Option<ImageFormat>) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    let stem: String = trimmed
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '&' | '=' | '#' => '_',
            c if c.is_control() || c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    let stem = if stem.is_empty() { "screenshot".to_string() } else { stem };
    let stem = truncate_to_char_boundary(&stem, MAX_STEM_BYTES);
    let extension = format.unwrap_or(ImageFormat::Png).extension();

    format!("{stem}.{extension}")
}

/// File names for a batch of captures, one per URL, in input order.
///
/// A name already taken earlier in the batch gets a `-N` suffix before the
/// extension, so no two captures write the same file.
pub fn batch_filenames(urls: &[String], format: Option<ImageFormat>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(urls.len());

    for url in urls {
        let mut name = filename_for_url(url, format);

        if let Some(&taken) = seen.get(&name) {
            let (stem, extension) = name.rsplit_once('.').unwrap_or((name.as_str(), ""));
            let mut count = taken;
            let candidate = loop {
                count += 1;
                let candidate = format!("{stem}-{count}.{extension}");
                if !seen.contains_key(&candidate) {
                    break candidate;
                }
            };
            seen.insert(name.clone(), count);
            name = candidate;
        }

        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}

fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}
