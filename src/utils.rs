const PAGE_EXTENSION: &str = ".html";

/// Maps a URL to the name of the file its body is saved under.
///
/// Lossy: `:`, `/` and `.` all become `_`, so distinct URLs can share a name.
pub fn derive_filename(url: &str) -> String {
    let mut name = url.replace(':', "_").replace('/', "_").replace('.', "_");
    name.push_str(PAGE_EXTENSION);
    name
}
