/// Derives the Cloudinary public id from a hosted asset URL by taking the final path segment and
/// stripping its file extension. Returns `None` when the URL has no usable path segment.
///
/// Folder prefixes are not preserved; the storefront uploads everything into the root of the
/// media library.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let last = url.rsplit('/').next()?;
    let public_id = match last.rsplit_once('.') {
        Some((name, _ext)) => name,
        None => last,
    };
    if public_id.is_empty() {
        None
    } else {
        Some(public_id.to_string())
    }
}
