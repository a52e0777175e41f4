use std::path::is_separator;

/// Codec family selected from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Classify an extension (including the leading dot).
    ///
    /// JPEG matches when the extension contains `.jpg` or `.jpeg`, PNG only on an
    /// exact `.png`. Matching is case-sensitive unless `case_insensitive` is set.
    pub fn from_extension(ext: &str, case_insensitive: bool) -> Option<Self> {
        let ext = if case_insensitive {
            ext.to_ascii_lowercase()
        } else {
            ext.to_string()
        };

        if ext.contains(".jpg") || ext.contains(".jpeg") {
            Some(ImageKind::Jpeg)
        } else if ext == ".png" {
            Some(ImageKind::Png)
        } else {
            None
        }
    }
}

/// Extension of the final path element, starting at its last dot.
///
/// Returns an empty string when the final element has no dot.
pub fn extension_of(path: &str) -> &str {
    for (idx, ch) in path.char_indices().rev() {
        if is_separator(ch) {
            break;
        }
        if ch == '.' {
            return &path[idx..];
        }
    }
    ""
}

/// Output path for a watermarked copy: `photo.png` becomes `photo_marked.png`.
pub fn marked_path(path: &str, ext: &str) -> String {
    let stem = path.strip_suffix(ext).unwrap_or(path);
    format!("{}_marked{}", stem, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_extensions() {
        assert_eq!(ImageKind::from_extension(".jpg", false), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension(".jpeg", false), Some(ImageKind::Jpeg));
        // Substring match, as ".jpg" is contained in ".jpgx"
        assert_eq!(ImageKind::from_extension(".jpgx", false), Some(ImageKind::Jpeg));
    }

    #[test]
    fn test_png_is_exact_match() {
        assert_eq!(ImageKind::from_extension(".png", false), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_extension(".pngx", false), None);
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(ImageKind::from_extension(".JPG", false), None);
        assert_eq!(ImageKind::from_extension(".PNG", false), None);
        assert_eq!(ImageKind::from_extension(".JPG", true), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension(".PNG", true), Some(ImageKind::Png));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert_eq!(ImageKind::from_extension(".gif", true), None);
        assert_eq!(ImageKind::from_extension("", true), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.png"), ".png");
        assert_eq!(extension_of("dir/archive.tar.gz"), ".gz");
        assert_eq!(extension_of("dir.d/README"), "");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of(".hidden"), ".hidden");
    }

    #[test]
    fn test_marked_path() {
        assert_eq!(marked_path("photo.png", ".png"), "photo_marked.png");
        assert_eq!(
            marked_path("C:/My Photos/cat.JPG", ".JPG"),
            "C:/My Photos/cat_marked.JPG"
        );
        assert_eq!(marked_path("a.b/photo.jpeg", ".jpeg"), "a.b/photo_marked.jpeg");
    }
}
