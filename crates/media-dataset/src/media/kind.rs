use std::path::Path;

use image::ImageFormat;

use crate::MediaDatasetConfig;

/// Kind of media a path points to, judged from its extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image the decoder can load.
    ///
    /// The format is a hint derived from the extension; the decoder still sniffs the content.
    Image(Option<ImageFormat>),
    /// A video file.
    Video,
    /// Anything else, including paths without an extension.
    Unsupported,
}

impl MediaKind {
    /// Classifies the path according to the configured extensions.
    pub fn sniff<P: AsRef<Path>>(path: P, config: &MediaDatasetConfig) -> Self {
        let Some(extension) = extension_of(path.as_ref()) else {
            return MediaKind::Unsupported;
        };
        let matches = |candidates: &[String]| {
            candidates.iter().any(|candidate| {
                if config.case_sensitive {
                    *candidate == extension
                } else {
                    candidate.eq_ignore_ascii_case(&extension)
                }
            })
        };

        if matches(&config.image_extensions) {
            MediaKind::Image(ImageFormat::from_extension(&extension))
        } else if matches(&config.video_extensions) {
            MediaKind::Video
        } else {
            MediaKind::Unsupported
        }
    }

    /// Checks if the kind is a decodable image.
    pub fn is_image(&self) -> bool {
        matches!(self, MediaKind::Image(_))
    }
}

/// Extension as written on the path, without the leading dot.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|extension| extension.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaDatasetConfig;

    #[test]
    fn jpg_and_png_are_images() {
        let config = MediaDatasetConfig::new();

        assert_eq!(
            MediaKind::sniff("photo.jpg", &config),
            MediaKind::Image(Some(ImageFormat::Jpeg))
        );
        assert_eq!(
            MediaKind::sniff("dir/photo.png", &config),
            MediaKind::Image(Some(ImageFormat::Png))
        );
    }

    #[test]
    fn other_extensions_are_unsupported_by_default() {
        let config = MediaDatasetConfig::new();

        for path in ["photo.jpeg", "photo.JPG", "photo.PNG", "anim.gif", "photo", ".jpg"] {
            assert_eq!(
                MediaKind::sniff(path, &config),
                MediaKind::Unsupported,
                "{path}"
            );
        }
    }

    #[test]
    fn video_extensions_are_recognized() {
        let config = MediaDatasetConfig::new();

        assert_eq!(MediaKind::sniff("clip.mp4", &config), MediaKind::Video);
        assert_eq!(MediaKind::sniff("clip.mkv", &config), MediaKind::Video);
        assert!(!MediaKind::sniff("clip.mp4", &config).is_image());
    }

    #[test]
    fn case_insensitive_matching() {
        let config = MediaDatasetConfig::new().with_case_sensitive(false);

        assert_eq!(
            MediaKind::sniff("PHOTO.JPG", &config),
            MediaKind::Image(Some(ImageFormat::Jpeg))
        );
        assert_eq!(MediaKind::sniff("CLIP.MOV", &config), MediaKind::Video);
    }

    #[test]
    fn custom_image_extensions() {
        let config = MediaDatasetConfig::new().with_image_extensions(&["jpeg", "bmp"]);

        assert!(MediaKind::sniff("photo.jpeg", &config).is_image());
        assert!(MediaKind::sniff("photo.bmp", &config).is_image());
        assert_eq!(
            MediaKind::sniff("photo.jpg", &config),
            MediaKind::Unsupported
        );
    }
}
