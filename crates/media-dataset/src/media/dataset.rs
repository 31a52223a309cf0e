use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use super::kind::{extension_of, MediaKind};
use crate::transform::{Identity, Transform};
use crate::{
    Dataset, DatasetIterator, MediaDatasetConfig, MediaDatasetError, QueueDataset, Result,
    UnsupportedPolicy,
};

/// Label returned alongside each item. Single files carry no annotation, so it is always `None`.
pub type Label = usize;

/// A dataset wrapping a single media file.
///
/// The file is decoded when the dataset is created and kept in a queue until it is consumed,
/// either through [get_item](MediaDataset::get_item) or by iterating. Both access patterns
/// drain the same queue: the item is handed out once, after which [len](MediaDataset::len)
/// returns 0 for good.
///
/// # Example
///
/// ```no_run
/// use media_dataset::MediaDataset;
///
/// let dataset = MediaDataset::new("photo.jpg")?;
/// assert_eq!(dataset.len(), 1);
///
/// let (image, label) = dataset.get_item(0)?;
/// assert_eq!(label, None);
/// assert!(dataset.is_empty());
/// # Ok::<(), media_dataset::MediaDatasetError>(())
/// ```
pub struct MediaDataset<O = DynamicImage> {
    path: PathBuf,
    kind: MediaKind,
    buffer: QueueDataset<DynamicImage>,
    transform: Box<dyn Transform<DynamicImage, O>>,
}

impl MediaDataset<DynamicImage> {
    /// Creates a dataset yielding the decoded image as is.
    ///
    /// Only `.jpg` and `.png` files are loaded. Any other extension leaves the dataset empty.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(path, Identity, &MediaDatasetConfig::default())
    }
}

impl<O> MediaDataset<O> {
    /// Creates a dataset applying `transform` to the decoded image before handing it out.
    pub fn with_transform<P, T>(path: P, transform: T) -> Result<Self>
    where
        P: AsRef<Path>,
        T: Transform<DynamicImage, O> + 'static,
    {
        Self::from_config(path, transform, &MediaDatasetConfig::default())
    }

    /// Creates a dataset with an explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Image file to load.
    /// * `transform` - Applied to the image on access.
    /// * `config` - Supported extensions and what to do with unsupported ones.
    ///
    /// # Returns
    /// A new dataset holding zero or one item.
    pub fn from_config<P, T>(path: P, transform: T, config: &MediaDatasetConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        T: Transform<DynamicImage, O> + 'static,
    {
        let path = path.as_ref().to_path_buf();
        let kind = MediaKind::sniff(&path, config);

        let buffer = match kind {
            MediaKind::Image(_) => QueueDataset::from_items(vec![load_image(&path)?]),
            MediaKind::Video => {
                if config.on_unsupported == UnsupportedPolicy::Reject {
                    return Err(MediaDatasetError::VideoNotSupported(path));
                }
                log::warn!("Ignoring {}: video decoding is not supported", path.display());
                QueueDataset::empty()
            }
            MediaKind::Unsupported => {
                if config.on_unsupported == UnsupportedPolicy::Reject {
                    let extension = extension_of(&path).unwrap_or_default();
                    return Err(MediaDatasetError::UnsupportedFormat { path, extension });
                }
                log::warn!("Ignoring {}: unsupported file extension", path.display());
                QueueDataset::empty()
            }
        };

        Ok(Self {
            path,
            kind,
            buffer,
            transform: Box::new(transform),
        })
    }

    /// Pops the next item and applies the transform.
    ///
    /// The index is accepted for compatibility with index-driven loaders and otherwise
    /// ignored: every call returns the head of the queue.
    ///
    /// # Returns
    /// The item with its label, which is always `None`.
    /// [Exhausted](MediaDatasetError::Exhausted) once the queue is drained.
    pub fn get_item(&self, index: usize) -> Result<(O, Option<Label>)> {
        let item = self.get(index).ok_or(MediaDatasetError::Exhausted)??;
        Ok((item, None))
    }

    /// Returns a lazy iterator draining the dataset.
    ///
    /// The iterator shares the queue with [get_item](MediaDataset::get_item) and cannot be
    /// restarted: a second pass yields nothing.
    pub fn iter(&self) -> DatasetIterator<'_, Result<O>> {
        DatasetIterator::new(self)
    }

    /// Number of items not yet consumed.
    pub fn len(&self) -> usize {
        self.buffer.remaining()
    }

    /// Checks if every item has been consumed, or none was loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kind of media detected from the path.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

impl<O> Dataset<Result<O>> for MediaDataset<O> {
    fn get(&self, _index: usize) -> Option<Result<O>> {
        let image = self.buffer.pop()?;
        Some(
            self.transform
                .apply(image)
                .map_err(MediaDatasetError::Transform),
        )
    }

    fn len(&self) -> usize {
        self.buffer.remaining()
    }
}

impl<'a, O> IntoIterator for &'a MediaDataset<O> {
    type Item = Result<O>;
    type IntoIter = DatasetIterator<'a, Result<O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    log::debug!("Loading image {}", path.display());

    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;

    log::debug!(
        "Loaded {}x{} {:?} image from {}",
        image.width(),
        image.height(),
        image.color(),
        path.display()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;
    use image::{Rgb, RgbImage};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Files {
        _dir: TempDir,
        png: PathBuf,
    }

    #[fixture]
    fn files() -> Files {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("dot.png");
        RgbImage::from_pixel(4, 3, Rgb([255, 128, 0]))
            .save(&png)
            .unwrap();
        Files { _dir: dir, png }
    }

    #[rstest]
    fn loads_one_item(files: Files) {
        let dataset = MediaDataset::new(&files.png).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.path(), files.png.as_path());
        assert!(dataset.kind().is_image());
    }

    #[rstest]
    fn get_item_returns_the_decoded_image(files: Files) {
        let dataset = MediaDataset::new(&files.png).unwrap();

        let (image, label) = dataset.get_item(999).unwrap();

        assert_eq!((image.width(), image.height()), (4, 3));
        assert_eq!(image.to_rgb8().get_pixel(0, 0), &Rgb([255, 128, 0]));
        assert_eq!(label, None);
    }

    #[rstest]
    fn dataset_trait_get_drains(files: Files) {
        let dataset = MediaDataset::new(&files.png).unwrap();

        assert!(matches!(Dataset::get(&dataset, 0), Some(Ok(_))));
        assert!(Dataset::get(&dataset, 0).is_none());
        assert!(Dataset::is_empty(&dataset));
    }

    #[rstest]
    fn transform_error_is_wrapped(files: Files) {
        let fail = |_: DynamicImage| -> std::result::Result<u8, TransformError> {
            Err("cannot convert".into())
        };
        let dataset = MediaDataset::with_transform(&files.png, fail).unwrap();

        let err = dataset.get_item(0).unwrap_err();

        assert!(matches!(err, MediaDatasetError::Transform(_)));
        assert!(dataset.is_empty());
    }

    #[test]
    fn missing_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();

        let err = MediaDataset::new(dir.path().join("missing.jpg")).err().unwrap();

        assert!(matches!(err, MediaDatasetError::Io(_)));
    }

    #[test]
    fn corrupt_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();

        let err = MediaDataset::new(&path).err().unwrap();

        assert!(matches!(err, MediaDatasetError::Decode(_)));
    }
}
