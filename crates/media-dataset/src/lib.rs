#![warn(missing_docs)]

//! # Media Dataset
//!
//! Wraps a single image file in a dataset that training and inference loops can consume.
//!
//! The file is decoded once, when the dataset is created, and placed in a queue. Items are
//! handed out destructively, by index through [MediaDataset::get_item] or sequentially
//! through [MediaDataset::iter], with an optional [transform](transform::Transform) applied on
//! the way out.
//!
//! ```no_run
//! use media_dataset::transform::ToTensor;
//! use media_dataset::MediaDataset;
//!
//! let dataset = MediaDataset::with_transform("photo.png", ToTensor)?;
//! for tensor in &dataset {
//!     let tensor = tensor?;
//!     println!("{:?}", tensor.shape);
//! }
//! # Ok::<(), media_dataset::MediaDatasetError>(())
//! ```

mod config;
mod dataset;
mod error;
mod media;

/// Transforms applied to items on access.
pub mod transform;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use media::*;
