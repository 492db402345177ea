//! Interaction core of the gallery page: category filtering, lightbox
//! navigation and the before/after comparison slider. Nothing in here touches
//! the DOM; the components in `crate::components` drive these models.

pub mod compare;
pub mod filter;
pub mod lightbox;
pub mod state;

use crate::catalog::MediaId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GalleryError {
    #[error("unknown gallery category `{0}`")]
    UnknownCategory(String),
    #[error("media item `{0}` is not in the visible set")]
    NotVisible(MediaId),
}
