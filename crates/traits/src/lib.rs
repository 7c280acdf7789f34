//! Collaborator interfaces the renderer depends on.

mod photo;

pub use photo::{
    FilesystemPhotoStore, InMemoryPhotoStore, PhotoError, PhotoStore, SharedPhotoData,
};
