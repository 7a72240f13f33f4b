//! A minimal Cloudinary admin client.
//!
//! The storefront stores feature-image URLs in its own database; Cloudinary only holds the asset
//! itself. The single operation this crate provides is destroying a hosted asset when its catalog
//! record is deleted.
mod api;
mod config;
mod error;
mod helpers;

pub use api::{CloudinaryApi, HostedImages};
pub use config::CloudinaryConfig;
pub use error::CloudinaryApiError;
pub use helpers::public_id_from_url;
