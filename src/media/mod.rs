// SPDX-License-Identifier: MPL-2.0
//! Image loading for the product page.
//!
//! Bytes come from a [`crate::catalog::Source`]; decoding turns them into
//! Iced image handles; the [`ImageStore`] remembers the outcome per location.

pub mod image;
pub mod store;

pub use image::{decode, load, ImageData};
pub use store::{Entry, ImageStore};
