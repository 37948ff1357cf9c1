// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short, non-blocking feedback: a copied link, a catalog that failed to
//! load, the one-time dark mode hint.
//!
//! - [`notification`] holds the data and severity rules
//! - [`manager`] queues toasts and expires them on tick
//! - [`toast`] renders the visible ones
//!
//! Success and info toasts last about 3s, warnings 5s, errors until
//! dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
