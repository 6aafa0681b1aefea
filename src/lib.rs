//! natview - A terminal front end for the NAT site.
//!
//! natview renders the site's pages in the terminal. A fixed route table maps
//! locations such as `/natpaper#supply` to views, and a scroll policy decides
//! where the viewport lands after every navigation.
//!
//! # Features
//!
//! - Exact, arbitrary-precision supply arithmetic
//! - Satoshi to bitcoin conversion without floating point
//! - Back/forward history with scroll restoration
//! - Smooth scrolling to section anchors
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use natview::format::{format_number, get_total_available, sats_to_bitcoin};
//!
//! assert_eq!(format_number(1_000_000), "1,000,000");
//! assert_eq!(get_total_available(100, 30), "70");
//! assert_eq!(sats_to_bitcoin(150_000_000), "1.5");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod pages;
pub mod router;
pub mod ui;

pub use error::{NatviewError, Result};
