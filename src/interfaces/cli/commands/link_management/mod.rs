//! Link commands
//!
//! Shorten a URL and list every short link, against the shortener API.

mod list;
mod shorten;

pub use list::list_links;
pub use shorten::shorten_url;
