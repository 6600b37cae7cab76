//! MediaWiki-side helpers: page records, redirects and the settings page.

pub mod page_meta;
pub mod redirect;
pub mod settings;

pub use page_meta::{pagename_to_filename, PageMeta};
pub use redirect::{is_redirect, parse_redirect_pagename};
pub use settings::{Settings, TitleFilter};
