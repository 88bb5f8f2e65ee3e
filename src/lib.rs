// src/lib.rs
//
// Copyright, 2025.  Signal65 / Futurum Group.
//
// Crate root — public re-exports.

pub mod constants;
pub mod database;
pub mod dates;
pub mod s3_client;
pub mod s3_text;
pub mod s3_utils;
pub mod url_utils;

// URL-addressed text operations:
pub use s3_text::{
    gz_payload,
    has_gz_tail,
    immediate_children_from_keys,
    list_immediate_children,
    list_immediate_children_async,
    normalize_folder_url,
    read_lines,
    read_lines_async,
    write_data,
    write_data_async,
};

// Locator parsing:
pub use url_utils::{parse_object_url, ObjectLocator};

// Shared client and low-level object operations:
pub use s3_client::{block_on, client};
pub use s3_utils::{get_object, list_objects, put_object};

// Peer utilities:
pub use database::{get_connection_string, UnsupportedDriverError, DATABASE_DRIVERS};
pub use dates::{date_range, format_date, DateSpec, DateSpecError, DATE_FORMAT};

pub use constants::{DEFAULT_REGION, GZ_SUFFIX};
