//! One-shot directory listing and stat-enrichment helpers.
//!
//! `dirstat` answers "which immediate entries of this directory pass a
//! filter, and what are their stats" in a single call. Listing never
//! recurses, nothing is cached, and survivors always come back in the
//! order the platform enumerated them, even when predicates or stat
//! lookups run concurrently. Each function also has a blocking twin under
//! [`blocking`].
//!
//! ```rust
//! # tokio_test::block_on(async {
//! let entries = dirstat::file_stats("./src").await.unwrap();
//! assert!(entries.iter().flatten().any(|entry| entry.name == "lib.rs"));
//! for entry in entries.into_iter().flatten() {
//!     println!("{}", serde_json::to_string_pretty(&entry).unwrap());
//! }
//! # })
//! ```
//!
//! The output might look like
//! ```json
//! {
//!   "name": "lib.rs",
//!   "stats": {
//!     "size": 1581,
//!     "mtime": "2025-11-20T00:35:58.153Z",
//!     "is_directory": false,
//!     "is_file": true
//!   }
//! }
//! ```

pub mod blocking;
mod contents;
mod errors;
mod file;
mod list;
mod probe;
pub mod text;
pub mod utils;
pub mod value;

pub use contents::read_lines;
pub use contents::read_to_string;
pub use contents::write_json;
pub use contents::write_string;
pub use errors::Error;
pub use file::DirectoryEntry;
pub use file::FileStat;
pub use list::dir_names;
pub use list::dir_stats;
pub use list::file_names;
pub use list::file_stats;
pub use list::filtered_names;
pub use list::filtered_names_concurrent;
pub use list::filtered_stats;
pub use list::filtered_stats_concurrent;
pub use probe::exists;
pub use probe::is_dir;
pub use probe::is_file;
pub use probe::stat_opt;

#[cfg(feature = "test_utils")]
pub(crate) mod test_utils;
#[cfg(feature = "test_utils")]
pub use test_utils::TestRoot;
