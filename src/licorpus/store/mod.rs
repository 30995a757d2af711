//! # Storage Layer
//!
//! All disk access for the corpus goes through [`fs::FileStore`]. Commands
//! never touch `std::fs` directly, so the write discipline lives in one place:
//!
//! - JSON is written pretty-printed with 2-space indentation, key order preserved.
//! - Every JSON write is atomic: a temp file in the target directory, then rename.
//! - Index files are read-modify-written under an exclusive advisory lock
//!   ([`lock::IndexLock`]) held on a sibling `<index>.lock` file.
//!
//! ## Storage Format
//!
//! ```text
//! json/
//! ├── config.json            # Optional corpus configuration
//! ├── custom.json            # Custom index
//! ├── adaptions.json         # Adaption index
//! ├── custom/
//! │   ├── <id>/<field>       # Raw field files
//! │   └── <id>.json          # Assembled record
//! ├── adaptions/
//! │   ├── <id>/<field>
//! │   └── <id>.json          # Canonical record with overlaid fields
//! ├── details/<id>.json      # Canonical license records (read-only)
//! └── exceptions/<id>.json   # Canonical exception records (read-only)
//! ```

pub mod fs;
pub mod lock;

pub use fs::FileStore;
pub use lock::IndexLock;
