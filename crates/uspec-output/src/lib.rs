//! Output generation: timestamped wordlist files and wordlist merging.

pub mod common;
pub mod merge;
pub mod wordlist;

pub use common::{SavedOutput, TIMESTAMP_FORMAT, ensure_output_dir, timestamped_name, write_lines};
pub use merge::{merge_files, merge_sources, save_merged, save_merged_at};
pub use wordlist::{save_wordlist, save_wordlist_at};
