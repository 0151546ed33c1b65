//! Façade operations. Each resolves its channel at most once, makes one
//! platform call and returns data or a typed failure.

pub mod channels;
pub mod collect;
pub mod deliver;
pub mod summarize;
pub mod workflow;

pub use channels::{channel_info, list_channels, render_channel_list};
pub use collect::fetch_messages;
pub use deliver::post_summary;
pub use summarize::generate_summary;
pub use workflow::{WorkflowOutcome, summarize_and_post};
