/// Returned for an empty message list.
pub const NOTHING_TO_SUMMARIZE: &str = "No messages to summarize.";

/// Prefix of every generated summary.
pub const SUMMARY_LABEL: &str = "Summary: ";

/// Build the summary text: the label followed by every message joined with
/// single spaces, in input order.
#[must_use]
pub fn generate_summary<S: AsRef<str>>(messages: &[S]) -> String {
    if messages.is_empty() {
        return NOTHING_TO_SUMMARIZE.to_string();
    }

    let joined = messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{SUMMARY_LABEL}{joined}")
}
