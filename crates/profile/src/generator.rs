use crate::guid::GuidSource;
use crate::types::{CustomCommand, ProfileRecord};
use ssh::HostEntry;

const TAG: &str = "ssh";

/// Builds one profile per host entry, in input order.
///
/// Every record gets a fresh `Guid` from `guids`. Apart from that the output
/// depends only on `entries` and `parent`.
pub fn generate(
    entries: &[HostEntry],
    parent: &str,
    guids: &mut impl GuidSource,
) -> Vec<ProfileRecord> {
    entries
        .iter()
        .map(|entry| ProfileRecord {
            name: entry.name.clone(),
            guid: guids.next_guid(),
            parent_profile_name: parent.to_string(),
            custom_command: CustomCommand::Yes,
            command: entry.command(),
            tags: vec![TAG.to_string()],
        })
        .collect()
}
