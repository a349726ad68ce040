//! Group records in the key-value store.
//!
//! A group lives under `group:<name>` as a JSON array of addresses. Writes
//! replace the whole record; there is no merge and no delete.

use std::collections::BTreeMap;

use anyhow::Context;

use crate::domain::{GroupMembers, GroupName};
use crate::error::error_chain_fmt;
use crate::store::KeyValueStore;

pub const GROUP_KEY_PREFIX: &str = "group:";

pub fn group_key(name: &GroupName) -> String {
    format!("{GROUP_KEY_PREFIX}{name}")
}

#[derive(thiserror::Error)]
pub enum CreateGroupError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CreateGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Every stored group keyed by name, with members in stored order.
#[tracing::instrument(name = "Listing groups", skip(store))]
pub async fn list_groups(
    store: &dyn KeyValueStore,
) -> Result<BTreeMap<String, Vec<String>>, anyhow::Error> {
    let keys = store
        .keys(&format!("{GROUP_KEY_PREFIX}*"))
        .await
        .context("Failed to enumerate group keys")?;

    let mut groups = BTreeMap::new();
    for key in keys {
        // The key may have been replaced by another writer since KEYS ran.
        let Some(raw) = store
            .get(&key)
            .await
            .with_context(|| format!("Failed to read {key}"))?
        else {
            continue;
        };
        let members: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to deserialize members of {key}"))?;
        let name = key.strip_prefix(GROUP_KEY_PREFIX).unwrap_or(&key).to_string();
        groups.insert(name, members);
    }

    Ok(groups)
}

/// Validates the submission and stores it, overwriting any group with the
/// same name.
#[tracing::instrument(name = "Creating or replacing a group", skip(store, emails))]
pub async fn create_or_replace_group(
    store: &dyn KeyValueStore,
    name: &str,
    emails: &str,
) -> Result<GroupMembers, CreateGroupError> {
    let name = GroupName::parse(name).map_err(CreateGroupError::ValidationError)?;
    let members = GroupMembers::parse(emails).map_err(CreateGroupError::ValidationError)?;

    let value = serde_json::to_string(members.as_ref())
        .context("Failed to serialize group members")?;
    store
        .set(&group_key(&name), &value)
        .await
        .context("Failed to store the group")?;

    tracing::info!(group = %name, members = ?members.as_ref(), "Created group");
    Ok(members)
}

/// Members of `name`, or `None` if no such group is stored.
#[tracing::instrument(name = "Fetching group members", skip(store))]
pub async fn group_members(
    store: &dyn KeyValueStore,
    name: &GroupName,
) -> Result<Option<Vec<String>>, anyhow::Error> {
    let key = group_key(name);
    let exists = store
        .exists(&key)
        .await
        .with_context(|| format!("Failed to check for {key}"))?;
    if !exists {
        return Ok(None);
    }

    // Gone between EXISTS and GET counts as missing.
    let Some(raw) = store
        .get(&key)
        .await
        .with_context(|| format!("Failed to read {key}"))?
    else {
        return Ok(None);
    };

    let members = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to deserialize members of {key}"))?;
    Ok(Some(members))
}
