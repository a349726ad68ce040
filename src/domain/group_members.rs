pub const MIN_MEMBERS: usize = 4;
pub const MAX_MEMBERS: usize = 5;

/// Ordered member addresses of a group, between [`MIN_MEMBERS`] and
/// [`MAX_MEMBERS`] inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMembers(Vec<String>);

impl GroupMembers {
    /// Parses a comma-separated list. Pieces are trimmed and empty pieces
    /// dropped before the size check. Address syntax is left to the relay.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let emails: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        if !(MIN_MEMBERS..=MAX_MEMBERS).contains(&emails.len()) {
            return Err(format!(
                "Group must have {MIN_MEMBERS}-{MAX_MEMBERS} members, got {}.",
                emails.len()
            ));
        }

        Ok(Self(emails))
    }
}

impl AsRef<[String]> for GroupMembers {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
