use std::fmt;

pub const DEFAULT_HOST: &str = "bitdash.app";
pub const ID_LENGTH: usize = 8;

/// Template for the mock links produced by a wizard's generation step:
/// `https://<subdomain>.<host>/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    subdomain: String,
    host: String,
}

impl LinkTemplate {
    pub fn new(subdomain: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            host: host.into(),
        }
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.{}/", self.subdomain, self.host)
    }

    pub fn render(&self, id: &str) -> String {
        format!("{}{}", self.base_url(), id)
    }

    /// Returns true when `link` was produced by this template with a
    /// well-formed id.
    pub fn matches(&self, link: &str) -> bool {
        link.strip_prefix(&self.base_url())
            .is_some_and(is_valid_id)
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<id>", self.base_url())
    }
}

/// Ids are exactly [`ID_LENGTH`] characters of `[a-z0-9]`.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}
