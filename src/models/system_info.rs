use serde::Deserialize;

/// Metadata about the bike-share operator serving a location.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SystemInformation {
    pub system_id: String,
    pub name: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl SystemInformation {
    /// Email and phone joined for display, if either is present.
    pub fn contact(&self) -> Option<String> {
        match (&self.email, &self.phone_number) {
            (Some(email), Some(phone)) => Some(format!("{email} / {phone}")),
            (Some(email), None) => Some(email.clone()),
            (None, Some(phone)) => Some(phone.clone()),
            (None, None) => None,
        }
    }
}
