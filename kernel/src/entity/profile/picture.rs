use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Largest accepted decoded image payload.
pub const MAX_PICTURE_BYTES: usize = 5 * 1024 * 1024;

/// An image stored inline as a `data:image/...` URL.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(try_from = "String")]
pub struct ProfilePicture(String);

impl TryFrom<String> for ProfilePicture {
    type Error = Report<KernelError>;
    fn try_from(data_url: String) -> Result<Self, Self::Error> {
        Self::parse(data_url)
    }
}

impl ProfilePicture {
    pub fn parse(data_url: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let data_url = data_url.into();
        let Some((header, payload)) = data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
        else {
            return Err(Report::new(KernelError::InvalidPicture)
                .attach_printable("picture must be a data URL"));
        };
        if !header.starts_with("image/") {
            return Err(Report::new(KernelError::InvalidPicture)
                .attach_printable(format!("unsupported media type `{header}`")));
        }
        let decoded_len = if header.ends_with(";base64") {
            payload.trim_end_matches('=').len() * 3 / 4
        } else {
            payload.len()
        };
        if decoded_len > MAX_PICTURE_BYTES {
            return Err(Report::new(KernelError::InvalidPicture).attach_printable(format!(
                "picture is {decoded_len} bytes, limit is {MAX_PICTURE_BYTES}"
            )));
        }
        Ok(Self(data_url))
    }
}
