use crate::identity::errors::IdentityError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

// * Inserts a generated value, rejecting anything that is not a legal header value.
// * `name` must be lowercase.
pub(crate) fn insert_header(
    headers: &mut HeaderMap,
    name: &'static str,
    value: &str,
) -> Result<(), IdentityError> {
    let value = HeaderValue::from_str(value).map_err(|_| IdentityError::InvalidHeader { name })?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}
