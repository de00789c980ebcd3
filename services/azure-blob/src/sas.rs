//! Service shared access signatures for single blobs and containers.
//!
//! The signature is built by hand from the account key, no request to the
//! storage service is made.
//!
//! - [Create a service SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-service-sas)

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use azsas_core::hash::{base64_decode, base64_hmac_sha256};
use azsas_core::utils::redact_signature;
use azsas_core::{Error, Result};
use log::debug;
use percent_encoding::percent_decode_str;

use crate::constants::*;
use crate::StorageIdentity;

/// The resource a signature grants access to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// A single blob, `sr=b`.
    #[default]
    Blob,
    /// Every blob of the container, `sr=c`.
    Container,
}

impl ResourceType {
    /// The single letter code sent as `sr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Blob => "b",
            ResourceType::Container => "c",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "b" => Ok(ResourceType::Blob),
            "c" => Ok(ResourceType::Container),
            v => Err(Error::config_invalid(format!(
                "unsupported signed resource type: {v}"
            ))),
        }
    }
}

/// SignRequest describes the access a signed url grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRequest<'a> {
    /// Blob path inside the container, already prefixed.
    pub blob: &'a str,
    /// Resource the signature is scoped to.
    pub resource_type: ResourceType,
    /// Ordered permission letters, e.g. `r` or `rw`.
    pub permissions: &'a str,
    /// Expiry as `2024-01-01T00:00:00Z`. `None` means the url is not signed.
    pub expiry: Option<&'a str>,
    /// Client ip the url is restricted to, before normalization.
    pub signed_ip: Option<&'a str>,
}

impl<'a> SignRequest<'a> {
    /// Create a read-only blob request without expiry.
    pub fn new(blob: &'a str) -> Self {
        Self {
            blob,
            resource_type: ResourceType::Blob,
            permissions: DEFAULT_PERMISSIONS,
            expiry: None,
            signed_ip: None,
        }
    }

    /// Set the resource type.
    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    /// Set the permissions.
    pub fn with_permissions(mut self, permissions: &'a str) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the expiry.
    pub fn with_expiry(mut self, expiry: Option<&'a str>) -> Self {
        self.expiry = expiry;
        self
    }

    /// Set the client ip.
    pub fn with_signed_ip(mut self, signed_ip: Option<&'a str>) -> Self {
        self.signed_ip = signed_ip;
        self
    }
}

/// Drop ip restrictions that no public client could ever satisfy.
///
/// Loopback and private IPv4 ranges (`127.0.0.0/8`, `10.0.0.0/8`,
/// `172.16.0.0/12`, `192.168.0.0/16`) yield an empty string, as does `None`.
/// Any other value is returned unchanged.
pub fn normalize_ip(candidate: Option<&str>) -> String {
    let Some(ip) = candidate else {
        return String::new();
    };

    match ip.parse::<Ipv4Addr>() {
        Ok(v4) if v4.is_loopback() || v4.is_private() => String::new(),
        _ => ip.to_string(),
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// signedPermissions + "\n" +
/// "\n" +
/// signedExpiry + "\n" +
/// "/blob/" + account + "/" + container + "/" + blob + "\n" +
/// "\n" +
/// signedIP + "\n" +
/// "\n" +
/// "\n" +
/// signedVersion + "\n" +
/// "\n" +
/// "\n" +
/// "\n"
/// ```
///
/// Thirteen fields, the order is part of the signing protocol.
pub fn string_to_sign(identity: &StorageIdentity, req: &SignRequest<'_>) -> String {
    let resource = format!(
        "/blob/{}/{}/{}",
        identity.account_name, identity.container_name, req.blob
    );
    let signed_ip = normalize_ip(req.signed_ip);

    let fields: [&str; 13] = [
        req.permissions,
        "",
        req.expiry.unwrap_or_default(),
        &resource,
        "",
        &signed_ip,
        "",
        "",
        SAS_VERSION,
        "",
        "",
        "",
        "",
    ];

    fields.join("\n")
}

/// Compute the base64 encoded HMAC-SHA256 signature for the request.
///
/// Before hashing, every byte of the string to sign is widened from Latin-1
/// to UTF-8, then the result is url decoded (`+` is a space, `%XX` a byte).
/// Non-ASCII blob names are signed over those widened bytes.
pub fn compute_signature(identity: &StorageIdentity, req: &SignRequest<'_>) -> Result<String> {
    let key = identity.shared_key()?;
    let key = base64_decode(key)?;

    let s = string_to_sign(identity, req);
    debug!("string to sign: {:?}", &s);

    Ok(base64_hmac_sha256(&key, &url_decode(&latin1_to_utf8(&s))))
}

/// Build the url of `blob` in `container_name` under `domain_base_url`.
///
/// Without expiry the plain url is returned and no key is needed. Otherwise
/// the query carries `se`, `sr`, `sp`, `sip`, `sig` and `sv` in that order,
/// empty values of `se`, `sp` and `sip` are left out.
pub fn build_signed_url(
    identity: &StorageIdentity,
    domain_base_url: &str,
    container_name: &str,
    req: &SignRequest<'_>,
) -> Result<String> {
    let url = format!("{domain_base_url}/{container_name}/{}", req.blob);

    let Some(expiry) = req.expiry.filter(|v| !v.is_empty()) else {
        return Ok(url);
    };

    let signature = compute_signature(identity, req)?;
    let signed_ip = normalize_ip(req.signed_ip);

    let mut parts: Vec<String> = Vec::with_capacity(6);
    parts.push(format!("{SAS_EXPIRY}={}", urlencoded(expiry)));
    parts.push(format!("{SAS_RESOURCE}={}", req.resource_type));
    if !req.permissions.is_empty() {
        parts.push(format!("{SAS_PERMISSIONS}={}", req.permissions));
    }
    if !signed_ip.is_empty() {
        parts.push(format!("{SAS_IP}={}", urlencoded(&signed_ip)));
    }
    parts.push(format!("{SAS_SIGNATURE}={}", urlencoded(&signature)));
    parts.push(format!("{SAS_VERSION_PARAM}={SAS_VERSION}"));

    let signed = format!("{url}?{}", parts.join("&"));
    debug!("signed url: {}", redact_signature(&signed));

    Ok(signed)
}

fn urlencoded(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

fn latin1_to_utf8(s: &str) -> String {
    s.bytes().map(char::from).collect()
}

fn url_decode(s: &str) -> Vec<u8> {
    percent_decode_str(&s.replace('+', " ")).collect()
}
