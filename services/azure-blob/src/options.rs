use std::collections::BTreeMap;
use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

/// A value of a blob meta option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Plain header value like `max-age=3600`.
    Text(String),
    /// User defined metadata, sent as `x-ms-meta-*`.
    Map(BTreeMap<String, String>),
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_string())
    }
}

impl From<BTreeMap<String, String>> for MetaValue {
    fn from(v: BTreeMap<String, String>) -> Self {
        MetaValue::Map(v)
    }
}

/// Properties applied to a blob when it is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobOptions {
    /// `Cache-Control` of the blob.
    pub cache_control: Option<String>,
    /// `Content-Type` of the blob.
    pub content_type: Option<String>,
    /// User defined metadata.
    pub metadata: BTreeMap<String, String>,
    /// `Content-Language` of the blob.
    pub content_language: Option<String>,
    /// `Content-Encoding` of the blob.
    pub content_encoding: Option<String>,
}

type Setter = fn(&mut BlobOptions, &MetaValue) -> bool;

/// Recognized meta options and how each one lands on [`BlobOptions`].
///
/// A setter returns `false` when the value has the wrong shape.
pub const META_OPTIONS: &[(&str, Setter)] = &[
    ("CacheControl", set_cache_control),
    ("ContentType", set_content_type),
    ("Metadata", set_metadata),
    ("ContentLanguage", set_content_language),
    ("ContentEncoding", set_content_encoding),
];

fn set_cache_control(o: &mut BlobOptions, v: &MetaValue) -> bool {
    set_text(&mut o.cache_control, v)
}

fn set_content_type(o: &mut BlobOptions, v: &MetaValue) -> bool {
    set_text(&mut o.content_type, v)
}

fn set_content_language(o: &mut BlobOptions, v: &MetaValue) -> bool {
    set_text(&mut o.content_language, v)
}

fn set_content_encoding(o: &mut BlobOptions, v: &MetaValue) -> bool {
    set_text(&mut o.content_encoding, v)
}

fn set_metadata(o: &mut BlobOptions, v: &MetaValue) -> bool {
    match v {
        MetaValue::Map(m) => {
            o.metadata = m.clone();
            true
        }
        MetaValue::Text(_) => false,
    }
}

fn set_text(field: &mut Option<String>, v: &MetaValue) -> bool {
    match v {
        MetaValue::Text(s) => {
            *field = Some(s.clone());
            true
        }
        MetaValue::Map(_) => false,
    }
}

impl BlobOptions {
    /// Resolve the options of a single upload.
    ///
    /// For every option in [`META_OPTIONS`] the value given with the call is
    /// applied first, the adapter wide value second. A detected `mimetype`
    /// sets the content type last.
    pub fn resolve(
        call_options: &HashMap<String, MetaValue>,
        adapter_options: &HashMap<String, MetaValue>,
        mimetype: Option<&str>,
    ) -> Self {
        let mut options = BlobOptions::default();

        for (name, setter) in META_OPTIONS {
            for source in [call_options, adapter_options] {
                if let Some(value) = source.get(*name) {
                    if !setter(&mut options, value) {
                        warn!("ignored blob option {name} with unexpected value: {value:?}");
                    }
                }
            }
        }

        if let Some(mimetype) = mimetype.filter(|v| !v.is_empty()) {
            options.content_type = Some(mimetype.to_string());
        }

        options
    }
}
