// Storage service version used to sign and to be sent as `sv`.
pub const SAS_VERSION: &str = "2015-04-05";

// Query parameters of a service shared access signature.
pub const SAS_EXPIRY: &str = "se";
pub const SAS_RESOURCE: &str = "sr";
pub const SAS_PERMISSIONS: &str = "sp";
pub const SAS_IP: &str = "sip";
pub const SAS_SIGNATURE: &str = "sig";
pub const SAS_VERSION_PARAM: &str = "sv";

// Defaults of signed urls.
pub const DEFAULT_PERMISSIONS: &str = "r";
pub const REMOTE_COPY_EXPIRY_HOURS: i64 = 1;
pub const TEMPORARY_URL_SIGNED_IP: &str = "127.0.0.1";

// Env values used to build the config.
pub const AZBLOB_ACCOUNT_NAME: &str = "AZBLOB_ACCOUNT_NAME";
pub const AZBLOB_ACCOUNT_KEY: &str = "AZBLOB_ACCOUNT_KEY";
pub const AZBLOB_ENDPOINT: &str = "AZBLOB_ENDPOINT";
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const AZURE_STORAGE_CONTAINER: &str = "AZURE_STORAGE_CONTAINER";
pub const AZURE_STORAGE_DOMAIN: &str = "AZURE_STORAGE_DOMAIN";
pub const AZURE_STORAGE_PREFIX: &str = "AZURE_STORAGE_PREFIX";
