use crate::core::config::REGISTRY_HOST;
use crate::core::extensions::ExtensionRecord;

/// Download URL of a record's package on Open VSX. Segments are inserted
/// as-is; the registry uses the same raw names.
pub fn vsix_url(record: &ExtensionRecord) -> String {
    format!(
        "https://{REGISTRY_HOST}/api/{}/{}/{}/file/{}",
        record.publisher,
        record.name,
        record.version,
        package_file_name(record)
    )
}

/// `<publisher>.<name>-<version>.vsix`
pub fn package_file_name(record: &ExtensionRecord) -> String {
    format!("{}.{}-{}.vsix", record.publisher, record.name, record.version)
}
