use crate::{KernelError, KernelErrorExt};
use serde::de::DeserializeOwned;

/// Parses an embedded JSON configuration block.
///
/// The page may carry a `<script type="application/json" id="folio-config">` element;
/// its text is handed to this function. Every field of the target type is expected to be
/// defaulted, so a missing or blank block yields `T::default()`.
///
/// # Errors
/// Returns [`KernelError::Config`] if the text is not valid JSON for `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::parse_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct Knobs {
///     tick_ms: u32,
/// }
///
/// let knobs: Knobs = parse_config(None).unwrap();
/// assert_eq!(knobs.tick_ms, 0);
/// ```
pub fn parse_config<T>(raw: Option<&str>) -> Result<T, KernelError>
where
    T: DeserializeOwned + Default,
{
    match raw.map(str::trim).filter(|text| !text.is_empty()) {
        None => Ok(T::default()),
        Some(text) => serde_json::from_str(text).context("Failed to deserialize page config"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::config::PageConfig;
    use folio_domain::features::ControllerSet;

    #[test]
    fn test_missing_or_blank_block_uses_defaults() {
        let cfg: PageConfig = parse_config(None).unwrap();
        assert_eq!(cfg.controllers, ControllerSet::ALL);

        let cfg: PageConfig = parse_config(Some("  \n ")).unwrap();
        assert_eq!(cfg.contact.toast_duration_ms, 3000);
    }

    #[test]
    fn test_malformed_block_reports_context() {
        let err = parse_config::<PageConfig>(Some("{ controllers: ")).unwrap_err();
        assert!(matches!(err, KernelError::Config { context: Some(_), .. }));
        assert!(err.to_string().starts_with("Config error (Failed to deserialize page config)"));
    }
}
