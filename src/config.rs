use serde::Deserialize;

use crate::diagnostics::GenError;

pub const DEFAULT_NUM_SUPPORTED_MEMBERS: usize = 40;
pub const DEFAULT_FILE_NAME: &str = "reflexpr_test_types.inl";

/// Where the cell behind a `SharedAlias` member lives in the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageScope {
    /// One namespace-scope cell per position, shared by every aggregate.
    #[default]
    Global,
    /// A `static inline` cell inside each aggregate, shared by instances of that type.
    PerAggregate,
}

/// Generator settings. The CLI always runs with `GeneratorConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Upper bound `N`: fixtures are generated for sizes `1..N`.
    pub num_supported_members: usize,
    pub file_name: String,
    pub type_list_alias: String,
    pub harness_template: String,
    pub storage_scope: StorageScope,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_supported_members: DEFAULT_NUM_SUPPORTED_MEMBERS,
            file_name: DEFAULT_FILE_NAME.to_string(),
            type_list_alias: "types".to_string(),
            harness_template: "testing::Types".to_string(),
            storage_scope: StorageScope::Global,
        }
    }
}

impl GeneratorConfig {
    pub fn with_members(num_supported_members: usize) -> Self {
        Self { num_supported_members, ..Self::default() }
    }

    /// Parse a TOML table of settings; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GenError> {
        let config: GeneratorConfig = toml::from_str(source)
            .map_err(|e| GenError::config(format!("invalid generator config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.num_supported_members == 0 {
            return Err(GenError::config("num_supported_members must be at least 1"));
        }
        if self.file_name.is_empty() {
            return Err(GenError::config("file_name must not be empty"));
        }
        if self.file_name.contains(['/', '\\']) || self.file_name == "." || self.file_name == ".." {
            return Err(GenError::config(format!(
                "file_name '{}' must be a bare file name", self.file_name
            )));
        }
        if !is_cpp_identifier(&self.type_list_alias) {
            return Err(GenError::config(format!(
                "type_list_alias '{}' is not a valid identifier", self.type_list_alias
            )));
        }
        if !is_qualified_name(&self.harness_template) {
            return Err(GenError::config(format!(
                "harness_template '{}' is not a valid qualified name", self.harness_template
            )));
        }
        Ok(())
    }
}

fn is_cpp_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `a::b::c`, optionally rooted with a leading `::`.
fn is_qualified_name(s: &str) -> bool {
    let s = s.strip_prefix("::").unwrap_or(s);
    !s.is_empty() && s.split("::").all(is_cpp_identifier)
}
