use crate::shared::Result;

/// Maximum length for package names
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a package name supplied by the caller
///
/// Names are case-sensitive and are matched verbatim against graph nodes,
/// so no normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Dependency lists are whitespace-separated, so such a name can never
        // match a node. A ':' after the first one on a line stays part of a
        // dependency name and is allowed.
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Package name '{}' contains whitespace or control characters",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a package version string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if !version.chars().any(|c| c.is_ascii_digit()) {
            anyhow::bail!(
                "Package version '{}' must contain at least one digit (for example 1.0.0)",
                version
            );
        }

        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '*' | '!' | '_'))
        {
            anyhow::bail!(
                "Package version contains invalid characters. Only alphanumeric, dots, hyphens, underscores, plus, '!' and asterisks are allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
