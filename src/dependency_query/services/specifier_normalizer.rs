/// Characters that open the version part of a requirement: comparison
/// operators, a parenthesized constraint list, or a direct `@ url` reference.
const VERSION_CLAUSE_START: [char; 7] = ['<', '>', '=', '!', '~', '(', '@'];

/// One named step of the requirement-to-name pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationStage {
    /// Drop everything from the environment-marker separator `;`
    StripMarker,
    /// Drop a bracketed extras suffix such as `[security]`
    StripExtras,
    /// Drop the version constraint
    StripVersionClause,
    /// Trim surrounding whitespace
    Trim,
}

impl NormalizationStage {
    pub const PIPELINE: [NormalizationStage; 4] = [
        NormalizationStage::StripMarker,
        NormalizationStage::StripExtras,
        NormalizationStage::StripVersionClause,
        NormalizationStage::Trim,
    ];

    pub fn apply(self, input: &str) -> &str {
        match self {
            NormalizationStage::StripMarker => Self::truncate_at(input, |c| c == ';'),
            NormalizationStage::StripExtras => Self::truncate_at(input, |c| c == '['),
            NormalizationStage::StripVersionClause => {
                Self::truncate_at(input, |c| VERSION_CLAUSE_START.contains(&c))
            }
            NormalizationStage::Trim => input.trim(),
        }
    }

    fn truncate_at(input: &str, stop: impl Fn(char) -> bool) -> &str {
        match input.find(stop) {
            Some(idx) => &input[..idx],
            None => input,
        }
    }
}

/// SpecifierNormalizer service turning raw `requires_dist` entries into names
///
/// `"requests (>=2.0,<3.0); extra == 'dev'"` becomes `"requests"`.
pub struct SpecifierNormalizer;

impl SpecifierNormalizer {
    /// Runs the full pipeline; `None` when nothing of a name is left
    pub fn normalize(specifier: &str) -> Option<String> {
        let name = NormalizationStage::PIPELINE
            .iter()
            .fold(specifier, |current, stage| stage.apply(current));

        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Normalizes every specifier, dropping the ones that yield no name
    pub fn normalize_all<S: AsRef<str>>(specifiers: &[S]) -> Vec<String> {
        specifiers
            .iter()
            .filter_map(|spec| Self::normalize(spec.as_ref()))
            .collect()
    }
}
