//! Composed mask sections.

use std::fmt;

/// Which sign category a mask section applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Positive numbers (or all numbers if only one section)
    Positive,
    /// Negative numbers
    Negative,
    /// Zero
    Zero,
}

/// A composed accounting mask.
///
/// Masks have 1 to 3 sections:
/// 1. Positive numbers (or all numbers if only one section)
/// 2. Negative numbers
/// 3. Zero
///
/// A zero section is only present alongside a negative section, and unused
/// trailing sections are omitted rather than written empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMask {
    positive: String,
    negative: Option<String>,
    zero: Option<String>,
}

impl ComposedMask {
    pub(crate) fn new(positive: String, negative: Option<String>, zero: Option<String>) -> Self {
        // A zero section without a negative one would be read as the negative section.
        let zero = if negative.is_some() { zero } else { None };
        ComposedMask {
            positive,
            negative,
            zero,
        }
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    pub fn negative(&self) -> Option<&str> {
        self.negative.as_deref()
    }

    pub fn zero(&self) -> Option<&str> {
        self.zero.as_deref()
    }

    /// Iterate over the present sections in mask order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &str)> {
        std::iter::once((SectionKind::Positive, self.positive.as_str()))
            .chain(self.negative().map(|s| (SectionKind::Negative, s)))
            .chain(self.zero().map(|s| (SectionKind::Zero, s)))
    }

    /// Returns the number of sections (1 to 3).
    pub fn section_count(&self) -> usize {
        self.sections().count()
    }
}

impl fmt::Display for ComposedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, section)) in self.sections().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            f.write_str(section)?;
        }
        Ok(())
    }
}

impl From<ComposedMask> for String {
    fn from(mask: ComposedMask) -> Self {
        mask.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let mask = ComposedMask::new("#,##0".to_string(), None, None);
        assert_eq!(mask.section_count(), 1);
        assert_eq!(mask.to_string(), "#,##0");
    }

    #[test]
    fn test_sections_joined_in_order() {
        let mask = ComposedMask::new(
            "+#,##0".to_string(),
            Some("-#,##0".to_string()),
            Some("\"-\"??".to_string()),
        );
        let kinds: Vec<_> = mask.sections().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Positive, SectionKind::Negative, SectionKind::Zero]
        );
        assert_eq!(mask.to_string(), "+#,##0;-#,##0;\"-\"??");
    }

    #[test]
    fn test_zero_requires_negative() {
        let mask = ComposedMask::new("#,##0".to_string(), None, Some("\"-\"??".to_string()));
        assert_eq!(mask.zero(), None);
        assert_eq!(mask.section_count(), 1);
    }
}
