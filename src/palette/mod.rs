//! Building palette: brightness levels paired with cell templates.

mod extract;
mod template;

pub use extract::extract_palette;
pub use template::{CellTemplate, X_FIELD, Y_FIELD};

use gray_dither::Levels;

use crate::error::BlueprintError;

/// Ordered brightness levels, each with the buildings that produce it.
///
/// Levels are strictly ascending and fixed after construction. Lookups by
/// level use exact equality, which holds for every value a quantizer
/// produced from [`levels()`](Palette::levels).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    levels: Levels,
    templates: Vec<CellTemplate>,
}

impl Palette {
    /// Create a palette from `(level, template)` pairs in ascending order.
    pub fn new(entries: Vec<(f64, CellTemplate)>) -> Result<Self, BlueprintError> {
        let (levels, templates): (Vec<f64>, Vec<CellTemplate>) = entries.into_iter().unzip();
        let levels = Levels::new(&levels)?;
        Ok(Self { levels, templates })
    }

    /// Create a palette from a validated level set and one template per level.
    pub fn from_parts(levels: Levels, templates: Vec<CellTemplate>) -> Result<Self, BlueprintError> {
        if levels.len() != templates.len() {
            return Err(BlueprintError::TemplateCountMismatch {
                levels: levels.len(),
                templates: templates.len(),
            });
        }
        Ok(Self { levels, templates })
    }

    /// Derive a palette from a reference blueprint.
    ///
    /// See [`extract_palette`].
    pub fn extract(reference: &str, brightness_levels: &[u8]) -> Result<Self, BlueprintError> {
        extract_palette(reference, brightness_levels)
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template for a level, matched exactly.
    pub fn template_for(&self, level: f64) -> Option<&CellTemplate> {
        self.levels.position(level).map(|i| &self.templates[i])
    }

    /// `(level, template)` pairs, darkest first.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &CellTemplate)> {
        self.levels.iter().zip(self.templates.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gray_dither::LevelsError;

    #[test]
    fn test_new_validates_levels() {
        let result = Palette::new(vec![(0.5, CellTemplate::Empty), (0.2, CellTemplate::Empty)]);
        assert!(matches!(
            result,
            Err(BlueprintError::InvalidLevels(LevelsError::NotAscending { index: 1 }))
        ));
    }

    #[test]
    fn test_from_parts_checks_lengths() {
        let levels = Levels::new(&[0.0, 1.0]).unwrap();
        let result = Palette::from_parts(levels, vec![CellTemplate::Empty]);
        assert!(matches!(
            result,
            Err(BlueprintError::TemplateCountMismatch {
                levels: 2,
                templates: 1
            })
        ));
    }

    #[test]
    fn test_template_lookup_is_exact() {
        let palette = Palette::new(vec![
            (0.0, CellTemplate::Empty),
            (1.0, CellTemplate::Buildings(vec![])),
        ])
        .unwrap();

        assert_eq!(palette.template_for(0.0), Some(&CellTemplate::Empty));
        assert!(palette.template_for(1.0).is_some());
        assert!(palette.template_for(0.5).is_none());
        assert_eq!(palette.len(), 2);
    }
}
