use std::collections::BTreeMap;

use crate::{
    color::{self, TRANSPARENT},
    error::{IconError, IconResult},
};

/// One rendered icon size variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DimensionPreset {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    /// Horizontal gap in pixels between adjacent badge glyphs.
    pub padding: u32,
}

/// Descriptor name mapped to its glyph code variants.
pub type Suite = BTreeMap<String, Vec<String>>;

/// Immutable configuration for one generation run: which badges exist and
/// which sizes and palettes to render them in.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub suites: BTreeMap<String, Suite>,
    pub dimensions: Vec<DimensionPreset>,
    /// `"transparent"` or 6-hex-digit colors.
    pub backgrounds: Vec<String>,
    /// Two-hex-digit channel steps; foregrounds are every r+g+b combination.
    pub foreground_steps: Vec<String>,
}

impl Catalog {
    /// The stock CC badge catalog: license suite `l`, public-domain suite
    /// `p`, three size presets, four backgrounds, and a 7-step channel
    /// palette (343 foreground colors).
    pub fn builtin() -> Self {
        let mut suites = BTreeMap::new();
        suites.insert(
            "l".to_string(),
            suite(&[
                ("by", &["b"]),
                ("by-nc", &["bn", "be", "by"]),
                ("by-nd", &["bd"]),
                ("by-sa", &["ba"]),
                ("by-nc-nd", &["bnd", "bed", "byd"]),
                ("by-nc-sa", &["bna", "bea", "bya"]),
            ]),
        );
        suites.insert(
            "p".to_string(),
            suite(&[("cc-zero", &["0"]), ("public-domain-mark", &["p"])]),
        );

        Self {
            suites,
            dimensions: vec![
                DimensionPreset {
                    width: 88,
                    height: 31,
                    font_size: 31,
                    padding: 1,
                },
                DimensionPreset {
                    width: 80,
                    height: 15,
                    font_size: 15,
                    padding: 4,
                },
                DimensionPreset {
                    width: 76,
                    height: 22,
                    font_size: 22,
                    padding: 1,
                },
            ],
            backgrounds: vec![
                TRANSPARENT.to_string(),
                "000000".to_string(),
                // Bootstrap well grey
                "eeeeee".to_string(),
                "ffffff".to_string(),
            ],
            foreground_steps: ["00", "11", "22", "33", "66", "99", "ff"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Full foreground palette: the cross product of the channel steps.
    pub fn foregrounds(&self) -> Vec<String> {
        let steps = &self.foreground_steps;
        let mut out = Vec::with_capacity(steps.len().pow(3));
        for r in steps {
            for g in steps {
                for b in steps {
                    out.push(format!("{r}{g}{b}"));
                }
            }
        }
        out
    }

    pub fn validate(&self) -> IconResult<()> {
        if self.suites.is_empty() {
            return Err(IconError::validation("catalog has no suites"));
        }
        for (name, suite) in &self.suites {
            if suite.is_empty() {
                return Err(IconError::validation(format!(
                    "suite '{name}' has no descriptors"
                )));
            }
            for (descriptor, variants) in suite {
                if variants.is_empty() {
                    return Err(IconError::validation(format!(
                        "descriptor '{name}/{descriptor}' has no glyph variants"
                    )));
                }
                if variants.iter().any(|v| v.is_empty()) {
                    return Err(IconError::validation(format!(
                        "descriptor '{name}/{descriptor}' has an empty glyph variant"
                    )));
                }
            }
        }

        if self.dimensions.is_empty() {
            return Err(IconError::validation("catalog has no dimension presets"));
        }
        for d in &self.dimensions {
            if d.width == 0 || d.height == 0 || d.font_size == 0 {
                return Err(IconError::validation(format!(
                    "dimension preset {}x{} must have width, height and font size > 0",
                    d.width, d.height
                )));
            }
        }

        if self.backgrounds.is_empty() {
            return Err(IconError::validation("catalog has no backgrounds"));
        }
        for bg in &self.backgrounds {
            color::parse_color(bg)?;
        }

        if self.foreground_steps.is_empty() {
            return Err(IconError::validation("catalog has no foreground steps"));
        }
        for step in &self.foreground_steps {
            if step.len() != 2 {
                return Err(IconError::validation(format!(
                    "foreground step '{step}' must be exactly two hex digits"
                )));
            }
            color::hex_channel(step)?;
        }

        Ok(())
    }
}

fn suite(entries: &[(&str, &[&str])]) -> Suite {
    entries
        .iter()
        .map(|(descriptor, variants)| {
            (
                descriptor.to_string(),
                variants.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_foreground_palette_is_full_cross_product() {
        let catalog = Catalog::builtin();
        let foregrounds = catalog.foregrounds();
        assert_eq!(foregrounds.len(), 343);
        assert!(foregrounds.contains(&"000000".to_string()));
        assert!(foregrounds.contains(&"ff6600".to_string()));
        assert!(foregrounds.contains(&"ffffff".to_string()));
    }

    #[test]
    fn malformed_background_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.backgrounds.push("not-a-color".to_string());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.dimensions[0].height = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn overlong_foreground_step_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.foreground_steps.push("abc".to_string());
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn catalog_loads_from_json() {
        let json = r#"{
            "suites": { "l": { "by": ["b"] } },
            "dimensions": [{ "width": 88, "height": 31, "font_size": 31, "padding": 1 }],
            "backgrounds": ["transparent", "000000"],
            "foreground_steps": ["00", "ff"]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        catalog.validate().unwrap();
        assert_eq!(catalog.foregrounds().len(), 8);
    }
}
