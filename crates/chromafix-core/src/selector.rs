//! Per-object material variant selection.

use crate::context::ModeReader;
use crate::error::SetupError;
use crate::mode::CvdMode;
use crate::sink::RenderTarget;

/// Materials authored for one object, one per mode.
///
/// Unset variants resolve to `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialVariantSet<M> {
    pub normal: M,
    pub protan: Option<M>,
    pub deutan: Option<M>,
    pub tritan: Option<M>,
}

impl<M> MaterialVariantSet<M> {
    pub fn new(normal: M) -> Self {
        Self {
            normal,
            protan: None,
            deutan: None,
            tritan: None,
        }
    }

    /// Material for `mode`, falling back to `normal`.
    pub fn variant_for(&self, mode: CvdMode) -> &M {
        let specific = match mode {
            CvdMode::Normal => None,
            CvdMode::Protanopia => self.protan.as_ref(),
            CvdMode::Deuteranopia => self.deutan.as_ref(),
            CvdMode::Tritanopia => self.tritan.as_ref(),
        };
        specific.unwrap_or(&self.normal)
    }
}

/// Variants as authored, before `normal` is resolved against the target.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantConfig<M> {
    /// Defaults to the target's pre-existing material when unset.
    pub normal: Option<M>,
    pub protan: Option<M>,
    pub deutan: Option<M>,
    pub tritan: Option<M>,
}

impl<M> Default for VariantConfig<M> {
    fn default() -> Self {
        Self {
            normal: None,
            protan: None,
            deutan: None,
            tritan: None,
        }
    }
}

impl<M> VariantConfig<M> {
    pub fn with_normal(mut self, material: M) -> Self {
        self.normal = Some(material);
        self
    }

    /// Set the variant used for `mode`. `Normal` sets the base material.
    pub fn with_variant(mut self, mode: CvdMode, material: M) -> Self {
        let slot = match mode {
            CvdMode::Normal => &mut self.normal,
            CvdMode::Protanopia => &mut self.protan,
            CvdMode::Deuteranopia => &mut self.deutan,
            CvdMode::Tritanopia => &mut self.tritan,
        };
        *slot = Some(material);
        self
    }

    fn resolve(self, fallback: Option<M>) -> Option<MaterialVariantSet<M>> {
        let normal = self.normal.or(fallback)?;
        Some(MaterialVariantSet {
            normal,
            protan: self.protan,
            deutan: self.deutan,
            tritan: self.tritan,
        })
    }
}

/// Picks the variant for the shared mode and writes it to a render target.
///
/// Binding is validated once. An unbound selector never touches a target.
#[derive(Debug, Clone)]
pub struct MaterialSelector<M> {
    name: String,
    variants: Option<MaterialVariantSet<M>>,
    reader: ModeReader,
}

impl<M: Clone + PartialEq> MaterialSelector<M> {
    /// Resolve `config` against `target` and show the normal material.
    pub fn bind<T>(
        name: impl Into<String>,
        config: VariantConfig<M>,
        target: Option<&mut T>,
        reader: ModeReader,
    ) -> Self
    where
        T: RenderTarget<M> + ?Sized,
    {
        let name = name.into();
        let variants = match target {
            None => {
                tracing::error!(
                    "{}",
                    SetupError::MissingRenderTarget {
                        object: name.clone()
                    }
                );
                None
            }
            Some(target) => match config.resolve(target.active_material().cloned()) {
                Some(variants) => {
                    if target.active_material() != Some(&variants.normal) {
                        target.set_active_material(variants.normal.clone());
                    }
                    Some(variants)
                }
                None => {
                    tracing::error!(
                        "{}",
                        SetupError::MissingNormalMaterial {
                            object: name.clone()
                        }
                    );
                    None
                }
            },
        };

        Self {
            name,
            variants,
            reader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.variants.is_some()
    }

    pub fn variants(&self) -> Option<&MaterialVariantSet<M>> {
        self.variants.as_ref()
    }

    /// Mode this selector currently follows.
    pub fn current_mode(&self) -> CvdMode {
        self.reader.mode()
    }

    /// Material that [`MaterialSelector::apply_fix`] would assign.
    pub fn select(&self, enabled: bool) -> Option<&M> {
        let variants = self.variants.as_ref()?;
        if enabled {
            Some(variants.variant_for(self.reader.mode()))
        } else {
            Some(&variants.normal)
        }
    }

    /// Assign the selected material to `target`.
    ///
    /// Returns `true` if the target's material changed.
    pub fn apply_fix<T>(&self, enabled: bool, target: &mut T) -> bool
    where
        T: RenderTarget<M> + ?Sized,
    {
        let Some(chosen) = self.select(enabled) else {
            return false;
        };
        if target.active_material() == Some(chosen) {
            return false;
        }
        target.set_active_material(chosen.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ModeContext;
    use crate::sink::MaterialSlot;

    #[test]
    fn test_unset_variants_fall_back_to_normal() {
        let set = MaterialVariantSet::new("normal");
        for mode in CvdMode::ALL {
            assert_eq!(*set.variant_for(mode), "normal");
        }
    }

    #[test]
    fn test_set_variants_are_selected() {
        let set = MaterialVariantSet {
            normal: "n",
            protan: Some("p"),
            deutan: None,
            tritan: Some("t"),
        };
        assert_eq!(*set.variant_for(CvdMode::Protanopia), "p");
        assert_eq!(*set.variant_for(CvdMode::Deuteranopia), "n");
        assert_eq!(*set.variant_for(CvdMode::Tritanopia), "t");
        assert_eq!(*set.variant_for(CvdMode::Normal), "n");
    }

    #[test]
    fn test_bind_defaults_normal_to_existing_material() {
        let (_, _, reader) = ModeContext::default().split();
        let mut slot = MaterialSlot::new(Some("authored"));
        let config = VariantConfig::default().with_variant(CvdMode::Protanopia, "p");
        let selector = MaterialSelector::bind("poster", config, Some(&mut slot), reader);

        assert!(selector.is_bound());
        assert_eq!(selector.variants().map(|v| v.normal), Some("authored"));
        assert_eq!(slot.material, Some("authored"));
        assert_eq!(slot.assignments, 0);
    }

    #[test]
    fn test_bind_writes_normal_only_when_different() {
        let (_, _, reader) = ModeContext::default().split();
        let mut same = MaterialSlot::new(Some("n"));
        let mut other = MaterialSlot::new(Some("old"));
        let config = VariantConfig::default().with_normal("n");

        MaterialSelector::bind("same", config.clone(), Some(&mut same), reader.clone());
        MaterialSelector::bind("other", config, Some(&mut other), reader);
        assert_eq!(same.assignments, 0);
        assert_eq!(other.material, Some("n"));
        assert_eq!(other.assignments, 1);
    }

    #[test]
    fn test_bind_without_target_is_permanent_noop() {
        let (_, _, reader) = ModeContext::default().split();
        let config = VariantConfig::default().with_normal("n");
        let selector = MaterialSelector::bind("orphan", config, None::<&mut MaterialSlot<&str>>, reader);
        assert!(!selector.is_bound());

        let mut later = MaterialSlot::new(Some("other"));
        assert!(!selector.apply_fix(true, &mut later));
        assert_eq!(later.material, Some("other"));
        assert_eq!(later.assignments, 0);
    }

    #[test]
    fn test_bind_without_any_normal_is_unbound() {
        let (_, _, reader) = ModeContext::default().split();
        let mut slot: MaterialSlot<&str> = MaterialSlot::new(None);
        let config = VariantConfig::default().with_variant(CvdMode::Tritanopia, "t");
        let selector = MaterialSelector::bind("blank", config, Some(&mut slot), reader);
        assert!(!selector.is_bound());
        assert!(!selector.apply_fix(true, &mut slot));
        assert_eq!(slot.material, None);
    }

    #[test]
    fn test_disabled_fix_always_selects_normal() {
        let (modes, _, reader) = ModeContext::default().split();
        let mut slot = MaterialSlot::new(None);
        let config = VariantConfig::default()
            .with_normal("n")
            .with_variant(CvdMode::Protanopia, "p")
            .with_variant(CvdMode::Deuteranopia, "d")
            .with_variant(CvdMode::Tritanopia, "t");
        let selector = MaterialSelector::bind("poster", config, Some(&mut slot), reader);

        for mode in CvdMode::ALL {
            modes.set(mode);
            selector.apply_fix(false, &mut slot);
            assert_eq!(slot.material, Some("n"), "mode {mode}");
        }
    }

    #[test]
    fn test_apply_fix_skips_redundant_writes() {
        let (modes, _, reader) = ModeContext::default().split();
        let mut slot = MaterialSlot::new(None);
        let config = VariantConfig::default()
            .with_normal("n")
            .with_variant(CvdMode::Tritanopia, "t");
        let selector = MaterialSelector::bind("poster", config, Some(&mut slot), reader);
        let after_bind = slot.assignments;

        modes.set(CvdMode::Tritanopia);
        assert!(selector.apply_fix(true, &mut slot));
        assert!(!selector.apply_fix(true, &mut slot));
        assert_eq!(slot.assignments, after_bind + 1);
    }
}
