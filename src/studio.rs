//! Editing session over a set of generated designs.
//!
//! The studio owns the dimensions the designs were generated for, the designs themselves, and
//! what the user currently has selected, is editing, or is rendering. Every change to a design
//! goes through [`apply_edit`], so a [`Studio`] never holds a design that the engine didn't
//! produce or sanitize.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::generator::{Generator, ImageRef};
use crate::layout::{apply_edit, sanitize_designs, Design, Dimensions, Edit, Options};

/// Designs together with the dimensions they were generated for, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub dimensions: Dimensions,
    pub designs: Vec<Design>,
}

impl SessionFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("error reading {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("error parsing {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        fs::write(path, contents).with_context(|| format!("error writing {}", path.display()))
    }
}

/// Progress of the photorealistic render.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Ready(ImageRef),
    Failed,
}

#[derive(Debug, Default)]
pub struct Studio {
    options: Options,
    dimensions: Option<Dimensions>,
    designs: Vec<Design>,
    selected: Option<String>,
    editing: Option<String>,
    render: RenderState,
}

impl Studio {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Opens a previously saved session, selecting its first design.
    pub fn from_session(session: SessionFile, options: Options) -> Self {
        let selected = session.designs.first().map(|d| d.id.clone());
        Self {
            options,
            dimensions: Some(session.dimensions),
            designs: session.designs,
            selected,
            ..Self::default()
        }
    }

    pub fn to_session(&self) -> Option<SessionFile> {
        Some(SessionFile {
            dimensions: self.dimensions?,
            designs: self.designs.clone(),
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    pub fn designs(&self) -> &[Design] {
        &self.designs
    }

    pub fn design(&self, id: &str) -> Option<&Design> {
        self.designs.iter().find(|d| d.id == id)
    }

    pub fn selected(&self) -> Option<&Design> {
        self.design(self.selected.as_deref()?)
    }

    pub fn editing(&self) -> Option<&Design> {
        self.design(self.editing.as_deref()?)
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render
    }

    /// Replaces the designs with fresh proposals for `dims`.
    ///
    /// On failure the studio keeps everything it had before.
    pub fn generate_layouts(
        &mut self,
        generator: &mut dyn Generator,
        dims: Dimensions,
    ) -> anyhow::Result<()> {
        ensure!(dims.is_valid(), "dimensions must be positive: {dims:?}");

        let mut designs = match generator.generate_layouts(&dims) {
            Ok(designs) => designs,
            Err(err) => {
                warn!("error generating layouts: {err:?}");
                return Err(err.context("error generating layouts"));
            }
        };
        sanitize_designs(&mut designs, &self.options);

        info!(
            "generated {} designs for {}x{}x{} {}",
            designs.len(),
            dims.width,
            dims.height,
            dims.depth,
            dims.unit
        );

        self.selected = designs.first().map(|d| d.id.clone());
        self.editing = None;
        self.render = RenderState::Idle;
        self.dimensions = Some(dims);
        self.designs = designs;
        Ok(())
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.design(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_owned());
        true
    }

    /// Opens the editor on a design.
    pub fn begin_editing(&mut self, id: &str) -> bool {
        if self.design(id).is_none() {
            return false;
        }
        self.editing = Some(id.to_owned());
        true
    }

    pub fn finish_editing(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// Applies an edit to the design with `id`, returning whether it changed anything.
    pub fn apply(&mut self, id: &str, edit: &Edit) -> bool {
        let Some(dims) = self.dimensions else {
            debug!("ignoring {}: no designs", edit.name());
            return false;
        };

        let designs = apply_edit(&self.designs, id, edit, &self.options, &dims);
        let changed = designs != self.designs;
        self.designs = designs;
        changed
    }

    /// Appends a feature line; blank text is ignored.
    pub fn add_feature(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let Some(design) = self.design(id) else {
            return false;
        };
        let mut features = design.features.clone();
        features.push(text.to_owned());
        self.apply(id, &Edit::UpdateFeatures(features))
    }

    pub fn remove_feature(&mut self, id: &str, idx: usize) -> bool {
        let Some(design) = self.design(id) else {
            return false;
        };
        if idx >= design.features.len() {
            return false;
        }

        let mut features = design.features.clone();
        features.remove(idx);
        self.apply(id, &Edit::UpdateFeatures(features))
    }

    /// Renders the design with `id` and records the outcome in the render state.
    pub fn request_render(
        &mut self,
        generator: &mut dyn Generator,
        id: &str,
    ) -> anyhow::Result<ImageRef> {
        let dims = self.dimensions.context("no dimensions to render with")?;
        let design = self
            .design(id)
            .with_context(|| format!("no design with id {id:?}"))?
            .clone();

        self.render = RenderState::Loading;
        match generator.render(&design, &dims) {
            Ok(image) => {
                info!("rendered {id}: {image}");
                self.render = RenderState::Ready(image.clone());
                Ok(image)
            }
            Err(err) => {
                warn!("error rendering {id}: {err:?}");
                self.render = RenderState::Failed;
                Err(err.context(format!("error rendering {id:?}")))
            }
        }
    }

    pub fn dismiss_render(&mut self) {
        self.render = RenderState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::layout::{Column, Item, Layout, SectionType, Unit};

    #[derive(Default)]
    struct MockGenerator {
        designs: Option<Vec<Design>>,
        image: Option<String>,
        calls: usize,
    }

    impl Generator for MockGenerator {
        fn generate_layouts(&mut self, _dims: &Dimensions) -> anyhow::Result<Vec<Design>> {
            self.calls += 1;
            match &self.designs {
                Some(designs) => Ok(designs.clone()),
                None => bail!("service unavailable"),
            }
        }

        fn render(&mut self, _design: &Design, _dims: &Dimensions) -> anyhow::Result<ImageRef> {
            self.calls += 1;
            match &self.image {
                Some(image) => Ok(ImageRef(image.clone())),
                None => bail!("service unavailable"),
            }
        }
    }

    fn dims() -> Dimensions {
        Dimensions::new(2000., 2400., 600., Unit::Mm)
    }

    fn design(id: &str) -> Design {
        Design::new(
            id,
            "Classic",
            Layout::new(vec![
                Column::with_items(
                    50.,
                    vec![
                        Item::new(SectionType::Shelf, 40.),
                        Item::new(SectionType::Drawer, 60.),
                    ],
                ),
                Column::with_items(50., vec![Item::new(SectionType::HangingRod, 100.)]),
            ]),
        )
    }

    fn generated_studio() -> Studio {
        let mut generator = MockGenerator {
            designs: Some(vec![design("a"), design("b")]),
            ..MockGenerator::default()
        };
        let mut studio = Studio::new(Options::default());
        studio.generate_layouts(&mut generator, dims()).unwrap();
        studio
    }

    #[test]
    fn generate_selects_first_design() {
        let studio = generated_studio();
        assert_eq!(studio.designs().len(), 2);
        assert_eq!(studio.selected().map(|d| d.id.as_str()), Some("a"));
        assert_eq!(studio.dimensions(), Some(&dims()));
        assert_eq!(studio.render_state(), &RenderState::Idle);
    }

    #[test]
    fn generate_sanitizes_designs() {
        let mut broken = design("a");
        broken.layout.columns[0].width_percentage = 30.;
        broken.layout.columns[1].width_percentage = 30.;
        let mut generator = MockGenerator {
            designs: Some(vec![broken, design("a")]),
            ..MockGenerator::default()
        };

        let mut studio = Studio::new(Options::default());
        studio.generate_layouts(&mut generator, dims()).unwrap();

        let ids: Vec<_> = studio.designs().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "design-2"]);
        assert_eq!(studio.designs()[0].layout.width_total(), 100.);
    }

    #[test]
    fn failed_generate_keeps_previous_state() {
        let mut studio = generated_studio();
        assert!(studio.select("b"));
        assert!(studio.begin_editing("b"));

        let mut generator = MockGenerator::default();
        let err = studio
            .generate_layouts(&mut generator, Dimensions::new(1., 1., 1., Unit::Ft))
            .unwrap_err();
        assert!(format!("{err:#}").contains("service unavailable"));

        assert_eq!(studio.designs().len(), 2);
        assert_eq!(studio.selected().map(|d| d.id.as_str()), Some("b"));
        assert_eq!(studio.editing().map(|d| d.id.as_str()), Some("b"));
        assert_eq!(studio.dimensions(), Some(&dims()));
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let mut generator = MockGenerator::default();
        let mut studio = Studio::new(Options::default());
        assert!(studio
            .generate_layouts(&mut generator, Dimensions::new(0., 2400., 600., Unit::Mm))
            .is_err());
        assert_eq!(generator.calls, 0);
    }

    #[test]
    fn edits_replace_the_design() {
        let mut studio = generated_studio();
        let edit = Edit::ResizeColumnPair {
            column: 0,
            delta: 10.,
        };
        assert!(studio.apply("b", &edit));
        assert_eq!(studio.design("b").unwrap().layout.columns[0].width_percentage, 60.);
        assert_eq!(studio.design("a").unwrap(), &design("a"));

        assert!(!studio.apply("missing", &edit));
        assert!(!studio.apply("a", &Edit::ResizeColumnPair { column: 5, delta: 10. }));
    }

    #[test]
    fn edits_without_designs_are_ignored() {
        let mut studio = Studio::new(Options::default());
        assert!(!studio.apply("a", &Edit::EqualizeColumns));
        assert!(studio.to_session().is_none());
    }

    #[test]
    fn features() {
        let mut studio = generated_studio();
        assert!(studio.add_feature("a", "  LED lighting "));
        assert!(!studio.add_feature("a", "   "));
        assert!(studio.add_feature("a", "Mirror door"));
        assert_eq!(studio.design("a").unwrap().features, ["LED lighting", "Mirror door"]);

        assert!(studio.remove_feature("a", 0));
        assert!(!studio.remove_feature("a", 1));
        assert_eq!(studio.design("a").unwrap().features, ["Mirror door"]);
    }

    #[test]
    fn editing_and_selection() {
        let mut studio = generated_studio();
        assert!(!studio.select("missing"));
        assert!(!studio.begin_editing("missing"));
        assert!(studio.editing().is_none());

        assert!(studio.begin_editing("a"));
        assert_eq!(studio.editing().map(|d| d.id.as_str()), Some("a"));
        assert!(studio.finish_editing());
        assert!(!studio.finish_editing());
    }

    #[test]
    fn render_outcomes() {
        let mut studio = generated_studio();
        let mut generator = MockGenerator {
            image: Some("render.png".to_owned()),
            ..MockGenerator::default()
        };

        let image = studio.request_render(&mut generator, "a").unwrap();
        assert_eq!(image.0, "render.png");
        assert_eq!(studio.render_state(), &RenderState::Ready(image));

        generator.image = None;
        assert!(studio.request_render(&mut generator, "a").is_err());
        assert_eq!(studio.render_state(), &RenderState::Failed);

        studio.dismiss_render();
        assert_eq!(studio.render_state(), &RenderState::Idle);

        let calls = generator.calls;
        assert!(studio.request_render(&mut generator, "missing").is_err());
        assert_eq!(generator.calls, calls);
        assert_eq!(studio.render_state(), &RenderState::Idle);
    }

    #[test]
    fn session_file_round_trip() {
        let studio = generated_studio();
        let session = studio.to_session().unwrap();

        let path = std::env::temp_dir().join(format!("wardrobe-session-{}.json", std::process::id()));
        session.save(&path).unwrap();
        let loaded = SessionFile::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, session);

        let reopened = Studio::from_session(loaded, Options::default());
        assert_eq!(reopened.designs(), studio.designs());
        assert_eq!(reopened.selected().map(|d| d.id.as_str()), Some("a"));
    }
}
