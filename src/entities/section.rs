//! Section Nodes
//!
//! Everything that can sit in a service's `sections` list. The set of section
//! kinds is closed: a titled [`Section`] that nests further nodes, a
//! [`ReferenceSection`] of "see also" links, and a [`SingleMethod`] inclusion.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{ClassReference, ExtraInstruction, ServiceDescription};
use crate::constants::render::{METHOD_NO_INDEX, PATH_SEPARATOR};
use crate::render::Renderer;
use crate::types::Result;

/// Any node usable inside a `sections` or `contents` list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionNode {
    Section(Section),
    References(ReferenceSection),
    Method(SingleMethod),
}

impl SectionNode {
    /// Render this node for `service` at heading level `this_level`.
    ///
    /// Only [`Section`] uses the level; the other kinds carry no heading.
    pub fn render_section<R: Renderer>(
        &self,
        r: &mut R,
        service: &ServiceDescription,
        this_level: usize,
    ) -> Result<R::Block> {
        match self {
            SectionNode::Section(section) => section.render_section(r, service, this_level),
            SectionNode::References(references) => references.render_section(r),
            SectionNode::Method(method) => method.render_section(r, service),
        }
    }
}

impl From<Section> for SectionNode {
    fn from(section: Section) -> Self {
        SectionNode::Section(section)
    }
}

impl From<ReferenceSection> for SectionNode {
    fn from(section: ReferenceSection) -> Self {
        SectionNode::References(section)
    }
}

impl From<SingleMethod> for SectionNode {
    fn from(method: SingleMethod) -> Self {
        SectionNode::Method(method)
    }
}

// =============================================================================
// Section
// =============================================================================

/// Titled grouping of nested nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub contents: Vec<SectionNode>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: Vec::new(),
        }
    }

    pub fn with_contents(mut self, contents: Vec<SectionNode>) -> Self {
        self.contents = contents;
        self
    }

    pub fn with_content(mut self, node: impl Into<SectionNode>) -> Self {
        self.contents.push(node.into());
        self
    }

    /// Title at `this_level`, then every child one level deeper, wrapped in a
    /// section block. Depth follows the tree; there is no cap.
    pub fn render_section<R: Renderer>(
        &self,
        r: &mut R,
        service: &ServiceDescription,
        this_level: usize,
    ) -> Result<R::Block> {
        trace!(title = %self.title, level = this_level, "rendering section");

        let mut contents = Vec::with_capacity(self.contents.len() + 1);
        contents.push(r.title(&self.title, this_level, false)?);
        for node in &self.contents {
            contents.push(node.render_section(r, service, this_level + 1)?);
        }
        r.section(contents)
    }
}

// =============================================================================
// Reference Section
// =============================================================================

/// "See also" aside listing references to other entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceSection {
    #[serde(default)]
    pub references: Vec<ClassReference>,
}

impl ReferenceSection {
    pub fn new(references: Vec<ClassReference>) -> Self {
        Self { references }
    }

    pub fn with_reference(mut self, reference: ClassReference) -> Self {
        self.references.push(reference);
        self
    }

    /// An aside holding one definition list, one entry per reference. An empty
    /// reference list still yields the aside with an empty list.
    pub fn render_section<R: Renderer>(&self, r: &mut R) -> Result<R::Block> {
        trace!(references = self.references.len(), "rendering reference section");

        let definitions = self
            .references
            .iter()
            .map(|reference| reference.render_reference(r))
            .collect::<Result<Vec<_>>>()?;
        let list = r.definition_list(definitions)?;
        r.see_also_section(vec![list])
    }
}

// =============================================================================
// Single Method
// =============================================================================

/// Inclusion of one method's documentation from the service class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleMethod {
    /// Unqualified method name
    pub method_name: String,
    #[serde(default)]
    pub extras: Vec<ExtraInstruction>,
}

impl SingleMethod {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            extras: Vec::new(),
        }
    }

    pub fn with_extras(mut self, extras: Vec<ExtraInstruction>) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_extra(mut self, extra: ExtraInstruction) -> Self {
        self.extras.push(extra);
        self
    }

    /// `module_path.class_name.method_name` for the owning service
    pub fn qualified_path(&self, service: &ServiceDescription) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            service.module_path,
            service.class_name,
            self.method_name,
            sep = PATH_SEPARATOR
        )
    }

    pub fn render_section<R: Renderer>(
        &self,
        r: &mut R,
        service: &ServiceDescription,
    ) -> Result<R::Block> {
        let path = self.qualified_path(service);
        trace!(%path, extras = self.extras.len(), "rendering method inclusion");

        let extras = self
            .extras
            .iter()
            .map(|extra| extra.render_extra(r))
            .collect::<Result<Vec<_>>>()?;
        r.include_method(&path, METHOD_NO_INDEX, extras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Block, Definition, RecordingRenderer};
    use crate::types::DocError;

    fn shop() -> ServiceDescription {
        ServiceDescription::new("Shop", "shop.service", "ShopService")
    }

    #[test]
    fn test_qualified_path() {
        let method = SingleMethod::new("get_order");
        assert_eq!(
            method.qualified_path(&shop()),
            "shop.service.ShopService.get_order"
        );
    }

    #[test]
    fn test_single_method_always_no_index() {
        let mut r = RecordingRenderer::new();
        let node = SectionNode::from(SingleMethod::new("get_order"));

        for level in [1, 2, 7] {
            let block = node.render_section(&mut r, &shop(), level).unwrap();
            assert_eq!(
                block,
                Block::MethodInclude {
                    path: "shop.service.ShopService.get_order".into(),
                    no_index: true,
                    extras: vec![],
                }
            );
        }
    }

    #[test]
    fn test_single_method_extras_in_order() {
        let mut r = RecordingRenderer::new();
        let method = SingleMethod::new("pay")
            .with_extra(ExtraInstruction::new("note", "first"))
            .with_extra(ExtraInstruction::new("warning", "second"));
        assert_eq!(
            method,
            SingleMethod::new("pay").with_extras(vec![
                ExtraInstruction::new("note", "first"),
                ExtraInstruction::new("warning", "second"),
            ])
        );

        let block = method.render_section(&mut r, &shop()).unwrap();

        let Block::MethodInclude { extras, .. } = block else {
            panic!("expected method inclusion");
        };
        assert_eq!(
            extras,
            vec![
                Block::Instruction {
                    name: "note".into(),
                    content: "first".into()
                },
                Block::Instruction {
                    name: "warning".into(),
                    content: "second".into()
                },
            ]
        );
        assert_eq!(
            r.calls(),
            &["instruction", "instruction", "include_method"]
        );
    }

    #[test]
    fn test_section_increments_level() {
        let mut r = RecordingRenderer::new();
        let tree = Section::new("One").with_content(
            Section::new("Two").with_content(Section::new("Three")),
        );

        let block = tree.render_section(&mut r, &shop(), 1).unwrap();

        assert_eq!(
            block.titles(),
            vec![
                ("One".to_string(), 1),
                ("Two".to_string(), 2),
                ("Three".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_section_title_is_not_code_styled() {
        let mut r = RecordingRenderer::new();
        let block = Section::new("Orders")
            .render_section(&mut r, &shop(), 4)
            .unwrap();

        assert_eq!(
            block,
            Block::Section {
                contents: vec![Block::Title {
                    text: "Orders".into(),
                    level: 4,
                    as_code: false,
                }],
            }
        );
    }

    #[test]
    fn test_deep_nesting_has_no_limit() {
        let mut tree = Section::new("leaf");
        for depth in (1..64).rev() {
            tree = Section::new(format!("level-{}", depth)).with_content(tree);
        }

        let mut r = RecordingRenderer::new();
        let block = tree.render_section(&mut r, &shop(), 1).unwrap();

        let titles = block.titles();
        assert_eq!(titles.len(), 64);
        assert_eq!(titles.last(), Some(&("leaf".to_string(), 64)));
    }

    #[test]
    fn test_section_mixes_children_in_order() {
        let mut r = RecordingRenderer::new();
        let section = Section::new("Checkout")
            .with_content(SingleMethod::new("pay"))
            .with_content(ReferenceSection::default());

        let block = section.render_section(&mut r, &shop(), 2).unwrap();

        let Block::Section { contents } = block else {
            panic!("expected section");
        };
        assert_eq!(contents.len(), 3);
        assert!(matches!(contents[0], Block::Title { level: 2, .. }));
        assert!(matches!(contents[1], Block::MethodInclude { .. }));
        assert!(matches!(contents[2], Block::SeeAlso { .. }));
    }

    #[test]
    fn test_empty_reference_section_renders_empty_list() {
        let mut r = RecordingRenderer::new();
        let block = ReferenceSection::default().render_section(&mut r).unwrap();

        assert_eq!(
            block,
            Block::SeeAlso {
                contents: vec![Block::DefinitionList { entries: vec![] }],
            }
        );
    }

    #[test]
    fn test_reference_section_ignores_level() {
        let node = SectionNode::from(ReferenceSection::new(vec![ClassReference::new(
            "Model",
            "shop.models.Order",
        )]));

        let mut r = RecordingRenderer::new();
        let shallow = node.render_section(&mut r, &shop(), 2).unwrap();
        let deep = node.render_section(&mut r, &shop(), 9).unwrap();

        assert_eq!(shallow, deep);
        assert_eq!(
            shallow,
            Block::SeeAlso {
                contents: vec![Block::DefinitionList {
                    entries: vec![Definition {
                        term: "Model".into(),
                        description: Block::ClassReference {
                            path: "shop.models.Order".into()
                        },
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_failure_stops_remaining_siblings() {
        let mut r = RecordingRenderer::new().reject_reference("shop.Missing");
        let section = Section::new("Refs")
            .with_content(ReferenceSection::new(vec![ClassReference::new(
                "Gone",
                "shop.Missing",
            )]))
            .with_content(SingleMethod::new("never_rendered"));

        let err = section.render_section(&mut r, &shop(), 2).unwrap_err();

        assert!(matches!(err, DocError::UnresolvedReference { .. }));
        assert_eq!(r.call_count("include_method"), 0);
        assert_eq!(r.call_count("section"), 0);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Section::new("A").with_content(SingleMethod::new("x"));
        let b = Section::new("A").with_contents(vec![SingleMethod::new("x").into()]);
        assert_eq!(a, b);

        let reordered = ReferenceSection::new(vec![
            ClassReference::new("b", "p.b"),
            ClassReference::new("a", "p.a"),
        ]);
        let ordered = ReferenceSection::default()
            .with_reference(ClassReference::new("a", "p.a"))
            .with_reference(ClassReference::new("b", "p.b"));
        assert_ne!(reordered, ordered);

        assert_ne!(
            SingleMethod::new("x").with_extra(ExtraInstruction::new("note", "1")),
            SingleMethod::new("x").with_extra(ExtraInstruction::new("note", "2")),
        );
    }

    #[test]
    fn test_section_node_deserializes_by_kind() {
        let json = r#"{
            "kind": "section",
            "title": "Orders",
            "contents": [
                {"kind": "method", "method_name": "list_orders"},
                {"kind": "references", "references": [
                    {"title": "Model", "reference_path": "app.orders.Order"}
                ]}
            ]
        }"#;

        let node: SectionNode = serde_json::from_str(json).unwrap();

        assert_eq!(
            node,
            SectionNode::Section(
                Section::new("Orders")
                    .with_content(SingleMethod::new("list_orders"))
                    .with_content(ReferenceSection::new(vec![ClassReference::new(
                        "Model",
                        "app.orders.Order"
                    )]))
            )
        );
    }
}
