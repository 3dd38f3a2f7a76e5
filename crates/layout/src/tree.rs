//! The drawing-primitive tree produced by the layout engine.
//!
//! Coordinates are millimeters. Each [`Group`] translates its children;
//! [`PrimitiveTree::placed`] resolves those translations to absolute page
//! coordinates.

use crate::style::{LineStyle, TextStyle};

/// A 2D translation applied by a group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translate {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset, growing downwards.
    pub y: f64,
}

impl Translate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn then(self, inner: Translate) -> Self {
        Self::new(self.x + inner.x, self.y + inner.y)
    }
}

/// A single-line text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Anchor point, interpreted through `style.anchor`.
    pub x: f64,
    /// Baseline, interpreted through `style.baseline`.
    pub y: f64,
    /// The text to draw.
    pub content: String,
    /// Font and alignment.
    pub style: TextStyle,
}

/// A filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// CSS fill color.
    pub fill: String,
}

/// A straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start point x.
    pub x1: f64,
    /// Start point y.
    pub y1: f64,
    /// End point x.
    pub x2: f64,
    /// End point y.
    pub y2: f64,
    /// Stroke color and width.
    pub style: LineStyle,
}

/// A raster image scaled to `width`, height following its aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Rendered width; height follows the image.
    pub width: f64,
    /// URL or data URI.
    pub href: String,
    /// Id of a [`FadeMask`] in the tree's resources.
    pub mask: Option<String>,
}

/// Any drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(Text),
    Rect(Rect),
    Line(Line),
    Image(Image),
}

impl From<Text> for Primitive {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}

impl From<Rect> for Primitive {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl From<Line> for Primitive {
    fn from(l: Line) -> Self {
        Self::Line(l)
    }
}

impl From<Image> for Primitive {
    fn from(i: Image) -> Self {
        Self::Image(i)
    }
}

/// Interactive-only helpers shown while editing a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Hint that the background image can be dragged vertically.
    BackgroundDrag,
    /// Handle marking where the background fade ends.
    GradientStop,
    /// Hint that the grid content can be dragged vertically.
    ContentDrag,
}

/// A primitive plus its export flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// What to draw.
    pub primitive: Primitive,
    /// `false` for elements that must not appear in printed/exported output.
    pub printable: bool,
    /// Which editing helper this is, if any.
    pub affordance: Option<Affordance>,
}

impl Element {
    /// A printable element.
    pub fn new(primitive: impl Into<Primitive>) -> Self {
        Self {
            primitive: primitive.into(),
            printable: true,
            affordance: None,
        }
    }

    /// A non-printing interactive helper.
    pub fn affordance(primitive: impl Into<Primitive>, affordance: Affordance) -> Self {
        Self {
            primitive: primitive.into(),
            printable: false,
            affordance: Some(affordance),
        }
    }
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Element(Element),
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

/// A translated container of nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Stable name used for lookup and as the SVG `id`.
    pub id: Option<String>,
    /// Offset applied to every child.
    pub translate: Translate,
    /// `false` removes the whole group from the export variant.
    pub printable: bool,
    /// Child nodes in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// An empty, untranslated, printable group.
    pub fn new() -> Self {
        Self {
            printable: true,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate = Translate::new(x, y);
        self
    }

    /// Appends a child node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Direct child group with the given id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.children.iter().find_map(|n| match n {
            Node::Group(g) if g.id.as_deref() == Some(id) => Some(g),
            _ => None,
        })
    }

    /// Direct child elements, skipping nested groups.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Group(_) => None,
        })
    }

    fn retain_printable(&mut self) {
        self.children.retain(|n| match n {
            Node::Group(g) => g.printable,
            Node::Element(e) => e.printable,
        });
        for child in &mut self.children {
            if let Node::Group(g) = child {
                g.retain_printable();
            }
        }
    }

    fn collect<'a>(&'a self, origin: Translate, out: &mut Vec<Placed<'a>>) {
        let offset = origin.then(self.translate);
        for child in &self.children {
            match child {
                Node::Group(g) => g.collect(offset, out),
                Node::Element(element) => out.push(Placed { offset, element }),
            }
        }
    }

    fn count_non_printable(&self) -> usize {
        self.children
            .iter()
            .map(|n| match n {
                Node::Group(g) => usize::from(!g.printable) + g.count_non_printable(),
                Node::Element(e) => usize::from(!e.printable),
            })
            .sum()
    }
}

/// One stop of a vertical fade gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the mask height, 0.0 (top) to 1.0 (bottom).
    pub offset: f64,
    /// CSS stop color.
    pub color: String,
    /// Stop opacity, 0.0 to 1.0.
    pub opacity: f64,
}

/// Page-level luminance mask: a full-page rectangle filled with a vertical
/// linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeMask {
    /// Referenced by [`Image::mask`].
    pub id: String,
    /// Width of the masked area, normally the page width.
    pub width: f64,
    /// Height of the masked area, normally the page height.
    pub height: f64,
    /// Gradient stops, top to bottom.
    pub stops: Vec<GradientStop>,
}

/// An element together with its absolute translation.
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    /// Sum of the ancestor group translations.
    pub offset: Translate,
    /// The element itself, in its group's coordinates.
    pub element: &'a Element,
}

/// A complete page: size, shared resources, and the root group.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveTree {
    /// Page width in millimeters.
    pub width: f64,
    /// Page height in millimeters.
    pub height: f64,
    /// Masks referenced by [`Image::mask`].
    pub masks: Vec<FadeMask>,
    /// Top-level group holding the whole page.
    pub root: Group,
    /// Free-form document description, e.g. a photo credit.
    pub description: Option<String>,
}

impl PrimitiveTree {
    /// The export variant: a copy with every non-printable node removed.
    pub fn printable(&self) -> Self {
        let mut tree = self.clone();
        tree.root.retain_printable();
        tree
    }

    /// Every element with the accumulated translation of its ancestors.
    pub fn placed(&self) -> Vec<Placed<'_>> {
        let mut out = Vec::new();
        self.root.collect(Translate::default(), &mut out);
        out
    }

    /// Number of groups and elements flagged non-printable.
    pub fn non_printable_count(&self) -> usize {
        self.root.count_non_printable()
    }

    /// Affordances present in the tree, in document order.
    pub fn affordances(&self) -> Vec<Affordance> {
        self.placed()
            .iter()
            .filter_map(|p| p.element.affordance)
            .collect()
    }

    /// Looks up a mask resource by id.
    pub fn mask(&self, id: &str) -> Option<&FadeMask> {
        self.masks.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64) -> Rect {
        Rect {
            x,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            fill: "#000".to_string(),
        }
    }

    fn sample() -> PrimitiveTree {
        let mut inner = Group::new().with_id("inner").translated(5.0, 7.0);
        inner.push(Element::new(rect(1.0)));
        inner.push(Element::affordance(rect(2.0), Affordance::ContentDrag));

        let mut root = Group::new().translated(0.0, 10.0);
        root.push(Element::new(rect(0.0)));
        root.push(inner);

        PrimitiveTree {
            width: 100.0,
            height: 100.0,
            masks: Vec::new(),
            root,
            description: None,
        }
    }

    #[test]
    fn placed_accumulates_translation() {
        let tree = sample();
        let placed = tree.placed();
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].offset, Translate::new(0.0, 10.0));
        assert_eq!(placed[1].offset, Translate::new(5.0, 17.0));
    }

    #[test]
    fn printable_removes_affordances() {
        let tree = sample();
        assert_eq!(tree.non_printable_count(), 1);
        assert_eq!(tree.affordances(), vec![Affordance::ContentDrag]);

        let print = tree.printable();
        assert_eq!(print.non_printable_count(), 0);
        assert_eq!(print.placed().len(), 2);
        assert!(print.affordances().is_empty());
    }

    #[test]
    fn printable_drops_whole_groups() {
        let mut tree = sample();
        let mut hidden = Group::new().with_id("hidden");
        hidden.printable = false;
        hidden.push(Element::new(rect(9.0)));
        tree.root.push(hidden);

        assert_eq!(tree.non_printable_count(), 2);
        let print = tree.printable();
        assert!(print.root.group("hidden").is_none());
        assert!(print.root.group("inner").is_some());
    }

    #[test]
    fn group_lookup_and_elements() {
        let tree = sample();
        assert_eq!(tree.root.elements().count(), 1);
        let inner = tree.root.group("inner").unwrap();
        assert_eq!(inner.elements().count(), 2);
        assert!(tree.root.group("missing").is_none());
    }
}
