//! Data model for comment records — the unit of work for inference and
//! hierarchy resolution.
//!
//! Every inferred field is optional: records arrive from the external parser
//! carrying only raw tags and source context, and each pipeline stage fills
//! in the fields it is responsible for. The resolver then adds `members`,
//! `events`, `path`, and `errors`.

use serde::{Deserialize, Serialize};

/// One comment record, from raw annotation tags through full resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    /// Raw key/value annotation pairs as declared in source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Canonical identifier, set by name inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    /// How this entity attaches to its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Canonical name of the intended parent entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberof: Option<String>,
    /// Inheritance references — relationship only, not ownership.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub augments: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Param>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnDoc>,

    /// Source-location metadata, used only for diagnostics.
    #[serde(default)]
    pub context: Context,

    /// Diagnostics accumulated during processing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Diagnostic>,

    /// Child buckets — present only once this record has been emitted by the
    /// resolver as a hierarchy entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Members>,
    /// Child entities of kind event, attached regardless of scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Comment>,
    /// Identifiers from the forest root down to this entity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

impl Comment {
    /// The identifier used for paths and the resolver index. A record that
    /// never received a name resolves to the empty string.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// First tag with the given title, if any.
    pub fn tag(&self, title: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.title == title)
    }

    /// Value of the first tag with the given title.
    pub fn tag_value(&self, title: &str) -> Option<&str> {
        self.tag(title).and_then(|t| t.value.as_deref())
    }
}

/// A single raw annotation tag (e.g. `@memberof Class` → title "memberof",
/// value "Class"). Marker tags like `@static` carry no value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(title: &str, value: Option<&str>) -> Self {
        Tag {
            title: title.to_string(),
            value: value.map(str::to_string),
        }
    }
}

/// Entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Class,
    Function,
    #[serde(alias = "property")]
    Member,
    Event,
    Module,
    Typedef,
    Mixin,
    Constant,
}

/// Access level, normalized from `@access`/`@public`/`@protected`/`@private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
    Private,
}

/// Which bucket of a parent entity a child belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Static,
    Instance,
    Inner,
}

/// A parameter or property descriptor. Dotted annotation names
/// (`options.field`) nest as `properties` of their parent descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Param>,
}

/// Return descriptor from `@returns`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnDoc {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Source-location context supplied by the external parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number of the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Shape of the code the comment is attached to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeContext>,
}

/// Signature information for the code following a comment. Used as the
/// fallback source for name and kind inference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Structural kind as reported by the parser ("class", "function", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

/// A non-fatal resolution defect attached to the record it concerns.
///
/// `comment_line_number` is present only when the record's own line context
/// was the defect; it is omitted when the defect concerns an abstract
/// scoping rule irrespective of location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    #[serde(
        rename = "commentLineNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_line_number: Option<u32>,
}

impl Diagnostic {
    pub fn new(message: String, comment_line_number: Option<u32>) -> Self {
        Diagnostic {
            message,
            comment_line_number,
        }
    }
}

/// The three child buckets of a hierarchy container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Members {
    #[serde(rename = "static", default)]
    pub statics: Vec<Comment>,
    #[serde(default)]
    pub instance: Vec<Comment>,
    #[serde(default)]
    pub inner: Vec<Comment>,
}

impl Members {
    pub fn bucket_mut(&mut self, scope: Scope) -> &mut Vec<Comment> {
        match scope {
            Scope::Static => &mut self.statics,
            Scope::Instance => &mut self.instance,
            Scope::Inner => &mut self.inner,
        }
    }
}
