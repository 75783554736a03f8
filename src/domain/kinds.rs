//! Closed kind tags read from authored descriptors
//!
//! The editor writes kinds as free-form strings. Both enums parse them into a
//! closed set; anything unrecognized degrades to an explicit fallback instead
//! of silently matching the wrong variant.

use serde::{Serialize, Serializer};

use crate::parser::xml::XmlElement;

/// Wrapper shape of a component, from the root `extention` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ComponentKind {
    /// Plain container
    #[default]
    Component,
    Button,
    ComboBox,
    Label,
    ProgressBar,
    ScrollBar,
    Slider,
    Tree,
}

impl ComponentKind {
    pub const ALL: [Self; 8] = [
        Self::Component,
        Self::Button,
        Self::ComboBox,
        Self::Label,
        Self::ProgressBar,
        Self::ScrollBar,
        Self::Slider,
        Self::Tree,
    ];

    /// Parse an authored kind string, `None` when unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Component" => Some(Self::Component),
            "Button" => Some(Self::Button),
            "ComboBox" => Some(Self::ComboBox),
            "Label" => Some(Self::Label),
            "ProgressBar" => Some(Self::ProgressBar),
            "ScrollBar" => Some(Self::ScrollBar),
            "Slider" => Some(Self::Slider),
            "Tree" => Some(Self::Tree),
            _ => None,
        }
    }

    /// Framework type a component of this kind is instantiated as
    pub fn base_type(self) -> &'static str {
        match self {
            Self::Component => "GComponent",
            Self::Button => "GButton",
            Self::ComboBox => "GComboBox",
            Self::Label => "GLabel",
            Self::ProgressBar => "GProgressBar",
            Self::ScrollBar => "GScrollBar",
            Self::Slider => "GSlider",
            Self::Tree => "GTree",
        }
    }
}

/// Object kind of a display-list child
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Graph,
    Group,
    Image,
    Loader,
    Loader3D,
    MovieClip,
    TextField,
    TextInput,
    RichText,
    List,
    /// Reference to another component
    Component,
    /// Tag this tool does not know; never exposed
    Unknown(String),
}

impl ObjectKind {
    /// Classify a display-list node by its tag
    ///
    /// The editor writes both text fields and text inputs as `<text>`,
    /// the latter with `input="true"`.
    pub fn from_node(node: &XmlElement) -> Self {
        match node.name.as_str() {
            "graph" => Self::Graph,
            "group" => Self::Group,
            "image" => Self::Image,
            "loader" => Self::Loader,
            "loader3D" => Self::Loader3D,
            "movieclip" => Self::MovieClip,
            "text" if node.attr("input") == Some("true") => Self::TextInput,
            "text" | "textfield" => Self::TextField,
            "textinput" => Self::TextInput,
            "richtext" => Self::RichText,
            "list" => Self::List,
            "component" => Self::Component,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether a member of this kind can be bound at all
    pub fn is_bindable(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Fixed framework type for primitive kinds
    ///
    /// `None` for component references, whose type depends on the target,
    /// and for unknown tags.
    pub fn display_type(&self) -> Option<&'static str> {
        match self {
            Self::Graph => Some("GGraph"),
            Self::Group => Some("GGroup"),
            Self::Image => Some("GImage"),
            Self::Loader => Some("GLoader"),
            Self::Loader3D => Some("GLoader3D"),
            Self::MovieClip => Some("GMovieClip"),
            Self::TextField => Some("GTextField"),
            Self::TextInput => Some("GTextInput"),
            Self::RichText => Some("GRichTextField"),
            Self::List => Some("GList"),
            Self::Component | Self::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Graph => "graph",
            Self::Group => "group",
            Self::Image => "image",
            Self::Loader => "loader",
            Self::Loader3D => "loader3D",
            Self::MovieClip => "movieclip",
            Self::TextField => "textfield",
            Self::TextInput => "textinput",
            Self::RichText => "richtext",
            Self::List => "list",
            Self::Component => "component",
            Self::Unknown(tag) => tag,
        }
    }
}

impl Serialize for ObjectKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
