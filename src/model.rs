//! JNLP document model.
//!
//! Plain value-holder entities matching the element structure of a JNLP
//! descriptor. Every optional attribute is an `Option` so that "never set"
//! is distinguishable from a real value; the serializer only emits an
//! attribute when it is present. All entities derive `serde` traits so a
//! complete bundle description can be read from JSON.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Shared attribute enums
// ────────────────────────────────────────────────────────────────────────────

/// Download strategy for jars, native libraries and extension parts.
///
/// `Eager` is the JNLP default and is never written out; only `lazy`
/// appears as an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Download {
    #[default]
    Eager,
    Lazy,
}

/// Kind of a `<description>` element. Absent means unspecified, which omits
/// the `kind` attribute entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptionKind {
    OneLine,
    Short,
    Tooltip,
}

impl DescriptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptionKind::OneLine => "one-line",
            DescriptionKind::Short => "short",
            DescriptionKind::Tooltip => "tooltip",
        }
    }
}

/// Kind of an `<icon>` element. Absent means unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Selected,
    Rollover,
    Disabled,
}

impl IconKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IconKind::Selected => "selected",
            IconKind::Rollover => "rollover",
            IconKind::Disabled => "disabled",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Information
// ────────────────────────────────────────────────────────────────────────────

/// One `<information>` element: titles, vendor, icons and descriptions for
/// a given locale. No field is individually required, but a bundle must
/// carry at least one `Information` entry to serialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Information {
    pub locale: Option<String>,
    pub title: Option<String>,
    pub vendor: Option<String>,
    /// Homepage URL, written as `<homepage href="…"/>`.
    pub homepage: Option<String>,
    pub descriptions: Vec<Description>,
    pub icons: Vec<Icon>,
    /// Emits the `<offline-allowed/>` marker when true.
    pub offline_allowed: bool,
}

/// A `<description>` element with escaped text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub kind: Option<DescriptionKind>,
    pub text: String,
}

/// An `<icon>` element. `href` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    pub href: Option<String>,
    pub kind: Option<IconKind>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Color depth in bits.
    pub depth: Option<u32>,
    /// Download size in bytes.
    pub size: Option<u64>,
    pub version: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Resources
// ────────────────────────────────────────────────────────────────────────────

/// A `<resources>` element, optionally restricted to an os/arch/locale
/// combination. Children are written grouped by type, in declaration order
/// within each group: j2se, jar, nativelib, extension, property, package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub os: Option<String>,
    pub arch: Option<String>,
    pub locale: Option<String>,
    pub j2ses: Vec<J2se>,
    pub jars: Vec<Jar>,
    pub nativelibs: Vec<NativeLib>,
    pub extensions: Vec<Extension>,
    pub properties: Vec<Property>,
    pub packages: Vec<Package>,
}

impl Resources {
    /// True when no child element of any type is present.
    pub fn is_empty(&self) -> bool {
        self.j2ses.is_empty()
            && self.jars.is_empty()
            && self.nativelibs.is_empty()
            && self.extensions.is_empty()
            && self.properties.is_empty()
            && self.packages.is_empty()
    }
}

/// A `<j2se>` runtime requirement. `version` is required. May carry nested
/// `<resources>` that only apply when this runtime is selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct J2se {
    pub version: Option<String>,
    pub href: Option<String>,
    /// Initial heap size in bytes (`initial-heap-size` attribute).
    pub initial_heap: Option<u64>,
    /// Maximum heap size in bytes (`max-heap-size` attribute).
    pub max_heap: Option<u64>,
    pub resources: Vec<Resources>,
}

/// A `<jar>` reference. `href` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Jar {
    pub href: Option<String>,
    pub version: Option<String>,
    /// Marks the jar containing the main class; written only when true.
    pub main: bool,
    pub download: Download,
    /// Download size in bytes.
    pub size: Option<u64>,
    /// Part name used for grouped lazy downloads.
    pub part: Option<String>,
}

/// A `<nativelib>` reference. `href` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeLib {
    pub href: Option<String>,
    pub version: Option<String>,
    pub download: Download,
    pub size: Option<u64>,
    pub part: Option<String>,
}

/// An `<extension>` reference to another JNLP descriptor. `href` is
/// required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub href: Option<String>,
    pub version: Option<String>,
    pub downloads: Vec<ExtDownload>,
}

/// An `<ext-download>` element mapping an extension part onto a part of
/// this descriptor. `ext_part` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtDownload {
    /// `ext-part` attribute.
    pub ext_part: Option<String>,
    pub part: Option<String>,
    pub download: Download,
}

/// A name/value pair, serialized as `<property>` inside resources and as
/// `<param>` inside an applet descriptor. Both fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// A `<package>` element declaring which classes live in which part.
/// `name` and `part` are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub name: Option<String>,
    pub part: Option<String>,
    /// Written only when true.
    pub recursive: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Bundle descriptors
// ────────────────────────────────────────────────────────────────────────────

/// An `<application-desc>` element. The main class is optional (the main
/// jar's manifest may supply it); arguments become `<argument>` children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationDesc {
    pub main_class: Option<String>,
    pub arguments: Vec<String>,
}

/// An `<applet-desc>` element. Main class, name, width and height are all
/// required, and width/height must be nonzero.
///
/// There is intentionally no way to emit `width="0"`: zero is rejected by
/// validation, so "absent" and "explicitly zero" collapse into the same
/// error, matching how JNLP consumers treat a zero-sized applet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppletDesc {
    pub main_class: Option<String>,
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `documentbase` attribute.
    pub document_base: Option<String>,
    pub params: Vec<Property>,
}

/// An `<installer-desc>` element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerDesc {
    pub main_class: Option<String>,
}
