//! Bundle assembly.
//!
//! [`Bundle`] accumulates the document model for one JNLP descriptor:
//! scalar root attributes, `information` and `resources` entries, security
//! flags and exactly one bundle-kind [`Descriptor`]. Child entities are
//! created through `create_*` factory methods that register the entity and
//! hand back a mutable reference for further configuration.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{ApplicationDesc, AppletDesc, Information, InstallerDesc, Resources};

/// Default value of the `spec` attribute when never set.
pub const DEFAULT_SPEC: &str = "1.0+";

/// The mutually-exclusive bundle kind. Holding this as a sum type makes
/// "exactly one descriptor" structural: a `Bundle` can carry at most one
/// variant, and the factory methods refuse to replace it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Descriptor {
    /// `<component-desc/>` — the bundle is a component extension.
    Component,
    /// `<application-desc>` — a standalone application.
    Application(ApplicationDesc),
    /// `<applet-desc>` — an applet.
    Applet(AppletDesc),
    /// `<installer-desc>` — an installer extension.
    Installer(InstallerDesc),
}

/// A complete JNLP bundle description.
///
/// Fields are public so a whole bundle can be built literally or loaded
/// from JSON; the `create_*` / `mark_component` methods additionally
/// enforce the single-bundle-kind invariant during incremental assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Bundle {
    /// JNLP spec version the descriptor conforms to, `"1.0+"` by default.
    pub spec: String,
    /// Version of the bundle itself.
    pub version: Option<String>,
    /// Root URL for all relative URLs in the descriptor (`codebase`).
    pub code_base: Option<String>,
    /// URL of the descriptor file itself.
    pub href: Option<String>,
    /// Where to write the descriptor; may instead be given per call.
    #[serde(skip)]
    pub out: Option<Utf8PathBuf>,
    /// At least one entry is required to serialize.
    pub informations: Vec<Information>,
    /// Requests full local-machine permissions.
    pub all_permissions: bool,
    /// Requests the J2EE application client permission set.
    pub j2ee_permissions: bool,
    pub resources: Vec<Resources>,
    /// The selected bundle kind, if any. Serialization requires one.
    pub descriptor: Option<Descriptor>,
}

impl Default for Bundle {
    fn default() -> Self {
        Bundle {
            spec: DEFAULT_SPEC.to_string(),
            version: None,
            code_base: None,
            href: None,
            out: None,
            informations: Vec::new(),
            all_permissions: false,
            j2ee_permissions: false,
            resources: Vec::new(),
            descriptor: None,
        }
    }
}

fn push_default<T: Default>(items: &mut Vec<T>) -> &mut T {
    items.push(T::default());
    let last = items.len() - 1;
    &mut items[last]
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_spec(&mut self, spec: impl Into<String>) {
        self.spec = spec.into();
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn set_code_base(&mut self, code_base: impl Into<String>) {
        self.code_base = Some(code_base.into());
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }

    pub fn set_out(&mut self, out: impl Into<Utf8PathBuf>) {
        self.out = Some(out.into());
    }

    pub fn set_all_permissions(&mut self, enabled: bool) {
        self.all_permissions = enabled;
    }

    pub fn set_j2ee_permissions(&mut self, enabled: bool) {
        self.j2ee_permissions = enabled;
    }

    /// Register a new `information` entry and return it for configuration.
    pub fn create_information(&mut self) -> &mut Information {
        push_default(&mut self.informations)
    }

    /// Register a new `resources` entry and return it for configuration.
    pub fn create_resources(&mut self) -> &mut Resources {
        push_default(&mut self.resources)
    }

    fn ensure_no_descriptor(&self) -> Result<()> {
        if self.descriptor.is_some() {
            return Err(Error::Configuration(
                "cannot describe multiple packages".to_string(),
            ));
        }
        Ok(())
    }

    /// Declare the bundle to be a component extension.
    ///
    /// Fails if another bundle kind is already selected, leaving the
    /// existing kind untouched.
    pub fn mark_component(&mut self) -> Result<()> {
        self.ensure_no_descriptor()?;
        self.descriptor = Some(Descriptor::Component);
        Ok(())
    }

    /// Declare the bundle to be an application and return its descriptor
    /// for configuration. Fails if another bundle kind is already selected.
    pub fn create_application_desc(&mut self) -> Result<&mut ApplicationDesc> {
        self.ensure_no_descriptor()?;
        self.descriptor = Some(Descriptor::Application(ApplicationDesc::default()));
        match &mut self.descriptor {
            Some(Descriptor::Application(desc)) => Ok(desc),
            _ => unreachable!("descriptor was just set"),
        }
    }

    /// Declare the bundle to be an applet and return its descriptor for
    /// configuration. Fails if another bundle kind is already selected.
    pub fn create_applet_desc(&mut self) -> Result<&mut AppletDesc> {
        self.ensure_no_descriptor()?;
        self.descriptor = Some(Descriptor::Applet(AppletDesc::default()));
        match &mut self.descriptor {
            Some(Descriptor::Applet(desc)) => Ok(desc),
            _ => unreachable!("descriptor was just set"),
        }
    }

    /// Declare the bundle to be an installer and return its descriptor for
    /// configuration. Fails if another bundle kind is already selected.
    pub fn create_installer_desc(&mut self) -> Result<&mut InstallerDesc> {
        self.ensure_no_descriptor()?;
        self.descriptor = Some(Descriptor::Installer(InstallerDesc::default()));
        match &mut self.descriptor {
            Some(Descriptor::Installer(desc)) => Ok(desc),
            _ => unreachable!("descriptor was just set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_defaults_to_1_0_plus() {
        assert_eq!(Bundle::new().spec, "1.0+");
    }

    #[test]
    fn factories_register_and_return_children() {
        let mut bundle = Bundle::new();
        bundle.create_information().title = Some("App".into());
        bundle.create_information().locale = Some("fr".into());
        assert_eq!(bundle.informations.len(), 2);
        assert_eq!(bundle.informations[0].title.as_deref(), Some("App"));
        assert_eq!(bundle.informations[1].locale.as_deref(), Some("fr"));
    }

    #[test]
    fn second_descriptor_is_rejected() {
        let mut bundle = Bundle::new();
        bundle
            .create_application_desc()
            .expect("first descriptor")
            .main_class = Some("com.acme.Main".into());

        let err = bundle.mark_component().expect_err("second descriptor");
        assert!(matches!(err, Error::Configuration(_)));

        // The original kind stays in place.
        match &bundle.descriptor {
            Some(Descriptor::Application(desc)) => {
                assert_eq!(desc.main_class.as_deref(), Some("com.acme.Main"));
            }
            other => panic!("expected application descriptor, got {other:?}"),
        }
    }

    #[test]
    fn every_kind_conflicts_with_every_other() {
        let mut bundle = Bundle::new();
        bundle.mark_component().expect("component");
        assert!(bundle.create_application_desc().is_err());
        assert!(bundle.create_applet_desc().is_err());
        assert!(bundle.create_installer_desc().is_err());
    }

    #[test]
    fn bundle_deserializes_with_tagged_descriptor() {
        let json = r#"{
            "informations": [ { "title": "App" } ],
            "descriptor": { "application": { "main_class": "com.acme.Main" } }
        }"#;
        let bundle: Bundle = serde_json::from_str(json).expect("parse bundle");
        assert_eq!(bundle.spec, "1.0+");
        assert!(matches!(
            bundle.descriptor,
            Some(Descriptor::Application(_))
        ));
    }
}
