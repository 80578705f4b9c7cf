//! Serialize a [`Bundle`] into a JNLP XML document.
//!
//! The traversal order is fixed: `information` entries, then `security`
//! (only when a permission flag is set), then `resources` entries, then the
//! single bundle-kind descriptor. Attribute order within each element is
//! fixed as well, so a given bundle always produces byte-identical output.
//!
//! An attribute is written only when its value is present (or `true` for
//! flags defaulting to `false`); absent attributes mean "default" to JNLP
//! consumers, which keeps the generated document minimal.

use std::io::Write;

use crate::bundle::{Bundle, Descriptor};
use crate::error::{Error, Result};
use crate::model::*;
use crate::writer::XmlWriter;

type Attrs = Vec<(&'static str, String)>;

fn missing(attr: &str, element: &str) -> Error {
    Error::Validation(format!("missing {attr} attribute for {element} element"))
}

fn required<'a>(value: &'a Option<String>, attr: &str, element: &str) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| missing(attr, element))
}

/// Write the complete document for `bundle`. Fails before producing any
/// output if the bundle has no `information` entry or no bundle kind.
pub fn write_bundle<W: Write>(bundle: &Bundle, out: &mut XmlWriter<W>) -> Result<()> {
    if bundle.informations.is_empty() {
        return Err(Error::Validation(
            "information element not found".to_string(),
        ));
    }
    let descriptor = bundle
        .descriptor
        .as_ref()
        .ok_or_else(|| Error::Validation("unspecified bundle type".to_string()))?;

    out.start_document()?;
    out.start_element("jnlp", &root_attributes(bundle))?;

    for information in &bundle.informations {
        write_information(out, information)?;
    }

    if bundle.all_permissions || bundle.j2ee_permissions {
        out.start_element("security", &[])?;
        if bundle.all_permissions {
            out.add_element("all-permissions", &[])?;
        }
        if bundle.j2ee_permissions {
            out.add_element("j2ee-application-client-permissions", &[])?;
        }
        out.end_element()?;
    }

    for resources in &bundle.resources {
        write_resources(out, resources)?;
    }

    match descriptor {
        Descriptor::Application(desc) => write_application_desc(out, desc)?,
        Descriptor::Applet(desc) => write_applet_desc(out, desc)?,
        Descriptor::Component => out.add_element("component-desc", &[])?,
        Descriptor::Installer(desc) => write_installer_desc(out, desc)?,
    }

    out.end_element()?;
    out.end_document()
}

fn root_attributes(bundle: &Bundle) -> Attrs {
    let mut attrs: Attrs = vec![("spec", bundle.spec.clone())];
    if let Some(version) = &bundle.version {
        attrs.push(("version", version.clone()));
    }
    if let Some(code_base) = &bundle.code_base {
        attrs.push(("codebase", code_base.clone()));
    }
    if let Some(href) = &bundle.href {
        attrs.push(("href", href.clone()));
    }
    attrs
}

fn write_information<W: Write>(out: &mut XmlWriter<W>, information: &Information) -> Result<()> {
    let mut attrs = Attrs::new();
    if let Some(locale) = &information.locale {
        attrs.push(("locale", locale.clone()));
    }
    out.start_element("information", &attrs)?;

    if let Some(title) = &information.title {
        out.start_element("title", &[])?;
        out.characters(title)?;
        out.end_element()?;
    }
    if let Some(vendor) = &information.vendor {
        out.start_element("vendor", &[])?;
        out.characters(vendor)?;
        out.end_element()?;
    }
    if let Some(homepage) = &information.homepage {
        out.add_element("homepage", &[("href", homepage.clone())])?;
    }
    for description in &information.descriptions {
        write_description(out, description)?;
    }
    for icon in &information.icons {
        write_icon(out, icon)?;
    }
    if information.offline_allowed {
        out.add_element("offline-allowed", &[])?;
    }

    out.end_element()
}

fn write_description<W: Write>(out: &mut XmlWriter<W>, description: &Description) -> Result<()> {
    let mut attrs = Attrs::new();
    if let Some(kind) = description.kind {
        attrs.push(("kind", kind.as_str().to_string()));
    }
    out.start_element("description", &attrs)?;
    out.characters(&description.text)?;
    out.end_element()
}

// Attribute order inherited from the original task: kind, width, height,
// depth, size, version, href last.
fn write_icon<W: Write>(out: &mut XmlWriter<W>, icon: &Icon) -> Result<()> {
    let href = required(&icon.href, "href", "icon")?;

    let mut attrs = Attrs::new();
    if let Some(kind) = icon.kind {
        attrs.push(("kind", kind.as_str().to_string()));
    }
    if let Some(width) = icon.width {
        attrs.push(("width", width.to_string()));
    }
    if let Some(height) = icon.height {
        attrs.push(("height", height.to_string()));
    }
    if let Some(depth) = icon.depth {
        attrs.push(("depth", depth.to_string()));
    }
    if let Some(size) = icon.size {
        attrs.push(("size", size.to_string()));
    }
    if let Some(version) = &icon.version {
        attrs.push(("version", version.clone()));
    }
    attrs.push(("href", href.to_string()));
    out.add_element("icon", &attrs)
}

fn write_resources<W: Write>(out: &mut XmlWriter<W>, resources: &Resources) -> Result<()> {
    let mut attrs = Attrs::new();
    if let Some(os) = &resources.os {
        attrs.push(("os", os.clone()));
    }
    if let Some(arch) = &resources.arch {
        attrs.push(("arch", arch.clone()));
    }
    if let Some(locale) = &resources.locale {
        attrs.push(("locale", locale.clone()));
    }
    out.start_element("resources", &attrs)?;

    for j2se in &resources.j2ses {
        write_j2se(out, j2se)?;
    }
    for jar in &resources.jars {
        write_jar(out, jar)?;
    }
    for nativelib in &resources.nativelibs {
        write_native_lib(out, nativelib)?;
    }
    for extension in &resources.extensions {
        write_extension(out, extension)?;
    }
    for property in &resources.properties {
        write_property(out, property, "property")?;
    }
    for package in &resources.packages {
        write_package(out, package)?;
    }

    out.end_element()
}

fn write_j2se<W: Write>(out: &mut XmlWriter<W>, j2se: &J2se) -> Result<()> {
    let version = required(&j2se.version, "version", "j2se")?;

    let mut attrs: Attrs = vec![("version", version.to_string())];
    if let Some(href) = &j2se.href {
        attrs.push(("href", href.clone()));
    }
    if let Some(initial_heap) = j2se.initial_heap {
        attrs.push(("initial-heap-size", initial_heap.to_string()));
    }
    if let Some(max_heap) = j2se.max_heap {
        attrs.push(("max-heap-size", max_heap.to_string()));
    }

    if j2se.resources.is_empty() {
        out.add_element("j2se", &attrs)
    } else {
        out.start_element("j2se", &attrs)?;
        for resources in &j2se.resources {
            write_resources(out, resources)?;
        }
        out.end_element()
    }
}

fn write_jar<W: Write>(out: &mut XmlWriter<W>, jar: &Jar) -> Result<()> {
    let href = required(&jar.href, "href", "jar")?;

    let mut attrs: Attrs = vec![("href", href.to_string())];
    if let Some(version) = &jar.version {
        attrs.push(("version", version.clone()));
    }
    if jar.main {
        attrs.push(("main", "true".to_string()));
    }
    if jar.download == Download::Lazy {
        attrs.push(("download", "lazy".to_string()));
    }
    if let Some(size) = jar.size {
        attrs.push(("size", size.to_string()));
    }
    if let Some(part) = &jar.part {
        attrs.push(("part", part.clone()));
    }
    out.add_element("jar", &attrs)
}

fn write_native_lib<W: Write>(out: &mut XmlWriter<W>, nativelib: &NativeLib) -> Result<()> {
    let href = required(&nativelib.href, "href", "nativelib")?;

    let mut attrs: Attrs = vec![("href", href.to_string())];
    if let Some(version) = &nativelib.version {
        attrs.push(("version", version.clone()));
    }
    if nativelib.download == Download::Lazy {
        attrs.push(("download", "lazy".to_string()));
    }
    if let Some(size) = nativelib.size {
        attrs.push(("size", size.to_string()));
    }
    if let Some(part) = &nativelib.part {
        attrs.push(("part", part.clone()));
    }
    out.add_element("nativelib", &attrs)
}

fn write_extension<W: Write>(out: &mut XmlWriter<W>, extension: &Extension) -> Result<()> {
    let href = required(&extension.href, "href", "extension")?;

    let mut attrs: Attrs = vec![("href", href.to_string())];
    if let Some(version) = &extension.version {
        attrs.push(("version", version.clone()));
    }

    if extension.downloads.is_empty() {
        out.add_element("extension", &attrs)
    } else {
        out.start_element("extension", &attrs)?;
        for download in &extension.downloads {
            write_ext_download(out, download)?;
        }
        out.end_element()
    }
}

fn write_ext_download<W: Write>(out: &mut XmlWriter<W>, ext: &ExtDownload) -> Result<()> {
    let ext_part = required(&ext.ext_part, "ext-part", "ext-download")?;

    let mut attrs: Attrs = vec![("ext-part", ext_part.to_string())];
    if let Some(part) = &ext.part {
        attrs.push(("part", part.clone()));
    }
    if ext.download == Download::Lazy {
        attrs.push(("download", "lazy".to_string()));
    }
    out.add_element("ext-download", &attrs)
}

/// Shared by `<property>` (resources) and `<param>` (applet descriptor).
fn write_property<W: Write>(
    out: &mut XmlWriter<W>,
    property: &Property,
    element: &'static str,
) -> Result<()> {
    let name = required(&property.name, "name", element)?;
    let value = required(&property.value, "value", element)?;
    out.add_element(element, &[("name", name.to_string()), ("value", value.to_string())])
}

fn write_package<W: Write>(out: &mut XmlWriter<W>, package: &Package) -> Result<()> {
    let name = required(&package.name, "name", "package")?;
    let part = required(&package.part, "part", "package")?;

    let mut attrs: Attrs = vec![("name", name.to_string()), ("part", part.to_string())];
    if package.recursive {
        attrs.push(("recursive", "true".to_string()));
    }
    out.add_element("package", &attrs)
}

fn write_application_desc<W: Write>(out: &mut XmlWriter<W>, desc: &ApplicationDesc) -> Result<()> {
    let mut attrs = Attrs::new();
    if let Some(main_class) = &desc.main_class {
        attrs.push(("main-class", main_class.clone()));
    }

    if desc.arguments.is_empty() {
        out.add_element("application-desc", &attrs)
    } else {
        out.start_element("application-desc", &attrs)?;
        for argument in &desc.arguments {
            out.start_element("argument", &[])?;
            out.characters(argument)?;
            out.end_element()?;
        }
        out.end_element()
    }
}

fn write_applet_desc<W: Write>(out: &mut XmlWriter<W>, desc: &AppletDesc) -> Result<()> {
    let main_class = required(&desc.main_class, "main-class", "applet-desc")?;
    let name = required(&desc.name, "name", "applet-desc")?;
    // Zero is rejected like "unset": a zero-sized applet is never valid.
    let width = desc
        .width
        .filter(|w| *w != 0)
        .ok_or_else(|| missing("width", "applet-desc"))?;
    let height = desc
        .height
        .filter(|h| *h != 0)
        .ok_or_else(|| missing("height", "applet-desc"))?;

    let mut attrs: Attrs = vec![
        ("main-class", main_class.to_string()),
        ("name", name.to_string()),
        ("width", width.to_string()),
        ("height", height.to_string()),
    ];
    if let Some(document_base) = &desc.document_base {
        attrs.push(("documentbase", document_base.clone()));
    }

    if desc.params.is_empty() {
        out.add_element("applet-desc", &attrs)
    } else {
        out.start_element("applet-desc", &attrs)?;
        for param in &desc.params {
            write_property(out, param, "param")?;
        }
        out.end_element()
    }
}

fn write_installer_desc<W: Write>(out: &mut XmlWriter<W>, desc: &InstallerDesc) -> Result<()> {
    let mut attrs = Attrs::new();
    if let Some(main_class) = &desc.main_class {
        attrs.push(("main-class", main_class.clone()));
    }
    out.add_element("installer-desc", &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bundle: &Bundle) -> String {
        let mut buf = Vec::new();
        bundle.write_to(&mut buf).expect("serialize bundle");
        String::from_utf8(buf).expect("valid UTF-8")
    }

    fn minimal_bundle() -> Bundle {
        let mut bundle = Bundle::new();
        bundle.create_information().title = Some("App".into());
        bundle.mark_component().expect("component");
        bundle
    }

    #[test]
    fn root_element_carries_spec_and_optional_attributes() {
        let mut bundle = minimal_bundle();
        bundle.set_version("1.2");
        bundle.set_code_base("https://acme.example/app/");
        let xml = render(&bundle);
        assert!(xml.contains(
            "<jnlp spec=\"1.0+\" version=\"1.2\" codebase=\"https://acme.example/app/\">"
        ));
        assert!(xml.ends_with("</jnlp>\n"));
    }

    #[test]
    fn component_bundle_emits_empty_marker() {
        let xml = render(&minimal_bundle());
        assert!(xml.contains("<component-desc/>"));
    }

    #[test]
    fn security_element_only_when_a_flag_is_set() {
        let mut bundle = minimal_bundle();
        assert!(!render(&bundle).contains("<security>"));

        bundle.set_all_permissions(true);
        let xml = render(&bundle);
        assert!(xml.contains("<security><all-permissions/></security>"));
        assert!(!xml.contains("j2ee-application-client-permissions"));
    }

    #[test]
    fn resources_locale_uses_the_locale_attribute() {
        let mut bundle = minimal_bundle();
        let resources = bundle.create_resources();
        resources.os = Some("Linux".into());
        resources.arch = Some("x86_64".into());
        resources.locale = Some("fr".into());
        let xml = render(&bundle);
        assert!(xml.contains("<resources os=\"Linux\" arch=\"x86_64\" locale=\"fr\">"));
    }

    #[test]
    fn j2se_without_version_fails() {
        let mut bundle = minimal_bundle();
        bundle.create_resources().j2ses.push(J2se {
            href: Some("http://java.sun.com/products/autodl/j2se".into()),
            ..J2se::default()
        });
        let err = bundle.write_to(Vec::new()).expect_err("missing version");
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn j2se_with_nested_resources_nests_them() {
        let mut bundle = minimal_bundle();
        let mut nested = Resources::default();
        nested.jars.push(Jar {
            href: Some("linux.jar".into()),
            ..Jar::default()
        });
        bundle.create_resources().j2ses.push(J2se {
            version: Some("1.6+".into()),
            max_heap: Some(268435456),
            resources: vec![nested],
            ..J2se::default()
        });
        let xml = render(&bundle);
        assert!(xml.contains(
            "<j2se version=\"1.6+\" max-heap-size=\"268435456\"><resources><jar href=\"linux.jar\"/></resources></j2se>"
        ));
    }

    #[test]
    fn applet_desc_rejects_zero_width() {
        let mut bundle = Bundle::new();
        bundle.create_information().title = Some("App".into());
        {
            let desc = bundle.create_applet_desc().expect("applet");
            desc.main_class = Some("com.acme.Applet".into());
            desc.name = Some("acme".into());
            desc.width = Some(0);
            desc.height = Some(200);
        }
        let err = bundle.write_to(Vec::new()).expect_err("zero width");
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn argument_text_is_escaped() {
        let mut bundle = Bundle::new();
        bundle.create_information().title = Some("App".into());
        let desc = bundle.create_application_desc().expect("application");
        desc.arguments.push("--name=<you & me>".into());
        let xml = render(&bundle);
        assert!(xml.contains("<argument>--name=&lt;you &amp; me&gt;</argument>"));
    }
}
