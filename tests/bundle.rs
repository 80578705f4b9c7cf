use jnlpgen::model::{AppletDesc, InstallerDesc};
use jnlpgen::{Bundle, Descriptor, Error, DEFAULT_SPEC};

#[test]
fn new_bundle_defaults() {
    let bundle = Bundle::new();
    assert_eq!(bundle.spec, DEFAULT_SPEC);
    assert!(bundle.version.is_none());
    assert!(bundle.informations.is_empty());
    assert!(bundle.resources.is_empty());
    assert!(bundle.descriptor.is_none());
    assert!(!bundle.all_permissions);
    assert!(!bundle.j2ee_permissions);
}

#[test]
fn second_bundle_kind_fails_and_preserves_the_first() {
    let mut bundle = Bundle::new();
    {
        let desc = bundle.create_applet_desc().expect("first kind");
        desc.main_class = Some("com.acme.Applet".into());
        desc.name = Some("acme".into());
        desc.width = Some(640);
        desc.height = Some(480);
    }

    for result in [
        bundle.mark_component().err(),
        bundle.create_application_desc().err(),
        bundle.create_installer_desc().err(),
    ] {
        let err = result.expect("conflicting kind must fail");
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(err.to_string(), "configuration error: cannot describe multiple packages");
    }

    match &bundle.descriptor {
        Some(Descriptor::Applet(desc)) => {
            assert_eq!(desc.name.as_deref(), Some("acme"));
            assert_eq!(desc.width, Some(640));
        }
        other => panic!("expected applet descriptor, got {other:?}"),
    }
}

#[test]
fn configuration_calls_have_no_order_dependency() {
    // Descriptor first, information and resources afterwards.
    let mut bundle = Bundle::new();
    bundle.create_installer_desc().expect("installer").main_class = Some("com.acme.Install".into());
    bundle.create_resources();
    bundle.create_information().title = Some("Installer".into());
    bundle.set_spec("6.0+");
    bundle.set_href("https://acme.example/install.jnlp");

    let mut out = Vec::new();
    bundle.write_to(&mut out).expect("serialize");
    let xml = String::from_utf8(out).expect("UTF-8");
    assert!(xml.contains("spec=\"6.0+\""));
    assert!(xml.contains("<installer-desc main-class=\"com.acme.Install\"/>"));
}

#[test]
fn bundle_round_trips_through_json() {
    let mut bundle = Bundle::new();
    bundle.set_version("0.9");
    bundle.create_information().title = Some("App".into());
    bundle.descriptor = Some(Descriptor::Applet(AppletDesc {
        main_class: Some("com.acme.Applet".into()),
        name: Some("acme".into()),
        width: Some(640),
        height: Some(480),
        ..AppletDesc::default()
    }));

    let json = serde_json::to_string(&bundle).expect("to JSON");
    let parsed: Bundle = serde_json::from_str(&json).expect("from JSON");
    assert_eq!(parsed.version.as_deref(), Some("0.9"));
    match parsed.descriptor {
        Some(Descriptor::Applet(desc)) => assert_eq!(desc.width, Some(640)),
        other => panic!("expected applet descriptor, got {other:?}"),
    }
}

#[test]
fn installer_descriptor_from_json_description() {
    let json = r#"{
        "informations": [ { "title": "Setup" } ],
        "descriptor": { "installer": { "main_class": "com.acme.Setup" } }
    }"#;
    let bundle: Bundle = serde_json::from_str(json).expect("parse");
    match bundle.descriptor {
        Some(Descriptor::Installer(InstallerDesc { ref main_class })) => {
            assert_eq!(main_class.as_deref(), Some("com.acme.Setup"));
        }
        other => panic!("expected installer descriptor, got {other:?}"),
    }
}
