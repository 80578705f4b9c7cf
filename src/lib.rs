//! JNLP descriptor generator.
//!
//! This crate builds Java Network Launching Protocol descriptors from a
//! typed document model and serializes them as XML:
//!
//! - [`model`] – value-holder entities for every JNLP element
//! - [`bundle`] – the [`Bundle`] assembler and the bundle-kind [`Descriptor`]
//! - [`writer`] – a minimal streaming XML writer
//! - [`generator`] – the deterministic bundle-to-XML serializer
//!
//! The binary `jnlpgen` reads a JSON bundle description and writes the
//! `.jnlp` file.
//!
//! ```
//! use jnlpgen::Bundle;
//!
//! let mut bundle = Bundle::new();
//! let info = bundle.create_information();
//! info.title = Some("App".into());
//! info.vendor = Some("Acme".into());
//! bundle.create_resources().jars.push(jnlpgen::model::Jar {
//!     href: Some("app.jar".into()),
//!     main: true,
//!     ..Default::default()
//! });
//! bundle.create_application_desc()?.main_class = Some("com.acme.Main".into());
//!
//! let mut out = Vec::new();
//! bundle.write_to(&mut out)?;
//! # Ok::<(), jnlpgen::Error>(())
//! ```

pub mod bundle;
pub mod error;
pub mod generator;
pub mod model;
pub mod writer;

pub use bundle::{Bundle, Descriptor, DEFAULT_SPEC};
pub use error::{Error, Result};
