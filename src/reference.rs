use crate::{
    digest::Digest,
    error::{ReferenceError, Result},
    grammar,
};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_TAG: &str = "latest";

/// Structural components of a container image reference.
///
/// Absent components are `None`; the parser never fills in defaults such as
/// the `latest` tag or the Docker Hub registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
}

impl ImageReference {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            registry: None,
            namespace: None,
            repository: repository.into(),
            tag: None,
            digest: None,
        }
    }

    pub fn with_registry(self, registry: impl Into<String>) -> Self {
        Self {
            registry: non_empty(registry.into()),
            ..self
        }
    }

    pub fn with_namespace(self, namespace: impl Into<String>) -> Self {
        Self {
            namespace: non_empty(namespace.into()),
            ..self
        }
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        Self {
            tag: non_empty(tag.into()),
            ..self
        }
    }

    /// Attach a digest, rejecting anything not shaped like `algorithm:hex`
    pub fn with_digest(self, digest: impl Into<String>) -> Result<Self> {
        let digest = digest.into();
        if !digest.is_empty() && !grammar::is_digest(&digest) {
            return Err(ReferenceError::MalformedDigest(digest));
        }

        Ok(Self {
            digest: non_empty(digest),
            ..self
        })
    }

    /// Assemble a reference from already split parts
    pub(crate) fn from_parts(
        registry: Option<&str>,
        namespace: Option<String>,
        repository: &str,
        tag: Option<&str>,
        digest: Option<&str>,
    ) -> Self {
        Self {
            registry: registry.map(str::to_string),
            namespace: namespace.filter(|ns| !ns.is_empty()),
            repository: repository.to_string(),
            tag: tag.map(str::to_string),
            digest: digest.map(str::to_string),
        }
    }

    pub fn registry(&self) -> Option<&str> {
        self.registry.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// The tag, or `latest` when none was given
    pub fn tag_or_default(&self) -> &str {
        self.tag().unwrap_or(DEFAULT_TAG)
    }

    /// Typed view over the digest, `None` when absent or not `algorithm:hex`
    pub fn parsed_digest(&self) -> Option<Digest> {
        self.digest().and_then(|digest| digest.parse().ok())
    }

    /// `[registry/][namespace/]repository` without tag or digest
    pub fn name(&self) -> String {
        [self.registry(), self.namespace(), Some(self.repository())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("/")
    }

    /// All five components by name in reference order, absent ones as
    /// empty strings
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("registry", self.registry().unwrap_or_default()),
            ("namespace", self.namespace().unwrap_or_default()),
            ("repository", self.repository()),
            ("tag", self.tag().unwrap_or_default()),
            ("digest", self.digest().unwrap_or_default()),
        ]
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())?;
        if let Some(tag) = self.tag() {
            write!(f, ":{tag}")?;
        }
        if let Some(digest) = self.digest() {
            write!(f, "@{digest}")?;
        }
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const FAKE_DIGEST: &str =
        "sha256:b330d9e6aa681d5fe2b11fcfe0ca51e1801d837dd26804b0ead9a09ca8246c40";

    mod public {
        use super::*;

        #[test]
        fn test_display_repository() {
            assert_eq!(ImageReference::new("ubuntu").to_string(), "ubuntu");
        }

        #[test]
        fn test_display_namespace() {
            let image = ImageReference::new("ubuntu").with_namespace("library");
            assert_eq!(image.to_string(), "library/ubuntu");
        }

        #[test]
        fn test_display_registry_namespace_tag() {
            let image = ImageReference::new("ubuntu")
                .with_namespace("library")
                .with_registry("docker.io")
                .with_tag("22.04");
            assert_eq!(image.to_string(), "docker.io/library/ubuntu:22.04");
        }

        #[test]
        fn test_display_tag_and_digest() -> Result<()> {
            let image = ImageReference::new("ubuntu")
                .with_tag("22.04")
                .with_digest(FAKE_DIGEST)?;
            assert_eq!(image.to_string(), format!("ubuntu:22.04@{FAKE_DIGEST}"));
            Ok(())
        }

        #[test]
        fn test_display_registry_digest() -> Result<()> {
            let image = ImageReference::new("ubuntu")
                .with_registry("reg.io")
                .with_digest(FAKE_DIGEST)?;
            assert_eq!(image.to_string(), format!("reg.io/ubuntu@{FAKE_DIGEST}"));
            Ok(())
        }

        #[test]
        fn test_with_digest_invalid() {
            let error = ImageReference::new("app").with_digest("sha:XYZ");
            assert_eq!(
                error,
                Err(ReferenceError::MalformedDigest("sha:XYZ".to_string()))
            );
        }

        #[test]
        fn test_empty_builder_values_are_absent() -> Result<()> {
            let image = ImageReference::new("app")
                .with_registry("")
                .with_namespace("")
                .with_tag("")
                .with_digest("")?;
            assert_eq!(image, ImageReference::new("app"));
            Ok(())
        }

        #[test]
        fn test_tag_or_default() {
            assert_eq!(ImageReference::new("app").tag_or_default(), "latest");
            assert_eq!(
                ImageReference::new("app").with_tag("9.3").tag_or_default(),
                "9.3"
            );
        }

        #[test]
        fn test_parsed_digest() -> Result<()> {
            let image = ImageReference::new("app").with_digest(FAKE_DIGEST)?;
            let digest = image.parsed_digest().expect("digest is present");
            assert_eq!(digest.algorithm(), "sha256");
            assert!(ImageReference::new("app").parsed_digest().is_none());
            Ok(())
        }

        #[test]
        fn test_fields() -> Result<()> {
            let image = ImageReference::new("app")
                .with_registry("reg.io")
                .with_namespace("org")
                .with_tag("9.3")
                .with_digest(FAKE_DIGEST)?;
            assert_eq!(
                image.fields(),
                [
                    ("registry", "reg.io"),
                    ("namespace", "org"),
                    ("repository", "app"),
                    ("tag", "9.3"),
                    ("digest", FAKE_DIGEST),
                ]
            );
            Ok(())
        }

        #[test]
        fn test_fields_absent_are_empty() {
            assert_eq!(
                ImageReference::new("app").fields(),
                [
                    ("registry", ""),
                    ("namespace", ""),
                    ("repository", "app"),
                    ("tag", ""),
                    ("digest", ""),
                ]
            );
        }

        #[test]
        fn test_clone_is_equal() {
            let image = ImageReference::new("app")
                .with_registry("reg.io")
                .with_namespace("org")
                .with_tag("9.3");
            assert_eq!(image.clone(), image);
        }

        #[test]
        fn test_serialize_skips_absent() -> Result<()> {
            let image = ImageReference::new("web").with_tag("4.13");
            assert_eq!(
                serde_json::to_value(&image)?,
                serde_json::json!({ "repository": "web", "tag": "4.13" })
            );
            Ok(())
        }
    }

    mod private {
        use super::*;

        #[test]
        fn test_from_parts_drops_empty_namespace() {
            let image = ImageReference::from_parts(None, Some(String::new()), "web", None, None);
            assert_eq!(image.namespace(), None);
        }

        #[test]
        fn test_non_empty() {
            assert_eq!(non_empty(String::new()), None);
            assert_eq!(non_empty("a".to_string()), Some("a".to_string()));
        }
    }
}
