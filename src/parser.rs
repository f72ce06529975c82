use crate::{
    error::{Field, ReferenceError, Result},
    grammar,
    reference::ImageReference,
};
use std::str::FromStr;
use tracing::{debug, trace};

/// How strictly a reference is checked against the grammar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Reject anything outside the reference grammar
    #[default]
    Strict,
    /// Best-effort split that never rejects non-empty input
    Rough,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    mode: Mode,
}

/// Parse `[registry/][namespace/]repository[:tag][@digest]` strictly
pub fn parse(image: &str) -> Result<ImageReference> {
    Parser::strict().parse(image)
}

/// Parse leniently, only the empty string is rejected
pub fn rough_parse(image: &str) -> Result<ImageReference> {
    Parser::rough().parse(image)
}

impl Parser {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn rough() -> Self {
        Self::new(Mode::Rough)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn parse(&self, image: &str) -> Result<ImageReference> {
        let reference = match self.mode {
            Mode::Strict => Self::parse_strict(image)?,
            Mode::Rough => Self::parse_rough(image)?,
        };

        trace!(image, mode = ?self.mode, ?reference, "parsed image reference");
        Ok(reference)
    }

    fn parse_strict(image: &str) -> Result<ImageReference> {
        if image.trim().is_empty() {
            return Err(ReferenceError::EmptyReference);
        }

        let (name, tag, digest) = Self::split_ref(image);

        if let Some(digest) = digest {
            if !grammar::is_digest(digest) {
                return Err(ReferenceError::MalformedDigest(digest.to_string()));
            }
        }
        if let Some(tag) = tag {
            if !grammar::is_tag(tag) {
                return Err(invalid(Field::Tag, tag));
            }
        }

        let mut parts: Vec<&str> = name.split('/').collect();
        let registry = Self::split_registry(&mut parts);
        let repository = parts.pop().unwrap_or_default();

        if repository.is_empty() {
            return Err(ReferenceError::EmptyRepository(image.to_string()));
        }
        if parts.iter().any(|part| part.is_empty()) {
            let field = if registry.is_none() && parts[0].is_empty() {
                Field::Registry
            } else {
                Field::Namespace
            };
            return Err(ReferenceError::EmptyPathComponent {
                field,
                image: image.to_string(),
            });
        }

        if let Some(registry) = registry {
            if !grammar::is_registry(registry) {
                return Err(invalid(Field::Registry, registry));
            }
        }
        if let Some(part) = parts.iter().find(|part| !grammar::is_path_component(part)) {
            return Err(invalid(Field::Namespace, part));
        }
        if !grammar::is_path_component(repository) {
            return Err(invalid(Field::Repository, repository));
        }

        Ok(ImageReference::from_parts(
            registry,
            Some(parts.join("/")),
            repository,
            tag,
            digest,
        ))
    }

    fn parse_rough(raw: &str) -> Result<ImageReference> {
        if raw.is_empty() {
            return Err(ReferenceError::EmptyReference);
        }

        let image = raw.trim();
        if image.is_empty() {
            debug!(raw, "blank reference, using it as the repository");
            return Ok(ImageReference::new(raw));
        }

        let (name, tag, digest) = Self::split_ref(image);

        let digest = digest.filter(|digest| {
            let keep = digest.contains(':');
            if !keep {
                debug!(image, digest, "dropping candidate that is not digest shaped");
            }
            keep
        });
        let tag = tag.filter(|tag| !tag.is_empty());

        let mut parts: Vec<&str> = name.split('/').filter(|part| !part.is_empty()).collect();
        let registry = Self::split_registry(&mut parts);

        let Some(repository) = parts.pop() else {
            debug!(image, "no repository found, using the whole reference");
            return Ok(ImageReference::new(image));
        };

        Ok(ImageReference::from_parts(
            registry,
            Some(parts.join("/")),
            repository,
            tag,
            digest,
        ))
    }

    /// Split `name[:tag][@digest]`; a `:` followed by a `/` belongs to a
    /// registry port, not a tag
    fn split_ref(image: &str) -> (&str, Option<&str>, Option<&str>) {
        let (image, digest) = match image.rfind('@') {
            Some(idx) => (&image[..idx], Some(&image[idx + 1..])),
            None => (image, None),
        };

        if let Some(idx) = image.rfind(':') {
            if image[idx..].find('/').is_none() {
                return (&image[..idx], Some(&image[idx + 1..]), digest);
            }
        }

        (image, None, digest)
    }

    /// Remove and return the leading registry host, if the path has one
    fn split_registry<'a>(parts: &mut Vec<&'a str>) -> Option<&'a str> {
        if parts.len() > 1 && grammar::looks_like_registry(parts[0]) {
            Some(parts.remove(0))
        } else {
            None
        }
    }
}

impl FromStr for ImageReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

fn invalid(field: Field, value: &str) -> ReferenceError {
    ReferenceError::InvalidCharacter {
        field,
        value: value.to_string(),
    }
}
