use regex::Regex;
use std::sync::LazyLock;

pub const LOCALHOST: &str = "localhost";

/// Characters allowed in a namespace or repository path segment
pub const PATH_COMPONENT: &str = r"^[a-z0-9._-]+$";
/// Dot separated hostname labels with an optional numeric port
pub const REGISTRY: &str = r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*(:[0-9]+)?$";
/// Tag grammar of the OCI distribution spec
pub const TAG: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$";
/// Two-part digest shape, length is not checked here
pub const DIGEST: &str = r"^[a-z0-9]+:[a-f0-9]+$";

static PATH_COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PATH_COMPONENT).expect("to create a regex from pattern"));
static REGISTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REGISTRY).expect("to create a regex from pattern"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG).expect("to create a regex from pattern"));
static DIGEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIGEST).expect("to create a regex from pattern"));

/// Whether the first segment of a multi-segment path names a registry host.
///
/// This is a heuristic: `my.org/app` is read as registry `my.org`, there is no
/// way to tell a dotted namespace apart from a domain without a lookup.
pub fn looks_like_registry(segment: &str) -> bool {
    segment.contains('.') || segment.contains(':') || segment.eq_ignore_ascii_case(LOCALHOST)
}

pub fn is_path_component(segment: &str) -> bool {
    PATH_COMPONENT_RE.is_match(segment)
}

pub fn is_registry(host: &str) -> bool {
    REGISTRY_RE.is_match(host)
}

pub fn is_tag(tag: &str) -> bool {
    TAG_RE.is_match(tag)
}

pub fn is_digest(digest: &str) -> bool {
    DIGEST_RE.is_match(digest)
}
