//! Media types of image manifests, indexes, configs and layers.
//!
//! OCI types follow `media-types.md` of the OCI image spec, Docker types
//! follow Image Manifest Version 2, Schema 2 of the distribution project.

use serde::Serialize;
use std::fmt;

/// Media types defined by OCI image spec v1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum OciV1 {
    ImageManifest,
    ImageIndex,
    ImageConfig,
    /// Layer, as a tar archive
    ImageLayerTar,
    /// Layer, as a tar archive compressed with gzip
    ImageLayerGzip,
    /// Layer, as a tar archive compressed with zstd
    ImageLayerZstd,
    Descriptor,
    LayoutHeader,
    /// Empty for unused descriptors
    Empty,
    ImageLayerNondistributable,
    ImageLayerNondistributableGzip,
    ImageLayerNondistributableZstd,
}

impl OciV1 {
    pub const ALL: [OciV1; 12] = [
        OciV1::ImageManifest,
        OciV1::ImageIndex,
        OciV1::ImageConfig,
        OciV1::ImageLayerTar,
        OciV1::ImageLayerGzip,
        OciV1::ImageLayerZstd,
        OciV1::Descriptor,
        OciV1::LayoutHeader,
        OciV1::Empty,
        OciV1::ImageLayerNondistributable,
        OciV1::ImageLayerNondistributableGzip,
        OciV1::ImageLayerNondistributableZstd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OciV1::ImageManifest => "application/vnd.oci.image.manifest.v1+json",
            OciV1::ImageIndex => "application/vnd.oci.image.index.v1+json",
            OciV1::ImageConfig => "application/vnd.oci.image.config.v1+json",
            OciV1::ImageLayerTar => "application/vnd.oci.image.layer.v1.tar",
            OciV1::ImageLayerGzip => "application/vnd.oci.image.layer.v1.tar+gzip",
            OciV1::ImageLayerZstd => "application/vnd.oci.image.layer.v1.tar+zstd",
            OciV1::Descriptor => "application/vnd.oci.descriptor.v1+json",
            OciV1::LayoutHeader => "application/vnd.oci.layout.header.v1+json",
            OciV1::Empty => "application/vnd.oci.empty.v1+json",
            OciV1::ImageLayerNondistributable => {
                "application/vnd.oci.image.layer.nondistributable.v1.tar"
            }
            OciV1::ImageLayerNondistributableGzip => {
                "application/vnd.oci.image.layer.nondistributable.v1.tar+gzip"
            }
            OciV1::ImageLayerNondistributableZstd => {
                "application/vnd.oci.image.layer.nondistributable.v1.tar+zstd"
            }
        }
    }

    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == media_type)
    }

    /// The Docker V2 Schema 2 equivalent, if there is one
    pub fn docker_equivalent(&self) -> Option<DockerV2S2> {
        compatibility_matrix()
            .into_iter()
            .find_map(|(oci, docker)| (oci == *self).then_some(docker))
    }
}

/// Media types defined by Image Manifest Version 2, Schema 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum DockerV2S2 {
    DistributionManifest,
    /// Manifest list, aka "fat manifest"
    DistributionManifestList,
    ContainerImage,
    /// Layer, as a gzipped tar
    ImageRootfsDiffGzip,
}

impl DockerV2S2 {
    pub const ALL: [DockerV2S2; 4] = [
        DockerV2S2::DistributionManifest,
        DockerV2S2::DistributionManifestList,
        DockerV2S2::ContainerImage,
        DockerV2S2::ImageRootfsDiffGzip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DockerV2S2::DistributionManifest => {
                "application/vnd.docker.distribution.manifest.v2+json"
            }
            DockerV2S2::DistributionManifestList => {
                "application/vnd.docker.distribution.manifest.list.v2+json"
            }
            DockerV2S2::ContainerImage => "application/vnd.docker.container.image.v1+json",
            DockerV2S2::ImageRootfsDiffGzip => "application/vnd.docker.image.rootfs.diff.tar.gzip",
        }
    }

    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == media_type)
    }

    pub fn oci_equivalent(&self) -> Option<OciV1> {
        compatibility_matrix()
            .into_iter()
            .find_map(|(oci, docker)| (docker == *self).then_some(oci))
    }
}

/// Pairs of interchangeable OCI and Docker media types
pub fn compatibility_matrix() -> [(OciV1, DockerV2S2); 4] {
    [
        (OciV1::ImageManifest, DockerV2S2::DistributionManifest),
        (OciV1::ImageIndex, DockerV2S2::DistributionManifestList),
        (OciV1::ImageConfig, DockerV2S2::ContainerImage),
        (OciV1::ImageLayerGzip, DockerV2S2::ImageRootfsDiffGzip),
    ]
}

impl From<OciV1> for &'static str {
    fn from(media_type: OciV1) -> Self {
        media_type.as_str()
    }
}

impl From<DockerV2S2> for &'static str {
    fn from(media_type: DockerV2S2) -> Self {
        media_type.as_str()
    }
}

impl fmt::Display for OciV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DockerV2S2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
