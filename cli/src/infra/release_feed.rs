//! Release feed infrastructure: implements `ReleaseFeed` using GitHub
//! releases.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use self_update::backends::github::ReleaseList;
use self_update::update::Release;
use tracing::{debug, info};

use crate::application::ports::ReleaseFeed;
use crate::domain::instance::EXECUTABLE_NAME;
use crate::domain::release::{architecture_tag, is_platform_asset, release_tag};
use crate::domain::{FeedIdentity, UpdateError};

/// Upper bound on a release archive download.
const MAX_ARCHIVE_BYTES: u64 = 200 * 1024 * 1024;

/// Uses the GitHub releases API to find and stage zurg releases.
pub struct GithubReleaseFeed {
    staging_binary: PathBuf,
    token: Option<String>,
}

impl GithubReleaseFeed {
    #[must_use]
    pub fn new(staging_binary: impl Into<PathBuf>, token: Option<String>) -> Self {
        Self {
            staging_binary: staging_binary.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn releases(&self, feed: &FeedIdentity) -> Result<Vec<Release>> {
        let mut builder = ReleaseList::configure();
        builder.repo_owner(&feed.owner).repo_name(&feed.repo);
        if let Some(token) = &self.token {
            builder.auth_token(token);
        }
        builder
            .build()
            .context("failed to configure release list")?
            .fetch()
            .with_context(|| format!("failed to fetch releases from {feed}"))
    }

    fn download(&self, url: &str, dest: &mut impl std::io::Write) -> Result<u64> {
        let mut request = ureq::get(url)
            .set("Accept", "application/octet-stream")
            .set("User-Agent", concat!("zurg-updater/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("token {token}"));
        }
        let response = request.call().context("failed to download release asset")?;
        copy_capped(response.into_reader(), dest, MAX_ARCHIVE_BYTES)
    }
}

/// Copy at most `limit` bytes, failing rather than truncating when the
/// source holds more.
fn copy_capped(source: impl Read, dest: &mut impl std::io::Write, limit: u64) -> Result<u64> {
    let copied = std::io::copy(&mut source.take(limit + 1), dest)
        .context("failed to read release asset")?;
    if copied > limit {
        return Err(UpdateError::ArchiveTooLarge { limit }.into());
    }
    Ok(copied)
}

impl ReleaseFeed for GithubReleaseFeed {
    fn latest_release(&self, feed: &FeedIdentity) -> Result<String> {
        let releases = self.releases(feed)?;
        let latest = releases
            .first()
            .ok_or_else(|| UpdateError::NoReleases(feed.to_string()))?;
        Ok(release_tag(&latest.version))
    }

    fn architecture(&self) -> Result<String> {
        let tag = architecture_tag(std::env::consts::OS, std::env::consts::ARCH)?;
        Ok(tag.to_string())
    }

    fn download_and_unpack(&self, feed: &FeedIdentity, version: &str, arch: &str) -> Result<()> {
        let releases = self.releases(feed)?;
        let release = releases
            .iter()
            .find(|r| release_tag(&r.version) == version)
            .ok_or_else(|| UpdateError::ReleaseNotFound {
                version: version.to_string(),
            })?;
        let asset = release
            .assets
            .iter()
            .find(|a| is_platform_asset(&a.name, arch))
            .ok_or_else(|| UpdateError::MissingAsset {
                version: version.to_string(),
                arch: arch.to_string(),
            })?;

        let staging_dir = self
            .staging_binary
            .parent()
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(staging_dir)
            .with_context(|| format!("creating {}", staging_dir.display()))?;

        let mut archive = tempfile::NamedTempFile::new_in(staging_dir)
            .context("creating temporary archive file")?;
        info!(asset = %asset.name, version, "downloading zurg release");
        let bytes = self.download(&asset.download_url, archive.as_file_mut())?;
        debug!(bytes, "release asset downloaded");

        let unpack_dir =
            tempfile::tempdir_in(staging_dir).context("creating temporary unpack directory")?;
        self_update::Extract::from_source(archive.path())
            .archive(self_update::ArchiveKind::Zip)
            .extract_file(unpack_dir.path(), EXECUTABLE_NAME)
            .with_context(|| format!("extracting {EXECUTABLE_NAME} from {}", asset.name))?;

        let unpacked = unpack_dir.path().join(EXECUTABLE_NAME);
        set_executable(&unpacked)?;
        std::fs::rename(&unpacked, &self.staging_binary)
            .with_context(|| format!("staging {}", self.staging_binary.display()))?;
        info!(path = %self.staging_binary.display(), version, "release staged");
        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .with_context(|| format!("cannot set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
