mod linux;
mod unix;
mod windows;

use tracing::debug;

use crate::command::{CommandRunner, SystemRunner};
use crate::device::{Drive, DriveList, UnixDrive, WindowsDrive};
use crate::error::{Error, Failure, Result};
use crate::Platform;

/// Runs drive detection through a [`CommandRunner`] on behalf of a [`Platform`].
///
/// The free functions of this crate use [`DriveDetector::default`], i.e. the real system
/// utilities on the current platform.
#[derive(Debug, Clone)]
pub struct DriveDetector<R = SystemRunner> {
    runner: R,
    platform: Platform,
}

impl Default for DriveDetector {
    fn default() -> Self {
        Self::new(SystemRunner, Platform::current())
    }
}

impl<R: CommandRunner> DriveDetector<R> {
    pub const fn new(runner: R, platform: Platform) -> Self {
        Self { runner, platform }
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Mounted filesystems from `df` and `mount`.
    pub async fn unix_drives(&self) -> Result<Vec<UnixDrive>> {
        self.unix_inner().await.map_err(|e| self.error(e))
    }

    /// Logical disks from `wmic logicaldisk`.
    pub async fn windows_drives(&self) -> Result<Vec<WindowsDrive>> {
        self.windows_inner().await.map_err(|e| self.error(e))
    }

    /// Block device tree from `lsblk`. Fails without running anything when not on Linux.
    pub async fn linux_drives(&self) -> Result<Vec<Drive>> {
        self.linux_inner().await.map_err(|e| self.error(e))
    }

    /// Drive list of the platform: `wmic` on Windows, `df` + `mount` everywhere else.
    pub async fn drives(&self) -> Result<DriveList> {
        if self.platform.is_windows() {
            self.windows_drives().await.map(DriveList::Windows)
        } else {
            self.unix_drives().await.map(DriveList::Unix)
        }
    }

    /// Same as [`drives`](Self::drives), limited to removable/USB drives.
    pub async fn usb_drives(&self) -> Result<DriveList> {
        self.drives().await.map(DriveList::usb_only)
    }

    async fn unix_inner(&self) -> Result<Vec<UnixDrive>, Failure> {
        let (df, mount) = tokio::try_join!(
            self.runner.run(unix::DF, &[]),
            self.runner.run(unix::MOUNT, &[])
        )?;

        let drives = unix::drives(&df, &mount);
        debug!("Found {} mounted drives", drives.len());

        Ok(drives)
    }

    async fn windows_inner(&self) -> Result<Vec<WindowsDrive>, Failure> {
        let output = self
            .runner
            .run(windows::WMIC, &windows::WMIC_ARGS)
            .await?;

        let drives = windows::drives(&output);
        debug!("Found {} logical disks", drives.len());

        Ok(drives)
    }

    async fn linux_inner(&self) -> Result<Vec<Drive>, Failure> {
        if !self.platform.is_linux() {
            return Err(Failure::UnsupportedPlatform(self.platform));
        }

        let output = self.runner.run(linux::LSBLK, &linux::LSBLK_ARGS).await?;

        let drives = linux::lsblk(&output)?;
        debug!("Found {} block devices", drives.len());

        Ok(drives)
    }

    fn error(&self, failure: Failure) -> Error {
        Error::new(self.platform, failure)
    }
}
