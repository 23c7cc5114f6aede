//! List the drives of a system by asking the usual system utilities.
//!
//! - Windows: `wmic logicaldisk`
//! - Linux, macOS and other Unix-like systems: `df` and `mount`
//! - Linux only: the full block device tree from `lsblk`
//!
//! # Usage
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     let drives = bb_drivedetect::detect_usb_drives().await.unwrap();
//!     for path in drives.paths() {
//!         println!("{path}");
//!     }
//! }
//! ```

mod command;
mod device;
mod error;
mod pal;
mod platform;

pub use command::{CommandRunner, SystemRunner};
pub use device::{
    BlockAttributes, Child, DEFAULT_NAME, Drive, DriveKind, DriveList, FUSE_BLOCK_TYPE,
    REMOVABLE_DRIVE_TYPE, Removable, UnixDrive, WindowsDrive,
};
pub use error::{Error, Failure, Result};
pub use pal::DriveDetector;
pub use platform::Platform;

/// Drives mounted on a Unix-like system, from `df` and `mount`.
pub async fn detect_drives_on_unix() -> Result<Vec<UnixDrive>> {
    DriveDetector::default().unix_drives().await
}

/// Logical disks of a Windows system, from `wmic`.
pub async fn detect_drives_on_windows() -> Result<Vec<WindowsDrive>> {
    DriveDetector::default().windows_drives().await
}

/// All block devices with their partitions, from `lsblk`. Linux only.
pub async fn detect_all_linux_drives() -> Result<Vec<Drive>> {
    DriveDetector::default().linux_drives().await
}

/// Get a list of all drives
pub async fn detect_drives() -> Result<DriveList> {
    DriveDetector::default().drives().await
}

/// Get a list of removable/USB drives
pub async fn detect_usb_drives() -> Result<DriveList> {
    DriveDetector::default().usb_drives().await
}
