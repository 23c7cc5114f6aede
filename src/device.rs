use serde::{Deserialize, Serialize};

/// Name given to drives that do not have one of their own.
pub const DEFAULT_NAME: &str = "Local Disk";

/// Filesystem type `mount` reports for FUSE block devices (ntfs-3g, exfat-fuse, ...).
pub const FUSE_BLOCK_TYPE: &str = "fuseblk";

/// Win32 drive type code of removable drives.
pub const REMOVABLE_DRIVE_TYPE: u32 = 2;

/// Drive descriptors that know whether they are removable.
pub trait Removable {
    fn is_usb(&self) -> bool;
}

/// Mounted filesystem as reported by `mount` and `df`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnixDrive {
    pub file_system: String,
    /// Mount path
    pub path: String,
    pub name: String,
    /// Filesystem type
    #[serde(rename = "type")]
    pub fs_type: String,
    pub is_usb: bool,
    pub total_size: String,
    pub used_size: String,
    pub available_size: String,
    pub used_size_in_percentage: String,
}

impl Removable for UnixDrive {
    fn is_usb(&self) -> bool {
        self.is_usb
    }
}

/// Logical disk as reported by `wmic logicaldisk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsDrive {
    /// Drive letter, e.g. `C:`
    pub path: String,
    pub description: String,
    pub drive_type: u32,
    pub file_system: String,
    pub available_size: String,
    pub total_size: String,
    pub name: String,
    pub is_usb: bool,
}

impl WindowsDrive {
    pub const fn kind(&self) -> DriveKind {
        DriveKind::from_code(self.drive_type)
    }
}

impl Removable for WindowsDrive {
    fn is_usb(&self) -> bool {
        self.is_usb
    }
}

/// Win32 `DriveType` classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DriveKind {
    Unknown,
    NoRootDirectory,
    Removable,
    LocalDisk,
    Network,
    CompactDisc,
    RamDisk,
}

impl DriveKind {
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::NoRootDirectory,
            REMOVABLE_DRIVE_TYPE => Self::Removable,
            3 => Self::LocalDisk,
            4 => Self::Network,
            5 => Self::CompactDisc,
            6 => Self::RamDisk,
            _ => Self::Unknown,
        }
    }
}

/// Drives found by [`detect_drives`](crate::detect_drives). The variant depends on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DriveList {
    Unix(Vec<UnixDrive>),
    Windows(Vec<WindowsDrive>),
}

impl DriveList {
    pub fn len(&self) -> usize {
        match self {
            Self::Unix(x) => x.len(),
            Self::Windows(x) => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mount paths or drive letters, in order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Unix(x) => x.iter().map(|d| d.path.as_str()).collect(),
            Self::Windows(x) => x.iter().map(|d| d.path.as_str()).collect(),
        }
    }

    /// Keep only removable/USB drives.
    pub fn usb_only(self) -> Self {
        match self {
            Self::Unix(x) => Self::Unix(retain_usb(x)),
            Self::Windows(x) => Self::Windows(retain_usb(x)),
        }
    }
}

fn retain_usb<T: Removable>(mut drives: Vec<T>) -> Vec<T> {
    drives.retain(T::is_usb);
    drives
}

/// Attributes `lsblk` reports for every block device, whole disks and partitions alike.
///
/// Values are kept exactly as `lsblk` prints them. Every column `lsblk` may leave empty is an
/// `Option`: a `null` in the output stays `None`, a column missing from the output takes the
/// empty default. Boolean columns are never `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockAttributes {
    pub alignment: Option<i64>,
    #[serde(rename = "disc-aln")]
    pub disc_aln: Option<i64>,
    pub dax: bool,
    #[serde(rename = "disc-gran")]
    pub disc_gran: Option<String>,
    #[serde(rename = "disc-max")]
    pub disc_max: Option<String>,
    #[serde(rename = "disc-zero")]
    pub disc_zero: bool,
    pub fsavail: Option<String>,
    pub fsroots: Vec<Option<String>>,
    pub fssize: Option<String>,
    pub fstype: Option<String>,
    pub fsused: Option<String>,
    #[serde(rename = "fsuse%")]
    pub fsuse_percent: Option<String>,
    pub fsver: Option<String>,
    pub group: Option<String>,
    pub hctl: Option<String>,
    pub hotplug: bool,
    pub kname: String,
    pub label: Option<String>,
    #[serde(rename = "log-sec")]
    pub log_sec: Option<u64>,
    #[serde(rename = "maj:min")]
    pub maj_min: String,
    #[serde(rename = "min-io")]
    pub min_io: Option<u64>,
    pub mode: Option<String>,
    pub model: Option<String>,
    pub name: String,
    #[serde(rename = "opt-io")]
    pub opt_io: Option<u64>,
    pub owner: Option<String>,
    pub partflags: Option<String>,
    pub partlabel: Option<String>,
    pub parttype: Option<String>,
    pub parttypename: Option<String>,
    pub partuuid: Option<String>,
    pub path: String,
    #[serde(rename = "phy-sec")]
    pub phy_sec: Option<u64>,
    pub pkname: Option<String>,
    pub pttype: Option<String>,
    pub ptuuid: Option<String>,
    pub ra: Option<u64>,
    pub rand: bool,
    pub rev: Option<String>,
    pub rm: bool,
    pub ro: bool,
    pub rota: bool,
    #[serde(rename = "rq-size")]
    pub rq_size: Option<u64>,
    pub sched: Option<String>,
    pub serial: Option<String>,
    pub size: Option<String>,
    pub start: Option<u64>,
    pub state: Option<String>,
    pub subsystems: Option<String>,
    pub mountpoint: Option<String>,
    pub mountpoints: Vec<Option<String>>,
    pub tran: Option<String>,
    #[serde(rename = "type")]
    pub device_type: String,
    pub uuid: Option<String>,
    pub vendor: Option<String>,
    pub wsame: Option<String>,
    pub wwn: Option<String>,
    pub zoned: Option<String>,
    #[serde(rename = "zone-sz")]
    pub zone_sz: Option<String>,
    #[serde(rename = "zone-wgran")]
    pub zone_wgran: Option<String>,
    #[serde(rename = "zone-app")]
    pub zone_app: Option<String>,
    #[serde(rename = "zone-nr")]
    pub zone_nr: Option<u64>,
    #[serde(rename = "zone-omax")]
    pub zone_omax: Option<u64>,
    #[serde(rename = "zone-amax")]
    pub zone_amax: Option<u64>,
}

impl BlockAttributes {
    pub fn is_removable(&self) -> bool {
        self.rm || self.hotplug
    }

    /// Device sits behind a USB controller.
    pub fn is_usb(&self) -> bool {
        self.subsystems
            .as_deref()
            .is_some_and(|x| x.split(':').any(|s| s == "usb"))
    }
}

/// Partition (or other child device) of a [`Drive`].
pub type Child = BlockAttributes;

/// Top level block device with its partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(flatten)]
    pub attributes: BlockAttributes,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl Drive {
    pub fn partitions(&self) -> &[Child] {
        &self.children
    }
}
