//! Shared helpers for detection integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use bb_drivedetect::{CommandRunner, Failure};

pub const DF: &str = "\
Filesystem     1K-blocks     Used Available Use% Mounted on
udev             8123456        0   8123456   0% /dev
/dev/nvme0n1p2 479151816 98765432 355971612  22% /
/dev/sda1         102400    51200     51200  50% /mnt/data
/dev/sdc1      976762580     1024 976761556   1% /media/user/WINDOWS
";

pub const MOUNT: &str = "\
sysfs on /sys type sysfs (rw,nosuid,nodev,noexec,relatime)
udev on /dev type devtmpfs (rw,nosuid,relatime,size=8123456k)
/dev/nvme0n1p2 on / type ext4 (rw,relatime,errors=remount-ro)
/dev/sda1 on /mnt/data type ext4 (rw)
/dev/sdc1 on /media/user/WINDOWS type fuseblk (rw,nosuid,nodev,relatime)
";

pub const WMIC: &str = "Caption  Description       DriveType  FileSystem  FreeSpace     Size          VolumeName  \r\r\n\
C:       Local Fixed Disk  3          NTFS        85412691968   254721126400  Windows     \r\r\n\
E:       Removable Disk    2          FAT32       15518924800   15548416000   KINGSTON    \r\r\n\
\r\r\n";

pub const LSBLK: &str = r#"{"blockdevices":[{"name":"sda","children":[{"name":"sda1","mountpoint":"/"}]}]}"#;

pub const LSBLK_VIRTIO: &str = include_str!("../../src/pal/testdata/lsblk_virtio.json");

#[derive(Debug, Clone)]
pub enum Reply {
    Stdout(&'static str),
    Stderr(&'static str),
    Exit(i32, &'static str),
}

/// Answers commands with canned output and remembers what was asked.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    replies: HashMap<&'static str, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, program: &'static str, reply: Reply) -> Self {
        self.replies.insert(program, reply);
        self
    }

    /// Unix and Windows utilities all answering successfully.
    pub fn healthy() -> Self {
        Self::new()
            .reply("df", Reply::Stdout(DF))
            .reply("mount", Reply::Stdout(MOUNT))
            .reply("wmic", Reply::Stdout(WMIC))
            .reply("lsblk", Reply::Stdout(LSBLK))
    }

    /// Programs run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, Failure> {
        self.calls.lock().unwrap().push(program.to_string());

        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        match self.replies.get(program) {
            Some(Reply::Stdout(x)) => Ok(x.to_string()),
            Some(Reply::Stderr(x)) => Err(Failure::Stderr {
                command,
                stderr: x.to_string(),
            }),
            Some(Reply::Exit(code, x)) => Err(Failure::Exit {
                command,
                code: Some(*code),
                stderr: x.to_string(),
            }),
            None => Err(Failure::Spawn {
                command,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
