//! `wmic logicaldisk` based drive list.

use tracing::debug;

use crate::device::{DEFAULT_NAME, REMOVABLE_DRIVE_TYPE, WindowsDrive};

pub(crate) const WMIC: &str = "wmic";
pub(crate) const WMIC_ARGS: [&str; 3] = [
    "logicaldisk",
    "get",
    "Caption,VolumeName,DriveType,Size,FileSystem,FreeSpace,Description",
];

// wmic sorts the requested columns:
// Caption Description DriveType FileSystem FreeSpace Size VolumeName
const CAPTION: usize = 0;
const FIRST_DESCRIPTION: usize = 1;
// Relative to the drive type column
const FILE_SYSTEM: usize = 1;
const FREE_SPACE: usize = 2;
const SIZE: usize = 3;
const VOLUME_NAME: usize = 4;

pub(crate) fn drives(output: &str) -> Vec<WindowsDrive> {
    output
        .lines()
        .skip(1)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let row = parse_row(line);
            if row.is_none() {
                debug!("Dropping misaligned wmic row: {line}");
            }
            row
        })
        .collect()
}

fn parse_row(line: &str) -> Option<WindowsDrive> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let path = tokens.get(CAPTION)?;

    // Descriptions have a varying number of words ("Local Fixed Disk", "Removable Disk") and
    // may start with a number ("3 1/2 Inch Floppy Drive"), so the drive type code is the first
    // numeric column after at least one description word.
    let (type_pos, drive_type) = tokens
        .iter()
        .enumerate()
        .skip(FIRST_DESCRIPTION + 1)
        .find_map(|(pos, x)| x.parse::<u32>().ok().map(|code| (pos, code)))?;

    let description = &tokens[FIRST_DESCRIPTION..type_pos];

    let rest = &tokens[type_pos..];
    let name = rest.get(VOLUME_NAME..).unwrap_or_default();

    Some(WindowsDrive {
        path: path.to_string(),
        description: description.join(" "),
        drive_type,
        file_system: rest.get(FILE_SYSTEM)?.to_string(),
        available_size: rest.get(FREE_SPACE)?.to_string(),
        total_size: rest.get(SIZE)?.to_string(),
        name: if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.join(" ")
        },
        is_usb: drive_type == REMOVABLE_DRIVE_TYPE,
    })
}
