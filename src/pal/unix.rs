//! `df` + `mount` based drive list, shared by Linux, macOS and other Unix-like systems.

use tracing::debug;

use crate::device::{DEFAULT_NAME, FUSE_BLOCK_TYPE, UnixDrive};

pub(crate) const DF: &str = "df";
pub(crate) const MOUNT: &str = "mount";

// `df`: Filesystem 1K-blocks Used Available Use% Mounted on
const DF_FILE_SYSTEM: usize = 0;
const DF_TOTAL: usize = 1;
const DF_USED: usize = 2;
const DF_AVAILABLE: usize = 3;
const DF_USED_PERCENTAGE: usize = 4;
const DF_PATH: usize = 5;

// `mount`: <file system> on <path> type <type> (<options>)
const MOUNT_FILE_SYSTEM: usize = 0;
const MOUNT_PATH: usize = 2;
const MOUNT_TYPE: usize = 4;

/// One line of `df` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Usage {
    pub(crate) file_system: Option<String>,
    pub(crate) total_size: Option<String>,
    pub(crate) used_size: Option<String>,
    pub(crate) available_size: Option<String>,
    pub(crate) used_percentage: Option<String>,
    pub(crate) path: Option<String>,
}

/// One line of `mount` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Mount {
    pub(crate) file_system: Option<String>,
    pub(crate) path: Option<String>,
    pub(crate) fs_type: Option<String>,
}

pub(crate) fn parse_df(output: &str) -> Vec<Usage> {
    output
        .lines()
        .skip(1)
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let path = tokens.get(DF_PATH..).map(|rest| rest.join(" "));

            Usage {
                file_system: token(&tokens, DF_FILE_SYSTEM),
                total_size: token(&tokens, DF_TOTAL),
                used_size: token(&tokens, DF_USED),
                available_size: token(&tokens, DF_AVAILABLE),
                used_percentage: token(&tokens, DF_USED_PERCENTAGE),
                path: path.filter(|p| !p.is_empty()),
            }
        })
        .collect()
}

pub(crate) fn parse_mount(output: &str) -> Vec<Mount> {
    output
        .lines()
        .map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();

            Mount {
                file_system: token(&tokens, MOUNT_FILE_SYSTEM),
                path: token(&tokens, MOUNT_PATH),
                fs_type: token(&tokens, MOUNT_TYPE),
            }
        })
        .collect()
}

fn token(tokens: &[&str], pos: usize) -> Option<String> {
    tokens.get(pos).map(|x| x.to_string())
}

/// Join every mount with its `df` line and keep the rows where everything is known.
pub(crate) fn join(mounts: Vec<Mount>, usages: &[Usage]) -> Vec<UnixDrive> {
    mounts
        .into_iter()
        .filter_map(|mount| {
            let usage = find_usage(&mount, usages);
            let row = complete(mount, usage);
            if row.is_none() {
                debug!("Dropping incomplete mount row");
            }
            row
        })
        .collect()
}

/// First `df` line with the same file system and mount path.
fn find_usage<'a>(mount: &Mount, usages: &'a [Usage]) -> Option<&'a Usage> {
    let file_system = mount.file_system.as_deref()?;
    let path = mount.path.as_deref()?;

    usages.iter().find(|usage| {
        usage.file_system.as_deref() == Some(file_system) && usage.path.as_deref() == Some(path)
    })
}

/// Completeness check. Partial rows are never emitted.
fn complete(mount: Mount, usage: Option<&Usage>) -> Option<UnixDrive> {
    let usage = usage?;
    let path = mount.path?;
    let fs_type = mount.fs_type?;

    Some(UnixDrive {
        name: name_from_path(&path),
        is_usb: fs_type == FUSE_BLOCK_TYPE,
        file_system: mount.file_system?,
        path,
        fs_type,
        total_size: usage.total_size.clone()?,
        used_size: usage.used_size.clone()?,
        available_size: usage.available_size.clone()?,
        used_size_in_percentage: usage.used_percentage.clone()?,
    })
}

fn name_from_path(path: &str) -> String {
    path.rsplit('/')
        .next()
        .filter(|x| !x.is_empty())
        .unwrap_or(DEFAULT_NAME)
        .to_string()
}

pub(crate) fn drives(df: &str, mount: &str) -> Vec<UnixDrive> {
    let usages = parse_df(df);
    join(parse_mount(mount), &usages)
}
