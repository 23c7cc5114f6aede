mod cli;

use anyhow::Context;
use bb_drivedetect::{Drive, DriveList, UnixDrive, WindowsDrive};
use clap::Parser;
use cli::{Commands, Opt, OutputFormat};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to register tracing_subscriber")?;

    match opt.command {
        Commands::List { usb, format } => list(usb, format).await,
        Commands::BlockDevices { usb, format } => block_devices(usb, format).await,
    }
}

async fn list(usb: bool, format: OutputFormat) -> anyhow::Result<()> {
    let drives = if usb {
        bb_drivedetect::detect_usb_drives().await?
    } else {
        bb_drivedetect::detect_drives().await?
    };

    if format.json {
        println!("{}", serde_json::to_string_pretty(&drives)?);
    } else if format.no_frills {
        for path in drives.paths() {
            println!("{path}");
        }
    } else {
        match drives {
            DriveList::Unix(x) => print_unix(&x),
            DriveList::Windows(x) => print_windows(&x),
        }
    }

    Ok(())
}

async fn block_devices(usb: bool, format: OutputFormat) -> anyhow::Result<()> {
    let mut drives = bb_drivedetect::detect_all_linux_drives().await?;
    if usb {
        drives.retain(|d| d.attributes.is_usb());
    }

    if format.json {
        println!("{}", serde_json::to_string_pretty(&drives)?);
    } else if format.no_frills {
        for d in &drives {
            println!("{}", d.attributes.path);
        }
    } else {
        print_block_devices(&drives);
    }

    Ok(())
}

fn print_unix(drives: &[UnixDrive]) {
    println!(
        "{:<24} {:<12} {:>14} {:>14} {:>5} {:<4} PATH",
        "FILESYSTEM", "TYPE", "SIZE", "AVAILABLE", "USE%", "USB"
    );
    for d in drives {
        println!(
            "{:<24} {:<12} {:>14} {:>14} {:>5} {:<4} {}",
            d.file_system,
            d.fs_type,
            d.total_size,
            d.available_size,
            d.used_size_in_percentage,
            yes_no(d.is_usb),
            d.path
        );
    }
}

fn print_windows(drives: &[WindowsDrive]) {
    println!(
        "{:<6} {:<20} {:<8} {:>16} {:>16} {:<4} NAME",
        "DRIVE", "DESCRIPTION", "FS", "SIZE", "FREE", "USB"
    );
    for d in drives {
        println!(
            "{:<6} {:<20} {:<8} {:>16} {:>16} {:<4} {}",
            d.path,
            d.description,
            d.file_system,
            d.total_size,
            d.available_size,
            yes_no(d.is_usb),
            d.name
        );
    }
}

fn print_block_devices(drives: &[Drive]) {
    println!(
        "{:<20} {:<6} {:>8} {:<8} {:<4} MOUNTPOINT",
        "NAME", "TYPE", "SIZE", "FSTYPE", "RM"
    );
    for d in drives {
        println!(
            "{:<20} {:<6} {:>8} {:<8} {:<4} {}",
            d.attributes.name,
            d.attributes.device_type,
            d.attributes.size.as_deref().unwrap_or_default(),
            d.attributes.fstype.as_deref().unwrap_or_default(),
            yes_no(d.attributes.is_removable()),
            d.attributes.mountpoint.as_deref().unwrap_or_default()
        );
        for c in d.partitions() {
            println!(
                "{:<20} {:<6} {:>8} {:<8} {:<4} {}",
                format!("  {}", c.name),
                c.device_type,
                c.size.as_deref().unwrap_or_default(),
                c.fstype.as_deref().unwrap_or_default(),
                yes_no(c.is_removable()),
                c.mountpoint.as_deref().unwrap_or_default()
            );
        }
    }
}

const fn yes_no(x: bool) -> &'static str {
    if x { "yes" } else { "no" }
}
