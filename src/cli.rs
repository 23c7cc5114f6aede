use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opt {
    #[command(subcommand)]
    /// Specifies the subcommand to execute.
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List drives using `wmic` on Windows and `df` + `mount` everywhere else.
    List {
        #[arg(long)]
        /// Only list removable/USB drives.
        usb: bool,

        #[command(flatten)]
        format: OutputFormat,
    },

    /// List block devices and their partitions using `lsblk`. Linux only.
    BlockDevices {
        #[arg(long)]
        /// Only list devices connected over USB.
        usb: bool,

        #[command(flatten)]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
#[group(multiple = false)]
pub struct OutputFormat {
    #[arg(long)]
    /// Print JSON instead of a table.
    pub json: bool,

    #[arg(long)]
    /// Only print paths seperated by newline
    pub no_frills: bool,
}
