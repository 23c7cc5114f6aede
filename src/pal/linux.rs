use serde::Deserialize;

use crate::device::Drive;
use crate::error::Failure;

pub(crate) const LSBLK: &str = "lsblk";

/// Every column [`BlockAttributes`](crate::BlockAttributes) knows about.
const COLUMNS: &str = "ALIGNMENT,DISC-ALN,DAX,DISC-GRAN,DISC-MAX,DISC-ZERO,FSAVAIL,FSROOTS,FSSIZE,\
FSTYPE,FSUSED,FSUSE%,FSVER,GROUP,HCTL,HOTPLUG,KNAME,LABEL,LOG-SEC,MAJ:MIN,MIN-IO,MODE,MODEL,NAME,\
OPT-IO,OWNER,PARTFLAGS,PARTLABEL,PARTTYPE,PARTTYPENAME,PARTUUID,PATH,PHY-SEC,PKNAME,PTTYPE,PTUUID,\
RA,RAND,REV,RM,RO,ROTA,RQ-SIZE,SCHED,SERIAL,SIZE,START,STATE,SUBSYSTEMS,MOUNTPOINT,MOUNTPOINTS,\
TRAN,TYPE,UUID,VENDOR,WSAME,WWN,ZONED,ZONE-SZ,ZONE-WGRAN,ZONE-APP,ZONE-NR,ZONE-OMAX,ZONE-AMAX";

pub(crate) const LSBLK_ARGS: [&str; 3] = ["-J", "-o", COLUMNS];

#[derive(Deserialize, Debug)]
struct Devices {
    blockdevices: Vec<Drive>,
}

pub(crate) fn lsblk(output: &str) -> Result<Vec<Drive>, Failure> {
    let res: Devices = serde_json::from_str(output).map_err(|source| Failure::Json {
        command: LSBLK.to_string(),
        source,
    })?;

    Ok(res.blockdevices)
}

#[cfg(test)]
mod tests {
    use super::lsblk;
    use crate::error::Failure;

    #[test]
    fn minimal() {
        let drives =
            lsblk(r#"{"blockdevices":[{"name":"sda","children":[{"name":"sda1","mountpoint":"/"}]}]}"#)
                .unwrap();

        assert_eq!(drives.len(), 1);
        assert_eq!(drives[0].attributes.name, "sda");
        assert_eq!(drives[0].children.len(), 1);
        assert_eq!(drives[0].children[0].name, "sda1");
        assert_eq!(drives[0].children[0].mountpoint.as_deref(), Some("/"));
    }

    #[test]
    fn full_device() {
        let data = r#"
{
   "blockdevices": [
      {
         "alignment": 0,
         "disc-aln": 0,
         "dax": false,
         "disc-gran": "4K",
         "disc-max": "4G",
         "disc-zero": false,
         "fsavail": null,
         "fsroots": [null],
         "fssize": null,
         "fstype": null,
         "fsused": null,
         "fsuse%": null,
         "fsver": null,
         "group": "disk",
         "hctl": "0:0:0:0",
         "hotplug": true,
         "kname": "sdb",
         "label": null,
         "log-sec": 512,
         "maj:min": "8:16",
         "min-io": 512,
         "mode": "brw-rw----",
         "model": "Ultra Fit",
         "name": "sdb",
         "opt-io": 0,
         "owner": "root",
         "partflags": null,
         "partlabel": null,
         "parttype": null,
         "parttypename": null,
         "partuuid": null,
         "path": "/dev/sdb",
         "phy-sec": 512,
         "pkname": null,
         "pttype": "dos",
         "ptuuid": "8c1e2a4f",
         "ra": 128,
         "rand": true,
         "rev": "1.00",
         "rm": true,
         "ro": false,
         "rota": false,
         "rq-size": 2,
         "sched": "mq-deadline",
         "serial": "4C530001",
         "size": "28.7G",
         "start": null,
         "state": "running",
         "subsystems": "block:scsi:usb:pci",
         "mountpoint": null,
         "mountpoints": [null],
         "tran": "usb",
         "type": "disk",
         "uuid": null,
         "vendor": "SanDisk ",
         "wsame": "0B",
         "wwn": null,
         "zoned": "none",
         "zone-sz": "0B",
         "zone-wgran": "0B",
         "zone-app": "0B",
         "zone-nr": 0,
         "zone-omax": 0,
         "zone-amax": 0,
         "children": [
            {
               "alignment": 0,
               "fsavail": "27.1G",
               "fsroots": ["/"],
               "fssize": "28.7G",
               "fstype": "vfat",
               "fsused": "1.6G",
               "fsuse%": "6%",
               "kname": "sdb1",
               "label": "BOOT",
               "name": "sdb1",
               "path": "/dev/sdb1",
               "pkname": "sdb",
               "size": "28.7G",
               "start": 2048,
               "subsystems": "block:scsi:usb:pci",
               "mountpoint": "/media/user/BOOT",
               "mountpoints": ["/media/user/BOOT"],
               "type": "part",
               "uuid": "1A2B-3C4D"
            }
         ]
      }
   ]
}
"#;

        let drives = lsblk(data).unwrap();
        let drive = &drives[0];

        assert_eq!(drive.attributes.path, "/dev/sdb");
        assert_eq!(drive.attributes.maj_min, "8:16");
        assert_eq!(drive.attributes.fstype, None);
        assert_eq!(drive.attributes.mountpoints, vec![None::<String>]);
        assert_eq!(drive.attributes.model.as_deref(), Some("Ultra Fit"));
        assert_eq!(drive.attributes.device_type, "disk");
        assert!(drive.attributes.rm);
        assert!(drive.attributes.is_removable());
        assert!(drive.attributes.is_usb());
        assert_eq!(drive.attributes.rq_size, Some(2));
        assert_eq!(drive.attributes.sched.as_deref(), Some("mq-deadline"));
        assert_eq!(drive.attributes.size.as_deref(), Some("28.7G"));

        let part = &drive.partitions()[0];
        assert_eq!(part.fsuse_percent.as_deref(), Some("6%"));
        assert_eq!(part.start, Some(2048));
        assert_eq!(part.pkname.as_deref(), Some("sdb"));
        assert_eq!(part.mountpoints, vec![Some("/media/user/BOOT".to_string())]);
        assert!(!part.rm);
    }

    #[test]
    fn virtual_devices() {
        // Captured from util-linux 2.38.1: a zram device and two virtio disks
        let drives = lsblk(include_str!("testdata/lsblk_virtio.json")).unwrap();

        assert_eq!(drives.len(), 3);

        let zram = &drives[0].attributes;
        assert_eq!(zram.name, "zram0");
        assert_eq!(zram.rq_size, None);
        assert_eq!(zram.sched, None);
        assert_eq!(zram.start, None);
        assert_eq!(zram.state, None);
        assert_eq!(zram.ra, Some(128));
        assert_eq!(zram.log_sec, Some(4096));
        assert_eq!(zram.size.as_deref(), Some("0B"));
        assert_eq!(zram.fsroots, vec![None::<String>]);
        assert!(!zram.is_usb());
        assert!(!zram.is_removable());

        let vda = &drives[1].attributes;
        assert_eq!(vda.rq_size, Some(256));
        assert_eq!(vda.sched.as_deref(), Some("mq-deadline"));
        assert_eq!(vda.mountpoint.as_deref(), Some("/"));
        assert!(drives.iter().all(|d| d.children.is_empty()));
    }

    #[test]
    fn null_columns() {
        let drives = lsblk(
            r#"{"blockdevices":[{"name":"loop0","alignment":null,"group":null,"log-sec":null,
            "phy-sec":null,"min-io":null,"opt-io":null,"ra":null,"size":null,"subsystems":null,
            "wsame":null,"zone-nr":null,"zone-sz":null,"disc-gran":null,"mode":null}]}"#,
        )
        .unwrap();

        let loop0 = &drives[0].attributes;
        assert_eq!(loop0.alignment, None);
        assert_eq!(loop0.phy_sec, None);
        assert_eq!(loop0.size, None);
        assert_eq!(loop0.zone_nr, None);
        assert!(!loop0.is_usb());
    }

    #[test]
    fn no_children() {
        let drives = lsblk(r#"{"blockdevices":[{"name":"loop0","type":"loop"}]}"#).unwrap();

        assert!(drives[0].children.is_empty());
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            lsblk("lsblk: unknown column: ZONE-AMAX"),
            Err(Failure::Json { .. })
        ));
        assert!(matches!(
            lsblk(r#"{"devices":[]}"#),
            Err(Failure::Json { .. })
        ));
    }
}
