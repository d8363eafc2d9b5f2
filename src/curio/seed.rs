//! Default catalog written on first load. Matches the starter content of the
//! original site: four affiliates, two fully documented projects, and three
//! software entries. Seeding happens exactly once, marked by
//! `CatalogDocument::initialized`.

use crate::model::{
    Affiliate, CatalogDocument, Project, ProjectSection, ProjectTheme, SectionKind, SoftwareEntry,
    ThemePreset,
};
use chrono::Utc;

pub fn default_catalog() -> CatalogDocument {
    let now = Utc::now().timestamp_millis();
    CatalogDocument {
        affiliates: default_affiliates(now),
        projects: default_projects(now),
        software: default_software(now),
        initialized: true,
    }
}

fn default_affiliates(now: i64) -> Vec<Affiliate> {
    let affiliate = |id: &str, name: &str, description: &str, link: &str, icon: &str, coming_soon| {
        Affiliate {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            link: link.into(),
            icon: icon.into(),
            custom_image: None,
            coming_soon,
            created_at: now,
        }
    };
    vec![
        affiliate(
            "static-affiliate-1",
            "Raspberry Pi Tips School",
            "Learn everything about Raspberry Pi with comprehensive courses and tutorials. Perfect for beginners and advanced users!",
            "https://school.raspberrytips.com/a/v8jsr",
            "fa-graduation-cap",
            false,
        ),
        affiliate(
            "static-affiliate-2",
            "SunFounder",
            "Explore innovative electronic kits, robotics, and educational STEM products for makers and hobbyists of all levels.",
            "https://www.sunfounder.com/?ref=ormqdqda",
            "fa-robot",
            false,
        ),
        affiliate(
            "static-affiliate-3",
            "Tech Explorations",
            "Learn electronics, Arduino, Raspberry Pi, and practical engineering through hands-on courses.",
            "https://techexplorations.com/pc/?ref=hbwnc9",
            "fa-microchip",
            false,
        ),
        affiliate(
            "static-affiliate-4",
            "eBay Shop",
            "Coming soon: my eBay store with affordable Raspberry Pis, respeaker hats, speakers, and Pi-ready accessories.",
            "",
            "fa-store",
            true,
        ),
    ]
}

fn section(
    id: &str,
    title: &str,
    kind: SectionKind,
    content: &str,
    order: u32,
    code_language: Option<&str>,
) -> ProjectSection {
    ProjectSection {
        id: id.into(),
        title: title.into(),
        kind,
        content: content.into(),
        order,
        code_language: code_language.map(Into::into),
    }
}

fn default_projects(now: i64) -> Vec<Project> {
    vec![
        Project {
            id: "static-project-1".into(),
            name: "Pinecraft".into(),
            description: "An automated Minecraft Java server installer for Raspberry Pi, maintained at the cat5tv/Pinecraft GitHub repository.".into(),
            badge: "Popular".into(),
            tags: vec!["Raspberry Pi".into(), "Minecraft".into()],
            icon: "custom".into(),
            custom_image: Some("assets/img/projects/Pinecraft.png".into()),
            theme: Some(ProjectTheme {
                preset: ThemePreset::Forest,
                ..ProjectTheme::default()
            }),
            sections: pinecraft_sections(),
            created_at: now,
        },
        Project {
            id: "static-project-2".into(),
            name: "P4wnP1".into(),
            description: "Highly customizable USB attack platform for Raspberry Pi Zero and Zero W.".into(),
            badge: "Security".into(),
            tags: vec!["Pi Zero".into(), "Security".into()],
            icon: "custom".into(),
            custom_image: Some("assets/img/projects/p4wnp1.png".into()),
            theme: Some(ProjectTheme {
                preset: ThemePreset::Midnight,
                ..ProjectTheme::default()
            }),
            sections: p4wnp1_sections(),
            created_at: now,
        },
    ]
}

fn pinecraft_sections() -> Vec<ProjectSection> {
    vec![
        section(
            "sec-1",
            "Overview",
            SectionKind::Text,
            "**Pinecraft** is an automated Minecraft Java server installer for Raspberry Pi, maintained at the [cat5tv/Pinecraft GitHub repository](https://github.com/cat5tv/Pinecraft).\n\nThis guide is designed for beginner to intermediate Raspberry Pi users. No prior Pi experience is assumed, but commands are shown exactly as they should be entered.\n\nFollow each step in order. Do not skip steps or use alternative methods.",
            0,
            None,
        ),
        section(
            "sec-2",
            "Estimated Time",
            SectionKind::CalloutInfo,
            "**30\u{2013}60 minutes** depending on download speeds and hardware. The process involves flashing an OS, configuration, and server setup.",
            1,
            None,
        ),
        section(
            "sec-3",
            "Hardware Requirements",
            SectionKind::Text,
            "### Required Hardware\n\n- **Raspberry Pi 4** (4GB or 8GB RAM recommended)\n- MicroSD card (32GB+ Class 10/UHS-1) or USB drive\n- Official Raspberry Pi power supply (3A USB-C)\n- Computer for setup (Windows, macOS, or Linux)\n\n### Optional Hardware\n\n- Heatsink and fan for cooling\n- External SSD for improved performance\n- Case with ventilation",
            2,
            None,
        ),
        section(
            "sec-4",
            "Important Note",
            SectionKind::CalloutWarning,
            "Do **not** use a Raspberry Pi Zero or older Pi models. Pinecraft requires a **Raspberry Pi 4** for adequate performance. Minecraft servers are memory and CPU intensive.",
            3,
            None,
        ),
        section(
            "sec-5",
            "Step 1: Flash Raspberry Pi OS",
            SectionKind::Steps,
            "**Open Raspberry Pi Imager** - Launch the official imaging tool from [raspberrypi.com/software](https://www.raspberrypi.com/software/).\n---\n**Click Choose OS** - Navigate to **Other** and select **Raspberry Pi OS Lite (64-bit)**.\n---\n**Click Choose Storage** - Select your target SD card or USB drive.\n---\n**Open Advanced Settings** - Configure **Wi-Fi**, your login credentials, and **Enable Raspberry Pi Connect**.\n---\n**Apply Settings** - Confirm and begin flashing the image, then safely eject the drive.",
            4,
            None,
        ),
        section(
            "sec-6",
            "Why Lite 64-bit?",
            SectionKind::CalloutSuccess,
            "We use **Raspberry Pi OS Lite (64-bit)** because it has no desktop environment, freeing up RAM and CPU for the Minecraft server. The 64-bit version provides better Java performance.",
            5,
            None,
        ),
        section(
            "sec-7",
            "Step 2: Initial Raspberry Pi Configuration",
            SectionKind::Code,
            "# Open Raspberry Pi Configuration\nsudo raspi-config\n\n# Navigate to: Advanced Options \u{2192} Expand Filesystem\n# Then exit raspi-config\n\n# Update the System\nsudo apt update\nsudo apt upgrade -y\n\n# Install Git\nsudo apt install git -y\n\n# Reboot\nsudo reboot",
            6,
            Some("bash"),
        ),
        section(
            "sec-8",
            "Step 3: Download and Run Pinecraft",
            SectionKind::Code,
            "# Clone the Pinecraft repository\ngit clone https://github.com/cat5tv/Pinecraft.git\n\n# Enter the Pinecraft directory\ncd Pinecraft\n\n# Run the installer with sudo\nsudo ./install",
            7,
            Some("bash"),
        ),
        section(
            "sec-9",
            "GitHub Repository",
            SectionKind::Links,
            "Pinecraft GitHub|https://github.com/cat5tv/Pinecraft|Official repository with source code and documentation\nSpigotMC Resources|https://www.spigotmc.org/resources/|Thousands of free and premium plugins\nHangar (PaperMC)|https://hangar.papermc.io/|Official Paper plugin repository",
            8,
            None,
        ),
        section(
            "sec-10",
            "Server Control Commands",
            SectionKind::Cards2,
            "Start Server|Navigate to your Minecraft folder and run `./server` to start the server.\n---\nRestart Server|Run `./restart` from within the Minecraft directory to restart.\n---\nStop Server|Use `/etc/init.d/pinecraft stop` to gracefully shut down the server.\n---\nCheck Status|Use `/etc/init.d/pinecraft status` to verify if the server is running.",
            9,
            None,
        ),
        section(
            "sec-11",
            "Networking Guide",
            SectionKind::Text,
            "### Local Network Connection\n\nFor players on the same network, use your Pi's local IP address. Find it with:\n\n```bash\nhostname -I\n```\n\nIn Minecraft: **Multiplayer** \u{2192} **Direct Connect** \u{2192} Enter the local IP.\n\n### Remote Connection\n\nFor players outside your network, find your public IP with `curl ifconfig.me`, forward TCP port **25565** in your router settings, and share your public IP with players.",
            10,
            None,
        ),
        section(
            "sec-12",
            "Troubleshooting",
            SectionKind::Cards3,
            "Server Won't Start|Check logs for startup errors and diagnostics|tail -f /var/log/pinecraft.log\n---\nCheck Disk Space|Low storage can cause crashes and world corruption|df -h\n---\nJava Errors|Ensure correct Java version is installed|java -version\n---\nConnection Issues|Verify server is running and network is properly configured. LAN: confirm same network. Remote: check port 25565 is forwarded to the Pi's local IP.\n---\nPerformance Issues|Reduce server load for smoother gameplay. Lower `view-distance` in `server.properties` and use Paper for optimizations.\n---\nGet Help|Community support for advanced issues. Visit [Pinecraft GitHub Issues](https://github.com/cat5TV/pinecraft/issues)",
            11,
            None,
        ),
        section(
            "sec-13",
            "Congratulations!",
            SectionKind::CalloutSuccess,
            "You now have a fully functional Minecraft Java server running on your Raspberry Pi! Invite your friends, explore, build, and have fun. Remember to back up your world files regularly.",
            12,
            None,
        ),
    ]
}

fn p4wnp1_sections() -> Vec<ProjectSection> {
    vec![
        section(
            "p4-sec-1",
            "Overview",
            SectionKind::Text,
            "P4wnP1 is an open-source, highly customizable USB attack platform for the Raspberry Pi Zero and Zero W. It enables HID attacks, network attacks, and more, all from a tiny, affordable device.\n\n[View the official GitHub repository](https://github.com/RoganDawes/P4wnP1)",
            0,
            None,
        ),
        section(
            "p4-sec-2",
            "Estimated Time",
            SectionKind::CalloutInfo,
            "**15\u{2013}30 minutes** (including downloads and flashing)",
            1,
            None,
        ),
        section(
            "p4-sec-3",
            "Prerequisites",
            SectionKind::Cards2,
            "Required Hardware|Raspberry Pi Zero or Zero W, MicroSD card (8GB+ recommended), Micro USB cable (data & power capable), Computer (Windows, macOS, or Linux)\n---\nOptional Hardware|USB OTG adapter for additional devices, Compact case for portability",
            2,
            None,
        ),
        section(
            "p4-sec-4",
            "Installation Guide",
            SectionKind::Steps,
            "**Download Image** - Get the latest P4wnP1 A.L.O.A. image from [GitHub Releases](https://github.com/RoganDawes/P4wnP1/releases)\n---\n**Flash to SD Card** - Use balenaEtcher to write the image to your microSD card. [Get balenaEtcher](https://www.balena.io/etcher/)\n---\n**Insert & Connect** - Insert the SD card into Pi Zero. Connect via USB data port (not power-only).\n---\n**Wait for Boot** - The Pi will boot and appear as a network/HID device on your computer.\n---\n**Login** - Default credentials: Username: `pi`, Password: `raspberry`\n---\n**Access Web UI** - Open browser and navigate to the P4wnP1 web interface for configuration.",
            3,
            None,
        ),
        section(
            "p4-sec-5",
            "Resources",
            SectionKind::Links,
            "GitHub Repo|https://github.com/RoganDawes/P4wnP1|Source code, issues, and releases\nWiki & Docs|https://github.com/RoganDawes/P4wnP1/wiki|Payloads, customizations, and advanced features\nbalenaEtcher|https://www.balena.io/etcher/|Cross-platform SD card flasher tool",
            4,
            None,
        ),
    ]
}

fn default_software(now: i64) -> Vec<SoftwareEntry> {
    let entry = |id: &str, name: &str, description: &str, link: &str, image: &str, under_dev| {
        SoftwareEntry {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            link: link.into(),
            icon: "custom".into(),
            custom_image: Some(image.into()),
            under_development: under_dev,
            created_at: now,
        }
    };
    vec![
        entry(
            "static-software-1",
            "Photo Metadata App",
            "A clean, self-built tool to view and manage photo metadata quickly. Built by me from scratch.",
            "https://github.com/michael6gledhill/Photo_Metadata_App_By_Gledhill",
            "assets/img/projects/photo-metadata.png",
            false,
        ),
        entry(
            "static-software-2",
            "CyberPatriot Runbook",
            "A practical runbook for CyberPatriot prep with checklists and steps to streamline competition readiness.",
            "https://github.com/michael6gledhill/cyberpatriot-runbook",
            "assets/img/projects/cyberpatriot.png",
            true,
        ),
        entry(
            "static-software-3",
            "TransportMod",
            "A comprehensive transportation modification mod for enhanced game mechanics.",
            "https://github.com/Nerd-or-Geek/TransportMod",
            "assets/img/projects/TransportMod.png",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_defaults() {
        let doc = default_catalog();
        assert!(doc.initialized);
        assert_eq!(doc.affiliates.len(), 4);
        assert_eq!(doc.projects.len(), 2);
        assert_eq!(doc.software.len(), 3);
    }

    #[test]
    fn seed_ids_are_unique() {
        let doc = default_catalog();
        let mut ids: Vec<&str> = doc
            .affiliates
            .iter()
            .map(|a| a.id.as_str())
            .chain(doc.projects.iter().map(|p| p.id.as_str()))
            .chain(doc.software.iter().map(|s| s.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn seed_custom_images_force_custom_icon() {
        let doc = default_catalog();
        for project in &doc.projects {
            assert!(project.custom_image.is_some());
            assert_eq!(project.icon, crate::model::CUSTOM_ICON);
        }
    }
}
