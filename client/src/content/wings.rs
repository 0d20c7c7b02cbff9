//! Bundled wing descriptions.

use crate::net::types::{Wing, WingActivity, WingCoordinator, WingTheme};

struct WingSeed<'a> {
    slug: &'a str,
    name: &'a str,
    description: &'a str,
    focus_areas: &'a [&'a str],
    coordinators: &'a [(&'a str, &'a str)],
    activities: &'a [(&'a str, &'a str)],
    theme: WingTheme,
}

impl WingSeed<'_> {
    fn build(self) -> Wing {
        Wing {
            id: format!("wing-{}", self.slug),
            slug: self.slug.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            focus_areas: self.focus_areas.iter().map(|s| (*s).to_owned()).collect(),
            coordinators: self
                .coordinators
                .iter()
                .map(|(name, role)| WingCoordinator {
                    name: (*name).to_owned(),
                    role: (*role).to_owned(),
                    image_url: None,
                })
                .collect(),
            activities: self
                .activities
                .iter()
                .map(|(title, description)| WingActivity {
                    title: (*title).to_owned(),
                    description: (*description).to_owned(),
                })
                .collect(),
            gallery: (1..=3).map(|i| format!("/images/wings/{}/{i}.jpg", self.slug)).collect(),
            theme: self.theme,
        }
    }
}

/// All wings in display order.
pub fn wings() -> Vec<Wing> {
    [
        WingSeed {
            slug: "web-coding",
            name: "Web & Coding",
            description: "Builds the club's web presence and runs weekly coding circles, from first HTML page to production deploys.",
            focus_areas: &["Full-stack development", "Competitive programming", "Open-source contribution"],
            coordinators: &[("Rohan Das", "Wing Lead"), ("Nisha Verma", "Co-lead")],
            activities: &[
                ("Code Circles", "Weekly problem-solving sessions in pairs."),
                ("Ship Week", "Five days to take a side project from idea to deployed."),
            ],
            theme: WingTheme::Cyan,
        },
        WingSeed {
            slug: "climate-tech",
            name: "Climate Tech",
            description: "Applies software and data to sustainability problems on campus and in the city.",
            focus_areas: &["Energy monitoring", "Carbon accounting", "Sustainable design"],
            coordinators: &[("Ananya Iyer", "Wing Lead")],
            activities: &[
                ("Campus Energy Audit", "Sensor network tracking hostel power use."),
                ("Green Hack", "A weekend hackathon on local climate challenges."),
            ],
            theme: WingTheme::Emerald,
        },
        WingSeed {
            slug: "ai-data",
            name: "AI & Data",
            description: "Explores machine learning, from reading papers together to training and deploying models.",
            focus_areas: &["Machine learning", "Data visualization", "Responsible AI"],
            coordinators: &[("Vikram Joshi", "Wing Lead"), ("Pooja Shah", "Research Coordinator")],
            activities: &[
                ("Paper Club", "Fortnightly walkthroughs of recent research."),
                ("Kaggle Nights", "Team entries into open data competitions."),
            ],
            theme: WingTheme::Violet,
        },
        WingSeed {
            slug: "robotics-iot",
            name: "Robotics & IoT",
            description: "Hardware wing building robots, embedded devices and connected sensors.",
            focus_areas: &["Embedded systems", "Autonomous navigation", "Rapid prototyping"],
            coordinators: &[("Arjun Reddy", "Wing Lead")],
            activities: &[
                ("Bot Wars", "Inter-college robot combat league."),
                ("Maker Hours", "Open lab time with soldering and 3D printing."),
            ],
            theme: WingTheme::Amber,
        },
        WingSeed {
            slug: "design-media",
            name: "Design & Media",
            description: "Owns the club's visual identity, event branding, photography and video.",
            focus_areas: &["UI/UX", "Motion graphics", "Photography"],
            coordinators: &[("Sara Khan", "Wing Lead")],
            activities: &[
                ("Design Jams", "Timed challenges redesigning everyday apps."),
                ("Event Coverage", "Photo and video for every club event."),
            ],
            theme: WingTheme::Rose,
        },
        WingSeed {
            slug: "cyber-security",
            name: "Cyber Security",
            description: "Trains students in defensive and offensive security through labs and CTFs.",
            focus_areas: &["CTF training", "Secure coding", "Network defense"],
            coordinators: &[("Tara Bose", "Wing Lead")],
            activities: &[
                ("CTF Fridays", "Practice capture-the-flag rounds."),
                ("Security Clinics", "Reviewing club projects for common vulnerabilities."),
            ],
            theme: WingTheme::Sky,
        },
    ]
    .into_iter()
    .map(WingSeed::build)
    .collect()
}
