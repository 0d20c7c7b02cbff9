//! Bundled speaker lineup.

use super::links;
use crate::net::types::Speaker;

fn speaker(name: &str, title: &str, company: &str, bio: &str, topics: &[&str], handle: &str, featured: bool) -> Speaker {
    Speaker {
        name: name.to_owned(),
        title: title.to_owned(),
        company: company.to_owned(),
        bio: bio.to_owned(),
        topics: topics.iter().map(|t| (*t).to_owned()).collect(),
        image_url: Some(format!("/images/speakers/{handle}.jpg")),
        social_links: links(&format!("https://www.linkedin.com/in/{handle}"), "", ""),
        featured,
    }
}

/// Full speaker lineup in display order.
pub fn speakers() -> Vec<Speaker> {
    vec![
        speaker(
            "Dr. Priya Raman",
            "Principal Research Scientist",
            "Helix Labs",
            "Works on efficient inference for large language models and has shipped on-device ML to millions of phones.",
            &["Machine Learning", "Edge AI"],
            "priya-raman",
            true,
        ),
        speaker(
            "Nikhil Varma",
            "Staff Engineer",
            "Cloudmesh",
            "Builds the control plane for a global edge network and maintains several open-source Rust crates.",
            &["Distributed Systems", "Rust", "Open Source"],
            "nikhil-varma",
            true,
        ),
        speaker(
            "Aisha Qureshi",
            "Founder",
            "GreenGrid Analytics",
            "Started a climate-data company that helps cities plan rooftop solar rollouts from satellite imagery.",
            &["Climate Tech", "Startups"],
            "aisha-qureshi",
            true,
        ),
        speaker(
            "Rahul Menon",
            "Security Engineer",
            "Fortline",
            "Red-teams payment infrastructure and runs a free CTF training program for students.",
            &["Cyber Security", "CTF"],
            "rahul-menon",
            false,
        ),
        speaker(
            "Leena Das",
            "Product Design Lead",
            "Pixelcraft",
            "Leads design for a collaboration suite used by over two thousand teams.",
            &["Product Design", "Accessibility"],
            "leena-das",
            false,
        ),
        speaker(
            "Sameer Kulkarni",
            "Robotics Engineer",
            "Autonome",
            "Designs perception stacks for warehouse robots and mentors FIRST robotics teams.",
            &["Robotics", "Computer Vision"],
            "sameer-kulkarni",
            false,
        ),
    ]
}
