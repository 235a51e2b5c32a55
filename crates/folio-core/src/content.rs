use std::path::Path;

use serde::{Deserialize, Serialize};

/// The portfolio page data: a handful of literal lists rendered by the TUI.
///
/// Loaded from a TOML file when one is configured, otherwise the built-in
/// [`Portfolio::sample`] is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub info: PersonalInfo,
    /// Rotating role titles for the hero typewriter
    pub titles: Vec<String>,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hero {
    /// Short badge above the name, e.g. "Available for hire"
    #[serde(default)]
    pub badge: Option<String>,
    /// One-line pitch under the typed title
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub cards: Vec<StatCard>,
}

/// Small highlight card in the about section, e.g. a credential and its status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Portfolio {
    /// Load and validate a portfolio from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let portfolio: Portfolio =
            toml::from_str(&content).map_err(|e| crate::Error::Content(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Serialize to a TOML string (used by `folio init`)
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Content(e.to_string()))
    }

    /// Reject content the page cannot render
    pub fn validate(&self) -> crate::Result<()> {
        if self.info.name.trim().is_empty() {
            return Err(crate::Error::Content("info.name must not be empty".into()));
        }
        if self.titles.is_empty() {
            return Err(crate::Error::Content(
                "titles must contain at least one entry".into(),
            ));
        }
        if self.titles.iter().any(|t| t.trim().is_empty()) {
            return Err(crate::Error::Content("titles must not be blank".into()));
        }
        for group in &self.skills {
            if group.items.is_empty() {
                return Err(crate::Error::Content(format!(
                    "skill group '{}' has no items",
                    group.category
                )));
            }
        }
        Ok(())
    }

    /// Built-in demo content shown when no portfolio file exists
    pub fn sample() -> Self {
        Self {
            info: PersonalInfo {
                name: "Avery Collins".into(),
                headline: "Cybersecurity Analyst".into(),
                location: "Melbourne, Australia".into(),
                email: "avery@averycollins.dev".into(),
                phone: Some("0400 000 000".into()),
            },
            titles: vec![
                "Cybersecurity Analyst".into(),
                "SOC Specialist".into(),
                "Network Defender".into(),
                "Ethical Hacker".into(),
            ],
            hero: Hero {
                badge: Some("Available for hire".into()),
                tagline: "Securing digital infrastructure through proactive threat \
                          hunting, vulnerability management, and SIEM analysis."
                    .into(),
            },
            about: About {
                paragraphs: vec![
                    "Dedicated cybersecurity student combining academic rigor with \
                     hands-on lab experience in network defense, vulnerability \
                     assessment, and SIEM configuration."
                        .into(),
                    "My background in high-pressure service environments built the \
                     resilience and rapid problem-solving habits I now apply to \
                     digital security, from packet analysis to hardening web \
                     applications."
                        .into(),
                ],
                cards: vec![
                    StatCard {
                        title: "Cert IV".into(),
                        detail: "Completed".into(),
                    },
                    StatCard {
                        title: "BSec".into(),
                        detail: "In progress".into(),
                    },
                    StatCard {
                        title: "Open to work".into(),
                        detail: "Junior analyst / SOC roles".into(),
                    },
                ],
            },
            skills: vec![
                SkillGroup {
                    category: "Security Tools".into(),
                    items: vec![
                        "Splunk (SIEM)".into(),
                        "Wireshark".into(),
                        "Nmap".into(),
                        "Snort (IDS)".into(),
                        "Squid Proxy".into(),
                    ],
                },
                SkillGroup {
                    category: "Vulnerability Mgmt".into(),
                    items: vec![
                        "OWASP WebGoat".into(),
                        "DVWA".into(),
                        "SQL Injection".into(),
                        "XSS Mitigation".into(),
                        "Risk Assessment".into(),
                    ],
                },
                SkillGroup {
                    category: "Operating Systems".into(),
                    items: vec![
                        "Kali Linux".into(),
                        "Ubuntu".into(),
                        "Windows Server".into(),
                        "Active Directory".into(),
                    ],
                },
                SkillGroup {
                    category: "Networking".into(),
                    items: vec![
                        "TCP/IP".into(),
                        "Firewalls".into(),
                        "DNS / DHCP".into(),
                        "VPN Config".into(),
                        "Secure Coding".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "SIEM Configuration & Log Analysis".into(),
                    tech: vec!["Splunk".into(), "Log Analysis".into(), "Dashboards".into()],
                    description: "Configured Splunk to ingest and index logs from \
                                  network sources, with custom dashboards and alerts \
                                  that surface anomalous user behavior and intrusion \
                                  attempts in a simulated SOC environment."
                        .into(),
                },
                Project {
                    title: "Vulnerability Assessment Lab".into(),
                    tech: vec![
                        "OWASP WebGoat".into(),
                        "DVWA".into(),
                        "Burp Suite".into(),
                    ],
                    description: "Deployed a contained testing environment to identify \
                                  and exploit SQL injection, XSS, and brute-force \
                                  weaknesses, then documented remediation strategies \
                                  to patch and harden the applications."
                        .into(),
                },
                Project {
                    title: "Network Traffic Control".into(),
                    tech: vec!["Squid Proxy".into(), "Wireshark".into(), "ACLs".into()],
                    description: "Implemented Squid Proxy filtering on a controlled \
                                  network, restricted malicious domains with access \
                                  control lists, and inspected packet captures for \
                                  unencrypted traffic."
                        .into(),
                },
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Mechanic".into(),
                    company: "Family Business".into(),
                    period: "2022 - 2023".into(),
                    summary: "Customer-facing diagnostic work under time pressure; \
                              collaborated with the team to improve workflow \
                              efficiency."
                        .into(),
                },
                ExperienceEntry {
                    role: "Butcher".into(),
                    company: "Local Butcher".into(),
                    period: "2019 - 2021".into(),
                    summary: "Maintained strict cleanliness and health standards \
                              while managing inventory and storage conditions."
                        .into(),
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "Bachelor of Cybersecurity".into(),
                    school: "Swinburne University".into(),
                    period: "2025 - 2027".into(),
                    status: "In progress".into(),
                },
                EducationEntry {
                    degree: "Certificate IV in Cybersecurity".into(),
                    school: "Swinburne University".into(),
                    period: "2024".into(),
                    status: "Completed".into(),
                },
            ],
            links: vec![
                Link {
                    label: "GitHub".into(),
                    url: "https://github.com/averycollins".into(),
                },
                Link {
                    label: "LinkedIn".into(),
                    url: "https://linkedin.com/in/averycollins".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_validates() {
        Portfolio::sample().validate().unwrap();
    }

    #[test]
    fn test_empty_titles_rejected() {
        let mut portfolio = Portfolio::sample();
        portfolio.titles.clear();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut portfolio = Portfolio::sample();
        portfolio.titles.push("   ".into());
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut portfolio = Portfolio::sample();
        portfolio.info.name = String::new();
        assert!(portfolio.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_parses() {
        let portfolio: Portfolio = toml::from_str(
            r#"
            titles = ["Engineer"]

            [info]
            name = "A"
            headline = "B"
            location = "C"
            email = "a@b.c"
            "#,
        )
        .unwrap();
        portfolio.validate().unwrap();
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.hero.badge.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let sample = Portfolio::sample();
        let toml = sample.to_toml().unwrap();
        let parsed: Portfolio = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.info.name, sample.info.name);
        assert_eq!(parsed.titles, sample.titles);
        assert_eq!(parsed.projects.len(), sample.projects.len());
        assert_eq!(parsed.education.len(), sample.education.len());
    }
}
