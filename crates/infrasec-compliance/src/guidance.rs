//! # Network Architecture Guidance
//!
//! Fixed design recommendations for three kinds of organizational network.
//! The advice is static: one title and five recommendations per
//! environment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when a selection does not name a known environment.
pub const INVALID_SELECTION_MESSAGE: &str = "❗ Please select a valid network type.";

/// Kind of network environment an organization operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkEnvironment {
    /// Small office or branch office.
    SmallOffice,
    /// Multi-building enterprise campus.
    EnterpriseCampus,
    /// On-premises network extended into a public cloud.
    CloudHybrid,
}

/// Guidance for one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkGuidance {
    /// Heading for the recommendation list.
    pub title: &'static str,
    /// Recommended setup items.
    pub recommendations: &'static [&'static str],
}

impl NetworkGuidance {
    /// Render as a Markdown heading followed by a bullet list.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("### {}\n", self.title);
        for item in self.recommendations {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
        out
    }
}

impl NetworkEnvironment {
    /// All environments in menu order.
    pub fn all() -> &'static [NetworkEnvironment] {
        &[Self::SmallOffice, Self::EnterpriseCampus, Self::CloudHybrid]
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallOffice => "Small Office / Branch Office",
            Self::EnterpriseCampus => "Enterprise Campus Network",
            Self::CloudHybrid => "Cloud-Hybrid Environment",
        }
    }

    /// Short command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::SmallOffice => "small-office",
            Self::EnterpriseCampus => "enterprise-campus",
            Self::CloudHybrid => "cloud-hybrid",
        }
    }

    /// Recommended setup for this environment.
    pub fn guidance(&self) -> NetworkGuidance {
        match self {
            Self::SmallOffice => NetworkGuidance {
                title: "🧩 Recommended Setup for Small Office",
                recommendations: &[
                    "Use a Unified Threat Management (UTM) device for firewall + IDS/IPS",
                    "VPN-enabled router with VLAN segmentation",
                    "Secure Wi-Fi with WPA3 and MAC filtering",
                    "Setup site-to-site VPN for HQ access",
                    "Cloud-managed switch (Layer 2 or 3)",
                ],
            },
            Self::EnterpriseCampus => NetworkGuidance {
                title: "🏢 Recommended Setup for Enterprise Campus",
                recommendations: &[
                    "Core-Distribution-Access layer topology",
                    "Redundant core switches with OSPF/BGP",
                    "NAC (Network Access Control) integration",
                    "Firewalls between internal zones and internet edge",
                    "SD-WAN for branch site integration",
                ],
            },
            Self::CloudHybrid => NetworkGuidance {
                title: "☁️ Hybrid Network Setup",
                recommendations: &[
                    "Site-to-site VPN or ExpressRoute (Azure)",
                    "Hub-and-spoke architecture for segmentation",
                    "Use NSGs and Azure Firewall for traffic control",
                    "Enforce routing tables and DNS forwarding",
                    "Integrate with on-prem AD/LDAP securely",
                ],
            },
        }
    }
}

impl std::fmt::Display for NetworkEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection that names no known environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("❗ Please select a valid network type.")]
pub struct InvalidSelection;

impl FromStr for NetworkEnvironment {
    type Err = InvalidSelection;

    /// Accepts the menu label or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|env| {
                env.label().eq_ignore_ascii_case(wanted) || env.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or(InvalidSelection)
    }
}
