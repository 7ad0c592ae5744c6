//! Static site content.
//!
//! Fixed strings and records rendered by the pages: service listings,
//! material specifications, terms, the proprietor profile, and the contact
//! surface. None of this is user-editable; it is the desktop equivalent of
//! hard-coded marketing copy.

use once_cell::sync::Lazy;

pub const STUDIO_NAME: &str = "Alora Interiors";
pub const STUDIO_TAGLINE: &str = "Beautiful Spaces";
pub const HERO_HEADLINE: &str = "Welcome to Alora Interiors";

pub const EXPLORE_INTRO: &str = "We define every kind of work we take on. The \
bulk of it is custom woodwork across all the categories below, and every image \
shown was produced on our own sites.";

/// A service the studio offers, shown as a card on the Services page.
#[derive(Debug, Clone)]
pub struct ServiceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// One line item in the material specification tables.
///
/// Materials carry different attributes per domain (boards have a thickness,
/// hardware has a brand, laminates a color), so each attribute is an explicit
/// optional field rather than a free-form map.
#[derive(Debug, Clone, Default)]
pub struct MaterialSpec {
    pub name: &'static str,
    pub grade: &'static str,
    pub thickness: Option<&'static str>,
    pub brand: Option<&'static str>,
    pub color: Option<&'static str>,
    pub kind: Option<&'static str>,
}

/// A titled group of material specifications.
#[derive(Debug, Clone)]
pub struct MaterialSection {
    pub category: &'static str,
    pub items: Vec<MaterialSpec>,
}

/// A titled list of terms shown on the Services page.
#[derive(Debug, Clone)]
pub struct TermsSection {
    pub category: &'static str,
    pub items: Vec<&'static str>,
}

/// A headline figure shown in the stats rows.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Contact details for the proprietor, exposed as plain outbound links.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
}

impl ContactInfo {
    /// `tel:` link for the phone dialer.
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// WhatsApp deep link. The number is used verbatim apart from stripping
    /// whitespace, which `wa.me` does not accept.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.whatsapp.split_whitespace().collect();
        format!("https://wa.me/{digits}")
    }

    /// `mailto:` link for the mail client.
    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROPRIETOR: Lazy<ContactInfo> = Lazy::new(|| ContactInfo {
    name: "Mr. Arvind Alora",
    role: "Founder & Chief Designer",
    phone: "+91 98765 43210",
    whatsapp: "+91 98765 43210",
    email: "studio@alorainteriors.example",
});

pub const PROPRIETOR_BIO: &str = "With over 20 years of experience in interior \
design, our proprietor has been the visionary behind the studio's success. His \
dedication to beautiful, functional spaces has transformed hundreds of homes \
and commercial properties, and every project reflects his commitment to \
excellence and client satisfaction.";

pub static STUDIO_STATS: Lazy<Vec<Stat>> = Lazy::new(|| {
    vec![
        Stat { label: "Experience", value: "20+ Years" },
        Stat { label: "Projects", value: "250+" },
        Stat { label: "Customer Satisfaction", value: "100%" },
    ]
});

pub static SERVICES: Lazy<Vec<ServiceCategory>> = Lazy::new(|| {
    vec![
        ServiceCategory {
            id: "residential-interiors",
            title: "Residential Interiors",
            icon: "🏠",
            description: "Complete interior design and execution for new homes and apartments.",
        },
        ServiceCategory {
            id: "home-renovations",
            title: "Home Renovations",
            icon: "🔨",
            description: "Transforming existing spaces with modern layouts, materials, and finishes.",
        },
        ServiceCategory {
            id: "commercial-spaces",
            title: "Commercial Spaces",
            icon: "🏢",
            description: "Professional, functional interiors for offices, retail, and more.",
        },
        ServiceCategory {
            id: "furniture",
            title: "Furniture",
            icon: "🪑",
            description: "Custom furniture design, from beds to dining tables.",
        },
        ServiceCategory {
            id: "modular-solutions",
            title: "Modular Solutions",
            icon: "📦",
            description: "Efficient modular kitchens, wardrobes, and storage systems.",
        },
        ServiceCategory {
            id: "estimation",
            title: "Estimation",
            icon: "📊",
            description: "Free estimations for the scope of your project.",
        },
    ]
});

pub static MATERIALS: Lazy<Vec<MaterialSection>> = Lazy::new(|| {
    vec![
        MaterialSection {
            category: "Wood & Boards",
            items: vec![
                MaterialSpec {
                    name: "Club-grade Plywood",
                    grade: "CM/L-8435685",
                    thickness: Some("19mm"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Gurjan Plywood",
                    grade: "710 BWP Grade",
                    thickness: Some("19mm"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Particle Board",
                    grade: "Fine Wood",
                    thickness: Some("25mm"),
                    ..Default::default()
                },
            ],
        },
        MaterialSection {
            category: "Hardware & Accessories",
            items: vec![
                MaterialSpec {
                    name: "Hinges",
                    grade: "Soft Close",
                    brand: Some("Hettich/Blum"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Drawer Channels",
                    grade: "Full Extension",
                    brand: Some("Hettich"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Handles & Knobs",
                    grade: "Stainless Steel/Aluminum",
                    brand: Some("Various"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Locks",
                    grade: "Multi-Point",
                    brand: Some("Yale/Godrej"),
                    ..Default::default()
                },
            ],
        },
        MaterialSection {
            category: "Finishes & Surfaces",
            items: vec![
                MaterialSpec {
                    name: "Laminates (liner)",
                    grade: "0.8mm",
                    color: Some("White"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Laminates (outer)",
                    grade: "1mm",
                    brand: Some("Virgo, Croma, Greenlam, Merino"),
                    ..Default::default()
                },
            ],
        },
        MaterialSection {
            category: "Glass",
            items: vec![
                MaterialSpec {
                    name: "Toughened Glass",
                    grade: "5mm",
                    kind: Some("Glass"),
                    ..Default::default()
                },
                MaterialSpec {
                    name: "Frosted Glass",
                    grade: "8mm",
                    kind: Some("Glass"),
                    ..Default::default()
                },
            ],
        },
    ]
});

pub static TERMS: Lazy<Vec<TermsSection>> = Lazy::new(|| {
    vec![
        TermsSection {
            category: "Payment Terms",
            items: vec![
                "60% advance by cheque or NEFT on confirmation",
                "30% once the structure is formed",
                "5% at the time of hardware fitting",
                "Final 5% after completion, at handover",
                "Payment modes: cash, bank transfer, cheque",
            ],
        },
        TermsSection {
            category: "Service Guidelines",
            items: vec![
                "Site visit and measurement are taken before quotation",
                "The quotation must be approved by the client before work begins",
                "Once approved, the quotation is not revised",
                "Any additional scope of work is charged extra",
                "Damage from rough usage after handover is not covered",
                "Three days' notice is required to start on site",
            ],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_keeps_number_verbatim() {
        assert_eq!(PROPRIETOR.tel_link(), "tel:+91 98765 43210");
    }

    #[test]
    fn whatsapp_link_strips_whitespace() {
        assert_eq!(PROPRIETOR.whatsapp_link(), "https://wa.me/+919876543210");
    }

    #[test]
    fn mailto_link_targets_studio_address() {
        assert_eq!(
            PROPRIETOR.mailto_link(),
            "mailto:studio@alorainteriors.example"
        );
    }

    #[test]
    fn service_ids_are_unique() {
        let mut ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn material_sections_are_nonempty() {
        assert!(!MATERIALS.is_empty());
        for section in MATERIALS.iter() {
            assert!(!section.items.is_empty(), "{} is empty", section.category);
            for item in &section.items {
                assert!(!item.name.is_empty());
                assert!(!item.grade.is_empty());
            }
        }
    }
}
