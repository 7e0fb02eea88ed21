//! Educational content definitions.

/// A glossary term with a real-world example.
#[derive(Debug, Clone, Copy)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
}

/// A practical fraud-avoidance tip.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
}

/// An external resource. URLs are rendered as text only.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "Ponzi Scheme",
        definition: "A fraudulent investment operation that pays returns to existing \
            investors using capital from new investors, rather than from legitimate \
            business operations.",
        example: "Bernie Madoff's investment scandal was one of the largest Ponzi \
            schemes in history.",
    },
    GlossaryEntry {
        term: "Pyramid Scheme",
        definition: "A business model that recruits members via a promise of payments \
            for enrolling others into the scheme, rather than supplying investments or \
            sale of products.",
        example: "Multi-level marketing schemes that focus more on recruitment than \
            product sales.",
    },
    GlossaryEntry {
        term: "MLM (Multi-Level Marketing)",
        definition: "A legitimate business strategy where revenue is generated from a \
            non-salaried workforce selling products, but can become illegal if it \
            focuses primarily on recruitment.",
        example: "Companies like Amway and Tupperware use MLM models legally.",
    },
    GlossaryEntry {
        term: "Red Flags",
        definition: "Warning signs that indicate a potential scam or fraudulent \
            investment opportunity.",
        example: "Guaranteed high returns, pressure to recruit others, lack of \
            transparency.",
    },
];

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Verify Before You Invest",
        description: "Always check if the company is registered with SEBI, RBI, or \
            other regulatory bodies.",
    },
    Tip {
        title: "Too Good to Be True",
        description: "If returns seem unrealistically high with no risk, it's likely \
            a scam.",
    },
    Tip {
        title: "Pressure Tactics",
        description: "Legitimate investments don't require immediate decisions or \
            high-pressure sales.",
    },
    Tip {
        title: "Transparency Matters",
        description: "Real businesses provide clear information about their operations \
            and financials.",
    },
    Tip {
        title: "Recruitment Focus",
        description: "Be wary of schemes that emphasize recruiting others over actual \
            products or services.",
    },
    Tip {
        title: "Documentation",
        description: "Always get proper documentation and receipts for any investment.",
    },
];

pub const RESOURCES: &[Resource] = &[
    Resource {
        title: "SEBI Investor Portal",
        description: "Securities and Exchange Board of India - Official investor \
            protection portal",
        url: "https://www.sebi.gov.in",
    },
    Resource {
        title: "RBI Consumer Education",
        description: "Reserve Bank of India - Banking and financial awareness",
        url: "https://www.rbi.org.in",
    },
    Resource {
        title: "Cybercrime Reporting",
        description: "Report financial fraud and cybercrime to authorities",
        url: "https://cybercrime.gov.in",
    },
    Resource {
        title: "PFMS Scholarship",
        description: "Public Financial Management System - Government schemes \
            verification",
        url: "https://pfms.nic.in",
    },
];

/// Red flags shown on the home screen.
pub const WARNING_SIGNS: &[&str] = &[
    "Guaranteed high returns with little or no risk",
    "Focus on recruiting others instead of real products/services",
    "No clear info about how the business earns money",
    "Pressure to act fast ('limited slots', 'urgent')",
    "No registered business or regulatory license",
];

/// Why participating is dangerous even for early joiners.
pub const DANGERS: &[&str] = &[
    "You will likely lose your money when it collapses",
    "It's illegal - you can be held responsible",
    "You might unknowingly scam your friends and family",
    "It destroys trust and damages lives",
];

pub const SAFE_ALTERNATIVES: &[&str] = &[
    "Invest in legal, regulated platforms (mutual funds, SIPs, etc.)",
    "Learn financial literacy",
    "Use trusted financial apps and advisors",
    "Report suspicious schemes to SEBI or your local cybercrime cell",
];
